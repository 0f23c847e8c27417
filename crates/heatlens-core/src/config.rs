use crate::error::{HeatlensError, Result};
use crate::models::{CameraPose, Coordinate, MetricDomains, RenderStyle, ZoneBreakpoints};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Which surface adapter the explorer mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKind {
    /// Interactive in-memory canvas renderer (heatmaps, markers, polygons).
    Canvas,
    /// Static fallback that only mirrors selection; used when no map
    /// credential is configured.
    #[default]
    Placeholder,
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceKind::Canvas => f.write_str("canvas"),
            SurfaceKind::Placeholder => f.write_str("placeholder"),
        }
    }
}

impl FromStr for SurfaceKind {
    type Err = HeatlensError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "canvas" => Ok(SurfaceKind::Canvas),
            "placeholder" | "none" => Ok(SurfaceKind::Placeholder),
            other => Err(HeatlensError::ConfigInvalid {
                key: "surface".to_string(),
                reason: format!("Invalid surface kind: {}. Use canvas or placeholder", other),
            }),
        }
    }
}

/// Layered configuration for the map explorer
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    pub map_token: ConfigValue<Option<String>>,
    pub surface: ConfigValue<SurfaceKind>,
    pub breakpoints: ConfigValue<ZoneBreakpoints>,
    pub domains: ConfigValue<MetricDomains>,
    pub overview: ConfigValue<CameraPose>,
    pub detail_zoom: ConfigValue<f64>,
    pub style: ConfigValue<RenderStyle>,
}

impl ExplorerConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            map_token: ConfigValue::new(None, ConfigSource::Default),
            surface: ConfigValue::new(SurfaceKind::Placeholder, ConfigSource::Default),
            breakpoints: ConfigValue::new(ZoneBreakpoints::default(), ConfigSource::Default),
            domains: ConfigValue::new(MetricDomains::default(), ConfigSource::Default),
            // Maharashtra overview pose from the reference dataset.
            overview: ConfigValue::new(
                CameraPose {
                    center: Coordinate::new(19.7515, 75.7139),
                    zoom: 7.0,
                },
                ConfigSource::Default,
            ),
            detail_zoom: ConfigValue::new(10.0, ConfigSource::Default),
            style: ConfigValue::new(RenderStyle::default(), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| HeatlensError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| HeatlensError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        // Update values from file
        if let Some(token) = file_config.map_token {
            self.map_token.update(Some(token), ConfigSource::File);
        }

        if let Some(surface) = file_config.surface {
            self.surface.update(surface.parse()?, ConfigSource::File);
        }

        if let Some([b1, b2, b3]) = file_config.breakpoints {
            self.breakpoints.update(ZoneBreakpoints::new(b1, b2, b3)?, ConfigSource::File);
        }

        if let Some(domains) = file_config.domains {
            self.domains.update(domains, ConfigSource::File);
        }

        if let Some(overview) = file_config.overview {
            self.overview.update(overview, ConfigSource::File);
        }

        if let Some(detail_zoom) = file_config.detail_zoom {
            self.detail_zoom.update(detail_zoom, ConfigSource::File);
        }

        if let Some(style) = file_config.style {
            self.style.update(style, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // HEATLENS_MAP_TOKEN
        if let Ok(token) = env::var("HEATLENS_MAP_TOKEN") {
            if !token.is_empty() {
                self.map_token.update(Some(token), ConfigSource::Environment);
            }
        }

        // HEATLENS_SURFACE
        if let Ok(surface_str) = env::var("HEATLENS_SURFACE") {
            match surface_str.parse::<SurfaceKind>() {
                Ok(kind) => self.surface.update(kind, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid HEATLENS_SURFACE value '{}': expected canvas or placeholder",
                    surface_str
                ),
            }
        }

        // HEATLENS_BREAKPOINTS
        if let Ok(bp_str) = env::var("HEATLENS_BREAKPOINTS") {
            match parse_breakpoints(&bp_str) {
                Ok(bp) => self.breakpoints.update(bp, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid HEATLENS_BREAKPOINTS value '{}': expected ascending triple like 7.0,7.75,8.0",
                    bp_str
                ),
            }
        }

        // HEATLENS_DETAIL_ZOOM
        if let Ok(zoom_str) = env::var("HEATLENS_DETAIL_ZOOM") {
            match zoom_str.parse::<f64>() {
                Ok(zoom) => self.detail_zoom.update(zoom, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid HEATLENS_DETAIL_ZOOM value '{}': expected a number",
                    zoom_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(token) = overrides.map_token {
            self.map_token.update(Some(token), ConfigSource::Cli);
        }

        if let Some(surface) = overrides.surface {
            self.surface.update(surface, ConfigSource::Cli);
        }

        if let Some(breakpoints) = overrides.breakpoints {
            self.breakpoints.update(breakpoints, ConfigSource::Cli);
        }

        if let Some(detail_zoom) = overrides.detail_zoom {
            self.detail_zoom.update(detail_zoom, ConfigSource::Cli);
        }
    }

    /// Cross-field validation, run once after all layers are applied.
    pub fn validate(&self) -> Result<()> {
        if self.detail_zoom.value <= self.overview.value.zoom {
            return Err(HeatlensError::ConfigInvalid {
                key: "detail_zoom".to_string(),
                reason: format!(
                    "detail zoom {} must exceed overview zoom {}",
                    self.detail_zoom.value, self.overview.value.zoom
                ),
            });
        }
        Ok(())
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        let token_display = match &self.map_token.value {
            Some(_) => "set (redacted)".to_string(),
            None => "unset".to_string(),
        };
        map.insert("map_token".to_string(), (token_display, self.map_token.source));

        map.insert(
            "surface".to_string(),
            (self.surface.value.to_string(), self.surface.source),
        );

        let (b1, b2, b3) = self.breakpoints.value.as_triple();
        map.insert(
            "breakpoints".to_string(),
            (format!("{}/{}/{}", b1, b2, b3), self.breakpoints.source),
        );

        let overview = self.overview.value;
        map.insert(
            "overview".to_string(),
            (
                format!(
                    "({}, {}) @ z{}",
                    overview.center.lat, overview.center.lng, overview.zoom
                ),
                self.overview.source,
            ),
        );

        map.insert(
            "detail_zoom".to_string(),
            (format!("{}", self.detail_zoom.value), self.detail_zoom.source),
        );

        let d = self.domains.value;
        map.insert(
            "domains".to_string(),
            (
                format!(
                    "uhi [{}, {}] / health [{}, {}] / vegetation [{}, {}]",
                    d.uhi.min, d.uhi.max, d.health.min, d.health.max, d.vegetation.min, d.vegetation.max
                ),
                self.domains.source,
            ),
        );

        let style = self.style.value;
        map.insert(
            "style".to_string(),
            (
                format!(
                    "heat {}px @ {} / boundary {} ({} dimmed)",
                    style.heat_radius_px,
                    style.heat_opacity,
                    style.boundary_opacity,
                    style.boundary_dimmed_opacity
                ),
                self.style.source,
            ),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    map_token: Option<String>,
    surface: Option<String>,
    breakpoints: Option<[f64; 3]>,
    domains: Option<MetricDomains>,
    overview: Option<CameraPose>,
    detail_zoom: Option<f64>,
    style: Option<RenderStyle>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub map_token: Option<String>,
    pub surface: Option<SurfaceKind>,
    pub breakpoints: Option<ZoneBreakpoints>,
    pub detail_zoom: Option<f64>,
}

/// Parse a comma-separated ascending breakpoint triple
pub fn parse_breakpoints(s: &str) -> Result<ZoneBreakpoints> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| HeatlensError::ConfigInvalid {
            key: "breakpoints".to_string(),
            reason: format!("Invalid breakpoints: {}. Use three numbers like 7.0,7.75,8.0", s),
        })?;

    match parts.as_slice() {
        [b1, b2, b3] => ZoneBreakpoints::new(*b1, *b2, *b3),
        _ => Err(HeatlensError::ConfigInvalid {
            key: "breakpoints".to_string(),
            reason: format!("Expected exactly three breakpoints, got {}", parts.len()),
        }),
    }
}
