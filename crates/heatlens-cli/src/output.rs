use console::style;
use heatlens_core::config::ConfigSource;
use heatlens_core::models::{ClusterSummary, Zone};
use serde::Serialize;
use std::fmt::Display;
use tabled::{settings::Style, Table, Tabled};

/// Output format mode
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Human,
    Json,
}

pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self {
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Human
            },
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    pub fn success(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                println!("{} {}", style("✓").green().bold(), message);
            }
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "status": "success",
                    "message": message.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            }
        }
    }

    pub fn info(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                println!("{} {}", style("ℹ").blue().bold(), message);
            }
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "status": "info",
                    "message": message.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            }
        }
    }

    pub fn warning(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                eprintln!("{} {}", style("⚠").yellow().bold(), message);
            }
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "status": "warning",
                    "message": message.to_string(),
                });
                eprintln!("{}", serde_json::to_string_pretty(&output).unwrap());
            }
        }
    }

    pub fn table<T: Tabled>(&self, data: Vec<T>) {
        if let OutputFormat::Human = self.format {
            if data.is_empty() {
                println!("{}", style("(empty)").dim());
                return;
            }
            let mut table = Table::new(data);
            table.with(Style::rounded());
            println!("{table}");
        }
    }

    pub fn json<T: Serialize>(&self, value: &T) {
        println!("{}", serde_json::to_string_pretty(value).unwrap());
    }
}

/// One row of the `clusters` table.
#[derive(Tabled)]
pub struct ClusterRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Zone")]
    pub zone: String,
    #[tabled(rename = "UHI")]
    pub uhi: f64,
    #[tabled(rename = "Health")]
    pub health: f64,
    #[tabled(rename = "Veg %")]
    pub vegetation: f64,
}

impl From<&ClusterSummary> for ClusterRow {
    fn from(summary: &ClusterSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            name: summary.name.clone(),
            zone: zone_badge(summary.zone),
            uhi: summary.metrics.uhi_score,
            health: summary.metrics.health_risk,
            vegetation: summary.metrics.vegetation_pct,
        }
    }
}

/// One row of the `status` table.
#[derive(Tabled)]
pub struct ConfigRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}

pub fn source_label(source: ConfigSource) -> &'static str {
    match source {
        ConfigSource::Default => "default",
        ConfigSource::File => "file",
        ConfigSource::Environment => "environment",
        ConfigSource::Cli => "cli",
    }
}

pub fn zone_badge(zone: Zone) -> String {
    let label = zone.label();
    match zone {
        Zone::Hot => style(label).red().to_string(),
        Zone::ModeratelyHot => style(label).color256(208).to_string(),
        Zone::Warm => style(label).yellow().to_string(),
        Zone::Cold => style(label).green().to_string(),
    }
}
