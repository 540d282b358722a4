//! Result printing for text and JSON output.

use anyhow::Result;
use colored::Colorize;
use mobius::StripParams;
use serde::Serialize;

use crate::summary::SceneSummary;

/// Everything one run measured.
#[derive(Debug, Serialize)]
pub struct Report {
    pub params: StripParams,
    pub surface_area: f64,
    pub edge_length: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_length_closed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<SceneSummary>,
}

/// Print the measured values, four decimal places each.
pub fn print_text(report: &Report) {
    println!("Surface area: {:.4}", report.surface_area);
    println!("Edge length: {:.4}", report.edge_length);
    if let Some(closed) = report.edge_length_closed {
        println!("{} {:.4}", "Closed edge length:".dimmed(), closed);
    }
}

/// Print the report as pretty JSON.
pub fn print_json(report: &Report) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
