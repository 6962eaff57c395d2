//! Run summary

use crate::error::Result;
use crate::metrics::{TrendMetrics, ValidityMetrics};
use serde::Serialize;
use std::fmt;

/// Validity of the decision rule and, optionally, of human raters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    /// Decision rule name
    pub rule: String,
    /// Number of simulated graphs
    pub graphs: usize,
    pub seed: u64,
    pub method: ValidityMetrics,
    pub method_by_trend: Vec<TrendMetrics>,
    pub raters: Option<ValidityMetrics>,
    pub raters_by_trend: Option<Vec<TrendMetrics>>,
}

impl SimulationReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn cell(rate: Option<f64>) -> String {
    rate.map_or_else(|| "-".to_string(), |r| format!("{r:.3}"))
}

fn write_row(f: &mut fmt::Formatter<'_>, name: &str, m: &ValidityMetrics) -> fmt::Result {
    writeln!(
        f,
        "  {:<10} {:>9} {:>9} {:>9}",
        name,
        cell(m.agreement),
        cell(m.type_i_error),
        cell(m.power)
    )
}

fn write_trends(f: &mut fmt::Formatter<'_>, name: &str, rows: &[TrendMetrics]) -> fmt::Result {
    writeln!(f, "{name} by trend:")?;
    writeln!(f, "  {:<10} {:>9} {:>9}", "trend", "type I", "power")?;
    for row in rows {
        writeln!(
            f,
            "  {:<10} {:>9} {:>9}",
            format!("{}°", row.trend),
            cell(row.metrics.type_i_error),
            cell(row.metrics.power)
        )?;
    }
    Ok(())
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validity over {} graphs (seed {})", self.graphs, self.seed)?;
        writeln!(
            f,
            "  {:<10} {:>9} {:>9} {:>9}",
            "", "agreement", "type I", "power"
        )?;
        write_row(f, &self.rule, &self.method)?;
        if let Some(raters) = &self.raters {
            write_row(f, "raters", raters)?;
        }
        write_trends(f, &self.rule, &self.method_by_trend)?;
        if let Some(rows) = &self.raters_by_trend {
            write_trends(f, "raters", rows)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(power: Option<f64>) -> ValidityMetrics {
        ValidityMetrics {
            n: 4,
            agreement: Some(0.75),
            type_i_error: Some(0.0),
            power,
        }
    }

    fn report() -> SimulationReport {
        SimulationReport {
            rule: "CDC".to_string(),
            graphs: 4,
            seed: 42,
            method: metrics(Some(0.5)),
            method_by_trend: vec![TrendMetrics {
                trend: 15.0,
                metrics: metrics(None),
            }],
            raters: None,
            raters_by_trend: None,
        }
    }

    #[test]
    fn test_display_table() {
        let text = report().to_string();
        assert!(text.starts_with("Validity over 4 graphs (seed 42)"));
        assert!(text.contains("CDC            0.750     0.000     0.500"));
        assert!(text.contains("CDC by trend:"));
        assert!(text.contains("15°"));
        assert!(!text.contains("raters"));
    }

    #[test]
    fn test_json_uses_null_for_missing_rates() {
        let json = report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rule"], "CDC");
        assert_eq!(value["method"]["power"], 0.5);
        assert!(value["method_by_trend"][0]["metrics"]["power"].is_null());
        assert!(value["raters"].is_null());
    }
}
