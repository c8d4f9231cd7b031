use std::io;

use serde::Serialize;

use super::{BreakdownItem, RatingResult};

#[derive(Serialize)]
struct BreakdownRow<'a> {
    factor: &'a str,
    raw_score: f64,
    cap: f64,
    weight: f64,
    contribution: f64,
}

impl<'a> From<&'a BreakdownItem> for BreakdownRow<'a> {
    fn from(item: &'a BreakdownItem) -> Self {
        Self {
            factor: item.factor.label(),
            raw_score: item.raw_score,
            cap: item.cap,
            weight: item.weight,
            contribution: item.contribution,
        }
    }
}

impl RatingResult {
    /// Breakdown row for one factor.
    pub fn factor(&self, factor: super::Factor) -> Option<&BreakdownItem> {
        self.breakdown.iter().find(|item| item.factor == factor)
    }

    /// Write the breakdown as CSV, one row per factor in breakdown order.
    pub fn write_breakdown_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut writer = csv::Writer::from_writer(writer);
        for item in &self.breakdown {
            writer.serialize(BreakdownRow::from(item))?;
        }
        writer.flush()?;
        Ok(())
    }
}
