//! Fixed deposit ledger import
//!
//! Current savings for a plan are the sum of the user's fixed deposits. The
//! ledger itself lives elsewhere; this reads a CSV export of it.
//! Format: amount,date,description (columns located by header name)

use std::io::Read;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// A single fixed deposit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedDeposit {
    pub amount: f64,
    pub date: NaiveDate,
    pub description: Option<String>,
}

/// Parse a fixed deposit CSV export
pub fn parse_deposits_csv<R: Read>(reader: R) -> Result<Vec<FixedDeposit>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let amount_col = column(&headers, "amount")?;
    let date_col = column(&headers, "date")?;
    let description_col = column(&headers, "description").ok();

    let mut deposits = Vec::new();

    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        // Header is line 1
        let line = index + 2;

        let amount_str = record
            .get(amount_col)
            .ok_or_else(|| Error::Import(format!("Missing amount on line {}", line)))?;
        let amount = parse_amount(amount_str).ok_or_else(|| {
            Error::Import(format!("Line {}: unable to parse amount: {}", line, amount_str))
        })?;
        if amount < 0.0 {
            return Err(Error::Import(format!(
                "Line {}: deposit amount cannot be negative ({})",
                line, amount
            )));
        }

        let date_str = record
            .get(date_col)
            .ok_or_else(|| Error::Import(format!("Missing date on line {}", line)))?;
        let date = parse_date(date_str).ok_or_else(|| {
            Error::Import(format!("Line {}: unable to parse date: {}", line, date_str))
        })?;

        let description = description_col
            .and_then(|i| record.get(i))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        deposits.push(FixedDeposit {
            amount,
            date,
            description,
        });
    }

    debug!("Parsed {} fixed deposits", deposits.len());
    Ok(deposits)
}

/// Total balance across deposits
pub fn total_savings(deposits: &[FixedDeposit]) -> f64 {
    deposits.iter().map(|d| d.amount).sum()
}

fn column(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::Import(format!("Missing '{}' column", name)))
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d", // 2024-01-15
        "%d/%m/%Y", // 15/01/2024
        "%d-%m-%Y", // 15-01-2024
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }

    None
}

/// Parse an amount string, handling the rupee sign and digit grouping
fn parse_amount(s: &str) -> Option<f64> {
    let cleaned: String = s.trim().replace(['₹', ',', ' '], "");

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
