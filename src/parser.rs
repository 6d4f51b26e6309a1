// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Decoding of uploaded sales CSVs into a [`Dataset`].
//!
//! The header row must name every column in [`REQUIRED_COLUMNS`]; lookup is
//! trimmed and case-insensitive and any other column is ignored. Each cell is
//! coerced to its column type while reading, so a bad date or amount fails the
//! whole upload instead of surfacing later as a hole in a chart.

use crate::models::{Dataset, Record};
use crate::utils::{coerce_date, coerce_revenue};
use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;
use tracing::debug;

/// Required header names, in the order they map onto [`Record`] fields:
/// date, text, text, decimal.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Date", "Product", "Category", "Revenue"];

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("file is not valid UTF-8 text: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("file is empty, expected a header row")]
    Empty,
    #[error("malformed CSV at line {line}: {source}")]
    Malformed {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("invalid date '{value}' at line {line}")]
    InvalidDate { line: u64, value: String },
    #[error("invalid revenue '{value}' at line {line}")]
    InvalidRevenue { line: u64, value: String },
}

impl ParseError {
    fn malformed(source: csv::Error) -> Self {
        let line = source.position().map(|p| p.line()).unwrap_or(1);
        ParseError::Malformed { line, source }
    }
}

#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    date: usize,
    product: usize,
    category: usize,
    revenue: usize,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord) -> Result<Self, ParseError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or(ParseError::MissingColumn(name))
        };
        let [date, product, category, revenue] = REQUIRED_COLUMNS;
        Ok(Self {
            date: find(date)?,
            product: find(product)?,
            category: find(category)?,
            revenue: find(revenue)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SalesCsvParser {
    extra_date_formats: Vec<String>,
}

impl SalesCsvParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Additional chrono formats tried after the built-in date layouts.
    pub fn with_date_formats(formats: Vec<String>) -> Self {
        Self {
            extra_date_formats: formats,
        }
    }

    pub fn parse(&self, bytes: &[u8]) -> Result<Dataset, ParseError> {
        let text = std::str::from_utf8(bytes)?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        if text.trim().is_empty() {
            return Err(ParseError::Empty);
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());
        let headers = rdr.headers().map_err(ParseError::malformed)?.clone();
        let cols = ColumnMap::resolve(&headers)?;

        let mut records = Vec::new();
        for result in rdr.records() {
            let rec = result.map_err(ParseError::malformed)?;
            let line = rec.position().map(|p| p.line()).unwrap_or(0);
            records.push(self.record(&rec, cols, line)?);
        }
        debug!(rows = records.len(), "parsed sales csv");
        Ok(Dataset::new(records))
    }

    fn record(&self, rec: &StringRecord, cols: ColumnMap, line: u64) -> Result<Record, ParseError> {
        let cell = |idx: usize| rec.get(idx).unwrap_or("");

        let date_raw = cell(cols.date);
        let date = coerce_date(date_raw, &self.extra_date_formats).ok_or_else(|| {
            ParseError::InvalidDate {
                line,
                value: date_raw.to_string(),
            }
        })?;
        let revenue_raw = cell(cols.revenue);
        let revenue = coerce_revenue(revenue_raw).ok_or_else(|| ParseError::InvalidRevenue {
            line,
            value: revenue_raw.to_string(),
        })?;

        Ok(Record::new(
            date,
            cell(cols.product).trim(),
            cell(cols.category).trim(),
            revenue,
        ))
    }
}

/// Parse with the built-in date layouts only.
pub fn parse(bytes: &[u8]) -> Result<Dataset, ParseError> {
    SalesCsvParser::default().parse(bytes)
}
