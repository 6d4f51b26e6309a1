// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Split-orientation JSON: `{"columns": [...], "index": [...], "data": [[...], ...]}`.
//!
//! Dates are written as ISO datetimes at midnight and revenue as a decimal
//! string, so amounts keep every digit. Decoding also accepts numeric revenue
//! and looks columns up by name, so frames carrying extra columns load too.

use crate::models::{Dataset, Record};
use crate::parser::REQUIRED_COLUMNS;
use crate::utils::{coerce_date, coerce_revenue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterchangeError {
    #[error("invalid interchange JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("interchange frame has no '{0}' column")]
    MissingColumn(&'static str),
    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("row {row}: invalid date {value}")]
    InvalidDate { row: usize, value: Value },
    #[error("row {row}: invalid revenue {value}")]
    InvalidRevenue { row: usize, value: Value },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitFrame {
    pub columns: Vec<String>,
    #[serde(default)]
    pub index: Vec<usize>,
    pub data: Vec<Vec<Value>>,
}

impl From<&Dataset> for SplitFrame {
    fn from(ds: &Dataset) -> Self {
        let data = ds
            .iter()
            .map(|r| {
                vec![
                    Value::String(r.date.format("%Y-%m-%dT00:00:00.000").to_string()),
                    Value::String(r.product.clone()),
                    Value::String(r.category.clone()),
                    Value::String(r.revenue.normalize().to_string()),
                ]
            })
            .collect();
        Self {
            columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            index: (0..ds.len()).collect(),
            data,
        }
    }
}

impl TryFrom<SplitFrame> for Dataset {
    type Error = InterchangeError;

    fn try_from(frame: SplitFrame) -> Result<Self, Self::Error> {
        let find = |name: &'static str| {
            frame
                .columns
                .iter()
                .position(|c| c.trim().eq_ignore_ascii_case(name))
                .ok_or(InterchangeError::MissingColumn(name))
        };
        let [date_col, product_col, category_col, revenue_col] = REQUIRED_COLUMNS;
        let (date_i, product_i, category_i, revenue_i) = (
            find(date_col)?,
            find(product_col)?,
            find(category_col)?,
            find(revenue_col)?,
        );

        let mut records = Vec::with_capacity(frame.data.len());
        for (row, values) in frame.data.iter().enumerate() {
            if values.len() != frame.columns.len() {
                return Err(InterchangeError::RaggedRow {
                    row,
                    found: values.len(),
                    expected: frame.columns.len(),
                });
            }
            let date = values[date_i]
                .as_str()
                .and_then(|s| coerce_date(s, &[]))
                .ok_or_else(|| InterchangeError::InvalidDate {
                    row,
                    value: values[date_i].clone(),
                })?;
            let revenue = match &values[revenue_i] {
                Value::Number(n) => coerce_revenue(&n.to_string()),
                Value::String(s) => coerce_revenue(s),
                _ => None,
            }
            .ok_or_else(|| InterchangeError::InvalidRevenue {
                row,
                value: values[revenue_i].clone(),
            })?;
            records.push(Record::new(
                date,
                text(&values[product_i]),
                text(&values[category_i]),
                revenue,
            ));
        }
        Ok(Dataset::new(records))
    }
}

fn text(v: &Value) -> String {
    match v {
        Value::String(s) => s.trim().to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn to_json(ds: &Dataset) -> Result<String, InterchangeError> {
    Ok(serde_json::to_string(&SplitFrame::from(ds))?)
}

pub fn from_json(s: &str) -> Result<Dataset, InterchangeError> {
    let frame: SplitFrame = serde_json::from_str(s)?;
    Dataset::try_from(frame)
}
