// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{Aggregates, aggregate};
use crate::filter::{FilterSelection, filter};
use crate::interchange::{self, InterchangeError};
use crate::models::{Dataset, Granularity};
use crate::parser::SalesCsvParser;
use crate::sample::sample_dataset;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

/// Outcome of the most recent upload, shown to the user as a status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UploadStatus {
    Sample,
    Loaded { rows: usize },
    FellBack { reason: String },
}

impl UploadStatus {
    pub fn is_warning(&self) -> bool {
        matches!(self, UploadStatus::FellBack { .. })
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadStatus::Sample => write!(f, "Showing sample data"),
            UploadStatus::Loaded { .. } => write!(f, "File uploaded successfully"),
            UploadStatus::FellBack { reason } => {
                write!(f, "Error loading file. Using sample data. ({})", reason)
            }
        }
    }
}

/// Values used to populate the category and date-range widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
}

/// Holds the single active dataset for one user session.
///
/// Uploads replace the dataset wholesale; a rejected upload resets it to the
/// built-in sample.
#[derive(Debug, Clone)]
pub struct Session {
    parser: SalesCsvParser,
    dataset: Dataset,
    status: UploadStatus,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SalesCsvParser::default())
    }
}

impl Session {
    pub fn new(parser: SalesCsvParser) -> Self {
        let mut s = Self {
            parser,
            dataset: Dataset::default(),
            status: UploadStatus::Sample,
        };
        s.initialize();
        s
    }

    pub fn initialize(&mut self) {
        self.dataset = sample_dataset();
        self.status = UploadStatus::Sample;
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    pub fn replace(&mut self, dataset: Dataset) {
        self.dataset = dataset;
    }

    /// Parse `bytes` and make the result active, or fall back to the sample.
    pub fn upload(&mut self, bytes: &[u8]) -> &UploadStatus {
        match self.parser.parse(bytes) {
            Ok(ds) => {
                info!(rows = ds.len(), "upload accepted");
                self.status = UploadStatus::Loaded { rows: ds.len() };
                self.replace(ds);
                &self.status
            }
            Err(e) => self.reject_upload(e),
        }
    }

    pub fn reject_upload(&mut self, reason: impl fmt::Display) -> &UploadStatus {
        let reason = reason.to_string();
        warn!(%reason, "upload rejected, using sample data");
        self.replace(sample_dataset());
        self.status = UploadStatus::FellBack { reason };
        &self.status
    }

    pub fn current_categories(&self) -> Vec<String> {
        self.dataset.categories()
    }

    pub fn current_date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.dataset.date_bounds()
    }

    pub fn filter_options(&self) -> FilterOptions {
        let bounds = self.current_date_bounds();
        FilterOptions {
            categories: self.current_categories(),
            min_date: bounds.map(|b| b.0),
            max_date: bounds.map(|b| b.1),
        }
    }

    pub fn filtered(&self, selection: &FilterSelection) -> Dataset {
        filter(&self.dataset, selection)
    }

    pub fn view(
        &self,
        selection: &FilterSelection,
        granularity: Granularity,
        top_n: usize,
    ) -> Aggregates {
        aggregate(&self.filtered(selection), granularity, top_n)
    }

    /// Serialize the active dataset to split JSON.
    pub fn snapshot(&self) -> Result<String, InterchangeError> {
        interchange::to_json(&self.dataset)
    }

    /// Replace the active dataset from split JSON. On error the session is
    /// left as it was.
    pub fn restore(&mut self, json: &str) -> Result<(), InterchangeError> {
        let ds = interchange::from_json(json)?;
        self.status = UploadStatus::Loaded { rows: ds.len() };
        self.replace(ds);
        Ok(())
    }
}
