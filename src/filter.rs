// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Dataset, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Category input as a widget hands it over: one dropdown value or a
/// multi-select list. Both normalize to the same set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChoice {
    Any,
    Single(String),
    Many(Vec<String>),
}

impl CategoryChoice {
    fn into_set(self) -> BTreeSet<String> {
        let values = match self {
            CategoryChoice::Any => Vec::new(),
            CategoryChoice::Single(v) => vec![v],
            CategoryChoice::Many(vs) => vs,
        };
        values
            .into_iter()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    }
}

impl From<&str> for CategoryChoice {
    fn from(v: &str) -> Self {
        CategoryChoice::Single(v.to_string())
    }
}

impl From<String> for CategoryChoice {
    fn from(v: String) -> Self {
        CategoryChoice::Single(v)
    }
}

impl From<Option<String>> for CategoryChoice {
    fn from(v: Option<String>) -> Self {
        v.map(CategoryChoice::Single).unwrap_or(CategoryChoice::Any)
    }
}

impl From<Vec<String>> for CategoryChoice {
    fn from(vs: Vec<String>) -> Self {
        CategoryChoice::Many(vs)
    }
}

impl From<&[&str]> for CategoryChoice {
    fn from(vs: &[&str]) -> Self {
        CategoryChoice::Many(vs.iter().map(|s| s.to_string()).collect())
    }
}

/// User-chosen constraints. An empty category set means every category; the
/// date range only applies when both ends are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub categories: BTreeSet<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl FilterSelection {
    pub fn new(
        categories: impl Into<CategoryChoice>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Self {
        Self {
            categories: categories.into().into_set(),
            start,
            end,
        }
    }

    pub fn all() -> Self {
        Self::default()
    }

    /// Single-select starting state: the first category and the dataset's
    /// full date span.
    pub fn default_for(dataset: &Dataset) -> Self {
        let first = dataset.categories().into_iter().next();
        let (start, end) = match dataset.date_bounds() {
            Some((lo, hi)) => (Some(lo), Some(hi)),
            None => (None, None),
        };
        Self::new(first, start, end)
    }

    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.start.zip(self.end)
    }

    pub fn is_unconstrained(&self) -> bool {
        self.categories.is_empty() && self.date_range().is_none()
    }

    pub fn matches(&self, r: &Record) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&r.category) {
            return false;
        }
        match self.date_range() {
            Some((start, end)) => start <= r.date && r.date <= end,
            None => true,
        }
    }
}

/// Subset of `dataset` matching `selection`. The input is left untouched.
pub fn filter(dataset: &Dataset, selection: &FilterSelection) -> Dataset {
    if selection.is_unconstrained() {
        return dataset.clone();
    }
    let out: Dataset = dataset
        .iter()
        .filter(|r| selection.matches(r))
        .cloned()
        .collect();
    debug!(before = dataset.len(), after = out.len(), "filter applied");
    out
}
