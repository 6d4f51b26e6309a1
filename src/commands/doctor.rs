// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::upload::session_from_args;
use crate::config::Settings;
use crate::models::Dataset;
use crate::store::UploadStatus;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub kind: &'static str,
    pub detail: String,
}

pub fn handle(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let session = session_from_args(settings, sub)?;

    let mut issues = Vec::new();
    if let UploadStatus::FellBack { reason } = session.status() {
        issues.push(Issue {
            kind: "upload_rejected",
            detail: reason.clone(),
        });
    }
    issues.extend(find_issues(session.dataset()));

    if maybe_print_json(json_flag, jsonl_flag, &issues)? {
        return Ok(());
    }
    if issues.is_empty() {
        println!("doctor: no issues found");
    } else {
        let rows = issues
            .into_iter()
            .map(|i| vec![i.kind.to_string(), i.detail])
            .collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// Rows that parse but would chart oddly. Nothing here rejects the dataset.
pub fn find_issues(ds: &Dataset) -> Vec<Issue> {
    let mut issues = Vec::new();
    for r in ds {
        if r.revenue.is_sign_negative() && !r.revenue.is_zero() {
            issues.push(Issue {
                kind: "negative_revenue",
                detail: format!("{} {} {}", r.date, r.product, r.revenue),
            });
        }
        if r.product.is_empty() {
            issues.push(Issue {
                kind: "blank_product",
                detail: format!("{} {}", r.date, r.category),
            });
        }
        if r.category.is_empty() {
            issues.push(Issue {
                kind: "blank_category",
                detail: format!("{} {}", r.date, r.product),
            });
        }
    }
    issues
}
