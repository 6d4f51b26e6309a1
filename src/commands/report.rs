// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::upload::{selection_from_args, session_from_args};
use crate::config::Settings;
use crate::models::{Granularity, RevenueSeries, TopProducts};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::{Result, anyhow};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report {
    pub status: String,
    pub warning: bool,
    pub granularity: Granularity,
    pub rows: usize,
    pub series: RevenueSeries,
    pub top: TopProducts,
}

pub fn handle(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let report = build_report(settings, sub)?;
    if maybe_print_json(json_flag, jsonl_flag, &report)? {
        return Ok(());
    }

    println!("{}", report.status);
    let period_hdr = match report.granularity {
        Granularity::Daily => "Date",
        Granularity::Monthly => "Month",
    };
    let series_rows: Vec<Vec<String>> = report
        .series
        .points
        .iter()
        .map(|p| vec![p.period.to_string(), fmt_money(&p.revenue)])
        .collect();
    println!("{}", pretty_table(&[period_hdr, "Revenue"], series_rows));

    let top_rows: Vec<Vec<String>> = report
        .top
        .entries
        .iter()
        .map(|e| vec![e.product.clone(), fmt_money(&e.revenue)])
        .collect();
    println!("{}", pretty_table(&["Product", "Revenue"], top_rows));
    Ok(())
}

pub fn build_report(settings: &Settings, sub: &clap::ArgMatches) -> Result<Report> {
    let session = session_from_args(settings, sub)?;
    let selection = selection_from_args(sub)?;
    let granularity = match sub.get_one::<String>("granularity") {
        Some(g) => g.parse::<Granularity>().map_err(|e| anyhow!(e))?,
        None => settings.granularity,
    };
    let top_n = sub.get_one::<usize>("top").copied().unwrap_or(settings.top_n);

    let filtered = session.filtered(&selection);
    let aggregates = crate::aggregate::aggregate(&filtered, granularity, top_n);
    Ok(Report {
        status: session.status().to_string(),
        warning: session.status().is_warning(),
        granularity,
        rows: filtered.len(),
        series: aggregates.series,
        top: aggregates.top,
    })
}
