// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::upload::{selection_from_args, session_from_args};
use crate::config::Settings;
use crate::interchange::SplitFrame;
use crate::models::Dataset;
use crate::parser::REQUIRED_COLUMNS;
use anyhow::{Context, Result, bail};
use std::path::Path;

pub fn handle(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".to_string());
    let out = sub
        .get_one::<String>("out")
        .context("--out is required")?
        .trim()
        .to_string();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let session = session_from_args(settings, sub)?;
    let selection = selection_from_args(sub)?;
    let ds = session.filtered(&selection);
    if fmt == "csv" {
        write_csv(&ds, Path::new(&out))?;
    } else {
        write_json(&ds, Path::new(&out))?;
    }
    println!("{}", session.status());
    println!("Exported {} records to {}", ds.len(), out);
    Ok(())
}

pub fn write_csv(ds: &Dataset, out: &Path) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(out).with_context(|| format!("Create {}", out.display()))?;
    wtr.write_record(REQUIRED_COLUMNS)?;
    for r in ds {
        wtr.write_record([
            r.date.format("%Y-%m-%d").to_string(),
            r.product.clone(),
            r.category.clone(),
            r.revenue.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json(ds: &Dataset, out: &Path) -> Result<()> {
    let body = serde_json::to_string_pretty(&SplitFrame::from(ds))?;
    std::fs::write(out, body).with_context(|| format!("Write {}", out.display()))?;
    Ok(())
}
