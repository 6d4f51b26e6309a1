// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::upload::session_from_args;
use crate::config::Settings;
use crate::store::FilterOptions;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let session = session_from_args(settings, sub)?;
    let opts = session.filter_options();
    if maybe_print_json(json_flag, jsonl_flag, &opts)? {
        return Ok(());
    }
    println!("{}", session.status());
    let rows = opts.categories.iter().map(|c| vec![c.clone()]).collect();
    println!("{}", pretty_table(&["Category"], rows));
    match (opts.min_date, opts.max_date) {
        (Some(lo), Some(hi)) => println!("Dates: {} .. {}", lo, hi),
        _ => println!("Dates: (none)"),
    }
    Ok(())
}

pub fn query_options(settings: &Settings, sub: &clap::ArgMatches) -> Result<FilterOptions> {
    Ok(session_from_args(settings, sub)?.filter_options())
}
