// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::filter::FilterSelection;
use crate::store::Session;
use crate::utils::{decode_data_uri, parse_date};
use anyhow::{Context, Result};
use tracing::debug;

/// Build a session from `--path` / `--data-uri`, falling back to the sample
/// when the upload cannot be decoded or parsed.
pub fn session_from_args(settings: &Settings, m: &clap::ArgMatches) -> Result<Session> {
    let mut session = Session::new(settings.parser());
    if let Some(path) = m.get_one::<String>("path") {
        let path = path.trim();
        let bytes = std::fs::read(path).with_context(|| format!("Open CSV {}", path))?;
        session.upload(&bytes);
    } else if let Some(uri) = m.get_one::<String>("data-uri") {
        match decode_data_uri(uri) {
            Ok((media, bytes)) => {
                debug!(%media, len = bytes.len(), "decoded upload envelope");
                session.upload(&bytes);
            }
            Err(e) => {
                session.reject_upload(format!("{:#}", e));
            }
        }
    }
    Ok(session)
}

pub fn selection_from_args(m: &clap::ArgMatches) -> Result<FilterSelection> {
    let categories: Vec<String> = m
        .get_many::<String>("category")
        .map(|vs| vs.cloned().collect())
        .unwrap_or_default();
    let start = m
        .get_one::<String>("start")
        .map(|s| parse_date(s))
        .transpose()?;
    let end = m
        .get_one::<String>("end")
        .map(|s| parse_date(s))
        .transpose()?;
    Ok(FilterSelection::new(categories, start, end))
}
