// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use salesboard::config::Settings;
use salesboard::models::Granularity;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn partial_settings_fill_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"granularity": "monthly"}}"#).unwrap();
    file.flush().unwrap();

    let s = Settings::load(Some(file.path())).unwrap();
    assert_eq!(s.granularity, Granularity::Monthly);
    assert_eq!(s.top_n, 5);
    assert!(s.date_formats.is_empty());
}

#[test]
fn date_formats_reach_the_parser() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"date_formats": ["%d-%b-%Y"]}}"#).unwrap();
    file.flush().unwrap();

    let s = Settings::from_file(file.path()).unwrap();
    let ds = s
        .parser()
        .parse(b"Date,Product,Category,Revenue\n05-Jan-2024,A,X,1\n")
        .unwrap();
    assert_eq!(ds.len(), 1);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(Settings::load(Some(missing.as_path())).is_err());
}

#[test]
fn malformed_settings_are_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"granularity": "hourly"}}"#).unwrap();
    file.flush().unwrap();
    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid settings"));
}
