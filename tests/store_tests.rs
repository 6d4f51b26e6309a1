// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use salesboard::sample::sample_dataset;
use salesboard::store::{Session, UploadStatus};

const UPLOAD: &str = "Date,Product,Category,Revenue\n\
                      2024-05-02,Kettle,Kitchen,40\n\
                      2024-05-01,Lamp,Home,25\n\
                      2024-05-03,Toaster,Kitchen,60\n";

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn new_session_starts_on_sample() {
    let s = Session::default();
    assert_eq!(s.dataset().len(), 50);
    assert_eq!(s.status(), &UploadStatus::Sample);
    assert_eq!(
        s.current_categories(),
        vec!["Electronics", "Clothing", "Accessories"]
    );
    assert_eq!(
        s.current_date_bounds(),
        Some((d(2024, 1, 1), d(2024, 2, 19)))
    );
}

#[test]
fn upload_replaces_dataset_wholesale() {
    let mut s = Session::default();
    let status = s.upload(UPLOAD.as_bytes()).clone();
    assert_eq!(status, UploadStatus::Loaded { rows: 3 });
    assert_eq!(status.to_string(), "File uploaded successfully");
    assert!(!status.is_warning());
    assert_eq!(s.dataset().len(), 3);
    assert_eq!(s.current_categories(), vec!["Kitchen", "Home"]);
    assert_eq!(
        s.current_date_bounds(),
        Some((d(2024, 5, 1), d(2024, 5, 3)))
    );
}

#[test]
fn non_utf8_upload_falls_back_to_sample() {
    let mut s = Session::default();
    s.upload(UPLOAD.as_bytes());
    let status = s.upload(&[0xc3, 0x28, 0xff]).clone();
    assert!(status.is_warning());
    let msg = status.to_string();
    assert!(msg.starts_with("Error loading file. Using sample data. ("));
    assert!(msg.contains("UTF-8"));
    assert_eq!(s.dataset(), &sample_dataset());
    assert_eq!(s.current_categories().len(), 3);
}

#[test]
fn missing_column_upload_falls_back_to_sample() {
    let mut s = Session::default();
    s.upload(UPLOAD.as_bytes());
    s.upload(b"Date,Product,Revenue\n2024-01-01,A,1\n");
    match s.status() {
        UploadStatus::FellBack { reason } => assert!(reason.contains("Category")),
        other => panic!("expected fallback, got {:?}", other),
    }
    assert_eq!(
        s.filter_options().categories,
        vec!["Electronics", "Clothing", "Accessories"]
    );
}

#[test]
fn reject_upload_records_reason() {
    let mut s = Session::default();
    s.upload(UPLOAD.as_bytes());
    let msg = s.reject_upload("bad envelope").to_string();
    assert_eq!(msg, "Error loading file. Using sample data. (bad envelope)");
    assert_eq!(s.dataset().len(), 50);
}

#[test]
fn filter_options_track_active_dataset() {
    let mut s = Session::default();
    s.upload(UPLOAD.as_bytes());
    let opts = s.filter_options();
    assert_eq!(opts.categories, vec!["Kitchen", "Home"]);
    assert_eq!(opts.min_date, Some(d(2024, 5, 1)));
    assert_eq!(opts.max_date, Some(d(2024, 5, 3)));
}

#[test]
fn snapshot_restores_into_fresh_session() {
    let mut s = Session::default();
    s.upload(UPLOAD.as_bytes());
    let json = s.snapshot().unwrap();

    let mut other = Session::default();
    other.restore(&json).unwrap();
    assert_eq!(other.dataset(), s.dataset());
}

#[test]
fn failed_restore_leaves_session_untouched() {
    let mut s = Session::default();
    s.upload(UPLOAD.as_bytes());
    assert!(s.restore("{\"columns\": [\"Date\"], \"data\": []}").is_err());
    assert_eq!(s.dataset().len(), 3);
}

#[test]
fn view_filters_then_aggregates() {
    use salesboard::filter::FilterSelection;
    use salesboard::models::Granularity;

    let mut s = Session::default();
    s.upload(UPLOAD.as_bytes());
    let out = s.view(&FilterSelection::new("Kitchen", None, None), Granularity::Daily, 5);
    assert_eq!(out.series.len(), 2);
    assert_eq!(out.top.labels(), vec!["Toaster", "Kettle"]);
}

#[test]
fn restore_after_rejected_upload_clears_warning() {
    let mut source = Session::default();
    source.upload(UPLOAD.as_bytes());
    let json = source.snapshot().unwrap();

    let mut s = Session::default();
    s.upload(b"nonsense");
    assert!(s.status().is_warning());
    s.restore(&json).unwrap();
    assert_eq!(s.status(), &UploadStatus::Loaded { rows: 3 });
    assert_eq!(s.status().to_string(), "File uploaded successfully");
    assert_eq!(s.dataset().len(), 3);
}
