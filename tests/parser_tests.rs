// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use salesboard::parser::{ParseError, SalesCsvParser, parse};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn parse_keeps_every_row_and_date() {
    let csv = "Date,Product,Category,Revenue\n\
               2024-03-01,Widget,Tools,10\n\
               2024-03-02,Gadget,Toys,12.50\n\
               2024-03-02,Widget,Tools,7\n";
    let ds = parse(csv.as_bytes()).unwrap();
    assert_eq!(ds.len(), 3);
    let dates: Vec<NaiveDate> = ds.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![d(2024, 3, 1), d(2024, 3, 2), d(2024, 3, 2)]);
    assert_eq!(ds.records()[1].revenue, Decimal::new(1250, 2));
    assert_eq!(ds.records()[1].product, "Gadget");
    assert_eq!(ds.records()[1].category, "Toys");
}

#[test]
fn parse_matches_headers_by_name_and_ignores_extras() {
    let csv = "region, revenue ,CATEGORY,product,date\n\
               north,99,Tools,Widget,2024-01-05\n";
    let ds = parse(csv.as_bytes()).unwrap();
    let r = &ds.records()[0];
    assert_eq!(r.date, d(2024, 1, 5));
    assert_eq!(r.product, "Widget");
    assert_eq!(r.category, "Tools");
    assert_eq!(r.revenue, Decimal::from(99));
}

#[test]
fn parse_accepts_common_date_layouts() {
    let csv = "Date,Product,Category,Revenue\n\
               2024/01/02,A,X,1\n\
               01/03/2024,A,X,1\n\
               2024-01-04T00:00:00.000,A,X,1\n\
               2024-01-05 13:45:00,A,X,1\n\
               2024-01-06T08:00:00Z,A,X,1\n";
    let ds = parse(csv.as_bytes()).unwrap();
    let dates: Vec<NaiveDate> = ds.iter().map(|r| r.date).collect();
    assert_eq!(
        dates,
        vec![
            d(2024, 1, 2),
            d(2024, 1, 3),
            d(2024, 1, 4),
            d(2024, 1, 5),
            d(2024, 1, 6)
        ]
    );
}

#[test]
fn parse_uses_configured_date_formats() {
    let csv = "Date,Product,Category,Revenue\n05-Jan-2024,A,X,1\n";
    assert!(matches!(
        parse(csv.as_bytes()),
        Err(ParseError::InvalidDate { .. })
    ));
    let parser = SalesCsvParser::with_date_formats(vec!["%d-%b-%Y".to_string()]);
    let ds = parser.parse(csv.as_bytes()).unwrap();
    assert_eq!(ds.records()[0].date, d(2024, 1, 5));
}

#[test]
fn parse_strips_byte_order_mark() {
    let csv = "\u{feff}Date,Product,Category,Revenue\n2024-01-01,A,X,1\n";
    assert_eq!(parse(csv.as_bytes()).unwrap().len(), 1);
}

#[test]
fn parse_rejects_non_utf8() {
    let bytes = [0x44, 0x61, 0xff, 0xfe, 0x0a];
    assert!(matches!(parse(&bytes), Err(ParseError::Encoding(_))));
}

#[test]
fn parse_rejects_missing_category_column() {
    let csv = "Date,Product,Revenue\n2024-01-01,A,1\n";
    let err = parse(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, ParseError::MissingColumn("Category")));
    assert_eq!(err.to_string(), "missing required column 'Category'");
}

#[test]
fn parse_reports_line_of_bad_date() {
    let csv = "Date,Product,Category,Revenue\n2024-01-01,A,X,1\n2024-13-03,A,X,1\n";
    match parse(csv.as_bytes()) {
        Err(ParseError::InvalidDate { line, value }) => {
            assert_eq!(line, 3);
            assert_eq!(value, "2024-13-03");
        }
        other => panic!("expected invalid date, got {:?}", other),
    }
}

#[test]
fn parse_rejects_non_numeric_revenue() {
    let csv = "Date,Product,Category,Revenue\n2024-01-01,A,X,abc\n";
    let err = parse(csv.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("invalid revenue 'abc'"));
}

#[test]
fn parse_rejects_ragged_rows() {
    let csv = "Date,Product,Category,Revenue\n2024-01-01,A,X\n";
    assert!(matches!(
        parse(csv.as_bytes()),
        Err(ParseError::Malformed { .. })
    ));
}

#[test]
fn parse_header_only_is_empty_dataset() {
    let ds = parse(b"Date,Product,Category,Revenue\n").unwrap();
    assert!(ds.is_empty());
    assert!(matches!(parse(b"   \n"), Err(ParseError::Empty)));
}
