// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Dataset, Record};
use chrono::{Days, NaiveDate};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

const PRODUCTS: [&str; 5] = [
    "Product A",
    "Product B",
    "Product C",
    "Product D",
    "Product E",
];
const CATEGORIES: [&str; 5] = [
    "Electronics",
    "Electronics",
    "Clothing",
    "Clothing",
    "Accessories",
];
const REVENUES: [i64; 5] = [100, 150, 200, 130, 180];
const ROWS: usize = 50;

// 50 consecutive days from 2024-01-01, the 5-slot pattern above cycling.
static SAMPLE: Lazy<Dataset> = Lazy::new(|| {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    (0..ROWS)
        .map(|i| {
            let slot = i % PRODUCTS.len();
            Record::new(
                start + Days::new(i as u64),
                PRODUCTS[slot],
                CATEGORIES[slot],
                Decimal::from(REVENUES[slot]),
            )
        })
        .collect()
});

/// The built-in dataset shown at startup and after a rejected upload.
pub fn sample_dataset() -> Dataset {
    SAMPLE.clone()
}
