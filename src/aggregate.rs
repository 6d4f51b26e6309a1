// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{
    Dataset, Granularity, Period, ProductTotal, RevenueSeries, SeriesPoint, TopProducts,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregates {
    pub series: RevenueSeries,
    pub top: TopProducts,
}

/// Summed revenue per day or per month, ascending by period.
pub fn revenue_series(dataset: &Dataset, granularity: Granularity) -> RevenueSeries {
    let mut map: BTreeMap<Period, Decimal> = BTreeMap::new();
    for r in dataset {
        *map.entry(Period::of(r.date, granularity))
            .or_insert(Decimal::ZERO) += r.revenue;
    }
    RevenueSeries {
        points: map
            .into_iter()
            .map(|(period, revenue)| SeriesPoint { period, revenue })
            .collect(),
    }
}

/// The `n` best-selling products by summed revenue, descending.
/// Equal totals are ordered by product label.
pub fn top_products(dataset: &Dataset, n: usize) -> TopProducts {
    let mut map: BTreeMap<&str, Decimal> = BTreeMap::new();
    for r in dataset {
        *map.entry(r.product.as_str()).or_insert(Decimal::ZERO) += r.revenue;
    }
    let mut items: Vec<_> = map.into_iter().collect();
    // stable: BTreeMap order survives among ties
    items.sort_by(|a, b| b.1.cmp(&a.1));
    TopProducts {
        entries: items
            .into_iter()
            .take(n)
            .map(|(product, revenue)| ProductTotal {
                product: product.to_string(),
                revenue,
            })
            .collect(),
    }
}

pub fn aggregate(dataset: &Dataset, granularity: Granularity, top_n: usize) -> Aggregates {
    Aggregates {
        series: revenue_series(dataset, granularity),
        top: top_products(dataset, top_n),
    }
}
