use std::collections::HashMap;

use common::format::PIE_COLORS;
use common::{BreakdownSlice, Dimension, SalesBreakdown};
use model::OrderRecord;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, instrument};

fn dimension_value(order: &OrderRecord, dimension: Dimension) -> &str {
    match dimension {
        Dimension::Segment => order.segment(),
        Dimension::Category => order.category(),
    }
}

/// Sums sales per value of `dimension`, keeping first-seen order.
pub fn sales_by(orders: &[&OrderRecord], dimension: Dimension) -> Vec<(String, Decimal)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(String, Decimal)> = Vec::new();

    for order in orders {
        let key = dimension_value(order, dimension);
        match index.get(key) {
            Some(&i) => totals[i].1 += order.sales(),
            None => {
                index.insert(key, totals.len());
                totals.push((key.to_string(), order.sales()));
            }
        }
    }

    totals
}

/// Builds the pie chart data of sales per segment or per category.
#[instrument(skip(orders), fields(num_orders = orders.len()))]
pub fn sales_breakdown(orders: &[&OrderRecord], dimension: Dimension) -> SalesBreakdown {
    let totals = sales_by(orders, dimension);
    let grand_total: Decimal = totals.iter().map(|(_, sales)| *sales).sum();

    let slices: Vec<BreakdownSlice> = totals
        .into_iter()
        .map(|(name, sales)| {
            let share = if grand_total.is_zero() {
                0.0
            } else {
                (sales / grand_total).to_f64().unwrap_or_default()
            };
            BreakdownSlice {
                name,
                sales: sales.to_f64().unwrap_or_default(),
                share,
            }
        })
        .collect();

    debug!("{} slices for {}", slices.len(), dimension);

    SalesBreakdown {
        dimension,
        slices,
        colors: PIE_COLORS.iter().map(|c| c.to_string()).collect(),
    }
}
