use std::collections::BTreeMap;

use common::format::month_label;
use common::{Metric, MonthlyPoint, PerformanceSeries};
use model::OrderRecord;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, instrument};

/// Value of `metric` on a single order line.
pub fn metric_value(order: &OrderRecord, metric: Metric) -> Decimal {
    match metric {
        Metric::Sales => order.sales(),
        Metric::Profit => order.profit(),
        Metric::Quantity => Decimal::from(order.quantity()),
        Metric::Discount => order.discount(),
    }
}

/// Sums `metric` per order month.
///
/// Only months with at least one order appear; the map is ordered by month.
pub fn monthly_totals(orders: &[&OrderRecord], metric: Metric) -> BTreeMap<u32, Decimal> {
    let mut totals = BTreeMap::new();
    for order in orders {
        *totals.entry(order.order_month()).or_insert(Decimal::ZERO) += metric_value(order, metric);
    }
    totals
}

/// Builds the monthly performance line of `metric` over the given orders.
#[instrument(skip(orders), fields(num_orders = orders.len()))]
pub fn performance_series(orders: &[&OrderRecord], metric: Metric) -> PerformanceSeries {
    let points: Vec<MonthlyPoint> = monthly_totals(orders, metric)
        .into_iter()
        .map(|(month, total)| MonthlyPoint {
            month,
            label: month_label(month).unwrap_or_default().to_string(),
            value: total.to_f64().unwrap_or_default(),
        })
        .collect();

    debug!("{} monthly points for {}", points.len(), metric);

    PerformanceSeries {
        metric,
        title: metric.title(),
        color: metric.color().to_string(),
        points,
    }
}
