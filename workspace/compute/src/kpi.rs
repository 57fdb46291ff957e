use common::KpiSummary;
use common::format::{format_currency, format_thousands};
use model::OrderRecord;
use rust_decimal::Decimal;
use tracing::instrument;

use crate::error::Result;
use crate::round_to_whole;

/// Computes the KPI panel totals over the given orders.
///
/// Each total is rounded half-to-even to a whole number before display.
#[instrument(skip(orders), fields(num_orders = orders.len()))]
pub fn kpi_summary(orders: &[&OrderRecord]) -> Result<KpiSummary> {
    let mut sales = Decimal::ZERO;
    let mut profit = Decimal::ZERO;
    let mut quantity = Decimal::ZERO;
    let mut discount = Decimal::ZERO;

    for order in orders {
        sales += order.sales();
        profit += order.profit();
        quantity += Decimal::from(order.quantity());
        discount += order.discount();
    }

    let total_sales = round_to_whole(sales)?;
    let total_profit = round_to_whole(profit)?;
    let total_quantity = round_to_whole(quantity)?;
    let total_discount = round_to_whole(discount)?;

    Ok(KpiSummary {
        total_sales,
        total_profit,
        total_quantity,
        total_discount,
        sales_display: format_currency(total_sales),
        profit_display: format_currency(total_profit),
        quantity_display: format_thousands(total_quantity),
        discount_display: format_currency(total_discount),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order(sales: Decimal, profit: Decimal, quantity: u32, discount: Decimal) -> OrderRecord {
        OrderRecord::new("X", NaiveDate::from_ymd_opt(2011, 4, 1).unwrap(), sales)
            .with_profit(profit)
            .with_quantity(quantity)
            .with_discount(discount)
    }

    #[test]
    fn test_totals_are_rounded_and_formatted() {
        let orders = vec![
            order(Decimal::new(1_200_000_25, 2), Decimal::new(-1_500_5, 1), 600, Decimal::new(5, 1)),
            order(Decimal::new(34_567_50, 2), Decimal::new(250, 0), 900, Decimal::new(1, 0)),
        ];
        let refs: Vec<&OrderRecord> = orders.iter().collect();

        let kpis = kpi_summary(&refs).unwrap();

        // 1_200_000.25 + 34_567.50 = 1_234_567.75
        assert_eq!(kpis.total_sales, 1_234_568);
        assert_eq!(kpis.sales_display, "$1,234,568");
        // -1_500.5 + 250 = -1_250.5, half to even
        assert_eq!(kpis.total_profit, -1_250);
        assert_eq!(kpis.profit_display, "$-1,250");
        assert_eq!(kpis.total_quantity, 1_500);
        assert_eq!(kpis.quantity_display, "1,500");
        // 0.5 + 1 = 1.5, half to even
        assert_eq!(kpis.total_discount, 2);
        assert_eq!(kpis.discount_display, "$2");
    }

    #[test]
    fn test_empty_selection_is_all_zero() {
        let kpis = kpi_summary(&[]).unwrap();

        assert_eq!(kpis.total_sales, 0);
        assert_eq!(kpis.sales_display, "$0");
        assert_eq!(kpis.quantity_display, "0");
    }
}
