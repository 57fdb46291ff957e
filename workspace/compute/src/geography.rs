//! Geographic aggregates behind the sales map and the market profit chart.
//!
//! Countries and markets come out sorted by name. A country's market and ISO
//! code are the first ones seen in the data; conflicts are reported by
//! [`model::Dataset::check_consistency`] at load time.

use std::collections::BTreeMap;

use common::{CountryMapPoint, MarketSummary};
use model::OrderRecord;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::round_to_whole;

/// Order-line count and rounded sales of one country.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryOrders {
    pub country: String,
    pub order_count: u64,
    pub total_sales: i64,
}

/// The market and ISO code a country belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryMarket {
    pub country: String,
    pub market: String,
    pub iso_alpha: String,
}

#[derive(Default)]
struct Totals {
    order_count: u64,
    sales: Decimal,
    profit: Decimal,
}

impl Totals {
    fn add(&mut self, order: &OrderRecord) {
        // lines without an order id are not counted as orders
        if !order.order_id().is_empty() {
            self.order_count += 1;
        }
        self.sales += order.sales();
        self.profit += order.profit();
    }
}

/// Order count and total sales per country.
pub fn country_orders(orders: &[&OrderRecord]) -> Result<Vec<CountryOrders>> {
    let mut totals: BTreeMap<&str, Totals> = BTreeMap::new();
    for order in orders {
        totals.entry(order.country()).or_default().add(order);
    }

    totals
        .into_iter()
        .map(|(country, t)| {
            Ok(CountryOrders {
                country: country.to_string(),
                order_count: t.order_count,
                total_sales: round_to_whole(t.sales)?,
            })
        })
        .collect()
}

/// Order count, total sales and total profit per market.
pub fn market_orders(orders: &[&OrderRecord]) -> Result<Vec<MarketSummary>> {
    let mut totals: BTreeMap<&str, Totals> = BTreeMap::new();
    for order in orders {
        totals.entry(order.market()).or_default().add(order);
    }

    totals
        .into_iter()
        .map(|(market, t)| {
            Ok(MarketSummary {
                market: market.to_string(),
                order_count: t.order_count,
                total_sales: round_to_whole(t.sales)?,
                total_profit: round_to_whole(t.profit)?,
            })
        })
        .collect()
}

/// The first-seen market and ISO code of every country.
pub fn country_markets(orders: &[&OrderRecord]) -> Vec<CountryMarket> {
    let mut seen: BTreeMap<&str, (&str, &str)> = BTreeMap::new();
    for order in orders {
        seen.entry(order.country())
            .or_insert((order.market(), order.iso_alpha()));
    }

    seen.into_iter()
        .map(|(country, (market, iso_alpha))| CountryMarket {
            country: country.to_string(),
            market: market.to_string(),
            iso_alpha: iso_alpha.to_string(),
        })
        .collect()
}

/// Joins country totals with their market's totals for the sales map.
///
/// Country markets are inner-joined with country totals, then left-joined with
/// market totals on the market name.
#[instrument(skip(orders), fields(num_orders = orders.len()))]
pub fn country_map(orders: &[&OrderRecord]) -> Result<Vec<CountryMapPoint>> {
    let countries: BTreeMap<String, CountryOrders> = country_orders(orders)?
        .into_iter()
        .map(|c| (c.country.clone(), c))
        .collect();
    let markets: BTreeMap<String, MarketSummary> = market_orders(orders)?
        .into_iter()
        .map(|m| (m.market.clone(), m))
        .collect();

    let points: Vec<CountryMapPoint> = country_markets(orders)
        .into_iter()
        .filter_map(|cm| {
            let totals = countries.get(&cm.country)?;
            let market = markets.get(&cm.market);
            Some(CountryMapPoint {
                order_count: totals.order_count,
                total_sales: totals.total_sales,
                market_order_count: market.map(|m| m.order_count),
                market_total_sales: market.map(|m| m.total_sales),
                market_total_profit: market.map(|m| m.total_profit),
                country: cm.country,
                market: cm.market,
                iso_alpha: cm.iso_alpha,
            })
        })
        .collect();

    debug!("{} countries on the map", points.len());
    Ok(points)
}

/// Market totals ranked by profit, most profitable first.
#[instrument(skip(orders), fields(num_orders = orders.len()))]
pub fn market_profit_ranking(orders: &[&OrderRecord]) -> Result<Vec<MarketSummary>> {
    let mut markets = market_orders(orders)?;
    markets.sort_by(|a, b| {
        b.total_profit
            .cmp(&a.total_profit)
            .then_with(|| a.market.cmp(&b.market))
    });
    Ok(markets)
}

/// Heading of the sales map for a year selection.
pub fn country_map_title(year: Option<i32>, span: Option<(i32, i32)>) -> String {
    period_title("Sales Per Country", year, span)
}

/// Heading of the market profit chart for a year selection.
pub fn market_profit_title(year: Option<i32>, span: Option<(i32, i32)>) -> String {
    period_title("Profit Per Market", year, span)
}

fn period_title(subject: &str, year: Option<i32>, span: Option<(i32, i32)>) -> String {
    match (year, span) {
        (Some(year), _) => format!("{} in {} Year", subject, year),
        (None, Some((first, last))) => format!("{} from {} to {}", subject, first, last),
        (None, None) => subject.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order(id: &str, country: &str, market: &str, iso: &str, sales: Decimal, profit: Decimal) -> OrderRecord {
        OrderRecord::new(id, NaiveDate::from_ymd_opt(2013, 8, 1).unwrap(), sales)
            .with_location(country, market, iso)
            .with_profit(profit)
    }

    fn fixture() -> Vec<OrderRecord> {
        vec![
            order("A", "France", "EU", "FRA", Decimal::new(1005, 1), Decimal::new(20, 0)),
            order("B", "France", "EU", "FRA", Decimal::new(10, 0), Decimal::new(-5, 0)),
            order("C", "Germany", "EU", "DEU", Decimal::new(300, 0), Decimal::new(30, 0)),
            order("D", "Brazil", "LATAM", "BRA", Decimal::new(2505, 1), Decimal::new(1005, 1)),
            order("", "Brazil", "LATAM", "BRA", Decimal::new(50, 0), Decimal::ZERO),
        ]
    }

    #[test]
    fn test_country_orders_counts_and_rounds() {
        let orders = fixture();
        let refs: Vec<&OrderRecord> = orders.iter().collect();

        let countries = country_orders(&refs).unwrap();

        assert_eq!(
            countries,
            vec![
                CountryOrders { country: "Brazil".into(), order_count: 1, total_sales: 300 },
                CountryOrders { country: "France".into(), order_count: 2, total_sales: 110 },
                CountryOrders { country: "Germany".into(), order_count: 1, total_sales: 300 },
            ]
        );
    }

    #[test]
    fn test_market_orders_sum_sales_and_profit() {
        let orders = fixture();
        let refs: Vec<&OrderRecord> = orders.iter().collect();

        let markets = market_orders(&refs).unwrap();

        assert_eq!(markets.len(), 2);
        assert_eq!(markets[0].market, "EU");
        assert_eq!(markets[0].order_count, 3);
        // 100.5 + 10 + 300 = 410.5, half to even
        assert_eq!(markets[0].total_sales, 410);
        assert_eq!(markets[0].total_profit, 45);
        assert_eq!(markets[1].market, "LATAM");
        // 100.5 half to even
        assert_eq!(markets[1].total_profit, 100);
    }

    #[test]
    fn test_country_markets_use_first_seen_values() {
        let mut orders = fixture();
        orders.push(order("E", "France", "EMEA", "FR", Decimal::ONE, Decimal::ONE));
        let refs: Vec<&OrderRecord> = orders.iter().collect();

        let mapping = country_markets(&refs);

        let france = mapping.iter().find(|c| c.country == "France").unwrap();
        assert_eq!(france.market, "EU");
        assert_eq!(france.iso_alpha, "FRA");
    }

    #[test]
    fn test_country_map_joins_market_totals() {
        let orders = fixture();
        let refs: Vec<&OrderRecord> = orders.iter().collect();

        let map = country_map(&refs).unwrap();

        assert_eq!(map.len(), 3);
        let germany = &map[2];
        assert_eq!(germany.country, "Germany");
        assert_eq!(germany.iso_alpha, "DEU");
        assert_eq!(germany.order_count, 1);
        assert_eq!(germany.total_sales, 300);
        assert_eq!(germany.market_order_count, Some(3));
        assert_eq!(germany.market_total_sales, Some(410));
        assert_eq!(germany.market_total_profit, Some(45));
        assert_eq!(map[0].country, "Brazil");
        assert_eq!(map[0].market_total_sales, Some(300));
    }

    #[test]
    fn test_market_profit_ranking_is_descending() {
        let orders = fixture();
        let refs: Vec<&OrderRecord> = orders.iter().collect();

        let ranking = market_profit_ranking(&refs).unwrap();

        let names: Vec<&str> = ranking.iter().map(|m| m.market.as_str()).collect();
        assert_eq!(names, vec!["LATAM", "EU"]);
    }

    #[test]
    fn test_titles() {
        assert_eq!(country_map_title(None, Some((2011, 2014))), "Sales Per Country from 2011 to 2014");
        assert_eq!(country_map_title(Some(2013), Some((2011, 2014))), "Sales Per Country in 2013 Year");
        assert_eq!(market_profit_title(Some(2012), None), "Profit Per Market in 2012 Year");
        assert_eq!(market_profit_title(None, None), "Profit Per Market");
    }

    #[test]
    fn test_empty_selection_gives_empty_aggregates() {
        assert!(country_map(&[]).unwrap().is_empty());
        assert!(market_profit_ranking(&[]).unwrap().is_empty());
    }
}
