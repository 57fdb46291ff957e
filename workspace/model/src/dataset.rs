//! In-memory order table and the lookups built on top of it.
//!
//! The dataset is immutable once loaded: every aggregate is a view computed
//! from it on demand.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use crate::order::OrderRecord;

/// The loaded order table.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    orders: Vec<OrderRecord>,
}

/// A country that breaks the one-country-one-market or one-country-one-code rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inconsistency {
    /// The country appears under more than one market.
    CountryInMultipleMarkets { country: String, markets: Vec<String> },
    /// The country appears with more than one ISO code.
    CountryWithMultipleIsoCodes { country: String, codes: Vec<String> },
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inconsistency::CountryInMultipleMarkets { country, markets } => {
                write!(f, "country '{}' belongs to several markets: {}", country, markets.join(", "))
            }
            Inconsistency::CountryWithMultipleIsoCodes { country, codes } => {
                write!(f, "country '{}' has several ISO codes: {}", country, codes.join(", "))
            }
        }
    }
}

impl Dataset {
    pub fn new(orders: Vec<OrderRecord>) -> Self {
        Self { orders }
    }

    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Distinct order years, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.orders
            .iter()
            .map(OrderRecord::order_year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// First and last order year, or `None` for an empty dataset.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let years = self.orders.iter().map(OrderRecord::order_year);
        let min = years.clone().min()?;
        let max = years.max()?;
        Some((min, max))
    }

    /// Distinct segments in first-seen order.
    pub fn segments(&self) -> Vec<String> {
        distinct_in_order(self.orders.iter().map(OrderRecord::segment))
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        distinct_in_order(self.orders.iter().map(OrderRecord::category))
    }

    /// Distinct markets in first-seen order.
    pub fn markets(&self) -> Vec<String> {
        distinct_in_order(self.orders.iter().map(OrderRecord::market))
    }

    /// Distinct countries in first-seen order.
    pub fn countries(&self) -> Vec<String> {
        distinct_in_order(self.orders.iter().map(OrderRecord::country))
    }

    /// Reports every country mapped to more than one market or ISO code.
    ///
    /// Results are sorted by country; markets and codes keep first-seen order.
    pub fn check_consistency(&self) -> Vec<Inconsistency> {
        let mut markets: HashMap<&str, Vec<&str>> = HashMap::new();
        let mut codes: HashMap<&str, Vec<&str>> = HashMap::new();

        for order in &self.orders {
            let seen = markets.entry(order.country()).or_default();
            if !seen.contains(&order.market()) {
                seen.push(order.market());
            }
            let seen = codes.entry(order.country()).or_default();
            if !seen.contains(&order.iso_alpha()) {
                seen.push(order.iso_alpha());
            }
        }

        let mut problems = Vec::new();
        for (country, values) in markets {
            if values.len() > 1 {
                problems.push(Inconsistency::CountryInMultipleMarkets {
                    country: country.to_string(),
                    markets: values.into_iter().map(str::to_string).collect(),
                });
            }
        }
        for (country, values) in codes {
            if values.len() > 1 {
                problems.push(Inconsistency::CountryWithMultipleIsoCodes {
                    country: country.to_string(),
                    codes: values.into_iter().map(str::to_string).collect(),
                });
            }
        }

        problems.sort_by(|a, b| inconsistency_key(a).cmp(&inconsistency_key(b)));
        problems
    }
}

fn inconsistency_key(problem: &Inconsistency) -> (&str, u8) {
    match problem {
        Inconsistency::CountryInMultipleMarkets { country, .. } => (country, 0),
        Inconsistency::CountryWithMultipleIsoCodes { country, .. } => (country, 1),
    }
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn order(date: (i32, u32, u32), country: &str, market: &str, iso: &str, segment: &str) -> OrderRecord {
        OrderRecord::new("ID-1", NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(), Decimal::ONE)
            .with_location(country, market, iso)
            .with_classification(segment, "Technology")
    }

    #[test]
    fn test_years_are_sorted_and_distinct() {
        let dataset = Dataset::new(vec![
            order((2014, 1, 3), "France", "EU", "FRA", "Consumer"),
            order((2011, 5, 3), "France", "EU", "FRA", "Consumer"),
            order((2014, 9, 3), "France", "EU", "FRA", "Consumer"),
        ]);

        assert_eq!(dataset.years(), vec![2011, 2014]);
        assert_eq!(dataset.year_span(), Some((2011, 2014)));
    }

    #[test]
    fn test_empty_dataset_has_no_span() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert_eq!(dataset.year_span(), None);
        assert!(dataset.years().is_empty());
    }

    #[test]
    fn test_distinct_values_keep_first_seen_order() {
        let dataset = Dataset::new(vec![
            order((2012, 1, 1), "Germany", "EU", "DEU", "Home Office"),
            order((2012, 1, 1), "Chile", "LATAM", "CHL", "Consumer"),
            order((2012, 1, 1), "Germany", "EU", "DEU", "Consumer"),
        ]);

        assert_eq!(dataset.segments(), vec!["Home Office", "Consumer"]);
        assert_eq!(dataset.markets(), vec!["EU", "LATAM"]);
        assert_eq!(dataset.countries(), vec!["Germany", "Chile"]);
        assert_eq!(dataset.categories(), vec!["Technology"]);
    }

    #[test]
    fn test_consistent_dataset_has_no_problems() {
        let dataset = Dataset::new(vec![
            order((2012, 1, 1), "Germany", "EU", "DEU", "Consumer"),
            order((2013, 1, 1), "Germany", "EU", "DEU", "Consumer"),
        ]);

        assert!(dataset.check_consistency().is_empty());
    }

    #[test]
    fn test_consistency_reports_market_and_code_conflicts() {
        let dataset = Dataset::new(vec![
            order((2012, 1, 1), "Turkey", "EMEA", "TUR", "Consumer"),
            order((2012, 1, 1), "Turkey", "EU", "TUR", "Consumer"),
            order((2012, 1, 1), "Austria", "EU", "AUT", "Consumer"),
            order((2012, 1, 1), "Austria", "EU", "AUS", "Consumer"),
        ]);

        let problems = dataset.check_consistency();
        assert_eq!(
            problems,
            vec![
                Inconsistency::CountryWithMultipleIsoCodes {
                    country: "Austria".to_string(),
                    codes: vec!["AUT".to_string(), "AUS".to_string()],
                },
                Inconsistency::CountryInMultipleMarkets {
                    country: "Turkey".to_string(),
                    markets: vec!["EMEA".to_string(), "EU".to_string()],
                },
            ]
        );
        assert_eq!(
            problems[1].to_string(),
            "country 'Turkey' belongs to several markets: EMEA, EU"
        );
    }
}
