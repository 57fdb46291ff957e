use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

/// A single order line of the sales dataset.
///
/// `order_year` and `order_month` are derived from `order_date` when the record
/// is created and never recomputed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    order_id: String,
    order_date: NaiveDate,
    country: String,
    market: String,
    iso_alpha: String,
    segment: String,
    category: String,
    sales: Decimal,
    profit: Decimal,
    quantity: u32,
    discount: Decimal,
    order_year: i32,
    order_month: u32,
}

impl OrderRecord {
    /// Creates a new order line with the given sales amount.
    ///
    /// Location and classification fields start empty, profit and discount
    /// start at zero and quantity at one. Use the `with_*` methods to fill them.
    pub fn new(order_id: impl Into<String>, order_date: NaiveDate, sales: Decimal) -> Self {
        Self {
            order_id: order_id.into(),
            order_date,
            country: String::new(),
            market: String::new(),
            iso_alpha: String::new(),
            segment: String::new(),
            category: String::new(),
            sales,
            profit: Decimal::ZERO,
            quantity: 1,
            discount: Decimal::ZERO,
            order_year: order_date.year(),
            order_month: order_date.month(),
        }
    }

    /// Sets the country, its market and its ISO alpha-3 code.
    pub fn with_location(
        mut self,
        country: impl Into<String>,
        market: impl Into<String>,
        iso_alpha: impl Into<String>,
    ) -> Self {
        self.country = country.into();
        self.market = market.into();
        self.iso_alpha = iso_alpha.into();
        self
    }

    /// Sets the customer segment and product category.
    pub fn with_classification(mut self, segment: impl Into<String>, category: impl Into<String>) -> Self {
        self.segment = segment.into();
        self.category = category.into();
        self
    }

    pub fn with_profit(mut self, profit: Decimal) -> Self {
        self.profit = profit;
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_discount(mut self, discount: Decimal) -> Self {
        self.discount = discount;
        self
    }

    /// Gets the order identifier. Several lines may share one order id.
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn market(&self) -> &str {
        &self.market
    }

    /// Gets the ISO alpha-3 code of the country. Empty when the dataset has none.
    pub fn iso_alpha(&self) -> &str {
        &self.iso_alpha
    }

    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn sales(&self) -> Decimal {
        self.sales
    }

    pub fn profit(&self) -> Decimal {
        self.profit
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// Gets the calendar year of the order date.
    pub fn order_year(&self) -> i32 {
        self.order_year
    }

    /// Gets the calendar month (1-12) of the order date.
    pub fn order_month(&self) -> u32 {
        self.order_month
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_fields_follow_order_date() {
        let order = OrderRecord::new(
            "CA-2012-124891",
            NaiveDate::from_ymd_opt(2012, 7, 31).unwrap(),
            Decimal::new(229_798, 2),
        );

        assert_eq!(order.order_year(), 2012);
        assert_eq!(order.order_month(), 7);
        assert_eq!(order.quantity(), 1);
        assert_eq!(order.profit(), Decimal::ZERO);
    }

    #[test]
    fn test_builder_methods_set_fields() {
        let order = OrderRecord::new("IN-2013-77878", NaiveDate::from_ymd_opt(2013, 2, 5).unwrap(), Decimal::new(3709, 1))
            .with_location("Australia", "APAC", "AUS")
            .with_classification("Corporate", "Furniture")
            .with_profit(Decimal::new(-2834, 1))
            .with_quantity(9)
            .with_discount(Decimal::new(1, 1));

        assert_eq!(order.country(), "Australia");
        assert_eq!(order.market(), "APAC");
        assert_eq!(order.iso_alpha(), "AUS");
        assert_eq!(order.segment(), "Corporate");
        assert_eq!(order.category(), "Furniture");
        assert_eq!(order.profit(), Decimal::new(-2834, 1));
        assert_eq!(order.quantity(), 9);
        assert_eq!(order.discount(), Decimal::new(1, 1));
    }
}
