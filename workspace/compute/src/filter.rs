use model::OrderRecord;

/// Dashboard filter selection.
///
/// Every field is optional: a missing selection means the rows are not
/// filtered on that field. Selections combine conjunctively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OrderFilter {
    pub year: Option<i32>,
    pub segment: Option<String>,
    pub category: Option<String>,
}

impl OrderFilter {
    /// Creates a filter, treating empty or blank strings as "no selection".
    pub fn new(year: Option<i32>, segment: Option<String>, category: Option<String>) -> Self {
        Self {
            year,
            segment: non_blank(segment),
            category: non_blank(category),
        }
    }

    /// Filter on the order year only.
    pub fn year(year: Option<i32>) -> Self {
        Self {
            year,
            ..Self::default()
        }
    }

    /// Returns `true` when no field is selected.
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.segment.is_none() && self.category.is_none()
    }

    /// Returns `true` when the order passes every selected field.
    pub fn matches(&self, order: &OrderRecord) -> bool {
        self.year.is_none_or(|year| order.order_year() == year)
            && self.segment.as_deref().is_none_or(|segment| order.segment() == segment)
            && self.category.as_deref().is_none_or(|category| order.category() == category)
    }

    /// Selects the matching orders, keeping dataset order.
    pub fn apply<'a>(&self, orders: &'a [OrderRecord]) -> Vec<&'a OrderRecord> {
        orders.iter().filter(|order| self.matches(order)).collect()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
