use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Numeric column plotted by the performance chart and summed by the KPI panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    #[serde(alias = "Sales")]
    Sales,
    #[serde(alias = "Profit")]
    Profit,
    #[serde(alias = "Quantity")]
    Quantity,
    #[serde(alias = "Discount")]
    Discount,
}

impl Metric {
    pub const ALL: [Metric; 4] = [Metric::Sales, Metric::Profit, Metric::Quantity, Metric::Discount];

    /// Column name as it appears in the dataset.
    pub fn name(self) -> &'static str {
        match self {
            Metric::Sales => "Sales",
            Metric::Profit => "Profit",
            Metric::Quantity => "Quantity",
            Metric::Discount => "Discount",
        }
    }

    /// Line and marker colour of the metric's performance chart.
    pub fn color(self) -> &'static str {
        match self {
            Metric::Sales => "rgb(137,186,130)",
            Metric::Profit => "rgb(212,135,178)",
            Metric::Quantity => "rgb(205,136,72)",
            Metric::Discount => "rgb(116,156,183)",
        }
    }

    /// Heading of the performance chart.
    pub fn title(self) -> String {
        format!("Performance of {}", self.name())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown metric '{}', expected one of sales, profit, quantity, discount", s))
    }
}

/// Classification column a sales breakdown is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Segment,
    Category,
}

impl Dimension {
    pub fn name(self) -> &'static str {
        match self {
            Dimension::Segment => "Segment",
            Dimension::Category => "Category",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_parses_case_insensitively() {
        assert_eq!("profit".parse::<Metric>().unwrap(), Metric::Profit);
        assert_eq!("Quantity".parse::<Metric>().unwrap(), Metric::Quantity);
        assert!("revenue".parse::<Metric>().is_err());
    }

    #[test]
    fn test_metric_serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Metric::Discount).unwrap(), "\"discount\"");
        let metric: Metric = serde_json::from_str("\"Sales\"").unwrap();
        assert_eq!(metric, Metric::Sales);
    }

    #[test]
    fn test_metric_title_and_default() {
        assert_eq!(Metric::default(), Metric::Sales);
        assert_eq!(Metric::Profit.title(), "Performance of Profit");
        assert_eq!(Metric::Sales.color(), "rgb(137,186,130)");
    }
}
