pub mod breakdown;
pub mod error;
pub mod filter;
pub mod frames;
pub mod geography;
pub mod kpi;
pub mod performance;

use common::{
    CountryMap, Dimension, FilterOptions, KpiSummary, MarketProfit, Metric, PerformanceSeries,
    SalesBreakdown,
};
use model::Dataset;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, instrument};

use error::{ComputeError, Result};
pub use filter::OrderFilter;

/// Rounds half-to-even to a whole number, as the dashboard displays totals.
pub(crate) fn round_to_whole(value: Decimal) -> Result<i64> {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_i64()
        .ok_or_else(|| ComputeError::Decimal(format!("{} does not fit in i64", value)))
}

/// Computes every dashboard view from one loaded dataset.
///
/// Each call filters the table and aggregates from scratch; nothing is cached
/// here.
#[derive(Debug, Clone, Copy)]
pub struct DashboardComputer<'a> {
    dataset: &'a Dataset,
}

impl<'a> DashboardComputer<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Values offered by the year, segment and category dropdowns.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            years: self.dataset.years(),
            segments: self.dataset.segments(),
            categories: self.dataset.categories(),
            markets: self.dataset.markets(),
        }
    }

    /// KPI panel totals for the filter.
    #[instrument(skip(self))]
    pub fn kpis(&self, filter: &OrderFilter) -> Result<KpiSummary> {
        let orders = filter.apply(self.dataset.orders());
        debug!("{} orders match the filter", orders.len());
        kpi::kpi_summary(&orders)
    }

    /// Monthly performance line of `metric` for the filter.
    #[instrument(skip(self))]
    pub fn performance(&self, filter: &OrderFilter, metric: Metric) -> PerformanceSeries {
        let orders = filter.apply(self.dataset.orders());
        debug!("{} orders match the filter", orders.len());
        performance::performance_series(&orders, metric)
    }

    /// Sales per segment or category, optionally limited to one year.
    #[instrument(skip(self))]
    pub fn breakdown(&self, dimension: Dimension, year: Option<i32>) -> SalesBreakdown {
        let orders = OrderFilter::year(year).apply(self.dataset.orders());
        breakdown::sales_breakdown(&orders, dimension)
    }

    /// Sales map for the year selection.
    #[instrument(skip(self))]
    pub fn country_map(&self, year: Option<i32>) -> Result<CountryMap> {
        let orders = OrderFilter::year(year).apply(self.dataset.orders());
        Ok(CountryMap {
            title: geography::country_map_title(year, self.dataset.year_span()),
            countries: geography::country_map(&orders)?,
        })
    }

    /// Market profit ranking for the year selection.
    #[instrument(skip(self))]
    pub fn market_profit(&self, year: Option<i32>) -> Result<MarketProfit> {
        let orders = OrderFilter::year(year).apply(self.dataset.orders());
        Ok(MarketProfit {
            title: geography::market_profit_title(year, self.dataset.year_span()),
            markets: geography::market_profit_ranking(&orders)?,
        })
    }
}
