//! CSV loading of the order dataset.
//!
//! Parsing is delegated to the `csv` crate; this module maps each row onto an
//! [`OrderRecord`], resolves the order date against a list of accepted formats
//! and decides what to do with rows that do not fit.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::dataset::{Dataset, Inconsistency};
use crate::error::{LoadError, Result};
use crate::order::OrderRecord;

/// Date formats tried in order when no explicit list is configured.
pub const DEFAULT_DATE_FORMATS: [&str; 4] = ["%d-%m-%Y", "%m/%d/%Y", "%Y-%m-%d", "%d/%m/%Y"];

/// Columns every dataset must carry.
const REQUIRED_COLUMNS: [&str; 10] = [
    "Order ID",
    "Order Date",
    "Country",
    "Market",
    "Segment",
    "Category",
    "Sales",
    "Profit",
    "Quantity",
    "Discount",
];

/// Only the first few skipped rows are logged individually.
const MAX_LOGGED_SKIPS: u64 = 10;

/// How rows are parsed and what happens to the ones that don't parse.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// `chrono` formats tried in order for the order date.
    pub date_formats: Vec<String>,
    /// Skip malformed rows instead of failing the whole load.
    pub skip_malformed_rows: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
            skip_malformed_rows: true,
        }
    }
}

/// Summary of a load.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub rows_loaded: usize,
    pub rows_skipped: u64,
    pub inconsistencies: Vec<Inconsistency>,
}

/// A loaded dataset together with its load report.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub report: LoadReport,
}

/// Raw CSV row. Columns not listed here are ignored.
#[derive(Debug, Deserialize)]
struct CsvOrderRow {
    #[serde(rename = "Order ID", default)]
    order_id: String,
    #[serde(rename = "Order Date")]
    order_date: String,
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Market")]
    market: String,
    #[serde(rename = "Segment")]
    segment: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Sales", with = "rust_decimal::serde::str")]
    sales: Decimal,
    #[serde(rename = "Profit", with = "rust_decimal::serde::str")]
    profit: Decimal,
    #[serde(rename = "Quantity")]
    quantity: u32,
    #[serde(rename = "Discount", with = "rust_decimal::serde::str")]
    discount: Decimal,
    #[serde(default)]
    iso_alpha: String,
}

/// Loads the order dataset from a CSV file.
#[instrument(skip(path, options), fields(path = %path.as_ref().display()))]
pub fn load_orders(path: impl AsRef<Path>, options: &LoadOptions) -> Result<LoadedDataset> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_orders_from_reader(file, options)
}

/// Loads the order dataset from any reader producing CSV text.
pub fn load_orders_from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<LoadedDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    debug!("Dataset columns: {:?}", headers.iter().collect::<Vec<_>>());
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column.to_string()));
        }
    }

    let mut orders = Vec::new();
    let mut skipped = 0u64;

    for (index, result) in reader.records().enumerate() {
        // header is line 1
        let fallback_row = index as u64 + 2;
        let outcome = result.map_err(LoadError::from).and_then(|record| {
            let row = record.position().map(|p| p.line()).unwrap_or(fallback_row);
            let raw: CsvOrderRow = record
                .deserialize(Some(&headers))
                .map_err(|e| LoadError::InvalidRow { row, reason: e.to_string() })?;
            to_order(raw, row, &options.date_formats)
        });

        match outcome {
            Ok(order) => orders.push(order),
            Err(e) if options.skip_malformed_rows => {
                skipped += 1;
                if skipped <= MAX_LOGGED_SKIPS {
                    warn!("Skipping malformed row: {}", e);
                }
            }
            Err(e) => return Err(e),
        }
    }

    if skipped > 0 {
        warn!("Total skipped rows: {}", skipped);
    }

    let dataset = Dataset::new(orders);
    let inconsistencies = dataset.check_consistency();
    for problem in &inconsistencies {
        warn!("Dataset inconsistency: {}", problem);
    }

    info!("Loaded {} order lines", dataset.len());

    Ok(LoadedDataset {
        report: LoadReport {
            rows_loaded: dataset.len(),
            rows_skipped: skipped,
            inconsistencies,
        },
        dataset,
    })
}

fn to_order(raw: CsvOrderRow, row: u64, date_formats: &[String]) -> Result<OrderRecord> {
    for (name, value) in [
        ("Country", &raw.country),
        ("Market", &raw.market),
        ("Segment", &raw.segment),
        ("Category", &raw.category),
    ] {
        if value.is_empty() {
            return Err(LoadError::InvalidRow {
                row,
                reason: format!("empty {}", name),
            });
        }
    }

    let order_date = parse_order_date(&raw.order_date, date_formats).ok_or_else(|| LoadError::InvalidDate {
        row,
        value: raw.order_date.clone(),
    })?;

    Ok(OrderRecord::new(raw.order_id, order_date, raw.sales)
        .with_location(raw.country, raw.market, raw.iso_alpha)
        .with_classification(raw.segment, raw.category)
        .with_profit(raw.profit)
        .with_quantity(raw.quantity)
        .with_discount(raw.discount))
}

/// Parses an order date with the first matching format.
pub fn parse_order_date(value: &str, formats: &[String]) -> Option<NaiveDate> {
    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}
