pub mod breakdown;
pub mod filters;
pub mod geography;
pub mod health;
pub mod kpis;
pub mod performance;
