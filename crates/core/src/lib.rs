//! Core library: query normalization, provider aggregation, text
//! classification, autocomplete.

pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod models;
pub mod normalize;
pub mod risk_table;
pub mod taxonomy;
