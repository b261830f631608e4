// IncomeScope - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, serde, csv.
// Must NOT depend on: ui, platform, app.

pub mod chart;
pub mod export;
pub mod filter;
pub mod model;
pub mod store;
pub mod taxonomy;
