// IncomeScope - app/mod.rs
//
// Application layer: orchestration, state management, session persistence.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod session;
pub mod state;
