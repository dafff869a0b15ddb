//! U602 Ask Question UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API function for /api/query
//! - state.rs: QueryState machine (no DOM types, unit tested)
//! - view_model.rs: QueryPanelVm with RwSignals
//! - view.rs: Main component QueryPanel

mod model;
pub mod state;
mod view;
mod view_model;

pub use view::QueryPanel;
pub use view_model::QueryPanelVm;
