//! U601 Index Document UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API function for /api/ingest
//! - state.rs: UploadState machine (no DOM types, unit tested)
//! - view_model.rs: UploadPanelVm with RwSignals
//! - view.rs: Main component UploadPanel

mod model;
pub mod state;
mod view;
mod view_model;

pub use view::UploadPanel;
pub use view_model::UploadPanelVm;
