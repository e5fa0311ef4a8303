//! Project management module.
//!
//! ## Modules
//!
//! - [`layout`] - The directory and file manifest
//! - [`templates`] - Suffix-driven placeholder content
//! - [`scaffold`] - Materialising a layout on disk

pub mod layout;
pub mod scaffold;
pub mod templates;

pub use scaffold::{ScaffoldEvent, generate_project_structure};
