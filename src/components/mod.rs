//! Shared chrome and chart components.

pub mod charts;
pub mod navbar;
pub mod shell;
pub mod sidebar;
