//! In-memory registry and reporting.

/// Authoritative member and reservation registry.
pub mod registry;
/// Active reservation count report.
pub mod report;
