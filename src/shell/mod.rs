//! Interactive console shell over a [`crate::core::registry::Registry`].
//!
//! The shell only parses primitives (menu keys, ages, list positions) and
//! leaves every business rule to the registry.

/// Menu entries and input normalization.
pub mod menu;
/// Prompt loop over any reader/writer pair.
pub mod session;
