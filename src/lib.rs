//! Gym membership and class reservation tracking with flat-text persistence.
//!
//! # Examples
//!
//! In-memory usage with [`core::registry::Registry`]:
//! ```
//! use gymtrack::{
//!     core::registry::Registry,
//!     member::MemberDraft,
//!     reservation::ReservationDraft,
//!     types::ReservationStatus,
//! };
//!
//! let mut registry = Registry::new();
//! registry.register_member(MemberDraft::new("Ana", "111", 25, "Monthly")).expect("register");
//! let res = registry
//!     .add_reservation(ReservationDraft::new("111", "Yoga", "01/01/2026", "10:00"))
//!     .expect("reserve");
//! assert_eq!(res.status, ReservationStatus::Reserved);
//! assert_eq!(registry.active_count_report().get("Ana"), Some(1));
//! ```
//!
//! Backed by the flat-text store:
//! ```no_run
//! use gymtrack::{
//!     core::registry::Registry,
//!     member::MemberDraft,
//!     persist::flat_file::FlatFileStore,
//! };
//!
//! let (mut registry, report) = Registry::open(Box::new(FlatFileStore::in_dir("data")))
//!     .expect("open store");
//! assert!(report.is_clean());
//! registry
//!     .register_member(MemberDraft::new("Bea", "222", 30, "Quarterly"))
//!     .expect("register");
//! ```
#![warn(missing_docs)]

/// Tracker configuration.
pub mod config;
/// Registry and reporting.
pub mod core;
/// Member records.
pub mod member;
/// Persistence abstraction and flat-text implementation.
pub mod persist;
/// Reservation records.
pub mod reservation;
/// Interactive console shell.
pub mod shell;
/// Shared primitive types and enums.
pub mod types;
