//! Reservation record and booking draft.

use serde::{Deserialize, Serialize};

use crate::types::{ReservationId, ReservationStatus};

/// A booking of an activity slot by a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Position in the live collection.
    pub id: ReservationId,
    /// Identifier of the owning member.
    pub member_id: String,
    /// Activity label such as "Yoga".
    pub activity: String,
    /// Date text, expected as DD/MM/YYYY.
    pub date: String,
    /// Time text, expected as HH:MM.
    pub time: String,
    /// Current lifecycle state.
    pub status: ReservationStatus,
}

impl Reservation {
    /// True while the reservation counts toward the active report.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// Unvalidated booking input used to create a [`Reservation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDraft {
    /// Identifier of the member making the booking.
    pub member_id: String,
    /// Activity label.
    pub activity: String,
    /// Date text.
    pub date: String,
    /// Time text.
    pub time: String,
}

impl ReservationDraft {
    /// Convenience constructor taking borrowed text.
    pub fn new(member_id: &str, activity: &str, date: &str, time: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            activity: activity.to_string(),
            date: date.to_string(),
            time: time.to_string(),
        }
    }
}
