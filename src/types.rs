//! Shared primitive IDs and the reservation status enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Positional handle of a reservation inside the live collection.
pub type ReservationId = usize;

/// Lifecycle state of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReservationStatus {
    /// Booked, not yet confirmed.
    #[default]
    Reserved,
    /// Confirmed by the member or the front desk.
    Confirmed,
    /// The class took place.
    Completed,
    /// Called off.
    Cancelled,
}

impl ReservationStatus {
    /// Every status, in display order.
    pub const ALL: [ReservationStatus; 4] = [
        ReservationStatus::Reserved,
        ReservationStatus::Confirmed,
        ReservationStatus::Completed,
        ReservationStatus::Cancelled,
    ];

    /// Canonical label, as written to the reservations file.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Reserved => "Reserved",
            ReservationStatus::Confirmed => "Confirmed",
            ReservationStatus::Completed => "Completed",
            ReservationStatus::Cancelled => "Cancelled",
        }
    }

    /// True unless the reservation is completed or cancelled.
    pub fn is_active(&self) -> bool {
        !matches!(
            self,
            ReservationStatus::Completed | ReservationStatus::Cancelled
        )
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text that is not one of the canonical status labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown reservation status '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for ReservationStatus {
    type Err = UnknownStatus;

    /// Exact, case-sensitive match on the canonical label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_canonical_labels() {
        for status in ReservationStatus::ALL {
            assert_eq!(status.as_str().parse::<ReservationStatus>(), Ok(status));
        }
        assert!("cancelled".parse::<ReservationStatus>().is_err());
        assert!("Pending".parse::<ReservationStatus>().is_err());
        assert!("".parse::<ReservationStatus>().is_err());
    }

    #[test]
    fn completed_and_cancelled_are_inactive() {
        assert!(ReservationStatus::Reserved.is_active());
        assert!(ReservationStatus::Confirmed.is_active());
        assert!(!ReservationStatus::Completed.is_active());
        assert!(!ReservationStatus::Cancelled.is_active());
        assert_eq!(ReservationStatus::default(), ReservationStatus::Reserved);
    }
}
