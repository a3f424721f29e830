//! `;`-delimited line codec for members and reservations.
//!
//! Only the line terminator is stripped before splitting, so whitespace at
//! either end of a field survives. Fields are never escaped, so text
//! containing the delimiter does not survive a round trip.

use std::fmt;

use crate::{
    member::Member,
    reservation::Reservation,
    types::{ReservationStatus, UnknownStatus},
};

/// Field separator shared by both files.
pub const DELIMITER: char = ';';

const MEMBER_FIELDS: usize = 4;
const RESERVATION_FIELDS: usize = 5;

/// Why a stored line could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The line split into the wrong number of fields.
    FieldCount {
        /// Fields the record layout needs.
        expected: usize,
        /// Fields actually present.
        found: usize,
    },
    /// The age field is not a positive integer.
    InvalidAge(String),
    /// The status field is not a canonical label.
    UnknownStatus(UnknownStatus),
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount { expected, found } => {
                write!(f, "expected {expected} fields, found {found}")
            }
            Self::InvalidAge(raw) => write!(f, "invalid age '{raw}'"),
            Self::UnknownStatus(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for LineError {}

impl From<UnknownStatus> for LineError {
    fn from(value: UnknownStatus) -> Self {
        Self::UnknownStatus(value)
    }
}

/// A decoded reservation line whose member has not been resolved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationLine {
    /// Identifier of the owning member, still unresolved.
    pub member_id: String,
    /// Activity label.
    pub activity: String,
    /// Date text.
    pub date: String,
    /// Time text.
    pub time: String,
    /// Stored status.
    pub status: ReservationStatus,
}

fn split_fields(line: &str) -> Vec<&str> {
    line.trim_end_matches(['\r', '\n']).split(DELIMITER).collect()
}

/// Encodes `name;identifier;age;plan` without a line terminator.
pub fn encode_member(member: &Member) -> String {
    format!(
        "{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
        member.name, member.member_id, member.age, member.plan
    )
}

/// Encodes `memberIdentifier;activity;date;time;status` without a line terminator.
pub fn encode_reservation(reservation: &Reservation) -> String {
    format!(
        "{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
        reservation.member_id,
        reservation.activity,
        reservation.date,
        reservation.time,
        reservation.status
    )
}

/// Decodes `name;identifier;age;plan`.
pub fn decode_member(line: &str) -> Result<Member, LineError> {
    let fields = split_fields(line);
    let &[name, member_id, age, plan] = fields.as_slice() else {
        return Err(LineError::FieldCount {
            expected: MEMBER_FIELDS,
            found: fields.len(),
        });
    };

    let age = match age.trim().parse::<u32>() {
        Ok(age) if age > 0 => age,
        _ => return Err(LineError::InvalidAge(age.to_string())),
    };

    Ok(Member {
        name: name.to_string(),
        member_id: member_id.to_string(),
        age,
        plan: plan.to_string(),
    })
}

/// Decodes `memberIdentifier;activity;date;time;status`.
pub fn decode_reservation(line: &str) -> Result<ReservationLine, LineError> {
    let fields = split_fields(line);
    let &[member_id, activity, date, time, status] = fields.as_slice() else {
        return Err(LineError::FieldCount {
            expected: RESERVATION_FIELDS,
            found: fields.len(),
        });
    };

    Ok(ReservationLine {
        member_id: member_id.to_string(),
        activity: activity.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        status: status.parse()?,
    })
}
