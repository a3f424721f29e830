/// File-backed store.
pub mod flat_file;
/// Line codec for both files.
pub mod line;

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::{member::Member, reservation::Reservation};

use self::line::LineError;

/// Which of the two persisted collections an outcome refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// The members file.
    Members,
    /// The reservations file.
    Reservations,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Members => f.write_str("members"),
            Collection::Reservations => f.write_str("reservations"),
        }
    }
}

/// Failure while reading or writing the store.
#[derive(Debug)]
pub enum PersistError {
    /// The storage directory is missing and could not be created.
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// A file could not be opened, read or written.
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// A stored line did not decode.
    Malformed {
        /// File involved.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: LineError,
    },
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDir { path, source } => {
                write!(f, "cannot create storage directory {}: {source}", path.display())
            }
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Malformed { path, line, reason } => {
                write!(f, "{}:{line}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } | Self::Io { source, .. } => Some(source),
            Self::Malformed { reason, .. } => Some(reason),
        }
    }
}

/// Result alias for store operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// How one collection fared during a load pass.
#[derive(Debug)]
pub enum LoadStatus {
    /// Every line was read.
    Loaded,
    /// The file does not exist yet; the collection starts empty.
    Missing,
    /// Reading stopped early; records decoded before the failure are kept.
    Failed(PersistError),
}

impl LoadStatus {
    /// True when reading stopped on an error.
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadStatus::Failed(_))
    }
}

/// Recoverable conditions observed while loading.
#[derive(Debug)]
pub struct LoadReport {
    /// Outcome for the members file.
    pub members: LoadStatus,
    /// Outcome for the reservations file.
    pub reservations: LoadStatus,
    /// Member identifiers of reservation lines dropped for lack of a member.
    pub orphans: Vec<String>,
}

impl LoadReport {
    /// True when both files were read in full and nothing was dropped.
    pub fn is_clean(&self) -> bool {
        matches!(self.members, LoadStatus::Loaded)
            && matches!(self.reservations, LoadStatus::Loaded)
            && self.orphans.is_empty()
    }
}

/// Collections reconstructed by [`Persistence::load`].
#[derive(Debug)]
pub struct Loaded {
    /// Members in file order.
    pub members: Vec<Member>,
    /// Reservations that resolved to a member, in file order.
    pub reservations: Vec<Reservation>,
    /// What went wrong, if anything.
    pub report: LoadReport,
}

/// Per-collection write failures from a save pass.
#[derive(Debug, Default)]
pub struct SaveReport {
    /// Write failure for the members file.
    pub members: Option<PersistError>,
    /// Write failure for the reservations file.
    pub reservations: Option<PersistError>,
}

impl SaveReport {
    /// True when both files were written.
    pub fn is_clean(&self) -> bool {
        self.members.is_none() && self.reservations.is_none()
    }

    /// The failure recorded for `collection`, if any.
    pub fn failure(&self, collection: Collection) -> Option<&PersistError> {
        match collection {
            Collection::Members => self.members.as_ref(),
            Collection::Reservations => self.reservations.as_ref(),
        }
    }
}

/// Durable home of the member and reservation collections.
///
/// `Err` is reserved for fatal conditions. Per-collection failures are
/// reported through [`SaveReport`] and [`LoadReport`] instead.
pub trait Persistence {
    /// Rewrites both collections in full.
    fn save(
        &mut self,
        members: &[Member],
        reservations: &[Reservation],
    ) -> PersistResult<SaveReport>;
    /// Reads both collections back, resolving reservations to members.
    fn load(&mut self) -> PersistResult<Loaded>;
}
