use std::fmt;

use crate::{
    member::{Member, MemberDraft},
    persist::{LoadReport, PersistError, PersistResult, Persistence, SaveReport},
    reservation::{Reservation, ReservationDraft},
    types::{ReservationId, ReservationStatus, UnknownStatus},
};

use super::report::ActiveCountReport;

/// Why a registry operation was refused.
#[derive(Debug)]
pub enum RegistryError {
    /// A member with this identifier is already registered.
    DuplicateMember(String),
    /// Member name is empty.
    EmptyName,
    /// Member identifier is empty.
    EmptyMemberId,
    /// Age is zero, negative or too large.
    InvalidAge(i64),
    /// No member has this identifier.
    UnknownMember(String),
    /// Names the blank reservation field.
    EmptyReservationField(&'static str),
    /// Status text is not a canonical label.
    UnknownStatus(UnknownStatus),
    /// No reservation has this handle.
    MissingReservation(ReservationId),
    /// Fatal persistence failure. The in-memory change has already been applied.
    Persist(PersistError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateMember(id) => write!(f, "a member with identifier {id} already exists"),
            Self::EmptyName => f.write_str("member name must not be empty"),
            Self::EmptyMemberId => f.write_str("member identifier must not be empty"),
            Self::InvalidAge(age) => write!(f, "age must be a positive number, got {age}"),
            Self::UnknownMember(id) => write!(f, "no member with identifier {id}"),
            Self::EmptyReservationField(field) => write!(f, "reservation {field} must not be empty"),
            Self::UnknownStatus(err) => write!(
                f,
                "{err}; valid: {}",
                ReservationStatus::ALL.map(|s| s.as_str()).join(", ")
            ),
            Self::MissingReservation(id) => write!(f, "no reservation #{id}"),
            Self::Persist(err) => write!(f, "storage failure: {err}"),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownStatus(err) => Some(err),
            Self::Persist(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PersistError> for RegistryError {
    fn from(value: PersistError) -> Self {
        Self::Persist(value)
    }
}

impl From<UnknownStatus> for RegistryError {
    fn from(value: UnknownStatus) -> Self {
        Self::UnknownStatus(value)
    }
}

/// Authoritative owner of members and reservations.
///
/// Each successful mutation rewrites the whole store through the attached
/// sink. Without a sink the registry is purely in-memory.
#[derive(Default)]
pub struct Registry {
    members: Vec<Member>,
    reservations: Vec<Reservation>,
    sink: Option<Box<dyn Persistence>>,
    last_save: Option<SaveReport>,
}

impl Registry {
    /// Empty in-memory registry with no sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty registry that saves through `sink` without loading from it.
    pub fn with_sink(sink: Box<dyn Persistence>) -> Self {
        Self {
            sink: Some(sink),
            ..Self::default()
        }
    }

    /// Loads both collections from `sink` and keeps it for later saves.
    pub fn open(mut sink: Box<dyn Persistence>) -> PersistResult<(Self, LoadReport)> {
        let loaded = sink.load()?;
        log::info!(
            "registry opened with {} members and {} reservations",
            loaded.members.len(),
            loaded.reservations.len()
        );
        let registry = Self {
            members: loaded.members,
            reservations: loaded.reservations,
            sink: Some(sink),
            last_save: None,
        };
        Ok((registry, loaded.report))
    }

    /// Validates `draft` and appends the member. Nothing changes on `Err`
    /// unless it is [`RegistryError::Persist`].
    pub fn register_member(&mut self, draft: MemberDraft) -> Result<Member, RegistryError> {
        if self.find_member(&draft.member_id).is_some() {
            log::debug!("rejected duplicate member {}", draft.member_id);
            return Err(RegistryError::DuplicateMember(draft.member_id));
        }
        if draft.name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if draft.member_id.is_empty() {
            return Err(RegistryError::EmptyMemberId);
        }
        let age = match u32::try_from(draft.age) {
            Ok(age) if age > 0 => age,
            _ => return Err(RegistryError::InvalidAge(draft.age)),
        };

        let member = Member {
            name: draft.name,
            member_id: draft.member_id,
            age,
            plan: draft.plan,
        };
        self.members.push(member.clone());
        log::info!("registered member {} ({})", member.name, member.member_id);

        self.persist()?;
        Ok(member)
    }

    /// First member whose identifier matches exactly.
    pub fn find_member(&self, member_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.member_id == member_id)
    }

    /// Books an activity for an existing member with status `Reserved`.
    pub fn add_reservation(
        &mut self,
        draft: ReservationDraft,
    ) -> Result<Reservation, RegistryError> {
        if self.find_member(&draft.member_id).is_none() {
            log::debug!("rejected reservation for unknown member {}", draft.member_id);
            return Err(RegistryError::UnknownMember(draft.member_id));
        }
        for (field, value) in [
            ("activity", &draft.activity),
            ("date", &draft.date),
            ("time", &draft.time),
        ] {
            if value.is_empty() {
                return Err(RegistryError::EmptyReservationField(field));
            }
        }

        let reservation = Reservation {
            id: self.reservations.len(),
            member_id: draft.member_id,
            activity: draft.activity,
            date: draft.date,
            time: draft.time,
            status: ReservationStatus::default(),
        };
        self.reservations.push(reservation.clone());
        log::info!(
            "reserved {} on {} {} for member {}",
            reservation.activity,
            reservation.date,
            reservation.time,
            reservation.member_id
        );

        self.persist()?;
        Ok(reservation)
    }

    /// The live collection in insertion order.
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Reservation with handle `id`.
    pub fn reservation(&self, id: ReservationId) -> Option<&Reservation> {
        self.reservations.get(id)
    }

    /// Reservations of `member_id` in insertion order.
    pub fn reservations_for_member(&self, member_id: &str) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.member_id == member_id)
            .collect()
    }

    /// Sets the status of reservation `id` from its canonical label.
    pub fn update_reservation_status(
        &mut self,
        id: ReservationId,
        new_status: &str,
    ) -> Result<(), RegistryError> {
        let status: ReservationStatus = new_status.parse()?;
        let reservation = self
            .reservations
            .get_mut(id)
            .ok_or(RegistryError::MissingReservation(id))?;

        reservation.status = status;
        log::info!(
            "reservation #{id} ({} on {}) is now {status}",
            reservation.activity,
            reservation.date
        );

        self.persist()
    }

    /// Active reservation counts per member name.
    pub fn active_count_report(&self) -> ActiveCountReport {
        ActiveCountReport::build(&self.members, &self.reservations)
    }

    /// Members in registration order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// The member a reservation belongs to.
    pub fn member_of(&self, reservation: &Reservation) -> Option<&Member> {
        self.find_member(&reservation.member_id)
    }

    /// Number of members.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Number of reservations.
    pub fn reservation_count(&self) -> usize {
        self.reservations.len()
    }

    /// Outcome of the most recent save, if any save has run.
    pub fn last_save(&self) -> Option<&SaveReport> {
        self.last_save.as_ref()
    }

    /// Registers two demo members with one reservation each.
    pub fn seed_demo_data(&mut self) -> Result<(), RegistryError> {
        log::info!("seeding demo data");
        let first = self.register_member(MemberDraft::new(
            "Alex Carter",
            "111.111.111-11",
            25,
            "Monthly",
        ))?;
        let second = self.register_member(MemberDraft::new(
            "Jamie Rivera",
            "222.222.222-22",
            30,
            "Quarterly",
        ))?;
        self.add_reservation(ReservationDraft::new(
            &first.member_id,
            "Weight Training",
            "20/11/2025",
            "18:00",
        ))?;
        self.add_reservation(ReservationDraft::new(
            &second.member_id,
            "Spinning",
            "21/11/2025",
            "09:00",
        ))?;
        Ok(())
    }

    fn persist(&mut self) -> Result<(), RegistryError> {
        let Some(sink) = self.sink.as_mut() else {
            return Ok(());
        };
        let report = sink.save(&self.members, &self.reservations)?;
        if !report.is_clean() {
            log::warn!("in-memory state kept despite save failure");
        }
        self.last_save = Some(report);
        Ok(())
    }
}
