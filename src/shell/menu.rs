//! Top-level menu entries.

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Register a new member.
    RegisterMember,
    /// Book an activity for a member.
    AddReservation,
    /// Print every reservation.
    ListReservations,
    /// Change the status of one of a member's reservations.
    UpdateStatus,
    /// Print active reservation counts per member name.
    ActiveReport,
    /// Leave the shell.
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::RegisterMember,
        MenuChoice::AddReservation,
        MenuChoice::ListReservations,
        MenuChoice::UpdateStatus,
        MenuChoice::ActiveReport,
        MenuChoice::Exit,
    ];

    /// What the user types to pick this entry.
    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::RegisterMember => "1",
            MenuChoice::AddReservation => "2",
            MenuChoice::ListReservations => "3",
            MenuChoice::UpdateStatus => "4",
            MenuChoice::ActiveReport => "5",
            MenuChoice::Exit => "0",
        }
    }

    /// Text shown next to the key.
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::RegisterMember => "Register new member",
            MenuChoice::AddReservation => "Book a class",
            MenuChoice::ListReservations => "List all reservations",
            MenuChoice::UpdateStatus => "Update a reservation's status",
            MenuChoice::ActiveReport => "Active reservations per member",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Entry whose key matches `input`, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.into_iter().find(|choice| choice.key() == input)
    }
}

/// Upper-cases the first letter and lower-cases the rest, so that
/// `cancelled` and `CANCELLED` both become `Cancelled`.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
