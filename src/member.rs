//! Member record and registration draft.

use serde::{Deserialize, Serialize};

/// A person enrolled in the gym.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Full name.
    pub name: String,
    /// Natural key, compared as an opaque string.
    pub member_id: String,
    /// Age in years, always positive.
    pub age: u32,
    /// Plan label such as "Monthly".
    pub plan: String,
}

/// Unvalidated registration input used to create a [`Member`].
///
/// `age` is signed so that non-positive values typed at the shell reach the
/// registry and are rejected there as a business rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDraft {
    /// Full name.
    pub name: String,
    /// Natural key.
    pub member_id: String,
    /// Age as entered.
    pub age: i64,
    /// Plan label.
    pub plan: String,
}

impl MemberDraft {
    /// Convenience constructor taking borrowed text.
    pub fn new(name: &str, member_id: &str, age: i64, plan: &str) -> Self {
        Self {
            name: name.to_string(),
            member_id: member_id.to_string(),
            age,
            plan: plan.to_string(),
        }
    }
}
