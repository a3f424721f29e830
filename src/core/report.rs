use hashbrown::HashMap;

use crate::{member::Member, reservation::Reservation};

/// Active reservation counts keyed by member name.
///
/// Members sharing a name fold into one entry. Entries keep the order in
/// which each name first appears among the members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveCountReport {
    entries: Vec<(String, usize)>,
    by_name: HashMap<String, usize>,
}

impl ActiveCountReport {
    /// Counts active reservations of `members`. Reservations whose owner is
    /// not among `members` are ignored.
    pub fn build(members: &[Member], reservations: &[Reservation]) -> Self {
        let mut report = Self::default();
        let mut name_of: HashMap<&str, &str> = HashMap::new();

        for member in members {
            name_of
                .entry(member.member_id.as_str())
                .or_insert(member.name.as_str());
            if !report.by_name.contains_key(&member.name) {
                report
                    .by_name
                    .insert(member.name.clone(), report.entries.len());
                report.entries.push((member.name.clone(), 0));
            }
        }

        for reservation in reservations.iter().filter(|r| r.is_active()) {
            let Some(name) = name_of.get(reservation.member_id.as_str()) else {
                continue;
            };
            if let Some(&slot) = report.by_name.get(*name) {
                report.entries[slot].1 += 1;
            }
        }

        report
    }

    /// Active count for `name`, or `None` when no member has that name.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct member names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True only when there were no members.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Unordered name to count map.
    pub fn to_map(&self) -> HashMap<String, usize> {
        self.entries.iter().cloned().collect()
    }
}
