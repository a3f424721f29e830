use proptest::prelude::*;
use tempfile::TempDir;

use gymtrack::{
    core::registry::Registry,
    member::MemberDraft,
    persist::flat_file::FlatFileStore,
    reservation::ReservationDraft,
    types::ReservationStatus,
};

#[derive(Debug, Clone)]
struct MemberSpec {
    name: String,
    age: u16,
    plan: String,
}

#[derive(Debug, Clone)]
struct BookingSpec {
    owner: u8,
    activity: String,
    date: String,
    time: String,
    status: u8,
}

// Text that survives the line codec: no delimiter and no line breaks.
fn field() -> impl Strategy<Value = String> {
    "[ A-Za-z0-9À-ÿ./:-]{1,12}"
}

fn member_strategy() -> impl Strategy<Value = MemberSpec> {
    (field(), 1u16..120, field()).prop_map(|(name, age, plan)| MemberSpec { name, age, plan })
}

fn booking_strategy() -> impl Strategy<Value = BookingSpec> {
    (any::<u8>(), field(), field(), field(), 0u8..4).prop_map(
        |(owner, activity, date, time, status)| BookingSpec {
            owner,
            activity,
            date,
            time,
            status,
        },
    )
}

fn member_id(idx: usize) -> String {
    format!("{idx:03}.000.000-{idx:02}")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn saved_state_reloads_identically(
        members in prop::collection::vec(member_strategy(), 1..12),
        bookings in prop::collection::vec(booking_strategy(), 0..24),
    ) {
        let tmp = TempDir::new().expect("tmp");
        let mut registry = Registry::with_sink(Box::new(FlatFileStore::in_dir(tmp.path())));

        for (idx, spec) in members.iter().enumerate() {
            registry
                .register_member(MemberDraft::new(&spec.name, &member_id(idx), i64::from(spec.age), &spec.plan))
                .expect("register");
        }
        for spec in &bookings {
            let owner = member_id(usize::from(spec.owner) % members.len());
            let res = registry
                .add_reservation(ReservationDraft::new(&owner, &spec.activity, &spec.date, &spec.time))
                .expect("reserve");
            let status = ReservationStatus::ALL[usize::from(spec.status)];
            registry.update_reservation_status(res.id, status.as_str()).expect("status");
        }

        let (reloaded, report) = Registry::open(Box::new(FlatFileStore::in_dir(tmp.path()))).expect("open");
        prop_assert!(report.is_clean());
        prop_assert_eq!(reloaded.members(), registry.members());
        prop_assert_eq!(reloaded.reservations(), registry.reservations());
        prop_assert_eq!(reloaded.active_count_report(), registry.active_count_report());
    }

    #[test]
    fn report_tracks_one_reservation_through_its_lifecycle(
        count in 1usize..10,
        target in any::<u8>(),
        closing in prop::sample::select(vec!["Cancelled", "Completed"]),
    ) {
        let mut registry = Registry::new();
        for idx in 0..count {
            registry
                .register_member(MemberDraft::new(&format!("Member {idx}"), &member_id(idx), 30, "Monthly"))
                .expect("register");
        }

        let report = registry.active_count_report();
        prop_assert_eq!(report.len(), count);
        prop_assert!(report.iter().all(|(_, n)| n == 0));

        let idx = usize::from(target) % count;
        let name = format!("Member {idx}");
        let res = registry
            .add_reservation(ReservationDraft::new(&member_id(idx), "Yoga", "01/01/2026", "10:00"))
            .expect("reserve");
        prop_assert_eq!(registry.active_count_report().get(&name), Some(1));

        registry.update_reservation_status(res.id, closing).expect("close");
        prop_assert_eq!(registry.active_count_report().get(&name), Some(0));
        prop_assert_eq!(registry.active_count_report(), report);
    }
}
