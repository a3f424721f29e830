use gymtrack::{
    core::registry::{Registry, RegistryError},
    member::MemberDraft,
    reservation::ReservationDraft,
    types::ReservationStatus,
};

fn member(name: &str, id: &str, age: i64) -> MemberDraft {
    MemberDraft::new(name, id, age, "Monthly")
}

fn yoga(member_id: &str) -> ReservationDraft {
    ReservationDraft::new(member_id, "Yoga", "01/01/2026", "10:00")
}

fn report_pairs(registry: &Registry) -> Vec<(String, usize)> {
    registry
        .active_count_report()
        .iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect()
}

#[test]
fn end_to_end_report_follows_status() {
    let mut registry = Registry::new();
    registry
        .register_member(MemberDraft::new("Ana", "111", 25, "Monthly"))
        .unwrap();
    registry
        .register_member(MemberDraft::new("Bea", "222", 30, "Quarterly"))
        .unwrap();

    let res = registry.add_reservation(yoga("111")).unwrap();
    assert_eq!(res.status, ReservationStatus::Reserved);
    assert_eq!(
        report_pairs(&registry),
        vec![("Ana".to_string(), 1), ("Bea".to_string(), 0)]
    );

    registry.update_reservation_status(res.id, "Cancelled").unwrap();
    assert_eq!(
        report_pairs(&registry),
        vec![("Ana".to_string(), 0), ("Bea".to_string(), 0)]
    );
}

#[test]
fn duplicate_identifier_leaves_members_unchanged() {
    let mut registry = Registry::new();
    registry.register_member(member("Ana", "111", 25)).unwrap();
    let before = registry.members().to_vec();

    let err = registry.register_member(member("Other", "111", 40)).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateMember(id) if id == "111"));
    assert_eq!(registry.members(), before.as_slice());
}

#[test]
fn invalid_member_fields_are_rejected_without_mutation() {
    let mut registry = Registry::new();

    assert!(matches!(
        registry.register_member(member("", "111", 25)),
        Err(RegistryError::EmptyName)
    ));
    assert!(matches!(
        registry.register_member(member("Ana", "", 25)),
        Err(RegistryError::EmptyMemberId)
    ));
    assert!(matches!(
        registry.register_member(member("Ana", "111", 0)),
        Err(RegistryError::InvalidAge(0))
    ));
    assert!(matches!(
        registry.register_member(member("Ana", "111", -4)),
        Err(RegistryError::InvalidAge(-4))
    ));
    assert!(matches!(
        registry.register_member(member("Ana", "111", i64::from(u32::MAX) + 1)),
        Err(RegistryError::InvalidAge(_))
    ));
    assert_eq!(registry.member_count(), 0);
}

#[test]
fn empty_plan_is_allowed() {
    let mut registry = Registry::new();
    let created = registry
        .register_member(MemberDraft::new("Ana", "111", 25, ""))
        .unwrap();
    assert_eq!(created.plan, "");
    assert_eq!(registry.find_member("111"), Some(&created));
}

#[test]
fn member_lookup_is_exact() {
    let mut registry = Registry::new();
    registry.register_member(member("Ana", "abc", 25)).unwrap();

    assert!(registry.find_member("abc").is_some());
    assert!(registry.find_member("ABC").is_none());
    assert!(registry.find_member("abc ").is_none());
}

#[test]
fn reservation_for_unknown_member_is_rejected() {
    let mut registry = Registry::new();
    registry.register_member(member("Ana", "111", 25)).unwrap();
    registry.add_reservation(yoga("111")).unwrap();

    let err = registry.add_reservation(yoga("999")).unwrap_err();
    assert!(matches!(err, RegistryError::UnknownMember(id) if id == "999"));
    assert_eq!(registry.reservation_count(), 1);
}

#[test]
fn blank_reservation_fields_are_rejected() {
    let mut registry = Registry::new();
    registry.register_member(member("Ana", "111", 25)).unwrap();

    for (draft, field) in [
        (ReservationDraft::new("111", "", "01/01/2026", "10:00"), "activity"),
        (ReservationDraft::new("111", "Yoga", "", "10:00"), "date"),
        (ReservationDraft::new("111", "Yoga", "01/01/2026", ""), "time"),
    ] {
        let err = registry.add_reservation(draft).unwrap_err();
        assert!(matches!(err, RegistryError::EmptyReservationField(f) if f == field));
    }
    assert!(registry.reservations().is_empty());
}

#[test]
fn unknown_status_keeps_previous_value() {
    let mut registry = Registry::new();
    registry.register_member(member("Ana", "111", 25)).unwrap();
    let res = registry.add_reservation(yoga("111")).unwrap();
    registry.update_reservation_status(res.id, "Confirmed").unwrap();

    for bad in ["Pending", "confirmed", "", "Cancelado"] {
        let err = registry.update_reservation_status(res.id, bad).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownStatus(_)));
    }
    assert_eq!(
        registry.reservation(res.id).unwrap().status,
        ReservationStatus::Confirmed
    );
}

#[test]
fn missing_reservation_handle_is_rejected() {
    let mut registry = Registry::new();
    assert!(matches!(
        registry.update_reservation_status(3, "Confirmed"),
        Err(RegistryError::MissingReservation(3))
    ));
}

#[test]
fn reservations_by_member_keep_insertion_order() {
    let mut registry = Registry::new();
    registry.register_member(member("Ana", "111", 25)).unwrap();
    registry.register_member(member("Bea", "222", 30)).unwrap();

    registry
        .add_reservation(ReservationDraft::new("111", "Yoga", "01/01/2026", "10:00"))
        .unwrap();
    registry
        .add_reservation(ReservationDraft::new("222", "Boxing", "01/01/2026", "11:00"))
        .unwrap();
    registry
        .add_reservation(ReservationDraft::new("111", "Pilates", "02/01/2026", "09:00"))
        .unwrap();

    let activities: Vec<&str> = registry
        .reservations_for_member("111")
        .into_iter()
        .map(|r| r.activity.as_str())
        .collect();
    assert_eq!(activities, vec!["Yoga", "Pilates"]);
    assert!(registry.reservations_for_member("333").is_empty());

    let ids: Vec<usize> = registry.reservations().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn report_counts_only_active_reservations() {
    let mut registry = Registry::new();
    registry.register_member(member("Ana", "111", 25)).unwrap();
    for _ in 0..4 {
        registry.add_reservation(yoga("111")).unwrap();
    }
    registry.update_reservation_status(0, "Completed").unwrap();
    registry.update_reservation_status(1, "Cancelled").unwrap();
    registry.update_reservation_status(2, "Confirmed").unwrap();

    assert_eq!(registry.active_count_report().get("Ana"), Some(2));
}

#[test]
fn report_is_empty_only_without_members() {
    let mut registry = Registry::new();
    assert!(registry.active_count_report().is_empty());

    registry.register_member(member("Ana", "111", 25)).unwrap();
    let report = registry.active_count_report();
    assert_eq!(report.len(), 1);
    assert_eq!(report.get("Ana"), Some(0));
}

#[test]
fn demo_seed_registers_two_members() {
    let mut registry = Registry::new();
    registry.seed_demo_data().unwrap();

    assert_eq!(registry.member_count(), 2);
    assert_eq!(registry.reservation_count(), 2);
    assert!(registry.active_count_report().iter().all(|(_, count)| count == 1));
}
