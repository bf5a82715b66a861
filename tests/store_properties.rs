use pau::catalog::Catalog;
use pau::domain::{NewApplication, Position, PositionCategory, PositionStatus};
use pau::store::ranking;
use pau::store::ApplicationStore;
use pau::PortalError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn catalog() -> Catalog {
    let mut positions: Vec<Position> = (0..12)
        .map(|n| Position::new(format!("p-{n}"), format!("Ayudantía {n}"), "Informática"))
        .collect();
    positions.push(
        Position::new("fis-110", "Física General I", "Física")
            .with_categories([PositionCategory::Catedra, PositionCategory::Laboratorio]),
    );
    positions.push(Position::new("fis-130", "Física General III", "Física").with_status(PositionStatus::Closed));
    Catalog::new(positions).unwrap()
}

fn priorities(store: &ApplicationStore) -> Vec<u32> {
    store.pending().iter().filter_map(|a| a.priority).collect()
}

fn assert_dense(store: &ApplicationStore) {
    let expected: Vec<u32> = (1..=u32::try_from(store.pending_len()).unwrap()).collect();
    assert_eq!(priorities(store), expected);
    assert!(ranking::is_dense(store.all()));
    assert!(store.all().iter().filter(|a| !a.is_pending()).all(|a| a.priority.is_none()));
}

#[test]
fn priorities_stay_dense_under_mixed_operations() {
    let catalog = catalog();

    for seed in 0..20 {
        let mut store = ApplicationStore::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..200 {
            let pending = store.pending_len();
            match rng.gen_range(0..5) {
                0 => {
                    let id = format!("p-{}", rng.gen_range(0..12));
                    let _ = store.create(&catalog, NewApplication::new(id, None));
                }
                1 if pending > 0 => {
                    let id = store.pending()[rng.gen_range(0..pending)].id.clone();
                    store.move_up(&id);
                }
                2 if pending > 0 => {
                    let id = store.pending()[rng.gen_range(0..pending)].id.clone();
                    store.move_down(&id);
                }
                3 if pending > 0 => {
                    store.move_to_index(rng.gen_range(0..pending), rng.gen_range(0..pending));
                }
                4 if pending > 0 => {
                    let id = store.pending()[rng.gen_range(0..pending)].id.clone();
                    assert!(store.cancel(&id));
                }
                _ => {}
            }
            assert_dense(&store);
        }
    }
}

#[test]
fn moving_past_either_end_is_a_no_op() {
    let catalog = catalog();
    let mut store = ApplicationStore::new();
    for n in 0..3 {
        store.create(&catalog, NewApplication::new(format!("p-{n}"), None)).unwrap();
    }
    let order: Vec<String> = store.pending().iter().map(|a| a.id.clone()).collect();

    assert!(!store.move_up(&order[0]));
    assert!(!store.move_down(&order[2]));
    assert!(!store.move_to_index(0, 3));
    let after: Vec<String> = store.pending().iter().map(|a| a.id.clone()).collect();
    assert_eq!(after, order);
}

#[test]
fn cancel_shifts_only_lower_ranked_applications() {
    let catalog = catalog();
    let mut store = ApplicationStore::new();
    let ids: Vec<String> = (0..5)
        .map(|n| store.create(&catalog, NewApplication::new(format!("p-{n}"), None)).unwrap().id)
        .collect();

    assert!(store.cancel(&ids[2]));
    let priority_of = |store: &ApplicationStore, id: &str| store.get(id).and_then(|a| a.priority);

    assert_eq!(priority_of(&store, &ids[0]), Some(1));
    assert_eq!(priority_of(&store, &ids[1]), Some(2));
    assert_eq!(priority_of(&store, &ids[2]), None);
    assert_eq!(priority_of(&store, &ids[3]), Some(3));
    assert_eq!(priority_of(&store, &ids[4]), Some(4));

    assert!(!store.cancel(&ids[2]));
    assert!(!store.cancel("app-999"));
    assert_eq!(store.all().len(), 5);
}

#[test]
fn reorder_rejects_anything_but_a_permutation() {
    let catalog = catalog();
    let mut store = ApplicationStore::new();
    let ids: Vec<String> = (0..3)
        .map(|n| store.create(&catalog, NewApplication::new(format!("p-{n}"), None)).unwrap().id)
        .collect();

    let reversed: Vec<&str> = ids.iter().rev().map(String::as_str).collect();
    store.reorder(&reversed).unwrap();
    assert_eq!(store.pending()[0].id, ids[2]);

    for bad in [
        vec![ids[0].as_str(), ids[1].as_str()],
        vec![ids[0].as_str(), ids[0].as_str(), ids[1].as_str()],
        vec![ids[0].as_str(), ids[1].as_str(), "app-77"],
    ] {
        assert!(matches!(store.reorder(&bad), Err(PortalError::InvalidOrdering(_))));
    }
    assert_eq!(store.pending()[0].id, ids[2]);
}

#[test]
fn category_rules_for_a_split_position() {
    let catalog = catalog();
    let mut store = ApplicationStore::new();
    let fisica = catalog.get("fis-110").unwrap().clone();

    assert!(matches!(
        store.create(&catalog, NewApplication::new("fis-110", None)),
        Err(PortalError::CategoryRequired(_))
    ));
    assert!(matches!(
        store.create(&catalog, NewApplication::new("fis-110", Some(PositionCategory::Correccion))),
        Err(PortalError::InvalidCategory { .. })
    ));

    store
        .create(&catalog, NewApplication::new("fis-110", Some(PositionCategory::Catedra)))
        .unwrap();
    let eligibility = store.eligibility(&fisica);
    assert!(!eligibility.fully_applied);
    assert!(eligibility.can_apply());
    assert_eq!(eligibility.remaining_categories, vec![PositionCategory::Laboratorio]);

    assert!(matches!(
        store.create(&catalog, NewApplication::new("fis-110", Some(PositionCategory::Catedra))),
        Err(PortalError::AlreadyApplied { .. })
    ));
    assert_eq!(store.pending_len(), 1);
}

#[test]
fn closed_and_unknown_positions_are_rejected() {
    let catalog = catalog();
    let mut store = ApplicationStore::new();
    assert!(matches!(
        store.create(&catalog, NewApplication::new("fis-130", None)),
        Err(PortalError::PositionClosed(_))
    ));
    assert!(matches!(
        store.create(&catalog, NewApplication::new("zzz-000", None)),
        Err(PortalError::UnknownPosition(_))
    ));
    assert!(store.all().is_empty());
}

#[test]
fn cancelled_application_frees_the_position_again() {
    let catalog = catalog();
    let mut store = ApplicationStore::new();
    let first = store.create(&catalog, NewApplication::new("p-0", None)).unwrap();
    assert!(store.has_applied("p-0"));

    store.cancel(&first.id);
    assert!(!store.has_applied("p-0"));
    let again = store.create(&catalog, NewApplication::new("p-0", None)).unwrap();
    assert_eq!(again.priority, Some(1));
    assert_ne!(again.id, first.id);
}
