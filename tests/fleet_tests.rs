use battleship_ai::{
    AttackResult, BoardError, Fleet, Location, Orientation, PlacementRule, NUM_SHIPS, SHIPS,
    TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn loc(r: usize, c: usize) -> Location {
    Location::new(r, c).unwrap()
}

#[test]
fn test_manual_place_and_sink() {
    let mut fleet = Fleet::new();
    fleet
        .place(0, loc(0, 0), Orientation::Horizontal, PlacementRule::Basic)
        .unwrap();

    let len = SHIPS[0].length();
    for c in 0..len - 1 {
        assert_eq!(fleet.receive_attack(loc(0, c)).unwrap(), AttackResult::Hit);
    }
    assert_eq!(fleet.receive_attack(loc(1, 0)).unwrap(), AttackResult::Miss);
    match fleet.receive_attack(loc(0, len - 1)).unwrap() {
        AttackResult::Sunk { name, ship_cells } => {
            assert_eq!(name, "Carrier");
            assert_eq!(ship_cells, (0..len).map(|c| loc(0, c)).collect::<Vec<_>>());
        }
        other => panic!("expected sunk, got {:?}", other),
    }
    assert!(fleet.all_sunk());
    assert_eq!(fleet.shots().count_ones(), len + 1);
    assert!(fleet.was_attacked(loc(1, 0)));

    assert_eq!(
        fleet.receive_attack(loc(0, 0)).unwrap_err(),
        BoardError::AlreadyGuessed(loc(0, 0))
    );
}

#[test]
fn test_overlap_and_adjacency_rules() {
    let mut fleet = Fleet::new();
    fleet
        .place(0, loc(2, 2), Orientation::Horizontal, PlacementRule::Basic)
        .unwrap();

    assert_eq!(
        fleet
            .place(1, loc(0, 4), Orientation::Vertical, PlacementRule::Basic)
            .unwrap_err(),
        BoardError::ShipOverlaps
    );
    assert_eq!(
        fleet
            .place(1, loc(3, 2), Orientation::Horizontal, PlacementRule::Strict)
            .unwrap_err(),
        BoardError::ShipAdjacent
    );
    // touching is fine under the basic rule
    fleet
        .place(1, loc(3, 2), Orientation::Horizontal, PlacementRule::Basic)
        .unwrap();
    // diagonal contact is not adjacency
    fleet
        .place(4, loc(4, 6), Orientation::Horizontal, PlacementRule::Strict)
        .unwrap();
}

#[test]
fn test_place_errors() {
    let mut fleet = Fleet::new();
    assert_eq!(
        fleet
            .place(NUM_SHIPS, loc(0, 0), Orientation::Horizontal, PlacementRule::Basic)
            .unwrap_err(),
        BoardError::InvalidIndex
    );
    assert_eq!(
        fleet
            .place(0, loc(9, 9), Orientation::Vertical, PlacementRule::Basic)
            .unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    fleet
        .place(0, loc(0, 0), Orientation::Vertical, PlacementRule::Basic)
        .unwrap();
    assert_eq!(
        fleet
            .place(0, loc(0, 5), Orientation::Vertical, PlacementRule::Basic)
            .unwrap_err(),
        BoardError::ShipAlreadyPlaced
    );
}

#[test]
fn test_random_fleet_is_complete() {
    let mut rng = SmallRng::seed_from_u64(42);
    for rule in [PlacementRule::Basic, PlacementRule::Strict] {
        let fleet = Fleet::random(&mut rng, rule).unwrap();
        assert!(fleet.is_complete());
        assert_eq!(fleet.ships().count(), NUM_SHIPS);
        assert_eq!(fleet.ship_map().count_ones(), TOTAL_SHIP_CELLS);
        assert!(!fleet.all_sunk());
    }
}

#[test]
fn test_empty_fleet_is_not_sunk() {
    assert!(!Fleet::new().all_sunk());
}
