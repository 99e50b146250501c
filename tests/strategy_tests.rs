use battleship_ai::strategy::{
    ComprehensionStrategy, EckspurtStrategy, HuntTargetStrategy, RandomStrategy, ShipsLeft,
};
use battleship_ai::{
    AnyStrategy, AttackResult, Deduction, Location, Mark, PlacementRule, SeaState, Strategy,
    StrategyError, StrategyKind,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn loc(r: usize, c: usize) -> Location {
    Location::new(r, c).unwrap()
}

fn sunk(cells: &[Location]) -> AttackResult {
    AttackResult::Sunk {
        name: "Test",
        ship_cells: cells.to_vec(),
    }
}

#[test]
fn test_random_covers_board_then_stops() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut s = RandomStrategy::new();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..100 {
        let target = s.choose_attack(&mut rng).unwrap();
        assert!(seen.insert(target));
        s.report_result(target, &AttackResult::Miss).unwrap();
    }
    assert_eq!(
        s.choose_attack(&mut rng).unwrap_err(),
        StrategyError::NoTargetAvailable
    );
}

#[test]
fn test_repeated_result_is_rejected() {
    let mut s = RandomStrategy::new();
    s.report_result(loc(1, 1), &AttackResult::Hit).unwrap();
    assert_eq!(
        s.report_result(loc(1, 1), &AttackResult::Miss).unwrap_err(),
        StrategyError::RepeatedAttack(loc(1, 1))
    );
    assert_eq!(s.knowledge().get(loc(1, 1)), Mark::Hit);
}

#[test]
fn test_hunt_mode_uses_even_cells() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut s = HuntTargetStrategy::new();
    for _ in 0..50 {
        let target = s.choose_attack(&mut rng).unwrap();
        assert!(target.is_even());
        s.report_result(target, &AttackResult::Miss).unwrap();
    }
    // parity class exhausted: falls back to the odd cells
    let target = s.choose_attack(&mut rng).unwrap();
    assert!(!target.is_even());
}

#[test]
fn test_hit_fills_frontier() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut s = HuntTargetStrategy::new();
    s.report_result(loc(5, 4), &AttackResult::Miss).unwrap();
    s.report_result(loc(5, 5), &AttackResult::Hit).unwrap();
    let frontier: Vec<_> = s.frontier().collect();
    assert_eq!(frontier, vec![loc(4, 5), loc(5, 6), loc(6, 5)]);

    assert_eq!(s.choose_attack(&mut rng).unwrap(), loc(4, 5));
    s.report_result(loc(4, 5), &sunk(&[loc(4, 5), loc(5, 5)])).unwrap();
    // a sinking shot still queues its neighbours
    let frontier: Vec<_> = s.frontier().collect();
    assert_eq!(frontier, vec![loc(5, 6), loc(6, 5), loc(3, 5), loc(4, 6), loc(4, 4)]);
}

#[test]
fn test_comprehension_confirms_bounded_run() {
    let mut s = ComprehensionStrategy::with_ships_left(ShipsLeft::from_lengths([4, 5]));
    for c in 3..=6 {
        s.report_result(loc(3, c), &AttackResult::Hit).unwrap();
    }
    s.report_result(loc(3, 2), &AttackResult::Miss).unwrap();
    s.report_result(loc(3, 7), &AttackResult::Miss).unwrap();

    s.deduce();

    assert_eq!(s.ships_left().lengths(), &[5]);
    for c in 3..=6 {
        assert_eq!(s.knowledge().get(loc(3, c)), Deduction::SunkConfirmed);
    }
    assert_eq!(s.priority_cells().count(), 0);
}

#[test]
fn test_comprehension_queues_deduced_cells() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut s = ComprehensionStrategy::with_ships_left(ShipsLeft::from_lengths([2]));
    s.report_result(loc(0, 0), &AttackResult::Hit).unwrap();
    s.report_result(loc(1, 0), &AttackResult::Miss).unwrap();
    s.report_result(loc(0, 2), &AttackResult::Miss).unwrap();

    assert_eq!(s.choose_attack(&mut rng).unwrap(), loc(0, 1));
    assert!(s.ships_left().is_empty());
    assert_eq!(s.knowledge().get(loc(0, 1)), Deduction::SunkConfirmed);

    s.report_result(loc(0, 1), &sunk(&[loc(0, 0), loc(0, 1)]))
        .unwrap();
    assert_eq!(s.knowledge().get(loc(0, 1)), Deduction::SunkConfirmed);
    assert!(s.ships_left().is_empty());
}

#[test]
fn test_comprehension_restores_length_when_deduction_misses() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut s = ComprehensionStrategy::with_ships_left(ShipsLeft::from_lengths([2]));
    s.report_result(loc(0, 0), &AttackResult::Hit).unwrap();
    s.report_result(loc(1, 0), &AttackResult::Miss).unwrap();
    s.report_result(loc(0, 2), &AttackResult::Miss).unwrap();

    let target = s.choose_attack(&mut rng).unwrap();
    s.report_result(target, &AttackResult::Miss).unwrap();
    assert_eq!(s.knowledge().get(target), Deduction::Miss);
    assert_eq!(s.ships_left().lengths(), &[2]);
}

#[test]
fn test_comprehension_boxed_hit_becomes_sunk_unknown() {
    let mut s = ComprehensionStrategy::new();
    s.report_result(loc(0, 0), &AttackResult::Hit).unwrap();
    s.report_result(loc(0, 1), &AttackResult::Miss).unwrap();
    s.report_result(loc(1, 0), &AttackResult::Miss).unwrap();
    s.deduce();
    assert_eq!(s.knowledge().get(loc(0, 0)), Deduction::SunkUnknownShip);
    assert_eq!(s.ships_left().total(), 17);
}

#[test]
fn test_comprehension_prefers_cells_next_to_hits() {
    let mut rng = SmallRng::seed_from_u64(17);
    let mut s = ComprehensionStrategy::new();
    s.report_result(loc(5, 5), &AttackResult::Hit).unwrap();
    let target = s.choose_attack(&mut rng).unwrap();
    assert!(target.is_adjacent(&loc(5, 5)), "chose {}", target);
    assert!(s.hits_heat_map().get(target) > 0);
}

#[test]
fn test_comprehension_sinking_shot_retires_reported_length() {
    let mut s = ComprehensionStrategy::with_ships_left(ShipsLeft::from_lengths([2, 5]));
    s.report_result(loc(4, 4), &AttackResult::Hit).unwrap();
    s.report_result(loc(4, 5), &sunk(&[loc(4, 4), loc(4, 5)]))
        .unwrap();
    assert_eq!(s.ships_left().lengths(), &[5]);
    assert_eq!(s.knowledge().get(loc(4, 4)), Deduction::SunkConfirmed);
    assert_eq!(s.knowledge().get(loc(4, 5)), Deduction::SunkConfirmed);
}

#[test]
fn test_comprehension_sunk_retires_long_ship() {
    let mut s = ComprehensionStrategy::new();
    for c in 0..4 {
        s.report_result(loc(2, c), &AttackResult::Hit).unwrap();
    }
    let carrier: Vec<_> = (0..5).map(|c| loc(2, c)).collect();
    s.report_result(loc(2, 4), &sunk(&carrier)).unwrap();
    assert_eq!(s.ships_left().lengths(), &[4, 3, 3, 2]);
    for cell in carrier {
        assert_eq!(s.knowledge().get(cell), Deduction::SunkConfirmed);
    }
}

#[test]
fn test_comprehension_sunk_next_to_other_hit() {
    let mut s = ComprehensionStrategy::new();
    s.report_result(loc(1, 1), &AttackResult::Hit).unwrap();
    s.report_result(loc(0, 0), &AttackResult::Hit).unwrap();
    s.report_result(loc(0, 1), &sunk(&[loc(0, 0), loc(0, 1)]))
        .unwrap();

    assert_eq!(s.ships_left().lengths(), &[5, 4, 3, 3]);
    assert_eq!(s.knowledge().get(loc(0, 0)), Deduction::SunkConfirmed);
    assert_eq!(s.knowledge().get(loc(0, 1)), Deduction::SunkConfirmed);
    assert_eq!(s.knowledge().get(loc(1, 1)), Deduction::Hit);
}

#[test]
fn test_comprehension_revocation_restores_hits() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut s = ComprehensionStrategy::with_ships_left(ShipsLeft::from_lengths([3]));
    s.report_result(loc(0, 0), &AttackResult::Hit).unwrap();
    s.report_result(loc(0, 1), &AttackResult::Hit).unwrap();
    s.report_result(loc(0, 3), &AttackResult::Miss).unwrap();

    assert_eq!(s.choose_attack(&mut rng).unwrap(), loc(0, 2));
    assert_eq!(s.knowledge().get(loc(0, 0)), Deduction::SunkConfirmed);
    assert_eq!(s.deduced_lengths().collect::<Vec<_>>(), vec![3]);

    s.report_result(loc(0, 2), &AttackResult::Miss).unwrap();
    assert_eq!(s.knowledge().get(loc(0, 0)), Deduction::Hit);
    assert_eq!(s.knowledge().get(loc(0, 1)), Deduction::Hit);
    assert_eq!(s.ships_left().lengths(), &[3]);
    assert_eq!(s.deduced_lengths().count(), 0);

    // the restored hits steer the next shot downwards
    let target = s.choose_attack(&mut rng).unwrap();
    assert!((1..=2).contains(&target.row()) && target.col() <= 1, "chose {}", target);
    assert!(s.hits_heat_map().get(target) > 0);
}

#[test]
fn test_comprehension_sunk_settles_deduction() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut s = ComprehensionStrategy::with_ships_left(ShipsLeft::from_lengths([2, 4]));
    s.report_result(loc(0, 0), &AttackResult::Hit).unwrap();
    s.report_result(loc(1, 0), &AttackResult::Miss).unwrap();
    s.report_result(loc(0, 2), &AttackResult::Miss).unwrap();

    assert_eq!(s.choose_attack(&mut rng).unwrap(), loc(0, 1));
    assert_eq!(s.ships_left().lengths(), &[4]);
    s.report_result(loc(0, 1), &sunk(&[loc(0, 0), loc(0, 1)]))
        .unwrap();
    assert_eq!(s.ships_left().lengths(), &[4]);
    assert_eq!(s.deduced_lengths().count(), 0);
}

#[test]
fn test_eckspurt_sunk_marks_ship_and_retires_length() {
    let mut s = EckspurtStrategy::new();
    s.report_result(loc(0, 0), &AttackResult::Hit).unwrap();
    s.report_result(loc(0, 1), &sunk(&[loc(0, 0), loc(0, 1)]))
        .unwrap();
    assert_eq!(s.knowledge().get(loc(0, 0)), SeaState::Sunk);
    assert_eq!(s.knowledge().get(loc(0, 1)), SeaState::Sunk);
    assert_eq!(s.ships_left().lengths(), &[5, 4, 3, 3]);
    assert_eq!(s.shots(), 2);
}

#[test]
fn test_eckspurt_unknown_length_is_surfaced() {
    let mut s = EckspurtStrategy::with_ships_left(ShipsLeft::from_lengths([3]));
    s.report_result(loc(2, 2), &AttackResult::Hit).unwrap();
    let err = s
        .report_result(loc(2, 3), &sunk(&[loc(2, 2), loc(2, 3)]))
        .unwrap_err();
    assert_eq!(err, StrategyError::UnknownShipLength(2));
    assert_eq!(s.ships_left().lengths(), &[3]);
    assert_eq!(s.knowledge().get(loc(2, 3)), SeaState::Sunk);
}

#[test]
fn test_eckspurt_chases_hit() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut s = EckspurtStrategy::new();
    s.report_result(loc(9, 9), &AttackResult::Hit).unwrap();
    let target = s.choose_attack(&mut rng).unwrap();
    assert!(target == loc(8, 9) || target == loc(9, 8), "chose {}", target);
    assert_eq!(
        s.last_heat_map().get(target),
        s.last_heat_map().iter().map(|(_, w)| w).max().unwrap()
    );
}

#[test]
fn test_placement_rule_per_kind() {
    for kind in StrategyKind::ALL {
        let s = AnyStrategy::new(kind);
        assert_eq!(s.kind(), kind);
        let expected = if kind == StrategyKind::Eckspurt {
            PlacementRule::Strict
        } else {
            PlacementRule::Basic
        };
        assert_eq!(s.placement_rule(), expected);
    }
}

#[test]
fn test_kind_parses_from_name() {
    for kind in StrategyKind::ALL {
        assert_eq!(kind.to_string().parse::<StrategyKind>().unwrap(), kind);
    }
    assert!("minimax".parse::<StrategyKind>().is_err());
}
