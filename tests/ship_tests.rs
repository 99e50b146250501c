use battleship_ai::{BoardError, Location, Orientation, Ship, ShipType};

fn loc(r: usize, c: usize) -> Location {
    Location::new(r, c).unwrap()
}

#[test]
fn test_new_and_cells() -> Result<(), BoardError> {
    let def = ShipType::new("Test", 4);
    let ship = Ship::new(def, Orientation::Vertical, loc(0, 0))?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![loc(0, 0), loc(1, 0), loc(2, 0), loc(3, 0)]);
    for cell in cells {
        assert!(ship.contains(cell));
    }
    assert!(!ship.contains(loc(4, 0)));
    assert_eq!(ship.mask().count_ones(), 4);
    Ok(())
}

#[test]
fn test_out_of_bounds() {
    let def = ShipType::new("Carrier", 5);
    let err = Ship::new(def, Orientation::Horizontal, loc(0, 6)).unwrap_err();
    assert_eq!(err, BoardError::ShipOutOfBounds);
    assert!(Ship::new(def, Orientation::Horizontal, loc(0, 5)).is_ok());
}

#[test]
fn test_register_hit_and_sunk() -> Result<(), BoardError> {
    let def = ShipType::new("Test", 2);
    let mut ship = Ship::new(def, Orientation::Horizontal, loc(1, 1))?;
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(loc(1, 1)));
    assert!(!ship.is_sunk());
    // repeated hits on the same segment do not count twice
    assert!(ship.register_hit(loc(1, 1)));
    assert_eq!(ship.hit_count(), 1);
    assert!(ship.register_hit(loc(1, 2)));
    assert!(ship.is_sunk());
    assert!(!ship.register_hit(loc(0, 0)));
    Ok(())
}
