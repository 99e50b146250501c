use battleship_ai::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    assert!(BitBoard::<u128, 10>::try_new().is_ok());
    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { .. })));
}

#[test]
fn test_get_set_clear() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    bb.clear(1, 1).unwrap();
    assert!(!bb.get(1, 1).unwrap());

    assert_eq!(
        bb.set(4, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 4, col: 0 }
    );
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u16, 4>::from_cells([(0, 1), (3, 3)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
}

#[test]
fn test_orthogonal_halo_excludes_diagonals_and_self() {
    let bb = BitBoard::<u16, 4>::from_cells([(0, 0), (0, 1)]).unwrap();
    let halo: Vec<_> = bb.orthogonal_halo().iter_set_bits().collect();
    assert_eq!(halo, vec![(0, 2), (1, 0), (1, 1)]);
}

#[test]
fn test_halo_does_not_wrap_rows() {
    let bb = BitBoard::<u128, 10>::from_cells([(3, 9)]).unwrap();
    let halo = bb.orthogonal_halo();
    assert!(!halo.get(4, 0).unwrap());
    assert_eq!(halo.count_ones(), 3);
}
