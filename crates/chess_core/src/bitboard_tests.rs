use super::*;

#[test]
fn test_from_square() {
    assert_eq!(Bitboard::from_square(0).0, 1); // a1
    assert_eq!(Bitboard::from_square(7).0, 128); // h1
    assert_eq!(Bitboard::from_square(63).0, 1 << 63); // h8
}

#[test]
fn test_set_and_contains() {
    let mut bb = Bitboard::EMPTY;
    assert!(bb.is_empty());
    bb.set(27); // d4
    bb.set(28); // e4
    assert!(bb.contains(27));
    assert!(bb.contains(28));
    assert!(!bb.contains(36));
    assert_eq!(bb.popcount(), 2);
}

#[test]
fn test_iterator_ascending() {
    let bb = Bitboard(0b1010) | Bitboard::from_square(63);
    let squares: Vec<u8> = bb.collect();
    assert_eq!(squares, vec![1, 3, 63]);
}

#[test]
fn test_masking() {
    let bb = Bitboard::from_square(5) | Bitboard::from_square(9);
    assert_eq!(bb & !Bitboard::from_square(5), Bitboard::from_square(9));
    assert_eq!((!Bitboard::EMPTY & bb).popcount(), 2);
}
