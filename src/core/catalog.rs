//! Catalog module - shape variant tables indexed by piece size
//!
//! Each supported arity maps to an ordered list of shape variants. A variant
//! is the spawn-orientation block offsets of one shape, listed in reading
//! order (left to right, top to bottom) with the first block at the local
//! origin, so every variant contains (0, 0). The 1-based variant index is the
//! shape identity written into board cells when a piece settles.

/// Offsets of a single shape variant relative to the piece position
pub type Variant = &'static [(i8, i8)];

/// The lone monomino
const ARITY_1: &[Variant] = &[&[(0, 0)]];

/// The horizontal domino
const ARITY_2: &[Variant] = &[&[(0, 0), (1, 0)]];

/// The two triominoes: bar and corner
const ARITY_3: &[Variant] = &[
    &[(0, 0), (1, 0), (2, 0)],
    &[(0, 0), (1, 0), (0, 1)],
];

/// The seven one-sided tetrominoes
const ARITY_4: &[Variant] = &[
    // I: ####
    &[(0, 0), (1, 0), (2, 0), (3, 0)],
    // O: ##
    //    ##
    &[(0, 0), (1, 0), (0, 1), (1, 1)],
    // T: ###
    //    .#.
    &[(0, 0), (1, 0), (2, 0), (1, 1)],
    // S: .##
    //    ##.
    &[(0, 0), (1, 0), (-1, 1), (0, 1)],
    // Z: ##.
    //    .##
    &[(0, 0), (1, 0), (1, 1), (2, 1)],
    // J: #..
    //    ###
    &[(0, 0), (0, 1), (1, 1), (2, 1)],
    // L: ..#
    //    ###
    &[(0, 0), (-2, 1), (-1, 1), (0, 1)],
];

/// Shape variants selectable at the given arity, or None when the catalog
/// carries no entry for it. Game construction fails fast on None.
pub fn variants(arity: u8) -> Option<&'static [Variant]> {
    match arity {
        1 => Some(ARITY_1),
        2 => Some(ARITY_2),
        3 => Some(ARITY_3),
        4 => Some(ARITY_4),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_arities() {
        assert_eq!(variants(1).map(|v| v.len()), Some(1));
        assert_eq!(variants(2).map(|v| v.len()), Some(1));
        assert_eq!(variants(3).map(|v| v.len()), Some(2));
        assert_eq!(variants(4).map(|v| v.len()), Some(7));
    }

    #[test]
    fn test_unsupported_arities() {
        assert_eq!(variants(0), None);
        assert_eq!(variants(5), None);
        assert_eq!(variants(255), None);
    }

    #[test]
    fn test_every_variant_has_arity_blocks() {
        for arity in 1..=4u8 {
            for variant in variants(arity).into_iter().flatten() {
                assert_eq!(variant.len(), arity as usize);
            }
        }
    }

    #[test]
    fn test_every_variant_contains_origin() {
        for arity in 1..=4u8 {
            for variant in variants(arity).into_iter().flatten() {
                assert!(variant.contains(&(0, 0)));
            }
        }
    }

    #[test]
    fn test_variant_offsets_are_distinct() {
        for arity in 1..=4u8 {
            for variant in variants(arity).into_iter().flatten() {
                for (i, a) in variant.iter().enumerate() {
                    for b in &variant[i + 1..] {
                        assert_ne!(a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn test_domino_matches_spawn_orientation() {
        let domino = variants(2).map(|v| v[0]);
        assert_eq!(domino, Some(&[(0, 0), (1, 0)][..]));
    }
}
