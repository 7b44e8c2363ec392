// boolprops.rs - Boolean-property catalog.
//
// Each codepoint carries a set of boolean-property tag ids collected from
// several source files. Unlike script extensions, identical sets recur all
// over the domain (most codepoints share a handful of combinations), so the
// catalog is a full-domain dedup keyed on set equality, and the record
// stores a small catalog index rather than a byte offset.

use std::collections::HashMap;

use crate::error::GenError;
use crate::scriptx::render_bitmaps;
use crate::ucd::BoolPropList;

/// The boolean-property catalog and its per-codepoint encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolPropSets {
    /// Per-codepoint catalog index; 0 = the empty set.
    pub index: Vec<i32>,
    /// Catalog of distinct sets in discovery order, normalized to
    /// ascending tag order; entry 0 is the empty set.
    pub sets: Vec<Vec<u16>>,
    /// Flattened bitmaps, `word_count` words per catalog entry.
    pub bitmaps: Vec<u32>,
    /// Words per bitmap entry.
    pub word_count: usize,
}

/// Deduplicate the per-codepoint boolean-property sets into a catalog.
///
/// Set equality is structural: tag order and repeats in the input lists do
/// not matter. The empty set is entry 0 and is present even when no
/// codepoint uses it.
pub fn encode(props: &[BoolPropList], word_count: usize) -> Result<BoolPropSets, GenError> {
    let mut sets: Vec<Vec<u16>> = vec![Vec::new()];
    let mut by_set: HashMap<Vec<u16>, i32> = HashMap::new();
    by_set.insert(Vec::new(), 0);

    let mut index = vec![0i32; props.len()];
    for (c, list) in props.iter().enumerate() {
        if list.is_empty() {
            continue;
        }
        let mut normalized: Vec<u16> = list.to_vec();
        normalized.sort_unstable();
        normalized.dedup();

        index[c] = match by_set.get(&normalized) {
            Some(&i) => i,
            None => {
                let i = sets.len() as i32;
                by_set.insert(normalized.clone(), i);
                sets.push(normalized);
                i
            }
        };
    }

    let bitmaps = render_bitmaps(&sets, word_count, "boolean property")?;
    Ok(BoolPropSets {
        index,
        sets,
        bitmaps,
        word_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn props(spec: &[(usize, &[u16])], len: usize) -> Vec<BoolPropList> {
        let mut v = vec![BoolPropList::new(); len];
        for &(c, ids) in spec {
            v[c] = BoolPropList::from_slice(ids);
        }
        v
    }

    #[test]
    fn empty_set_is_entry_zero() {
        let sets = encode(&props(&[], 8), 1).unwrap();
        assert_eq!(sets.sets, vec![Vec::<u16>::new()]);
        assert_eq!(sets.bitmaps, vec![0]);
        assert!(sets.index.iter().all(|&i| i == 0));
    }

    #[test]
    fn identical_sets_far_apart_share_one_entry() {
        let input = props(&[(0, &[2, 5]), (7, &[2, 5])], 8);
        let sets = encode(&input, 1).unwrap();
        assert_eq!(sets.sets.len(), 2);
        assert_eq!(sets.index[0], 1);
        assert_eq!(sets.index[7], 1);
    }

    #[test]
    fn set_equality_ignores_order_and_repeats() {
        let input: Vec<BoolPropList> =
            vec![smallvec![2u16, 5], smallvec![5u16, 2], smallvec![5u16, 2, 5]];
        let sets = encode(&input, 1).unwrap();
        assert_eq!(sets.sets.len(), 2);
        assert_eq!(sets.index, vec![1, 1, 1]);
        assert_eq!(sets.sets[1], vec![2, 5]);
    }

    #[test]
    fn distinct_sets_get_distinct_indices() {
        let input = props(&[(0, &[1]), (1, &[1, 3]), (2, &[3])], 8);
        let sets = encode(&input, 1).unwrap();
        assert_eq!(sets.sets.len(), 4);
        assert_eq!(sets.index[0], 1);
        assert_eq!(sets.index[1], 2);
        assert_eq!(sets.index[2], 3);
        assert_eq!(sets.bitmaps, vec![0, 0b10, 0b1010, 0b1000]);
    }

    #[test]
    fn tag_beyond_bitmap_is_fatal() {
        let input: Vec<BoolPropList> = vec![smallvec![32u16]];
        let err = encode(&input, 1).unwrap_err();
        assert!(matches!(err, GenError::BitmapOverflow { id: 32, .. }));
    }
}
