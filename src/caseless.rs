// caseless.rs - Multi-character caseless equivalence sets.
//
// Case-folding data lists pairs via a signed delta. Most codepoints fold in
// simple two-member pairs, which the delta alone represents. Whenever the
// delta graph does not close in two hops, three or more codepoints must all
// match each other caselessly; those form a set in the caseless-set table,
// and every member's record carries the set's offset.

use crate::error::GenError;
use crate::ucd::NOTACHAR;

/// Sentinel for "codepoint belongs to no set" in the membership index.
const NO_SET: u32 = u32::MAX;

/// The discovered caseless sets and their flattened table form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaselessSets {
    /// Sets in first-discovery order, members ascending.
    pub sets: Vec<Vec<u32>>,
    /// Per-codepoint offset into `table`; 0 = not part of any set.
    pub offsets: Vec<i32>,
    /// Flattened table: a lone terminator (the empty set), then each set's
    /// members in ascending order followed by a terminator.
    pub table: Vec<u32>,
}

/// Build the caseless equivalence sets from the per-codepoint case deltas.
///
/// The delta array is repaired in place first: the source lists each pair in
/// one direction only, so the reverse delta is installed at targets that
/// have none. The repaired array is the one the records must carry, which
/// is why this takes `&mut`.
pub fn build(other_case: &mut [i32]) -> Result<CaselessSets, GenError> {
    let n = other_case.len();

    // Repair pass: make one-directional pair data symmetric. A target that
    // already has a delta keeps it; those are the seeds of multi-member
    // sets, found below.
    for c in 0..n {
        let delta = other_case[c];
        if delta != 0 {
            let o = offset_by(c, delta, n)?;
            if other_case[o] == 0 {
                other_case[o] = -delta;
            }
        }
    }

    // Detection pass. Whenever following the delta from `c` to `o` does not
    // come straight back, the three codepoints `c`, `o`, and `o`'s own
    // target all belong to one set. An explicit membership index keeps the
    // set merge O(1) per codepoint.
    let mut sets: Vec<Vec<u32>> = Vec::new();
    let mut set_of: Vec<u32> = vec![NO_SET; n];

    for c in 0..n {
        let o = offset_by(c, other_case[c], n)?;
        if other_case[o] == -other_case[c] {
            continue;
        }
        let t = offset_by(o, other_case[o], n)?;

        let triple = [c as u32, o as u32, t as u32];
        let existing = triple.iter().find_map(|&x| {
            let s = set_of[x as usize];
            (s != NO_SET).then_some(s)
        });
        let set_index = match existing {
            Some(s) => s,
            None => {
                sets.push(Vec::new());
                (sets.len() - 1) as u32
            }
        };
        for &x in &triple {
            if set_of[x as usize] == NO_SET {
                set_of[x as usize] = set_index;
                sets[set_index as usize].push(x);
            }
        }
    }

    for set in &mut sets {
        set.sort_unstable();
    }

    // Offsets are consecutive in discovery order; each set consumes its
    // member count plus one terminator slot, and offset 0 is reserved for
    // the leading empty set.
    let mut offsets = vec![0i32; n];
    let mut table = vec![NOTACHAR];
    let mut offset = 1i32;
    for set in &sets {
        for &x in set {
            offsets[x as usize] = offset;
            table.push(x);
        }
        table.push(NOTACHAR);
        offset += set.len() as i32 + 1;
    }

    Ok(CaselessSets {
        sets,
        offsets,
        table,
    })
}

/// Index of `c + delta`, checked against the domain bounds. The source data
/// guarantees deltas stay inside the domain; a violation means the input
/// arrays were not validated and the run cannot continue.
fn offset_by(c: usize, delta: i32, n: usize) -> Result<usize, GenError> {
    let o = c as i64 + delta as i64;
    if o < 0 || o >= n as i64 {
        return Err(GenError::CaseDeltaOutOfRange {
            codepoint: c as u32,
            delta,
        });
    }
    Ok(o as usize)
}
