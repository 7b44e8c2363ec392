// scriptx.rs - Script Extensions catalog and bitmap encoding.
//
// A codepoint's script-extension value names the scripts it may be used
// with beyond its primary script. The per-codepoint record stores a word
// offset into a flat vector of fixed-width bitmaps, one bitmap per distinct
// extension list. Source data lists extensions in contiguous codepoint
// ranges, so collapsing against the most recent distinct list is enough;
// this is not a full-domain dedup, and callers whose input is not grouped
// into contiguous ranges must pre-sort it.

use crate::error::GenError;
use crate::ucd::ScriptList;

/// The script-extension catalog and its per-codepoint encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSets {
    /// Per-codepoint word offset into `bitmaps`; 0 = no extensions.
    pub offsets: Vec<i32>,
    /// Catalog of distinct lists in discovery order; entry 0 is empty.
    pub lists: Vec<ScriptList>,
    /// Flattened bitmaps, `word_count` words per catalog entry. Bit `i`
    /// set means script id `i` applies.
    pub bitmaps: Vec<u32>,
    /// Words per bitmap entry.
    pub word_count: usize,
}

/// Encode the per-codepoint script-extension lists.
///
/// The scan threads an accumulator of (previous distinct list, its offset)
/// through the fold: an empty list always encodes as offset 0 without
/// disturbing the accumulator, a list equal to the previous distinct one
/// reuses its offset, and anything else opens a new catalog entry.
pub fn encode(extensions: &[ScriptList], word_count: usize) -> Result<ScriptSets, GenError> {
    let mut lists: Vec<ScriptList> = vec![ScriptList::new()];
    let mut offsets = vec![0i32; extensions.len()];
    let mut last: Option<(&ScriptList, i32)> = None;

    for (c, list) in extensions.iter().enumerate() {
        if list.is_empty() {
            continue;
        }
        let offset = match last {
            Some((prev, prev_offset)) if prev == list => prev_offset,
            _ => {
                let offset = (lists.len() * word_count) as i32;
                lists.push(list.clone());
                offset
            }
        };
        offsets[c] = offset;
        last = Some((list, offset));
    }

    let bitmaps = render_bitmaps(&lists, word_count, "script")?;
    Ok(ScriptSets {
        offsets,
        lists,
        bitmaps,
        word_count,
    })
}

/// Render tag-id lists as fixed-width bitmaps, `word_count` words each.
pub fn render_bitmaps<L>(
    lists: &[L],
    word_count: usize,
    kind: &'static str,
) -> Result<Vec<u32>, GenError>
where
    L: AsRef<[u16]>,
{
    let mut bitmaps = vec![0u32; lists.len() * word_count];
    for (i, list) in lists.iter().enumerate() {
        let words = &mut bitmaps[i * word_count..(i + 1) * word_count];
        for &id in list.as_ref() {
            let word = id as usize / 32;
            if word >= word_count {
                return Err(GenError::BitmapOverflow {
                    kind,
                    id,
                    words: word_count,
                });
            }
            words[word] |= 1 << (id & 31);
        }
    }
    Ok(bitmaps)
}
