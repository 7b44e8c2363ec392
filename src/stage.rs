// stage.rs - Two-stage table compression and block-size search.
//
// The per-codepoint record-index array compresses well because whole blocks
// of codepoints repeat: stage 2 keeps one copy of each distinct block, and
// stage 1 maps a codepoint's block number to its stage-2 block index. The
// lookup a consumer performs is
//
//   stage2[stage1[cp / BLOCK] * BLOCK + cp % BLOCK]
//
// Block size trades the two stages against each other: larger blocks mean
// fewer stage-1 entries but more within-block diversity and a bigger stage
// 2. No formula predicts the optimum, so every candidate is tried.

use std::collections::HashMap;

use crate::error::GenError;
use crate::width::table_bytes;

/// Candidate block sizes, tried in ascending order. The first size with
/// the minimal total encoded size wins, so this order is part of the
/// output contract.
pub const BLOCK_SIZES: [usize; 5] = [32, 64, 128, 256, 512];

/// A compressed two-stage table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedTable {
    /// Selected block size.
    pub block_size: usize,
    /// One entry per block of the domain: the stage-2 block index.
    pub stage1: Vec<u32>,
    /// Concatenation of the deduplicated blocks.
    pub stage2: Vec<u32>,
    /// Total encoded size in bytes (records + stage 1 + stage 2) at the
    /// selected block size.
    pub total_size: usize,
}

impl CompressedTable {
    /// Resolve a codepoint to its record index.
    pub fn lookup(&self, cp: u32) -> u32 {
        let block = self.stage1[cp as usize / self.block_size] as usize;
        self.stage2[block * self.block_size + cp as usize % self.block_size]
    }
}

/// Split `table` into `block_size`-sized blocks and deduplicate them.
///
/// Stage-1 entries index whole stage-2 blocks: an input block identical to
/// one already emitted reuses that block's index, anything else is
/// appended. Exact sequence equality only.
pub fn compress(table: &[u32], block_size: usize) -> (Vec<u32>, Vec<u32>) {
    let mut seen: HashMap<&[u32], u32> = HashMap::new();
    let mut stage1 = Vec::with_capacity(table.len() / block_size + 1);
    let mut stage2: Vec<u32> = Vec::new();

    for block in table.chunks(block_size) {
        let index = match seen.get(block) {
            Some(&index) => index,
            None => {
                let index = (stage2.len() / block_size) as u32;
                stage2.extend_from_slice(block);
                seen.insert(block, index);
                index
            }
        };
        stage1.push(index);
    }
    (stage1, stage2)
}

/// Compress at every candidate block size and keep the smallest result.
///
/// `record_bytes` is the encoded size of the record catalog; it is constant
/// across candidates but part of the reported total. Comparison is strict,
/// so among equal totals the smallest block size wins.
pub fn compress_best(table: &[u32], record_bytes: usize) -> Result<CompressedTable, GenError> {
    let mut best = compress_at(table, BLOCK_SIZES[0], record_bytes)?;
    for &block_size in &BLOCK_SIZES[1..] {
        let candidate = compress_at(table, block_size, record_bytes)?;
        if candidate.total_size < best.total_size {
            best = candidate;
        }
    }
    Ok(best)
}

fn compress_at(
    table: &[u32],
    block_size: usize,
    record_bytes: usize,
) -> Result<CompressedTable, GenError> {
    let (stage1, stage2) = compress(table, block_size);
    let total_size =
        record_bytes + table_bytes("stage1", &stage1)? + table_bytes("stage2", &stage2)?;
    Ok(CompressedTable {
        block_size,
        stage1,
        stage2,
        total_size,
    })
}
