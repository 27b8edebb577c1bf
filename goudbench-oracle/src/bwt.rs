//! Blockwise Burrows-Wheeler Transform
//!
//! Each block is transformed (cyclic-rotation BWT), move-to-front coded, then
//! run-length coded as `[count, value]` pairs. Block framing is
//! `[raw_len: u16 le][rotation index: u32 le][pairs...]`; the pair stream for
//! a block ends when exactly `raw_len` bytes have been reproduced. Blocks are
//! capped so the rotation sort stays bounded on pathological inputs.

use crate::OracleError;
use std::cmp::Ordering;

const BLOCK: usize = 4096;
const MAX_RUN: usize = 255;

pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() / 2 + 16);

    for block in data.chunks(BLOCK) {
        let (last, index) = forward(block);
        let mtf = mtf_encode(&last);

        out.extend_from_slice(&(block.len() as u16).to_le_bytes());
        out.extend_from_slice(&(index as u32).to_le_bytes());
        pair_rle_encode(&mtf, &mut out);
    }

    out
}

pub fn decode(data: &[u8]) -> Result<Vec<u8>, OracleError> {
    let mut out = Vec::new();
    let mut i = 0;

    while i < data.len() {
        if i + 6 > data.len() {
            return Err(OracleError::Truncated(i));
        }
        let raw_len = u16::from_le_bytes([data[i], data[i + 1]]) as usize;
        let index = u32::from_le_bytes([data[i + 2], data[i + 3], data[i + 4], data[i + 5]])
            as usize;
        i += 6;

        let mut mtf = Vec::with_capacity(raw_len);
        while mtf.len() < raw_len {
            if i + 2 > data.len() {
                return Err(OracleError::Truncated(i));
            }
            let count = data[i] as usize;
            if count == 0 {
                return Err(OracleError::Corrupt("zero-length run"));
            }
            mtf.extend(std::iter::repeat(data[i + 1]).take(count));
            i += 2;
        }
        if mtf.len() != raw_len {
            return Err(OracleError::Corrupt("block run overflows declared length"));
        }
        if index >= raw_len {
            return Err(OracleError::Corrupt("rotation index out of range"));
        }

        let last = mtf_decode(&mtf);
        out.extend(inverse(&last, index));
    }

    Ok(out)
}

/// Forward transform of one block: last column plus the sorted position of
/// the unrotated block.
fn forward(block: &[u8]) -> (Vec<u8>, usize) {
    let n = block.len();
    let mut rotations: Vec<usize> = (0..n).collect();
    rotations.sort_by(|&a, &b| cyclic_cmp(block, a, b));

    // Ties between identical rotations are harmless: any tied row
    // reconstructs the same bytes.
    let index = rotations.iter().position(|&r| r == 0).unwrap_or(0);
    let last = rotations
        .iter()
        .map(|&r| block[(r + n - 1) % n])
        .collect();

    (last, index)
}

fn cyclic_cmp(block: &[u8], a: usize, b: usize) -> Ordering {
    let n = block.len();
    for i in 0..n {
        let ordering = block[(a + i) % n].cmp(&block[(b + i) % n]);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Invert the transform via the LF-mapping walk.
fn inverse(last: &[u8], index: usize) -> Vec<u8> {
    let n = last.len();

    let mut counts = [0usize; 256];
    for &b in last {
        counts[b as usize] += 1;
    }
    let mut starts = [0usize; 256];
    let mut total = 0;
    for b in 0..256 {
        starts[b] = total;
        total += counts[b];
    }

    let mut next = vec![0usize; n];
    let mut seen = [0usize; 256];
    for (i, &b) in last.iter().enumerate() {
        next[starts[b as usize] + seen[b as usize]] = i;
        seen[b as usize] += 1;
    }

    let mut out = Vec::with_capacity(n);
    let mut row = index;
    for _ in 0..n {
        row = next[row];
        out.push(last[row]);
    }
    out
}

fn mtf_encode(data: &[u8]) -> Vec<u8> {
    let mut table: Vec<u8> = (0..=255).collect();
    let mut out = Vec::with_capacity(data.len());

    for &byte in data {
        // The table always contains every byte value exactly once.
        let pos = table.iter().position(|&b| b == byte).unwrap_or(0);
        out.push(pos as u8);
        table.remove(pos);
        table.insert(0, byte);
    }

    out
}

fn mtf_decode(data: &[u8]) -> Vec<u8> {
    let mut table: Vec<u8> = (0..=255).collect();
    let mut out = Vec::with_capacity(data.len());

    for &pos in data {
        let byte = table.remove(pos as usize);
        out.push(byte);
        table.insert(0, byte);
    }

    out
}

fn pair_rle_encode(data: &[u8], out: &mut Vec<u8>) {
    let mut i = 0;
    while i < data.len() {
        let byte = data[i];
        let run = data[i..]
            .iter()
            .take(MAX_RUN)
            .take_while(|&&b| b == byte)
            .count();
        out.push(run as u8);
        out.push(byte);
        i += run;
    }
}
