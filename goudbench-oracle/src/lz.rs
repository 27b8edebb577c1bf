//! LZ77 Token Stream
//!
//! Greedy longest-match encoding over a sliding window. Two token kinds:
//! `[0x00, byte]` for a literal and `[0x01, len, dist_lo, dist_hi]` for a
//! back-reference. Distances are relative to the current output position and
//! may overlap it, so runs compress as self-referential matches.

use crate::OracleError;

const TOKEN_LITERAL: u8 = 0x00;
const TOKEN_MATCH: u8 = 0x01;
const MIN_MATCH: usize = 4;
const MAX_MATCH: usize = 255;
const WINDOW: usize = 4096;

pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() / 2 + 16);
    let mut i = 0;

    while i < data.len() {
        let (dist, len) = longest_match(data, i);
        if len >= MIN_MATCH {
            out.push(TOKEN_MATCH);
            out.push(len as u8);
            out.extend_from_slice(&(dist as u16).to_le_bytes());
            i += len;
        } else {
            out.push(TOKEN_LITERAL);
            out.push(data[i]);
            i += 1;
        }
    }

    out
}

/// Longest match for `pos` within the window, as `(distance, length)`.
fn longest_match(data: &[u8], pos: usize) -> (usize, usize) {
    let limit = (data.len() - pos).min(MAX_MATCH);
    let mut best = (0, 0);
    if limit < MIN_MATCH {
        return best;
    }

    for candidate in pos.saturating_sub(WINDOW)..pos {
        let mut len = 0;
        while len < limit && data[candidate + len] == data[pos + len] {
            len += 1;
        }
        if len > best.1 {
            best = (pos - candidate, len);
        }
    }

    best
}

pub fn decode(data: &[u8]) -> Result<Vec<u8>, OracleError> {
    let mut out = Vec::with_capacity(data.len() * 2);
    let mut i = 0;

    while i < data.len() {
        match data[i] {
            TOKEN_LITERAL => {
                if i + 1 >= data.len() {
                    return Err(OracleError::Truncated(i));
                }
                out.push(data[i + 1]);
                i += 2;
            }
            TOKEN_MATCH => {
                if i + 3 >= data.len() {
                    return Err(OracleError::Truncated(i));
                }
                let len = data[i + 1] as usize;
                let dist = u16::from_le_bytes([data[i + 2], data[i + 3]]) as usize;
                if len < MIN_MATCH {
                    return Err(OracleError::Corrupt("match shorter than minimum"));
                }
                if dist == 0 || dist > out.len() {
                    return Err(OracleError::Corrupt("match distance out of range"));
                }
                // Byte-by-byte copy: the match may overlap its own output.
                let from = out.len() - dist;
                for k in 0..len {
                    let byte = out[from + k];
                    out.push(byte);
                }
                i += 4;
            }
            _ => return Err(OracleError::Corrupt("unknown token")),
        }
    }

    Ok(out)
}
