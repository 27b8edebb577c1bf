//! Run-Length Encoding
//!
//! Stream of marker-prefixed segments: `[RUN_MARKER, count, value]` for runs
//! of at least [`MIN_RUN`] bytes, `[LIT_MARKER, len, bytes...]` for everything
//! in between. Counts are u8, so long runs and literal stretches split.

use crate::OracleError;

const RUN_MARKER: u8 = 0xFF;
const LIT_MARKER: u8 = 0xFE;
const MIN_RUN: usize = 4;
const MAX_COUNT: usize = 255;

/// Length of the run starting at `i`, capped at [`MAX_COUNT`].
fn run_length(data: &[u8], i: usize) -> usize {
    let byte = data[i];
    data[i..]
        .iter()
        .take(MAX_COUNT)
        .take_while(|&&b| b == byte)
        .count()
}

pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut i = 0;

    while i < data.len() {
        let run = run_length(data, i);
        if run >= MIN_RUN {
            out.push(RUN_MARKER);
            out.push(run as u8);
            out.push(data[i]);
            i += run;
        } else {
            let start = i;
            while i < data.len() && i - start < MAX_COUNT && run_length(data, i) < MIN_RUN {
                i += 1;
            }
            out.push(LIT_MARKER);
            out.push((i - start) as u8);
            out.extend_from_slice(&data[start..i]);
        }
    }

    out
}

pub fn decode(data: &[u8]) -> Result<Vec<u8>, OracleError> {
    let mut out = Vec::with_capacity(data.len() * 2);
    let mut i = 0;

    while i < data.len() {
        match data[i] {
            RUN_MARKER => {
                if i + 2 >= data.len() {
                    return Err(OracleError::Truncated(i));
                }
                let count = data[i + 1] as usize;
                if count == 0 {
                    return Err(OracleError::Corrupt("zero-length run"));
                }
                out.extend(std::iter::repeat(data[i + 2]).take(count));
                i += 3;
            }
            LIT_MARKER => {
                if i + 1 >= data.len() {
                    return Err(OracleError::Truncated(i));
                }
                let len = data[i + 1] as usize;
                let start = i + 2;
                if start + len > data.len() {
                    return Err(OracleError::Truncated(i));
                }
                out.extend_from_slice(&data[start..start + len]);
                i = start + len;
            }
            _ => return Err(OracleError::Corrupt("expected segment marker")),
        }
    }

    Ok(out)
}
