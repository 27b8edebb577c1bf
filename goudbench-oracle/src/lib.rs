#![warn(missing_docs)]
//! Goudbench Oracle Boundary
//!
//! The harness talks to the compressor under test through exactly two calls:
//! [`CompressionOracle::compress`] and [`CompressionOracle::decompress`]. The
//! oracle is assumed deterministic and total over supported inputs, so any
//! `Err` crossing this boundary indicates a contract violation and aborts the
//! run rather than being retried.
//!
//! The crate also ships [`GoudCompressor`], a self-contained reference engine
//! implementing the named algorithms behind a one-byte container flag. The
//! harness never looks inside the container; tests substitute stub oracles
//! through the same trait.

mod bwt;
mod delta;
mod lz;
mod rle;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Container flag: payload is the input verbatim.
pub const FLAG_STORED: u8 = 0;
/// Container flag: run-length encoded payload.
pub const FLAG_RLE: u8 = 1;
/// Container flag: order-1 delta encoded payload.
pub const FLAG_DELTA: u8 = 2;
/// Container flag: LZ77 token stream payload.
pub const FLAG_LZ: u8 = 3;
/// Container flag: blockwise BWT+MTF+RLE payload.
pub const FLAG_BWT: u8 = 4;

/// Errors crossing the oracle boundary.
///
/// The harness treats every variant as fatal: the oracle is pure and
/// environment-independent, so a failure is a programming or input-contract
/// violation, never a transient condition worth retrying.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The stream ended before a complete token or header was read.
    #[error("truncated stream at offset {0}")]
    Truncated(usize),
    /// A structurally invalid token or value was encountered.
    #[error("corrupt stream: {0}")]
    Corrupt(&'static str),
    /// The container flag byte names no known encoding.
    #[error("unknown container flag {0:#04x}")]
    UnknownFlag(u8),
}

/// Diagnostic verbosity forwarded to the oracle.
///
/// Levels are ordered: a message is emitted when its level is at or below the
/// configured one, so `performance` implies everything.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No diagnostics.
    #[default]
    None,
    /// Errors only.
    Error,
    /// Progress messages.
    Info,
    /// Per-phase detail; also enables transcript capture in the harness.
    Debug,
    /// Timing and size accounting.
    Performance,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(LogLevel::None),
            "error" => Ok(LogLevel::Error),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "performance" => Ok(LogLevel::Performance),
            other => Err(format!(
                "unknown log level '{other}' (expected none, error, info, debug, performance)"
            )),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::None => "none",
            LogLevel::Error => "error",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Performance => "performance",
        };
        f.write_str(s)
    }
}

/// Compression algorithm selector, forwarded opaquely by the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// LZ77 token stream.
    Lz,
    /// Run-length encoding.
    Rle,
    /// Order-1 delta.
    Delta,
    /// Blockwise Burrows-Wheeler transform.
    Bwt,
    /// Try every encoding and keep the smallest.
    #[default]
    Best,
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lz" => Ok(Algorithm::Lz),
            "rle" => Ok(Algorithm::Rle),
            "delta" => Ok(Algorithm::Delta),
            "bwt" => Ok(Algorithm::Bwt),
            "best" => Ok(Algorithm::Best),
            other => Err(format!(
                "unknown algorithm '{other}' (expected lz, rle, delta, bwt, best)"
            )),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Algorithm::Lz => "lz",
            Algorithm::Rle => "rle",
            Algorithm::Delta => "delta",
            Algorithm::Bwt => "bwt",
            Algorithm::Best => "best",
        };
        f.write_str(s)
    }
}

/// Options forwarded across the oracle boundary.
///
/// `algorithm` is only meaningful to `compress`; the container flag makes the
/// stream self-describing, so `decompress` ignores it.
#[derive(Debug, Clone, Copy, Default)]
pub struct OracleOptions {
    /// Diagnostic verbosity inside the engine.
    pub log_level: LogLevel,
    /// Encoding to apply on compression.
    pub algorithm: Algorithm,
}

/// The two-function contract the harness exercises.
pub trait CompressionOracle {
    /// Compress `input` into a self-describing container.
    fn compress(&self, input: &[u8], opts: &OracleOptions) -> Result<Vec<u8>, OracleError>;

    /// Invert [`CompressionOracle::compress`].
    fn decompress(&self, input: &[u8], opts: &OracleOptions) -> Result<Vec<u8>, OracleError>;
}

/// Reference engine: one container flag byte followed by the encoded payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoudCompressor;

impl GoudCompressor {
    /// Create the reference engine. Construction performs all initialization;
    /// the instance is ready before any timed call.
    pub fn new() -> Self {
        GoudCompressor
    }

    fn encode_with(input: &[u8], flag: u8) -> Vec<u8> {
        let payload = match flag {
            FLAG_RLE => rle::encode(input),
            FLAG_DELTA => delta::encode(input),
            FLAG_LZ => lz::encode(input),
            FLAG_BWT => bwt::encode(input),
            _ => input.to_vec(),
        };
        let mut out = Vec::with_capacity(payload.len() + 1);
        out.push(flag);
        out.extend_from_slice(&payload);
        out
    }

    /// Every encoding attempted, smallest container kept. The stored form
    /// wins ties so decode cost is never paid for nothing.
    fn encode_best(input: &[u8], log_level: LogLevel) -> Vec<u8> {
        let mut best = Self::encode_with(input, FLAG_STORED);
        for flag in [FLAG_RLE, FLAG_DELTA, FLAG_LZ, FLAG_BWT] {
            let candidate = Self::encode_with(input, flag);
            if log_level >= LogLevel::Debug {
                tracing::debug!(flag, size = candidate.len(), "candidate encoding");
            }
            if candidate.len() < best.len() {
                best = candidate;
            }
        }
        best
    }
}

impl CompressionOracle for GoudCompressor {
    fn compress(&self, input: &[u8], opts: &OracleOptions) -> Result<Vec<u8>, OracleError> {
        if opts.log_level >= LogLevel::Info {
            tracing::info!(algorithm = %opts.algorithm, input_size = input.len(), "compressing");
        }

        let out = match opts.algorithm {
            Algorithm::Rle => Self::encode_with(input, FLAG_RLE),
            Algorithm::Delta => Self::encode_with(input, FLAG_DELTA),
            Algorithm::Lz => Self::encode_with(input, FLAG_LZ),
            Algorithm::Bwt => Self::encode_with(input, FLAG_BWT),
            Algorithm::Best => Self::encode_best(input, opts.log_level),
        };

        if opts.log_level >= LogLevel::Performance {
            tracing::info!(
                input_size = input.len(),
                output_size = out.len(),
                "compression complete"
            );
        }
        Ok(out)
    }

    fn decompress(&self, input: &[u8], opts: &OracleOptions) -> Result<Vec<u8>, OracleError> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let flag = input[0];
        let payload = &input[1..];
        if opts.log_level >= LogLevel::Debug {
            tracing::debug!(flag, payload_size = payload.len(), "decompressing");
        }

        match flag {
            FLAG_STORED => Ok(payload.to_vec()),
            FLAG_RLE => rle::decode(payload),
            FLAG_DELTA => Ok(delta::decode(payload)),
            FLAG_LZ => lz::decode(payload),
            FLAG_BWT => bwt::decode(payload),
            other => Err(OracleError::UnknownFlag(other)),
        }
    }
}
