//! Acquisition boundary
//!
//! The transport delivers one newline-terminated batch of
//! whitespace-separated decimal numbers per run:
//!
//! ```text
//! 12.5 12.7 13.1 12.9\n
//! ```
//!
//! Parsing stops at the first token that is not a finite number; that token
//! and everything after it are counted as ignored. An empty batch is not an
//! error at this layer, the shaping stage rejects it.

use alloc::vec::Vec;

/// One parsed batch of raw samples
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    /// Samples in arrival order
    pub samples: Vec<f64>,
    /// Tokens left unparsed after the first non-numeric one
    pub ignored_tokens: usize,
}

impl Batch {
    /// True when no samples were parsed
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Parse one line of whitespace-separated samples
pub fn parse_batch(line: &str) -> Batch {
    let mut tokens = line.split_whitespace();
    let mut samples = Vec::new();
    let mut ignored_tokens = 0;

    while let Some(token) = tokens.next() {
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => samples.push(value),
            _ => {
                ignored_tokens = 1 + tokens.by_ref().count();
                log_warn!(
                    "Stopped parsing batch at token {:?}: {} tokens ignored",
                    token, ignored_tokens
                );
                break;
            }
        }
    }

    Batch {
        samples,
        ignored_tokens,
    }
}

/// Read the next newline-terminated batch from `reader`
///
/// Returns an empty batch at end of input.
#[cfg(feature = "std")]
pub fn read_batch<R: std::io::BufRead>(reader: &mut R) -> std::io::Result<Batch> {
    let mut line = alloc::string::String::new();
    let bytes = reader.read_line(&mut line)?;
    log_debug!("Read {} bytes of batch input", bytes);
    Ok(parse_batch(&line))
}
