use hex::FromHexError;

use crate::traits::TextExtractor;

pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Shortest hex run worth looking at: one encoded byte.
const MIN_HEX_RUN: usize = 2;

/// Space through tilde.
#[inline]
#[must_use]
pub const fn is_printable(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7E)
}

/// Maximal runs of printable ASCII bytes, in buffer order.
pub fn printable_runs(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    content
        .split(|&b| !is_printable(b))
        .filter(|run| !run.is_empty())
}

/// Maximal runs of ASCII hex digits of at least two characters, in buffer
/// order. Odd-length runs are included; callers decide what to do with them.
pub fn hex_runs(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    content
        .split(|b| !b.is_ascii_hexdigit())
        .filter(|run| run.len() >= MIN_HEX_RUN)
}

/// Decodes a hex run into the printable text it encodes.
///
/// Bytes outside the printable range are dropped rather than failing the
/// run. The result is not trimmed.
pub fn decode_hex_run(run: &[u8]) -> Result<String, FromHexError> {
    let mut bytes = hex::decode(run)?;
    bytes.retain(|&b| is_printable(b));
    Ok(bytes.into_iter().map(char::from).collect())
}

/// Two-pass string extractor: literal printable runs first, then text
/// recovered from hex-encoded runs.
///
/// Both passes read the original buffer independently, so a hex run inside
/// readable text shows up once per pass. Nothing is deduplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringExtractor {
    min_length: usize,
}

impl StringExtractor {
    #[must_use]
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    #[inline]
    #[must_use]
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    #[must_use]
    pub fn printable_strings(&self, content: &[u8]) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_printable(content, &mut out);
        out
    }

    #[must_use]
    pub fn hex_decoded_strings(&self, content: &[u8]) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_hex_decoded(content, &mut out);
        out
    }

    fn collect_printable(&self, content: &[u8], out: &mut Vec<String>) {
        for run in printable_runs(content) {
            let trimmed = run.trim_ascii();
            if trimmed.len() >= self.min_length {
                out.push(trimmed.iter().copied().map(char::from).collect());
            }
        }
    }

    fn collect_hex_decoded(&self, content: &[u8], out: &mut Vec<String>) {
        for run in hex_runs(content) {
            if run.len() % 2 != 0 {
                continue;
            }

            let decoded = match decode_hex_run(run) {
                Ok(text) => text,
                Err(e) => {
                    tracing::trace!("Skipping undecodable hex run: {}", e);
                    continue;
                }
            };

            let trimmed = decoded.trim_ascii();
            if trimmed.len() >= self.min_length {
                out.push(trimmed.to_owned());
            }
        }
    }
}

impl Default for StringExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH)
    }
}

impl TextExtractor for StringExtractor {
    fn extract(&self, content: &[u8]) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_printable(content, &mut out);
        self.collect_hex_decoded(content, &mut out);
        out
    }
}
