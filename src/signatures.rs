use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

/// Number of leading bytes inspected when classifying a file.
pub const HEADER_LEN: usize = 4;

const PE_MARKER: [u8; 2] = *b"MZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BinaryFormat {
    Elf,
    Pe,
    MachO32,
    MachO32Swapped,
    MachO64,
    MachO64Swapped,
    JavaClass,
}

impl BinaryFormat {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Elf => "ELF (Linux)",
            Self::Pe => "PE/COFF (Windows)",
            Self::MachO32 => "Mach-O 32",
            Self::MachO32Swapped => "Mach-O 32 (byte-swapped)",
            Self::MachO64 => "Mach-O 64",
            Self::MachO64Swapped => "Mach-O 64 (byte-swapped)",
            Self::JavaClass => "Java .class",
        }
    }
}

impl fmt::Display for BinaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Signature {
    magic: [u8; HEADER_LEN],
    format: BinaryFormat,
}

impl Signature {
    const fn new(magic: [u8; HEADER_LEN], format: BinaryFormat) -> Self {
        Self { magic, format }
    }

    #[inline]
    pub fn magic(&self) -> &[u8] {
        &self.magic
    }

    #[inline]
    pub fn format(&self) -> BinaryFormat {
        self.format
    }
}

/// Full-length signatures. The PE marker is handled separately because a
/// two byte prefix is enough to identify it.
pub static SIGNATURES: [Signature; 6] = [
    Signature::new([0x7F, 0x45, 0x4C, 0x46], BinaryFormat::Elf),
    Signature::new([0xFE, 0xED, 0xFA, 0xCE], BinaryFormat::MachO32),
    Signature::new([0xCE, 0xFA, 0xED, 0xFE], BinaryFormat::MachO32Swapped),
    Signature::new([0xFE, 0xED, 0xFA, 0xCF], BinaryFormat::MachO64),
    Signature::new([0xCF, 0xFA, 0xED, 0xFE], BinaryFormat::MachO64Swapped),
    Signature::new([0xCA, 0xFE, 0xBA, 0xBE], BinaryFormat::JavaClass),
];

/// Identifies the compiled-binary format of a file from its first bytes.
///
/// `header` is what a read of [`HEADER_LEN`] bytes returned, so it may be
/// shorter for small files. Anything under two bytes never matches, and only
/// the PE marker can match a header shorter than four bytes.
#[must_use]
pub fn detect(header: &[u8]) -> Option<BinaryFormat> {
    if header.len() < PE_MARKER.len() {
        return None;
    }

    if header.starts_with(&PE_MARKER) {
        return Some(BinaryFormat::Pe);
    }

    SIGNATURES
        .iter()
        .find(|sig| sig.magic() == header)
        .map(Signature::format)
}

#[inline]
#[must_use]
pub fn classify(header: &[u8]) -> bool {
    detect(header).is_some()
}

/// Reads up to [`HEADER_LEN`] bytes from the start of `path`.
pub fn read_header(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    file.take(HEADER_LEN as u64).read_to_end(&mut header)?;
    Ok(header)
}

/// Classifies the file at `path`. Any failure to obtain the header counts as
/// "not a compiled binary".
#[must_use]
pub fn classify_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    read_header(path).map(|h| classify(&h)).unwrap_or(false)
}
