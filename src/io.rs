use memmap2::Mmap;
use std::fs::File;
use std::io::{self, Read};
use std::ops::Deref;
use std::path::Path;

/// Whole-file content, memory-mapped when the platform allows it and read
/// into memory otherwise. Both variants expose the same bytes.
pub enum FileContent {
    Mapped(Mmap),
    Buffered(Vec<u8>),
}

impl FileContent {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        match map_file(path) {
            Ok(mmap) => Ok(FileContent::Mapped(mmap)),
            Err(e) => {
                tracing::debug!("mmap failed for {}, reading instead: {}", path.display(), e);
                Ok(FileContent::Buffered(read_file(path)?))
            }
        }
    }

    /// Reads the file through a regular buffered read, never mapping it.
    pub fn read(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(FileContent::Buffered(read_file(path.as_ref())?))
    }

    #[inline]
    pub fn is_mapped(&self) -> bool {
        matches!(self, FileContent::Mapped(_))
    }
}

impl Deref for FileContent {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        match self {
            FileContent::Mapped(m) => &m[..],
            FileContent::Buffered(v) => v.as_slice(),
        }
    }
}

impl AsRef<[u8]> for FileContent {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.deref()
    }
}

fn map_file(path: &Path) -> io::Result<Mmap> {
    let file = File::open(path)?;

    if file.metadata()?.len() == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "cannot map an empty file",
        ));
    }

    // The mapping is read-only and dropped as soon as extraction finishes.
    let mmap = unsafe { Mmap::map(&file) }?;

    #[cfg(target_os = "linux")]
    {
        let _ = mmap.advise(memmap2::Advice::Sequential);
    }

    Ok(mmap)
}

fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;

    #[cfg(target_os = "linux")]
    {
        use rustix::fs::{Advice, fadvise};
        let _ = fadvise(&file, 0, None, Advice::Sequential);
    }

    let capacity = file.metadata().map(|m| m.len() as usize).unwrap_or(0);
    let mut buffer = Vec::with_capacity(capacity);
    file.read_to_end(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_mapped_content() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"\x7fELF hello world").unwrap();
        temp_file.flush().unwrap();

        let content = FileContent::open(temp_file.path()).unwrap();
        assert!(content.is_mapped());
        assert_eq!(&content[..], b"\x7fELF hello world");
    }

    #[test]
    fn test_buffered_content_matches_mapped() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(&[0xAB; 8192]).unwrap();
        temp_file.flush().unwrap();

        let mapped = FileContent::open(temp_file.path()).unwrap();
        let buffered = FileContent::read(temp_file.path()).unwrap();
        assert!(!buffered.is_mapped());
        assert_eq!(&mapped[..], &buffered[..]);
    }

    #[test]
    fn test_empty_file_falls_back_to_buffer() {
        let temp_file = NamedTempFile::new().unwrap();
        let content = FileContent::open(temp_file.path()).unwrap();
        assert!(!content.is_mapped());
        assert!(content.is_empty());
    }

    #[test]
    fn test_missing_file() {
        assert!(FileContent::open("/nonexistent/datasplunk/file").is_err());
    }
}
