use std::fs;
use std::path::Path;

use crate::errors::CodifyError;

/// One input file plus its sanitized in-code identifier.
#[derive(Debug, Clone)]
pub struct Resource {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Resource {
    /// Builds a resource from an already-loaded byte buffer, deriving
    /// the identifier from `file_name`.
    pub fn new(file_name: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: sanitize(file_name),
            bytes,
        }
    }

    /// Reads one resource file whole, as raw bytes.
    ///
    /// The file is opened, fully read, and closed before this returns;
    /// no text decoding is involved, so every byte value survives
    /// verbatim into the generated literals.
    ///
    /// # Errors
    ///
    /// `FileRead` if the path is missing or unreadable, `Encoding` if
    /// the file name cannot be represented as UTF-8 (no identifier can
    /// be derived from it).
    pub fn from_file(path: &Path) -> Result<Self, CodifyError> {
        let bytes = fs::read(path).map_err(|source| CodifyError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| CodifyError::Encoding {
                path: path.to_path_buf(),
            })?;
        Ok(Self::new(file_name, bytes))
    }
}

/// A named group of resources compiled into one header/source pair.
///
/// Resource order is preserved into the generated output. Uniqueness of
/// resource names within a pack is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct Pack {
    pub pack_name: String,
    pub resources: Vec<Resource>,
    pub include_prefix: String,
}

impl Pack {
    pub fn new(
        pack_name: impl Into<String>,
        resources: Vec<Resource>,
        include_prefix: impl Into<String>,
    ) -> Self {
        Self {
            pack_name: pack_name.into(),
            resources,
            include_prefix: include_prefix.into(),
        }
    }

    /// Renders the header and source texts for this pack.
    pub fn generate(&self) -> Result<(String, String), CodifyError> {
        crate::render::generate(self)
    }
}

/// Derives an in-code identifier from a file's base name: `.` and `-`
/// become `_`.
pub fn sanitize(file_name: &str) -> String {
    file_name.replace('.', "_").replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_dots_and_dashes() {
        assert_eq!(sanitize("icon.png"), "icon_png");
        assert_eq!(sanitize("my-icon.v2.png"), "my_icon_v2_png");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let once = sanitize("a-b.c");
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn test_from_file_reads_raw_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        // Values above 0x7F must survive untouched.
        std::fs::write(&path, [0x00u8, 0x7F, 0x80, 0xFF]).unwrap();

        let resource = Resource::from_file(&path).unwrap();
        assert_eq!(resource.name, "blob_bin");
        assert_eq!(resource.bytes, vec![0x00, 0x7F, 0x80, 0xFF]);
    }

    #[test]
    fn test_from_file_missing_path_names_the_path() {
        let err = Resource::from_file(Path::new("does/not/exist.bin")).unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("does/not/exist.bin"),
            "error must identify the failing path, got: {msg}"
        );
    }
}
