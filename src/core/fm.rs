//! Directory listing for fm.
//!
//! Provides the [FileEntry] struct which is used throughout fm, the [browse_dir]
//! reader and the [DirectoryProvider] seam the workers list directories through.

use crate::core::formatter::format_attributes;
use crate::error::{FmError, FmResult};

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::Path;

/// Size and permission string captured when the directory was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMeta {
    size: u64,
    mode: String,
}

impl EntryMeta {
    pub fn new(size: u64, mode: impl Into<String>) -> Self {
        Self {
            size,
            mode: mode.into(),
        }
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn mode(&self) -> &str {
        &self.mode
    }
}

/// Represents a single entry in a directory listing.
///
/// Holds the name, the attribute flags and the metadata snapshot.
/// `meta` is `None` when stat failed while listing; the status line reports that
/// instead of size and mode.
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    name: Box<OsStr>,
    flags: u8,
    meta: Option<EntryMeta>,
}

impl FileEntry {
    // Flag bit definitions
    pub const IS_DIR: u8 = 1 << 0;
    pub const IS_HIDDEN: u8 = 1 << 1;
    pub const IS_SYMLINK: u8 = 1 << 2;

    pub fn new(name: impl Into<OsString>, flags: u8, meta: Option<EntryMeta>) -> Self {
        FileEntry {
            name: name.into().into_boxed_os_str(),
            flags,
            meta,
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn meta(&self) -> Option<&EntryMeta> {
        self.meta.as_ref()
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.flags & Self::IS_DIR != 0
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.flags & Self::IS_HIDDEN != 0
    }

    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.flags & Self::IS_SYMLINK != 0
    }
}

/// Source of directory listings.
///
/// The io worker owns one provider and calls it for every load request, so
/// implementations must be shareable across threads.
pub trait DirectoryProvider: Send + Sync {
    /// Lists `path` in a stable name order.
    fn list(&self, path: &Path) -> FmResult<Vec<FileEntry>>;
}

/// [DirectoryProvider] backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl DirectoryProvider for LocalFs {
    fn list(&self, path: &Path) -> FmResult<Vec<FileEntry>> {
        let mut entries = browse_dir(path).map_err(|e| FmError::io(path, e))?;
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(entries)
    }
}

/// Reads the contents of the provided directory and returns them in a vector of FileEntry.
///
/// Entries whose type cannot be determined are skipped. Symlinks pointing at
/// directories count as directories.
pub fn browse_dir(path: &Path) -> io::Result<Vec<FileEntry>> {
    let mut entries = Vec::with_capacity(256);

    for entry in fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let name = entry.file_name();
        let ft = match entry.file_type() {
            Ok(ft) => ft,
            Err(_) => continue,
        };

        let mut flags = 0u8;
        if ft.is_dir() {
            flags |= FileEntry::IS_DIR;
        }
        if ft.is_symlink() {
            flags |= FileEntry::IS_SYMLINK;
            if fs::metadata(entry.path()).is_ok_and(|md| md.is_dir()) {
                flags |= FileEntry::IS_DIR;
            }
        }
        if name.to_string_lossy().starts_with('.') {
            flags |= FileEntry::IS_HIDDEN;
        }

        #[cfg(windows)]
        {
            use std::os::windows::fs::MetadataExt;
            if entry
                .metadata()
                .is_ok_and(|md| md.file_attributes() & 0x2 != 0)
            {
                flags |= FileEntry::IS_HIDDEN;
            }
        }

        let meta = entry
            .metadata()
            .ok()
            .map(|md| EntryMeta::new(md.len(), format_attributes(&md)));

        entries.push(FileEntry::new(name, flags, meta));
    }
    Ok(entries)
}
