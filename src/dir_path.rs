//! Directory reference handling
//!
//! A directory can be referred to by decoded text, by a native path, by a raw
//! byte sequence, or by a `file:` URL. Every form is validated and reduced to a
//! [`PathBuf`] before any I/O happens.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{ListDirError, ListDirResult};

/// The directory argument accepted by [`list_sorted`](crate::list_sorted)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirPath {
    /// A decoded text path
    Text(String),
    /// A platform-native path
    Native(PathBuf),
    /// An undecoded byte-sequence path
    Bytes(Vec<u8>),
    /// A `file:` URL resolving to a local path
    Url(Url),
}

/// Describes which kind of directory reference was supplied.
///
/// Used to narrate validation failures without dumping the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Text,
    Native,
    Bytes,
    Url,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PathKind::Text => "string",
            PathKind::Native => "path",
            PathKind::Bytes => "byte buffer",
            PathKind::Url => "URL",
        })
    }
}

impl DirPath {
    /// The kind of reference this value carries
    pub fn kind(&self) -> PathKind {
        match self {
            DirPath::Text(_) => PathKind::Text,
            DirPath::Native(_) => PathKind::Native,
            DirPath::Bytes(_) => PathKind::Bytes,
            DirPath::Url(_) => PathKind::Url,
        }
    }

    /// Reduces the reference to a native path, rejecting empty and
    /// non-local references. Performs no filesystem access.
    pub fn resolve(&self) -> ListDirResult<PathBuf> {
        match self {
            DirPath::Text(text) if text.is_empty() => {
                Err(ListDirError::EmptyPath(PathKind::Text))
            }
            DirPath::Text(text) => Ok(PathBuf::from(text)),

            DirPath::Native(path) if path.as_os_str().is_empty() => {
                Err(ListDirError::EmptyPath(PathKind::Native))
            }
            DirPath::Native(path) => Ok(path.clone()),

            DirPath::Bytes(bytes) if bytes.is_empty() => {
                Err(ListDirError::EmptyPath(PathKind::Bytes))
            }
            DirPath::Bytes(bytes) => bytes_to_path(bytes),

            DirPath::Url(url) if url.scheme() != "file" => Err(ListDirError::NotFileUrl {
                scheme: url.scheme().to_owned(),
                url: url.to_string(),
            }),
            DirPath::Url(url) => url
                .to_file_path()
                .map_err(|()| ListDirError::UrlNotAPath {
                    url: url.to_string(),
                }),
        }
    }
}

#[cfg(unix)]
fn bytes_to_path(bytes: &[u8]) -> ListDirResult<PathBuf> {
    use std::os::unix::ffi::OsStrExt;

    Ok(PathBuf::from(OsStr::from_bytes(bytes)))
}

#[cfg(not(unix))]
fn bytes_to_path(bytes: &[u8]) -> ListDirResult<PathBuf> {
    std::str::from_utf8(bytes)
        .map(PathBuf::from)
        .map_err(|_| ListDirError::PathNotUnicode)
}

impl From<&str> for DirPath {
    fn from(text: &str) -> Self {
        DirPath::Text(text.to_owned())
    }
}

impl From<String> for DirPath {
    fn from(text: String) -> Self {
        DirPath::Text(text)
    }
}

impl From<&Path> for DirPath {
    fn from(path: &Path) -> Self {
        DirPath::Native(path.to_path_buf())
    }
}

impl From<PathBuf> for DirPath {
    fn from(path: PathBuf) -> Self {
        DirPath::Native(path)
    }
}

impl From<&OsStr> for DirPath {
    fn from(path: &OsStr) -> Self {
        DirPath::Native(PathBuf::from(path))
    }
}

impl From<OsString> for DirPath {
    fn from(path: OsString) -> Self {
        DirPath::Native(PathBuf::from(path))
    }
}

impl From<&[u8]> for DirPath {
    fn from(bytes: &[u8]) -> Self {
        DirPath::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for DirPath {
    fn from(bytes: Vec<u8>) -> Self {
        DirPath::Bytes(bytes)
    }
}

impl From<Url> for DirPath {
    fn from(url: Url) -> Self {
        DirPath::Url(url)
    }
}
