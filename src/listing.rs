//! Listing containers: entry names, structured entries, and the result set

use std::borrow::Cow;
use std::fmt;
use std::fs::FileType;

use crate::collate::NameComparator;

/// The name of one directory entry, in the representation the `encoding`
/// option requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryName {
    /// A decoded text name
    Text(String),
    /// An undecoded byte-sequence name (`encoding: "buffer"`)
    Bytes(Vec<u8>),
}

impl EntryName {
    /// The raw bytes of the name, regardless of representation
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            EntryName::Text(text) => text.as_bytes(),
            EntryName::Bytes(bytes) => bytes,
        }
    }

    /// The decoded name when this entry carries text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            EntryName::Text(text) => Some(text),
            EntryName::Bytes(_) => None,
        }
    }

    /// A text projection of the name, decoding byte names lossily
    pub fn to_text_lossy(&self) -> Cow<'_, str> {
        match self {
            EntryName::Text(text) => Cow::Borrowed(text),
            EntryName::Bytes(bytes) => String::from_utf8_lossy(bytes),
        }
    }
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text_lossy())
    }
}

/// A structured directory entry: a name plus the file-type metadata reported
/// by the directory read
#[derive(Debug, Clone)]
pub struct Entry {
    name: EntryName,
    file_type: FileType,
}

impl Entry {
    pub(crate) fn new(name: EntryName, file_type: FileType) -> Self {
        Self { name, file_type }
    }

    /// The entry name
    pub fn name(&self) -> &EntryName {
        &self.name
    }

    /// The platform file type of the entry
    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn is_file(&self) -> bool {
        self.file_type.is_file()
    }

    pub fn is_dir(&self) -> bool {
        self.file_type.is_dir()
    }

    pub fn is_symlink(&self) -> bool {
        self.file_type.is_symlink()
    }
}

/// The sorted result set: bare names, or structured entries when
/// `with_file_types` was requested
#[derive(Debug, Clone)]
pub enum Listing {
    Names(Vec<EntryName>),
    Entries(Vec<Entry>),
}

impl Listing {
    /// Number of entries in the listing
    pub fn len(&self) -> usize {
        match self {
            Listing::Names(names) => names.len(),
            Listing::Entries(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the entry names regardless of listing shape
    pub fn names(&self) -> Box<dyn Iterator<Item = &EntryName> + '_> {
        match self {
            Listing::Names(names) => Box::new(names.iter()),
            Listing::Entries(entries) => Box::new(entries.iter().map(Entry::name)),
        }
    }

    /// Reorders the listing in place under the given comparator.
    ///
    /// The sort is stable and touches nothing but entry order: the result is
    /// always a permutation of the input.
    pub fn sort_by(&mut self, comparator: &NameComparator) {
        match self {
            Listing::Names(names) => {
                names.sort_by(|a, b| comparator.compare(a, b));
            }
            Listing::Entries(entries) => {
                entries.sort_by(|a, b| comparator.compare(a.name(), b.name()));
            }
        }
    }
}
