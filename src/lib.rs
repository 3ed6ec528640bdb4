//! Locale-aware sorted directory listings.
//!
//! This crate lists a directory and returns its entries in a locale-aware,
//! human-friendly order. Inputs are validated against a fixed option schema
//! and the collation comparator is synthesized and exercised before any I/O,
//! so every malformed call fails fast with a typed, classified error.
//! Directory reading (`tokio::fs::read_dir`) and collation (ICU4X) are
//! external collaborators; this crate only validates, forwards, and applies
//! a stable sort.
//!
//! ```no_run
//! use readdir_sorted::{list_sorted, ListOptions};
//!
//! # async fn demo() -> Result<(), readdir_sorted::ListDirError> {
//! let options = ListOptions::builder()
//!     .locale("en")
//!     .numeric(true)
//!     .ignore_punctuation(true)
//!     .build()?;
//! let listing = list_sorted("./fixtures", Some(options)).await?;
//! for name in listing.names() {
//!     println!("{name}");
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod collate;
pub mod dir_path;
pub mod error;
pub mod listing;
pub mod options;
mod reader;

// Re-export commonly used types
pub use collate::NameComparator;
pub use dir_path::{DirPath, PathKind};
pub use error::{ErrorCode, ListDirError, ListDirResult};
pub use listing::{Entry, EntryName, Listing};
pub use options::{Encoding, ListOptions, ListOptionsBuilder, OptionValue};

/// Lists the entries of `path` sorted under the locale and comparison facets
/// in `options`.
///
/// Validation, comparator synthesis and a comparator dry run all complete
/// before the directory read is issued, so an invalid call never reaches the
/// filesystem. The read happens exactly once; its failures are returned
/// verbatim as [`ListDirError::Io`]. The sort is stable and in place: the
/// result is a permutation of whatever the read produced.
pub async fn list_sorted(
    path: impl Into<DirPath>,
    options: Option<ListOptions>,
) -> ListDirResult<Listing> {
    let options = options.unwrap_or_default();

    let dir = path.into().resolve()?;
    options.validate()?;
    let comparator = NameComparator::synthesize(&options)?;
    let encoding = options.resolved_encoding()?;

    tracing::debug!(path = %dir.display(), with_file_types = options.with_file_types, "reading directory");
    let mut listing = reader::read_dir_unsorted(&dir, encoding, options.with_file_types).await?;

    listing.sort_by(&comparator);
    tracing::trace!(entries = listing.len(), "directory listing sorted");

    Ok(listing)
}
