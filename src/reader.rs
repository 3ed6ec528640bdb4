//! The single call to the directory-read collaborator.
//!
//! Directory traversal is never re-implemented here: `tokio::fs::read_dir`
//! does the reading, this module only forwards the facets it understands
//! (encoding, with_file_types) and shapes the unsorted result. I/O failures
//! propagate unchanged.

use std::io;
use std::path::Path;

use tokio::fs;

use crate::listing::{Entry, Listing};
use crate::options::Encoding;

pub(crate) async fn read_dir_unsorted(
    dir: &Path,
    encoding: Encoding,
    with_file_types: bool,
) -> io::Result<Listing> {
    let mut reader = fs::read_dir(dir).await?;

    if with_file_types {
        let mut entries = Vec::new();
        while let Some(entry) = reader.next_entry().await? {
            let file_type = entry.file_type().await?;
            entries.push(Entry::new(encoding.decode(entry.file_name()), file_type));
        }
        Ok(Listing::Entries(entries))
    } else {
        let mut names = Vec::new();
        while let Some(entry) = reader.next_entry().await? {
            names.push(encoding.decode(entry.file_name()));
        }
        Ok(Listing::Names(names))
    }
}
