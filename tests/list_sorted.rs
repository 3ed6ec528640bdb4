//! End-to-end tests for sorted directory listings.

use std::io;
use std::path::Path;

use itertools::Itertools;
use url::Url;

use readdir_sorted::{list_sorted, EntryName, ErrorCode, ListDirError, ListOptions, Listing};

fn fixture_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    for name in ["10", "2", "a.ac", "aab"] {
        std::fs::File::create(dir.path().join(name)).expect("create fixture file");
    }
    dir
}

fn text_names(listing: &Listing) -> Vec<String> {
    listing.names().map(ToString::to_string).collect()
}

fn numeric_en_options() -> ListOptions {
    ListOptions::builder()
        .locales(["en"])
        .numeric(true)
        .ignore_punctuation(true)
        .build()
        .expect("valid options")
}

#[tokio::test]
async fn default_options_sort_lexically() {
    let dir = fixture_dir();
    let listing = list_sorted(dir.path(), None).await.expect("sorted listing");
    assert_eq!(text_names(&listing), ["10", "2", "a.ac", "aab"]);
}

#[tokio::test]
async fn locale_numeric_options_sort_humanely() {
    let dir = fixture_dir();
    let listing = list_sorted(dir.path(), Some(numeric_en_options()))
        .await
        .expect("sorted listing");
    assert_eq!(text_names(&listing), ["2", "10", "aab", "a.ac"]);
}

#[tokio::test]
async fn result_is_a_permutation_of_the_raw_listing() {
    let dir = fixture_dir();
    let listing = list_sorted(dir.path(), None).await.expect("sorted listing");

    let raw: Vec<String> = std::fs::read_dir(dir.path())
        .expect("read fixture dir")
        .map(|entry| {
            entry
                .expect("fixture entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();

    assert_eq!(listing.len(), raw.len());
    assert_eq!(
        text_names(&listing).into_iter().sorted().collect_vec(),
        raw.into_iter().sorted().collect_vec()
    );
}

#[tokio::test]
async fn repeated_runs_produce_identical_order() {
    let dir = fixture_dir();
    let first = list_sorted(dir.path(), Some(numeric_en_options()))
        .await
        .expect("first run");
    let second = list_sorted(dir.path(), Some(numeric_en_options()))
        .await
        .expect("second run");
    assert_eq!(text_names(&first), text_names(&second));
}

#[tokio::test]
async fn with_file_types_exposes_type_introspection() {
    let dir = fixture_dir();
    let options = ListOptions::builder()
        .with_file_types(true)
        .build()
        .expect("valid options");
    let listing = list_sorted(dir.path(), Some(options))
        .await
        .expect("sorted listing");

    let Listing::Entries(entries) = listing else {
        panic!("expected structured entries");
    };
    assert_eq!(entries.len(), 4);
    for entry in &entries {
        assert!(entry.is_file());
        assert!(!entry.is_dir());
    }
    assert_eq!(entries[0].name().to_text_lossy(), "10");
}

#[tokio::test]
async fn buffer_encoding_returns_bytes_in_text_order() {
    let dir = fixture_dir();
    let options = ListOptions::builder()
        .encoding("buffer")
        .with_file_types(true)
        .locales(["en"])
        .numeric(true)
        .ignore_punctuation(true)
        .build()
        .expect("valid options");
    let listing = list_sorted(dir.path(), Some(options))
        .await
        .expect("sorted listing");

    let byte_names: Vec<&EntryName> = listing.names().collect();
    assert!(byte_names.iter().all(|name| name.as_text().is_none()));

    let text_listing = list_sorted(dir.path(), Some(numeric_en_options()))
        .await
        .expect("text run");
    assert_eq!(
        byte_names
            .iter()
            .map(|name| name.to_text_lossy().into_owned())
            .collect_vec(),
        text_names(&text_listing)
    );
}

#[tokio::test]
async fn file_url_paths_are_accepted() {
    let dir = fixture_dir();
    let url = Url::from_file_path(dir.path()).expect("file URL");
    let listing = list_sorted(url, None).await.expect("sorted listing");
    assert_eq!(text_names(&listing), ["10", "2", "a.ac", "aab"]);
}

#[cfg(unix)]
#[tokio::test]
async fn byte_paths_are_accepted() {
    use std::os::unix::ffi::OsStrExt;

    let dir = fixture_dir();
    let bytes = dir.path().as_os_str().as_bytes().to_vec();
    let listing = list_sorted(bytes, None).await.expect("sorted listing");
    assert_eq!(listing.len(), 4);
}

#[tokio::test]
async fn empty_path_is_an_invalid_value() {
    let err = list_sorted("", None).await.expect_err("empty path");
    assert_eq!(err.code(), ErrorCode::InvalidArgValue);
}

#[tokio::test]
async fn missing_directory_is_an_io_error() {
    let missing = Path::new("/nonexistent/readdir-sorted-fixture");
    let err = list_sorted(missing, None).await.expect_err("missing dir");
    assert_eq!(err.code(), ErrorCode::Io);
    match err {
        ListDirError::Io(io_err) => assert_eq!(io_err.kind(), io::ErrorKind::NotFound),
        other => panic!("expected an I/O error, got {other}"),
    }
}

#[tokio::test]
async fn option_errors_win_over_io_errors() {
    let missing = Path::new("/nonexistent/readdir-sorted-fixture");

    let usage = ListOptions {
        usage: Some("search".into()),
        ..Default::default()
    };
    let err = list_sorted(missing, Some(usage)).await.expect_err("usage");
    assert_eq!(err.code(), ErrorCode::UnsupportedOption);

    let sensitivity = ListOptions::builder()
        .sensitivity("#")
        .build()
        .expect("structurally fine");
    let err = list_sorted(missing, Some(sensitivity))
        .await
        .expect_err("bad sensitivity");
    assert_eq!(err.code(), ErrorCode::InvalidOptionValue);
}

#[tokio::test]
async fn usage_is_rejected_for_any_value() {
    let dir = fixture_dir();
    for usage in ["sort", "search"] {
        let options = ListOptions {
            usage: Some(usage.into()),
            ..Default::default()
        };
        let err = list_sorted(dir.path(), Some(options))
            .await
            .expect_err("usage is unsupported");
        assert_eq!(err.code(), ErrorCode::UnsupportedOption);
    }

    let options = ListOptions {
        usage: Some(false.into()),
        ..Default::default()
    };
    let err = list_sorted(dir.path(), Some(options))
        .await
        .expect_err("usage is unsupported even as `false`");
    assert_eq!(err.code(), ErrorCode::UnsupportedOption);
}
