//! Error handling for sorted directory listings

use std::io;

use thiserror::Error;

use crate::dir_path::PathKind;
use crate::options::OptionValue;

/// Custom error type for listing operations
#[derive(Error, Debug)]
pub enum ListDirError {
    #[error("expected a valid directory path, but got an empty {0}")]
    EmptyPath(PathKind),

    #[error("expected a `file:` URL for the directory path, but got a `{scheme}:` URL ({url})")]
    NotFileUrl { scheme: String, url: String },

    #[error("the URL {url} does not resolve to a local directory path")]
    UrlNotAPath { url: String },

    #[error("the directory path is not valid UTF-8, and raw byte paths are unsupported on this platform")]
    PathNotUnicode,

    #[error("`usage` option is not supported, but {0} was provided for it")]
    UsageUnsupported(OptionValue),

    #[error("expected `encoding` option to be an encoding identifier such as 'utf8' or 'buffer', but got an empty string")]
    MissingEncoding,

    #[error("unknown encoding identifier '{0}', expected one of 'utf8', 'utf-8' or 'buffer'")]
    UnknownEncoding(String),

    #[error("invalid language tag '{tag}': {message}")]
    InvalidLocale { tag: String, message: String },

    #[error("expected `caseFirst` option to be one of 'upper', 'lower' or 'false', but got `true`")]
    CaseFirstNotAName,

    #[error("value {value} out of range for collator option `{option}`, expected one of {expected}")]
    OptionValueOutOfRange {
        option: &'static str,
        value: OptionValue,
        expected: &'static str,
    },

    #[error("no collation data for locale '{locale}': {message}")]
    CollatorUnavailable { locale: String, message: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Closed classification attached to every error, for programmatic handling.
///
/// The classification is deliberately coarser than the error variants: callers
/// branching on failure care about the class (bad argument kind, bad argument
/// value, unsupported option, I/O), not the exact field that tripped it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// An argument of a structurally wrong kind (non-`file:` URL, `caseFirst: true`, ...)
    InvalidArgType,
    /// A well-typed but unusable argument value (empty path)
    InvalidArgValue,
    /// A missing or unknown encoding identifier
    InvalidEncoding,
    /// An option whose value kind is wrong for that option
    InvalidOptionType,
    /// A well-typed option value rejected by the collation layer
    InvalidOptionValue,
    /// An option this library refuses to honor (`usage`)
    UnsupportedOption,
    /// A failure reported by the directory-read primitive, forwarded verbatim
    Io,
}

impl ListDirError {
    /// Returns the classification code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            ListDirError::EmptyPath(_) => ErrorCode::InvalidArgValue,

            ListDirError::NotFileUrl { .. }
            | ListDirError::UrlNotAPath { .. }
            | ListDirError::PathNotUnicode => ErrorCode::InvalidArgType,

            ListDirError::UsageUnsupported(_) => ErrorCode::UnsupportedOption,

            ListDirError::MissingEncoding | ListDirError::UnknownEncoding(_) => {
                ErrorCode::InvalidEncoding
            }

            ListDirError::CaseFirstNotAName => ErrorCode::InvalidOptionType,

            ListDirError::InvalidLocale { .. }
            | ListDirError::OptionValueOutOfRange { .. }
            | ListDirError::CollatorUnavailable { .. } => ErrorCode::InvalidOptionValue,

            ListDirError::Io(_) => ErrorCode::Io,
        }
    }

    /// True for every failure detected before the directory read is issued
    pub fn is_pre_io(&self) -> bool {
        !matches!(self, ListDirError::Io(_))
    }
}

/// Result type for listing operations
pub type ListDirResult<T> = Result<T, ListDirError>;
