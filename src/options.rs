//! Listing options and their structural validation
//!
//! Option handling follows a fixed schema: every recognized key has an expected
//! shape and a dedicated error, checked field by field before any I/O. Facets
//! consumed by the directory read (`encoding`, `with_file_types`) and by locale
//! selection (`locales`) are extracted here; everything else is forwarded to
//! comparator synthesis in [`collate`](crate::collate).

use std::ffi::OsString;
use std::fmt;
use std::str::FromStr;

use crate::error::{ListDirError, ListDirResult};
use crate::listing::EntryName;

/// Options accepted by [`list_sorted`](crate::list_sorted).
///
/// All fields are optional; the default value requests a plain decoded-name
/// listing compared under the default locale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListOptions {
    /// Name encoding: `"utf8"`/`"utf-8"` (default) or the `"buffer"` sentinel
    /// for undecoded byte names
    pub encoding: Option<String>,
    /// Return structured entries with file-type metadata instead of bare names
    pub with_file_types: bool,
    /// Locale tags for comparison, in preference order; absent means the
    /// default locale
    pub locales: Option<Vec<String>>,
    /// `"lookup"` or `"best fit"`
    pub locale_matcher: Option<String>,
    /// `"base"`, `"accent"`, `"case"` or `"variant"`
    pub sensitivity: Option<String>,
    /// Shift punctuation out of the primary comparison
    pub ignore_punctuation: Option<bool>,
    /// Compare digit runs by numeric value
    pub numeric: Option<bool>,
    /// `"upper"`, `"lower"`, `"false"` or the literal `false`
    pub case_first: Option<OptionValue>,
    /// Always rejected; a listing is always a sort, never a match
    pub usage: Option<OptionValue>,
}

/// A loosely-typed option value: either a name string or a bare boolean
/// literal.
///
/// `case_first` legitimately accepts the literal `false` alongside its name
/// values, and `usage` must echo whatever the caller supplied, so both keep
/// the supplied kind instead of coercing to a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Name(String),
    Literal(bool),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Name(name) => write!(f, "'{name}'"),
            OptionValue::Literal(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(name: &str) -> Self {
        OptionValue::Name(name.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(name: String) -> Self {
        OptionValue::Name(name)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Literal(value)
    }
}

/// Validated name encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// Decode names to text, replacing invalid sequences
    #[default]
    Utf8,
    /// Return names as raw bytes
    Buffer,
}

impl FromStr for Encoding {
    type Err = ListDirError;

    fn from_str(identifier: &str) -> Result<Self, Self::Err> {
        match identifier {
            "" => Err(ListDirError::MissingEncoding),
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "buffer" => Ok(Encoding::Buffer),
            other => Err(ListDirError::UnknownEncoding(other.to_owned())),
        }
    }
}

impl Encoding {
    /// Projects a native file name into the representation this encoding
    /// requests
    pub(crate) fn decode(self, name: OsString) -> EntryName {
        match self {
            Encoding::Utf8 => EntryName::Text(name.to_string_lossy().into_owned()),
            Encoding::Buffer => EntryName::Bytes(os_string_bytes(name)),
        }
    }
}

#[cfg(unix)]
fn os_string_bytes(name: OsString) -> Vec<u8> {
    use std::os::unix::ffi::OsStringExt;

    name.into_vec()
}

#[cfg(not(unix))]
fn os_string_bytes(name: OsString) -> Vec<u8> {
    name.to_string_lossy().into_owned().into_bytes()
}

impl ListOptions {
    /// Creates the default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a builder
    pub fn builder() -> ListOptionsBuilder {
        ListOptionsBuilder::new()
    }

    /// Structural validation against the option schema.
    ///
    /// Semantic validation of collation facets (locale tags, enumerated
    /// values) happens during comparator synthesis, which also runs before
    /// any I/O.
    pub fn validate(&self) -> ListDirResult<()> {
        if let Some(usage) = &self.usage {
            return Err(ListDirError::UsageUnsupported(usage.clone()));
        }

        if let Some(encoding) = &self.encoding {
            encoding.parse::<Encoding>()?;
        }

        Ok(())
    }

    /// The validated encoding, defaulting to decoded text
    pub(crate) fn resolved_encoding(&self) -> ListDirResult<Encoding> {
        match self.encoding.as_deref() {
            None => Ok(Encoding::default()),
            Some(identifier) => identifier.parse(),
        }
    }
}

/// Builder for [`ListOptions`]
#[derive(Debug, Default)]
pub struct ListOptionsBuilder {
    options: ListOptions,
}

impl ListOptionsBuilder {
    /// Creates a builder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name encoding identifier
    pub fn encoding(mut self, identifier: impl Into<String>) -> Self {
        self.options.encoding = Some(identifier.into());
        self
    }

    /// Request structured entries with file-type metadata
    pub fn with_file_types(mut self, with_file_types: bool) -> Self {
        self.options.with_file_types = with_file_types;
        self
    }

    /// Add one locale tag to the preference list
    pub fn locale(mut self, tag: impl Into<String>) -> Self {
        self.options
            .locales
            .get_or_insert_with(Vec::new)
            .push(tag.into());
        self
    }

    /// Replace the locale preference list
    pub fn locales<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.locales = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Set the locale matching strategy
    pub fn locale_matcher(mut self, matcher: impl Into<String>) -> Self {
        self.options.locale_matcher = Some(matcher.into());
        self
    }

    /// Set the comparison sensitivity
    pub fn sensitivity(mut self, sensitivity: impl Into<String>) -> Self {
        self.options.sensitivity = Some(sensitivity.into());
        self
    }

    /// Shift punctuation out of the primary comparison
    pub fn ignore_punctuation(mut self, ignore: bool) -> Self {
        self.options.ignore_punctuation = Some(ignore);
        self
    }

    /// Compare digit runs by numeric value
    pub fn numeric(mut self, numeric: bool) -> Self {
        self.options.numeric = Some(numeric);
        self
    }

    /// Set which case sorts first
    pub fn case_first(mut self, value: impl Into<OptionValue>) -> Self {
        self.options.case_first = Some(value.into());
        self
    }

    /// Validate and return the final options
    pub fn build(self) -> ListDirResult<ListOptions> {
        self.options.validate()?;
        Ok(self.options)
    }
}
