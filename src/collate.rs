//! Comparator synthesis
//!
//! Builds a locale-aware total order over entry names from validated options.
//! Collation itself is delegated to ICU4X; this module only maps the option
//! schema onto collator facets and pins the usage to sorting. Everything here
//! runs before the directory read, so semantically invalid options (bad
//! language tag, out-of-range facet value) surface without touching the
//! filesystem.

use std::cmp::Ordering;
use std::fmt;

use icu::collator::{
    AlternateHandling, CaseFirst, CaseLevel, Collator, CollatorOptions, MaxVariable, Numeric,
    Strength,
};
use icu::locid::Locale;

use crate::error::{ListDirError, ListDirResult};
use crate::listing::EntryName;
use crate::options::{ListOptions, OptionValue};

/// A total, stable order over entry names
pub struct NameComparator {
    collator: Collator,
}

// The wrapped collator has no Debug of its own.
impl fmt::Debug for NameComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameComparator").finish_non_exhaustive()
    }
}

impl NameComparator {
    /// Builds the comparator for the given options and exercises it once on
    /// trivial input, so every collation-level failure is reported before any
    /// I/O is issued.
    pub fn synthesize(options: &ListOptions) -> ListDirResult<Self> {
        if let Some(matcher) = options.locale_matcher.as_deref() {
            if matcher != "lookup" && matcher != "best fit" {
                return Err(ListDirError::OptionValueOutOfRange {
                    option: "localeMatcher",
                    value: OptionValue::from(matcher),
                    expected: "'lookup' or 'best fit'",
                });
            }
        }

        let locale = resolve_locale(options.locales.as_deref())?;
        let collator_options = collator_options(options)?;

        let data_locale = (&locale).into();
        let collator = Collator::try_new(&data_locale, collator_options).map_err(|err| {
            ListDirError::CollatorUnavailable {
                locale: locale.to_string(),
                message: err.to_string(),
            }
        })?;

        let comparator = Self { collator };

        // Dry run before the caller reaches the filesystem.
        let _ = comparator.collator.compare("", "");

        Ok(comparator)
    }

    /// Three-way comparison of two entry names.
    ///
    /// Byte names are decoded for comparison only; their ordering matches the
    /// ordering of the equivalent decoded-text names.
    pub fn compare(&self, a: &EntryName, b: &EntryName) -> Ordering {
        match (a, b) {
            (EntryName::Text(a), EntryName::Text(b)) => self.collator.compare(a, b),
            (a, b) => self.collator.compare_utf8(a.as_bytes(), b.as_bytes()),
        }
    }
}

/// Picks the comparison locale: the first supplied tag, or the root locale
/// when none is given. Every supplied tag must parse, not just the first.
fn resolve_locale(tags: Option<&[String]>) -> ListDirResult<Locale> {
    let Some(tags) = tags else {
        return Ok(Locale::UND);
    };

    let mut resolved = Locale::UND;
    for (index, tag) in tags.iter().enumerate() {
        let parsed = tag
            .parse::<Locale>()
            .map_err(|err| ListDirError::InvalidLocale {
                tag: tag.clone(),
                message: err.to_string(),
            })?;
        if index == 0 {
            resolved = parsed;
        }
    }
    Ok(resolved)
}

/// Maps the comparison facets of the option schema onto ICU collator options.
/// `encoding`, `locales` and `with_file_types` never reach the collator, and
/// the usage facet is fixed to sorting by construction.
fn collator_options(options: &ListOptions) -> ListDirResult<CollatorOptions> {
    let mut collator_options = CollatorOptions::new();

    match options.sensitivity.as_deref() {
        None => {}
        Some("base") => {
            collator_options.strength = Some(Strength::Primary);
        }
        Some("accent") => {
            collator_options.strength = Some(Strength::Secondary);
        }
        Some("case") => {
            collator_options.strength = Some(Strength::Primary);
            collator_options.case_level = Some(CaseLevel::On);
        }
        Some("variant") => {
            collator_options.strength = Some(Strength::Tertiary);
        }
        Some(other) => {
            return Err(ListDirError::OptionValueOutOfRange {
                option: "sensitivity",
                value: OptionValue::from(other),
                expected: "'base', 'accent', 'case' or 'variant'",
            });
        }
    }

    if let Some(ignore) = options.ignore_punctuation {
        if ignore {
            collator_options.alternate_handling = Some(AlternateHandling::Shifted);
            collator_options.max_variable = Some(MaxVariable::Punctuation);
        } else {
            collator_options.alternate_handling = Some(AlternateHandling::NonIgnorable);
        }
    }

    if let Some(numeric) = options.numeric {
        collator_options.numeric = Some(if numeric { Numeric::On } else { Numeric::Off });
    }

    if let Some(case_first) = &options.case_first {
        collator_options.case_first = Some(match case_first {
            OptionValue::Literal(false) => CaseFirst::Off,
            OptionValue::Literal(true) => return Err(ListDirError::CaseFirstNotAName),
            OptionValue::Name(name) => match name.as_str() {
                "upper" => CaseFirst::UpperFirst,
                "lower" => CaseFirst::LowerFirst,
                "false" => CaseFirst::Off,
                other => {
                    return Err(ListDirError::OptionValueOutOfRange {
                        option: "caseFirst",
                        value: OptionValue::from(other),
                        expected: "'upper', 'lower' or 'false'",
                    });
                }
            },
        });
    }

    Ok(collator_options)
}
