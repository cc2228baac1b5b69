//! The named-parameter binder.

use std::collections::HashMap;
use std::fmt::Write as _;

use tracing::trace;

use crate::error::{BindError, Result};
use crate::params::BindParams;
use crate::scanner::{Fragment, Scanner};
use crate::value::BindValue;

/// A rewritten statement plus the values for its positional placeholders.
///
/// `values[i]` backs placeholder `$(start_index + i)`; with the default
/// start index of 1 that is simply `$(i + 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundQuery {
    /// Statement text with `$N` placeholders.
    pub text: String,
    /// Values in placeholder order.
    pub values: Vec<BindValue>,
}

impl BoundQuery {
    /// Splits into the `(text, values)` pair expected by database clients.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<BindValue>) {
        (self.text, self.values)
    }
}

/// Binds named parameters in `text`, numbering placeholders from `$1`.
///
/// Each distinct `:name` token is assigned the next positional index in
/// first-occurrence order; repeated occurrences reuse their index. Type-cast
/// markers (`::int`) pass through untouched. A name missing from
/// `substitutions` binds [`BindValue::Null`] without raising an error.
///
/// # Errors
///
/// Returns [`BindError::MissingSubstitutions`] if `substitutions` is `None`.
pub fn bind_query(text: &str, substitutions: Option<&BindParams>) -> Result<BoundQuery> {
    bind_query_from(text, substitutions, 1)
}

/// Binds named parameters in `text`, numbering placeholders from
/// `$start_index`.
///
/// This is the composition form of [`bind_query`]: callers building one
/// large positional sequence out of several binder calls pass one past the
/// highest index used so far.
///
/// # Errors
///
/// Returns [`BindError::MissingSubstitutions`] if `substitutions` is `None`.
pub fn bind_query_from(
    text: &str,
    substitutions: Option<&BindParams>,
    start_index: usize,
) -> Result<BoundQuery> {
    let substitutions = substitutions.ok_or(BindError::MissingSubstitutions)?;

    let mut binds: HashMap<&str, usize> = HashMap::new();
    let mut values = Vec::new();
    let mut index = start_index;
    let mut out = String::with_capacity(text.len());

    for fragment in Scanner::new(text) {
        match fragment {
            Fragment::Literal(chunk) => out.push_str(chunk),
            Fragment::Param(name) => {
                if let Some(&existing) = binds.get(name) {
                    let _ = write!(out, "${existing}");
                } else {
                    binds.insert(name, index);
                    // Value is captured at the moment the name is first
                    // seen; absent names bind NULL.
                    values.push(substitutions.get(name).cloned().unwrap_or(BindValue::Null));
                    let _ = write!(out, "${index}");
                    index += 1;
                }
            }
        }
    }

    trace!(distinct = values.len(), start_index, "bound named parameters");
    Ok(BoundQuery { text: out, values })
}
