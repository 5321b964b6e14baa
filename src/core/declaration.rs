// src/core/declaration.rs

use crate::{constants::ARRAY_MARKER, core::kind::ArgumentKind, models::BoundValue};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("Unknown argument kind '({hint})' in declaration '{declaration}'. Expected int, str, bool or float.")]
    InvalidArgumentKind { declaration: String, hint: String },
    #[error("Declaration '{0}' does not name an argument.")]
    EmptyArgumentName(String),
    #[error("Can't find argument '{0}'")]
    ArgumentNotFound(String),
}

/// One `{...}` placeholder of a command signature, decomposed once at
/// registration and then bound against live arguments on every invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentDeclaration {
    raw: String,
    names: Vec<String>,
    is_positional: bool,
    position_index: usize,
    kind: ArgumentKind,
    is_array: bool,
    has_default: bool,
    default_text: Option<String>,
    description: String,
    pub(crate) bound: BoundValue,
}

/// Splits at the first occurrence of `sep`, like `str::split_once` but
/// keeping the whole input on the left when `sep` is absent.
fn split_first(s: &str, sep: char) -> (&str, Option<&str>) {
    match s.split_once(sep) {
        Some((left, right)) => (left, Some(right)),
        None => (s, None),
    }
}

impl ArgumentDeclaration {
    /// Parses the text between the braces of one placeholder.
    ///
    /// `position_index` is the ordinal of this declaration among the positional
    /// declarations of its signature; flags ignore it.
    ///
    /// # Errors
    /// Fails with [`SignatureError::InvalidArgumentKind`] when a `(kind)` hint is not one
    /// of `int`, `str`, `bool`, `float`, and with [`SignatureError::EmptyArgumentName`]
    /// when the declaration has no name or one of its aliases is empty.
    pub fn parse(declaration: &str, position_index: usize) -> Result<Self, SignatureError> {
        let raw = declaration.trim();

        // 1. `spec : description`
        let (spec, description) = split_first(raw, ':');
        let description = description.map(str::trim).unwrap_or_default();

        // 2. `names[=default] (kind)`
        let (name_segment, kind_part) = split_first(spec, '(');
        let name_segment = name_segment.trim();
        let hint = kind_part.and_then(|rest| rest.split_once(')').map(|(hint, _)| hint.trim()));

        // 3. `names = default`
        let (name_list, default_marker) = split_first(name_segment, '=');
        let has_default = default_marker.is_some();
        let default_marker = default_marker.map(str::trim);
        let is_array = default_marker == Some(ARRAY_MARKER);
        let default_text = default_marker
            .filter(|marker| !marker.is_empty() && !is_array)
            .map(str::to_string);

        // 4. `--name|-alias`
        let names: Vec<String> = name_list
            .split('|')
            .map(|name| name.trim().trim_start_matches('-').to_string())
            .collect();
        if names.iter().any(String::is_empty) {
            return Err(SignatureError::EmptyArgumentName(raw.to_string()));
        }

        let kind = match hint {
            Some(hint) => ArgumentKind::from_hint(hint).ok_or_else(|| {
                SignatureError::InvalidArgumentKind {
                    declaration: raw.to_string(),
                    hint: hint.to_string(),
                }
            })?,
            None => ArgumentKind::default(),
        };

        let parsed = Self {
            raw: raw.to_string(),
            names,
            is_positional: !raw.starts_with('-'),
            position_index,
            kind,
            is_array,
            has_default,
            default_text,
            description: description.to_string(),
            bound: BoundValue::Unset,
        };
        log::debug!("Parsed declaration: {:?}", parsed);
        Ok(parsed)
    }

    /// The trimmed text between the braces.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// All aliases; the first one is canonical.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The first alias, used in logs and lookups.
    pub fn canonical_name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }

    /// Returns `true` when `name` is one of this declaration's aliases.
    pub fn is(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// `true` when the declaration text does not start with `-`.
    pub fn is_positional(&self) -> bool {
        self.is_positional
    }

    /// Ordinal among the positional declarations of the signature.
    pub fn position_index(&self) -> usize {
        self.position_index
    }

    /// The `(kind)` hint, `Text` when absent.
    pub fn kind(&self) -> ArgumentKind {
        self.kind
    }

    /// Declared with `=[]`: every occurrence is collected.
    pub fn is_array(&self) -> bool {
        self.is_array
    }

    /// `true` when the declaration carries `=`, even with nothing after it.
    pub fn has_default(&self) -> bool {
        self.has_default
    }

    /// Declarations without `=` must receive a value.
    pub fn is_required(&self) -> bool {
        !self.has_default
    }

    /// Default text written after `=`, if any. Array markers are not defaults.
    pub fn default_text(&self) -> Option<&str> {
        self.default_text.as_deref()
    }

    /// Text after the first `:`, trimmed. Empty when absent.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Raw state left by the last [`bind`](Self::bind).
    pub fn bound_value(&self) -> &BoundValue {
        &self.bound
    }

    /// Names as shown to users: flags get one `-` each, positionals are bare.
    /// e.g. `-silent,-S` or `email`.
    pub fn display_names(&self) -> String {
        if self.is_positional {
            self.names.join(",")
        } else {
            self.names
                .iter()
                .map(|name| format!("-{}", name))
                .collect::<Vec<_>>()
                .join(",")
        }
    }
}
