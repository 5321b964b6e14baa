// src/core/kind.rs

use crate::models::ArgValue;

/// The closed set of value kinds a declaration can carry.
///
/// Every kind owns a default value and a coercion from the raw text typed on
/// the command line. Adding a kind means extending both matches below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArgumentKind {
    Integer,
    #[default]
    Text,
    Boolean,
    Float,
}

impl ArgumentKind {
    /// Resolves the text inside a `(kind)` hint. Matching is case-sensitive.
    pub fn from_hint(hint: &str) -> Option<Self> {
        match hint {
            "int" => Some(Self::Integer),
            "str" => Some(Self::Text),
            "bool" => Some(Self::Boolean),
            "float" => Some(Self::Float),
            _ => None,
        }
    }

    /// The hint text that selects this kind.
    pub fn hint(self) -> &'static str {
        match self {
            Self::Integer => "int",
            Self::Text => "str",
            Self::Boolean => "bool",
            Self::Float => "float",
        }
    }

    /// Value used when an optional argument received no input and declared no default text.
    pub fn default_value(self) -> ArgValue {
        match self {
            Self::Integer => ArgValue::Int(0),
            Self::Text => ArgValue::Text(String::new()),
            Self::Boolean => ArgValue::Bool(false),
            Self::Float => ArgValue::Float(0.0),
        }
    }

    /// Converts one raw string into this kind's native value.
    pub fn coerce(self, raw: &str) -> ArgValue {
        match self {
            Self::Integer => ArgValue::Int(leading_integer(raw)),
            Self::Text => ArgValue::Text(raw.to_string()),
            Self::Boolean => ArgValue::Bool(!matches!(raw, "" | "0" | "false")),
            Self::Float => ArgValue::Float(leading_float(raw)),
        }
    }

    /// Converts a sequence of raw strings element-wise.
    pub fn coerce_all(self, raw: &[String]) -> ArgValue {
        ArgValue::List(raw.iter().map(|item| self.coerce(item)).collect())
    }
}

/// Reads the longest `[+-]?digits` prefix after leading whitespace.
/// Text without such a prefix is `0`; out-of-range values saturate.
fn leading_integer(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let mut value: i64 = 0;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else {
            break;
        };
        let d = i64::from(d);
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    value
}

/// Reads the longest decimal float prefix (`1`, `-2.5`, `.5`, `3e2`) after
/// leading whitespace. Text without such a prefix is `0.0`.
fn leading_float(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if mantissa_digits > 0 || frac_end > frac_start {
            mantissa_digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s.get(..end)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .unwrap_or(0.0)
}
