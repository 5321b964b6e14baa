// src/core/signature.rs

use crate::{
    core::declaration::{ArgumentDeclaration, SignatureError},
    models::ArgValue,
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PLACEHOLDER_RE: Regex = Regex::new(r"\{([^}]+)\}").unwrap();
}

/// Extracts the command name: the text before the first whitespace or the
/// first placeholder, e.g. `send:mail` for `"send:mail {email}"`.
pub fn parse_name(signature: &str) -> String {
    let trimmed = signature.trim_start();
    let end = trimmed
        .find(|c: char| c.is_whitespace() || c == '{')
        .unwrap_or(trimmed.len());
    trimmed.get(..end).unwrap_or(trimmed).to_string()
}

/// Parses every `{...}` placeholder of a signature, in order.
///
/// Positional declarations are numbered among themselves, so the second
/// bare name binds the second live argument regardless of flags declared in between.
pub fn parse_declarations(signature: &str) -> Result<Vec<ArgumentDeclaration>, SignatureError> {
    let mut next_position = 0;
    PLACEHOLDER_RE
        .captures_iter(signature)
        .filter_map(|caps| caps.get(1))
        .map(|content| {
            let declaration = ArgumentDeclaration::parse(content.as_str(), next_position)?;
            if declaration.is_positional() {
                next_position += 1;
            }
            Ok(declaration)
        })
        .collect()
}

/// Binds every declaration against the same live argument list.
pub fn bind_all(declarations: &mut [ArgumentDeclaration], args: &[String]) {
    for declaration in declarations.iter_mut() {
        declaration.bind(args);
    }
}

/// `true` when no required declaration is left unbound.
pub fn is_valid(declarations: &[ArgumentDeclaration]) -> bool {
    declarations.iter().all(ArgumentDeclaration::is_valid)
}

/// Message of the first invalid declaration in declaration order, or an empty string.
pub fn first_error_message(declarations: &[ArgumentDeclaration]) -> String {
    declarations
        .iter()
        .find(|declaration| !declaration.is_valid())
        .map(ArgumentDeclaration::error_message)
        .unwrap_or_default()
}

/// The declaration answering to `name` (any alias).
///
/// # Errors
/// [`SignatureError::ArgumentNotFound`] when no declaration has that name.
pub fn find<'a>(
    declarations: &'a [ArgumentDeclaration],
    name: &str,
) -> Result<&'a ArgumentDeclaration, SignatureError> {
    declarations
        .iter()
        .find(|declaration| declaration.is(name))
        .ok_or_else(|| SignatureError::ArgumentNotFound(name.to_string()))
}

/// Typed value of the declaration that answers to `name` (any alias).
pub fn get_value(declarations: &[ArgumentDeclaration], name: &str) -> Result<ArgValue, SignatureError> {
    find(declarations, name).map(ArgumentDeclaration::value)
}

/// The parsed declarations of one command signature.
///
/// A registry keeps one pristine `Arguments` per command and hands every
/// invocation its own clone to bind, so binding state is never shared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    declarations: Vec<ArgumentDeclaration>,
}

impl Arguments {
    /// Parses every placeholder of `signature`. Text outside braces is ignored.
    pub fn parse(signature: &str) -> Result<Self, SignatureError> {
        Ok(Self {
            declarations: parse_declarations(signature)?,
        })
    }

    /// Declarations in signature order.
    pub fn declarations(&self) -> &[ArgumentDeclaration] {
        &self.declarations
    }

    /// `true` for signatures without placeholders.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Binds in place, discarding any previous binding.
    pub fn bind(&mut self, args: &[String]) {
        bind_all(&mut self.declarations, args);
    }

    /// Returns a fresh copy bound against `args`; `self` stays untouched.
    pub fn bound(&self, args: &[String]) -> Self {
        let mut copy = self.clone();
        copy.bind(args);
        copy
    }

    /// See [`is_valid`].
    pub fn is_valid(&self) -> bool {
        is_valid(&self.declarations)
    }

    /// See [`first_error_message`].
    pub fn first_error_message(&self) -> String {
        first_error_message(&self.declarations)
    }

    /// Looks a declaration up by any alias, see [`find`].
    pub fn arg(&self, name: &str) -> Result<&ArgumentDeclaration, SignatureError> {
        find(&self.declarations, name)
    }

    /// Typed value by any alias, see [`get_value`].
    pub fn value(&self, name: &str) -> Result<ArgValue, SignatureError> {
        get_value(&self.declarations, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kind::ArgumentKind;

    const SEND_MAIL: &str =
        "send:mail {email} {--count=1 (int) : Count of mails} { --id=[]} {-silent|-S (bool)}";

    fn to_cli_params(params: &[&str]) -> Vec<String> {
        params.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(parse_name(SEND_MAIL), "send:mail");
        assert_eq!(parse_name("show:time\n    {prefix}"), "show:time");
        assert_eq!(parse_name("list"), "list");
        assert_eq!(parse_name("greet{name}"), "greet");
        assert_eq!(parse_name("  spaced {x}"), "spaced");
    }

    #[test]
    fn test_parse_declarations_in_order() {
        let decls = parse_declarations(SEND_MAIL).unwrap();
        assert_eq!(decls.len(), 4);

        let names: Vec<&str> = decls.iter().map(ArgumentDeclaration::canonical_name).collect();
        assert_eq!(names, ["email", "count", "id", "silent"]);
        assert!(decls[0].is_positional());
        assert_eq!(decls[1].kind(), ArgumentKind::Integer);
        assert!(decls[2].is_array());
        assert_eq!(decls[3].kind(), ArgumentKind::Boolean);
    }

    #[test]
    fn test_positional_indexes_skip_flags() {
        let decls = parse_declarations("copy {from} {--force (bool)} {to}").unwrap();
        assert_eq!(decls[0].position_index(), 0);
        assert_eq!(decls[2].position_index(), 1);
    }

    #[test]
    fn test_invalid_kind_fails_the_whole_signature() {
        let result = parse_declarations("broken {--n (number)}");
        assert!(matches!(result, Err(SignatureError::InvalidArgumentKind { .. })));
    }

    #[test]
    fn test_bind_all_and_values() {
        let mut args = Arguments::parse(SEND_MAIL).unwrap();
        args.bind(&to_cli_params(&["user@mail.com", "--count", "2", "-id", "7", "--id=8", "-S"]));

        assert!(args.is_valid());
        assert_eq!(args.first_error_message(), "");
        assert_eq!(args.value("email").unwrap(), ArgValue::from("user@mail.com"));
        assert_eq!(args.value("count").unwrap(), ArgValue::Int(2));
        assert_eq!(
            args.value("id").unwrap(),
            ArgValue::List(vec![ArgValue::from("7"), ArgValue::from("8")])
        );
        assert_eq!(args.value("S").unwrap(), ArgValue::Bool(true));
        assert_eq!(args.value("silent").unwrap(), ArgValue::Bool(true));
    }

    #[test]
    fn test_first_error_follows_declaration_order() {
        let args = Arguments::parse(SEND_MAIL).unwrap().bound(&[]);
        assert!(!args.is_valid());
        assert_eq!(args.first_error_message(), "email - is required");

        let with_email = Arguments::parse(SEND_MAIL)
            .unwrap()
            .bound(&to_cli_params(&["user@mail.com", "--count", "1"]));
        assert_eq!(with_email.first_error_message(), "-silent,-S - is required");
    }

    #[test]
    fn test_missing_required_positional() {
        let args = Arguments::parse("show:time {prefix}").unwrap().bound(&[]);
        assert!(!args.is_valid());
        assert!(!args.is_valid());
        assert_eq!(args.first_error_message(), "prefix - is required");
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let args = Arguments::parse(SEND_MAIL).unwrap();
        assert_eq!(
            args.value("nope"),
            Err(SignatureError::ArgumentNotFound("nope".to_string()))
        );
        assert_eq!(
            get_value(args.declarations(), "nope").unwrap_err().to_string(),
            "Can't find argument 'nope'"
        );
    }

    #[test]
    fn test_bound_copy_leaves_template_pristine() {
        let template = Arguments::parse(SEND_MAIL).unwrap();
        let _bound = template.bound(&to_cli_params(&["user@mail.com", "-S"]));
        assert!(template
            .declarations()
            .iter()
            .all(|d| d.bound_value().is_unset()));
    }

    #[test]
    fn test_signature_without_placeholders() {
        let args = Arguments::parse("list").unwrap();
        assert!(args.is_empty());
        assert!(args.is_valid());
    }
}
