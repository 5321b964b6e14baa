// src/core/binder.rs

use crate::{
    core::{declaration::ArgumentDeclaration, kind::ArgumentKind},
    models::{ArgValue, BoundValue},
};

impl ArgumentDeclaration {
    /// Binds this declaration against the live arguments of one invocation.
    ///
    /// # Logic:
    /// - Positional declarations take `args[position_index]` verbatim, if it exists.
    /// - Flags scan every token. `-name=value` binds `value` in place; a bare `-name`
    ///   binds `true` for boolean kinds and otherwise the token right after it.
    /// - Array declarations append every match instead of overwriting.
    ///
    /// Any previous binding is discarded first, so re-binding never accumulates
    /// stale values.
    pub fn bind(&mut self, args: &[String]) {
        self.bound = BoundValue::Unset;

        if self.is_positional() {
            if let Some(value) = args.get(self.position_index()) {
                self.set_value(value);
            }
            return;
        }

        let mut awaiting_value = false;
        for arg in args {
            if awaiting_value {
                self.set_value(arg);
                awaiting_value = false;
                continue;
            }

            let Some(marker) = arg.strip_prefix('-') else {
                continue;
            };
            let marker = marker.trim_start_matches('-');

            match marker.split_once('=') {
                Some((name, value)) => {
                    if self.is(name) {
                        self.set_value(value);
                    }
                }
                None => {
                    if self.is(marker) {
                        if self.kind() == ArgumentKind::Boolean {
                            self.set_value("true");
                        } else {
                            awaiting_value = true;
                        }
                    }
                }
            }
        }

        log::debug!(
            "Bound '{}' to {:?}",
            self.canonical_name(),
            self.bound_value()
        );
    }

    fn set_value(&mut self, value: &str) {
        if self.is_array() {
            match &mut self.bound {
                BoundValue::Sequence(items) => items.push(value.to_string()),
                _ => self.bound = BoundValue::Sequence(vec![value.to_string()]),
            }
        } else {
            self.bound = BoundValue::Scalar(value.to_string());
        }
    }

    /// The typed value of this declaration.
    ///
    /// Bound input wins; otherwise arrays are empty lists, then the declared
    /// default text is coerced, then the kind's own default applies.
    pub fn value(&self) -> ArgValue {
        let kind = self.kind();
        match &self.bound {
            BoundValue::Scalar(raw) => kind.coerce(raw),
            BoundValue::Sequence(items) => kind.coerce_all(items),
            BoundValue::Unset if self.is_array() => ArgValue::List(Vec::new()),
            BoundValue::Unset => match self.default_text() {
                Some(text) => kind.coerce(text),
                None => kind.default_value(),
            },
        }
    }

    /// A declaration is invalid only when it is required and nothing was bound.
    pub fn is_valid(&self) -> bool {
        !(self.is_required() && self.bound.is_unset())
    }

    /// The message reported for this declaration, or an empty string when valid.
    pub fn error_message(&self) -> String {
        if self.is_valid() {
            String::new()
        } else {
            format!("{} - is required", self.display_names())
        }
    }
}
