//! Variable substitution for template content and manifest lines.
//!
//! References have the form `${{NAME}}` or `${{NAME:MODIFIERS}}` and are replaced with
//! values from a `VariableTable`. Filtering is total: malformed input never fails, an
//! unfinished reference is written back as it was read and an unknown name expands to
//! nothing.

use crate::variables::VariableTable;

/// Trait for text filters applied to manifest lines and filtered template files.
pub trait TextFilter {
    /// Returns the filtered text.
    fn filter(&self, text: &str) -> String;
}

/// Filter that returns its input unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityFilter;

impl TextFilter for IdentityFilter {
    fn filter(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Scanner state between two characters.
#[derive(Debug, PartialEq, Eq)]
enum State {
    Text,
    /// Read `$`
    Dollar,
    /// Read `${`
    DollarBrace,
    /// Inside `${{`, capturing the reference
    Reference,
    /// Inside `${{`, the last character read was `}`
    ReferenceBrace,
}

/// Substitution engine over a borrowed `VariableTable`.
#[derive(Debug, Clone, Copy)]
pub struct Substitutor<'a> {
    variables: &'a VariableTable,
}

impl<'a> Substitutor<'a> {
    pub fn new(variables: &'a VariableTable) -> Self {
        Self { variables }
    }

    pub fn variables(&self) -> &'a VariableTable {
        self.variables
    }

    /// Replaces every variable reference in `text`.
    ///
    /// A single left-to-right pass:
    /// - `$$` writes one `$`; a `$` after a pending `${` writes the `${` and starts over.
    /// - Inside a reference only `}}` closes it; a lone `}` becomes part of the name.
    /// - At end of input a pending `$`, `${`, `${{name` or `${{name}` is written verbatim.
    pub fn substitute(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len() * 3 / 2);
        let mut reference = String::new();
        let mut state = State::Text;

        for c in text.chars() {
            state = match (state, c) {
                (State::Text, '$') => State::Dollar,
                (State::Text, c) => {
                    output.push(c);
                    State::Text
                }

                (State::Dollar, '{') => State::DollarBrace,
                (State::Dollar, '$') => {
                    output.push('$');
                    State::Text
                }
                (State::Dollar, c) => {
                    output.push('$');
                    output.push(c);
                    State::Text
                }

                (State::DollarBrace, '{') => State::Reference,
                (State::DollarBrace, '$') => {
                    output.push_str("${");
                    State::Dollar
                }
                (State::DollarBrace, c) => {
                    output.push_str("${");
                    output.push(c);
                    State::Text
                }

                (State::Reference, '}') => State::ReferenceBrace,
                (State::Reference, c) => {
                    reference.push(c);
                    State::Reference
                }

                (State::ReferenceBrace, '}') => {
                    if let Some(value) = self.variables.resolve(&reference) {
                        output.push_str(&value);
                    }
                    reference.clear();
                    State::Text
                }
                (State::ReferenceBrace, c) => {
                    reference.push('}');
                    reference.push(c);
                    State::Reference
                }
            };
        }

        match state {
            State::Text => {}
            State::Dollar => output.push('$'),
            State::DollarBrace => output.push_str("${"),
            State::Reference => {
                output.push_str("${{");
                output.push_str(&reference);
            }
            State::ReferenceBrace => {
                output.push_str("${{");
                output.push_str(&reference);
                output.push('}');
            }
        }

        output
    }
}

impl TextFilter for Substitutor<'_> {
    fn filter(&self, text: &str) -> String {
        self.substitute(text)
    }
}
