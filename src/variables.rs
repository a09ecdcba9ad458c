//! Build-time variables substituted into template content.
//!
//! A `VariableTable` is assembled once per run with a `VariableTableBuilder` and is
//! read-only afterwards. Names are case-insensitive: they are stored and looked up in
//! uppercase.

use crate::ids::GeneratedIds;
use crate::options::{CreationOptions, Orientation};
use std::collections::HashMap;

/// Name of the builtin variable that expands to the substitution opener itself,
/// so `${{${{}}` writes a literal `${{`.
pub const OPENER_VARIABLE: &str = "${{";

/// Case transform selected by a modifier letter in a substitution token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseTransform {
    /// `U`: uppercase the value
    Upper,
    /// `L`: lowercase the value
    Lower,
}

/// Transforms in application order. Each one present in the modifiers is applied to
/// the output of the previous, so `L` wins over `U` when both are given.
pub const CASE_TRANSFORMS: [CaseTransform; 2] = [CaseTransform::Upper, CaseTransform::Lower];

impl CaseTransform {
    pub fn marker(self) -> char {
        match self {
            CaseTransform::Upper => 'U',
            CaseTransform::Lower => 'L',
        }
    }

    pub fn apply(self, value: &str) -> String {
        match self {
            CaseTransform::Upper => value.to_uppercase(),
            CaseTransform::Lower => value.to_lowercase(),
        }
    }
}

/// Immutable mapping from canonical variable name to value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableTable {
    values: HashMap<String, String>,
}

impl Default for VariableTable {
    /// A table holding only the builtin opener variable.
    fn default() -> Self {
        VariableTable::builder().build()
    }
}

impl VariableTable {
    pub fn builder() -> VariableTableBuilder {
        VariableTableBuilder::default()
    }

    /// Builds the table of a project generation run from its options and identifiers.
    pub fn for_project(options: &CreationOptions, ids: &GeneratedIds) -> Self {
        let mut builder = Self::builder()
            .set("ProgramName", &options.program_name)
            .set("ProgramName-Lower", options.program_name.to_lowercase())
            .set("ProgramName-Upper", options.program_name.to_uppercase())
            .set("GameTitle", &options.title)
            .set("AppIdentifier", &options.app_identifier);

        builder = match options.orientation {
            Orientation::Landscape => builder
                .set("Orientation-IsLandscapeCppBool", "true")
                .set("Orientation-Android", "userLandscape")
                .set(
                    "Orientation-iOS",
                    "\t\t<string>UIInterfaceOrientationLandscapeLeft</string>\r\n\
                     \t\t<string>UIInterfaceOrientationLandscapeRight</string>",
                )
                .set("Resolution-WinPC", "\t\tscreenWidth = 1280;\r\n\t\tscreenHeight = 720;"),
            Orientation::Portrait => builder
                .set("Orientation-IsLandscapeCppBool", "false")
                .set("Orientation-Android", "userPortrait")
                .set(
                    "Orientation-iOS",
                    "\t\t<string>UIInterfaceOrientationPortrait</string>\r\n\
                     \t\t<string>UIInterfaceOrientationPortraitUpsideDown</string>",
                )
                .set("Resolution-WinPC", "\t\tscreenWidth = 540;\r\n\t\tscreenHeight = 960;"),
        };

        for (name, value) in ids.variables() {
            builder = builder.set(name, value);
        }
        builder.build()
    }

    /// Returns the value of `name`, ignoring case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(&name.to_uppercase()).map(String::as_str)
    }

    /// Resolves the inside of a substitution token, `NAME` or `NAME:MODIFIERS`.
    ///
    /// The name is everything before the first `:`. Modifier letters are
    /// case-sensitive; see `CASE_TRANSFORMS` for their order.
    pub fn resolve(&self, access: &str) -> Option<String> {
        let (name, modifiers) = match access.split_once(':') {
            Some((name, modifiers)) => (name, modifiers),
            None => (access, ""),
        };
        let value = self.get(name)?;

        Some(
            CASE_TRANSFORMS
                .iter()
                .filter(|transform| modifiers.contains(transform.marker()))
                .fold(value.to_string(), |value, transform| transform.apply(&value)),
        )
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Collects variables before freezing them into a `VariableTable`.
#[derive(Debug, Clone)]
pub struct VariableTableBuilder {
    values: HashMap<String, String>,
}

impl Default for VariableTableBuilder {
    fn default() -> Self {
        let mut values = HashMap::new();
        values.insert(OPENER_VARIABLE.to_string(), OPENER_VARIABLE.to_string());
        Self { values }
    }
}

impl VariableTableBuilder {
    /// Sets `name` to `value`, replacing an earlier value of the same name.
    pub fn set<N: AsRef<str>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.values.insert(name.as_ref().to_uppercase(), value.into());
        self
    }

    pub fn build(self) -> VariableTable {
        VariableTable { values: self.values }
    }
}

impl<N: AsRef<str>, V: Into<String>> FromIterator<(N, V)> for VariableTable {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(VariableTable::builder(), |builder, (name, value)| builder.set(name, value))
            .build()
    }
}
