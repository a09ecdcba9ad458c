//! Template manifest parsing.
//!
//! The manifest lists what to copy from the template project into the new project:
//!
//! ```text
//! # comment
//! C: Sources/Proj/*                       copy a whole directory
//! C: Sources/Icon.png : Resources/Icon.png  copy one file
//! F: Sources/Proj/CreateGame.cpp          copy one file, substituting variables
//! [UIBaseScene]
//! C: Sources/Proj/_UIBaseScene/* : Sources/Proj
//! []
//! ```
//!
//! Lines before the first section header, or after an empty `[]` header, belong to
//! the main operation set. Every line is passed through a `TextFilter` before it is
//! parsed, so paths may contain variable references.

use crate::error::{Error, Result};
use crate::filter::TextFilter;
use indexmap::IndexMap;
use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};

/// Relative path made of trimmed, non-empty segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSpec {
    segments: Vec<String>,
}

impl PathSpec {
    /// Parses a `/` separated path.
    ///
    /// Blank and `*` segments are dropped. Returns `None` when no segment remains,
    /// since copying the template root itself is not supported.
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<String> = path
            .split('/')
            .map(str::trim)
            .filter(|segment| !segment.is_empty() && *segment != "*")
            .map(str::to_string)
            .collect();

        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Appends the segments to `base`.
    pub fn join_onto<P: AsRef<Path>>(&self, base: P) -> PathBuf {
        self.segments.iter().fold(base.as_ref().to_path_buf(), |path, segment| path.join(segment))
    }
}

impl fmt::Display for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

/// Source and target of one operation, both relative to their roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub source: PathSpec,
    pub target: PathSpec,
}

/// Kind of a manifest operation, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OperationKind {
    CopySubtree,
    CopyFile,
    FilterFile,
}

/// One parsed manifest directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Copy a directory and everything below it
    CopySubtree(Transfer),
    /// Copy a single file as is
    CopyFile(Transfer),
    /// Copy a single file, substituting variables in its content
    FilterFile(Transfer),
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::CopySubtree(_) => OperationKind::CopySubtree,
            Operation::CopyFile(_) => OperationKind::CopyFile,
            Operation::FilterFile(_) => OperationKind::FilterFile,
        }
    }

    pub fn transfer(&self) -> &Transfer {
        match self {
            Operation::CopySubtree(transfer)
            | Operation::CopyFile(transfer)
            | Operation::FilterFile(transfer) => transfer,
        }
    }

    /// Parses the `:` separated, trimmed tokens of a directive line.
    ///
    /// Returns `None` for unknown codes, a missing source, or a source or target that
    /// is not a valid `PathSpec`.
    pub fn from_tokens(tokens: &[&str]) -> Option<Self> {
        let (code, source) = match tokens {
            [code, source, ..] => (*code, *source),
            _ => return None,
        };
        if code != "C" && code != "F" {
            return None;
        }

        let source_spec = PathSpec::parse(source)?;
        let target_spec = match tokens.get(2) {
            Some(target) => PathSpec::parse(target)?,
            None => source_spec.clone(),
        };
        let transfer = Transfer { source: source_spec, target: target_spec };

        Some(match code {
            "C" if source.ends_with("/*") => Operation::CopySubtree(transfer),
            "C" => Operation::CopyFile(transfer),
            _ => Operation::FilterFile(transfer),
        })
    }
}

/// Operations of one manifest section, queued by kind.
///
/// Execution always takes subtree copies first, then file copies, then filtered
/// files, whatever order the manifest declared them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationSet {
    subtree_copies: Vec<Transfer>,
    file_copies: Vec<Transfer>,
    file_filters: Vec<Transfer>,
}

impl OperationSet {
    pub fn push(&mut self, operation: Operation) {
        match operation {
            Operation::CopySubtree(transfer) => self.subtree_copies.push(transfer),
            Operation::CopyFile(transfer) => self.file_copies.push(transfer),
            Operation::FilterFile(transfer) => self.file_filters.push(transfer),
        }
    }

    pub fn subtree_copies(&self) -> &[Transfer] {
        &self.subtree_copies
    }

    pub fn file_copies(&self) -> &[Transfer] {
        &self.file_copies
    }

    pub fn file_filters(&self) -> &[Transfer] {
        &self.file_filters
    }

    /// All operations in execution order.
    pub fn iter(&self) -> impl Iterator<Item = (OperationKind, &Transfer)> {
        let subtrees = self.subtree_copies.iter().map(|t| (OperationKind::CopySubtree, t));
        let copies = self.file_copies.iter().map(|t| (OperationKind::CopyFile, t));
        let filters = self.file_filters.iter().map(|t| (OperationKind::FilterFile, t));
        subtrees.chain(copies).chain(filters)
    }

    pub fn len(&self) -> usize {
        self.subtree_copies.len() + self.file_copies.len() + self.file_filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A parsed manifest: the main operation set plus named, conditional sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    main: OperationSet,
    sections: IndexMap<String, OperationSet>,
}

impl Manifest {
    /// Reads and parses the manifest at `path`.
    ///
    /// # Errors
    /// * `Error::ManifestError` if the file cannot be opened or is not valid UTF-8
    pub fn read_file<P: AsRef<Path>>(path: P, filter: &dyn TextFilter) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading template manifest {}", path.display());
        let content = std::fs::read_to_string(path)
            .map_err(|source| Error::ManifestError { path: path.to_path_buf(), source })?;

        Ok(Self::parse(&content, filter))
    }

    /// Parses manifest text. Lines that cannot be understood are skipped.
    pub fn parse(content: &str, filter: &dyn TextFilter) -> Self {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut manifest = Manifest::default();
        let mut current: Option<String> = None;

        for raw_line in content.lines() {
            if raw_line.trim().is_empty() || raw_line.starts_with('#') {
                continue;
            }

            let line = filter.filter(raw_line);
            let tokens: Vec<&str> = line.trim().split(':').map(str::trim).collect();
            let Some(first) = tokens.first() else {
                continue;
            };

            if first.starts_with('[') {
                match extract_section_name(first) {
                    Some(name) => {
                        let name = name.trim();
                        debug!("Manifest section: '{name}'");
                        current = if name.is_empty() {
                            None
                        } else {
                            manifest.sections.entry(name.to_string()).or_default();
                            Some(name.to_string())
                        };
                    }
                    None => debug!("Ignoring malformed section header: {}", line.trim()),
                }
                continue;
            }

            match Operation::from_tokens(&tokens) {
                Some(operation) => {
                    let set = match &current {
                        Some(name) => manifest.sections.entry(name.clone()).or_default(),
                        None => &mut manifest.main,
                    };
                    set.push(operation);
                }
                None => debug!("Ignoring manifest line: {}", line.trim()),
            }
        }

        manifest
    }

    pub fn main(&self) -> &OperationSet {
        &self.main
    }

    /// Returns the named set. Names are case-sensitive.
    pub fn section(&self, name: &str) -> Option<&OperationSet> {
        self.sections.get(name)
    }

    /// Section names in the order they first appear.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

/// Extracts the name of a section header token such as `[Name]`.
///
/// Brackets nest: `[[Name]]` yields `[Name]`. Characters before the first `[` and
/// after the closing `]` are ignored. Returns `None` when the brackets never balance.
pub fn extract_section_name(token: &str) -> Option<String> {
    let mut depth = 0usize;
    let mut name = String::with_capacity(token.len());

    for c in token.chars() {
        match c {
            '[' => {
                if depth > 0 {
                    name.push(c);
                }
                depth += 1;
            }
            ']' if depth == 1 => return Some(name),
            ']' if depth > 1 => {
                depth -= 1;
                name.push(c);
            }
            _ if depth > 0 => name.push(c),
            _ => {}
        }
    }

    None
}
