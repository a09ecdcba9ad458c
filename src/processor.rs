//! Execution of manifest operation sets against the filesystem.
//!
//! Item failures never abort a run: a missing source or an I/O error on one file is
//! logged as a warning, recorded in the `ProcessReport` and the processor moves on.

use log::{debug, warn};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::{
    constants::{BOM_EXTENSIONS, UTF8_BOM},
    error::{Error, Result},
    filter::TextFilter,
    manifest::{OperationKind, OperationSet},
};

/// Outcome of running one or more operation sets.
#[derive(Debug, Default)]
pub struct ProcessReport {
    /// Files copied or written
    pub written: usize,
    /// Item failures, in the order they happened
    pub skipped: Vec<Error>,
}

impl ProcessReport {
    pub fn merge(&mut self, other: ProcessReport) {
        self.written += other.written;
        self.skipped.extend(other.skipped);
    }

    fn record(&mut self, result: Result<()>) {
        match result {
            Ok(()) => self.written += 1,
            Err(e) => self.skip(e),
        }
    }

    fn skip(&mut self, error: Error) {
        warn!("{error}");
        self.skipped.push(error);
    }
}

/// Whether filtered output written to `path` starts with a byte order mark.
pub fn needs_bom<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| BOM_EXTENSIONS.iter().any(|bom_ext| bom_ext.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

fn create_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) => fs::create_dir_all(parent),
        None => Ok(()),
    }
}

/// Runs operation sets from a template project directory into a project directory.
pub struct Processor<'a> {
    filter: &'a dyn TextFilter,
    template_root: &'a Path,
    output_root: &'a Path,
    overwrite: bool,
}

impl<'a> Processor<'a> {
    /// Creates a processor.
    ///
    /// # Arguments
    /// * `filter` - Applied to the content of filtered files
    /// * `template_root` - Root the operation sources are relative to
    /// * `output_root` - Root the operation targets are relative to
    /// * `overwrite` - Whether copies may replace existing files; filtered files are
    ///   always written
    pub fn new(
        filter: &'a dyn TextFilter,
        template_root: &'a Path,
        output_root: &'a Path,
        overwrite: bool,
    ) -> Self {
        Self { filter, template_root, output_root, overwrite }
    }

    /// Runs every operation of `set`: subtree copies, then file copies, then
    /// filtered files.
    pub fn run(&self, set: &OperationSet) -> ProcessReport {
        let mut report = ProcessReport::default();

        for (kind, transfer) in set.iter() {
            let source = transfer.source.join_onto(self.template_root);
            let target = transfer.target.join_onto(self.output_root);
            debug!("{kind:?}: {} -> {}", transfer.source, transfer.target);

            match kind {
                OperationKind::CopySubtree => self.copy_subtree(&source, &target, &mut report),
                OperationKind::CopyFile => report.record(self.copy_file(&source, &target)),
                OperationKind::FilterFile => report.record(self.filter_file(&source, &target)),
            }
        }

        report
    }

    /// Mirrors the directory `source` into `target`, depth first.
    fn copy_subtree(&self, source: &Path, target: &Path, report: &mut ProcessReport) {
        if !source.is_dir() {
            report.skip(Error::SourceNotFound { path: source.to_path_buf() });
            return;
        }

        for entry in WalkDir::new(source).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path =
                        e.path().map(Path::to_path_buf).unwrap_or_else(|| source.to_path_buf());
                    report.skip(Error::ReadError { path, source: e.into() });
                    continue;
                }
            };

            let relative = match entry.path().strip_prefix(source) {
                Ok(relative) => relative,
                Err(_) => continue,
            };
            let destination = target.join(relative);

            if entry.file_type().is_dir() {
                if let Err(e) = fs::create_dir_all(&destination) {
                    report.skip(Error::WriteError { path: destination, source: e });
                }
            } else {
                report.record(self.copy_bytes(entry.path(), &destination));
            }
        }
    }

    fn copy_file(&self, source: &Path, target: &Path) -> Result<()> {
        if !source.is_file() {
            return Err(Error::SourceNotFound { path: source.to_path_buf() });
        }
        self.copy_bytes(source, target)
    }

    fn copy_bytes(&self, source: &Path, target: &Path) -> Result<()> {
        if !self.overwrite && target.exists() {
            return Err(Error::TargetExists { path: target.to_path_buf() });
        }

        let copy_error = |e| Error::CopyError {
            from: source.to_path_buf(),
            to: target.to_path_buf(),
            source: e,
        };
        create_parent_dir(target).map_err(copy_error)?;
        fs::copy(source, target).map(|_| ()).map_err(copy_error)?;

        debug!("Copied {}", target.display());
        Ok(())
    }

    fn filter_file(&self, source: &Path, target: &Path) -> Result<()> {
        if !source.is_file() {
            return Err(Error::SourceNotFound { path: source.to_path_buf() });
        }

        let content = read_text(source)
            .map_err(|e| Error::ReadError { path: source.to_path_buf(), source: e })?;
        let filtered = self.filter.filter(&content);

        let mut bytes = Vec::with_capacity(filtered.len() + UTF8_BOM.len());
        if needs_bom(target) {
            bytes.extend_from_slice(UTF8_BOM);
        }
        bytes.extend_from_slice(filtered.as_bytes());

        let write_error = |e| Error::WriteError { path: target.to_path_buf(), source: e };
        create_parent_dir(target).map_err(write_error)?;
        fs::write(target, bytes).map_err(write_error)?;

        debug!("Wrote {}", target.display());
        Ok(())
    }
}

/// Reads a UTF-8 text file, dropping a leading byte order mark.
fn read_text(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
    String::from_utf8(bytes.to_vec())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
