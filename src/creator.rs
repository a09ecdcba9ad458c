//! Project creation: builds the variables, reads the manifest and runs its
//! operation sets into `<engine root>/<project dir>`.

use log::{debug, error, info};
use std::fs;

use crate::{
    constants::{MANIFEST_FILE, TEMPLATE_PROJECT_DIR},
    error::{Error, Result},
    filter::Substitutor,
    ids::GeneratedIds,
    manifest::Manifest,
    options::{CreationOptions, EnvironmentSettings},
    processor::{ProcessReport, Processor},
    variables::VariableTable,
};

/// Creates a project with freshly generated identifiers.
///
/// # Errors
/// * `Error::ManifestError` if the manifest cannot be read
/// * `Error::ProjectRootError` if the project directory cannot be created
///
/// Failures on individual files do not fail the run; they are listed in the
/// returned report.
pub fn create_project(
    options: &CreationOptions,
    environment: &EnvironmentSettings,
    overwrite: bool,
) -> Result<ProcessReport> {
    create_project_with_ids(options, environment, &GeneratedIds::generate(), overwrite)
}

/// Creates a project using the given identifiers.
pub fn create_project_with_ids(
    options: &CreationOptions,
    environment: &EnvironmentSettings,
    ids: &GeneratedIds,
    overwrite: bool,
) -> Result<ProcessReport> {
    let variables = VariableTable::for_project(options, ids);
    let substitutor = Substitutor::new(&variables);

    let manifest_path = environment.template_root.join(MANIFEST_FILE);
    let manifest = Manifest::read_file(&manifest_path, &substitutor).inspect_err(|_| {
        error!("Cannot read template index data.");
    })?;

    let project_root = environment.engine_root.join(&options.project_dir);
    fs::create_dir_all(&project_root).map_err(|source| {
        error!("Cannot create project directory.");
        Error::ProjectRootError { path: project_root.clone(), source }
    })?;

    let template_project = environment.template_root.join(TEMPLATE_PROJECT_DIR);
    if !template_project.is_dir() {
        error!("Template project data not exists: {}", template_project.display());
    }

    let processor = Processor::new(&substitutor, &template_project, &project_root, overwrite);

    info!("Creating project in {}", project_root.display());
    let mut report = processor.run(manifest.main());

    let section = options.scene.section_name();
    match manifest.section(section) {
        Some(set) => {
            debug!("Running manifest section '{section}'");
            report.merge(processor.run(set));
        }
        None => debug!("Manifest has no section '{section}'"),
    }

    Ok(report)
}
