//! projgen's main application entry point.
//! Parses the command line, validates the options and creates the project.

use projgen::{
    cli::{get_args, usage, Args},
    creator::create_project,
    error::{default_error_handler, Result},
    logger::init_logger,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if args.help {
        print!("{}", usage());
        return;
    }

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Reports ignored command-line input
/// 2. Merges the options file with the command line and validates the result
/// 3. Creates the project and summarizes skipped items
fn run(args: Args) -> Result<()> {
    args.warn_ignored();

    let (options, environment) = match args.resolve_draft().and_then(|d| d.finalize()) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprint!("{}", usage());
            return Err(e);
        }
    };

    println!("Creating project ...");
    let report = create_project(&options, &environment, args.force)?;

    if !report.skipped.is_empty() {
        println!("{} template item(s) skipped, see warnings above.", report.skipped.len());
    }
    println!(
        "Created a new game project [{}] in {}.",
        options.title,
        environment.engine_root.join(&options.project_dir).display()
    );
    Ok(())
}
