//! Command-line interface implementation for projgen.
//! Arguments are split with the generic `ArgsTokenizer`, so `-t Title`, `--title=Title`
//! and, on Windows, `/t:Title` are all accepted. Elsewhere `/` starts an absolute path,
//! so it is not a flag prefix.

use crate::cmdline::{ArgsTokenizer, OptionEntry};
use crate::config::load_options_file;
use crate::error::Result;
use crate::options::OptionsDraft;
use log::warn;

/// Options that take a value, by their accepted names.
const APP_ID_OPTIONS: [&str; 3] = ["appid", "app-id", "a"];
const TITLE_OPTIONS: [&str; 2] = ["title", "t"];
const PROJECT_DIR_OPTIONS: [&str; 3] = ["project-dir", "dir", "p"];
const ORIENTATION_OPTIONS: [&str; 2] = ["orientation", "o"];
const SCENE_OPTIONS: [&str; 2] = ["scene", "s"];
const ENGINE_OPTIONS: [&str; 3] = ["engine", "engine-path", "e"];
const TEMPLATE_OPTIONS: [&str; 3] = ["template", "template-path", "d"];
const CONFIG_OPTIONS: [&str; 1] = ["config"];

const HELP_FLAGS: [&str; 2] = ["help", "h"];
const VERBOSE_FLAGS: [&str; 2] = ["verbose", "v"];
const FORCE_FLAGS: [&str; 2] = ["force", "f"];

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    /// Option values given on the command line
    pub draft: OptionsDraft,
    /// Options file to read before applying `draft`
    pub config: Option<String>,
    /// Show usage and exit
    pub help: bool,
    /// Enable verbose logging output
    pub verbose: bool,
    /// Let copies replace files that already exist in the project
    pub force: bool,
    /// Option names that were not recognized
    pub unknown: Vec<String>,
    /// Positional arguments after the program name
    pub extra: Vec<String>,
}

impl Args {
    /// Logs what was ignored on the command line.
    pub fn warn_ignored(&self) {
        for name in &self.unknown {
            warn!("Not a valid option \"{name}\" specified (ignored).");
        }
        for arg in &self.extra {
            warn!("Unexpected argument \"{arg}\" (ignored).");
        }
    }

    /// Merges the options file, if any, with the command line values.
    pub fn resolve_draft(&self) -> Result<OptionsDraft> {
        let mut draft = match &self.config {
            Some(path) => load_options_file(path)?,
            None => OptionsDraft::default(),
        };
        draft.merge(self.draft.clone());
        Ok(draft)
    }
}

/// Builds the tokenizer used for the projgen command line.
pub fn tokenizer() -> ArgsTokenizer {
    let tokenizer = ArgsTokenizer::new(
        APP_ID_OPTIONS
            .iter()
            .chain(&TITLE_OPTIONS)
            .chain(&PROJECT_DIR_OPTIONS)
            .chain(&ORIENTATION_OPTIONS)
            .chain(&SCENE_OPTIONS)
            .chain(&ENGINE_OPTIONS)
            .chain(&TEMPLATE_OPTIONS)
            .chain(&CONFIG_OPTIONS),
    );
    if cfg!(windows) {
        tokenizer
    } else {
        tokenizer.with_prefixes(["-", "--"])
    }
}

/// Parses command line arguments, not including the program path.
pub fn parse_args<I, S>(args: I) -> Args
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parsed = tokenizer().parse(args);
    let mut result = Args::default();

    let mut positionals = parsed.positionals.into_iter();
    result.draft.program_name = positionals.next().map(|name| name.trim().to_string());
    result.extra = positionals.collect();

    for OptionEntry { name, value } in parsed.options {
        let name = name.as_str();
        let value = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if HELP_FLAGS.contains(&name) {
            result.help = true;
        } else if VERBOSE_FLAGS.contains(&name) {
            result.verbose = true;
        } else if FORCE_FLAGS.contains(&name) {
            result.force = true;
        } else {
            let slot = if APP_ID_OPTIONS.contains(&name) {
                &mut result.draft.app_identifier
            } else if TITLE_OPTIONS.contains(&name) {
                &mut result.draft.title
            } else if PROJECT_DIR_OPTIONS.contains(&name) {
                &mut result.draft.project_dir
            } else if ORIENTATION_OPTIONS.contains(&name) {
                &mut result.draft.orientation
            } else if SCENE_OPTIONS.contains(&name) {
                &mut result.draft.scene
            } else if ENGINE_OPTIONS.contains(&name) {
                &mut result.draft.engine_root
            } else if TEMPLATE_OPTIONS.contains(&name) {
                &mut result.draft.template_root
            } else if CONFIG_OPTIONS.contains(&name) {
                &mut result.config
            } else {
                result.unknown.push(name.to_string());
                continue;
            };
            // A missing value leaves the earlier one in place
            if value.is_some() {
                *slot = value;
            }
        }
    }

    result
}

/// Parses the arguments of the current process.
pub fn get_args() -> Args {
    parse_args(std::env::args().skip(1))
}

pub fn usage() -> String {
    format!(
        r#"Usage: {name} [-h] ProgramName [-a appid] [-t title] [-p name] [-o orient] [-s scene] [-e path] [-d path]
Create a new game project from a project template.

  -h, --help                    show usages
  -v, --verbose                 enable verbose logging output
  -f, --force                   let copied files replace existing project files

  -a, --appid           appid   set app identifier of iOS/Android platform, e.g. com.example.MyGame
                                (com.yourcompany.{{ProgramName}} when not specified)
  -t, --title           title   set the title of the game
                                ({{ProgramName}} when not specified)
  -p, --project-dir     name    set the game project directory name
                                ({{ProgramName}} when not specified)
  -o, --orientation     orient  set orientation of the game app (kLandscape, kPortrait)
                                (default orientation is kLandscape)
  -s, --scene           scene   set game scene setting of generated source code
                                (kNone, kEmptyScene, kUIBaseScene; default is kEmptyScene)
                                  * kNone:        game application code only, no scene
                                  * kEmptyScene:  an empty game scene
                                  * kUIBaseScene: a game scene with UI functionality
  -e, --engine-path     path    set engine root directory; the project is created there
                                (default path is ../..)
  -d, --template-path   path    set project template data path
                                (default path is ./Template)
      --config          file    read options from a JSON or YAML file
"#,
        name = env!("CARGO_PKG_NAME")
    )
}
