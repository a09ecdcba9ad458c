//! Project creation options and the environment a project is created in.
//! Raw values from the command line or an options file are collected into an
//! `OptionsDraft`, which is defaulted and validated into the final records.

use crate::constants::{
    DEFAULT_APP_ID_PREFIX, DEFAULT_ENGINE_ROOT, DEFAULT_TEMPLATE_ROOT, SECTION_EMPTY_SCENE,
    SECTION_NONE, SECTION_UI_BASE_SCENE,
};
use crate::error::{Error, Result};
use log::{error, warn};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static PROGRAM_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][0-9A-Za-z]*$").unwrap());

static APP_IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][0-9A-Za-z]*)(\.([A-Za-z][0-9A-Za-z]*))+$").unwrap()
});

/// Orientation of the generated app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
}

impl Orientation {
    /// Parses a user supplied orientation, accepting aliases and prefixes of
    /// `horizontal`, `vertical`, `landscape` and `portrait`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        match value.as_str() {
            "klandscape" | "landscape" | "l" | "horizontal" | "h" => {
                return Some(Orientation::Landscape)
            }
            "kportrait" | "portrait" | "p" | "vertical" | "v" => {
                return Some(Orientation::Portrait)
            }
            _ => {}
        }

        [
            ("horizontal", Orientation::Landscape),
            ("vertical", Orientation::Portrait),
            ("landscape", Orientation::Landscape),
            ("portrait", Orientation::Portrait),
        ]
        .into_iter()
        .find(|(word, _)| word.starts_with(value.as_str()))
        .map(|(_, orientation)| orientation)
    }
}

/// Initial scene structure of the generated game code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneKind {
    /// Only the game object, no scene structure
    None,
    /// An empty game scene
    #[default]
    EmptyScene,
    /// A game scene with UI support
    UiBaseScene,
}

impl SceneKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "knone" | "none" | "no" | "null" | "n" | "gameonly" | "game-only" | "game" | "g" => {
                Some(SceneKind::None)
            }
            "kemptyscene" | "emptyscene" | "empty" | "sceneonly" | "scene-only" | "scene"
            | "s" => Some(SceneKind::EmptyScene),
            "kuibasescene" | "uibasescene" | "ui-base" | "uibase" | "ui-scene" | "uiscene"
            | "ui" | "u" => Some(SceneKind::UiBaseScene),
            _ => None,
        }
    }

    /// Name of the manifest section generated alongside the main section.
    pub fn section_name(self) -> &'static str {
        match self {
            SceneKind::None => SECTION_NONE,
            SceneKind::EmptyScene => SECTION_EMPTY_SCENE,
            SceneKind::UiBaseScene => SECTION_UI_BASE_SCENE,
        }
    }
}

/// Validated options of one project creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationOptions {
    /// Program name; alphanumeric, starting with a letter
    pub program_name: String,
    /// Directory created under the engine root
    pub project_dir: String,
    /// Title shown as the app caption
    pub title: String,
    /// iOS/Android app identifier, e.g. `com.yourcompany.MyGame`
    pub app_identifier: String,
    pub orientation: Orientation,
    pub scene: SceneKind,
}

impl CreationOptions {
    /// Creates options for `program_name`, filling every other value with its default.
    pub fn new<S: Into<String>>(program_name: S) -> Self {
        let program_name = program_name.into();
        Self {
            project_dir: program_name.clone(),
            title: program_name.clone(),
            app_identifier: default_app_identifier(&program_name),
            program_name,
            orientation: Orientation::default(),
            scene: SceneKind::default(),
        }
    }
}

/// Filesystem locations a project is created from and into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSettings {
    /// The project directory is created inside this directory
    pub engine_root: PathBuf,
    /// Holds the manifest and the template project files
    pub template_root: PathBuf,
}

impl EnvironmentSettings {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(engine_root: P, template_root: Q) -> Self {
        Self { engine_root: engine_root.into(), template_root: template_root.into() }
    }
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        Self::new(DEFAULT_ENGINE_ROOT, DEFAULT_TEMPLATE_ROOT)
    }
}

/// Unvalidated option values, as read from an options file or the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct OptionsDraft {
    pub program_name: Option<String>,
    #[serde(alias = "project_directory")]
    pub project_dir: Option<String>,
    pub title: Option<String>,
    #[serde(alias = "appid", alias = "app_id")]
    pub app_identifier: Option<String>,
    pub orientation: Option<String>,
    pub scene: Option<String>,
    #[serde(alias = "engine_path")]
    pub engine_root: Option<String>,
    #[serde(alias = "template_path")]
    pub template_root: Option<String>,
}

impl OptionsDraft {
    /// Overlays every value set in `other` on top of this draft.
    ///
    /// An orientation or scene value in `other` that does not parse is logged and
    /// leaves the current value in place.
    pub fn merge(&mut self, other: OptionsDraft) {
        fn overlay(slot: &mut Option<String>, value: Option<String>) {
            if value.is_some() {
                *slot = value;
            }
        }
        fn overlay_valid(
            slot: &mut Option<String>,
            value: Option<String>,
            what: &str,
            is_valid: fn(&str) -> bool,
        ) {
            match value {
                Some(value) if slot.is_some() && !is_valid(&value) => {
                    warn!("Not a valid {what} value \"{value}\" (ignored).");
                }
                value => overlay(slot, value),
            }
        }
        overlay(&mut self.program_name, other.program_name);
        overlay(&mut self.project_dir, other.project_dir);
        overlay(&mut self.title, other.title);
        overlay(&mut self.app_identifier, other.app_identifier);
        overlay_valid(&mut self.orientation, other.orientation, "orientation", |v| {
            Orientation::parse(v).is_some()
        });
        overlay_valid(&mut self.scene, other.scene, "scene", |v| SceneKind::parse(v).is_some());
        overlay(&mut self.engine_root, other.engine_root);
        overlay(&mut self.template_root, other.template_root);
    }

    /// Applies defaults and validates the draft.
    ///
    /// Every problem found is logged; the returned `ValidationError` lists them all.
    pub fn finalize(self) -> Result<(CreationOptions, EnvironmentSettings)> {
        let mut problems = Vec::new();

        let program_name = non_blank(self.program_name).unwrap_or_default();
        if program_name.is_empty() {
            problems.push("No program name specified".to_string());
        } else if !is_valid_program_name(&program_name) {
            problems.push(format!("Invalid program name: \"{program_name}\""));
        }

        let project_dir = non_blank(self.project_dir).unwrap_or_else(|| program_name.clone());
        let title = non_blank(self.title).unwrap_or_else(|| program_name.clone());
        if title.is_empty() {
            problems.push("No title specified".to_string());
        }

        let app_identifier = non_blank(self.app_identifier)
            .or_else(|| (!program_name.is_empty()).then(|| default_app_identifier(&program_name)))
            .unwrap_or_default();
        if app_identifier.is_empty() {
            problems.push("No app identifier specified".to_string());
        } else if !is_valid_app_identifier(&app_identifier) {
            problems.push(format!("Invalid app identifier: \"{app_identifier}\""));
        }

        let orientation = match non_blank(self.orientation) {
            Some(value) => Orientation::parse(&value).unwrap_or_else(|| {
                warn!("Not a valid orientation value \"{value}\" (ignored).");
                Orientation::default()
            }),
            None => Orientation::default(),
        };
        let scene = match non_blank(self.scene) {
            Some(value) => SceneKind::parse(&value).unwrap_or_else(|| {
                warn!("Not a valid scene value \"{value}\" (ignored).");
                SceneKind::default()
            }),
            None => SceneKind::default(),
        };

        let engine_root = non_blank(self.engine_root)
            .unwrap_or_else(|| DEFAULT_ENGINE_ROOT.to_string());
        let engine_root = existing_dir(&engine_root, "Engine root directory", &mut problems);
        let template_root = non_blank(self.template_root)
            .unwrap_or_else(|| DEFAULT_TEMPLATE_ROOT.to_string());
        let template_root = existing_dir(&template_root, "Template data", &mut problems);

        if !problems.is_empty() {
            for problem in &problems {
                error!("{problem}");
            }
            return Err(Error::ValidationError(problems.join("; ")));
        }

        Ok((
            CreationOptions { program_name, project_dir, title, app_identifier, orientation, scene },
            EnvironmentSettings { engine_root, template_root },
        ))
    }
}

pub fn is_valid_program_name(name: &str) -> bool {
    PROGRAM_NAME_RE.is_match(name)
}

pub fn is_valid_app_identifier(identifier: &str) -> bool {
    APP_IDENTIFIER_RE.is_match(identifier)
}

fn default_app_identifier(program_name: &str) -> String {
    format!("{DEFAULT_APP_ID_PREFIX}.{program_name}")
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn existing_dir(raw: &str, what: &str, problems: &mut Vec<String>) -> PathBuf {
    let path = std::path::absolute(Path::new(raw)).unwrap_or_else(|_| PathBuf::from(raw));
    if !path.is_dir() {
        problems.push(format!("{what} NOT exists: {}", path.display()));
    }
    path
}
