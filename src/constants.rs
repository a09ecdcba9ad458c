//! Common constants used throughout projgen.

/// Manifest file name, relative to the template root
pub const MANIFEST_FILE: &str = "Template.txt";

/// Directory holding the template project files, relative to the template root
pub const TEMPLATE_PROJECT_DIR: &str = "Project";

/// Default engine root; the project directory is created inside it
pub const DEFAULT_ENGINE_ROOT: &str = "../..";

/// Default template root
pub const DEFAULT_TEMPLATE_ROOT: &str = "Template";

/// Manifest section run for `SceneKind::None`
pub const SECTION_NONE: &str = "None";

/// Manifest section run for `SceneKind::EmptyScene`
pub const SECTION_EMPTY_SCENE: &str = "EmptyScene";

/// Manifest section run for `SceneKind::UiBaseScene`
pub const SECTION_UI_BASE_SCENE: &str = "UIBaseScene";

/// Target extensions whose filtered output starts with a UTF-8 byte order mark.
/// Compared case-insensitively, without the leading dot.
pub const BOM_EXTENSIONS: [&str; 2] = ["cpp", "h"];

/// UTF-8 byte order mark
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Prefix used for app identifiers when none is given
pub const DEFAULT_APP_ID_PREFIX: &str = "com.yourcompany";
