//! Identifiers generated once per project and exposed as template variables.

use uuid::Uuid;

/// Project GUIDs referenced by the IDE and platform project files of the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIds {
    pub solution: String,
    pub game_project: String,
    pub app_android: String,
    pub app_winpc: String,
}

impl GeneratedIds {
    /// Generates a fresh set of random identifiers.
    pub fn generate() -> Self {
        Self {
            solution: new_guid(),
            game_project: new_guid(),
            app_android: new_guid(),
            app_winpc: new_guid(),
        }
    }

    /// Variable name and value pairs merged into the variable table.
    pub fn variables(&self) -> [(&'static str, &str); 4] {
        [
            ("GUID-Solution", self.solution.as_str()),
            ("GUID-GameProject", self.game_project.as_str()),
            ("GUID-AppAndroid", self.app_android.as_str()),
            ("GUID-AppWinPC", self.app_winpc.as_str()),
        ]
    }
}

// Uppercase, hyphenated, no braces
fn new_guid() -> String {
    Uuid::new_v4().hyphenated().to_string().to_uppercase()
}
