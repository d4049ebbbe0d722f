use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// CSV file written when no `--output` flag is given.
    #[serde(default)]
    pub csv_path: Option<String>,

    /// Ask for a CSV filename on an interactive terminal when none is set.
    #[serde(default = "default_prompt")]
    pub prompt: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: None,
            prompt: default_prompt(),
        }
    }
}

fn default_prompt() -> bool {
    true
}
