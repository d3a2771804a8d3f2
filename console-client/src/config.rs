use serde::{Deserialize, Serialize};

use tictactoe_game::{BotSettings, Difficulty};

/// Optional YAML config for the console client. Anything not set falls
/// back to the defaults, and CLI flags win over the file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub difficulty: Option<Difficulty>,
    pub random_first_player: bool,
    pub bot: BotSettings,
}

impl ClientConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.bot.validate()
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let config: ClientConfig = serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &str) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path, e))?;
        Self::from_yaml(&content)
    }
}
