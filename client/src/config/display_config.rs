use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub dark_mode: bool,
    pub sound_enabled: bool,
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            sound_enabled: true,
        }
    }
}
