use std::env;

use crate::constants::policy::DEFAULT_DENYLIST_PATH;

#[derive(Debug, Clone)]
pub struct Settings {
    pub discord_token: String,
    /// Path to the JSON denylist file
    pub denylist_path: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, String> {
        let discord_token = env::var("DISCORD_TOKEN")
            .map_err(|_| "DISCORD_TOKEN environment variable not set")?;

        let denylist_path = env::var("DENYLIST_PATH")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_DENYLIST_PATH.to_string());

        Ok(Self {
            discord_token,
            denylist_path,
        })
    }
}
