use std::fmt;
use std::sync::Arc;

use crate::config::Settings;
use crate::services::moderation::warning_store::WarningStore;

/// Shared data available to all commands and handlers
pub struct Data {
    pub settings: Settings,
    /// Lowercased denylist terms, loaded once at startup
    pub denylist: Vec<String>,
    /// Per-user warning counts for the life of the process.
    /// Counts are global, not partitioned per guild.
    pub warnings: WarningStore,
}

impl Data {
    pub fn new(settings: Settings, denylist: Vec<String>) -> Self {
        Self {
            settings,
            denylist,
            warnings: WarningStore::new(),
        }
    }
}

impl fmt::Debug for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Data")
            .field("denylist_terms", &self.denylist.len())
            .field("tracked_users", &self.warnings.tracked_users())
            .finish_non_exhaustive()
    }
}

pub type Context<'a> = poise::Context<'a, Arc<Data>, crate::bot::error::Error>;
