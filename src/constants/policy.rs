/// Warnings a user may accumulate before the next infraction becomes a ban
pub const WARNING_THRESHOLD: u32 = 3;

/// Recent-history entries inspected when checking for an existing bot response
pub const RESPONSE_SCAN_WINDOW: u8 = 20;

/// Per-channel history depth for the reconnect backfill scan
pub const RECONNECT_SCAN_LIMIT: usize = 100;

/// Per-channel history depth when joining a new guild
pub const GUILD_JOIN_SCAN_LIMIT: usize = 1000;

/// Largest page the platform serves for a single history fetch
pub const HISTORY_PAGE_LIMIT: usize = 100;

/// Prefix for text commands
pub const COMMAND_PREFIX: &str = "!";

/// Audit-log reason attached to automatic threshold bans
pub const BAN_REASON: &str = "Exceeded maximum warnings (3)";

/// Denylist file used when DENYLIST_PATH is not set
pub const DEFAULT_DENYLIST_PATH: &str = "denylist.json";
