/// Keyword -> answer table for mention queries.
///
/// Lookup is in declaration order and the first matching topic wins, so
/// broader topics belong later in the table.
pub const POLICY_RESPONSES: &[(&str, &str)] = &[
    (
        "rules",
        "Server Rules:\n1. No inappropriate language\n2. Be respectful to others\n3. 3 warnings will result in a ban",
    ),
    (
        "warning",
        "Warning System:\n- Denylisted words = automatic warning\n- 3 warnings = automatic ban\n- Admins can clear warnings",
    ),
    (
        "commands",
        "Available Commands:\n!warnings - Check warning count\n!clearwarnings - Reset warnings (admin only)\n!warn - Warn a user (mod only)\n!ban - Ban a user (admin only)",
    ),
    (
        "help",
        "You can ask me about:\n- rules\n- warning system\n- commands\n- policies",
    ),
    (
        "policies",
        "Chat Policies:\n1. Messages are monitored for disallowed words\n2. Warning system is automated\n3. Moderators can issue manual warnings\n4. Administrators can clear warnings",
    ),
];

/// Reply when no topic matches
pub const FALLBACK_RESPONSE: &str = "Type help to learn what you can ask about!";
