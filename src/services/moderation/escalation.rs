use crate::constants::policy::WARNING_THRESHOLD;

/// Outcome of evaluating a user's updated warning count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// At or below the threshold; carries the count for the notice text
    Warn(u32),
    Ban,
}

/// Decide what an updated count calls for.
///
/// Pure decision function: the enforcement pipeline executes the side
/// effects. Counts keep incrementing past the threshold, so a user who is
/// already gone still evaluates to `Ban` on later matches; the enforcer's
/// ban attempt then fails and is logged.
pub fn evaluate(count: u32) -> Verdict {
    if count > WARNING_THRESHOLD {
        Verdict::Ban
    } else {
        Verdict::Warn(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warns_up_to_the_threshold() {
        assert_eq!(evaluate(1), Verdict::Warn(1));
        assert_eq!(evaluate(2), Verdict::Warn(2));
        assert_eq!(evaluate(3), Verdict::Warn(3));
    }

    #[test]
    fn bans_strictly_above_the_threshold() {
        assert_eq!(evaluate(4), Verdict::Ban);
        assert_eq!(evaluate(5), Verdict::Ban);
        assert_eq!(evaluate(100), Verdict::Ban);
    }
}
