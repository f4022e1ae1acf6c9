//! Ruleset capability flags

/// Probability of a critical hit on a strike
pub const CRIT_CHANCE: f32 = 0.1;

/// Damage multiplier applied on a critical hit
pub const CRIT_MULTIPLIER: f32 = 1.5;

/// Which battle mechanics are in play for a session
///
/// A disabled capability drops both its multiplier from the damage formula
/// and its actions/pre-checks from the turn pipeline, so reduced rule
/// variants share one resolution path instead of forking the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ruleset {
    /// Elemental effectiveness lookups
    pub effectiveness: bool,

    /// Random 1.5x critical hits
    pub critical_hits: bool,

    /// Burn chip damage, paralysis skips, and status-inflicting actions
    pub status_effects: bool,

    /// Outgoing-damage multipliers and boost/lower-attack actions
    pub boosts: bool,
}

impl Ruleset {
    /// Everything on
    pub const FULL: Ruleset = Ruleset {
        effectiveness: true,
        critical_hits: true,
        status_effects: true,
        boosts: true,
    };

    /// Effectiveness and criticals only; no status conditions or boosts
    pub const CLASSIC: Ruleset = Ruleset {
        effectiveness: true,
        critical_hits: true,
        status_effects: false,
        boosts: false,
    };

    /// Plain damage trades, nothing else
    pub const BASIC: Ruleset = Ruleset {
        effectiveness: false,
        critical_hits: false,
        status_effects: false,
        boosts: false,
    };
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::FULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full() {
        let rules = Ruleset::default();
        assert_eq!(rules, Ruleset::FULL);
        assert!(rules.effectiveness);
        assert!(rules.critical_hits);
        assert!(rules.status_effects);
        assert!(rules.boosts);
    }

    #[test]
    fn test_basic_disables_everything() {
        let rules = Ruleset::BASIC;
        assert!(!rules.effectiveness);
        assert!(!rules.critical_hits);
        assert!(!rules.status_effects);
        assert!(!rules.boosts);
    }

    #[test]
    fn test_classic_keeps_damage_math_only() {
        let rules = Ruleset::CLASSIC;
        assert!(rules.effectiveness);
        assert!(rules.critical_hits);
        assert!(!rules.status_effects);
        assert!(!rules.boosts);
    }
}
