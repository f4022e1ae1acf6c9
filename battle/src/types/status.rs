//! Status conditions

/// Passive damage a burned combatant takes before acting
pub const BURN_DAMAGE: f32 = 2.0;

/// Chance a paralyzed combatant loses its action
pub const PARALYZE_CHANCE: f32 = 0.25;

/// Status conditions a combatant can be afflicted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    /// Takes fixed passive damage before acting
    Burn,
    /// May lose its action entirely
    Paralyze,
}

impl Status {
    /// Parse from a sheet/display name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "burn" | "burned" => Some(Status::Burn),
            "paralyze" | "paralyzed" => Some(Status::Paralyze),
            _ => None,
        }
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Burn => "Burn",
            Status::Paralyze => "Paralyze",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
