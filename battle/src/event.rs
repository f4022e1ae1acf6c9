//! Battle events emitted during turn resolution
//!
//! Each event carries structured fields for UI consumption; `Display`
//! renders the narrative log line.

use crate::types::Status;

/// Effectiveness tag derived from the chart multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effectiveness {
    /// Multiplier above 1.0
    Super,
    /// Multiplier below 1.0
    NotVery,
    /// Multiplier of exactly 1.0
    Neutral,
}

impl Effectiveness {
    /// Derive the tag from a chart multiplier
    pub fn from_multiplier(mult: f32) -> Self {
        if mult > 1.0 {
            Effectiveness::Super
        } else if mult < 1.0 {
            Effectiveness::NotVery
        } else {
            Effectiveness::Neutral
        }
    }
}

/// One narrative step of a resolved turn
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// A damaging action landed
    ActionUsed {
        actor: String,
        action: String,
        damage: f32,
        effectiveness: Effectiveness,
        critical: bool,
    },

    /// A heal action restored HP
    Healed {
        actor: String,
        action: String,
        amount: f32,
    },

    /// A boost action raised the actor's damage multiplier
    BoostRaised {
        actor: String,
        action: String,
        amount: f32,
    },

    /// A lower-attack action sapped the target's damage multiplier
    AttackLowered {
        actor: String,
        target: String,
        action: String,
        amount: f32,
    },

    /// A status condition was inflicted on the target
    StatusInflicted {
        actor: String,
        target: String,
        action: String,
        status: Status,
    },

    /// Burn chip damage ticked before the target acted
    BurnDamage { target: String, damage: f32 },

    /// Paralysis cost the target its action
    FullyParalyzed { target: String },

    /// A utility action did nothing under the session's ruleset
    NoEffect { actor: String, action: String },

    /// A combatant dropped to 0 HP
    Defeated { name: String },
}

impl std::fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BattleEvent::ActionUsed {
                actor,
                action,
                damage,
                effectiveness,
                critical,
            } => {
                write!(f, "{actor} used {action}! It dealt {damage} damage!")?;
                match effectiveness {
                    Effectiveness::Super => write!(f, " It's super effective!")?,
                    Effectiveness::NotVery => write!(f, " It's not very effective...")?,
                    Effectiveness::Neutral => {}
                }
                if *critical {
                    write!(f, " A critical hit!")?;
                }
                Ok(())
            }
            BattleEvent::Healed {
                actor,
                action,
                amount,
            } => {
                write!(f, "{actor} used {action} and restored {amount} HP!")
            }
            BattleEvent::BoostRaised {
                actor,
                action,
                amount,
            } => {
                write!(f, "{actor} used {action}! Its attack rose by {amount}!")
            }
            BattleEvent::AttackLowered {
                actor,
                target,
                action,
                amount,
            } => {
                write!(f, "{actor} used {action}! {target}'s attack fell by {amount}!")
            }
            BattleEvent::StatusInflicted {
                actor,
                target,
                action,
                status,
            } => {
                write!(f, "{actor} used {action}! {target} was afflicted with {status}!")
            }
            BattleEvent::BurnDamage { target, damage } => {
                write!(f, "{target} is hurt by its burn! It took {damage} damage!")
            }
            BattleEvent::FullyParalyzed { target } => {
                write!(f, "{target} is paralyzed and can't move!")
            }
            BattleEvent::NoEffect { actor, action } => {
                write!(f, "{actor} used {action}, but nothing happened!")
            }
            BattleEvent::Defeated { name } => {
                write!(f, "{name} is defeated!")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effectiveness_from_multiplier() {
        assert_eq!(Effectiveness::from_multiplier(2.0), Effectiveness::Super);
        assert_eq!(Effectiveness::from_multiplier(1.5), Effectiveness::Super);
        assert_eq!(Effectiveness::from_multiplier(0.5), Effectiveness::NotVery);
        assert_eq!(Effectiveness::from_multiplier(1.0), Effectiveness::Neutral);
    }

    #[test]
    fn test_action_used_display() {
        let event = BattleEvent::ActionUsed {
            actor: "Cindershell".into(),
            action: "Ember Spit".into(),
            damage: 40.0,
            effectiveness: Effectiveness::Super,
            critical: false,
        };
        assert_eq!(
            event.to_string(),
            "Cindershell used Ember Spit! It dealt 40 damage! It's super effective!"
        );
    }

    #[test]
    fn test_action_used_display_critical() {
        let event = BattleEvent::ActionUsed {
            actor: "Voltide".into(),
            action: "Spark".into(),
            damage: 15.0,
            effectiveness: Effectiveness::Neutral,
            critical: true,
        };
        assert_eq!(
            event.to_string(),
            "Voltide used Spark! It dealt 15 damage! A critical hit!"
        );
    }

    #[test]
    fn test_paralyzed_display() {
        let event = BattleEvent::FullyParalyzed {
            target: "Mossback".into(),
        };
        assert_eq!(event.to_string(), "Mossback is paralyzed and can't move!");
    }

    #[test]
    fn test_defeated_display() {
        let event = BattleEvent::Defeated {
            name: "Mossback".into(),
        };
        assert_eq!(event.to_string(), "Mossback is defeated!");
    }
}
