//! Actions: direct-damage strikes and status/utility effects

use super::element::Element;
use super::status::Status;

/// A usable move belonging to a combatant
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    /// Display name (e.g., "Ember Spit")
    pub name: String,

    /// Element used for the effectiveness lookup
    pub element: Element,

    /// What the action does when it lands
    pub kind: ActionKind,
}

/// The two arms an action can take
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Direct damage, fed through the effectiveness/critical/boost formula
    Strike { power: f32 },

    /// Status or utility effect; no damage math applies
    Effect(Effect),
}

/// Status/utility effects
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "camelCase")
)]
pub enum Effect {
    /// Restore the user's HP (clamped at max)
    Heal { amount: f32 },

    /// Raise the user's outgoing-damage multiplier
    Boost { amount: f32 },

    /// Lower the opponent's outgoing-damage multiplier
    LowerAttack { amount: f32 },

    /// Afflict the opponent with a status condition
    ApplyStatus { status: Status },
}

impl Action {
    /// Create a direct-damage action
    pub fn strike(name: impl Into<String>, element: Element, power: f32) -> Self {
        Self {
            name: name.into(),
            element,
            kind: ActionKind::Strike { power },
        }
    }

    /// Create a status/utility action
    pub fn effect(name: impl Into<String>, element: Element, effect: Effect) -> Self {
        Self {
            name: name.into(),
            element,
            kind: ActionKind::Effect(effect),
        }
    }

    /// Check whether this action deals direct damage
    pub fn is_strike(&self) -> bool {
        matches!(self.kind, ActionKind::Strike { .. })
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_effect_sheet_shape() {
        let effect: Effect = serde_json::from_str(r#"{ "kind": "boost", "amount": 0.5 }"#).unwrap();
        assert_eq!(effect, Effect::Boost { amount: 0.5 });

        let effect: Effect =
            serde_json::from_str(r#"{ "kind": "applyStatus", "status": "paralyze" }"#).unwrap();
        assert_eq!(
            effect,
            Effect::ApplyStatus {
                status: Status::Paralyze
            }
        );

        let effect: Effect =
            serde_json::from_str(r#"{ "kind": "lowerAttack", "amount": 1 }"#).unwrap();
        assert_eq!(effect, Effect::LowerAttack { amount: 1.0 });
    }
}
