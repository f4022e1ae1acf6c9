//! Combatant state

use super::action::Action;
use super::element::Element;
use super::status::Status;

/// One side's creature during a battle
///
/// Constructed once at battle initialization from external creature data
/// and mutated in place for the duration of one battle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    /// Display name
    pub name: String,

    /// Elemental type, used as the defending side of effectiveness lookups
    pub element: Element,

    // === HP ===
    /// Current HP; clamped at 0 after combat math
    pub hp: f32,

    /// Maximum HP, fixed once the battle starts
    pub hp_max: f32,

    // === Combat state ===
    /// Outgoing-damage multiplier; starts at 1.0, floor-clamped at 0.0
    pub boost: f32,

    /// Current status condition
    pub status: Option<Status>,

    /// Available actions
    pub actions: Vec<Action>,
}

impl Combatant {
    /// Create a new combatant at full HP with no status and a neutral boost
    pub fn new(name: impl Into<String>, element: Element, hp_max: f32) -> Self {
        Self {
            name: name.into(),
            element,
            hp: hp_max,
            hp_max,
            boost: 1.0,
            status: None,
            actions: Vec::new(),
        }
    }

    /// Add an action to the combatant's list (builder-style)
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Check if the combatant can still act
    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    /// Subtract damage, clamping HP at 0
    ///
    /// Returns true if this reduced the combatant to 0 (defeat).
    pub fn take_damage(&mut self, damage: f32) -> bool {
        self.hp = (self.hp - damage).max(0.0);
        self.hp <= 0.0
    }

    /// Restore HP, clamped at the maximum
    ///
    /// Returns the amount actually restored.
    pub fn heal(&mut self, amount: f32) -> f32 {
        let restored = amount.min(self.hp_max - self.hp);
        self.hp += restored;
        restored
    }

    /// Raise the outgoing-damage multiplier
    pub fn raise_boost(&mut self, amount: f32) {
        self.boost += amount;
    }

    /// Lower the outgoing-damage multiplier, floor-clamped at 0.0
    ///
    /// A fully sapped combatant deals no damage rather than healing
    /// its target through a negative multiplier.
    pub fn lower_boost(&mut self, amount: f32) {
        self.boost = (self.boost - amount).max(0.0);
    }

    /// Fraction of HP remaining (0.0 to 1.0), for display
    pub fn hp_fraction(&self) -> f32 {
        if self.hp_max <= 0.0 {
            return 0.0;
        }
        self.hp / self.hp_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Effect;

    #[test]
    fn test_new_combatant() {
        let c = Combatant::new("Cindershell", Element::Fire, 50.0);
        assert_eq!(c.name, "Cindershell");
        assert_eq!(c.hp, 50.0);
        assert_eq!(c.hp_max, 50.0);
        assert_eq!(c.boost, 1.0);
        assert!(c.status.is_none());
        assert!(c.is_alive());
    }

    #[test]
    fn test_with_action() {
        let c = Combatant::new("Test", Element::Normal, 30.0)
            .with_action(Action::strike("Tackle", Element::Normal, 5.0))
            .with_action(Action::effect("Mend", Element::Normal, Effect::Heal { amount: 8.0 }));
        assert_eq!(c.actions.len(), 2);
    }

    #[test]
    fn test_take_damage_clamps_at_zero() {
        let mut c = Combatant::new("Test", Element::Normal, 30.0);
        assert!(!c.take_damage(10.0));
        assert_eq!(c.hp, 20.0);

        // Overkill still leaves HP at exactly 0
        assert!(c.take_damage(100.0));
        assert_eq!(c.hp, 0.0);
        assert!(!c.is_alive());
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut c = Combatant::new("Test", Element::Normal, 30.0);
        c.hp = 25.0;

        let restored = c.heal(10.0);
        assert_eq!(restored, 5.0);
        assert_eq!(c.hp, 30.0);

        // Already full
        assert_eq!(c.heal(10.0), 0.0);
        assert_eq!(c.hp, 30.0);
    }

    #[test]
    fn test_boost_floor() {
        let mut c = Combatant::new("Test", Element::Normal, 30.0);
        c.raise_boost(0.5);
        assert_eq!(c.boost, 1.5);

        c.lower_boost(2.0);
        assert_eq!(c.boost, 0.0);
    }

    #[test]
    fn test_hp_fraction() {
        let mut c = Combatant::new("Test", Element::Normal, 40.0);
        c.hp = 10.0;
        assert_eq!(c.hp_fraction(), 0.25);
    }
}
