//! Serde records for the creature sheet format
//!
//! The sheet is a JSON array of creature entries:
//!
//! ```json
//! [
//!   { "name": "Cindershell", "hp": 50, "type": "fire",
//!     "attacks": [
//!       { "name": "Ember Spit", "type": "fire", "damage": 20 },
//!       { "name": "Harden", "effect": { "kind": "boost", "amount": 0.5 } }
//!     ] }
//! ]
//! ```
//!
//! `type` defaults to `normal` when omitted, and an attack carries either
//! `damage` (a strike) or `effect` (a status/utility move).

use serde::{Deserialize, Serialize};

use fray_battle::{Action, Combatant, Effect, Element, Status};

/// One creature entry in the sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureRecord {
    /// Display name
    pub name: String,

    /// Starting (and maximum) HP
    pub hp: f32,

    /// Elemental type; sheets predating types omit it
    #[serde(rename = "type", default = "default_element")]
    pub element: Element,

    /// Pre-afflicted status condition, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    /// Available attacks
    pub attacks: Vec<AttackRecord>,
}

/// One attack entry under a creature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackRecord {
    /// Display name
    pub name: String,

    /// Element used for the effectiveness lookup
    #[serde(rename = "type", default = "default_element")]
    pub element: Element,

    /// Direct damage; present on strikes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<f32>,

    /// Status/utility effect; present on utility moves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<Effect>,
}

fn default_element() -> Element {
    Element::Normal
}

impl CreatureRecord {
    /// Build a battle-ready combatant from this record
    pub fn to_combatant(&self) -> Combatant {
        let mut combatant = Combatant::new(self.name.clone(), self.element, self.hp);
        combatant.status = self.status;
        combatant.actions = self.attacks.iter().map(AttackRecord::to_action).collect();
        combatant
    }
}

impl AttackRecord {
    /// Build an action from this record
    ///
    /// An effect wins over a damage value if a sheet carries both; an
    /// entry with neither becomes a zero-power strike.
    pub fn to_action(&self) -> Action {
        match self.effect {
            Some(effect) => Action::effect(self.name.clone(), self.element, effect),
            None => Action::strike(self.name.clone(), self.element, self.damage.unwrap_or(0.0)),
        }
    }
}
