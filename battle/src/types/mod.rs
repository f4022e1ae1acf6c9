//! Domain types for battle resolution

mod action;
mod combatant;
mod element;
mod status;

pub use action::{Action, ActionKind, Effect};
pub use combatant::Combatant;
pub use element::{Element, EFFECT_CHART};
pub use status::{Status, BURN_DAMAGE, PARALYZE_CHANCE};
