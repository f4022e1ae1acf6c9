//! Battle sessions and turn resolution

mod battle;
mod resolver;

pub use battle::{BattleSession, Phase, Side, TurnReport};
