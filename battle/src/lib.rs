//! Turn resolution core for creature battles.
//!
//! This crate is the pure battle engine: it owns the domain types and the
//! state-transition logic, and nothing else. Data loading and rendering are
//! external collaborators.
//!
//! # Overview
//!
//! `fray-battle` sits below the data and presentation layers:
//!
//! ```text
//! fray-roster (creature sheets)
//!        │
//!        ▼
//! fray-battle (domain types + turn resolution) ← THIS CRATE
//!        │
//!        └─> presentation layer (renders events, feeds back chosen actions)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Element`] - Elemental types with effectiveness chart
//! - [`Status`] - Status conditions (Burn, Paralyze)
//! - [`Action`] - Direct-damage strikes and status/utility effects
//! - [`Combatant`] - One side's creature state
//! - [`Ruleset`] - Capability flags selecting which mechanics are in play
//!
//! ## Resolution
//! - [`BattleSession`] - Owns both combatants and resolves turns
//! - [`BattleEvent`] - Narrative output of a resolved turn
//! - [`BattleRng`] - Seedable random-source abstraction
//!
//! # Example Usage
//!
//! ```
//! use fray_battle::{Action, BattleSession, Combatant, Element, EntropyRng};
//!
//! let player = Combatant::new("Cindershell", Element::Fire, 50.0)
//!     .with_action(Action::strike("Ember Spit", Element::Fire, 20.0));
//! let enemy = Combatant::new("Mossback", Element::Grass, 50.0)
//!     .with_action(Action::strike("Leaf Cut", Element::Grass, 5.0));
//!
//! let mut session = BattleSession::new(player, enemy);
//! let mut rng = EntropyRng::seeded(7);
//!
//! let report = session.resolve_turn(0, &mut rng).unwrap();
//! for event in &report.events {
//!     println!("{event}");
//! }
//! ```

pub mod error;
pub mod event;
pub mod rng;
pub mod rules;
pub mod session;
pub mod types;

// Re-export main types at crate root for convenience
pub use error::BattleError;
pub use event::{BattleEvent, Effectiveness};
pub use rng::{BattleRng, EntropyRng, ScriptedRng};
pub use rules::{Ruleset, CRIT_CHANCE, CRIT_MULTIPLIER};
pub use session::{BattleSession, Phase, Side, TurnReport};
pub use types::{
    Action, ActionKind, Combatant, Effect, Element, Status, BURN_DAMAGE, EFFECT_CHART,
    PARALYZE_CHANCE,
};
