//! Battle error taxonomy

use thiserror::Error;

/// Errors a turn resolution can reject with
///
/// Both variants reject the call before any mutation happens; the
/// resolver never leaves a session half-updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BattleError {
    /// A turn was attempted after the battle ended, or against a side
    /// that is already at 0 HP
    #[error("the battle is already decided")]
    AlreadyDefeated,

    /// The chosen action index is not in the acting combatant's list
    #[error("no action at index {0}")]
    InvalidAction(usize),
}
