//! BattleSession - owns both combatants and the battle phase

use crate::event::BattleEvent;
use crate::rules::Ruleset;
use crate::types::Combatant;

/// Which side of the battle a combatant fights on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// The other side
    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Enemy => "Enemy",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Battle lifecycle
///
/// The only transition is `InProgress` -> `Over`, taken inside
/// `resolve_turn` when a combatant's HP crosses to 0. `Over` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    InProgress,
    Over { winner: Side },
}

/// One battle between a player combatant and an enemy combatant
///
/// The session owns both combatant records outright and mutates them in
/// place as turns resolve; there is no shared state outside the session,
/// so multiple sessions can coexist independently.
#[derive(Debug, Clone)]
pub struct BattleSession {
    /// The user-driven side
    pub player: Combatant,

    /// The automatic counter-attacking side
    pub enemy: Combatant,

    /// Which mechanics are in play
    pub rules: Ruleset,

    pub(crate) phase: Phase,
}

/// Outcome of one resolved turn
///
/// Carries HP snapshots so the presentation layer does not need to
/// re-read the session between render steps.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// Narrative events in resolution order
    pub events: Vec<BattleEvent>,

    /// Player HP after the exchange
    pub player_hp: f32,

    /// Enemy HP after the exchange
    pub enemy_hp: f32,

    /// Winner, if the exchange ended the battle
    pub winner: Option<Side>,
}

impl BattleSession {
    /// Start a battle under the full ruleset
    pub fn new(player: Combatant, enemy: Combatant) -> Self {
        Self::with_rules(player, enemy, Ruleset::FULL)
    }

    /// Start a battle under a specific ruleset
    pub fn with_rules(player: Combatant, enemy: Combatant, rules: Ruleset) -> Self {
        Self {
            player,
            enemy,
            rules,
            phase: Phase::InProgress,
        }
    }

    /// Get a combatant by side
    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    /// Current battle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check whether the battle has been decided
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over { .. })
    }

    /// The winning side, if the battle is over
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::InProgress => None,
            Phase::Over { winner } => Some(winner),
        }
    }

    /// Split into (attacker, defender) for the given attacking side
    pub(crate) fn pair_mut(&mut self, attacker: Side) -> (&mut Combatant, &mut Combatant) {
        match attacker {
            Side::Player => (&mut self.player, &mut self.enemy),
            Side::Enemy => (&mut self.enemy, &mut self.player),
        }
    }

    /// Snapshot the session into a turn report
    pub(crate) fn report(&self, events: Vec<BattleEvent>) -> TurnReport {
        TurnReport {
            events,
            player_hp: self.player.hp,
            enemy_hp: self.enemy.hp,
            winner: self.winner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Element;

    fn session() -> BattleSession {
        BattleSession::new(
            Combatant::new("Cindershell", Element::Fire, 50.0),
            Combatant::new("Mossback", Element::Grass, 50.0),
        )
    }

    #[test]
    fn test_new_session_in_progress() {
        let session = session();
        assert_eq!(session.phase(), Phase::InProgress);
        assert!(!session.is_over());
        assert!(session.winner().is_none());
        assert_eq!(session.rules, Ruleset::FULL);
    }

    #[test]
    fn test_combatant_accessor() {
        let session = session();
        assert_eq!(session.combatant(Side::Player).name, "Cindershell");
        assert_eq!(session.combatant(Side::Enemy).name, "Mossback");
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Player.opponent(), Side::Enemy);
        assert_eq!(Side::Enemy.opponent(), Side::Player);
    }

    #[test]
    fn test_with_rules() {
        let session = BattleSession::with_rules(
            Combatant::new("A", Element::Normal, 10.0),
            Combatant::new("B", Element::Normal, 10.0),
            Ruleset::BASIC,
        );
        assert_eq!(session.rules, Ruleset::BASIC);
    }

    #[test]
    fn test_report_snapshots_hp() {
        let mut session = session();
        session.player.hp = 12.0;
        session.enemy.hp = 34.0;

        let report = session.report(Vec::new());
        assert_eq!(report.player_hp, 12.0);
        assert_eq!(report.enemy_hp, 34.0);
        assert!(report.winner.is_none());
        assert!(report.events.is_empty());
    }
}
