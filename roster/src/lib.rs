//! Creature sheet loading and conversion for fray battles.
//!
//! A sheet is an ordered JSON array of creature records (the shape the
//! original `stats.json` used). This crate parses sheets, hands out
//! battle-ready [`Combatant`]s, and selects the (player, enemy) pair by
//! index. Loading happens once at startup, before any battle session
//! exists; the battle core itself never touches I/O.
//!
//! # Example Usage
//!
//! ```no_run
//! # async fn demo() -> Result<(), fray_roster::RosterError> {
//! use fray_battle::BattleSession;
//! use fray_roster::Roster;
//!
//! let roster = Roster::load("stats.json").await?;
//! let (player, enemy) = roster.pair(0, 1)?;
//! let session = BattleSession::new(player, enemy);
//! # Ok(())
//! # }
//! ```

mod error;
mod record;

pub use error::RosterError;
pub use record::{AttackRecord, CreatureRecord};

use std::path::Path;

use fray_battle::Combatant;

/// An ordered collection of creature records loaded from a sheet
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    records: Vec<CreatureRecord>,
}

impl Roster {
    /// Build a roster from already-parsed records
    pub fn from_records(records: Vec<CreatureRecord>) -> Self {
        Self { records }
    }

    /// Parse a roster from sheet JSON
    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let records: Vec<CreatureRecord> = serde_json::from_str(json)?;
        Ok(Self { records })
    }

    /// Load a roster from a sheet file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }

    /// Number of creatures in the roster
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the roster is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Creature names in sheet order
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    /// Get a record by index
    pub fn get(&self, index: usize) -> Option<&CreatureRecord> {
        self.records.get(index)
    }

    /// Build a battle-ready combatant from the record at `index`
    pub fn combatant(&self, index: usize) -> Result<Combatant, RosterError> {
        self.records
            .get(index)
            .map(CreatureRecord::to_combatant)
            .ok_or(RosterError::NoSuchCreature(index))
    }

    /// Select the (player, enemy) pair for a battle
    pub fn pair(&self, player: usize, enemy: usize) -> Result<(Combatant, Combatant), RosterError> {
        Ok((self.combatant(player)?, self.combatant(enemy)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fray_battle::{ActionKind, Effect, Element, Status};

    const SHEET: &str = r#"[
        {
            "name": "Cindershell",
            "hp": 50,
            "type": "fire",
            "attacks": [
                { "name": "Ember Spit", "type": "fire", "damage": 20 },
                { "name": "Harden", "effect": { "kind": "boost", "amount": 0.5 } }
            ]
        },
        {
            "name": "Mossback",
            "hp": 50,
            "type": "grass",
            "status": "burn",
            "attacks": [
                { "name": "Leaf Cut", "type": "grass", "damage": 5 },
                { "name": "Spore Cloud", "type": "grass",
                  "effect": { "kind": "applyStatus", "status": "paralyze" } }
            ]
        }
    ]"#;

    #[test]
    fn test_from_json_parses_the_sheet() {
        let roster = Roster::from_json(SHEET).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.names(), vec!["Cindershell", "Mossback"]);

        let cinder = roster.get(0).unwrap();
        assert_eq!(cinder.element, Element::Fire);
        assert_eq!(cinder.attacks.len(), 2);
        assert_eq!(cinder.attacks[0].damage, Some(20.0));
        // "Harden" omits its type and falls back to normal
        assert_eq!(cinder.attacks[1].element, Element::Normal);
        assert_eq!(
            cinder.attacks[1].effect,
            Some(Effect::Boost { amount: 0.5 })
        );

        let moss = roster.get(1).unwrap();
        assert_eq!(moss.status, Some(Status::Burn));
        assert_eq!(
            moss.attacks[1].effect,
            Some(Effect::ApplyStatus {
                status: Status::Paralyze
            })
        );
    }

    #[test]
    fn test_pair_builds_battle_ready_combatants() {
        let roster = Roster::from_json(SHEET).unwrap();
        let (player, enemy) = roster.pair(0, 1).unwrap();

        assert_eq!(player.name, "Cindershell");
        assert_eq!(player.hp, 50.0);
        assert_eq!(
            player.actions[0].kind,
            ActionKind::Strike { power: 20.0 }
        );
        assert_eq!(
            player.actions[1].kind,
            ActionKind::Effect(Effect::Boost { amount: 0.5 })
        );

        assert_eq!(enemy.name, "Mossback");
        assert_eq!(enemy.status, Some(Status::Burn));
    }

    #[test]
    fn test_bad_json_is_a_parse_error() {
        let err = Roster::from_json("{ not a sheet").unwrap_err();
        assert!(matches!(err, RosterError::Parse(_)));
    }

    #[test]
    fn test_wrong_shape_is_a_parse_error() {
        let err = Roster::from_json(r#"{"name": "not an array"}"#).unwrap_err();
        assert!(matches!(err, RosterError::Parse(_)));
    }

    #[test]
    fn test_out_of_range_selection() {
        let roster = Roster::from_json(SHEET).unwrap();
        let err = roster.pair(0, 9).unwrap_err();
        assert!(matches!(err, RosterError::NoSuchCreature(9)));
    }

    #[test]
    fn test_empty_roster() {
        let roster = Roster::from_json("[]").unwrap();
        assert!(roster.is_empty());
        assert!(matches!(
            roster.combatant(0),
            Err(RosterError::NoSuchCreature(0))
        ));
    }

    #[tokio::test]
    async fn test_load_reads_a_sheet_file() {
        let path = std::env::temp_dir().join("fray-roster-load-test.json");
        std::fs::write(&path, SHEET).unwrap();

        let roster = Roster::load(&path).await.unwrap();
        assert_eq!(roster.len(), 2);

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_load_missing_file_is_a_read_error() {
        let err = Roster::load("/definitely/not/here/stats.json")
            .await
            .unwrap_err();
        assert!(matches!(err, RosterError::Read(_)));
    }
}
