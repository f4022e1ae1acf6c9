//! Scripted Duel Example
//!
//! Loads a creature sheet (a bundled one, or a path passed as the first
//! argument), pits the first two creatures against each other, and plays
//! the battle out turn by turn, printing every event.
//!
//! Run with `RUST_LOG=debug` to see the resolver's damage breakdowns.

use anyhow::Result;
use fray_battle::{BattleRng, BattleSession, EntropyRng, Side};
use fray_roster::Roster;

const BUNDLED_SHEET: &str = r#"[
    {
        "name": "Cindershell",
        "hp": 50,
        "type": "fire",
        "attacks": [
            { "name": "Ember Spit", "type": "fire", "damage": 20 },
            { "name": "Shell Slam", "type": "normal", "damage": 10 },
            { "name": "Harden", "effect": { "kind": "boost", "amount": 0.5 } }
        ]
    },
    {
        "name": "Mossback",
        "hp": 60,
        "type": "grass",
        "attacks": [
            { "name": "Leaf Cut", "type": "grass", "damage": 12 },
            { "name": "Spore Cloud", "type": "grass",
              "effect": { "kind": "applyStatus", "status": "paralyze" } },
            { "name": "Photosynthesize", "effect": { "kind": "heal", "amount": 8 } }
        ]
    }
]"#;

fn hp_bar(hp: f32, hp_max: f32) -> String {
    let filled = ((hp / hp_max) * 20.0).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let roster = match std::env::args().nth(1) {
        Some(path) => Roster::load(path).await?,
        None => Roster::from_json(BUNDLED_SHEET)?,
    };

    let (player, enemy) = roster.pair(0, 1)?;
    println!("{} vs {} - battle start!\n", player.name, enemy.name);

    let mut session = BattleSession::new(player, enemy);
    let mut rng = EntropyRng::new();

    let mut turn = 1u32;
    while !session.is_over() {
        // Pick uniformly at random in place of a real UI
        let choice = rng.pick(session.player.actions.len());
        println!("--- Turn {turn} ---");

        let report = session.resolve_turn(choice, &mut rng)?;
        for event in &report.events {
            println!("{event}");
        }

        println!(
            "{:<14} {} {:>5.1} HP",
            session.player.name,
            hp_bar(report.player_hp, session.player.hp_max),
            report.player_hp
        );
        println!(
            "{:<14} {} {:>5.1} HP\n",
            session.enemy.name,
            hp_bar(report.enemy_hp, session.enemy.hp_max),
            report.enemy_hp
        );
        turn += 1;
    }

    match session.winner() {
        Some(Side::Player) => println!("You win!"),
        Some(Side::Enemy) => println!("You lose!"),
        None => unreachable!("battle loop only exits once decided"),
    }
    Ok(())
}
