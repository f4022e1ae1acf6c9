//! Turn resolution: damage math, status effects, win/lose detection

use tracing::debug;

use super::battle::{BattleSession, Phase, Side, TurnReport};
use crate::error::BattleError;
use crate::event::{BattleEvent, Effectiveness};
use crate::rng::BattleRng;
use crate::rules::{CRIT_CHANCE, CRIT_MULTIPLIER};
use crate::types::{ActionKind, Effect, Status, BURN_DAMAGE, PARALYZE_CHANCE};

impl BattleSession {
    /// Resolve one full exchange: the player's chosen action, then, if the
    /// enemy survives, an automatic enemy counter-action.
    ///
    /// `action` indexes into the player's action list. Rejects with
    /// [`BattleError::AlreadyDefeated`] once the battle is decided and
    /// [`BattleError::InvalidAction`] for an out-of-range index; neither
    /// rejection mutates the session.
    pub fn resolve_turn(
        &mut self,
        action: usize,
        rng: &mut dyn BattleRng,
    ) -> Result<TurnReport, BattleError> {
        if self.is_over() || !self.enemy.is_alive() {
            return Err(BattleError::AlreadyDefeated);
        }
        if action >= self.player.actions.len() {
            return Err(BattleError::InvalidAction(action));
        }

        let mut events = Vec::new();

        // Player acts first
        if self.perform_action(Side::Player, action, rng, &mut events) {
            self.phase = Phase::Over {
                winner: Side::Player,
            };
            debug!(winner = %Side::Player, "battle decided");
            return Ok(self.report(events));
        }

        // Status pre-check before the enemy can counter
        if self.rules.status_effects {
            match self.enemy.status {
                Some(Status::Paralyze) => {
                    if rng.next_f32() < PARALYZE_CHANCE {
                        debug!(target = %self.enemy.name, "paralysis skipped counter");
                        events.push(BattleEvent::FullyParalyzed {
                            target: self.enemy.name.clone(),
                        });
                        return Ok(self.report(events));
                    }
                }
                Some(Status::Burn) => {
                    let defeated = self.enemy.take_damage(BURN_DAMAGE);
                    events.push(BattleEvent::BurnDamage {
                        target: self.enemy.name.clone(),
                        damage: BURN_DAMAGE,
                    });
                    if defeated {
                        events.push(BattleEvent::Defeated {
                            name: self.enemy.name.clone(),
                        });
                        self.phase = Phase::Over {
                            winner: Side::Player,
                        };
                        debug!(winner = %Side::Player, "burn finished the enemy");
                        return Ok(self.report(events));
                    }
                }
                None => {}
            }
        }

        // Enemy counters with a uniformly random action from its own list
        if !self.enemy.actions.is_empty() {
            let counter = rng.pick(self.enemy.actions.len());
            if self.perform_action(Side::Enemy, counter, rng, &mut events) {
                self.phase = Phase::Over {
                    winner: Side::Enemy,
                };
                debug!(winner = %Side::Enemy, "battle decided");
            }
        }

        Ok(self.report(events))
    }

    /// Apply one action through the shared pipeline, attacker onto defender.
    ///
    /// Returns true if the defender was reduced to 0 HP.
    fn perform_action(
        &mut self,
        side: Side,
        index: usize,
        rng: &mut dyn BattleRng,
        events: &mut Vec<BattleEvent>,
    ) -> bool {
        let rules = self.rules;
        let (attacker, defender) = self.pair_mut(side);
        let action = attacker.actions[index].clone();

        match action.kind {
            ActionKind::Strike { power } => {
                let eff_mult = if rules.effectiveness {
                    action.element.effectiveness(defender.element)
                } else {
                    1.0
                };
                let critical = rules.critical_hits && rng.next_f32() < CRIT_CHANCE;
                let crit_mult = if critical { CRIT_MULTIPLIER } else { 1.0 };
                let boost_mult = if rules.boosts { attacker.boost } else { 1.0 };

                let damage = power * eff_mult * crit_mult * boost_mult;
                let defeated = defender.take_damage(damage);

                debug!(
                    actor = %attacker.name,
                    action = %action.name,
                    damage,
                    eff_mult,
                    critical,
                    boost_mult,
                    "strike resolved"
                );
                events.push(BattleEvent::ActionUsed {
                    actor: attacker.name.clone(),
                    action: action.name.clone(),
                    damage,
                    effectiveness: Effectiveness::from_multiplier(eff_mult),
                    critical,
                });
                if defeated {
                    events.push(BattleEvent::Defeated {
                        name: defender.name.clone(),
                    });
                }
                defeated
            }

            ActionKind::Effect(effect) => {
                match effect {
                    Effect::Heal { amount } => {
                        let restored = attacker.heal(amount);
                        events.push(BattleEvent::Healed {
                            actor: attacker.name.clone(),
                            action: action.name.clone(),
                            amount: restored,
                        });
                    }
                    Effect::Boost { amount } => {
                        if rules.boosts {
                            attacker.raise_boost(amount);
                            events.push(BattleEvent::BoostRaised {
                                actor: attacker.name.clone(),
                                action: action.name.clone(),
                                amount,
                            });
                        } else {
                            events.push(BattleEvent::NoEffect {
                                actor: attacker.name.clone(),
                                action: action.name.clone(),
                            });
                        }
                    }
                    Effect::LowerAttack { amount } => {
                        if rules.boosts {
                            defender.lower_boost(amount);
                            events.push(BattleEvent::AttackLowered {
                                actor: attacker.name.clone(),
                                target: defender.name.clone(),
                                action: action.name.clone(),
                                amount,
                            });
                        } else {
                            events.push(BattleEvent::NoEffect {
                                actor: attacker.name.clone(),
                                action: action.name.clone(),
                            });
                        }
                    }
                    Effect::ApplyStatus { status } => {
                        if rules.status_effects {
                            defender.status = Some(status);
                            events.push(BattleEvent::StatusInflicted {
                                actor: attacker.name.clone(),
                                target: defender.name.clone(),
                                action: action.name.clone(),
                                status,
                            });
                        } else {
                            events.push(BattleEvent::NoEffect {
                                actor: attacker.name.clone(),
                                action: action.name.clone(),
                            });
                        }
                    }
                }
                // Utility actions never defeat anyone
                false
            }
        }
    }
}
