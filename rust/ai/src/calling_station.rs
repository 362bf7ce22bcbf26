//! Never folds, never raises.

use tablestakes_engine::player::PlayerAction;
use tablestakes_engine::strategy::{Observation, Strategy};

/// Checks when free, otherwise calls whatever it faces. A useful floor for
/// benchmarks since it never leaves value on the table by folding.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallingStation;

impl Strategy for CallingStation {
    fn decide(&mut self, obs: &Observation) -> PlayerAction {
        if obs.to_call == 0 {
            PlayerAction::Check
        } else {
            PlayerAction::Call
        }
    }

    fn name(&self) -> &str {
        "CallingStation"
    }
}
