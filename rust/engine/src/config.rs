use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Stakes and safety limits for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub small_blind: u32,
    pub big_blind: u32,
    /// Flat ante posted by every seat before the blinds; 0 disables antes.
    pub ante: u32,
    /// Actions allowed in one betting round before the round is forced to end.
    pub max_actions_per_round: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 5,
            big_blind: 10,
            ante: 0,
            max_actions_per_round: 100,
        }
    }
}

impl TableConfig {
    pub fn with_blinds(small_blind: u32, big_blind: u32) -> Self {
        Self {
            small_blind,
            big_blind,
            ..Self::default()
        }
    }

    pub fn with_ante(mut self, ante: u32) -> Self {
        self.ante = ante;
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.big_blind == 0 || self.small_blind > self.big_blind {
            return Err(GameError::InvalidBlinds {
                small_blind: self.small_blind,
                big_blind: self.big_blind,
            });
        }
        if self.max_actions_per_round == 0 {
            return Err(GameError::InvalidConfig(
                "max_actions_per_round must be >0".into(),
            ));
        }
        Ok(())
    }
}
