//! Player data structure.

use serde::Serialize;
use std::fmt;

/// Identifier for a player: 1-based, assigned in registration order.
pub type PlayerId = u32;

/// A registered player. Scores are not stored here; see `logic::scoreboard`.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
