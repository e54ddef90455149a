//! Game data structure (what is played in a match).

use serde::Serialize;
use std::fmt;

/// Identifier for a game: 1-based, assigned in registration order.
pub type GameId = u32;

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Game {
    pub id: GameId,
    pub name: String,
}

impl Game {
    pub fn new(id: GameId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
