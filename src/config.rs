//! Settings read from the environment at startup.
//!
//! - `HOST` / `PORT`: where the web binary listens (default `127.0.0.1:8080`).
//! - `TOURNAMENT_SEED`: fixed seed for reproducible random picks.
//! - `ROUND_COUNT`: rounds offered by the console when the prompt is left empty (default 1).

use crate::models::Tournament;
use crate::TournamentError;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ROUND_COUNT: u32 = 1;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub seed: Option<u64>,
    pub round_count: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed: None,
            round_count: DEFAULT_ROUND_COUNT,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let seed = lookup("TOURNAMENT_SEED").and_then(|s| s.trim().parse().ok());
        let round_count = lookup("ROUND_COUNT")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&n| n > 0)
            .unwrap_or(defaults.round_count);
        Self {
            host: lookup("HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            seed,
            round_count,
        }
    }

    /// Create a tournament, seeded if `TOURNAMENT_SEED` was set.
    pub fn new_tournament<S: AsRef<str>>(
        &self,
        player_names: &[S],
        game_names: &[S],
    ) -> Result<Tournament, TournamentError> {
        match self.seed {
            Some(seed) => {
                log::info!("Using fixed random seed {}", seed);
                Tournament::with_seed(player_names, game_names, seed)
            }
            None => Tournament::new(player_names, game_names),
        }
    }
}
