//! Tournament (the controller owning players, games and matches) and TournamentError.

use crate::logic::{create_games, create_players};
use crate::models::game::{Game, GameId};
use crate::models::game_match::{GameMatch, MatchId};
use crate::models::player::{Player, PlayerId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use std::fmt;

/// Which collection an id or name refers to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Player,
    Game,
    Match,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Player => f.write_str("player"),
            EntityKind::Game => f.write_str("game"),
            EntityKind::Match => f.write_str("match"),
        }
    }
}

/// Broad class of a `TournamentError`, for presentation code deciding how to re-prompt.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    /// Malformed setup input.
    Validation,
    /// An id in a scheduling request is unknown or breaks the opponent rules.
    InvalidReference,
    /// The targeted player, game or match does not exist.
    NotFound,
    /// Nothing left to draw from.
    EmptyPool,
}

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// A name in a setup list is empty or whitespace-only (`position` is 1-based).
    BlankName { kind: EntityKind, position: usize },
    /// The same name appears twice in one setup list (case-insensitive).
    DuplicateName { kind: EntityKind, name: String },
    /// A name list could not be read at all.
    MalformedNames(String),
    /// Explicit player id that is not registered.
    UnknownPlayer(PlayerId),
    /// Explicit game id that is not registered.
    UnknownGame(GameId),
    /// The main player was picked as their own opponent.
    SelfPlay(PlayerId),
    /// The same opponent was picked twice for one match.
    DuplicateOpponent(PlayerId),
    NotFound { kind: EntityKind, id: u32 },
    /// Random selection over an empty candidate set.
    EmptyPool(EntityKind),
}

impl TournamentError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TournamentError::BlankName { .. }
            | TournamentError::DuplicateName { .. }
            | TournamentError::MalformedNames(_) => ErrorCategory::Validation,
            TournamentError::UnknownPlayer(_)
            | TournamentError::UnknownGame(_)
            | TournamentError::SelfPlay(_)
            | TournamentError::DuplicateOpponent(_) => ErrorCategory::InvalidReference,
            TournamentError::NotFound { .. } => ErrorCategory::NotFound,
            TournamentError::EmptyPool(_) => ErrorCategory::EmptyPool,
        }
    }
}

impl fmt::Display for TournamentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TournamentError::BlankName { kind, position } => {
                write!(f, "The {} name at position {} is blank", kind, position)
            }
            TournamentError::DuplicateName { kind, name } => {
                write!(f, "A {} named '{}' is already registered", kind, name)
            }
            TournamentError::MalformedNames(reason) => write!(f, "Could not read names: {}", reason),
            TournamentError::UnknownPlayer(id) => write!(f, "No player with ID {}", id),
            TournamentError::UnknownGame(id) => write!(f, "No game with ID {}", id),
            TournamentError::SelfPlay(id) => {
                write!(f, "Player {} cannot be their own opponent", id)
            }
            TournamentError::DuplicateOpponent(id) => {
                write!(f, "Player {} already takes part in this match", id)
            }
            TournamentError::NotFound { kind, id } => write!(f, "No {} with ID {}", kind, id),
            TournamentError::EmptyPool(kind) => write!(f, "No {} left to choose from", kind),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Full tournament state: registered players and games, scheduled matches, and
/// the random source used for every random pick.
#[derive(Clone, Debug, Serialize)]
pub struct Tournament {
    pub(crate) players: Vec<Player>,
    pub(crate) games: Vec<Game>,
    pub(crate) matches: Vec<GameMatch>,
    #[serde(skip)]
    pub(crate) rng: StdRng,
}

impl Tournament {
    /// Register players and games from name lists; random picks are entropy seeded.
    pub fn new<S: AsRef<str>>(player_names: &[S], game_names: &[S]) -> Result<Self, TournamentError> {
        Self::with_rng(player_names, game_names, StdRng::from_entropy())
    }

    /// Same as `new`, but every random pick is reproducible for a given seed.
    pub fn with_seed<S: AsRef<str>>(
        player_names: &[S],
        game_names: &[S],
        seed: u64,
    ) -> Result<Self, TournamentError> {
        Self::with_rng(player_names, game_names, StdRng::seed_from_u64(seed))
    }

    fn with_rng<S: AsRef<str>>(
        player_names: &[S],
        game_names: &[S],
        rng: StdRng,
    ) -> Result<Self, TournamentError> {
        let players = create_players(player_names)?;
        let games = create_games(game_names)?;
        log::info!(
            "Tournament created with {} player(s) and {} game(s)",
            players.len(),
            games.len()
        );
        Ok(Self {
            players,
            games,
            matches: Vec::new(),
            rng,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Matches in scheduling order.
    pub fn matches(&self) -> &[GameMatch] {
        &self.matches
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn game_match(&self, id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub(crate) fn game_match_mut(&mut self, id: MatchId) -> Option<&mut GameMatch> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Uniformly random player whose id is not in `exclude`.
    pub fn random_player(&mut self, exclude: &[PlayerId]) -> Result<&Player, TournamentError> {
        let candidates: Vec<&Player> = self
            .players
            .iter()
            .filter(|p| !exclude.contains(&p.id))
            .collect();
        candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or(TournamentError::EmptyPool(EntityKind::Player))
    }

    /// Uniformly random game whose id is not in `exclude`.
    pub fn random_game(&mut self, exclude: &[GameId]) -> Result<&Game, TournamentError> {
        let candidates: Vec<&Game> = self
            .games
            .iter()
            .filter(|g| !exclude.contains(&g.id))
            .collect();
        candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or(TournamentError::EmptyPool(EntityKind::Game))
    }

    /// Main player followed by the opponents of a match.
    pub fn players_in_match(&self, match_id: MatchId) -> Result<Vec<&Player>, TournamentError> {
        let m = self.game_match(match_id).ok_or(TournamentError::NotFound {
            kind: EntityKind::Match,
            id: match_id,
        })?;
        std::iter::once(m.player_id)
            .chain(m.opponent_ids.iter().copied())
            .map(|id| self.player(id).ok_or(TournamentError::UnknownPlayer(id)))
            .collect()
    }

    /// One-line text form of a match, e.g.
    /// `#1: [Players: A vs B+C] [Game: Darts] [Score: 5] [Winner: Not played yet]`.
    pub fn display_match<'a>(&'a self, game_match: &'a GameMatch) -> MatchLine<'a> {
        MatchLine {
            tournament: self,
            game_match,
        }
    }
}

/// `Display` adapter resolving a match's ids to names.
pub struct MatchLine<'a> {
    tournament: &'a Tournament,
    game_match: &'a GameMatch,
}

impl MatchLine<'_> {
    fn player_name(&self, id: PlayerId) -> &str {
        self.tournament.player(id).map_or("?", |p| p.name.as_str())
    }
}

impl fmt::Display for MatchLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::models::game_match::MatchState;

        let m = self.game_match;
        let main = self.player_name(m.player_id);
        let opponents = m
            .opponent_ids
            .iter()
            .map(|&id| self.player_name(id))
            .collect::<Vec<_>>()
            .join("+");
        let game = self.tournament.game(m.game_id).map_or("?", |g| g.name.as_str());
        let winner = match m.state {
            MatchState::NotPlayed => "Not played yet",
            MatchState::MainPlayerWon => main,
            MatchState::OpponentsWon => opponents.as_str(),
        };
        write!(
            f,
            "#{}: [Players: {} vs {}] [Game: {}] [Score: {}] [Winner: {}]",
            m.id, main, opponents, game, m.prize_score, winner
        )
    }
}
