//! Setup phase: read name lists and register players and games with ids 1..N.

use crate::models::{EntityKind, Game, Player, TournamentError};

/// Split one comma separated line into names. Fields are trimmed and may be
/// quoted to contain commas; blank fields are kept so registration can reject them.
pub fn parse_name_list(line: &str) -> Result<Vec<String>, TournamentError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());
    let mut names = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| TournamentError::MalformedNames(e.to_string()))?;
        names.extend(record.iter().map(str::to_string));
    }
    Ok(names)
}

/// Register players in input order (ids start at 1).
pub fn create_players<S: AsRef<str>>(names: &[S]) -> Result<Vec<Player>, TournamentError> {
    register(names, EntityKind::Player, |id, name| Player::new(id, name))
}

/// Register games in input order (ids start at 1).
pub fn create_games<S: AsRef<str>>(names: &[S]) -> Result<Vec<Game>, TournamentError> {
    register(names, EntityKind::Game, |id, name| Game::new(id, name))
}

/// Validate every name first so a bad list registers nothing.
fn register<S, T>(
    names: &[S],
    kind: EntityKind,
    make: impl Fn(u32, String) -> T,
) -> Result<Vec<T>, TournamentError>
where
    S: AsRef<str>,
{
    let mut accepted: Vec<String> = Vec::with_capacity(names.len());
    let mut folded: Vec<String> = Vec::with_capacity(names.len());
    for (index, name) in names.iter().enumerate() {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(TournamentError::BlankName {
                kind,
                position: index + 1,
            });
        }
        let lower = name.to_lowercase();
        if folded.contains(&lower) {
            return Err(TournamentError::DuplicateName {
                kind,
                name: name.to_string(),
            });
        }
        folded.push(lower);
        accepted.push(name.to_string());
    }
    Ok(accepted
        .into_iter()
        .zip(1..)
        .map(|(name, id)| make(id, name))
        .collect())
}
