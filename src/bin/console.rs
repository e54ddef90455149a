//! Interactive text front end: register players and games, enter every player's
//! matches round by round, then finalize matches and watch the scoreboard.
//! Run with: cargo run --bin console
//! ROUND_COUNT sets the default round count; TOURNAMENT_SEED fixes random picks.

use std::error::Error;
use std::io::{self, BufRead, Write};
use tournament_ledger::config::Settings;
use tournament_ledger::{
    create_games, create_players, finalize_match, matches_for_player, parse_name_list,
    schedule_match, scoreboard, MatchRequest, Pick, PlayerId, Tournament, OPPONENTS_PER_MATCH,
};

type AppResult<T> = Result<T, Box<dyn Error>>;

/// A main player plus a full set of distinct opponents.
const MIN_PLAYERS: usize = OPPONENTS_PER_MATCH + 1;

/// Raised when stdin is closed; ends the session quietly.
#[derive(Debug)]
struct InputClosed;

impl std::fmt::Display for InputClosed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("input closed")
    }
}

impl Error for InputClosed {}

struct Console<R> {
    input: R,
}

impl<R: BufRead> Console<R> {
    fn prompt(&mut self, text: &str) -> AppResult<String> {
        print!("{}", text);
        io::stdout().flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Box::new(InputClosed));
        }
        Ok(line.trim().to_string())
    }

    /// `y`/`n` answer; empty input gives `default`.
    fn confirm(&mut self, text: &str, default: bool) -> AppResult<bool> {
        let answer = self.prompt(text)?.to_lowercase();
        Ok(match answer.as_str() {
            "" => default,
            a => a.starts_with('y'),
        })
    }

    /// Prompt until the line parses as a non-empty, valid name list.
    fn read_names(&mut self, text: &str, is_player: bool) -> AppResult<Vec<String>> {
        loop {
            let line = self.prompt(text)?;
            let checked = parse_name_list(&line).and_then(|names| {
                if is_player {
                    create_players(names.as_slice()).map(|_| names)
                } else {
                    create_games(names.as_slice()).map(|_| names)
                }
            });
            let minimum = if is_player { MIN_PLAYERS } else { 1 };
            match checked {
                Ok(names) if names.len() < minimum => println!("Enter at least {} name(s)", minimum),
                Ok(names) => return Ok(names),
                Err(e) => println!("{}", e),
            }
        }
    }

    /// ENTER for a random pick, otherwise a numeric id.
    fn read_pick(&mut self, text: &str) -> AppResult<Pick<u32>> {
        loop {
            let answer = self.prompt(text)?;
            if answer.is_empty() {
                return Ok(Pick::Random);
            }
            match answer.parse() {
                Ok(id) => return Ok(Pick::Picked(id)),
                Err(_) => println!("'{}' is not an ID", answer),
            }
        }
    }
}

fn clear_console() {
    print!("\x1B[2J\x1B[1;1H");
}

fn display_players(t: &Tournament) {
    println!("Players:");
    for p in t.players() {
        println!("{}: {}", p.id, p.name);
    }
}

fn display_games(t: &Tournament) {
    println!("Games:");
    for g in t.games() {
        println!("{}: {}", g.id, g.name);
    }
}

fn display_matches(t: &Tournament) {
    println!("Matches:");
    for m in t.matches() {
        println!("{}", t.display_match(m));
    }
}

fn display_scoreboard(t: &Tournament) {
    println!("Scoreboard:");
    for entry in scoreboard(t) {
        println!("{}: {}", entry.name, entry.score);
    }
}

/// Ask for one player's match until it can be scheduled.
fn enter_match<R: BufRead>(
    console: &mut Console<R>,
    t: &mut Tournament,
    player_id: PlayerId,
    player_name: &str,
) -> AppResult<()> {
    loop {
        clear_console();
        display_games(t);
        println!();
        display_players(t);
        println!("\nMatch details for Player: {}", player_name);

        let game = console.read_pick("Game ID (ENTER for random): ")?;
        let mut opponents = [Pick::Random; OPPONENTS_PER_MATCH];
        for (slot, pick) in opponents.iter_mut().enumerate() {
            *pick = console.read_pick(&format!("Opponent #{} ID (ENTER for random): ", slot + 1))?;
        }
        let request = MatchRequest {
            player_id,
            opponents,
            game,
        };
        match schedule_match(t, &request) {
            Ok(m) => {
                let id = m.id;
                if let Some(m) = t.game_match(id) {
                    println!("Scheduled {}", t.display_match(m));
                }
                return Ok(());
            }
            Err(e) => {
                println!("{}", e);
                console.prompt("Press ENTER to try again...")?;
            }
        }
    }
}

fn finalize_from_menu<R: BufRead>(console: &mut Console<R>, t: &mut Tournament) -> AppResult<()> {
    display_matches(t);
    let match_id: u32 = match console.prompt("Match ID: ")?.parse() {
        Ok(id) => id,
        Err(_) => {
            println!("No match selected");
            return Ok(());
        }
    };
    let main_player = match t.players_in_match(match_id) {
        Ok(players) => players.first().map(|p| p.name.clone()).unwrap_or_default(),
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };
    let main_player_won = console.confirm(&format!("{} won? [Y/n]: ", main_player), true)?;
    match finalize_match(t, match_id, main_player_won) {
        Ok(m) => {
            let id = m.id;
            if let Some(m) = t.game_match(id) {
                println!("{}", t.display_match(m));
            }
        }
        Err(e) => println!("{}", e),
    }
    Ok(())
}

fn matches_from_menu<R: BufRead>(console: &mut Console<R>, t: &Tournament) -> AppResult<()> {
    display_players(t);
    let player_id: PlayerId = match console.prompt("Player ID (ENTER for all): ")?.parse() {
        Ok(id) => id,
        Err(_) => {
            display_matches(t);
            return Ok(());
        }
    };
    let name = match t.player(player_id) {
        Some(p) => p.name.clone(),
        None => {
            println!("No player with ID {}", player_id);
            return Ok(());
        }
    };
    let main_only = console.confirm(&format!("{} only as main player? [y/N]: ", name), false)?;
    let matches = matches_for_player(t, player_id, main_only)?;
    println!("Matches:");
    for m in matches {
        println!("{}", t.display_match(m));
    }
    Ok(())
}

fn export_from_menu<R: BufRead>(console: &mut Console<R>, t: &Tournament) -> AppResult<()> {
    let json = serde_json::to_string_pretty(&serde_json::json!({
        "tournament": t,
        "scoreboard": scoreboard(t),
    }))?;
    let path = console.prompt("File to write (ENTER to print): ")?;
    if path.is_empty() {
        println!("{}", json);
    } else {
        match std::fs::write(&path, json) {
            Ok(()) => println!("Results written to {}", path),
            Err(e) => println!("Could not write {}: {}", path, e),
        }
    }
    Ok(())
}

fn run<R: BufRead>(console: &mut Console<R>, settings: &Settings) -> AppResult<()> {
    let player_names = console.read_names("Player names (comma separated): ", true)?;
    let game_names = console.read_names("Game names (comma separated): ", false)?;
    let round_count = loop {
        let answer = console.prompt(&format!("Round count (default: {}): ", settings.round_count))?;
        if answer.is_empty() {
            break settings.round_count;
        }
        match answer.parse::<u32>() {
            Ok(n) if n > 0 => break n,
            _ => println!("Enter a positive number"),
        }
    };

    let mut tournament = settings.new_tournament(player_names.as_slice(), game_names.as_slice())?;

    let roster: Vec<(PlayerId, String)> = tournament
        .players()
        .iter()
        .map(|p| (p.id, p.name.clone()))
        .collect();
    for _ in 0..round_count {
        for (player_id, name) in &roster {
            enter_match(console, &mut tournament, *player_id, name)?;
        }
    }

    loop {
        clear_console();
        for (index, option) in ["Finalize match", "Display scoreboard", "Display matches", "Export results as JSON"]
            .iter()
            .enumerate()
        {
            println!("{}: {}", index + 1, option);
        }
        println!("0: Quit");

        match console.prompt("Option: ")?.as_str() {
            "1" => {
                clear_console();
                finalize_from_menu(console, &mut tournament)?;
            }
            "2" => {
                clear_console();
                display_scoreboard(&tournament);
            }
            "3" => {
                clear_console();
                matches_from_menu(console, &tournament)?;
            }
            "4" => export_from_menu(console, &tournament)?,
            "0" => return Ok(()),
            _ => println!("Incorrect option selected"),
        }
        console.prompt("Press ENTER to continue...")?;
    }
}

fn main() -> AppResult<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let settings = Settings::from_env();
    let stdin = io::stdin();
    let mut console = Console { input: stdin.lock() };

    match run(&mut console, &settings) {
        Err(e) if e.is::<InputClosed>() => {
            log::info!("Input closed, exiting");
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<&str>> {
        Console {
            input: Cursor::new(input),
        }
    }

    #[test]
    fn read_names_prompts_again_until_list_is_valid() {
        let mut c = console("A, ,B\nA,B\nA,a,C\nA,B,C\n");
        let names = c.read_names("Players: ", true).unwrap();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn one_game_is_enough() {
        let mut c = console("\nDarts\n");
        assert_eq!(c.read_names("Games: ", false).unwrap(), vec!["Darts"]);
    }

    #[test]
    fn read_pick_skips_non_numeric_answers() {
        let mut c = console("abc\n-1\n4\n\n");
        assert_eq!(c.read_pick("ID: ").unwrap(), Pick::Picked(4));
        assert_eq!(c.read_pick("ID: ").unwrap(), Pick::Random);
    }

    #[test]
    fn closed_input_ends_prompting() {
        let mut c = console("A,B\n");
        let err = c.read_names("Players: ", true).unwrap_err();
        assert!(err.is::<InputClosed>());
    }

    #[test]
    fn failed_export_keeps_the_session_running() {
        let settings = Settings {
            seed: Some(1),
            ..Settings::default()
        };
        let script = [
            "A,B,C",
            "G",
            "1",
            // one round: game, opponent #1, opponent #2 for each player
            "1", "2", "3",
            "1", "1", "3",
            "1", "1", "2",
            // finalize match 1 as a main player win
            "1", "1", "y", "",
            "4", "/nonexistent/dir/results.json", "",
            "2", "",
            "0",
        ]
        .join("\n")
            + "\n";
        let mut c = console(&script);
        run(&mut c, &settings).unwrap();
    }
}
