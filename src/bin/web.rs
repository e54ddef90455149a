//! Local operator API: one tournament held in memory, driven through JSON endpoints.
//! Run with: cargo run --bin web
//! Listens on 127.0.0.1:8080 by default; override with env HOST and PORT.
//! Set TOURNAMENT_SEED for reproducible random picks.

use actix_web::{
    get, post,
    web::{Data, Json, Path, Query, ServiceConfig},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::sync::RwLock;
use tournament_ledger::config::Settings;
use tournament_ledger::{
    finalize_match, matches_for_player, schedule_match, scoreboard, ErrorCategory, GameId,
    MatchId, MatchRequest, PlayerId, Tournament, TournamentError,
};

/// Server state: the settings used to seed new tournaments and the current tournament (if set up).
struct AppInner {
    settings: Settings,
    tournament: Option<Tournament>,
}

type AppState = Data<RwLock<AppInner>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    players: Vec<String>,
    games: Vec<String>,
}

#[derive(Deserialize)]
struct FinalizeBody {
    main_player_won: bool,
}

/// Comma separated ids to leave out of a random pick, e.g. `?exclude=1,3`.
#[derive(Deserialize)]
struct RandomQuery {
    #[serde(default)]
    exclude: String,
}

#[derive(Deserialize)]
struct MatchesQuery {
    player_id: Option<PlayerId>,
    #[serde(default)]
    main_only: bool,
}

#[derive(Deserialize)]
struct MatchPath {
    id: MatchId,
}

fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e.category() {
        ErrorCategory::NotFound => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn no_tournament() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

fn parse_ids(list: &str) -> Result<Vec<u32>, HttpResponse> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse().map_err(|_| {
                HttpResponse::BadRequest()
                    .json(serde_json::json!({ "error": format!("Not an ID: {}", s) }))
            })
        })
        .collect()
}

fn match_json(t: &Tournament, match_id: MatchId) -> HttpResponse {
    match t.game_match(match_id) {
        Some(m) => HttpResponse::Ok().json(serde_json::json!({
            "match": m,
            "summary": t.display_match(m).to_string(),
        })),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No match" })),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tournament-ledger",
    })
}

/// Set up (or replace) the tournament from player and game names.
#[post("/api/tournament")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.settings.new_tournament(body.players.as_slice(), body.games.as_slice()) {
        Ok(t) => {
            let response = HttpResponse::Ok().json(&t);
            g.tournament = Some(t);
            response
        }
        Err(e) => error_response(&e),
    }
}

/// Players, games and matches of the current tournament.
#[get("/api/tournament")]
async fn api_get_tournament(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.tournament.as_ref() {
        Some(t) => HttpResponse::Ok().json(t),
        None => no_tournament(),
    }
}

#[get("/api/players/random")]
async fn api_random_player(state: AppState, query: Query<RandomQuery>) -> HttpResponse {
    let exclude: Vec<PlayerId> = match parse_ids(&query.exclude) {
        Ok(ids) => ids,
        Err(response) => return response,
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let t = match g.tournament.as_mut() {
        Some(t) => t,
        None => return no_tournament(),
    };
    match t.random_player(&exclude) {
        Ok(p) => HttpResponse::Ok().json(p),
        Err(e) => error_response(&e),
    }
}

#[get("/api/games/random")]
async fn api_random_game(state: AppState, query: Query<RandomQuery>) -> HttpResponse {
    let exclude: Vec<GameId> = match parse_ids(&query.exclude) {
        Ok(ids) => ids,
        Err(response) => return response,
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let t = match g.tournament.as_mut() {
        Some(t) => t,
        None => return no_tournament(),
    };
    match t.random_game(&exclude) {
        Ok(game) => HttpResponse::Ok().json(game),
        Err(e) => error_response(&e),
    }
}

/// Schedule a match. Slots are `"random"` or `{"picked": id}`.
#[post("/api/matches")]
async fn api_schedule_match(state: AppState, body: Json<MatchRequest>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let t = match g.tournament.as_mut() {
        Some(t) => t,
        None => return no_tournament(),
    };
    let match_id = match schedule_match(t, &body) {
        Ok(m) => m.id,
        Err(e) => return error_response(&e),
    };
    match_json(t, match_id)
}

#[post("/api/matches/{id}/finalize")]
async fn api_finalize_match(state: AppState, path: Path<MatchPath>, body: Json<FinalizeBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let t = match g.tournament.as_mut() {
        Some(t) => t,
        None => return no_tournament(),
    };
    if let Err(e) = finalize_match(t, path.id, body.main_player_won) {
        return error_response(&e);
    }
    match_json(t, path.id)
}

/// All matches, or those of `player_id` (only as main player with `main_only=true`).
#[get("/api/matches")]
async fn api_list_matches(state: AppState, query: Query<MatchesQuery>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let t = match g.tournament.as_ref() {
        Some(t) => t,
        None => return no_tournament(),
    };
    let matches = match query.player_id {
        Some(player_id) => match matches_for_player(t, player_id, query.main_only) {
            Ok(matches) => matches,
            Err(e) => return error_response(&e),
        },
        None => t.matches().iter().collect(),
    };
    let summaries: Vec<String> = matches
        .iter()
        .map(|m| t.display_match(m).to_string())
        .collect();
    HttpResponse::Ok().json(serde_json::json!({
        "matches": matches,
        "summaries": summaries,
    }))
}

#[get("/api/scoreboard")]
async fn api_scoreboard(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.tournament.as_ref() {
        Some(t) => HttpResponse::Ok().json(scoreboard(t)),
        None => no_tournament(),
    }
}

fn routes(cfg: &mut ServiceConfig) {
    cfg.service(api_health)
        .service(api_create_tournament)
        .service(api_get_tournament)
        .service(api_random_player)
        .service(api_random_game)
        .service(api_schedule_match)
        .service(api_finalize_match)
        .service(api_list_matches)
        .service(api_scoreboard);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = Settings::from_env();
    let bind = (settings.host.clone(), settings.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(AppInner {
        settings,
        tournament: None,
    }));

    HttpServer::new(move || {
        App::new().app_data(state.clone()).configure(routes)
    })
    .bind(bind)?
    .run()
    .await
}
