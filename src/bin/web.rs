//! Single binary web server: JSON REST API over the score tracker.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), DATA_DIR (e.g. ./data).

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use billiard_score_tracker::{
    adjust_score, begin_match, ErrorKind, FileStore, MatchSession, Tracker, TrackerError,
};
use serde::Deserialize;
use std::sync::RwLock;

/// Persistent tracker plus the one match currently being set up or played.
struct ServerState {
    tracker: Tracker<FileStore>,
    session: Option<MatchSession>,
}

type AppState = Data<RwLock<ServerState>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct PlayerBody {
    name: String,
    #[serde(default)]
    avatar_url: Option<String>,
}

#[derive(Deserialize)]
struct ScoreBody {
    delta: i64,
}

/// Path segment: player id (e.g. /api/players/{id})
#[derive(Deserialize)]
struct PlayerPath {
    id: String,
}

fn error_response(e: &TrackerError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e.kind() {
        ErrorKind::Validation => HttpResponse::BadRequest().json(body),
        ErrorKind::NotFound => HttpResponse::NotFound().json(body),
        ErrorKind::Invariant | ErrorKind::Storage => {
            log::error!("{}", e);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

fn no_session() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No match in progress" }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "billiard-score-tracker",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// All players in registration order.
#[get("/api/players")]
async fn api_list_players(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.tracker.players())
}

#[post("/api/players")]
async fn api_register_player(state: AppState, body: Json<PlayerBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let body = body.into_inner();
    match g.tracker.register_player(&body.name, body.avatar_url) {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(e) => error_response(&e),
    }
}

/// Edit name and avatar; counters are untouched.
#[put("/api/players/{id}")]
async fn api_rename_player(
    state: AppState,
    path: Path<PlayerPath>,
    body: Json<PlayerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let body = body.into_inner();
    match g.tracker.rename_player(&path.id, &body.name, body.avatar_url) {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(e) => error_response(&e),
    }
}

#[delete("/api/players/{id}")]
async fn api_remove_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.tracker.remove_player(&path.id) {
        Ok(_) => HttpResponse::Ok().json(g.tracker.players()),
        Err(e) => error_response(&e),
    }
}

/// Players ranked by wins.
#[get("/api/leaderboard")]
async fn api_leaderboard(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.tracker.leaderboard())
}

/// Match history, newest first.
#[get("/api/matches")]
async fn api_list_matches(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.tracker.matches_newest_first())
}

#[get("/api/stats")]
async fn api_stats(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.tracker.stats())
}

/// Start picking players for a new match (discards any unfinished one).
#[post("/api/session")]
async fn api_new_session(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    if g.session.is_some() {
        log::info!("Discarding unfinished match session");
    }
    let session = g.tracker.new_session();
    let response = HttpResponse::Ok().json(&session);
    g.session = Some(session);
    response
}

#[get("/api/session")]
async fn api_get_session(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match &g.session {
        Some(session) => HttpResponse::Ok().json(session),
        None => no_session(),
    }
}

/// Select or deselect a player (ignored once the match has started).
#[post("/api/session/players/{id}/toggle")]
async fn api_toggle_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let session = match g.session.as_mut() {
        Some(s) => s,
        None => return no_session(),
    };
    match session.toggle_selection(&path.id) {
        Ok(()) => HttpResponse::Ok().json(&*session),
        Err(e) => error_response(&e),
    }
}

/// Begin scoring with the selected players.
#[post("/api/session/start")]
async fn api_start_match(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let session = match g.session.as_mut() {
        Some(s) => s,
        None => return no_session(),
    };
    match begin_match(session) {
        Ok(()) => HttpResponse::Ok().json(&*session),
        Err(e) => error_response(&e),
    }
}

#[post("/api/session/players/{id}/score")]
async fn api_adjust_score(
    state: AppState,
    path: Path<PlayerPath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let session = match g.session.as_mut() {
        Some(s) => s,
        None => return no_session(),
    };
    match adjust_score(session, &path.id, body.delta) {
        Ok(_) => HttpResponse::Ok().json(&*session),
        Err(e) => error_response(&e),
    }
}

/// Finish the match: persist it, update player counters and clear the session.
#[post("/api/session/finish")]
async fn api_finish_match(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    // Keep the live session until the match is safely stored.
    let session = match &g.session {
        Some(s) => s.clone(),
        None => return no_session(),
    };
    match g.tracker.finish_match(session) {
        Ok(game) => {
            g.session = None;
            HttpResponse::Ok().json(game)
        }
        Err(e) => error_response(&e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_dir() -> String {
    "data".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| default_data_dir());
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);
    log::info!("Storing players and matches in {}", data_dir);

    let state = Data::new(RwLock::new(ServerState {
        tracker: Tracker::new(FileStore::new(data_dir)),
        session: None,
    }));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_list_players)
            .service(api_register_player)
            .service(api_rename_player)
            .service(api_remove_player)
            .service(api_leaderboard)
            .service(api_list_matches)
            .service(api_stats)
            .service(api_new_session)
            .service(api_get_session)
            .service(api_toggle_player)
            .service(api_start_match)
            .service(api_adjust_score)
            .service(api_finish_match)
    })
    .bind(bind)?
    .run()
    .await
}
