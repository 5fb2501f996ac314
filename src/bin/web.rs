//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable from phones on the LAN.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use baba_court_web::{
    generate_teams, record_goal, start_match, tick, toggle_clock, ConfirmedPlayer, Court,
    CourtConfig, CourtId, Position, QueueSnapshot, Side,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Per-court entry: court data + last activity time (for auto-cleanup).
struct CourtEntry {
    court: Court,
    last_activity: Instant,
}

/// In-memory state: many courts by ID (sessioned). Entries are removed after
/// 12h inactivity.
type AppState = Data<RwLock<HashMap<CourtId, CourtEntry>>>;

/// Official drawn-teams records, keyed by baba id + date. Stands in for the
/// managed backend's record store.
type OfficialTeams = Data<RwLock<HashMap<(Uuid, NaiveDate), QueueSnapshot>>>;

/// Inactivity threshold: courts not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
    #[serde(default)]
    position: Position,
}

#[derive(Deserialize)]
struct ConfirmedPlayersBody {
    players: Vec<ConfirmedPlayer>,
}

#[derive(Deserialize)]
struct RecordGoalBody {
    side: Side,
    #[serde(default = "default_goal_delta")]
    delta: i32,
}

fn default_goal_delta() -> i32 {
    1
}

/// Path segment: court id (e.g. /api/courts/{id})
#[derive(Deserialize)]
struct CourtPath {
    id: CourtId,
}

/// Path segments: court id and player id (e.g. /api/courts/{id}/players/{player_id})
#[derive(Deserialize)]
struct CourtPlayerPath {
    id: CourtId,
    player_id: Uuid,
}

/// Path segments: baba id and date (e.g. /api/babas/{baba_id}/teams/{date})
#[derive(Deserialize)]
struct OfficialTeamsPath {
    baba_id: Uuid,
    date: NaiveDate,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "baba-court-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new court (returns it with id; client stores id for subsequent requests).
#[post("/api/courts")]
async fn api_create_court(state: AppState, body: Option<Json<CourtConfig>>) -> HttpResponse {
    let config = body.map(|b| b.into_inner()).unwrap_or_default();
    if let Err(e) = config.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
    }
    let court = Court::new(config);
    let id = court.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        CourtEntry {
            court,
            last_activity: Instant::now(),
        },
    );
    match g.get(&id) {
        Some(entry) => HttpResponse::Ok().json(&entry.court),
        None => HttpResponse::InternalServerError().body("insert failed"),
    }
}

/// Get a court by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/courts/{id}")]
async fn api_get_court(state: AppState, path: Path<CourtPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.court)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No court" })),
    }
}

/// Add a player to the pool.
#[post("/api/courts/{id}/players")]
async fn api_add_player(
    state: AppState,
    path: Path<CourtPath>,
    body: Json<AddPlayerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No court" })),
    };
    entry.last_activity = Instant::now();
    let c = &mut entry.court;
    match c.add_player(body.name.as_str(), body.position) {
        Ok(()) => HttpResponse::Ok().json(c),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Remove a player from the pool by id (absent ids are a no-op).
#[delete("/api/courts/{id}/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<CourtPlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No court" })),
    };
    entry.last_activity = Instant::now();
    let c = &mut entry.court;
    c.remove_player(path.player_id);
    HttpResponse::Ok().json(c)
}

/// Seed the pool from a confirmed-attendance list (schedule-triggered draws).
#[post("/api/courts/{id}/players/confirmed")]
async fn api_seed_confirmed(
    state: AppState,
    path: Path<CourtPath>,
    body: Json<ConfirmedPlayersBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No court" })),
    };
    entry.last_activity = Instant::now();
    let c = &mut entry.court;
    match c.seed_confirmed(&body.players) {
        Ok(()) => HttpResponse::Ok().json(c),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Reset the pool (and queue/session) for a fresh draw.
#[post("/api/courts/{id}/pool/reset")]
async fn api_reset_pool(state: AppState, path: Path<CourtPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No court" })),
    };
    entry.last_activity = Instant::now();
    let c = &mut entry.court;
    c.reset_pool();
    HttpResponse::Ok().json(c)
}

/// Draw balanced teams from the pool and install the rotation queue.
#[post("/api/courts/{id}/draw")]
async fn api_draw(state: AppState, path: Path<CourtPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No court" })),
    };
    entry.last_activity = Instant::now();
    let c = &mut entry.court;
    match generate_teams(c) {
        Ok(()) => HttpResponse::Ok().json(c),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Start the next match between the queue's front pair.
#[post("/api/courts/{id}/match/start")]
async fn api_start_match(state: AppState, path: Path<CourtPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No court" })),
    };
    entry.last_activity = Instant::now();
    let c = &mut entry.court;
    match start_match(c) {
        Ok(()) => HttpResponse::Ok().json(c),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Pause/resume the active match clock.
#[post("/api/courts/{id}/match/clock")]
async fn api_toggle_clock(state: AppState, path: Path<CourtPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No court" })),
    };
    entry.last_activity = Instant::now();
    let c = &mut entry.court;
    match toggle_clock(c) {
        Ok(()) => HttpResponse::Ok().json(c),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Advance the match clock by one second (client drives the tick).
#[post("/api/courts/{id}/match/tick")]
async fn api_tick(state: AppState, path: Path<CourtPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No court" })),
    };
    entry.last_activity = Instant::now();
    let c = &mut entry.court;
    tick(c);
    HttpResponse::Ok().json(c)
}

/// Record a goal for one side (delta -1 corrects a misentry).
#[post("/api/courts/{id}/match/goal")]
async fn api_record_goal(
    state: AppState,
    path: Path<CourtPath>,
    body: Json<RecordGoalBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No court" })),
    };
    entry.last_activity = Instant::now();
    let c = &mut entry.court;
    match record_goal(c, body.side, body.delta) {
        Ok(()) => HttpResponse::Ok().json(c),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Current queue snapshot (the artifact the host persists).
#[get("/api/courts/{id}/snapshot")]
async fn api_get_snapshot(state: AppState, path: Path<CourtPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(entry.court.snapshot())
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No court" })),
    }
}

/// Restore a previously persisted queue snapshot (discards any active match).
#[put("/api/courts/{id}/snapshot")]
async fn api_restore_snapshot(
    state: AppState,
    path: Path<CourtPath>,
    body: Json<QueueSnapshot>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No court" })),
    };
    entry.last_activity = Instant::now();
    let c = &mut entry.court;
    c.restore_snapshot(body.into_inner());
    HttpResponse::Ok().json(c)
}

/// Store the official drawn teams for a baba on a date (upsert).
#[put("/api/babas/{baba_id}/teams/{date}")]
async fn api_put_official_teams(
    records: OfficialTeams,
    path: Path<OfficialTeamsPath>,
    body: Json<QueueSnapshot>,
) -> HttpResponse {
    let mut g = match records.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert((path.baba_id, path.date), body.into_inner());
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}

/// Fetch the official drawn teams for a baba on a date.
#[get("/api/babas/{baba_id}/teams/{date}")]
async fn api_get_official_teams(
    records: OfficialTeams,
    path: Path<OfficialTeamsPath>,
) -> HttpResponse {
    let g = match records.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get(&(path.baba_id, path.date)) {
        Some(snapshot) => HttpResponse::Ok().json(snapshot),
        None => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": "No teams for that date" }))
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<CourtId, CourtEntry>::new()));
    let records = Data::new(RwLock::new(
        HashMap::<(Uuid, NaiveDate), QueueSnapshot>::new(),
    ));

    // Background task: every 30 minutes, remove courts inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive court(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(records.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_court)
            .service(api_get_court)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_seed_confirmed)
            .service(api_reset_pool)
            .service(api_draw)
            .service(api_start_match)
            .service(api_toggle_clock)
            .service(api_tick)
            .service(api_record_goal)
            .service(api_get_snapshot)
            .service(api_restore_snapshot)
            .service(api_put_official_teams)
            .service(api_get_official_teams)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
