use std::sync::Mutex;

use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result};
use serde::{Deserialize, Serialize};

use crate::display::{render_board, render_schedule};
use crate::drag::DropAction;
use crate::error::PlannerError;
use crate::events::NotificationFeed;
use crate::planner::Planner;
use crate::schedule::{color_classes, Activity, ColorClasses, Location, PlacementError};

// Planner state lives in memory for the life of the process
pub struct AppState {
    pub planner: Mutex<Planner>,
    pub feed: NotificationFeed,
}

impl AppState {
    /// Wraps a planner and subscribes a feed that `/api/notifications` drains
    pub fn new(mut planner: Planner) -> Self {
        let feed = NotificationFeed::new(64);
        planner.subscribe(feed.clone());
        AppState {
            planner: Mutex::new(planner),
            feed,
        }
    }
}

#[derive(Deserialize)]
pub struct SlotMoveRequest {
    activity_id: String,
    day: String,
    time_index: usize,
}

#[derive(Deserialize)]
pub struct BoardMoveRequest {
    activity_id: String,
}

#[derive(Deserialize)]
pub struct DragStartRequest {
    activity_id: String,
}

#[derive(Deserialize)]
pub struct DragEndRequest {
    target: Option<String>,
}

#[derive(Serialize)]
pub struct ActivityResponse {
    activity: Activity,
    location: Location,
}

#[derive(Serialize)]
pub struct CatalogEntryResponse {
    #[serde(flatten)]
    activity: Activity,
    classes: ColorClasses,
}

#[derive(Serialize)]
pub struct DragStateResponse {
    dragging: Option<String>,
}

fn error_response(err: &PlannerError) -> HttpResponse {
    let body = serde_json::json!({"success": false, "error": err.to_string()});
    match err {
        PlannerError::Placement(PlacementError::ActivityNotFound(_))
        | PlannerError::CatalogEntryNotFound(_) => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn lock_planner(state: &AppState) -> Result<std::sync::MutexGuard<'_, Planner>> {
    state
        .planner
        .lock()
        .map_err(|_| actix_web::error::ErrorInternalServerError("planner state poisoned"))
}

// Snapshot endpoint
async fn get_schedule(state: web::Data<AppState>) -> Result<HttpResponse> {
    let snapshot = lock_planner(&state)?.snapshot();
    Ok(HttpResponse::Ok().json(snapshot.as_ref()))
}

async fn get_activity(id: web::Path<String>, state: web::Data<AppState>) -> Result<HttpResponse> {
    let planner = lock_planner(&state)?;
    match planner.find_activity(&id) {
        Some((activity, location)) => Ok(HttpResponse::Ok().json(ActivityResponse {
            activity: activity.clone(),
            location,
        })),
        None => Ok(HttpResponse::NotFound()
            .json(serde_json::json!({"success": false, "error": "Activity not found"}))),
    }
}

async fn get_catalog(state: web::Data<AppState>) -> Result<HttpResponse> {
    let planner = lock_planner(&state)?;
    let entries: Vec<CatalogEntryResponse> = planner
        .catalog()
        .iter()
        .map(|activity| CatalogEntryResponse {
            classes: color_classes(&activity.color),
            activity: activity.clone(),
        })
        .collect();
    Ok(HttpResponse::Ok().json(entries))
}

async fn add_catalog_entry(id: web::Path<String>, state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut planner = lock_planner(&state)?;
    match planner.add_catalog_entry(&id) {
        Ok(activity_id) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "activity_id": activity_id
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn move_to_slot(req: web::Json<SlotMoveRequest>, state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut planner = lock_planner(&state)?;
    match planner.move_to_slot(&req.activity_id, &req.day, req.time_index) {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({"success": true}))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn move_to_board(req: web::Json<BoardMoveRequest>, state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut planner = lock_planner(&state)?;
    match planner.move_to_board(&req.activity_id) {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({"success": true}))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn drag_start(req: web::Json<DragStartRequest>, state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut planner = lock_planner(&state)?;
    let tracking = planner.begin_drag(&req.activity_id);
    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true, "tracking": tracking})))
}

async fn drag_move(state: web::Data<AppState>) -> Result<HttpResponse> {
    let planner = lock_planner(&state)?;
    Ok(HttpResponse::Ok().json(DragStateResponse {
        dragging: planner.drag_move().map(str::to_string),
    }))
}

async fn drag_end(req: web::Json<DragEndRequest>, state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut planner = lock_planner(&state)?;
    match planner.end_drag(req.target.as_deref()) {
        Ok(action) => {
            let outcome = match action {
                DropAction::ToSlot { .. } => "scheduled",
                DropAction::ToBoard { .. } => "unscheduled",
                DropAction::Cancel => "cancelled",
            };
            Ok(HttpResponse::Ok().json(serde_json::json!({"success": true, "outcome": outcome})))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

async fn get_notifications(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.feed.drain()))
}

// Plain-text view of the board and grid
async fn index(state: web::Data<AppState>) -> Result<HttpResponse> {
    let snapshot = lock_planner(&state)?.snapshot();
    let body = format!("{}\n{}", render_board(&snapshot), render_schedule(&snapshot));
    Ok(HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(body))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/api/schedule", web::get().to(get_schedule))
        .route("/api/activities/{id}", web::get().to(get_activity))
        .route("/api/catalog", web::get().to(get_catalog))
        .route("/api/catalog/{id}/add", web::post().to(add_catalog_entry))
        .route("/api/moves/slot", web::post().to(move_to_slot))
        .route("/api/moves/board", web::post().to(move_to_board))
        .route("/api/drag/start", web::post().to(drag_start))
        .route("/api/drag/move", web::post().to(drag_move))
        .route("/api/drag/end", web::post().to(drag_end))
        .route("/api/notifications", web::get().to(get_notifications));
}

pub async fn start_server(bind: &str, port: u16, planner: Planner) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::new(planner));

    tracing::info!(bind, port, "starting planner server");
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind((bind, port))?
    .run()
    .await
}
