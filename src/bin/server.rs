use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::Engine;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use helixmaze::config::{Bias, Params, Seed};
use helixmaze::error::MazeError;
use helixmaze::grid::Pos;
use helixmaze::maze::Metrics;
use helixmaze::render::{self, RenderOptions};
use helixmaze::{Timing, logging};

#[derive(Deserialize)]
struct GenerateRequest {
    width: Option<i32>,
    height: Option<i32>,
    helix: Option<i32>,
    seed: Option<Seed>,
    complexity: Option<i32>,
    bias: Option<Bias>,
    start: Option<(i64, i64)>,
    // Preview
    scale: Option<usize>,
    show_solution: Option<bool>,
    show_dead_ends: Option<bool>,
}

#[derive(Serialize)]
struct GenerateResponse {
    width: usize,
    height: usize,
    helix: usize,
    entry: Pos,
    exit: Pos,
    metrics: Metrics,
    solution: Vec<Pos>,
    timings: Vec<Timing>,
    preview: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

fn reject(status: StatusCode, msg: String) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse { error: msg }))
}

fn build(req: GenerateRequest) -> Result<GenerateResponse, (StatusCode, Json<ErrorResponse>)> {
    let defaults = Params::default();
    let params = Params {
        width: req.width.unwrap_or(defaults.width),
        height: req.height.unwrap_or(defaults.height),
        helix: req.helix.unwrap_or(defaults.helix),
        seed: req.seed.unwrap_or(defaults.seed.clone()),
        complexity: req.complexity.unwrap_or(defaults.complexity),
        bias: req.bias.unwrap_or(defaults.bias),
        start: req.start.or(defaults.start),
        ..defaults
    };
    let (maze, timings) = helixmaze::generate(&params).map_err(|e| match e {
        MazeError::Config(_) => reject(StatusCode::BAD_REQUEST, e.to_string()),
        MazeError::Generation(_) => reject(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    })?;

    let render_defaults = RenderOptions::default();
    let requested = req.scale.unwrap_or(render_defaults.scale).min(64);
    let opts = RenderOptions {
        scale: render::fit_scale(requested, maze.grid().width(), maze.grid().height()),
        show_solution: req.show_solution.unwrap_or(render_defaults.show_solution),
        show_dead_ends: req.show_dead_ends.unwrap_or(render_defaults.show_dead_ends),
    };

    let png = render::encode_png(&render::render_maze(&maze, &opts))
        .map_err(|e| reject(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    let b64 = base64::engine::general_purpose::STANDARD.encode(&png);

    let g = maze.grid();
    Ok(GenerateResponse {
        width: g.width(),
        height: g.height(),
        helix: g.helix(),
        entry: maze.entry_cell(),
        exit: maze.exit_cell(),
        metrics: *maze.metrics(),
        solution: maze.solution_path().to_vec(),
        timings,
        preview: format!("data:image/png;base64,{}", b64),
    })
}

async fn generate_handler(Json(req): Json<GenerateRequest>) -> ApiResult<GenerateResponse> {
    let response = tokio::task::spawn_blocking(move || build(req))
        .await
        .map_err(|e| {
            error!(error = %e, "generation task failed");
            reject(StatusCode::INTERNAL_SERVER_ERROR, "generation task failed".into())
        })??;

    Ok(Json(response))
}

async fn health_handler() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() {
    if let Err(e) = logging::init_logging("info") {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let app = Router::new()
        .route("/api/generate", post(generate_handler))
        .route("/api/health", get(health_handler))
        .layer(CorsLayer::permissive());

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("helixmaze preview server at http://{}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!(error = %e, %addr, "failed to bind");
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}
