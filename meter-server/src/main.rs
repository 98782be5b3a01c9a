//! Thought-O-Meter backend server.
//!
//! Serves the story content list and the sentiment classifier over HTTP:
//!
//! - `GET /api/story`
//! - `POST /api/analyze-sentiment`
//!
//! Single-threaded by design: requests are independent and stateless, so the
//! accept loop handles one at a time and drives the async store on a
//! current-thread runtime.

mod config;
mod routes;

use std::io::Read;

use anyhow::Context;
use tiny_http::Method;
use tracing::{error, info};

use config::ServerConfig;
use meter_store::StoryStore;
use routes::{analyze_response, not_found_response, preflight_response, story_response, ApiResponse};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();
    init_tracing()?;

    let config = ServerConfig::from_env();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build runtime")?;

    let store = rt
        .block_on(StoryStore::open(&config.db_path))
        .with_context(|| format!("failed to open story store at '{}'", config.db_path))?;

    let seeded = rt
        .block_on(store.seed_if_empty(&meter_core::seed_story()))
        .context("failed to seed story store")?;
    if seeded {
        info!("store populated with initial story data");
    } else {
        info!("store already contains data, skipping population");
    }

    let addr = config.addr();
    let server = tiny_http::Server::http(&addr)
        .map_err(|e| anyhow::anyhow!("failed to bind {addr}: {e}"))?;
    info!(port = config.port, "Thought-O-Meter backend listening");

    for mut request in server.incoming_requests() {
        let method = request.method().clone();
        let url = request.url().to_string();
        let path = url.split('?').next().unwrap_or(&url).to_string();

        let api = match (&method, path.as_str()) {
            (Method::Options, _) => preflight_response(),
            (Method::Get, "/api/story") => story_response(rt.block_on(store.fetch_all())),
            (Method::Post, "/api/analyze-sentiment") => {
                let mut body = String::new();
                match request.as_reader().read_to_string(&mut body) {
                    Ok(_) => analyze_response(&body),
                    Err(e) => {
                        error!(error = %e, "failed to read request body");
                        analyze_response("")
                    }
                }
            }
            _ => not_found_response(&path),
        };

        info!(%method, %path, status = api.status, "request");
        respond(request, api);
    }

    Ok(())
}

/// Send a computed response, attaching the JSON content type and permissive
/// CORS headers to everything (the frontend may be served from anywhere).
fn respond(request: tiny_http::Request, api: ApiResponse) {
    let mut response = tiny_http::Response::from_string(api.body).with_status_code(api.status);
    for (name, value) in [
        ("Content-Type", "application/json"),
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
        ("Access-Control-Allow-Headers", "Content-Type"),
    ] {
        response = response.with_header(tiny_http::Header::from_bytes(name, value).unwrap());
    }

    if let Err(e) = request.respond(response) {
        error!(error = %e, "failed to send response");
    }
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("METER_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
