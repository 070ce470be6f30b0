use anyhow::{anyhow, Context, Result};
use std::path::Path;
use tiny_http::{Header, Method, Request, Response, Server};

use crate::output;

/// Serve the exported dataset at `GET /data` as a JSON array of row records.
///
/// Mirrors the read-API contract: no query parameters, no filtering, no
/// pagination. The CSV is re-read per request so a fresh `run` shows up
/// without restarting the server. `tiny_http` blocks on `recv`, so this
/// runs on the main thread until interrupted.
pub fn serve_dataset(addr: &str, csv_path: &Path) -> Result<()> {
    if !csv_path.exists() {
        anyhow::bail!(
            "Dataset not found at {}. Run `life-map run` first.",
            csv_path.display()
        );
    }

    let server =
        Server::http(addr).map_err(|e| anyhow!("Failed to bind {}: {}", addr, e))?;
    eprintln!("Serving life map data at http://{}/data", addr);

    for request in server.incoming_requests() {
        handle_request(request, csv_path);
    }

    Ok(())
}

/// Load the exported CSV and render it as a JSON array of records.
pub fn dataset_json(csv_path: &Path) -> Result<String> {
    let dataset = output::read_csv(csv_path)?;
    serde_json::to_string(&dataset.rows).context("Failed to serialize dataset as JSON")
}

fn handle_request(request: Request, csv_path: &Path) {
    let is_data = request.method() == &Method::Get && request.url() == "/data";
    if !is_data {
        let _ = request.respond(Response::from_string("Not found").with_status_code(404));
        return;
    }

    let json_header = Header::from_bytes("Content-Type", "application/json")
        .expect("static header is valid");

    match dataset_json(csv_path) {
        Ok(json) => {
            let _ = request.respond(Response::from_string(json).with_header(json_header));
        }
        Err(e) => {
            eprintln!("Warning: failed to load dataset: {}", e);
            let body = r#"{"error":"dataset unavailable"}"#;
            let _ = request.respond(
                Response::from_string(body)
                    .with_status_code(500)
                    .with_header(json_header),
            );
        }
    }
}
