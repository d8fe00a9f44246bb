//! NovaNav RPC Server: JSON-RPC over stdin/stdout for a web-view shell.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"bookmark.add", "params":{"name":"...","url":"...","categoryId":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! While edit mode is locked out the server also emits an
//! `{"event":"auth.tick", ...}` line once per second, plus one when the lock
//! expires, so the shell can render the countdown. Logs go to stderr.

use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use novanav::app::App;
use novanav::rpc_handler::handle_method;
use novanav::types::auth::GuardState;

fn emit(line: &Value) {
    let mut out = io::stdout().lock();
    if writeln!(out, "{}", line).and_then(|_| out.flush()).is_err() {
        error!("stdout closed");
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn handle_line(app: &Mutex<App>, line: &str) -> Value {
    let req: Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => return json!({"id": null, "error": format!("parse error: {}", e)}),
    };

    let id = req.get("id").cloned().unwrap_or(Value::Null);
    let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
    let params = req.get("params").cloned().unwrap_or(json!({}));

    match handle_method(app, method, &params) {
        Ok(val) => json!({"id": id, "result": val}),
        Err(err) => {
            warn!(method, error = %err, "rpc call failed");
            json!({"id": id, "error": err})
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let settings_path = std::env::var("NOVANAV_SETTINGS").ok();
    let app = match App::bootstrap(settings_path, |logging| init_tracing(&logging.filter)) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "failed to initialize NovaNav");
            std::process::exit(1);
        }
    };
    let app = Mutex::new(app);

    info!(version = env!("CARGO_PKG_VERSION"), "rpc server ready");
    emit(&json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    let mut was_locked = false;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(l)) => l,
                    Ok(None) => break,
                    Err(e) => {
                        error!(error = %e, "stdin read failed");
                        break;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                emit(&handle_line(&app, &line));
            }
            _ = ticker.tick() => {
                let status = match app.lock() {
                    Ok(a) => a.guard.tick(a.now()),
                    Err(e) => {
                        error!(error = %e, "app state poisoned");
                        break;
                    }
                };
                let locked = status.state == GuardState::Locked;
                if locked || was_locked {
                    emit(&json!({"event": "auth.tick", "status": status}));
                }
                was_locked = locked;
            }
        }
    }

    info!("stdin closed, shutting down");
}
