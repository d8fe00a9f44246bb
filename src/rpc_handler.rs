//! RPC method handler for the NovaNav JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls to the
//! managers held by the `App` struct.

use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use zeroize::Zeroizing;

use crate::app::App;
use crate::managers::auth_guard::AuthGuardTrait;
use crate::managers::entity_repository::EntityRepositoryTrait;
use crate::services::search::search;
use crate::types::bookmark::{BookmarkDraft, BookmarkFields, IconType};

fn str_param<'a>(params: &'a Value, key: &str) -> Result<&'a str, String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", key))
}

fn index_param(params: &Value, key: &str) -> Result<usize, String> {
    let raw = params.get(key).ok_or_else(|| format!("missing {}", key))?;
    raw.as_u64()
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(|| format!("invalid {}: {}", key, raw))
}

fn icon_type_param(params: &Value) -> Result<IconType, String> {
    match params.get("icon_type").and_then(|v| v.as_str()) {
        None => Ok(IconType::default()),
        Some(raw) => IconType::parse(raw).ok_or_else(|| format!("invalid icon_type: {}", raw)),
    }
}

fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, String> {
    serde_json::from_value(value.clone()).map_err(|e| format!("invalid params: {}", e))
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, String> {
    serde_json::to_value(value).map_err(|e| e.to_string())
}

fn ensure_editing(app: &App) -> Result<(), String> {
    if app.is_editing() {
        Ok(())
    } else {
        Err("edit mode required".to_string())
    }
}

/// Full snapshot for an initial render.
pub fn state_snapshot(app: &App) -> Result<Value, String> {
    Ok(json!({
        "categories": to_value(&app.repository.categories())?,
        "bookmarks": to_value(&app.repository.bookmarks())?,
        "auth": to_value(&app.auth_status())?,
        "view": to_value(&app.view)?,
    }))
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    let mut a = app.lock().map_err(|e| e.to_string())?;

    match method {
        "ping" => Ok(json!({"pong": true})),

        "state.get" => state_snapshot(&a),

        // ─── Auth ───
        "auth.status" => to_value(&a.auth_status()),
        "auth.request_edit" => {
            let now = a.now();
            let outcome = a.guard.request_edit(now);
            to_value(&outcome)
        }
        "auth.submit" => {
            let secret = Zeroizing::new(str_param(params, "secret")?.to_string());
            let now = a.now();
            let outcome = a.guard.submit_password(&secret, now).map_err(|e| e.to_string())?;
            to_value(&outcome)
        }
        "auth.cancel" => {
            a.guard.cancel_challenge();
            Ok(json!({"ok": true}))
        }
        "auth.exit_edit" => {
            a.guard.exit_edit();
            Ok(json!({"ok": true}))
        }

        // ─── Categories ───
        "category.add" => {
            ensure_editing(&a)?;
            let name = str_param(params, "name")?;
            let icon_type = icon_type_param(params)?;
            let category = a.repository.add_category(name, icon_type).map_err(|e| e.to_string())?;
            to_value(&category)
        }
        "category.rename" => {
            ensure_editing(&a)?;
            let id = str_param(params, "id")?;
            let name = str_param(params, "name")?;
            let icon_type = icon_type_param(params)?;
            let category = a
                .repository
                .rename_category(id, name, icon_type)
                .map_err(|e| e.to_string())?;
            to_value(&category)
        }
        "category.delete" => {
            ensure_editing(&a)?;
            let id = str_param(params, "id")?;
            let deletion = a.delete_category(id).map_err(|e| e.to_string())?;
            Ok(json!({
                "id": deletion.removal.category.id,
                "removed_bookmarks": deletion.removal.removed_bookmarks,
                "filter_cleared": deletion.filter_cleared,
            }))
        }
        "category.move" => {
            ensure_editing(&a)?;
            let result = if params.get("dragged_id").is_some() {
                let dragged = str_param(params, "dragged_id")?;
                let target = str_param(params, "target_id")?;
                a.repository.move_category_by_id(dragged, target)
            } else {
                let from = index_param(params, "from")?;
                let to = index_param(params, "to")?;
                a.repository.move_category(from, to)
            };
            let moved = result.map_err(|e| e.to_string())?;
            Ok(json!({"moved": moved}))
        }

        // ─── Bookmarks ───
        "bookmark.add" => {
            ensure_editing(&a)?;
            let fields: BookmarkFields = decode(params)?;
            let bookmark = a.repository.add_bookmark(fields).map_err(|e| e.to_string())?;
            to_value(&bookmark)
        }
        "bookmark.edit" => {
            ensure_editing(&a)?;
            let id = str_param(params, "id")?;
            let fields: BookmarkFields = decode(params)?;
            let bookmark = a.repository.edit_bookmark(id, fields).map_err(|e| e.to_string())?;
            to_value(&bookmark)
        }
        "bookmark.save" => {
            ensure_editing(&a)?;
            let draft: BookmarkDraft = decode(params)?;
            let bookmark = a.repository.save_draft(draft).map_err(|e| e.to_string())?;
            to_value(&bookmark)
        }
        "bookmark.delete" => {
            ensure_editing(&a)?;
            let id = str_param(params, "id")?;
            let removed = a.repository.delete_bookmark(id).map_err(|e| e.to_string())?;
            Ok(json!({"id": removed.id}))
        }
        "bookmark.move" => {
            ensure_editing(&a)?;
            let dragged = str_param(params, "dragged_id")?;
            let target = str_param(params, "target_id")?;
            let moved = a
                .repository
                .move_bookmark(dragged, target)
                .map_err(|e| e.to_string())?;
            Ok(json!({"moved": moved}))
        }
        "bookmark.search" => {
            let query = str_param(params, "query")?;
            to_value(&search(query, a.repository.bookmarks()))
        }

        // ─── View ───
        "view.select_category" => {
            let id = params.get("id").and_then(|v| v.as_str()).map(str::to_string);
            if let Some(id) = &id {
                if a.repository.category(id).is_none() {
                    return Err(format!("Category not found: {}", id));
                }
            }
            a.view.select_category(id);
            to_value(&a.view)
        }
        "view.set_search" => {
            let query = str_param(params, "query")?;
            a.view.set_search(query);
            to_value(&a.view)
        }
        "view.visible" => {
            let visible = a.view.visible(&a.repository);
            to_value(&visible)
        }
        "view.sections" => {
            let sections = a.view.sections(&a.repository);
            to_value(&sections)
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
