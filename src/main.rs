//! NovaNav: a personal link dashboard with a password-gated edit mode.
//!
//! Entry point: runs a console walkthrough of the dashboard core on an
//! in-memory store. The web-view shell talks to `novanav-rpc` instead.

use std::error::Error;
use std::sync::Arc;

use novanav::app::App;
use novanav::database::{Database, KeyValueStore, MemoryStore};
use novanav::managers::auth_guard::AuthGuardTrait;
use novanav::managers::entity_repository::EntityRepositoryTrait;
use novanav::services::clock::ManualClock;
use novanav::services::icon_resolver::avatar_url;
use novanav::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use novanav::types::auth::PasswordOutcome;
use novanav::types::bookmark::{BookmarkDraft, IconType};

type DemoResult = Result<(), Box<dyn Error>>;

fn main() -> DemoResult {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                NovaNav v{} — Demo Mode                    ║", env!("CARGO_PKG_VERSION"));
    println!("║        Personal link dashboard with gated editing           ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_database()?;

    let clock = Arc::new(ManualClock::new(1_700_000_000_000));
    let mut app = App::with_store(
        Arc::new(MemoryStore::new()),
        SettingsEngine::new(None),
        Box::new(clock.clone()),
    );

    demo_dashboard(&mut app)?;
    demo_lockout(&mut app, &clock)?;
    demo_editing(&mut app)?;

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
    Ok(())
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_database() -> DemoResult {
    section("Key/Value Store");

    let db = Database::open_in_memory()?;
    db.set("greeting", "\"hello\"")?;
    println!("  Stored greeting = {}", db.get("greeting")?.unwrap_or_default());
    db.set_many(&[("greeting", "\"hi\"".to_string()), ("farewell", "\"bye\"".to_string())])?;
    println!("  Batch write, greeting = {}", db.get("greeting")?.unwrap_or_default());
    println!("  ✓ Database OK");
    println!();
    Ok(())
}

fn demo_dashboard(app: &mut App) -> DemoResult {
    section("Dashboard View");

    for s in app.view.sections(&app.repository) {
        println!("  [{}] {} ({} links)", s.category.icon_type.as_str(), s.category.name, s.bookmarks.len());
    }

    app.view.set_search("git");
    let hits = app.view.visible(&app.repository);
    println!("  Search \"git\": {} hit(s)", hits.len());
    for b in &hits {
        println!("    - {} <{}>", b.name, b.url);
    }

    app.view.select_category(Some("media".to_string()));
    println!("  Category \"media\": {} link(s)", app.view.visible(&app.repository).len());
    app.view.clear();
    println!("  ✓ ViewState OK");
    println!();
    Ok(())
}

fn demo_lockout(app: &mut App, clock: &ManualClock) -> DemoResult {
    section("Auth Guard (lockout)");

    let now = app.now();
    println!("  request_edit -> {:?}", app.guard.request_edit(now));

    for _ in 0..app.guard.policy().max_attempts {
        let now = app.now();
        match app.guard.submit_password("guess", now)? {
            PasswordOutcome::Rejected { attempts_remaining, .. } => {
                println!("  wrong secret, {} attempt(s) left", attempts_remaining)
            }
            other => println!("  {:?}", other),
        }
    }

    let status = app.auth_status();
    println!("  state = {:?}, remaining = {:?} ms", status.state, status.remaining_ms);

    let duration = app.guard.policy().lockout_duration_ms;
    clock.advance(duration);
    println!("  after {} ms: state = {:?}", duration, app.auth_status().state);
    println!("  ✓ AuthGuard OK");
    println!();
    Ok(())
}

fn demo_editing(app: &mut App) -> DemoResult {
    section("Entity Repository (edit mode)");

    let secret = app.settings_engine.get_settings().security.edit_secret.clone();
    let now = app.now();
    app.guard.request_edit(now);
    println!("  submit correct secret -> {:?}", app.guard.submit_password(&secret, now)?);

    let category = app.repository.add_category("Reading", IconType::Resources)?;
    println!("  Added category {} ({})", category.name, category.id);

    let mut draft = BookmarkDraft::create(&category.id);
    draft.fields.name = "The Rust Book".to_string();
    draft.fields.url = "https://doc.rust-lang.org/book/".to_string();
    let bookmark = app.repository.save_draft(draft)?;
    println!("  Added bookmark {} with icon {}", bookmark.name, bookmark.icon);
    println!("  Fallback avatar: {}", avatar_url(&bookmark.name));

    let last = app.repository.categories().len() - 1;
    let moved = app.repository.move_category(last, 0)?;
    println!("  Moved new category to the front: {}", moved);

    let deletion = app.delete_category(&category.id)?;
    println!(
        "  Deleted category, cascaded {} bookmark(s)",
        deletion.removal.removed_bookmarks.len()
    );

    app.guard.exit_edit();
    println!("  state after exit = {:?}", app.auth_status().state);
    println!("  ✓ EntityRepository OK");
    Ok(())
}
