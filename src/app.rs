//! App Core for NovaNav.
//!
//! Central struct holding the store-backed managers, the settings engine, the
//! session view state, and the clock. This is the collaborator interface the
//! presentation layer (or the RPC handler) drives.

use std::sync::Arc;

use tracing::{info, warn};

use crate::database::connection::Database;
use crate::database::store::KeyValueStore;
use crate::managers::auth_guard::{AuthGuard, AuthGuardTrait, LockoutPolicy};
use crate::managers::entity_repository::{EntityRepository, EntityRepositoryTrait};
use crate::managers::view_state::ViewState;
use crate::services::clock::{Clock, SystemClock};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::auth::{AuthStatus, GuardState};
use crate::types::bookmark::CategoryRemoval;
use crate::types::errors::RepositoryError;
use crate::types::settings::LoggingSettings;

/// A category delete together with whether the active filter was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDeletion {
    pub removal: CategoryRemoval,
    pub filter_cleared: bool,
}

/// Reads the settings file, then calls `init_logging` before reporting how
/// the read went. An unusable file leaves the defaults in place.
fn load_settings<F>(settings_path: Option<String>, init_logging: F) -> SettingsEngine
where
    F: FnOnce(&LoggingSettings),
{
    let mut settings_engine = SettingsEngine::new(settings_path);
    let loaded = settings_engine.load();
    init_logging(&settings_engine.get_settings().logging);

    let path = settings_engine.get_config_path();
    match loaded {
        Ok(_) => info!(path, "settings loaded"),
        Err(e) => warn!(error = %e, path, "settings unusable, using defaults"),
    }
    settings_engine
}

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub repository: EntityRepository,
    pub guard: AuthGuard,
    pub view: ViewState,
    clock: Box<dyn Clock>,
}

impl App {
    /// Creates an App on the SQLite file at `db_path` with default settings.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Database::open(db_path)?;
        Ok(Self::with_store(
            Arc::new(db),
            SettingsEngine::new(None),
            Box::new(SystemClock),
        ))
    }

    /// Creates an App from the settings file (platform default when `None`),
    /// opening the database the settings point at. `init_logging` receives the
    /// logging section right after the file is read, so everything startup
    /// logs, settings problems included, comes after that call.
    pub fn bootstrap<F>(
        settings_path: Option<String>,
        init_logging: F,
    ) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: FnOnce(&LoggingSettings),
    {
        let settings_engine = load_settings(settings_path, init_logging);
        let db_path = settings_engine.database_path();
        info!(path = %db_path.display(), "opening store");
        let db = Database::open(&db_path)?;
        Ok(Self::with_store(Arc::new(db), settings_engine, Box::new(SystemClock)))
    }

    /// Wires the managers onto an existing store. Loading never fails.
    pub fn with_store(
        store: Arc<dyn KeyValueStore>,
        settings_engine: SettingsEngine,
        clock: Box<dyn Clock>,
    ) -> Self {
        let security = &settings_engine.get_settings().security;
        let guard = AuthGuard::load(
            store.clone(),
            &security.edit_secret,
            LockoutPolicy::from(security),
        );
        let repository = EntityRepository::load(store);

        Self {
            settings_engine,
            repository,
            guard,
            view: ViewState::new(),
            clock,
        }
    }

    pub fn now(&self) -> i64 {
        self.clock.now_millis()
    }

    pub fn auth_status(&self) -> AuthStatus {
        self.guard.status(self.now())
    }

    /// Mutating category/bookmark operations are only offered while editing.
    pub fn is_editing(&self) -> bool {
        self.guard.state(self.now()) == GuardState::Editing
    }

    /// Deletes a category (cascading to its bookmarks) and clears the active
    /// filter when it pointed at that category.
    pub fn delete_category(&mut self, id: &str) -> Result<CategoryDeletion, RepositoryError> {
        let removal = self.repository.delete_category(id)?;
        let filter_cleared = self.view.forget_category(id);
        Ok(CategoryDeletion {
            removal,
            filter_cleared,
        })
    }
}
