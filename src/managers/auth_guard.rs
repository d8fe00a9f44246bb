//! Auth Guard for NovaNav.
//!
//! Gates edit mode behind a single shared secret with attempt tracking and a
//! timed lockout. The attempt counter and the lockout deadline are persisted
//! so a restart cannot reset the attempt budget. The lock itself is never
//! stored: it is recomputed from the deadline with [`is_locked`] on every call.
//!
//! Session flags (`is_authorized`, `is_edit_mode`) live only in memory and
//! start cleared.

use std::sync::Arc;

use ring::digest;
use tracing::{info, warn};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::database::store::{encode_json, keys, read_json, KeyValueStore};
use crate::types::auth::{
    AuthState, AuthStatus, EditRequest, GuardState, PasswordOutcome, SessionFlags,
};
use crate::types::errors::AuthError;
use crate::types::settings::SecuritySettings;

/// Default maximum failed attempts before lockout.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
/// Default lockout window: 30 minutes.
pub const DEFAULT_LOCKOUT_DURATION_MS: i64 = 30 * 60 * 1000;

/// True while submissions must be refused.
pub fn is_locked(now_ms: i64, lockout_until: i64) -> bool {
    lockout_until > now_ms
}

/// Threshold and window of the lockout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockoutPolicy {
    pub max_attempts: u32,
    pub lockout_duration_ms: i64,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            lockout_duration_ms: DEFAULT_LOCKOUT_DURATION_MS,
        }
    }
}

impl From<&SecuritySettings> for LockoutPolicy {
    fn from(settings: &SecuritySettings) -> Self {
        Self {
            max_attempts: settings.max_attempts.max(1),
            lockout_duration_ms: settings.lockout_duration_ms(),
        }
    }
}

/// SHA-256 of the configured secret; wiped when the guard is dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
struct SecretDigest([u8; 32]);

impl SecretDigest {
    fn of(secret: &str) -> Self {
        let hashed = digest::digest(&digest::SHA256, secret.as_bytes());
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(hashed.as_ref());
        Self(bytes)
    }

    fn matches(&self, candidate: &str) -> bool {
        let mut other = Self::of(candidate);
        let equal = self
            .0
            .iter()
            .zip(other.0.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0;
        other.zeroize();
        equal
    }
}

/// Trait defining the edit-mode gate.
pub trait AuthGuardTrait {
    fn state(&self, now_ms: i64) -> GuardState;
    fn status(&self, now_ms: i64) -> AuthStatus;
    fn request_edit(&mut self, now_ms: i64) -> EditRequest;
    fn submit_password(&mut self, secret: &str, now_ms: i64) -> Result<PasswordOutcome, AuthError>;
    fn exit_edit(&mut self);
    fn cancel_challenge(&mut self);
    fn remaining_lockout_ms(&self, now_ms: i64) -> Option<i64>;
}

/// Lockout state machine backed by a key/value store.
pub struct AuthGuard {
    store: Arc<dyn KeyValueStore>,
    policy: LockoutPolicy,
    secret: SecretDigest,
    persisted: AuthState,
    session: SessionFlags,
}

impl AuthGuard {
    /// Restores the attempt counter and deadline from the store.
    ///
    /// Missing, corrupt, or negative values read as zero.
    pub fn load(store: Arc<dyn KeyValueStore>, secret: &str, policy: LockoutPolicy) -> Self {
        let failed_attempts: u32 = read_json(store.as_ref(), keys::FAILED_ATTEMPTS).unwrap_or(0);
        let lockout_until: i64 = read_json(store.as_ref(), keys::LOCKOUT_UNTIL)
            .filter(|v: &i64| *v >= 0)
            .unwrap_or(0);

        Self {
            store,
            policy,
            secret: SecretDigest::of(secret),
            persisted: AuthState {
                failed_attempts,
                lockout_until,
            },
            session: SessionFlags::default(),
        }
    }

    pub fn auth_state(&self) -> AuthState {
        self.persisted
    }

    pub fn session(&self) -> SessionFlags {
        self.session
    }

    pub fn policy(&self) -> LockoutPolicy {
        self.policy
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.policy
            .max_attempts
            .saturating_sub(self.persisted.failed_attempts)
    }

    /// Re-derives the status for the periodic timer. Never writes the store.
    pub fn tick(&self, now_ms: i64) -> AuthStatus {
        self.status(now_ms)
    }

    fn persist(&mut self, next: AuthState) -> Result<(), AuthError> {
        self.store.set_many(&[
            (keys::FAILED_ATTEMPTS, encode_json(&next.failed_attempts)?),
            (keys::LOCKOUT_UNTIL, encode_json(&next.lockout_until)?),
        ])?;
        self.persisted = next;
        Ok(())
    }

    fn enter_edit(&mut self) {
        self.session.is_edit_mode = true;
        self.session.challenge_open = false;
    }
}

impl AuthGuardTrait for AuthGuard {
    fn state(&self, now_ms: i64) -> GuardState {
        if is_locked(now_ms, self.persisted.lockout_until) {
            GuardState::Locked
        } else if self.session.is_edit_mode {
            GuardState::Editing
        } else {
            GuardState::ReadOnly
        }
    }

    fn status(&self, now_ms: i64) -> AuthStatus {
        AuthStatus {
            state: self.state(now_ms),
            failed_attempts: self.persisted.failed_attempts,
            attempts_remaining: self.attempts_remaining(),
            lockout_until: self.persisted.lockout_until,
            remaining_ms: self.remaining_lockout_ms(now_ms),
            is_authorized: self.session.is_authorized,
            is_edit_mode: self.session.is_edit_mode,
            challenge_open: self.session.challenge_open,
        }
    }

    /// Refused while locked. Otherwise enters edit mode directly when already
    /// authorized this session, or opens the credential challenge.
    fn request_edit(&mut self, now_ms: i64) -> EditRequest {
        if let Some(remaining_ms) = self.remaining_lockout_ms(now_ms) {
            return EditRequest::Locked { remaining_ms };
        }
        if self.session.is_authorized {
            self.enter_edit();
            return EditRequest::Entered;
        }
        self.session.challenge_open = true;
        EditRequest::ChallengeRequired
    }

    /// Evaluates a secret.
    ///
    /// While locked nothing is evaluated and no attempt is consumed. An
    /// already authorized session re-enters edit mode without evaluating. A
    /// match clears the counter and deadline; a miss increments the counter
    /// and, on reaching the threshold, sets the deadline to
    /// `now + lockout duration`.
    fn submit_password(&mut self, secret: &str, now_ms: i64) -> Result<PasswordOutcome, AuthError> {
        if let Some(remaining_ms) = self.remaining_lockout_ms(now_ms) {
            return Ok(PasswordOutcome::StillLocked { remaining_ms });
        }
        if self.session.is_authorized {
            self.enter_edit();
            return Ok(PasswordOutcome::Accepted);
        }

        if self.secret.matches(secret) {
            self.persist(AuthState::default())?;
            self.session = SessionFlags {
                is_authorized: true,
                is_edit_mode: true,
                challenge_open: false,
            };
            info!("edit mode unlocked");
            return Ok(PasswordOutcome::Accepted);
        }

        let failed_attempts = self
            .persisted
            .failed_attempts
            .saturating_add(1)
            .min(self.policy.max_attempts);

        if failed_attempts >= self.policy.max_attempts {
            let lockout_until = now_ms.saturating_add(self.policy.lockout_duration_ms);
            self.persist(AuthState {
                failed_attempts,
                lockout_until,
            })?;
            self.session.challenge_open = false;
            warn!(failed_attempts, lockout_until, "too many failed attempts, locking edit mode");
            return Ok(PasswordOutcome::LockedOut { lockout_until });
        }

        self.persist(AuthState {
            failed_attempts,
            lockout_until: self.persisted.lockout_until,
        })?;
        warn!(failed_attempts, "wrong edit secret");
        Ok(PasswordOutcome::Rejected {
            failed_attempts,
            attempts_remaining: self.attempts_remaining(),
        })
    }

    /// Leaves edit mode; the session stays authorized.
    fn exit_edit(&mut self) {
        self.session.is_edit_mode = false;
    }

    fn cancel_challenge(&mut self) {
        self.session.challenge_open = false;
    }

    fn remaining_lockout_ms(&self, now_ms: i64) -> Option<i64> {
        if is_locked(now_ms, self.persisted.lockout_until) {
            Some(self.persisted.lockout_until - now_ms)
        } else {
            None
        }
    }
}
