use serde::{Deserialize, Serialize};

/// Attempt-tracking values that survive restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub failed_attempts: u32,
    /// Epoch milliseconds; 0 means no lockout was ever set.
    pub lockout_until: i64,
}

/// Flags that only live for the current session and always start cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionFlags {
    pub is_authorized: bool,
    pub is_edit_mode: bool,
    pub challenge_open: bool,
}

/// Externally visible guard state, derived from the flags and the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardState {
    ReadOnly,
    Editing,
    Locked,
}

/// Outcome of `request_edit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EditRequest {
    /// Already authorized this session; now editing.
    Entered,
    /// The credential prompt is open and waiting for a secret.
    ChallengeRequired,
    /// Submissions are refused until the deadline passes.
    Locked { remaining_ms: i64 },
}

/// Outcome of `submit_password`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PasswordOutcome {
    Accepted,
    Rejected {
        failed_attempts: u32,
        attempts_remaining: u32,
    },
    /// This submission triggered a fresh lockout.
    LockedOut { lockout_until: i64 },
    /// Refused without evaluation; no attempt was consumed.
    StillLocked { remaining_ms: i64 },
}

/// Snapshot handed to the presentation layer on every render or tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    pub state: GuardState,
    pub failed_attempts: u32,
    pub attempts_remaining: u32,
    pub lockout_until: i64,
    pub remaining_ms: Option<i64>,
    pub is_authorized: bool,
    pub is_edit_mode: bool,
    pub challenge_open: bool,
}
