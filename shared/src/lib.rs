pub mod action;
pub mod auth;
pub mod challenge;
pub mod envelope;
pub mod error;
pub mod poll;
pub mod settings;

pub use action::{
    ActionResponse, ActionResult, ActionStep, decide_action, is_truthy, logout_redirect,
    settle_action,
};
pub use auth::{AUTH_TOKEN_KEY, auth_headers};
pub use challenge::{ActionKind, ChallengeId, ChallengeRequest, ChallengeStatus};
pub use envelope::{ApiEnvelope, SUCCESS_CODE, parse_envelope};
pub use error::ClientError;
pub use poll::{PollOutcome, PollPolicy, classify_status, wait_for_status};
pub use settings::{ClientSettings, SETTINGS_KEY};
