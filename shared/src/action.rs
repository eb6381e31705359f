use std::future::Future;

use serde_json::Value;

use crate::challenge::{ActionKind, ChallengeStatus};
use crate::envelope::ApiEnvelope;
use crate::error::ClientError;
use crate::poll::PollOutcome;

/// Response to `POST /api/challenge/{start,leave,join}`. `data` is untyped:
/// start answers with a readiness flag, the others with whatever they like.
pub type ActionResponse = ApiEnvelope<Value>;

const HOME_PATH: &str = "/";

/// What the page does once an action has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    /// Reload so the server renders the new instance state.
    Reload,
    /// Show the alert banner and restore the button.
    Alert,
}

/// Next step after the action request has answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionStep {
    Finish(ActionResult),
    /// The instance is not up yet; wait for this status.
    Poll(ChallengeStatus),
}

impl From<PollOutcome> for ActionResult {
    fn from(outcome: PollOutcome) -> Self {
        match outcome {
            PollOutcome::Reached => ActionResult::Reload,
            PollOutcome::Failed | PollOutcome::TimedOut => ActionResult::Alert,
        }
    }
}

/// Browser truthiness of a JSON value: `null`, `false`, `0` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Map an action response to the next step.
///
/// With `legacy_success_default` a non-200 envelope still reloads the page;
/// only a failed start poll alerts.
pub fn decide_action(
    kind: ActionKind,
    response: &ActionResponse,
    legacy_success_default: bool,
) -> ActionStep {
    if !response.is_success() {
        return ActionStep::Finish(if legacy_success_default {
            ActionResult::Reload
        } else {
            ActionResult::Alert
        });
    }
    if kind.may_need_poll() && !response.data.as_ref().is_some_and(is_truthy) {
        return ActionStep::Poll(ChallengeStatus::Running);
    }
    ActionStep::Finish(ActionResult::Reload)
}

/// Settle an action from its request outcome, running `poll` when the
/// backend asks the client to wait.
///
/// A transport or decode error always alerts, so the button is restored.
pub async fn settle_action<P, PFut>(
    kind: ActionKind,
    response: Result<ActionResponse, ClientError>,
    legacy_success_default: bool,
    poll: P,
) -> ActionResult
where
    P: FnOnce(ChallengeStatus) -> PFut,
    PFut: Future<Output = PollOutcome>,
{
    let Ok(response) = response else {
        return ActionResult::Alert;
    };
    match decide_action(kind, &response, legacy_success_default) {
        ActionStep::Finish(result) => result,
        ActionStep::Poll(target) => poll(target).await.into(),
    }
}

/// Where to send the browser after logout, or `None` to stay put.
/// A `Some` also means the stored credential must be cleared.
pub fn logout_redirect<T>(response: &ApiEnvelope<T>) -> Option<&'static str> {
    response.is_success().then_some(HOME_PATH)
}
