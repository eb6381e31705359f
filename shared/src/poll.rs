use std::future::Future;

use crate::challenge::ChallengeStatus;
use crate::envelope::ApiEnvelope;
use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The instance reported the target status.
    Reached,
    /// The instance settled in a state the target can no longer follow from.
    Failed,
    /// The attempt budget ran out first.
    TimedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval_ms: u32,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval_ms: 2_000,
            max_attempts: 150,
        }
    }
}

/// Decide whether one status response ends the poll.
///
/// The target is checked before the failure states, so waiting for
/// `stopped` terminates with `Reached`.
pub fn classify_status(
    response: &ApiEnvelope<ChallengeStatus>,
    target: &ChallengeStatus,
) -> Option<PollOutcome> {
    let status = response.success_data()?;
    if status == target {
        Some(PollOutcome::Reached)
    } else if status.is_terminal_failure() {
        Some(PollOutcome::Failed)
    } else {
        None
    }
}

/// Poll until `target` is reported, a terminal failure state shows up, or
/// `policy.max_attempts` fetches have been made.
///
/// Every attempt first waits `policy.interval_ms` through `delay`. Fetch
/// errors count as an attempt and are retried.
pub async fn wait_for_status<F, Fut, D, DFut>(
    policy: PollPolicy,
    target: &ChallengeStatus,
    mut fetch: F,
    mut delay: D,
) -> PollOutcome
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<ApiEnvelope<ChallengeStatus>, ClientError>>,
    D: FnMut(u32) -> DFut,
    DFut: Future<Output = ()>,
{
    for _ in 0..policy.max_attempts {
        delay(policy.interval_ms).await;
        let Ok(response) = fetch().await else {
            continue;
        };
        if let Some(outcome) = classify_status(&response, target) {
            return outcome;
        }
    }
    PollOutcome::TimedOut
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use futures::executor::block_on;

    use super::*;

    fn status(code: u16, data: &str) -> Result<ApiEnvelope<ChallengeStatus>, ClientError> {
        Ok(ApiEnvelope::new(code, Some(ChallengeStatus::from(data.to_owned()))))
    }

    /// Runs the poller over a scripted response sequence, returning the
    /// outcome, the number of fetches and the delays requested.
    fn run(
        policy: PollPolicy,
        target: ChallengeStatus,
        script: Vec<Result<ApiEnvelope<ChallengeStatus>, ClientError>>,
    ) -> (PollOutcome, usize, Vec<u32>) {
        let script = RefCell::new(VecDeque::from(script));
        let fetches = Cell::new(0usize);
        let delays = RefCell::new(Vec::new());
        let outcome = block_on(wait_for_status(
            policy,
            &target,
            || {
                fetches.set(fetches.get() + 1);
                let next = script
                    .borrow_mut()
                    .pop_front()
                    .unwrap_or_else(|| status(200, "pending"));
                async move { next }
            },
            |ms| {
                delays.borrow_mut().push(ms);
                async {}
            },
        ));
        (outcome, fetches.get(), delays.into_inner())
    }

    #[test]
    fn pending_pending_stopped_fails_on_third_call() {
        let (outcome, fetches, delays) = run(
            PollPolicy::default(),
            ChallengeStatus::Running,
            vec![
                status(200, "pending"),
                status(200, "pending"),
                status(200, "stopped"),
            ],
        );
        assert_eq!(outcome, PollOutcome::Failed);
        assert_eq!(fetches, 3);
        assert_eq!(delays, vec![2_000, 2_000, 2_000]);
    }

    #[test]
    fn reaches_running() {
        let (outcome, fetches, _) = run(
            PollPolicy::default(),
            ChallengeStatus::Running,
            vec![status(200, "pending"), status(200, "running")],
        );
        assert_eq!(outcome, PollOutcome::Reached);
        assert_eq!(fetches, 2);
    }

    #[test]
    fn pulling_is_terminal() {
        let (outcome, fetches, _) = run(
            PollPolicy::default(),
            ChallengeStatus::Running,
            vec![status(200, "pulling")],
        );
        assert_eq!(outcome, PollOutcome::Failed);
        assert_eq!(fetches, 1);
    }

    #[test]
    fn target_checked_before_failure_states() {
        let (outcome, _, _) = run(
            PollPolicy::default(),
            ChallengeStatus::Stopped,
            vec![status(200, "stopped")],
        );
        assert_eq!(outcome, PollOutcome::Reached);
    }

    #[test]
    fn errors_and_non_200_are_retried() {
        let (outcome, fetches, _) = run(
            PollPolicy::default(),
            ChallengeStatus::Running,
            vec![
                Err(ClientError::Network("offline".into())),
                status(500, "stopped"),
                status(200, "running"),
            ],
        );
        assert_eq!(outcome, PollOutcome::Reached);
        assert_eq!(fetches, 3);
    }

    #[test]
    fn times_out_after_max_attempts() {
        let policy = PollPolicy {
            interval_ms: 50,
            max_attempts: 4,
        };
        let (outcome, fetches, delays) = run(policy, ChallengeStatus::Running, Vec::new());
        assert_eq!(outcome, PollOutcome::TimedOut);
        assert_eq!(fetches, 4);
        assert_eq!(delays, vec![50; 4]);
    }
}
