use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a hosted challenge, as the backend expects it in request bodies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChallengeId(String);

impl ChallengeId {
    /// Trimmed, non-empty id or `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    /// Legacy markup encodes the id as the third `_`-separated segment of the
    /// element id, e.g. `start_button_42`.
    pub fn from_element_id(element_id: &str) -> Option<Self> {
        element_id.split('_').nth(2).and_then(Self::parse)
    }

    /// Prefer the `data-challenge-id` attribute; fall back to the element id.
    pub fn resolve(data_attr: Option<&str>, element_id: &str) -> Option<Self> {
        data_attr
            .and_then(Self::parse)
            .or_else(|| Self::from_element_id(element_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn detail_path(&self) -> String {
        format!("/challenge/{}", self.0)
    }

    pub fn status_path(&self) -> String {
        format!("/api/challenge/{}/status", self.0)
    }
}

impl fmt::Display for ChallengeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Start,
    Leave,
    Join,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [ActionKind::Start, ActionKind::Leave, ActionKind::Join];

    pub const fn as_str(self) -> &'static str {
        match self {
            ActionKind::Start => "start",
            ActionKind::Leave => "leave",
            ActionKind::Join => "join",
        }
    }

    /// CSS class that marks a button of this kind.
    pub const fn button_class(self) -> &'static str {
        match self {
            ActionKind::Start => "start_button",
            ActionKind::Leave => "leave_button",
            ActionKind::Join => "join_button",
        }
    }

    /// Text the button shows while idle.
    pub const fn label(self) -> &'static str {
        match self {
            ActionKind::Start => "Start",
            ActionKind::Leave => "Leave",
            ActionKind::Join => "Join",
        }
    }

    pub fn endpoint(self) -> String {
        format!("/api/challenge/{}", self.as_str())
    }

    /// Only `start` may answer "not ready yet" and require a status poll.
    pub const fn may_need_poll(self) -> bool {
        matches!(self, ActionKind::Start)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/challenge/{start,leave,join}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeRequest {
    pub challenge_id: ChallengeId,
}

/// Instance state reported by `GET /api/challenge/{id}/status`.
///
/// The backend owns the vocabulary; unknown values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChallengeStatus {
    Running,
    Stopped,
    Pulling,
    Other(String),
}

impl ChallengeStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ChallengeStatus::Running => "running",
            ChallengeStatus::Stopped => "stopped",
            ChallengeStatus::Pulling => "pulling",
            ChallengeStatus::Other(s) => s,
        }
    }

    /// States after which waiting for a start any longer is pointless.
    pub const fn is_terminal_failure(&self) -> bool {
        matches!(self, ChallengeStatus::Stopped | ChallengeStatus::Pulling)
    }
}

impl From<String> for ChallengeStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "running" => ChallengeStatus::Running,
            "stopped" => ChallengeStatus::Stopped,
            "pulling" => ChallengeStatus::Pulling,
            _ => ChallengeStatus::Other(value),
        }
    }
}

impl From<ChallengeStatus> for String {
    fn from(value: ChallengeStatus) -> Self {
        match value {
            ChallengeStatus::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ChallengeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
