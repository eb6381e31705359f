use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::{DeserializeOwned, IgnoredAny};

use instancer_shared::{
    ActionKind, ActionResponse, ApiEnvelope, ChallengeId, ChallengeRequest, ChallengeStatus,
    ClientError, auth_headers, parse_envelope,
};

use crate::storage;

const LOGOUT_URL: &str = "/api/auth/logout";

fn with_auth(mut builder: RequestBuilder) -> RequestBuilder {
    let token = storage::auth_token();
    for (name, value) in auth_headers(token.as_deref()) {
        builder = builder.header(name, &value);
    }
    builder
}

async fn read_envelope<T: DeserializeOwned>(resp: Response) -> Result<ApiEnvelope<T>, ClientError> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    parse_envelope(status, &body)
}

/// End the server session. Sent without credentials; the session cookie is enough.
pub async fn logout() -> Result<ApiEnvelope<IgnoredAny>, ClientError> {
    let resp = Request::get(LOGOUT_URL)
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    read_envelope(resp).await
}

/// POST a start/leave/join request. `data` is only meaningful for start.
pub async fn post_action(
    kind: ActionKind,
    challenge_id: &ChallengeId,
) -> Result<ActionResponse, ClientError> {
    let body = ChallengeRequest {
        challenge_id: challenge_id.clone(),
    };
    let resp = with_auth(Request::post(&kind.endpoint()))
        .json(&body)
        .map_err(|e| ClientError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    read_envelope(resp).await
}

pub async fn fetch_status(
    challenge_id: &ChallengeId,
) -> Result<ApiEnvelope<ChallengeStatus>, ClientError> {
    let resp = with_auth(Request::get(&challenge_id.status_path()))
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    read_envelope(resp).await
}
