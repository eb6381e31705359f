use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use instancer_shared::{
    ActionKind, ActionResult, ChallengeId, ClientSettings, logout_redirect, settle_action,
    wait_for_status,
};

use crate::{api, dom, storage};

/// Attach every page listener. Elements missing from the page are skipped.
pub fn bind_all(document: &Document, settings: ClientSettings) {
    let settings = Rc::new(settings);
    bind_logout(document);
    for kind in ActionKind::ALL {
        for button in dom::elements_by_class(document, kind.button_class()) {
            bind_action_button(button, kind, Rc::clone(&settings));
        }
    }
    for button in dom::elements_by_class(document, dom::CONNECT_BUTTON_CLASS) {
        bind_connect_button(button);
    }
    for close in dom::elements_by_class(document, dom::ALERT_CLOSE_CLASS) {
        dom::on_click(&close, |_| dom::hide_alert());
    }
}

fn bind_logout(document: &Document) {
    let Some(button) = document.get_element_by_id(dom::LOGOUT_BUTTON_ID) else {
        return;
    };
    dom::on_click(&button, |_| {
        spawn_local(async {
            match api::logout().await {
                Ok(resp) => match logout_redirect(&resp) {
                    Some(home) => {
                        storage::clear_auth_token();
                        dom::navigate(home);
                    }
                    None => web_sys::console::info_1(
                        &format!("logout rejected (code {})", resp.code).into(),
                    ),
                },
                Err(e) => web_sys::console::warn_1(&format!("logout failed: {e}").into()),
            }
        });
    });
}

fn bind_action_button(button: Element, kind: ActionKind, settings: Rc<ClientSettings>) {
    let target = button.clone();
    dom::on_click(&target, move |_| {
        // Anchors ignore `disabled`, so a busy button must drop repeat clicks itself.
        if dom::is_disabled(&button) {
            return;
        }
        dom::hide_alert();
        dom::set_loading(&button);

        let Some(challenge_id) = dom::challenge_id_of(&button) else {
            web_sys::console::warn_1(
                &format!("{kind} button without challenge id: #{}", button.id()).into(),
            );
            dom::show_alert();
            dom::restore_button(&button, kind);
            return;
        };

        let button = button.clone();
        let settings = Rc::clone(&settings);
        spawn_local(async move {
            match run_action(kind, &challenge_id, &settings).await {
                ActionResult::Reload => dom::reload(),
                ActionResult::Alert => {
                    dom::show_alert();
                    dom::restore_button(&button, kind);
                }
            }
        });
    });
}

async fn run_action(
    kind: ActionKind,
    challenge_id: &ChallengeId,
    settings: &ClientSettings,
) -> ActionResult {
    let started = js_sys::Date::now();
    let response = api::post_action(kind, challenge_id).await;
    match &response {
        Ok(resp) if !resp.is_success() => web_sys::console::warn_1(
            &format!("{kind} {challenge_id} answered code {}", resp.code).into(),
        ),
        Err(e) => web_sys::console::warn_1(&format!("{kind} {challenge_id} failed: {e}").into()),
        Ok(_) => {}
    }

    TimeoutFuture::new(settings.min_loading_ms).await;

    let policy = settings.poll_policy();
    let result = settle_action(
        kind,
        response,
        settings.legacy_success_default,
        |target| async move {
            wait_for_status(
                policy,
                &target,
                move || async move {
                    let status = api::fetch_status(challenge_id).await;
                    if let Err(e) = &status {
                        web_sys::console::warn_1(
                            &format!("status poll for {challenge_id} failed: {e}").into(),
                        );
                    }
                    status
                },
                TimeoutFuture::new,
            )
            .await
        },
    )
    .await;

    web_sys::console::info_1(
        &format!(
            "{kind} {challenge_id} settled as {result:?} after {}ms",
            (js_sys::Date::now() - started).round()
        )
        .into(),
    );
    result
}

fn bind_connect_button(button: Element) {
    let target = button.clone();
    dom::on_click(&target, move |_| {
        let Some(challenge_id) = dom::challenge_id_of(&button) else {
            web_sys::console::warn_1(
                &format!("connect button without challenge id: #{}", button.id()).into(),
            );
            return;
        };
        dom::navigate(&challenge_id.detail_path());
    });
}
