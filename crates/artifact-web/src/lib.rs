pub mod fetch;
pub mod runner;

pub use runner::SessionRunner;

use std::cell::RefCell;

use artifact_engine::{Language, PlayerAction, SessionConfig};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SessionRunner>> = RefCell::new(None);
}

/// Run `f` against the live session. Calls before `session_init` (or after
/// the page drops the module) are ignored.
fn with_runner<R>(f: impl FnOnce(&mut SessionRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("session not initialized, call session_init() first");
                None
            }
        }
    })
}

fn push(action: PlayerAction) {
    with_runner(|r| r.push_action(action));
}

/// Today's date as `YYYY-MM-DD` from the browser clock.
fn today() -> String {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    iso.split('T').next().unwrap_or_default().to_string()
}

#[wasm_bindgen]
pub fn session_init(config_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let json = if config_json.trim().is_empty() { "{}" } else { config_json };
    let mut config =
        SessionConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    if config.today == SessionConfig::default().today {
        config.today = today();
    }

    let mut runner = SessionRunner::new(config);
    runner.init();
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("artifact-quest: initialized");
    Ok(())
}

/// Advance the session and send whatever calls it issued. Each reply is
/// delivered back on a later microtask.
#[wasm_bindgen]
pub fn session_tick(dt: f32) {
    let Some(calls) = with_runner(|r| r.tick(dt)) else {
        return;
    };
    for call in calls {
        wasm_bindgen_futures::spawn_local(async move {
            let reply = fetch::post(&call.request).await;
            if let Err(e) = &reply {
                log::warn!("{:?} call failed: {}", call.purpose, e);
            }
            with_runner(|r| r.deliver(call.ticket, reply));
        });
    }
}

#[wasm_bindgen]
pub fn session_connect_wallet() {
    push(PlayerAction::ConnectWallet);
}

#[wasm_bindgen]
pub fn session_set_guess(text: &str) {
    push(PlayerAction::SetGuess(text.to_string()));
}

#[wasm_bindgen]
pub fn session_submit() {
    push(PlayerAction::Submit);
}

#[wasm_bindgen]
pub fn session_retry() {
    push(PlayerAction::Retry);
}

#[wasm_bindgen]
pub fn session_claim() {
    push(PlayerAction::Claim);
}

#[wasm_bindgen]
pub fn session_new_round() {
    push(PlayerAction::NewRound);
}

#[wasm_bindgen]
pub fn session_change_language(code: &str) -> Result<(), JsValue> {
    let lang: Language = code.parse().map_err(|e: String| JsValue::from_str(&e))?;
    push(PlayerAction::ChangeLanguage(lang));
    Ok(())
}

#[wasm_bindgen]
pub fn session_toggle_leaderboard() {
    push(PlayerAction::ToggleLeaderboard);
}

#[wasm_bindgen]
pub fn session_teardown() {
    with_runner(|r| r.teardown());
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_view_json() -> String {
    with_runner(|r| r.view_json()).unwrap_or_else(|| "{}".to_string())
}

#[wasm_bindgen]
pub fn get_game_events_ptr() -> *const f32 {
    with_runner(|r| r.game_events_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_game_events_len() -> u32 {
    with_runner(|r| r.game_events_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_event_floats() -> u32 {
    artifact_engine::GameEvent::FLOATS as u32
}
