use gloo::dialogs;
use gloo::timers::future::TimeoutFuture;
use shared::{Notification, Severity};
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

/// Delay between the success notification and the simulated redirect.
pub const LOGOUT_REDIRECT_DELAY_MS: u32 = 1_000;

pub const LOGOUT_CONFIRM_PROMPT: &str = "¿Estás seguro de que deseas cerrar sesión?";
pub const LOGOUT_SUCCESS_MESSAGE: &str = "Sesión cerrada correctamente";
pub const LOGOUT_REDIRECT_MESSAGE: &str = "Redireccionando a página de login...";

/// Synchronous user-decision capability. Injected so the logout flow
/// can be exercised without real dialogs.
pub trait UserPrompt {
    fn confirm(&self, message: &str) -> bool;
    fn acknowledge(&self, message: &str);
}

/// Blocking browser dialogs. Nothing else runs until they resolve.
#[derive(Clone, Copy, Default)]
pub struct BrowserPrompt;

impl UserPrompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        dialogs::confirm(message)
    }

    fn acknowledge(&self, message: &str) {
        dialogs::alert(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    Confirmed,
    Declined,
}

/// Logout flow: ask for confirmation, raise the success notification,
/// then surface the simulated redirect after a fixed delay. Declining
/// is a no-op.
pub fn logout<P>(prompt: P, notify: &Callback<Notification>) -> LogoutOutcome
where
    P: UserPrompt + 'static,
{
    if !prompt.confirm(LOGOUT_CONFIRM_PROMPT) {
        return LogoutOutcome::Declined;
    }

    notify.emit(Notification::new(LOGOUT_SUCCESS_MESSAGE, Severity::Success));

    spawn_local(async move {
        TimeoutFuture::new(LOGOUT_REDIRECT_DELAY_MS).await;
        // A real deployment would navigate to the login page here.
        prompt.acknowledge(LOGOUT_REDIRECT_MESSAGE);
    });

    LogoutOutcome::Confirmed
}
