mod components;
mod hooks;
mod services;

use gloo::console;
use yew::prelude::*;

use components::notifications::ensure_notification_styles;
use components::{Clock, NotificationHost, TransactionTable, TransferForm};
use hooks::use_notifier;
use services::{export, page, session};

#[function_component(App)]
fn app() -> Html {
    // Static illustration data; a real deployment would fetch this.
    let movements = use_state(shared::sample_movements);
    let (banners, notify) = use_notifier();

    let on_export = Callback::from(move |_| {
        let document = gloo::utils::document();
        if let Err(error) = export::export_transactions(&document) {
            console::error!(format!("Export failed: {error:#}"));
        }
    });

    // One-time page wiring: banner styles, fade-in, device class, and
    // the document-level listeners. Handles are dropped on unmount.
    {
        let notify = notify.clone();
        use_effect_with((), move |_| {
            let document = gloo::utils::document();

            ensure_notification_styles(&document);
            page::run_fade_in(&document);

            let user_agent = gloo::utils::window()
                .navigator()
                .user_agent()
                .unwrap_or_default();
            page::apply_device_class(&document, &user_agent);

            let mut listeners = page::init_smooth_scroll(&document);
            let on_logout = Callback::from(move |_| {
                let _ = session::logout(session::BrowserPrompt, &notify);
            });
            listeners.extend(page::init_logout_buttons(&document, on_logout));

            console::log!("BancaMobile - Página Web de Demostración");
            console::log!("Versión 1.0 - demo sin backend, datos de ilustración");

            move || drop(listeners)
        });
    }

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"BancaMobile"}</h1>
                    <Clock />
                    <nav class="main-nav">
                        <a href="#movimientos">{"Movimientos"}</a>
                        <a href="#transferencias">{"Transferencias"}</a>
                    </nav>
                    <button id="logout" class="btn logout-btn">{"Cerrar sesión"}</button>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <TransactionTable
                        movements={(*movements).clone()}
                        on_export={on_export}
                    />
                    <TransferForm on_notify={notify.clone()} />
                </div>
            </main>

            <NotificationHost banners={banners} />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
