use web_sys::Document;
use yew::prelude::*;

use crate::hooks::Banner;

/// Banner styling, injected into the document head at most once.
const NOTIFICATION_CSS: &str = "
    .notification {
        position: fixed;
        top: 20px;
        right: 20px;
        padding: 1rem 1.5rem;
        border-radius: 6px;
        color: white;
        font-weight: 500;
        z-index: 2000;
        animation: slideInRight 0.3s ease;
    }

    .notification-success {
        background-color: #10b981;
    }

    .notification-error {
        background-color: #ef4444;
    }

    .notification-info {
        background-color: #2563eb;
    }

    .notification-warning {
        background-color: #f59e0b;
    }

    @keyframes slideInRight {
        from {
            opacity: 0;
            transform: translateX(100px);
        }
        to {
            opacity: 1;
            transform: translateX(0);
        }
    }
";

/// Ensure the shared banner stylesheet exists in the document exactly
/// once. Check-then-insert is safe here: handlers run one at a time on
/// the browser's event loop.
pub fn ensure_notification_styles(document: &Document) {
    let already_present = document
        .query_selector("style[data-notification]")
        .ok()
        .flatten()
        .is_some();
    if already_present {
        return;
    }

    let Some(head) = document.head() else {
        return;
    };
    if let Ok(style) = document.create_element("style") {
        let _ = style.set_attribute("data-notification", "true");
        style.set_text_content(Some(NOTIFICATION_CSS));
        let _ = head.append_child(&style);
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationHostProps {
    pub banners: Vec<Banner>,
}

/// Renders the live banner stack. Exiting banners replay the entry
/// animation in reverse for the 300ms before removal.
#[function_component(NotificationHost)]
pub fn notification_host(props: &NotificationHostProps) -> Html {
    html! {
        <>
            {for props.banners.iter().map(|banner| {
                let class = classes!(
                    "notification",
                    banner.notification.severity.css_class(),
                );
                let style = banner
                    .exiting
                    .then_some("animation: slideInRight 0.3s ease reverse");

                html! {
                    <div key={banner.id.to_string()} {class} {style}>
                        {&banner.notification.message}
                    </div>
                }
            })}
        </>
    }
}
