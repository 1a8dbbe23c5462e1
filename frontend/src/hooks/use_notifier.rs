use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use shared::Notification;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::notifications::ensure_notification_styles;

/// How long a banner stays fully visible.
pub const NOTIFICATION_DISPLAY_MS: u32 = 3_000;

/// Duration of the reverse entry animation before removal.
pub const NOTIFICATION_EXIT_MS: u32 = 300;

/// One live banner. `exiting` flips when the reverse animation starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub id: Uuid,
    pub notification: Notification,
    pub exiting: bool,
}

pub enum BannersAction {
    Push(Banner),
    BeginExit(Uuid),
    Remove(Uuid),
}

/// Reducer-managed banner list. Each scheduled callback dispatches an
/// action against the current state, so overlapping notifications can
/// finish in any order without clobbering each other.
#[derive(Clone, Default, PartialEq)]
pub struct Banners {
    pub items: Vec<Banner>,
}

impl Reducible for Banners {
    type Action = BannersAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            BannersAction::Push(banner) => items.push(banner),
            BannersAction::BeginExit(id) => {
                if let Some(banner) = items.iter_mut().find(|b| b.id == id) {
                    banner.exiting = true;
                }
            }
            BannersAction::Remove(id) => items.retain(|b| b.id != id),
        }
        Rc::new(Banners { items })
    }
}

/// Timed dismissal for one banner: reverse animation after the display
/// window, removal once the animation has played out.
async fn run_dismissal<F>(dispatch: F, id: Uuid)
where
    F: Fn(BannersAction),
{
    TimeoutFuture::new(NOTIFICATION_DISPLAY_MS).await;
    dispatch(BannersAction::BeginExit(id));
    TimeoutFuture::new(NOTIFICATION_EXIT_MS).await;
    dispatch(BannersAction::Remove(id));
}

/// Hook behind the notifier: returns the live banners plus the
/// `notify` callback handed to anything that raises them.
///
/// Every call ensures the shared banner stylesheet exists, appends the
/// banner, and schedules its two-step dismissal (display window, then
/// exit animation, then removal).
#[hook]
pub fn use_notifier() -> (Vec<Banner>, Callback<Notification>) {
    let banners = use_reducer(Banners::default);

    let notify = {
        let dispatcher = banners.dispatcher();
        Callback::from(move |notification: Notification| {
            ensure_notification_styles(&gloo::utils::document());

            let id = Uuid::new_v4();
            dispatcher.dispatch(BannersAction::Push(Banner {
                id,
                notification,
                exiting: false,
            }));

            let dispatcher = dispatcher.clone();
            spawn_local(run_dismissal(
                move |action| dispatcher.dispatch(action),
                id,
            ));
        })
    };

    (banners.items.clone(), notify)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Severity;

    fn banner(message: &str) -> Banner {
        Banner {
            id: Uuid::new_v4(),
            notification: Notification::new(message, Severity::Info),
            exiting: false,
        }
    }

    #[test]
    fn test_push_appends_banner() {
        let state = Rc::new(Banners::default());
        let state = state.reduce(BannersAction::Push(banner("uno")));
        let state = state.reduce(BannersAction::Push(banner("dos")));
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[0].notification.message, "uno");
        assert!(!state.items[0].exiting);
    }

    #[test]
    fn test_begin_exit_marks_only_target() {
        let first = banner("uno");
        let second = banner("dos");
        let first_id = first.id;
        let state = Rc::new(Banners {
            items: vec![first, second],
        });
        let state = state.reduce(BannersAction::BeginExit(first_id));
        assert!(state.items[0].exiting);
        assert!(!state.items[1].exiting);
    }

    #[test]
    fn test_remove_is_order_independent() {
        let first = banner("uno");
        let second = banner("dos");
        let second_id = second.id;
        let state = Rc::new(Banners {
            items: vec![first, second],
        });
        // The newer banner can finish first without disturbing the older one.
        let state = state.reduce(BannersAction::Remove(second_id));
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].notification.message, "uno");
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let state = Rc::new(Banners {
            items: vec![banner("uno")],
        });
        let state = state.reduce(BannersAction::Remove(Uuid::new_v4()));
        assert_eq!(state.items.len(), 1);
    }
}
