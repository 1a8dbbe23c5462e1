use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::services::date_utils::current_datetime_text;

/// Clock tick interval.
pub const CLOCK_TICK_MS: u32 = 1_000;

/// Hook producing the live header clock text.
///
/// Ticks once immediately (the initial state) and then every second.
/// The `Interval` handle is owned by the effect and dropped on unmount,
/// which cancels the schedule instead of leaking it.
#[hook]
pub fn use_clock() -> String {
    let now_text = use_state(current_datetime_text);

    {
        let now_text = now_text.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(CLOCK_TICK_MS, move || {
                now_text.set(current_datetime_text());
            });
            move || drop(interval)
        });
    }

    (*now_text).clone()
}
