use yew::prelude::*;

use crate::hooks::use_clock;

/// Live date/time display in the header. Renders its own element, so
/// there is no unguarded lookup of a display node that may not exist.
#[function_component(Clock)]
pub fn clock() -> Html {
    let now_text = use_clock();

    html! {
        <div id="dateTime" class="date-time">{now_text}</div>
    }
}
