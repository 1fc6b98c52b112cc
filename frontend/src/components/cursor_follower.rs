use yew::prelude::*;

use crate::hooks::pointer::use_cursor;

/// Custom cursor dot that grows over links and buttons.
#[function_component(CursorFollower)]
pub fn cursor_follower() -> Html {
    let cursor = use_cursor();

    html! {
        <div class="cursor-follower" style={cursor.wrapper_style()} aria-hidden="true">
            <div class="cursor-dot" style={cursor.dot_style()}></div>
        </div>
    }
}
