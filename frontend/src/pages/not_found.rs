use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::prelude::*;

use crate::components::animated_text::TextScramble;
use crate::components::magnetic_button::MagneticButton;
use crate::components::scroll_reveal::ScrollReveal;
use crate::motion::reveal::Direction;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_title("Page not found - MATTR".to_string());
    let navigator = use_navigator();

    let go_home = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    html! {
        <div class="not-found">
            <h1 class="not-found-code"><TextScramble text="404" speed={60} /></h1>
            <ScrollReveal direction={Direction::Blur} delay={300}>
                <p>{"This page drifted out of frame."}</p>
                <MagneticButton class="btn btn-primary" onclick={go_home}>{"Back to home"}</MagneticButton>
            </ScrollReveal>
        </div>
    }
}
