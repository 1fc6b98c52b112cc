use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::scroll::{use_is_scrolled, use_scroll_progress};
use crate::Route;

const LINKS: &[(Route, &str)] = &[
    (Route::Features, "Features"),
    (Route::Gallery, "Gallery"),
    (Route::Pricing, "Pricing"),
    (Route::Blog, "Blog"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_is_scrolled();
    let progress = use_scroll_progress();
    let menu_open = use_state(|| false);
    let current = use_route::<Route>();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <div class="nav-progress" style={format!("transform: scaleX({progress});")} aria-hidden="true" />
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"MATTR"}
                </Link<Route>>

                <button
                    class="burger-menu"
                    aria-label="Toggle menu"
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for LINKS.iter().map(|(route, label)| {
                        let active = current.as_ref() == Some(route);
                        html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route>
                                    to={route.clone()}
                                    classes={classes!("nav-link", active.then_some("active"))}
                                >
                                    { *label }
                                </Link<Route>>
                            </div>
                        }
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Auth} classes="nav-link">
                            {"Sign in"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Create} classes="nav-cta">
                            {"Start Creating"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}
