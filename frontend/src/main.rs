use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod data;
mod forms;
mod motion;
mod styles;
mod hooks {
    pub mod dom;
    pub mod visibility;
    pub mod scroll;
    pub mod pointer;
    pub mod timing;
}
mod components {
    pub mod scroll_reveal;
    pub mod animated_text;
    pub mod marquee;
    pub mod magnetic_button;
    pub mod cursor_follower;
    pub mod horizontal_scroll;
    pub mod navigation;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod pricing;
    pub mod features;
    pub mod gallery;
    pub mod create;
    pub mod auth;
    pub mod contact;
    pub mod blog;
    pub mod careers;
    pub mod about;
    pub mod api_docs;
    pub mod changelog;
    pub mod status;
    pub mod docs;
    pub mod tutorials;
    pub mod integrations;
    pub mod enterprise;
    pub mod press;
    pub mod not_found;
}

use components::cursor_follower::CursorFollower;
use components::navigation::Nav;
use pages::{
    about::About,
    api_docs::ApiDocs,
    auth::Auth,
    changelog::Changelog,
    blog::Blog,
    careers::Careers,
    contact::Contact,
    create::Create,
    docs::Docs,
    enterprise::Enterprise,
    features::Features,
    gallery::Gallery,
    home::Home,
    integrations::Integrations,
    not_found::NotFound,
    press::Press,
    pricing::Pricing,
    status::Status,
    tutorials::Tutorials,
};
use styles::GlobalStyles;


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/pricing")]
    Pricing,
    #[at("/features")]
    Features,
    #[at("/gallery")]
    Gallery,
    #[at("/create")]
    Create,
    #[at("/auth")]
    Auth,
    #[at("/contact")]
    Contact,
    #[at("/blog")]
    Blog,
    #[at("/careers")]
    Careers,
    #[at("/about")]
    About,
    #[at("/api-docs")]
    ApiDocs,
    #[at("/changelog")]
    Changelog,
    #[at("/status")]
    Status,
    #[at("/docs")]
    Docs,
    #[at("/tutorials")]
    Tutorials,
    #[at("/integrations")]
    Integrations,
    #[at("/enterprise")]
    Enterprise,
    #[at("/press")]
    Press,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::Features => {
            info!("Rendering Features page");
            html! { <Features /> }
        },
        Route::Gallery => {
            info!("Rendering Gallery page");
            html! { <Gallery /> }
        },
        Route::Create => {
            info!("Rendering Create page");
            html! { <Create /> }
        },
        Route::Auth => {
            info!("Rendering Auth page");
            html! { <Auth /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        },
        Route::Careers => {
            info!("Rendering Careers page");
            html! { <Careers /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::ApiDocs => {
            info!("Rendering ApiDocs page");
            html! { <ApiDocs /> }
        },
        Route::Changelog => {
            info!("Rendering Changelog page");
            html! { <Changelog /> }
        },
        Route::Status => {
            info!("Rendering Status page");
            html! { <Status /> }
        },
        Route::Docs => {
            info!("Rendering Docs page");
            html! { <Docs /> }
        },
        Route::Tutorials => {
            info!("Rendering Tutorials page");
            html! { <Tutorials /> }
        },
        Route::Integrations => {
            info!("Rendering Integrations page");
            html! { <Integrations /> }
        },
        Route::Enterprise => {
            info!("Rendering Enterprise page");
            html! { <Enterprise /> }
        },
        Route::Press => {
            info!("Rendering Press page");
            html! { <Press /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <GlobalStyles />
            if config::cursor_follower_enabled() {
                <CursorFollower />
            }
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", err));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
