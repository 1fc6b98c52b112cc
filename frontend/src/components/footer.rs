use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::marquee::Marquee;
use crate::components::scroll_reveal::ScrollReveal;
use crate::Route;

const COLUMNS: &[(&str, &[(Route, &str)])] = &[
    (
        "Platform",
        &[
            (Route::Create, "Studio"),
            (Route::Gallery, "Gallery"),
            (Route::Features, "Features"),
            (Route::Pricing, "Pricing"),
            (Route::ApiDocs, "API"),
            (Route::Integrations, "Integrations"),
            (Route::Enterprise, "Enterprise"),
        ],
    ),
    (
        "Resources",
        &[
            (Route::Docs, "Documentation"),
            (Route::Tutorials, "Tutorials"),
            (Route::Blog, "Blog"),
            (Route::Changelog, "Changelog"),
            (Route::Status, "Status"),
        ],
    ),
    (
        "Company",
        &[(Route::About, "About"), (Route::Careers, "Careers"), (Route::Press, "Press"), (Route::Contact, "Contact")],
    ),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().format("%Y").to_string();

    html! {
        <footer class="site-footer">
            <Marquee speed={60.0} class="footer-marquee">
                <span class="footer-word">{"Create"}</span>
                <span class="footer-word">{"Imagine"}</span>
                <span class="footer-word">{"Generate"}</span>
                <span class="footer-word">{"Inspire"}</span>
            </Marquee>
            <ScrollReveal class="footer-grid">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="nav-logo">{"MATTR"}</Link<Route>>
                    <p>{"AI image generation for people who care about the details."}</p>
                </div>
                { for COLUMNS.iter().map(|(title, links)| html! {
                    <div class="footer-column" key={*title}>
                        <h4>{ *title }</h4>
                        <ul>
                            { for links.iter().map(|(route, label)| html! {
                                <li><Link<Route> to={route.clone()}>{ *label }</Link<Route>></li>
                            }) }
                        </ul>
                    </div>
                }) }
            </ScrollReveal>
            <p class="footer-legal">{ format!("© {year} MATTR. All rights reserved.") }</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_footer_link_resolves() {
        let linked: Vec<&Route> = COLUMNS.iter().flat_map(|(_, links)| links.iter().map(|(route, _)| route)).collect();
        for route in &linked {
            assert_eq!(Route::recognize(&route.to_path()).as_ref(), Some(*route));
        }
        for route in [Route::Docs, Route::Tutorials, Route::Integrations, Route::Enterprise, Route::Press] {
            assert!(linked.contains(&&route), "{:?} missing from footer", route);
        }
    }
}
