use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::prelude::*;

use crate::components::animated_text::{AnimatedHeading, SplitText, WordReveal};
use crate::components::footer::Footer;
use crate::components::scroll_reveal::{ScrollReveal, StaggerChildren};
use crate::data::{filter_integrations, IntegrationStatus, ALL, INTEGRATION_CATEGORIES, INTEGRATION_FEATURES};
use crate::motion::reveal::Direction;
use crate::Route;

#[function_component(Integrations)]
pub fn integrations() -> Html {
    use_title("Integrations - MATTR".to_string());
    let category = use_state_eq(|| ALL.to_string());
    let query = use_state_eq(String::new);
    let integrations = filter_integrations(&category, &query);

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    html! {
        <div class="integrations-page">
            <section class="page-hero">
                <h1><SplitText text="Works where you work" /></h1>
                <WordReveal class="section-lead" text="Bring MATTR into the tools your team already uses." />
            </section>

            <section class="section">
                <div class="filter-row">
                    <input
                        class="search-input"
                        type="search"
                        placeholder="Search integrations"
                        value={(*query).clone()}
                        {oninput}
                    />
                    { for INTEGRATION_CATEGORIES.iter().map(|c| {
                        let active = *category == *c;
                        let onclick = {
                            let category = category.clone();
                            Callback::from(move |_: MouseEvent| category.set(c.to_string()))
                        };
                        html! { <button class={classes!("chip", active.then_some("active"))} {onclick}>{ *c }</button> }
                    }) }
                </div>

                <div class="integration-grid">
                    if integrations.is_empty() {
                        <p class="empty-state">{"No integrations match that search."}</p>
                    }
                    { for integrations.iter().enumerate().map(|(i, integration)| {
                        let available = integration.status == IntegrationStatus::Available;
                        html! {
                            <ScrollReveal
                                key={integration.name}
                                delay={(i as u32 % 4) * 60}
                                direction={Direction::Scale}
                                class={classes!("integration-card", (!available).then_some("muted"))}
                            >
                                <div class="integration-head">
                                    <h3>{ integration.name }</h3>
                                    if integration.popular {
                                        <span class="badge">{"Popular"}</span>
                                    }
                                </div>
                                <p>{ integration.description }</p>
                                <span class="integration-status">{ integration.status.label() }</span>
                            </ScrollReveal>
                        }
                    }) }
                </div>
            </section>

            <section class="section">
                <AnimatedHeading class="section-title">{"Build your own"}</AnimatedHeading>
                <StaggerChildren class="feature-grid" direction={Direction::Up}>
                    { for INTEGRATION_FEATURES.iter().map(|(title, body)| html! {
                        <div class="feature-card">
                            <h3>{ *title }</h3>
                            <p>{ *body }</p>
                        </div>
                    }) }
                </StaggerChildren>
                <ScrollReveal delay={200}>
                    <Link<Route> to={Route::ApiDocs} classes="btn btn-ghost">{"Read the API reference"}</Link<Route>>
                </ScrollReveal>
            </section>

            <Footer />
        </div>
    }
}
