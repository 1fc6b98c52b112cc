use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::prelude::*;

use crate::components::animated_text::{AnimatedHeading, SplitText, TextReveal};
use crate::components::footer::Footer;
use crate::components::scroll_reveal::{ScrollReveal, StaggerChildren};
use crate::data::{search_docs, POPULAR_ARTICLES};
use crate::motion::reveal::Direction;
use crate::Route;

#[function_component(Docs)]
pub fn docs() -> Html {
    use_title("Documentation - MATTR".to_string());
    let query = use_state_eq(String::new);
    let sections = search_docs(&query);

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    html! {
        <div class="docs-page">
            <section class="page-hero">
                <h1><SplitText text="Documentation" /></h1>
                <TextReveal class="section-lead" text="Everything you need to go from first prompt to production." delay={400} />
                <ScrollReveal delay={500}>
                    <input
                        class="search-input"
                        type="search"
                        placeholder="Search the docs"
                        value={(*query).clone()}
                        {oninput}
                    />
                </ScrollReveal>
            </section>

            <section class="section doc-sections">
                if sections.is_empty() {
                    <ScrollReveal direction={Direction::Blur} class="empty-state">
                        <p>{ format!("Nothing matches \"{}\".", query.trim()) }</p>
                    </ScrollReveal>
                }
                { for sections.iter().enumerate().map(|(i, (section, articles))| html! {
                    <ScrollReveal key={section.title} delay={(i as u32 % 2) * 100} class="doc-section">
                        <h3>{ section.title }</h3>
                        <p>{ section.blurb }</p>
                        <ul>
                            { for articles.iter().map(|article| html! { <li><a href="#">{ *article }</a></li> }) }
                        </ul>
                    </ScrollReveal>
                }) }
            </section>

            <section class="section popular-articles">
                <AnimatedHeading class="section-title">{"Popular articles"}</AnimatedHeading>
                <StaggerChildren class="article-list" direction={Direction::Left}>
                    { for POPULAR_ARTICLES.iter().map(|(title, section, minutes)| html! {
                        <a href="#" class="article-row">
                            <span>{ *title }</span>
                            <span class="article-meta">{ format!("{} · {} min read", section, minutes) }</span>
                        </a>
                    }) }
                </StaggerChildren>
            </section>

            <ScrollReveal class="section docs-cta" direction={Direction::Scale}>
                <h2>{"Prefer reading the reference?"}</h2>
                <Link<Route> to={Route::ApiDocs} classes="btn btn-primary">{"Open the API docs"}</Link<Route>>
            </ScrollReveal>

            <Footer />
        </div>
    }
}
