use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::animated_text::{AnimatedHeading, SplitText};
use crate::components::footer::Footer;
use crate::components::scroll_reveal::{ClipReveal, ScrollReveal, StaggerChildren};
use crate::data::{filter_tutorials, TutorialFormat, ALL, FEATURED_TUTORIAL, LEARNING_PATHS, TUTORIAL_CATEGORIES};
use crate::motion::reveal::{ClipEdge, Direction};

#[function_component(Tutorials)]
pub fn tutorials() -> Html {
    use_title("Tutorials - MATTR".to_string());
    let category = use_state_eq(|| ALL.to_string());
    let query = use_state_eq(String::new);
    let tutorials = filter_tutorials(&category, &query);

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    html! {
        <div class="tutorials-page">
            <section class="page-hero">
                <h1><SplitText text="Learn by making" /></h1>
                <ScrollReveal delay={300}>
                    <input
                        class="search-input"
                        type="search"
                        placeholder="Search tutorials"
                        value={(*query).clone()}
                        {oninput}
                    />
                </ScrollReveal>
            </section>

            <ClipReveal edge={ClipEdge::Left} class="featured-tutorial">
                <span class="post-category">{"Featured"}</span>
                <AnimatedHeading>{ FEATURED_TUTORIAL.title }</AnimatedHeading>
                <p>{ FEATURED_TUTORIAL.description }</p>
                <p class="post-meta">{ FEATURED_TUTORIAL.summary() }</p>
            </ClipReveal>

            <div class="filter-row">
                { for TUTORIAL_CATEGORIES.iter().map(|c| {
                    let active = *category == *c;
                    let onclick = {
                        let category = category.clone();
                        Callback::from(move |_: MouseEvent| category.set(c.to_string()))
                    };
                    html! { <button class={classes!("chip", active.then_some("active"))} {onclick}>{ *c }</button> }
                }) }
            </div>

            <section class="tutorial-grid">
                if tutorials.is_empty() {
                    <p class="empty-state">{"No tutorials match those filters."}</p>
                }
                { for tutorials.iter().enumerate().map(|(i, tutorial)| html! {
                    <ScrollReveal key={tutorial.title} delay={(i as u32 % 3) * 80} threshold={0.25} class="tutorial-card">
                        <span class={classes!("tutorial-format", (tutorial.format == TutorialFormat::Video).then_some("video"))}>
                            { tutorial.category }
                        </span>
                        <h3>{ tutorial.title }</h3>
                        <p>{ tutorial.description }</p>
                        <p class="post-meta">{ tutorial.summary() }</p>
                    </ScrollReveal>
                }) }
            </section>

            <section class="section learning-paths">
                <AnimatedHeading class="section-title">{"Learning paths"}</AnimatedHeading>
                <StaggerChildren class="path-grid" direction={Direction::Scale} stagger={120}>
                    { for LEARNING_PATHS.iter().map(|path| html! {
                        <div class="path-card" style={format!("border-top: 3px solid {};", path.color)}>
                            <h3>{ path.title }</h3>
                            <p>{ path.description }</p>
                            <span class="path-meta">{ format!("{} lessons · {} hours", path.lessons, path.hours) }</span>
                        </div>
                    }) }
                </StaggerChildren>
            </section>

            <Footer />
        </div>
    }
}
