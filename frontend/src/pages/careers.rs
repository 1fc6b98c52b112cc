use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::prelude::*;

use crate::components::animated_text::{AnimatedHeading, HighlightReveal, SplitText};
use crate::components::footer::Footer;
use crate::components::marquee::Marquee;
use crate::components::scroll_reveal::{ScrollReveal, StaggerChildren};
use crate::data::{openings_in, ALL, DEPARTMENTS, PERKS};
use crate::motion::reveal::Direction;
use crate::Route;

#[function_component(Careers)]
pub fn careers() -> Html {
    use_title("Careers - MATTR".to_string());
    let department = use_state_eq(|| ALL.to_string());
    let openings = openings_in(&department);

    html! {
        <div class="careers-page">
            <section class="page-hero">
                <h1>
                    <SplitText text="Build the future of " />
                    <HighlightReveal text="creativity" delay={600} />
                </h1>
            </section>

            <Marquee speed={35.0} class="values-marquee">
                <span>{"Craft over speed"}</span>
                <span>{"Ship, then polish"}</span>
                <span>{"Creators first"}</span>
                <span>{"Default to open"}</span>
            </Marquee>

            <StaggerChildren class="perk-grid" direction={Direction::Up}>
                { for PERKS.iter().map(|(title, body)| html! {
                    <div class="perk">
                        <h3>{ *title }</h3>
                        <p>{ *body }</p>
                    </div>
                }) }
            </StaggerChildren>

            <section class="section openings">
                <AnimatedHeading class="section-title">{"Open positions"}</AnimatedHeading>
                <div class="filter-row">
                    { for DEPARTMENTS.iter().map(|d| {
                        let active = *department == *d;
                        let onclick = {
                            let department = department.clone();
                            Callback::from(move |_: MouseEvent| department.set(d.to_string()))
                        };
                        html! { <button class={classes!("chip", active.then_some("active"))} {onclick}>{ *d }</button> }
                    }) }
                </div>
                if openings.is_empty() {
                    <p class="empty-state">{"No openings in this team right now."}</p>
                }
                { for openings.iter().enumerate().map(|(i, job)| html! {
                    <ScrollReveal key={job.title} delay={i as u32 * 60} direction={Direction::Left} distance={30.0} class="opening">
                        <div>
                            <h3>{ job.title }</h3>
                            <span class="opening-meta">{ format!("{} · {} · {}", job.department, job.location, job.kind) }</span>
                        </div>
                        <Link<Route> to={Route::Contact} classes="btn btn-ghost">{"Apply"}</Link<Route>>
                    </ScrollReveal>
                }) }
            </section>

            <Footer />
        </div>
    }
}
