use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::animated_text::{AnimatedCounter, AnimatedHeading, SplitText, TextScramble, WordReveal};
use crate::components::footer::Footer;
use crate::components::scroll_reveal::{ClipReveal, ScrollReveal, StaggerChildren};
use crate::data::{MILESTONES, TEAM, VALUES};
use crate::motion::easing::EXPO_OUT;
use crate::motion::reveal::{ClipEdge, Direction};

#[function_component(About)]
pub fn about() -> Html {
    use_title("About - MATTR".to_string());

    html! {
        <div class="about-page">
            <section class="page-hero">
                <h1><SplitText text="We build tools for imagination" /></h1>
                <WordReveal class="section-lead" text="MATTR started as a weekend experiment and became the studio 150 people now show up for every day." />
            </section>

            <section class="section stats-band">
                <ScrollReveal>
                    <TextScramble class="stat-value" text="2021" />
                    <p>{"Founded"}</p>
                </ScrollReveal>
                <ScrollReveal delay={100}>
                    <AnimatedCounter class="stat-value" value={150.0} suffix="+" easing={EXPO_OUT} threshold={0.5} />
                    <p>{"Team members"}</p>
                </ScrollReveal>
                <ScrollReveal delay={200}>
                    <AnimatedCounter class="stat-value" value={12.0} easing={EXPO_OUT} threshold={0.5} />
                    <p>{"Countries"}</p>
                </ScrollReveal>
                <ScrollReveal delay={300}>
                    <AnimatedCounter class="stat-value" value={50.0} prefix="$" suffix="M" easing={EXPO_OUT} threshold={0.5} />
                    <p>{"Raised"}</p>
                </ScrollReveal>
            </section>

            <section class="section values">
                <AnimatedHeading class="section-title">{"What we believe"}</AnimatedHeading>
                <StaggerChildren class="value-grid" stagger={120}>
                    { for VALUES.iter().enumerate().map(|(i, (title, body))| html! {
                        <div class="value-card">
                            <span class="mono">{ format!("{:02}", i + 1) }</span>
                            <h3>{ *title }</h3>
                            <p>{ *body }</p>
                        </div>
                    }) }
                </StaggerChildren>
            </section>

            <section class="section team">
                <AnimatedHeading class="section-title">{"Leadership"}</AnimatedHeading>
                <div class="team-grid">
                    { for TEAM.iter().enumerate().map(|(i, member)| html! {
                        <ScrollReveal key={member.name} delay={i as u32 * 150} direction={Direction::Scale}>
                            <div class="team-card">
                                <div class="team-avatar" aria-hidden="true">
                                    { member.name.split_whitespace().filter_map(|w| w.chars().next()).collect::<String>() }
                                </div>
                                <h3>{ member.name }</h3>
                                <p>{ member.role }</p>
                                <span class="team-expertise">{ member.expertise }</span>
                            </div>
                        </ScrollReveal>
                    }) }
                </div>
            </section>

            <section class="section timeline">
                <AnimatedHeading class="section-title">{"The story so far"}</AnimatedHeading>
                { for MILESTONES.iter().enumerate().map(|(i, (year, title))| html! {
                    <ClipReveal key={*year} edge={ClipEdge::Left} delay={i as u32 * 100} class="milestone">
                        <span class="milestone-year mono">{ *year }</span>
                        <span>{ *title }</span>
                    </ClipReveal>
                }) }
            </section>

            <Footer />
        </div>
    }
}
