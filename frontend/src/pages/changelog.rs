use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::animated_text::{AnimatedHeading, SplitText};
use crate::components::footer::Footer;
use crate::components::scroll_reveal::ScrollReveal;
use crate::data::{long_date, ReleaseKind, RELEASES};
use crate::motion::reveal::Direction;

#[function_component(Changelog)]
pub fn changelog() -> Html {
    use_title("Changelog - MATTR".to_string());

    html! {
        <div class="changelog-page">
            <section class="page-hero">
                <h1><SplitText text="Changelog" /></h1>
                <ScrollReveal delay={200}>
                    <p class="section-lead">{"New features, improvements and fixes, newest first."}</p>
                </ScrollReveal>
            </section>

            <section class="section release-list">
                { for RELEASES.iter().map(|release| html! {
                    <ScrollReveal key={release.version} direction={Direction::Left} class="release">
                        <div class="release-meta">
                            <span class="mono">{ format!("v{}", release.version) }</span>
                            <time>{ long_date(release.published) }</time>
                        </div>
                        <div class="release-body">
                            <span class={classes!("release-kind", (release.kind == ReleaseKind::Major).then_some("major"))}>
                                { release.kind.label() }
                            </span>
                            <AnimatedHeading tag="h3">{ release.title }</AnimatedHeading>
                            <ul>
                                { for release.changes.iter().map(|change| html! { <li>{ *change }</li> }) }
                            </ul>
                        </div>
                    </ScrollReveal>
                }) }
            </section>

            <Footer />
        </div>
    }
}
