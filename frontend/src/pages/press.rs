use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::animated_text::{AnimatedHeading, SplitText, TextScramble};
use crate::components::footer::Footer;
use crate::components::scroll_reveal::{ScrollReveal, StaggerChildren};
use crate::data::{long_date, PRESS_ASSETS, PRESS_COVERAGE, PRESS_EMAIL, PRESS_RELEASES};
use crate::motion::reveal::Direction;

#[function_component(Press)]
pub fn press() -> Html {
    use_title("Press - MATTR".to_string());

    html! {
        <div class="press-page">
            <section class="page-hero">
                <h1><SplitText text="MATTR in the news." /></h1>
                <ScrollReveal delay={300}>
                    <p class="section-lead">
                        {"Download brand assets, read press releases, and get in touch with our communications team."}
                    </p>
                </ScrollReveal>
            </section>

            <ScrollReveal class="section press-contact" direction={Direction::Left}>
                <p>{"Media enquiries"}</p>
                <a href={format!("mailto:{}", PRESS_EMAIL)}><TextScramble text={PRESS_EMAIL} /></a>
            </ScrollReveal>

            <section class="section">
                <AnimatedHeading class="section-title">{"Press releases"}</AnimatedHeading>
                { for PRESS_RELEASES.iter().enumerate().map(|(i, release)| html! {
                    <ScrollReveal
                        key={release.title}
                        delay={i as u32 * 80}
                        direction={Direction::Left}
                        distance={30.0}
                        root_margin="0px 0px -40px 0px"
                        class="press-release"
                    >
                        <time>{ long_date(release.published) }</time>
                        <h3>{ release.title }</h3>
                        <span class="post-category">{ release.source }</span>
                    </ScrollReveal>
                }) }
            </section>

            <section class="section">
                <AnimatedHeading class="section-title">{"Coverage"}</AnimatedHeading>
                <StaggerChildren class="coverage-grid" direction={Direction::Scale}>
                    { for PRESS_COVERAGE.iter().map(|(outlet, monogram)| html! {
                        <div class="coverage-item">
                            <span class="monogram">{ *monogram }</span>
                            <span>{ *outlet }</span>
                        </div>
                    }) }
                </StaggerChildren>
            </section>

            <section class="section">
                <AnimatedHeading class="section-title">{"Brand assets"}</AnimatedHeading>
                <StaggerChildren class="asset-list" direction={Direction::Up}>
                    { for PRESS_ASSETS.iter().map(|(name, format, size_mb)| html! {
                        <a href="#" class="asset-row">
                            <span>{ *name }</span>
                            <span class="mono">{ format!("{} · {:.1} MB", format, size_mb) }</span>
                        </a>
                    }) }
                </StaggerChildren>
            </section>

            <Footer />
        </div>
    }
}
