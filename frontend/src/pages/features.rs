use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::prelude::*;

use crate::components::animated_text::{AnimatedCounter, AnimatedHeading, LineReveal, TextReveal};
use crate::components::footer::Footer;
use crate::components::scroll_reveal::{ClipReveal, ImageReveal, Parallax, ScrollReveal, StaggerChildren};
use crate::data::{CAPABILITIES, FEATURES, STATS};
use crate::motion::reveal::{ClipEdge, Direction};
use crate::Route;

#[function_component(Features)]
pub fn features() -> Html {
    use_title("Features - MATTR".to_string());

    html! {
        <div class="features-page">
            <section class="page-hero">
                <AnimatedHeading tag="h1">{"Built for people who notice the details"}</AnimatedHeading>
                <TextReveal class="section-lead" delay={300} text="Every feature exists because a creator asked for it." />
            </section>

            { for CAPABILITIES.iter().enumerate().map(|(i, c)| {
                let flipped = i % 2 == 1;
                html! {
                    <section key={c.title} class={classes!("feature-row", flipped.then_some("flipped"))}>
                        <ScrollReveal direction={if flipped { Direction::Right } else { Direction::Left }}>
                            <h2>{ c.title }</h2>
                            <LineReveal lines={c.lines.iter().map(|l| l.to_string()).collect::<Vec<_>>()} />
                        </ScrollReveal>
                        <Parallax speed={0.15}>
                            <ImageReveal
                                src={format!("/assets/features/{}.jpg", c.title.to_lowercase())}
                                alt={c.title}
                                delay={200}
                            />
                        </Parallax>
                    </section>
                }
            }) }

            <section class="section">
                <AnimatedHeading class="section-title">{"And a lot more"}</AnimatedHeading>
                <StaggerChildren class="feature-grid" direction={Direction::Scale}>
                    { for FEATURES.iter().map(|f| html! {
                        <article class="feature-card">
                            <span class="feature-tag">{ f.tag }</span>
                            <h3>{ f.title }</h3>
                            <p>{ f.description }</p>
                        </article>
                    }) }
                </StaggerChildren>
            </section>

            <section class="section stats-band">
                { for STATS.iter().map(|s| html! {
                    <ScrollReveal key={s.label} direction={Direction::Rotate}>
                        <AnimatedCounter class="stat-value" value={s.value} decimals={s.decimals} suffix={s.suffix} threshold={0.5} />
                        <p>{ s.label }</p>
                    </ScrollReveal>
                }) }
            </section>

            <section class="section cta">
                <ClipReveal edge={ClipEdge::Left} duration={1400}>
                    <h2 class="cta-title">{"See it for yourself"}</h2>
                </ClipReveal>
                <Link<Route> to={Route::Create} classes="btn btn-primary">{"Try the studio"}</Link<Route>>
            </section>

            <Footer />
        </div>
    }
}
