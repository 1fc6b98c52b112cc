use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::prelude::*;

use crate::components::animated_text::{AnimatedHeading, HighlightReveal, SplitText};
use crate::components::footer::Footer;
use crate::components::marquee::Marquee;
use crate::components::scroll_reveal::{ScrollReveal, StaggerChildren};
use crate::data::{ENTERPRISE_FEATURES, ENTERPRISE_LOGOS, ENTERPRISE_QUOTES};
use crate::motion::marquee::MarqueeDirection;
use crate::motion::reveal::Direction;
use crate::Route;

#[function_component(Enterprise)]
pub fn enterprise() -> Html {
    use_title("Enterprise - MATTR".to_string());

    html! {
        <div class="enterprise-page">
            <section class="page-hero">
                <h1>
                    <SplitText text="AI image generation " />
                    <HighlightReveal text="at scale" delay={700} />
                </h1>
                <ScrollReveal delay={400}>
                    <p class="section-lead">
                        {"Empower your entire organization with secure, scalable AI image generation. Built for teams that demand the best."}
                    </p>
                </ScrollReveal>
                <ScrollReveal delay={600} class="hero-actions">
                    <Link<Route> to={Route::Contact} classes="btn btn-primary">{"Contact Sales"}</Link<Route>>
                    <Link<Route> to={Route::Docs} classes="btn btn-ghost">{"View Documentation"}</Link<Route>>
                </ScrollReveal>
            </section>

            <section class="logo-band">
                <p>{"Trusted by leading companies worldwide"}</p>
                <Marquee speed={30.0} direction={MarqueeDirection::Reverse}>
                    { for ENTERPRISE_LOGOS.iter().map(|logo| html! { <span class="logo-word">{ *logo }</span> }) }
                </Marquee>
            </section>

            <section class="section">
                <AnimatedHeading class="section-title">{"Built for enterprise."}</AnimatedHeading>
                <StaggerChildren class="feature-grid" stagger={75}>
                    { for ENTERPRISE_FEATURES.iter().map(|(title, body)| html! {
                        <div class="feature-card">
                            <h3>{ *title }</h3>
                            <p>{ *body }</p>
                        </div>
                    }) }
                </StaggerChildren>
            </section>

            <section class="section quotes dark">
                { for ENTERPRISE_QUOTES.iter().enumerate().map(|(i, quote)| html! {
                    <ScrollReveal key={quote.name} delay={i as u32 * 150} direction={Direction::Blur} class="quote-card">
                        <blockquote>{ format!("\u{201c}{}\u{201d}", quote.quote) }</blockquote>
                        <p class="quote-name">{ quote.name }</p>
                        <p class="quote-role">{ quote.role }</p>
                    </ScrollReveal>
                }) }
            </section>

            <ScrollReveal class="section cta" direction={Direction::Scale}>
                <h2>{"Ready to scale?"}</h2>
                <Link<Route> to={Route::Contact} classes="btn btn-primary">{"Talk to our team"}</Link<Route>>
            </ScrollReveal>

            <Footer />
        </div>
    }
}
