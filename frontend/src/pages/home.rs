use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::prelude::*;

use crate::components::animated_text::{
    AnimatedCounter, AnimatedHeading, HighlightReveal, LineReveal, SplitText, TextScramble, Typewriter, WordReveal,
};
use crate::components::footer::Footer;
use crate::components::horizontal_scroll::HorizontalScroll;
use crate::components::magnetic_button::MagneticButton;
use crate::components::marquee::Marquee;
use crate::components::scroll_reveal::{ClipReveal, ImageReveal, Parallax, ScrollReveal, StaggerChildren};
use crate::data::{CAPABILITIES, FEATURES, GALLERY, HERO_WORDS, PLANS, STATS, TESTIMONIALS, TRUSTED_BY};
use crate::hooks::pointer::use_mouse_position;
use crate::hooks::scroll::{use_scroll_rotation, use_smooth_scroll};
use crate::hooks::timing::use_staggered_reveal;
use crate::motion::marquee::MarqueeDirection;
use crate::motion::reveal::{ClipEdge, Direction};
use crate::Route;

const DEMO_PROMPT: &str = "A lighthouse on a cliff at golden hour, cinematic";

#[function_component(Home)]
pub fn home() -> Html {
    use_title("MATTR - AI Image Generation Platform".to_string());
    let smooth_scroll = use_smooth_scroll();

    let scroll_to_features = Callback::from(move |_: MouseEvent| smooth_scroll.emit("#features".to_string()));

    html! {
        <div class="home">
            <Hero on_explore={scroll_to_features} />

            <section class="trusted">
                <p class="section-eyebrow">{"Trusted by creative teams at"}</p>
                <Marquee speed={30.0}>
                    { for TRUSTED_BY.iter().map(|name| html! { <span class="trusted-logo">{ *name }</span> }) }
                </Marquee>
            </section>

            <section id="features" class="section">
                <AnimatedHeading class="section-title">{"Everything you need to create"}</AnimatedHeading>
                <WordReveal class="section-lead" text="From the first prompt to the final export, every step lives in one studio." />
                <StaggerChildren class="feature-grid" stagger={100}>
                    { for FEATURES.iter().map(|f| html! {
                        <article class="feature-card">
                            <span class="feature-tag">{ f.tag }</span>
                            <h3>{ f.title }</h3>
                            <p>{ f.description }</p>
                        </article>
                    }) }
                </StaggerChildren>
            </section>

            <GeneratorDemo />

            <section class="section showcase">
                <AnimatedHeading class="section-title">{"Made with MATTR"}</AnimatedHeading>
                <HorizontalScroll class="showcase-strip" speed={0.8}>
                    { for GALLERY.iter().map(|item| html! {
                        <figure class="showcase-card" key={item.id}>
                            <ImageReveal src={item.image} alt={item.title} />
                            <figcaption>{ item.title }<span>{ format!(" by {}", item.author) }</span></figcaption>
                        </figure>
                    }) }
                </HorizontalScroll>
            </section>

            <section class="section capabilities">
                { for CAPABILITIES.iter().enumerate().map(|(i, c)| html! {
                    <ScrollReveal
                        class="capability"
                        delay={i as u32 * 120}
                        direction={if i % 2 == 0 { Direction::Left } else { Direction::Right }}
                    >
                        <h3><TextScramble text={c.title} /></h3>
                        <LineReveal lines={c.lines.iter().map(|l| l.to_string()).collect::<Vec<_>>()} />
                    </ScrollReveal>
                }) }
            </section>

            <PricingTeaser />

            <section class="section testimonials">
                <Marquee speed={50.0} direction={MarqueeDirection::Reverse}>
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <blockquote class="testimonial-card">
                            <p>{ t.quote }</p>
                            <cite>{ t.name }<span>{ t.role }</span></cite>
                        </blockquote>
                    }) }
                </Marquee>
            </section>

            <section class="section cta">
                <ClipReveal edge={ClipEdge::Up}>
                    <h2 class="cta-title">
                        {"Ready to bring your "}
                        <HighlightReveal text="ideas" delay={300} />
                        {" to life?"}
                    </h2>
                </ClipReveal>
                <ScrollReveal direction={Direction::Scale} delay={200}>
                    <Link<Route> to={Route::Create} classes="btn btn-primary">{"Open the studio"}</Link<Route>>
                </ScrollReveal>
            </section>

            <Footer />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    on_explore: Callback<MouseEvent>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let words: Vec<String> = HERO_WORDS.iter().map(|w| w.to_string()).collect();
    let (ring, rotation) = use_scroll_rotation(90.0);
    let pointer = use_mouse_position();

    html! {
        <section class="hero">
            <Parallax class="hero-backdrop" speed={0.3}>
                <div
                    class="hero-glow"
                    style={format!("transform: translate({:.0}px, {:.0}px);", pointer.x * 0.05, pointer.y * 0.05)}
                />
            </Parallax>
            <div
                ref={ring}
                class="hero-ring"
                style={format!("transform: rotate({rotation:.2}deg);")}
                aria-hidden="true"
            />
            <div class="hero-content">
                <ScrollReveal direction={Direction::Blur} duration={1000}>
                    <span class="hero-badge">{"MATTR 3.0 is here"}</span>
                </ScrollReveal>
                <h1 class="hero-title">
                    <SplitText text="Turn your" start_delay={200} />
                    <br />
                    <Typewriter class="hero-rotating" texts={words} />
                </h1>
                <ScrollReveal delay={600}>
                    <p class="hero-lead">{"Studio-grade images from a sentence. No prompt engineering degree required."}</p>
                </ScrollReveal>
                <ScrollReveal delay={800} class="hero-actions">
                    <Link<Route> to={Route::Create} classes="btn btn-primary">{"Start creating free"}</Link<Route>>
                    <MagneticButton class="btn btn-ghost" onclick={props.on_explore.clone()}>
                        {"See what it can do"}
                    </MagneticButton>
                </ScrollReveal>
                <div class="hero-stats">
                    { for STATS.iter().map(|s| html! {
                        <div class="hero-stat" key={s.label}>
                            <AnimatedCounter value={s.value} decimals={s.decimals} suffix={s.suffix} threshold={0.5} />
                            <span>{ s.label }</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(GeneratorDemo)]
fn generator_demo() -> Html {
    let (node, visible, tiles) = use_staggered_reveal(4, 180);

    html! {
        <section class="section generator-demo">
            <AnimatedHeading class="section-title">{"From prompt to picture"}</AnimatedHeading>
            <div class="demo-prompt">
                <span class="demo-label">{"Prompt"}</span>
                <TextScramble text={DEMO_PROMPT} trigger={visible} />
            </div>
            <div ref={node} class="demo-grid">
                { for tiles.iter().enumerate().map(|(i, shown)| html! {
                    <div
                        key={i}
                        class={classes!("demo-tile", shown.then_some("demo-tile-shown"))}
                        style={if *shown { "opacity: 1; transform: none;" } else { "opacity: 0; transform: scale(0.9);" }}
                    >
                        <img src={format!("/assets/demo/lighthouse-{}.jpg", i + 1)} alt={format!("Variation {}", i + 1)} loading="lazy" />
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(PricingTeaser)]
fn pricing_teaser() -> Html {
    html! {
        <section class="section pricing-teaser">
            <AnimatedHeading class="section-title">{"Simple pricing"}</AnimatedHeading>
            <StaggerChildren class="plan-grid" stagger={120} direction={Direction::Up}>
                { for PLANS.iter().map(|plan| html! {
                    <div class={classes!("plan-card", plan.popular.then_some("plan-popular"))}>
                        <h3>{ plan.name }</h3>
                        <p class="plan-price">
                            <AnimatedCounter value={plan.monthly as f64} prefix="$" duration={1500.0} />
                            <span>{ plan.unit }</span>
                        </p>
                        <p>{ plan.description }</p>
                    </div>
                }) }
            </StaggerChildren>
            <Link<Route> to={Route::Pricing} classes="btn btn-ghost">{"Compare plans"}</Link<Route>>
        </section>
    }
}
