use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::prelude::*;

use crate::components::animated_text::{AnimatedHeading, SplitText};
use crate::components::footer::Footer;
use crate::components::magnetic_button::MagneticButton;
use crate::components::scroll_reveal::{ScrollReveal, StaggerChildren};
use crate::data::{Plan, PLANS, PRICING_FAQS};
use crate::hooks::timing::use_tween;
use crate::motion::reveal::Direction;
use crate::Route;

#[function_component(Pricing)]
pub fn pricing() -> Html {
    use_title("Pricing - MATTR".to_string());
    let yearly = use_state_eq(|| false);
    let open_faq = use_state_eq(|| None::<usize>);

    let toggle_billing = {
        let yearly = yearly.clone();
        Callback::from(move |_: MouseEvent| yearly.set(!*yearly))
    };

    html! {
        <div class="pricing-page">
            <section class="page-hero">
                <h1><SplitText text="Pricing that scales with you" /></h1>
                <ScrollReveal delay={400}>
                    <div class="billing-toggle" role="group" aria-label="Billing period">
                        <span class={classes!((!*yearly).then_some("active"))}>{"Monthly"}</span>
                        <button
                            class={classes!("switch", yearly.then_some("on"))}
                            role="switch"
                            aria-checked={yearly.to_string()}
                            onclick={toggle_billing}
                        >
                            <span class="switch-knob" />
                        </button>
                        <span class={classes!(yearly.then_some("active"))}>
                            {"Yearly"}<em class="save-badge">{"Save 35%"}</em>
                        </span>
                    </div>
                </ScrollReveal>
            </section>

            <StaggerChildren class="plan-grid" stagger={120} direction={Direction::Up}>
                { for PLANS.iter().map(|plan| html! { <PlanCard plan_id={plan.id} yearly={*yearly} /> }) }
            </StaggerChildren>

            <section class="section faq">
                <AnimatedHeading class="section-title">{"Frequently asked"}</AnimatedHeading>
                { for PRICING_FAQS.iter().enumerate().map(|(i, (question, answer))| {
                    let is_open = *open_faq == Some(i);
                    let onclick = {
                        let open_faq = open_faq.clone();
                        Callback::from(move |_: MouseEvent| open_faq.set(if is_open { None } else { Some(i) }))
                    };
                    html! {
                        <ScrollReveal key={i} delay={i as u32 * 80} class="faq-item">
                            <button class="faq-question" aria-expanded={is_open.to_string()} {onclick}>
                                { *question }
                                <span class={classes!("faq-icon", is_open.then_some("open"))}>{"+"}</span>
                            </button>
                            <div class="faq-answer" style={if is_open { "max-height: 12rem; opacity: 1;" } else { "max-height: 0; opacity: 0;" }}>
                                <p>{ *answer }</p>
                            </div>
                        </ScrollReveal>
                    }
                }) }
            </section>

            <Footer />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    plan_id: &'static str,
    yearly: bool,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let plan: Option<&Plan> = PLANS.iter().find(|p| p.id == props.plan_id);
    let target = plan.map(|p| p.price(props.yearly)).unwrap_or_default();
    let price = use_tween(target);
    let navigator = use_navigator();

    let Some(plan) = plan else {
        return html! {};
    };

    let cta_route = if plan.id == "team" { Route::Contact } else { Route::Auth };
    let onclick = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&cta_route);
        }
    });

    html! {
        <div class={classes!("plan-card", plan.popular.then_some("plan-popular"))}>
            if plan.popular {
                <span class="plan-badge">{"Most popular"}</span>
            }
            <h3>{ plan.name }</h3>
            <p class="plan-description">{ plan.description }</p>
            <p class="plan-price">
                <span class="tabular-nums">{ format!("${price}") }</span>
                <span class="plan-unit">{ plan.unit }</span>
            </p>
            <ul class="plan-features">
                { for plan.features.iter().map(|f| html! {
                    <li class={classes!((!f.included).then_some("excluded"))}>{ f.name }</li>
                }) }
            </ul>
            <MagneticButton class={classes!("btn", if plan.popular { "btn-primary" } else { "btn-ghost" })} {onclick}>
                { plan.cta }
            </MagneticButton>
        </div>
    }
}
