use chrono::Local;
use yew::prelude::*;
use yew_hooks::{use_interval, use_title};

use crate::components::animated_text::{AnimatedHeading, SplitText};
use crate::components::footer::Footer;
use crate::components::scroll_reveal::{ScrollReveal, StaggerChildren};
use crate::data::{long_date, uptime_history, INCIDENTS, SERVICES, UPTIME_DAYS};
use crate::motion::reveal::Direction;

const CLOCK_TICK_MS: u32 = 1000;

fn clock_label() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

#[function_component(Status)]
pub fn status() -> Html {
    use_title("System Status - MATTR".to_string());
    let now = use_state_eq(clock_label);
    let history = use_memo(|_| uptime_history(), ());

    {
        let now = now.clone();
        use_interval(move || now.set(clock_label()), CLOCK_TICK_MS);
    }

    let all_operational = SERVICES.iter().all(|s| s.operational);

    html! {
        <div class="status-page">
            <section class="page-hero">
                <h1><SplitText text="System status" /></h1>
                <ScrollReveal direction={Direction::Scale} class={classes!("status-banner", all_operational.then_some("ok"))}>
                    <p>{ if all_operational { "All systems operational" } else { "Some systems are degraded" } }</p>
                    <span class="mono tabular-nums">{ format!("Last checked {}", *now) }</span>
                </ScrollReveal>
            </section>

            <section class="section uptime">
                <AnimatedHeading tag="h3">{ format!("Uptime, last {} days", UPTIME_DAYS) }</AnimatedHeading>
                <div class="uptime-bars">
                    { for history.iter().enumerate().map(|(i, up)| html! {
                        <span
                            key={i}
                            class={classes!("uptime-bar", if *up { "up" } else { "partial" })}
                            title={format!("Day {}: {}", UPTIME_DAYS - i, if *up { "100% uptime" } else { "Partial outage" })}
                        />
                    }) }
                </div>
            </section>

            <StaggerChildren class="service-list" stagger={60}>
                { for SERVICES.iter().map(|service| html! {
                    <div class="service">
                        <span class={classes!("status-dot", service.operational.then_some("ok"))} />
                        <span>{ service.name }</span>
                        <span class="tabular-nums">{ format!("{} uptime", service.uptime) }</span>
                    </div>
                }) }
            </StaggerChildren>

            <section class="section incidents">
                <AnimatedHeading class="section-title">{"Past incidents"}</AnimatedHeading>
                { for INCIDENTS.iter().map(|incident| html! {
                    <ScrollReveal key={incident.title} class="incident">
                        <time>{ long_date(incident.published) }</time>
                        <h3>{ incident.title }</h3>
                        <p>{ incident.description }</p>
                        <span class="mono">{ format!("{} · {}", incident.status, incident.duration) }</span>
                    </ScrollReveal>
                }) }
            </section>

            <Footer />
        </div>
    }
}
