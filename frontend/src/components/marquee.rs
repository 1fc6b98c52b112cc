use yew::prelude::*;

use crate::motion::marquee::{track_slots, MarqueeConfig, MarqueeDirection};

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Seconds per loop.
    #[prop_or(40.0)]
    pub speed: f64,
    #[prop_or_default]
    pub direction: MarqueeDirection,
    #[prop_or(true)]
    pub pause_on_hover: bool,
}

#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let hovered = use_state_eq(|| false);
    let config = MarqueeConfig {
        speed_secs: props.speed,
        direction: props.direction,
        pause_on_hover: props.pause_on_hover,
    };

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let items: Vec<Html> = props.children.iter().collect();
    let slots = track_slots(items.len());
    let groups = slots.chunks(items.len().max(1)).enumerate().map(|(copy, group)| {
        let hidden = group.first().is_some_and(|slot| slot.aria_hidden());
        html! {
            <div key={copy} class="marquee-group" aria-hidden={hidden.then_some("true")}>
                { for group.iter().map(|slot| items[slot.index].clone()) }
            </div>
        }
    });

    html! {
        <div class={classes!("overflow-hidden", props.class.clone())}>
            <div class="marquee-track" style={config.track_style(*hovered)} {onmouseenter} {onmouseleave}>
                { for groups }
            </div>
        </div>
    }
}
