use yew::prelude::*;

use crate::hooks::pointer::use_magnetic;
use crate::motion::pointer::{magnet_style, Magnet};

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.4)]
    pub strength: f64,
    #[prop_or(24.0)]
    pub max_radius: f64,
    /// Renders an `<a>` when set, a `<button>` otherwise.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Button or link whose content leans toward the pointer.
#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let magnet = use_magnetic(Magnet { strength: props.strength, max_radius: props.max_radius });
    let inner = html! {
        <span class="magnetic-inner" style={magnet_style(magnet.offset, magnet.following)}>
            { for props.children.iter() }
        </span>
    };

    match &props.href {
        Some(href) => html! {
            <a
                ref={magnet.node}
                href={href.clone()}
                class={props.class.clone()}
                onclick={props.onclick.clone()}
                onmousemove={magnet.onmousemove}
                onmouseleave={magnet.onmouseleave}
            >
                { inner }
            </a>
        },
        None => html! {
            <button
                ref={magnet.node}
                type="button"
                class={props.class.clone()}
                onclick={props.onclick.clone()}
                onmousemove={magnet.onmousemove}
                onmouseleave={magnet.onmouseleave}
            >
                { inner }
            </button>
        },
    }
}
