use yew::prelude::*;

use crate::hooks::scroll::use_parallax;
use crate::hooks::visibility::use_scroll_animation;
use crate::motion::reveal::{
    clip_style, image_reveal_styles, stagger_item_style, BlockReveal, ClipEdge, Direction, DEFAULT_DISTANCE,
    DEFAULT_DURATION_MS,
};
use crate::motion::visibility::{ObserverOptions, DEFAULT_ROOT_MARGIN, DEFAULT_THRESHOLD};

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0)]
    pub delay: u32,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or(DEFAULT_DURATION_MS)]
    pub duration: u32,
    #[prop_or(DEFAULT_DISTANCE)]
    pub distance: f64,
    /// Replays the entrance each time the block scrolls back into view.
    #[prop_or(false)]
    pub replay: bool,
    /// Fraction of the block that must be on screen before it reveals.
    #[prop_or(DEFAULT_THRESHOLD)]
    pub threshold: f64,
    /// CSS margin shorthand applied to the viewport before testing.
    #[prop_or(AttrValue::Static(DEFAULT_ROOT_MARGIN))]
    pub root_margin: AttrValue,
}

#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let options = ObserverOptions::default()
        .with_threshold(props.threshold)
        .with_root_margin_str(&props.root_margin)
        .with_trigger_once(!props.replay);
    let (node, visible) = use_scroll_animation(options);
    let reveal = BlockReveal {
        direction: props.direction,
        distance: props.distance,
        duration_ms: props.duration,
        delay_ms: props.delay,
    };

    html! {
        <div ref={node} class={props.class.clone()} style={reveal.style(visible)}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ParallaxProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(0.3)]
    pub speed: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Parallax)]
pub fn parallax(props: &ParallaxProps) -> Html {
    let (node, offset) = use_parallax(props.speed);

    html! {
        <div ref={node} class={classes!("relative", props.class.clone())}>
            <div style={format!("transform: translateY({:.2}px); will-change: transform;", offset)}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggerChildrenProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(80)]
    pub stagger: u32,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or(1000)]
    pub duration: u32,
}

/// Wraps each child so they enter one after another.
#[function_component(StaggerChildren)]
pub fn stagger_children(props: &StaggerChildrenProps) -> Html {
    let (node, visible) = use_scroll_animation(ObserverOptions::default());

    html! {
        <div ref={node} class={props.class.clone()}>
            { for props.children.iter().enumerate().map(|(i, child)| html! {
                <div key={i} style={stagger_item_style(i, props.stagger, props.direction, props.duration, visible)}>
                    { child }
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ClipRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub edge: ClipEdge,
    #[prop_or(0)]
    pub delay: u32,
    #[prop_or(DEFAULT_DURATION_MS)]
    pub duration: u32,
}

#[function_component(ClipReveal)]
pub fn clip_reveal(props: &ClipRevealProps) -> Html {
    let (node, visible) = use_scroll_animation(ObserverOptions::default());

    html! {
        <div ref={node} class={props.class.clone()} style={clip_style(props.edge, props.duration, props.delay, visible)}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ImageRevealProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub image_class: Classes,
    #[prop_or(0)]
    pub delay: u32,
}

#[function_component(ImageReveal)]
pub fn image_reveal(props: &ImageRevealProps) -> Html {
    let (node, visible) = use_scroll_animation(ObserverOptions::default());
    let (frame_style, image_style) = image_reveal_styles(props.delay, visible);
    let src = if props.src.is_empty() { AttrValue::from("/placeholder.svg") } else { props.src.clone() };

    html! {
        <div ref={node} class={classes!("overflow-hidden", props.class.clone())}>
            <div style={frame_style}>
                <img
                    src={src}
                    alt={props.alt.clone()}
                    loading="lazy"
                    class={classes!("cover", props.image_class.clone())}
                    style={image_style}
                />
            </div>
        </div>
    }
}
