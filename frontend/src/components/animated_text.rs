use yew::prelude::*;

use crate::hooks::timing::{use_count_up, use_text_scramble, use_typewriter};
use crate::hooks::visibility::use_scroll_animation;
use crate::motion::counter::CountUp;
use crate::motion::easing::Easing;
use crate::motion::reveal::{highlight_style, slide_style};
use crate::motion::split::{line_units, split_units, unit_style, SplitMode};
use crate::motion::visibility::{ObserverOptions, DEFAULT_THRESHOLD};

#[derive(Properties, PartialEq)]
pub struct AnimatedHeadingProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0)]
    pub delay: u32,
    /// Heading tag, `h1` to `h4`.
    #[prop_or(AttrValue::Static("h2"))]
    pub tag: AttrValue,
}

#[function_component(AnimatedHeading)]
pub fn animated_heading(props: &AnimatedHeadingProps) -> Html {
    let (node, visible) = use_scroll_animation(ObserverOptions::default());
    let tag = match props.tag.as_str() {
        t @ ("h1" | "h2" | "h3" | "h4") => t.to_string(),
        _ => "h2".to_string(),
    };

    html! {
        <@{tag} ref={node} class={props.class.clone()} style={slide_style("translateY(60px)", 1200, props.delay, visible, true)}>
            { for props.children.iter() }
        </@>
    }
}

#[derive(Properties, PartialEq)]
pub struct SplitTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub char_class: Classes,
    #[prop_or(25)]
    pub stagger: u32,
    #[prop_or(0)]
    pub start_delay: u32,
}

/// Reveals text one character at a time. Screen readers get the whole
/// string through `aria-label`.
#[function_component(SplitText)]
pub fn split_text(props: &SplitTextProps) -> Html {
    let (node, visible) = use_scroll_animation(ObserverOptions::default());
    let units = use_memo(
        |(text, start, stagger)| split_units(text, SplitMode::Chars, *start, *stagger),
        (props.text.clone(), props.start_delay, props.stagger),
    );

    html! {
        <span ref={node} class={classes!("inline-block", props.class.clone())} aria-label={props.text.clone()}>
            { for units.iter().map(|unit| html! {
                <span
                    key={unit.index}
                    class={classes!("inline-block", props.char_class.clone())}
                    style={unit_style(SplitMode::Chars, unit, visible)}
                    aria-hidden="true"
                >
                    { unit.text.clone() }
                </span>
            }) }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextRevealProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0)]
    pub delay: u32,
}

/// Slides text up from behind a mask.
#[function_component(TextReveal)]
pub fn text_reveal(props: &TextRevealProps) -> Html {
    let (node, visible) = use_scroll_animation(ObserverOptions::default());

    html! {
        <span ref={node} class={classes!("inline-block", "overflow-hidden", props.class.clone())}>
            <span class="inline-block" style={slide_style("translateY(110%)", 1200, props.delay, visible, false)}>
                { props.text.clone() }
            </span>
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct WordRevealProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub word_class: Classes,
    #[prop_or(60)]
    pub stagger: u32,
}

#[function_component(WordReveal)]
pub fn word_reveal(props: &WordRevealProps) -> Html {
    let (node, visible) = use_scroll_animation(ObserverOptions::default());
    let units = use_memo(
        |(text, stagger)| split_units(text, SplitMode::Words, 0, *stagger),
        (props.text.clone(), props.stagger),
    );

    html! {
        <p ref={node} class={props.class.clone()}>
            { for units.iter().map(|unit| html! {
                <span key={unit.index} class="inline-block overflow-hidden word-gap">
                    <span class={classes!("inline-block", props.word_class.clone())} style={unit_style(SplitMode::Words, unit, visible)}>
                        { unit.text.clone() }
                    </span>
                </span>
            }) }
        </p>
    }
}

#[derive(Properties, PartialEq)]
pub struct LineRevealProps {
    pub lines: Vec<String>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub line_class: Classes,
    #[prop_or(150)]
    pub stagger: u32,
}

#[function_component(LineReveal)]
pub fn line_reveal(props: &LineRevealProps) -> Html {
    let (node, visible) = use_scroll_animation(ObserverOptions::default());
    let units = line_units(&props.lines, 0, props.stagger);

    html! {
        <div ref={node} class={classes!("stack-sm", props.class.clone())}>
            { for units.iter().map(|unit| html! {
                <div key={unit.index} class="overflow-hidden">
                    <p class={props.line_class.clone()} style={unit_style(SplitMode::Lines, unit, visible)}>
                        { unit.text.clone() }
                    </p>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub texts: Vec<String>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(50)]
    pub speed: u32,
    #[prop_or(2500)]
    pub pause: u32,
}

#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let shown = use_typewriter(props.texts.clone(), props.speed, props.pause);

    html! {
        <span class={props.class.clone()}>
            { shown }
            <span class="type-caret" aria-hidden="true"></span>
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextScrambleProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(30)]
    pub speed: u32,
    #[prop_or(true)]
    pub trigger: bool,
}

#[function_component(TextScramble)]
pub fn text_scramble(props: &TextScrambleProps) -> Html {
    let (node, visible) = use_scroll_animation(ObserverOptions::default());
    let shown = use_text_scramble(props.text.to_string(), props.speed, visible && props.trigger);

    html! {
        <span ref={node} class={classes!("mono", props.class.clone())}>{ shown }</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub value: f64,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(2500.0)]
    pub duration: f64,
    #[prop_or(0)]
    pub decimals: u32,
    #[prop_or(Easing::EaseOutQuart)]
    pub easing: Easing,
    #[prop_or(DEFAULT_THRESHOLD)]
    pub threshold: f64,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let counter = CountUp::new(props.value, props.duration)
        .with_decimals(props.decimals)
        .with_easing(props.easing)
        .with_threshold(props.threshold);
    let (node, shown) = use_count_up(counter);

    html! {
        <span ref={node} class={classes!("tabular-nums", props.class.clone())}>
            { props.prefix.clone() }{ shown }{ props.suffix.clone() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct HighlightRevealProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0)]
    pub delay: u32,
}

#[function_component(HighlightReveal)]
pub fn highlight_reveal(props: &HighlightRevealProps) -> Html {
    let (node, visible) = use_scroll_animation(ObserverOptions::default());

    html! {
        <span ref={node} class={classes!("highlight", props.class.clone())}>
            <span class="highlight-bar" style={highlight_style(props.delay, visible)}></span>
            <span class="relative">{ props.text.clone() }</span>
        </span>
    }
}
