use yew::prelude::*;

use crate::hooks::scroll::use_horizontal_scroll;

#[derive(Properties, PartialEq)]
pub struct HorizontalScrollProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(1.0)]
    pub speed: f64,
}

/// Strip that slides sideways while the page scrolls past it.
#[function_component(HorizontalScroll)]
pub fn horizontal_scroll(props: &HorizontalScrollProps) -> Html {
    let (node, shift) = use_horizontal_scroll(props.speed);

    html! {
        <div ref={node} class={classes!("overflow-hidden", props.class.clone())}>
            <div class="hscroll-track" style={format!("transform: translateX({:.2}px);", -shift)}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
