use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::{use_list, use_title};

use crate::components::animated_text::{AnimatedHeading, TextScramble};
use crate::components::scroll_reveal::{ImageReveal, ScrollReveal, StaggerChildren};
use crate::config;
use crate::data::{ASPECT_RATIOS, QUICK_PROMPTS, STYLE_PRESETS};
use crate::forms::preview_payload;
use crate::hooks::dom::copy_text;
use crate::hooks::timing::use_delayed;
use crate::motion::reveal::Direction;

const MAX_PROMPT_LEN: usize = 1000;

#[derive(Clone, Debug, PartialEq, Serialize)]
struct GenerationRequest {
    prompt: String,
    negative_prompt: String,
    style: &'static str,
    aspect_ratio: &'static str,
    steps: u32,
    guidance: f64,
    seed: u32,
}

impl GenerationRequest {
    fn image_url(&self) -> String {
        format!("/assets/renders/{}.jpg", self.style)
    }
}

fn random_seed() -> u32 {
    (web_sys::js_sys::Math::random() * u32::MAX as f64) as u32
}

#[function_component(Create)]
pub fn create() -> Html {
    use_title("Studio - MATTR".to_string());
    let prompt = use_state(String::new);
    let negative = use_state(String::new);
    let style = use_state_eq(|| STYLE_PRESETS[0].id);
    let ratio = use_state_eq(|| ASPECT_RATIOS[0]);
    let steps = use_state_eq(|| 30u32);
    let guidance = use_state_eq(|| 7.5f64);
    let show_advanced = use_state_eq(|| false);
    let generating = use_state_eq(|| false);
    let copied = use_state_eq(|| false);
    let pending = use_mut_ref(|| None::<GenerationRequest>);
    let renders = use_list(Vec::<GenerationRequest>::new());

    let finish_generation = {
        let generating = generating.clone();
        let pending = pending.clone();
        let renders = renders.clone();
        use_callback(
            move |_: (), _| {
                if let Some(request) = pending.borrow_mut().take() {
                    log::info!("render finished with seed {}", request.seed);
                    renders.insert(0, request);
                }
                generating.set(false);
            },
            (),
        )
    };
    let start_generation = use_delayed(config::simulated_generation_ms(), finish_generation);

    let reset_copied = {
        let copied = copied.clone();
        use_callback(move |_: (), _| copied.set(false), ())
    };
    let schedule_copy_reset = use_delayed(config::FEEDBACK_RESET_MS, reset_copied);

    let can_generate = !prompt.trim().is_empty() && !*generating;

    let on_generate = {
        let prompt = prompt.clone();
        let negative = negative.clone();
        let style = style.clone();
        let ratio = ratio.clone();
        let steps = steps.clone();
        let guidance = guidance.clone();
        let generating = generating.clone();
        let pending = pending.clone();
        Callback::from(move |_: MouseEvent| {
            if prompt.trim().is_empty() || *generating {
                return;
            }
            let request = GenerationRequest {
                prompt: prompt.trim().to_string(),
                negative_prompt: negative.trim().to_string(),
                style: *style,
                aspect_ratio: *ratio,
                steps: *steps,
                guidance: *guidance,
                seed: random_seed(),
            };
            gloo_console::log!(preview_payload(&request));
            *pending.borrow_mut() = Some(request);
            generating.set(true);
            start_generation.emit(());
        })
    };

    let on_prompt = {
        let prompt = prompt.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut value = input.value();
            if value.chars().count() > MAX_PROMPT_LEN {
                value = value.chars().take(MAX_PROMPT_LEN).collect();
            }
            prompt.set(value);
        })
    };

    let on_negative = {
        let negative = negative.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            negative.set(input.value());
        })
    };

    let on_steps = {
        let steps = steps.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<u32>() {
                steps.set(value.clamp(10, 80));
            }
        })
    };

    let on_guidance = {
        let guidance = guidance.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<f64>() {
                guidance.set(value.clamp(1.0, 20.0));
            }
        })
    };

    let on_copy = {
        let prompt = prompt.clone();
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            if copy_text(&prompt) {
                copied.set(true);
                schedule_copy_reset.emit(());
            }
        })
    };

    let toggle_advanced = {
        let show_advanced = show_advanced.clone();
        Callback::from(move |_: MouseEvent| show_advanced.set(!*show_advanced))
    };

    let history = renders.current().clone();

    html! {
        <div class="create-page">
            <aside class="studio-panel">
                <AnimatedHeading tag="h1" class="studio-title">{"Studio"}</AnimatedHeading>

                <label class="field-label" for="prompt">{"Prompt"}</label>
                <textarea
                    id="prompt"
                    class="prompt-input"
                    placeholder="Describe the image you want to create"
                    value={(*prompt).clone()}
                    oninput={on_prompt}
                />
                <div class="prompt-meta">
                    <span class="tabular-nums">{ format!("{}/{}", prompt.chars().count(), MAX_PROMPT_LEN) }</span>
                    <button class="text-button" onclick={on_copy} disabled={prompt.is_empty()}>
                        { if *copied { "Copied!" } else { "Copy" } }
                    </button>
                </div>

                <div class="quick-prompts">
                    { for QUICK_PROMPTS.iter().map(|quick| {
                        let prompt = prompt.clone();
                        let onclick = Callback::from(move |_: MouseEvent| prompt.set(quick.to_string()));
                        html! { <button class="chip" {onclick}>{ *quick }</button> }
                    }) }
                </div>

                <span class="field-label">{"Style"}</span>
                <div class="preset-grid">
                    { for STYLE_PRESETS.iter().map(|preset| {
                        let active = *style == preset.id;
                        let style = style.clone();
                        let onclick = Callback::from(move |_: MouseEvent| style.set(preset.id));
                        html! {
                            <button class={classes!("preset", active.then_some("active"))} {onclick}>{ preset.label }</button>
                        }
                    }) }
                </div>

                <span class="field-label">{"Aspect ratio"}</span>
                <div class="ratio-row">
                    { for ASPECT_RATIOS.iter().map(|r| {
                        let active = *ratio == *r;
                        let ratio = ratio.clone();
                        let onclick = Callback::from(move |_: MouseEvent| ratio.set(*r));
                        html! { <button class={classes!("chip", active.then_some("active"))} {onclick}>{ *r }</button> }
                    }) }
                </div>

                <button class="text-button" aria-expanded={show_advanced.to_string()} onclick={toggle_advanced}>
                    { if *show_advanced { "Hide advanced settings" } else { "Advanced settings" } }
                </button>
                if *show_advanced {
                    <ScrollReveal direction={Direction::Down} distance={12.0} duration={400} class="advanced">
                        <label class="field-label">{ format!("Steps: {}", *steps) }</label>
                        <input type="range" min="10" max="80" value={steps.to_string()} oninput={on_steps} />
                        <label class="field-label">{ format!("Guidance: {:.1}", *guidance) }</label>
                        <input type="range" min="1" max="20" step="0.5" value={guidance.to_string()} oninput={on_guidance} />
                        <label class="field-label" for="negative">{"Negative prompt"}</label>
                        <input id="negative" type="text" value={(*negative).clone()} oninput={on_negative} />
                    </ScrollReveal>
                }

                <button class="btn btn-primary generate-button" disabled={!can_generate} onclick={on_generate}>
                    { if *generating { "Generating..." } else { "Generate" } }
                </button>
            </aside>

            <section class="studio-canvas">
                if *generating {
                    <div class="render-placeholder" aria-live="polite">
                        <TextScramble text="Rendering your image" />
                    </div>
                }
                if history.is_empty() && !*generating {
                    <div class="render-empty">
                        <p>{"Your renders will appear here."}</p>
                    </div>
                }
                <StaggerChildren class="render-grid" stagger={60} direction={Direction::Scale} duration={600}>
                    { for history.iter().map(|render| html! {
                        <figure class="render">
                            <ImageReveal src={render.image_url()} alt={render.prompt.clone()} />
                            <figcaption>
                                <span>{ render.prompt.clone() }</span>
                                <span class="mono">{ format!("{} · {} · seed {}", render.style, render.aspect_ratio, render.seed) }</span>
                            </figcaption>
                        </figure>
                    }) }
                </StaggerChildren>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_payload_names_every_setting() {
        let request = GenerationRequest {
            prompt: "a fox".into(),
            negative_prompt: String::new(),
            style: "watercolor",
            aspect_ratio: "16:9",
            steps: 30,
            guidance: 7.5,
            seed: 42,
        };
        let json = preview_payload(&request);
        for key in ["prompt", "negative_prompt", "style", "aspect_ratio", "steps", "guidance", "seed"] {
            assert!(json.contains(&format!("\"{key}\"")), "missing {key}");
        }
        assert_eq!(request.image_url(), "/assets/renders/watercolor.jpg");
    }
}
