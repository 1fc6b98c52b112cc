use serde_json::json;
use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::animated_text::{AnimatedHeading, SplitText};
use crate::components::footer::Footer;
use crate::components::scroll_reveal::{ScrollReveal, StaggerChildren};
use crate::config;
use crate::data::{ENDPOINTS, SDKS};
use crate::hooks::dom::copy_text;
use crate::hooks::timing::use_delayed;
use crate::motion::reveal::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Snippet {
    Curl,
    JavaScript,
    Python,
    Response,
}

impl Snippet {
    const ALL: [Snippet; 4] = [Snippet::Curl, Snippet::JavaScript, Snippet::Python, Snippet::Response];

    fn label(self) -> &'static str {
        match self {
            Snippet::Curl => "cURL",
            Snippet::JavaScript => "JavaScript",
            Snippet::Python => "Python",
            Snippet::Response => "Response",
        }
    }

    fn code(self) -> String {
        match self {
            Snippet::Curl => r#"curl -X POST https://api.mattr.ai/v1/generate \
  -H "Authorization: Bearer YOUR_API_KEY" \
  -H "Content-Type: application/json" \
  -d '{
    "prompt": "A serene mountain landscape at sunset",
    "style": "photorealistic",
    "width": 1024,
    "height": 1024,
    "num_images": 4
  }'"#
            .to_string(),
            Snippet::JavaScript => r#"import { MattrAI } from '@mattr/sdk';

const mattr = new MattrAI('YOUR_API_KEY');

const images = await mattr.generate({
  prompt: 'A serene mountain landscape at sunset',
  style: 'photorealistic',
  width: 1024,
  height: 1024,
  numImages: 4
});"#
            .to_string(),
            Snippet::Python => r#"from mattr import MattrAI

client = MattrAI(api_key="YOUR_API_KEY")

images = client.generate(
    prompt="A serene mountain landscape at sunset",
    style="photorealistic",
    width=1024,
    height=1024,
    num_images=4
)"#
            .to_string(),
            Snippet::Response => example_response(),
        }
    }
}

/// Illustrative `/v1/generate` response body.
fn example_response() -> String {
    let body = json!({
        "id": "gen_8f2c1a",
        "status": "succeeded",
        "model": "mattr-3.2",
        "images": (1..=4)
            .map(|i| json!({ "url": format!("https://cdn.mattr.ai/gen_8f2c1a/{i}.png"), "width": 1024, "height": 1024 }))
            .collect::<Vec<_>>(),
        "elapsed_ms": 2800,
    });
    serde_json::to_string_pretty(&body).unwrap_or_default()
}

#[function_component(ApiDocs)]
pub fn api_docs() -> Html {
    use_title("API Docs - MATTR".to_string());
    let active = use_state_eq(|| Snippet::JavaScript);
    let copied = use_state_eq(|| false);

    let reset_copied = {
        let copied = copied.clone();
        use_callback(move |_: (), _| copied.set(false), ())
    };
    let schedule_reset = use_delayed(config::FEEDBACK_RESET_MS, reset_copied);

    let code = active.code();

    let on_copy = {
        let code = code.clone();
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            if copy_text(&code) {
                copied.set(true);
                schedule_reset.emit(());
            }
        })
    };

    html! {
        <div class="docs-page">
            <section class="page-hero">
                <h1><SplitText text="Build with the MATTR API" /></h1>
                <ScrollReveal delay={300}>
                    <p class="section-lead">{"Simple endpoints, comprehensive SDKs, enterprise reliability."}</p>
                </ScrollReveal>
            </section>

            <ScrollReveal class="code-window" direction={Direction::Blur}>
                <div class="code-tabs" role="tablist">
                    { for Snippet::ALL.iter().map(|snippet| {
                        let snippet = *snippet;
                        let selected = *active == snippet;
                        let onclick = {
                            let active = active.clone();
                            let copied = copied.clone();
                            Callback::from(move |_: MouseEvent| {
                                active.set(snippet);
                                copied.set(false);
                            })
                        };
                        html! {
                            <button
                                role="tab"
                                aria-selected={selected.to_string()}
                                class={classes!("code-tab", selected.then_some("active"))}
                                {onclick}
                            >
                                { snippet.label() }
                            </button>
                        }
                    }) }
                    <button class="text-button" onclick={on_copy}>
                        { if *copied { "Copied!" } else { "Copy" } }
                    </button>
                </div>
                <pre class="mono"><code>{ code }</code></pre>
            </ScrollReveal>

            <section class="section endpoints">
                <AnimatedHeading class="section-title">{"Endpoints"}</AnimatedHeading>
                { for ENDPOINTS.iter().enumerate().map(|(i, endpoint)| html! {
                    <ScrollReveal key={endpoint.path} delay={i as u32 * 60} direction={Direction::Left} distance={24.0} class="endpoint">
                        <span class={classes!("method", endpoint.method.to_lowercase())}>{ endpoint.method }</span>
                        <div>
                            <p class="mono">{ endpoint.path }</p>
                            <p>{ endpoint.description }</p>
                        </div>
                        if let Some(badge) = endpoint.badge {
                            <span class="endpoint-badge">{ badge }</span>
                        }
                    </ScrollReveal>
                }) }
            </section>

            <section class="section sdks">
                <AnimatedHeading class="section-title">{"Official SDKs"}</AnimatedHeading>
                <StaggerChildren class="sdk-grid" stagger={60} direction={Direction::Scale}>
                    { for SDKS.iter().map(|(name, version)| html! {
                        <div class="sdk-card">
                            <p>{ *name }</p>
                            <span class="mono">{ *version }</span>
                        </div>
                    }) }
                </StaggerChildren>
            </section>

            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_response_is_valid_json() {
        let parsed: serde_json::Value = serde_json::from_str(&example_response()).unwrap();
        assert_eq!(parsed["images"].as_array().map(Vec::len), Some(4));
        assert_eq!(parsed["status"], "succeeded");
    }

    #[test]
    fn every_tab_has_code() {
        for snippet in Snippet::ALL {
            assert!(!snippet.code().is_empty(), "{:?} is empty", snippet);
        }
    }
}
