use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::{use_interval, use_title};
use yew_router::prelude::*;

use crate::components::animated_text::{AnimatedHeading, TextReveal};
use crate::components::scroll_reveal::ScrollReveal;
use crate::config;
use crate::data::TESTIMONIALS;
use crate::forms::{password_strength, preview_payload, strength_label, AuthMode, AuthRequest};
use crate::hooks::timing::use_delayed;
use crate::motion::reveal::Direction;
use crate::Route;

const TESTIMONIAL_ROTATE_MS: u32 = 5000;

fn text_input(state: &UseStateHandle<AuthRequest>, apply: fn(&mut AuthRequest, String)) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*state).clone();
        apply(&mut next, input.value());
        state.set(next);
    })
}

#[function_component(Auth)]
pub fn auth() -> Html {
    let mode = use_state_eq(|| AuthMode::SignIn);
    use_title(match *mode {
        AuthMode::SignIn => "Sign in - MATTR".to_string(),
        AuthMode::SignUp => "Create account - MATTR".to_string(),
    });

    let form = use_state(AuthRequest::default);
    let show_password = use_state_eq(|| false);
    let error = use_state_eq(|| None::<String>);
    let submitting = use_state_eq(|| false);
    let done = use_state_eq(|| false);
    let testimonial = use_state_eq(|| 0usize);

    {
        let testimonial = testimonial.clone();
        use_interval(
            move || testimonial.set((*testimonial + 1) % TESTIMONIALS.len()),
            TESTIMONIAL_ROTATE_MS,
        );
    }

    let finish_submit = {
        let submitting = submitting.clone();
        let done = done.clone();
        use_callback(
            move |_: (), _| {
                submitting.set(false);
                done.set(true);
            },
            (),
        )
    };
    let start_submit = use_delayed(config::simulated_submit_ms(), finish_submit);

    let onsubmit = {
        let form = form.clone();
        let mode = mode.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            match form.validate(*mode) {
                Ok(()) => {
                    log::info!("submitting {:?} form", *mode);
                    gloo_console::log!(preview_payload(&*form));
                    error.set(None);
                    submitting.set(true);
                    start_submit.emit(());
                }
                Err(err) => {
                    log::debug!("auth form rejected: {}", err);
                    error.set(Some(err.to_string()));
                }
            }
        })
    };

    let switch_mode = {
        let mode = mode.clone();
        let error = error.clone();
        let done = done.clone();
        Callback::from(move |_: MouseEvent| {
            mode.set(match *mode {
                AuthMode::SignIn => AuthMode::SignUp,
                AuthMode::SignUp => AuthMode::SignIn,
            });
            error.set(None);
            done.set(false);
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let on_terms = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.agree_terms = input.checked();
            form.set(next);
        })
    };

    let signing_up = *mode == AuthMode::SignUp;
    let strength = password_strength(&form.password);
    let quote = &TESTIMONIALS[*testimonial % TESTIMONIALS.len()];

    html! {
        <div class="auth-page">
            <section class="auth-panel">
                <Link<Route> to={Route::Home} classes="nav-logo">{"MATTR"}</Link<Route>>
                <AnimatedHeading tag="h1" key={format!("{:?}", *mode)}>
                    { if signing_up { "Create your account" } else { "Welcome back" } }
                </AnimatedHeading>

                if *done {
                    <ScrollReveal direction={Direction::Scale} class="auth-success">
                        <p>{ if signing_up { "Account created. Check your inbox to verify your email." } else { "Signed in. Redirecting to your studio..." } }</p>
                        <Link<Route> to={Route::Create} classes="btn btn-primary">{"Open the studio"}</Link<Route>>
                    </ScrollReveal>
                } else {
                    <form class="auth-form" {onsubmit} novalidate={true}>
                        if signing_up {
                            <label class="field-label" for="name">{"Name"}</label>
                            <input id="name" type="text" autocomplete="name" value={form.name.clone()}
                                oninput={text_input(&form, |f, v| f.name = v)} />
                        }
                        <label class="field-label" for="email">{"Email"}</label>
                        <input id="email" type="email" autocomplete="email" value={form.email.clone()}
                            oninput={text_input(&form, |f, v| f.email = v)} />

                        <label class="field-label" for="password">{"Password"}</label>
                        <div class="password-field">
                            <input
                                id="password"
                                type={if *show_password { "text" } else { "password" }}
                                autocomplete={if signing_up { "new-password" } else { "current-password" }}
                                value={form.password.clone()}
                                oninput={text_input(&form, |f, v| f.password = v)}
                            />
                            <button type="button" class="text-button" onclick={toggle_password}>
                                { if *show_password { "Hide" } else { "Show" } }
                            </button>
                        </div>

                        if signing_up && !form.password.is_empty() {
                            <div class="strength-meter" aria-live="polite">
                                { for (0..4).map(|i| html! {
                                    <span class={classes!("strength-bar", (i < strength).then_some("filled"))} />
                                }) }
                                <span class="strength-label">{ strength_label(strength) }</span>
                            </div>
                        }

                        if signing_up {
                            <label class="checkbox">
                                <input type="checkbox" checked={form.agree_terms} onchange={on_terms} />
                                {"I agree to the Terms of Service and Privacy Policy"}
                            </label>
                        }

                        if let Some(message) = (*error).clone() {
                            <p class="form-error" role="alert">{ message }</p>
                        }

                        <button type="submit" class="btn btn-primary" disabled={*submitting}>
                            { match (*submitting, signing_up) {
                                (true, _) => "Please wait...",
                                (false, true) => "Create account",
                                (false, false) => "Sign in",
                            } }
                        </button>
                    </form>
                }

                <p class="auth-switch">
                    { if signing_up { "Already have an account? " } else { "New to MATTR? " } }
                    <button class="text-button" onclick={switch_mode}>
                        { if signing_up { "Sign in" } else { "Create one" } }
                    </button>
                </p>
            </section>

            <aside class="auth-aside">
                <blockquote key={*testimonial} class="auth-quote">
                    <TextReveal text={quote.quote} />
                    <cite>{ quote.name }<span>{ quote.role }</span></cite>
                </blockquote>
            </aside>
        </div>
    }
}
