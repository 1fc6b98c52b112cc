use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::animated_text::{AnimatedHeading, SplitText, WordReveal};
use crate::components::footer::Footer;
use crate::components::magnetic_button::MagneticButton;
use crate::components::scroll_reveal::{ScrollReveal, StaggerChildren};
use crate::config;
use crate::data::{CONTACT_FAQS, CONTACT_OPTIONS};
use crate::forms::{preview_payload, ContactRequest};
use crate::hooks::timing::use_delayed;
use crate::motion::reveal::Direction;

#[function_component(Contact)]
pub fn contact() -> Html {
    use_title("Contact - MATTR".to_string());
    let form = use_state(ContactRequest::default);
    let error = use_state_eq(|| None::<String>);
    let submitting = use_state_eq(|| false);
    let sent = use_state_eq(|| false);
    let open_faq = use_state_eq(|| None::<usize>);

    let finish_submit = {
        let submitting = submitting.clone();
        let sent = sent.clone();
        let form = form.clone();
        use_callback(
            move |_: (), _| {
                submitting.set(false);
                sent.set(true);
                form.set(ContactRequest::default());
            },
            (),
        )
    };
    let start_submit = use_delayed(config::simulated_submit_ms(), finish_submit);

    let field = |apply: fn(&mut ContactRequest, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = input.value();
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            match form.validate() {
                Ok(()) => {
                    gloo_console::log!(preview_payload(&*form));
                    error.set(None);
                    submitting.set(true);
                    start_submit.emit(());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    let send_another = {
        let sent = sent.clone();
        Callback::from(move |_: MouseEvent| sent.set(false))
    };

    html! {
        <div class="contact-page">
            <section class="page-hero">
                <h1><SplitText text="Let's talk" /></h1>
                <WordReveal class="section-lead" text="Questions, partnerships or a plan that fits your team. We read everything." />
            </section>

            <StaggerChildren class="contact-options" direction={Direction::Up}>
                { for CONTACT_OPTIONS.iter().map(|(title, body, email)| html! {
                    <div class="contact-option">
                        <h3>{ *title }</h3>
                        <p>{ *body }</p>
                        <a href={format!("mailto:{email}")}>{ *email }</a>
                    </div>
                }) }
            </StaggerChildren>

            <section class="section contact-form-section">
                if *sent {
                    <ScrollReveal direction={Direction::Scale} class="form-success">
                        <h3>{"Message sent"}</h3>
                        <p>{"Thanks for reaching out. We'll get back to you within one business day."}</p>
                        <MagneticButton class="btn btn-ghost" onclick={send_another}>{"Send another"}</MagneticButton>
                    </ScrollReveal>
                } else {
                    <ScrollReveal>
                        <form class="contact-form" {onsubmit} novalidate={true}>
                            <div class="form-row">
                                <input type="text" placeholder="Name" value={form.name.clone()} oninput={field(|f, v| f.name = v)} />
                                <input type="email" placeholder="Email" value={form.email.clone()} oninput={field(|f, v| f.email = v)} />
                            </div>
                            <input type="text" placeholder="Company (optional)" value={form.company.clone()} oninput={field(|f, v| f.company = v)} />
                            <textarea rows="6" placeholder="How can we help?" value={form.message.clone()} oninput={on_message} />
                            if let Some(message) = (*error).clone() {
                                <p class="form-error" role="alert">{ message }</p>
                            }
                            <button type="submit" class="btn btn-primary" disabled={*submitting}>
                                { if *submitting { "Sending..." } else { "Send message" } }
                            </button>
                        </form>
                    </ScrollReveal>
                }
            </section>

            <section class="section faq">
                <AnimatedHeading class="section-title">{"Before you write"}</AnimatedHeading>
                { for CONTACT_FAQS.iter().enumerate().map(|(i, (question, answer))| {
                    let is_open = *open_faq == Some(i);
                    let onclick = {
                        let open_faq = open_faq.clone();
                        Callback::from(move |_: MouseEvent| open_faq.set(if is_open { None } else { Some(i) }))
                    };
                    html! {
                        <div key={i} class="faq-item">
                            <button class="faq-question" aria-expanded={is_open.to_string()} {onclick}>{ *question }</button>
                            if is_open {
                                <p class="faq-answer">{ *answer }</p>
                            }
                        </div>
                    }
                }) }
            </section>

            <Footer />
        </div>
    }
}
