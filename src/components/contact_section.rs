use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::reveal::{Motion, Section, SectionBackground, SectionHeading};
use crate::config;
use crate::contact::{submit, ContactError, ContactForm};
use crate::content::profile::{EMAIL, LOCATION};
use crate::hooks::reveal::RevealDirection;
use crate::toast::use_toast;

/// How long the button reads "Message sent" after a successful submit.
const SENT_NOTICE_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Idle,
    Sending,
    Sent,
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_state(ContactForm::default);
    let status = use_state(|| Status::Idle);
    let error = use_state(|| None::<String>);
    let is_mounted = use_is_mounted();
    let toaster = use_toast();
    // dropped with the component, which cancels a pending reset
    let sent_reset = use_mut_ref(|| None::<Timeout>);

    let update = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };

    let on_name = {
        let set = update(|f, v| f.name = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let set = update(|f, v| f.email = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_message = {
        let set = update(|f, v| f.message = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };
    let on_bot_field = {
        let set = update(|f, v| f.bot_field = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        let error = error.clone();
        let sent_reset = sent_reset.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == Status::Sending {
                return;
            }

            let submission = (*form).clone();
            // spam goes through so it is acknowledged like a real message
            if let Err(err) = submission.validate().or_else(|err| match err {
                ContactError::Spam => Ok(()),
                other => Err(other),
            }) {
                error.set(Some(err.to_string()));
                return;
            }
            error.set(None);
            status.set(Status::Sending);

            let form = form.clone();
            let status = status.clone();
            let error = error.clone();
            let toaster = toaster.clone();
            let is_mounted = is_mounted.clone();
            let sent_reset = sent_reset.clone();
            spawn_local(async move {
                let result = submit(&submission).await;
                if !is_mounted() {
                    return;
                }
                let outcome = match result {
                    Ok(()) => {
                        info!("Contact form submitted");
                        Ok(())
                    }
                    Err(ContactError::Spam) => {
                        warn!("Honeypot filled, message dropped");
                        Ok(())
                    }
                    Err(e) => Err(e),
                };
                match outcome {
                    Ok(()) => {
                        toaster.success(
                            "Message sent successfully!",
                            "Thank you for reaching out. I'll get back to you soon.",
                        );
                        form.set(ContactForm::default());
                        status.set(Status::Sent);
                        let status = status.clone();
                        *sent_reset.borrow_mut() =
                            Some(Timeout::new(SENT_NOTICE_MS, move || status.set(Status::Idle)));
                    }
                    Err(e) if e.is_validation() => {
                        error.set(Some(e.to_string()));
                        status.set(Status::Idle);
                    }
                    Err(e) => {
                        warn!("Contact form failed: {}", e);
                        toaster.error("Message not sent", format!("{} You can email me at {}.", e, EMAIL));
                        status.set(Status::Idle);
                    }
                }
            });
        })
    };

    let button_label = match *status {
        Status::Idle => "Send Message ➤",
        Status::Sending => "Sending...",
        Status::Sent => "Message sent ✓",
    };

    html! {
        <Section id="contact" background={SectionBackground::Muted}>
            <SectionHeading
                badge="Get In Touch"
                title="Contact Me"
                subtitle={Some(AttrValue::from("Feel free to reach out for collaborations, opportunities, or just to say hello!"))}
            />

            <div class="contact-grid">
                <Motion direction={RevealDirection::Left} class="contact-info">
                    <h3>{"Let's Talk"}</h3>
                    <p class="muted">
                        {"I'm currently open to new opportunities and collaborations. Whether you have a question or just want to say hi, I'll do my best to get back to you!"}
                    </p>
                    <div class="contact-item">
                        <span class="record-icon">{"✉"}</span>
                        <div>
                            <p class="contact-label">{"Email"}</p>
                            <a href={format!("mailto:{}", EMAIL)}>{ EMAIL }</a>
                        </div>
                    </div>
                    <div class="contact-item">
                        <span class="record-icon">{"⌖"}</span>
                        <div>
                            <p class="contact-label">{"Location"}</p>
                            <p class="muted">{ LOCATION }</p>
                        </div>
                    </div>
                </Motion>

                <Motion direction={RevealDirection::Right} delay={0.2} class="card glass">
                    <form
                        class="contact-form"
                        name={config::CONTACT_FORM_NAME}
                        method="POST"
                        data-netlify="true"
                        netlify-honeypot={config::HONEYPOT_FIELD}
                        {onsubmit}
                    >
                        <input type="hidden" name="form-name" value={config::CONTACT_FORM_NAME} />
                        <p class="honeypot" aria-hidden="true">
                            <label>
                                {"Don't fill this out if you're human: "}
                                <input
                                    name={config::HONEYPOT_FIELD}
                                    tabindex="-1"
                                    autocomplete="off"
                                    value={form.bot_field.clone()}
                                    oninput={on_bot_field}
                                />
                            </label>
                        </p>

                        <label for="contact-name">{"Name"}</label>
                        <input
                            id="contact-name"
                            name="name"
                            placeholder="Your name"
                            value={form.name.clone()}
                            oninput={on_name}
                        />

                        <label for="contact-email">{"Email"}</label>
                        <input
                            id="contact-email"
                            name="email"
                            type="email"
                            placeholder="your.email@example.com"
                            value={form.email.clone()}
                            oninput={on_email}
                        />

                        <label for="contact-message">{"Message"}</label>
                        <textarea
                            id="contact-message"
                            name="message"
                            rows="5"
                            placeholder="Your message"
                            value={form.message.clone()}
                            oninput={on_message}
                        />

                        if let Some(message) = &*error {
                            <p class="form-error" role="alert">{ message }</p>
                        }

                        <button
                            type="submit"
                            class="btn btn-primary btn-block"
                            disabled={*status == Status::Sending}
                        >
                            { button_label }
                        </button>
                    </form>
                </Motion>
            </div>

            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2.5rem;
                }
                .contact-info {
                    display: grid;
                    gap: 1.5rem;
                    align-content: start;
                }
                .contact-item {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                }
                .contact-label {
                    margin: 0;
                    font-weight: 500;
                }
                .contact-form {
                    display: grid;
                    gap: 0.5rem;
                }
                .contact-form label {
                    font-size: 0.9rem;
                    font-weight: 500;
                    margin-top: 0.5rem;
                }
                .contact-form input, .contact-form textarea {
                    width: 100%;
                    padding: 0.65rem 0.85rem;
                    border-radius: 0.5rem;
                    border: 1px solid var(--border);
                    background: var(--bg);
                    color: var(--text);
                    font: inherit;
                }
                .contact-form input:focus, .contact-form textarea:focus {
                    outline: 2px solid var(--primary);
                    outline-offset: 1px;
                }
                .honeypot {
                    position: absolute;
                    left: -10000px;
                }
                .form-error {
                    color: #ef4444;
                    margin: 0.5rem 0 0;
                }
                .btn-block {
                    width: 100%;
                    margin-top: 1rem;
                }
                @media (max-width: 900px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </Section>
    }
}
