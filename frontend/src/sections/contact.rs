use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::Toast;
use crate::components::reveal::{use_entrance, Stagger};
use crate::config;
use crate::contact::api::send_submission;
use crate::contact::form::{ContactForm, Field};
use crate::content;
use crate::sections::heading::SectionHeading;

#[function_component]
pub fn Contact() -> Html {
    let node = use_node_ref();
    let entered = use_entrance(&node, config::ENTRANCE_THRESHOLD);

    // Kept outside yew state so a second click in the same tick sees `Submitting`.
    let form = use_mut_ref(ContactForm::default);
    let revision = use_state(|| 0u32);

    let refresh = {
        let revision = revision.clone();
        move || revision.set(revision.wrapping_add(1))
    };

    let on_input = |field: Field| {
        let form = form.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                Field::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            form.borrow_mut().set(field, value);
            refresh();
        })
    };

    let onsubmit = {
        let form = form.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload = form.borrow_mut().begin_submit();
            refresh();
            let Some(payload) = payload else {
                return;
            };

            let form = form.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let outcome = send_submission(&payload).await;
                form.borrow_mut().finish(outcome);
                refresh();
            });
        })
    };

    let on_dismiss = {
        let form = form.clone();
        let refresh = refresh.clone();
        Callback::from(move |seq: u32| {
            form.borrow_mut().dismiss_notice(seq);
            refresh();
        })
    };

    let state = form.borrow();
    let values = state.values();
    let submitting = state.is_submitting();
    let (seq, notice) = match state.notice() {
        Some((seq, notice)) => (seq, Some(notice.clone())),
        None => (0, None),
    };
    let error_line = |field: Field| match state.error_for(field) {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => html! {},
    };
    let invalid = |field: Field| state.error_for(field).is_some().then_some("input-invalid");

    html! {
        <section id="contact" class="section section-alt" ref={node}>
            <style>
                {r#"
                    .contact-grid { display: flex; flex-wrap: wrap; gap: 3rem; }
                    .contact-info { flex: 1 1 280px; }
                    .contact-info h3 { font-size: 1.5rem; margin: 0 0 1rem; }
                    .contact-info dt { font-weight: 600; margin-top: 1rem; }
                    .contact-info dd { margin: 0.25rem 0 0; color: var(--muted); }
                    .contact-social-lede { margin-top: 2rem; color: var(--muted); }
                    .contact-social { display: flex; flex-wrap: wrap; gap: 0.75rem; }
                    .contact-social a { padding: 0.4rem 0.9rem; border-radius: 999px; background: #f3f4f6; color: inherit; text-decoration: none; transition: background 0.3s, color 0.3s; }
                    .contact-social a:hover { background: var(--accent); color: #fff; }
                    .contact-form { flex: 2 1 420px; display: flex; flex-direction: column; gap: 1rem; }
                    .contact-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                    .contact-form label { display: block; font-weight: 500; margin-bottom: 0.35rem; }
                    .contact-form input, .contact-form textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border: 1px solid #d1d5db;
                        border-radius: 6px;
                        font: inherit;
                        box-sizing: border-box;
                    }
                    .contact-form textarea { min-height: 10rem; resize: vertical; }
                    .contact-form .input-invalid { border-color: #dc2626; }
                    .field-error { color: #dc2626; font-size: 0.85rem; margin: 0.35rem 0 0; }
                    .contact-form button[disabled] { opacity: 0.6; cursor: not-allowed; }
                    @media (max-width: 640px) { .contact-row { grid-template-columns: 1fr; } }
                "#}
            </style>
            <div class="section-inner">
                <SectionHeading
                    title="Get In Touch"
                    lede="Have a project in mind or want to discuss potential opportunities? Feel free to reach out!"
                    entered={entered}
                />
                <div class="contact-grid" style={Stagger::Parent.style(entered)}>
                    <div class="contact-info" style={Stagger::Child(0).style(entered)}>
                        <h3>{"Contact Information"}</h3>
                        <dl>
                            <dt>{"Email"}</dt>
                            <dd><a href={format!("mailto:{}", content::CONTACT_EMAIL)}>{ content::CONTACT_EMAIL }</a></dd>
                            <dt>{"Phone"}</dt>
                            <dd><a href={content::phone_href()}>{ content::CONTACT_PHONE }</a></dd>
                            <dt>{"Location"}</dt>
                            <dd>{ content::CONTACT_LOCATION }</dd>
                        </dl>
                        <p class="contact-social-lede">{"Connect with me on social media:"}</p>
                        <div class="contact-social">
                            { for content::SOCIAL_LINKS.iter().map(|link| html! {
                                <a href={link.url} target="_blank" rel="noopener noreferrer" aria-label={link.label}>
                                    { link.label }
                                </a>
                            }) }
                        </div>
                    </div>
                    <form class="contact-form" novalidate=true {onsubmit} style={Stagger::Child(1).style(entered)}>
                        <div class="contact-row">
                            <div>
                                <label for="contact-name">{"Name"}</label>
                                <input
                                    id="contact-name"
                                    type="text"
                                    placeholder="Your name"
                                    class={classes!(invalid(Field::Name))}
                                    value={values.name.clone()}
                                    oninput={on_input(Field::Name)}
                                />
                                { error_line(Field::Name) }
                            </div>
                            <div>
                                <label for="contact-email">{"Email"}</label>
                                <input
                                    id="contact-email"
                                    type="email"
                                    placeholder="Your email"
                                    class={classes!(invalid(Field::Email))}
                                    value={values.email.clone()}
                                    oninput={on_input(Field::Email)}
                                />
                                { error_line(Field::Email) }
                            </div>
                        </div>
                        <div>
                            <label for="contact-subject">{"Subject"}</label>
                            <input
                                id="contact-subject"
                                type="text"
                                placeholder="Subject"
                                class={classes!(invalid(Field::Subject))}
                                value={values.subject.clone()}
                                oninput={on_input(Field::Subject)}
                            />
                            { error_line(Field::Subject) }
                        </div>
                        <div>
                            <label for="contact-message">{"Message"}</label>
                            <textarea
                                id="contact-message"
                                placeholder="Your message"
                                class={classes!(invalid(Field::Message))}
                                value={values.message.clone()}
                                oninput={on_input(Field::Message)}
                            />
                            { error_line(Field::Message) }
                        </div>
                        <button type="submit" class="button-primary" disabled={submitting}>
                            { if submitting { "Sending..." } else { "Send Message" } }
                        </button>
                    </form>
                </div>
            </div>
            <Toast notice={notice} seq={seq} on_dismiss={on_dismiss} />
        </section>
    }
}
