use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use super::components::{SectionHeading, SocialLinks};
use crate::contact::{ContactField, ContactFormState};
use crate::content::PROFILE;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 relative">
            <div class="container mx-auto px-4 relative z-10">
                <SectionHeading
                    badge="Contact"
                    title="Let's Talk"
                    subtitle="Interested in working together or have a question?"
                />
                <div class="grid lg:grid-cols-3 gap-12 max-w-5xl mx-auto">
                    <div class="flex flex-col gap-4">
                        <h3 class="text-xl font-semibold">"Get in touch"</h3>
                        <a href=format!("mailto:{}", PROFILE.email) class="text-cyan hover:underline">
                            {PROFILE.email}
                        </a>
                        <SocialLinks />
                    </div>
                    <div class="lg:col-span-2">
                        <ContactFormView />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let state = RwSignal::new(ContactFormState::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(snapshot) = state.try_update(ContactFormState::begin).flatten() else {
            return;
        };

        spawn_local(async move {
            #[cfg(feature = "hydrate")]
            let status = {
                use super::dom::open_mail_client;
                use crate::contact::{outcome_message, submit};

                let outcome = submit(&snapshot.to_request(PROFILE.email)).await;
                match &outcome {
                    Ok(resp) => log::info!("send-email: success={} {}", resp.success, resp.message),
                    Err(e) => log::error!("send-email failed: {e}"),
                }
                open_mail_client(&snapshot.mailto_link(PROFILE.email));
                Some(outcome_message(&outcome))
            };
            #[cfg(not(feature = "hydrate"))]
            let status = {
                let _ = snapshot;
                None
            };

            state.update(|s| s.finish(status));
        });
    };

    let input_class = "w-full px-4 py-2 rounded-lg bg-white/5 border border-white/10 focus:outline-none focus:ring-2 focus:ring-cyan";

    view! {
        <form class="flex flex-col gap-4" on:submit=on_submit>
            {ContactField::ALL
                .into_iter()
                .map(|field| {
                    let value = move || state.with(|s| s.form.get(field).to_string());
                    let on_input = move |ev| state.update(|s| s.form.set(field, event_target_value(&ev)));
                    let control = if field == ContactField::Message {
                        view! {
                            <textarea
                                id=field.id()
                                name=field.id()
                                rows="5"
                                required
                                class=input_class
                                prop:value=value
                                on:input=on_input
                            ></textarea>
                        }
                            .into_any()
                    } else {
                        view! {
                            <input
                                id=field.id()
                                name=field.id()
                                type=field.input_type()
                                required
                                class=input_class
                                prop:value=value
                                on:input=on_input
                            />
                        }
                            .into_any()
                    };
                    view! {
                        <div class="flex flex-col gap-2">
                            <label for=field.id() class="text-sm font-medium">
                                {field.label()}
                            </label>
                            {control}
                        </div>
                    }
                })
                .collect_view()}
            <button
                type="submit"
                class="px-6 py-3 rounded-lg bg-gradient-to-r from-cyan to-purple font-medium disabled:opacity-50"
                disabled=move || state.with(ContactFormState::is_submitting)
            >
                {move || state.with(ContactFormState::submit_label)}
            </button>
            {move || {
                state
                    .with(|s| s.status().map(str::to_string))
                    .map(|msg| view! { <p class="text-sm text-muted">{msg}</p> })
            }}
        </form>
    }
}
