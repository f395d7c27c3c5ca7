use leptos::{html, prelude::*, task::spawn_local};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::content::{CONTACT_CHANNELS, CONTACT_SOCIAL_LINKS};
use crate::forms::{
    ContactForm, Field, SimulatedBackend, SubmitBackend, SubmitStatus, STATUS_RESET_MS,
};
use crate::motion::{Entrance, Sequencer};
use crate::reveal::{use_reveal, REVEAL_THRESHOLD};

use super::icon::{glyph, Icon};

// header, info column, form column
const ENTRANCE: Sequencer = Sequencer::new(
    Entrance::fade(0.8).with_stagger(0.2),
    Entrance::rise(30.0, 0.8),
    3,
);

#[component]
pub fn Contact() -> impl IntoView {
    let root = NodeRef::<html::Div>::new();
    let revealed = use_reveal(root, REVEAL_THRESHOLD);
    let child = move |index: usize| move || ENTRANCE.child_style(revealed.get(), index);

    let form = RwSignal::new(ContactForm::default());

    // success (or error) falls back to idle after a fixed delay; the handle
    // is owner-scoped, so an unmount cancels the pending reset
    let UseTimeoutFnReturn {
        start: start_reset, ..
    } = use_timeout_fn(
        move |_: ()| form.update(ContactForm::reset_status),
        STATUS_RESET_MS,
    );

    let on_submit = {
        let start_reset = start_reset.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(Ok(draft)) = form.try_update(ContactForm::begin_submit) else {
                // double submits and incomplete drafts schedule nothing
                return;
            };
            let start_reset = start_reset.clone();
            spawn_local(async move {
                let outcome = SimulatedBackend.submit(&draft).await;
                log::debug!("contact submission settled: {outcome:?}");
                if form.try_update(|f| f.finish_submit(outcome)).is_none() {
                    // the section was torn down while the delivery was in
                    // flight; nothing left to update
                    return;
                }
                start_reset(());
            });
        }
    };

    let edit = move |field: Field| {
        move |ev: web_sys::Event| {
            form.update(|f| f.set_field(field, event_target_value(&ev)));
        }
    };
    let value_of = move |field: Field| move || form.with(|f| f.field(field).to_owned());
    let submitting = move || form.with(|f| f.status() == SubmitStatus::Submitting);

    view! {
        <section id="contact" class="section-padding bg-secondary-50 dark:bg-secondary-800">
            <div class="container">
                <div
                    node_ref=root
                    class="max-w-6xl mx-auto"
                    style=move || ENTRANCE.container_style(revealed.get())
                >
                    // Section header
                    <div class="text-center mb-16" style=child(0)>
                        <h2 class="text-4xl sm:text-5xl font-bold mb-6">
                            "Get In " <span class="gradient-text">"Touch"</span>
                        </h2>
                        <p class="text-xl text-secondary-600 dark:text-secondary-400 max-w-3xl mx-auto">
                            "I'm always open to discussing new opportunities, interesting projects, or just having a friendly chat about technology."
                        </p>
                    </div>

                    <div class="grid lg:grid-cols-2 gap-16">
                        // Contact information
                        <div class="space-y-8" style=child(1)>
                            <div>
                                <h3 class="text-2xl font-semibold mb-6 text-secondary-900 dark:text-white">
                                    "Let's Connect"
                                </h3>
                                <p class="text-secondary-600 dark:text-secondary-400 mb-8 leading-relaxed">
                                    "Whether you have a project in mind, want to collaborate, or just want to say hi, I'd love to hear from you. Feel free to reach out through any of the following channels."
                                </p>
                            </div>

                            <div class="space-y-6">
                                {CONTACT_CHANNELS
                                    .iter()
                                    .map(|info| {
                                        let external = info.href.starts_with("http");
                                        view! {
                                            <a
                                                href=info.href
                                                target=external.then_some("_blank")
                                                rel=external.then_some("noopener noreferrer")
                                                class="flex items-center p-4 bg-white dark:bg-secondary-700 rounded-lg hover:shadow-md transition-all duration-200 group"
                                            >
                                                <div class="flex items-center justify-center w-12 h-12 bg-primary-100 dark:bg-primary-900/30 rounded-lg mr-4 group-hover:bg-primary-200 dark:group-hover:bg-primary-900/50 transition-colors duration-200">
                                                    <Icon
                                                        name=info.icon
                                                        class="w-6 h-6 text-primary-600 dark:text-primary-400"
                                                    />
                                                </div>
                                                <div>
                                                    <h4 class="font-medium text-secondary-900 dark:text-white">
                                                        {info.title}
                                                    </h4>
                                                    <p class="text-secondary-600 dark:text-secondary-400">
                                                        {info.value}
                                                    </p>
                                                </div>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <div>
                                <h4 class="font-medium text-secondary-900 dark:text-white mb-4">
                                    "Follow Me"
                                </h4>
                                <div class="flex space-x-4">
                                    {CONTACT_SOCIAL_LINKS
                                        .iter()
                                        .map(|social| {
                                            view! {
                                                <a
                                                    href=social.href
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    aria-label=social.label
                                                    class="p-3 bg-white dark:bg-secondary-700 rounded-lg hover:bg-primary-50 dark:hover:bg-primary-900/20 transition-all duration-200 hover:scale-105 group"
                                                >
                                                    <Icon
                                                        name=social.icon
                                                        class="w-6 h-6 text-secondary-600 dark:text-secondary-400 group-hover:text-primary-600 dark:group-hover:text-primary-400 transition-colors duration-200"
                                                    />
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>

                        // Contact form
                        <div style=child(2)>
                            <form class="card p-8" on:submit=on_submit>
                                <h3 class="text-2xl font-semibold mb-6 text-secondary-900 dark:text-white">
                                    "Send Me a Message"
                                </h3>

                                <div class="space-y-6">
                                    <div class="grid sm:grid-cols-2 gap-6">
                                        <div>
                                            <label
                                                for="name"
                                                class="block text-sm font-medium text-secondary-700 dark:text-secondary-300 mb-2"
                                            >
                                                "Name"
                                            </label>
                                            <input
                                                type="text"
                                                id="name"
                                                name="name"
                                                required
                                                placeholder="Your name"
                                                class="w-full px-4 py-3 bg-secondary-50 dark:bg-secondary-700 border border-secondary-200 dark:border-secondary-600 rounded-lg focus:ring-2 focus:ring-primary-500 focus:border-transparent transition-all duration-200 text-secondary-900 dark:text-white"
                                                prop:value=value_of(Field::Name)
                                                on:input=edit(Field::Name)
                                            />
                                        </div>
                                        <div>
                                            <label
                                                for="email"
                                                class="block text-sm font-medium text-secondary-700 dark:text-secondary-300 mb-2"
                                            >
                                                "Email"
                                            </label>
                                            <input
                                                type="email"
                                                id="email"
                                                name="email"
                                                required
                                                placeholder="your.email@example.com"
                                                class="w-full px-4 py-3 bg-secondary-50 dark:bg-secondary-700 border border-secondary-200 dark:border-secondary-600 rounded-lg focus:ring-2 focus:ring-primary-500 focus:border-transparent transition-all duration-200 text-secondary-900 dark:text-white"
                                                prop:value=value_of(Field::Email)
                                                on:input=edit(Field::Email)
                                            />
                                        </div>
                                    </div>

                                    <div>
                                        <label
                                            for="subject"
                                            class="block text-sm font-medium text-secondary-700 dark:text-secondary-300 mb-2"
                                        >
                                            "Subject"
                                        </label>
                                        <input
                                            type="text"
                                            id="subject"
                                            name="subject"
                                            required
                                            placeholder="What's this about?"
                                            class="w-full px-4 py-3 bg-secondary-50 dark:bg-secondary-700 border border-secondary-200 dark:border-secondary-600 rounded-lg focus:ring-2 focus:ring-primary-500 focus:border-transparent transition-all duration-200 text-secondary-900 dark:text-white"
                                            prop:value=value_of(Field::Subject)
                                            on:input=edit(Field::Subject)
                                        />
                                    </div>

                                    <div>
                                        <label
                                            for="message"
                                            class="block text-sm font-medium text-secondary-700 dark:text-secondary-300 mb-2"
                                        >
                                            "Message"
                                        </label>
                                        <textarea
                                            id="message"
                                            name="message"
                                            required
                                            rows="6"
                                            placeholder="Tell me about your project or just say hello!"
                                            class="w-full px-4 py-3 bg-secondary-50 dark:bg-secondary-700 border border-secondary-200 dark:border-secondary-600 rounded-lg focus:ring-2 focus:ring-primary-500 focus:border-transparent transition-all duration-200 text-secondary-900 dark:text-white resize-none"
                                            prop:value=value_of(Field::Message)
                                            on:input=edit(Field::Message)
                                        ></textarea>
                                    </div>

                                    <button
                                        type="submit"
                                        disabled=submitting
                                        class="w-full btn-primary disabled:opacity-50 disabled:cursor-not-allowed"
                                    >
                                        {move || {
                                            if submitting() {
                                                view! {
                                                    <span class="flex items-center justify-center">
                                                        <span class="w-5 h-5 border-2 border-white border-t-transparent rounded-full animate-spin mr-2"></span>
                                                        "Sending..."
                                                    </span>
                                                }
                                                    .into_any()
                                            } else {
                                                view! {
                                                    <span class="flex items-center justify-center">
                                                        <Icon name=glyph::SEND class="w-5 h-5 mr-2" />
                                                        "Send Message"
                                                    </span>
                                                }
                                                    .into_any()
                                            }
                                        }}
                                    </button>

                                    {move || {
                                        (form.with(|f| f.status()) == SubmitStatus::Success)
                                            .then(|| {
                                                view! {
                                                    <div class="p-4 bg-green-100 dark:bg-green-900/30 border border-green-200 dark:border-green-800 rounded-lg">
                                                        <p class="text-green-700 dark:text-green-300 text-center">
                                                            "Thank you! Your message has been sent successfully."
                                                        </p>
                                                    </div>
                                                }
                                            })
                                    }}
                                </div>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
