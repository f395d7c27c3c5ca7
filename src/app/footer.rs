use leptos::{html, prelude::*};

use crate::content::{FOOTER_SOCIAL_LINKS, NAV_LINKS};
use crate::motion::{Entrance, Sequencer};
use crate::reveal::{use_reveal, REVEAL_THRESHOLD};

use super::header::{scroll_to_section, scroll_to_top};
use super::icon::{glyph, Icon};

// brand, quick links, contact column, bottom bar
const ENTRANCE: Sequencer = Sequencer::new(
    Entrance::fade(0.8).with_stagger(0.1),
    Entrance::rise(20.0, 0.6),
    4,
);

#[component]
pub fn Footer() -> impl IntoView {
    let root = NodeRef::<html::Div>::new();
    let revealed = use_reveal(root, REVEAL_THRESHOLD);
    let child = move |index: usize| move || ENTRANCE.child_style(revealed.get(), index);

    view! {
        <footer class="bg-secondary-900 dark:bg-secondary-950 text-white relative">
            // Back to top
            <button
                class="absolute -top-6 left-1/2 -translate-x-1/2 p-3 bg-primary-600 hover:bg-primary-700 rounded-full shadow-lg hover:shadow-xl transition-all duration-300 hover:scale-110 group"
                on:click=move |_| scroll_to_top()
                aria-label="Back to top"
            >
                <Icon
                    name=glyph::ARROW_UP
                    class="w-6 h-6 text-white group-hover:-translate-y-1 transition-transform duration-200"
                />
            </button>

            <div class="container">
                <div
                    node_ref=root
                    class="pt-16 pb-8"
                    style=move || ENTRANCE.container_style(revealed.get())
                >
                    <div class="grid md:grid-cols-3 gap-12 mb-12">
                        // Brand
                        <div class="space-y-6" style=child(0)>
                            <div>
                                <h3 class="text-2xl font-bold gradient-text mb-4">"Portfolio"</h3>
                                <p class="text-secondary-300 leading-relaxed">
                                    "Passionate full-stack developer creating innovative digital solutions and beautiful user experiences with modern technologies."
                                </p>
                            </div>
                            <div class="flex space-x-4">
                                {FOOTER_SOCIAL_LINKS
                                    .iter()
                                    .map(|social| {
                                        let external = social.href.starts_with("http");
                                        view! {
                                            <a
                                                href=social.href
                                                target=external.then_some("_blank")
                                                rel=external.then_some("noopener noreferrer")
                                                aria-label=social.label
                                                class="p-3 bg-secondary-800 hover:bg-primary-600 rounded-lg transition-all duration-300 hover:scale-110 group"
                                            >
                                                <Icon
                                                    name=social.icon
                                                    class="w-5 h-5 text-secondary-300 group-hover:text-white transition-colors duration-200"
                                                />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        // Quick links
                        <div style=child(1)>
                            <h4 class="text-lg font-semibold mb-6">"Quick Links"</h4>
                            <nav class="space-y-3">
                                {NAV_LINKS
                                    .iter()
                                    .map(|link| {
                                        let anchor = link.anchor;
                                        view! {
                                            <button
                                                class="block text-secondary-300 hover:text-primary-400 transition-all duration-200 hover:translate-x-2"
                                                on:click=move |_| scroll_to_section(anchor)
                                            >
                                                {link.label}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </nav>
                        </div>

                        // Contact column
                        <div style=child(2)>
                            <h4 class="text-lg font-semibold mb-6">"Get in Touch"</h4>
                            <div class="space-y-4">
                                <a
                                    href="mailto:your.email@example.com"
                                    class="block text-secondary-300 hover:text-primary-400 transition-colors duration-200"
                                >
                                    "your.email@example.com"
                                </a>
                                <a
                                    href="tel:+15551234567"
                                    class="block text-secondary-300 hover:text-primary-400 transition-colors duration-200"
                                >
                                    "+1 (555) 123-4567"
                                </a>
                                <p class="text-secondary-300">"San Francisco, CA"</p>
                            </div>

                            // Newsletter (display only)
                            <div class="mt-8">
                                <h5 class="font-medium mb-3">"Stay Updated"</h5>
                                <div class="flex">
                                    <input
                                        type="email"
                                        placeholder="Enter your email"
                                        class="flex-1 px-4 py-2 bg-secondary-800 border border-secondary-700 rounded-l-lg focus:ring-2 focus:ring-primary-500 focus:border-transparent text-white placeholder-secondary-400"
                                    />
                                    <button class="px-6 py-2 bg-primary-600 hover:bg-primary-700 rounded-r-lg transition-colors duration-200">
                                        "Subscribe"
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>

                    // Bottom bar
                    <div class="border-t border-secondary-800 pt-8" style=child(3)>
                        <div class="flex flex-col md:flex-row justify-between items-center space-y-4 md:space-y-0">
                            <div class="flex items-center space-x-2 text-secondary-400">
                                <span>
                                    {format!("\u{a9} {} Your Name. Made with", env!("BUILD_YEAR"))}
                                </span>
                                <Icon name=glyph::HEART class="w-4 h-4 text-red-500" />
                                <span>"and lots of \u{2615}"</span>
                            </div>

                            <div class="flex items-center space-x-6 text-sm text-secondary-400">
                                <a
                                    href="/privacy"
                                    class="hover:text-primary-400 transition-colors duration-200"
                                >
                                    "Privacy Policy"
                                </a>
                                <a
                                    href="/terms"
                                    class="hover:text-primary-400 transition-colors duration-200"
                                >
                                    "Terms of Service"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
