use leptos::{html, prelude::*};

use crate::content::HERO_SOCIAL_LINKS;
use crate::motion::{Entrance, Sequencer};
use crate::reveal::{use_reveal, REVEAL_THRESHOLD};

use super::header::scroll_to_section;
use super::icon::{glyph, Icon};

const ENTRANCE: Sequencer = Sequencer::new(
    Entrance::fade(0.8).with_stagger(0.2),
    Entrance::rise(30.0, 0.8),
    7,
);

#[component]
pub fn Hero() -> impl IntoView {
    let root = NodeRef::<html::Div>::new();
    let revealed = use_reveal(root, REVEAL_THRESHOLD);
    let child = move |index: usize| move || ENTRANCE.child_style(revealed.get(), index);

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center bg-gradient-to-br from-primary-50 to-purple-50 dark:from-secondary-900 dark:to-secondary-800 relative overflow-hidden"
        >
            // Decorative blobs run on their own endless alternating timeline,
            // independent of the reveal signal
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute -top-1/2 -right-1/2 w-full h-full bg-gradient-to-br from-primary-100/20 to-purple-100/20 dark:from-primary-900/10 dark:to-purple-900/10 rounded-full animate-float"></div>
                <div
                    class="absolute -bottom-1/2 -left-1/2 w-full h-full bg-gradient-to-tr from-purple-100/20 to-primary-100/20 dark:from-purple-900/10 dark:to-primary-900/10 rounded-full animate-float"
                    style="animation-delay:3s"
                ></div>
            </div>

            <div class="container relative z-10">
                <div
                    node_ref=root
                    class="text-center max-w-4xl mx-auto"
                    style=move || ENTRANCE.container_style(revealed.get())
                >
                    // Greeting
                    <div class="mb-6" style=child(0)>
                        <span class="inline-block px-4 py-2 bg-primary-100 dark:bg-primary-900/30 text-primary-700 dark:text-primary-300 rounded-full text-sm font-medium">
                            "\u{1F44B} Hello, I'm"
                        </span>
                    </div>

                    // Name
                    <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold mb-6" style=child(1)>
                        <span class="gradient-text">"Your Name"</span>
                    </h1>

                    // Title
                    <h2
                        class="text-2xl sm:text-3xl lg:text-4xl font-medium text-secondary-700 dark:text-secondary-300 mb-6"
                        style=child(2)
                    >
                        "Full Stack Developer"
                    </h2>

                    // Description
                    <p
                        class="text-lg sm:text-xl text-secondary-600 dark:text-secondary-400 mb-12 max-w-2xl mx-auto leading-relaxed"
                        style=child(3)
                    >
                        "I create beautiful, responsive web applications with modern technologies. Passionate about clean code, user experience, and bringing ideas to life."
                    </p>

                    // CTA buttons
                    <div
                        class="flex flex-col sm:flex-row gap-4 justify-center items-center mb-16"
                        style=child(4)
                    >
                        <button class="btn-primary" on:click=move |_| scroll_to_section("#projects")>
                            "View My Work"
                        </button>
                        <button class="btn-secondary" on:click=move |_| scroll_to_section("#contact")>
                            "Get In Touch"
                        </button>
                    </div>

                    // Social links
                    <div class="flex justify-center space-x-6 mb-16" style=child(5)>
                        {HERO_SOCIAL_LINKS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=social.label
                                        class="p-3 bg-white dark:bg-secondary-800 rounded-full shadow-lg hover:shadow-xl transition-all duration-300 hover:scale-110 group"
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

                    // Scroll indicator
                    <button
                        class="inline-flex flex-col items-center text-secondary-500 dark:text-secondary-400 hover:text-primary-600 dark:hover:text-primary-400 transition-colors duration-200 group"
                        style=child(6)
                        on:click=move |_| scroll_to_section("#about")
                    >
                        <span class="text-sm font-medium mb-2">"Scroll Down"</span>
                        <Icon
                            name=glyph::ARROW_DOWN
                            class="w-5 h-5 animate-bounce group-hover:translate-y-1 transition-transform duration-200"
                        />
                    </button>
                </div>
            </div>
        </section>
    }
}
