use leptos::{html, prelude::*};

use crate::content::{STATS, TECH_STACK};
use crate::motion::{Entrance, Sequencer};
use crate::reveal::{use_reveal, REVEAL_THRESHOLD};

use super::header::scroll_to_section;
use super::icon::Icon;

// header, two columns, then the four stat cards and the tech-stack card
const ENTRANCE: Sequencer = Sequencer::new(
    Entrance::fade(0.8).with_stagger(0.2),
    Entrance::rise(30.0, 0.8),
    8,
);

#[component]
pub fn About() -> impl IntoView {
    let root = NodeRef::<html::Div>::new();
    let revealed = use_reveal(root, REVEAL_THRESHOLD);
    let child = move |index: usize| move || ENTRANCE.child_style(revealed.get(), index);

    view! {
        <section id="about" class="section-padding bg-white dark:bg-secondary-900">
            <div class="container">
                <div
                    node_ref=root
                    class="max-w-6xl mx-auto"
                    style=move || ENTRANCE.container_style(revealed.get())
                >
                    // Section header
                    <div class="text-center mb-16" style=child(0)>
                        <h2 class="text-4xl sm:text-5xl font-bold mb-6">
                            "About " <span class="gradient-text">"Me"</span>
                        </h2>
                        <p class="text-xl text-secondary-600 dark:text-secondary-400 max-w-3xl mx-auto">
                            "Passionate developer with a love for creating innovative solutions and beautiful user experiences."
                        </p>
                    </div>

                    <div class="grid lg:grid-cols-2 gap-16 items-center">
                        // Left column: text content
                        <div class="space-y-6" style=child(1)>
                            <div class="space-y-4">
                                <p class="text-secondary-700 dark:text-secondary-300 leading-relaxed">
                                    "I'm a passionate full-stack developer with over 5 years of experience creating digital solutions that make a difference. I specialize in modern web technologies and love turning complex problems into simple, beautiful designs."
                                </p>
                                <p class="text-secondary-700 dark:text-secondary-300 leading-relaxed">
                                    "When I'm not coding, you can find me exploring new technologies, contributing to open-source projects, or sharing knowledge with the developer community. I believe in continuous learning and staying up-to-date with the latest industry trends."
                                </p>
                                <p class="text-secondary-700 dark:text-secondary-300 leading-relaxed">
                                    "I'm currently focused on building scalable web applications using React, TypeScript, and modern backend technologies. I'm always excited to work on challenging projects that push the boundaries of what's possible on the web."
                                </p>
                            </div>

                            <div class="flex flex-wrap gap-4">
                                <a
                                    href="/resume.pdf"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="btn-primary"
                                >
                                    "Download Resume"
                                </a>
                                <button
                                    class="btn-secondary"
                                    on:click=move |_| scroll_to_section("#contact")
                                >
                                    "Let's Talk"
                                </button>
                            </div>
                        </div>

                        // Right column: stats and tech stack
                        <div class="space-y-8" style=child(2)>
                            <div class="grid grid-cols-2 gap-6">
                                {STATS
                                    .iter()
                                    .enumerate()
                                    .map(|(index, stat)| {
                                        view! {
                                            <div class="card p-6 text-center" style=child(3 + index)>
                                                <div class="inline-flex items-center justify-center w-12 h-12 bg-primary-100 dark:bg-primary-900/30 rounded-lg mb-4">
                                                    <Icon
                                                        name=stat.icon
                                                        class="w-6 h-6 text-primary-600 dark:text-primary-400"
                                                    />
                                                </div>
                                                <div class="text-2xl font-bold text-secondary-900 dark:text-white mb-1">
                                                    {stat.value}
                                                </div>
                                                <div class="text-sm text-secondary-600 dark:text-secondary-400">
                                                    {stat.label}
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <div class="card p-6" style=child(7)>
                                <h3 class="text-xl font-semibold mb-6 text-center">"Tech Stack"</h3>
                                <div class="space-y-4">
                                    {TECH_STACK
                                        .iter()
                                        .map(|area| {
                                            view! {
                                                <div>
                                                    <h4 class="font-medium text-secondary-900 dark:text-white mb-2">
                                                        {area.name}
                                                    </h4>
                                                    <div class="flex flex-wrap gap-2">
                                                        {area
                                                            .technologies
                                                            .iter()
                                                            .map(|tech| {
                                                                view! {
                                                                    <span class="px-3 py-1 bg-primary-100 dark:bg-primary-900/30 text-primary-700 dark:text-primary-300 rounded-full text-sm font-medium">
                                                                        {*tech}
                                                                    </span>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
