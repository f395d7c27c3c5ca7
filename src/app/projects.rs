use leptos::{html, prelude::*};

use crate::content::{visible_projects, Category, Project};
use crate::motion::{Entrance, Sequencer};
use crate::reveal::{use_reveal, REVEAL_THRESHOLD};

use super::icon::{glyph, Icon};

// header, filter row, grid, view-more link
const ENTRANCE: Sequencer = Sequencer::new(
    Entrance::fade(0.8).with_stagger(0.1),
    Entrance::rise(30.0, 0.8),
    4,
);

/// Seconds between successive card entries when the filter changes.
const CARD_STAGGER: f64 = 0.1;

#[component]
pub fn Projects() -> impl IntoView {
    let root = NodeRef::<html::Div>::new();
    let revealed = use_reveal(root, REVEAL_THRESHOLD);
    let (filter, set_filter) = signal(Category::default());
    let child = move |index: usize| move || ENTRANCE.child_style(revealed.get(), index);

    view! {
        <section id="projects" class="section-padding bg-white dark:bg-secondary-900">
            <div class="container">
                <div
                    node_ref=root
                    class="max-w-7xl mx-auto"
                    style=move || ENTRANCE.container_style(revealed.get())
                >
                    // Section header
                    <div class="text-center mb-16" style=child(0)>
                        <h2 class="text-4xl sm:text-5xl font-bold mb-6">
                            "Featured " <span class="gradient-text">"Projects"</span>
                        </h2>
                        <p class="text-xl text-secondary-600 dark:text-secondary-400 max-w-3xl mx-auto">
                            "Here are some of my recent projects that showcase my skills and experience in building modern applications."
                        </p>
                    </div>

                    // Filter buttons
                    <div class="flex flex-wrap justify-center gap-4 mb-12" style=child(1)>
                        {Category::ALL
                            .iter()
                            .map(|&category| {
                                view! {
                                    <button
                                        class=move || {
                                            format!(
                                                "px-6 py-3 rounded-full font-medium transition-all duration-200 {}",
                                                if filter.get() == category {
                                                    "bg-primary-600 text-white shadow-lg"
                                                } else {
                                                    "bg-secondary-100 dark:bg-secondary-700 text-secondary-700 dark:text-secondary-300 hover:bg-secondary-200 dark:hover:bg-secondary-600"
                                                },
                                            )
                                        }
                                        on:click=move |_| set_filter.set(category)
                                    >
                                        {category.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    // Project grid, rebuilt on every filter change so the
                    // card-entry animation replays
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8" style=child(2)>
                        {move || {
                            visible_projects(filter.get())
                                .into_iter()
                                .enumerate()
                                .map(|(index, project)| {
                                    view! { <ProjectCard project=project index=index /> }
                                })
                                .collect_view()
                        }}
                    </div>

                    // View more
                    <div class="text-center mt-16" style=child(3)>
                        <a
                            href="https://github.com"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn-secondary inline-flex items-center"
                        >
                            <Icon name=glyph::GITHUB class="w-5 h-5 mr-2" />
                            "View All Projects on GitHub"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    view! {
        <div
            class=format!(
                "card-enter card overflow-hidden group {}",
                if project.featured { "lg:col-span-2" } else { "" },
            )
            style=format!("animation-delay:{}s", index as f64 * CARD_STAGGER)
        >
            // Image with hover overlay
            <div class="relative overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-64 object-cover transition-transform duration-300 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-black/40 opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-center justify-center space-x-4">
                    <a
                        href=project.github_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="p-3 bg-white/90 rounded-full hover:bg-white transition-colors duration-200"
                        aria-label="View source"
                    >
                        <Icon name=glyph::GITHUB class="w-5 h-5 text-secondary-900" />
                    </a>
                    <a
                        href=project.live_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="p-3 bg-white/90 rounded-full hover:bg-white transition-colors duration-200"
                        aria-label="Open live demo"
                    >
                        <Icon name=glyph::EXTERNAL_LINK class="w-5 h-5 text-secondary-900" />
                    </a>
                </div>
                {project
                    .featured
                    .then(|| {
                        view! {
                            <div class="absolute top-4 left-4">
                                <span class="px-3 py-1 bg-primary-600 text-white rounded-full text-sm font-medium">
                                    "Featured"
                                </span>
                            </div>
                        }
                    })}
            </div>

            // Card body
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-3 text-secondary-900 dark:text-white">
                    {project.title}
                </h3>
                <p class="text-secondary-600 dark:text-secondary-400 mb-4 leading-relaxed">
                    {project.description}
                </p>

                <div class="flex flex-wrap gap-2 mb-6">
                    {project
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

                <div class="flex space-x-4">
                    <a
                        href=project.github_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn-secondary flex-1 text-center"
                    >
                        "View Code"
                    </a>
                    <a
                        href=project.live_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn-primary flex-1 text-center"
                    >
                        "Live Demo"
                    </a>
                </div>
            </div>
        </div>
    }
}
