use leptos::{html, prelude::*};

use crate::content::{EXTRA_TECHNOLOGIES, SKILL_CATEGORIES};
use crate::motion::{Entrance, Sequencer};
use crate::reveal::{use_reveal, REVEAL_THRESHOLD};

use super::icon::Icon;

// header, six category cards, the extra-technologies block
const ENTRANCE: Sequencer = Sequencer::new(
    Entrance::fade(0.8).with_stagger(0.1),
    Entrance::rise(30.0, 0.8),
    8,
);

/// Seconds each bar waits once the section is revealed: categories sweep
/// left to right, bars inside a card top to bottom.
fn bar_delay(category_index: usize, skill_index: usize) -> f64 {
    category_index as f64 * 0.2 + skill_index as f64 * 0.1
}

/// Width plus transition for one skill bar. The bar sits at zero until the
/// reveal, then grows to its level over 1.5 s.
fn bar_style(level: u8, revealed: bool, delay: f64) -> String {
    let width = if revealed { f64::from(level) } else { 0.0 };
    format!("width:{width}%;transition:width 1.5s ease-out {delay}s")
}

#[component]
pub fn Skills() -> impl IntoView {
    let root = NodeRef::<html::Div>::new();
    let revealed = use_reveal(root, REVEAL_THRESHOLD);
    let child = move |index: usize| move || ENTRANCE.child_style(revealed.get(), index);

    view! {
        <section id="skills" class="section-padding bg-secondary-50 dark:bg-secondary-800">
            <div class="container">
                <div
                    node_ref=root
                    class="max-w-6xl mx-auto"
                    style=move || ENTRANCE.container_style(revealed.get())
                >
                    // Section header
                    <div class="text-center mb-16" style=child(0)>
                        <h2 class="text-4xl sm:text-5xl font-bold mb-6">
                            "My " <span class="gradient-text">"Skills"</span>
                        </h2>
                        <p class="text-xl text-secondary-600 dark:text-secondary-400 max-w-3xl mx-auto">
                            "Here are the technologies and tools I use to bring ideas to life."
                        </p>
                    </div>

                    // Skills grid
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {SKILL_CATEGORIES
                            .iter()
                            .enumerate()
                            .map(|(category_index, category)| {
                                view! {
                                    <div class="card p-6" style=child(1 + category_index)>
                                        <div class="flex items-center mb-6">
                                            <div class="inline-flex items-center justify-center w-12 h-12 bg-primary-100 dark:bg-primary-900/30 rounded-lg mr-4">
                                                <Icon
                                                    name=category.icon
                                                    class="w-6 h-6 text-primary-600 dark:text-primary-400"
                                                />
                                            </div>
                                            <h3 class="text-lg font-semibold text-secondary-900 dark:text-white">
                                                {category.title}
                                            </h3>
                                        </div>
                                        <div>
                                            {category
                                                .skills
                                                .iter()
                                                .enumerate()
                                                .map(|(skill_index, skill)| {
                                                    view! {
                                                        <SkillBar
                                                            name=skill.name
                                                            level=skill.level
                                                            delay=bar_delay(category_index, skill_index)
                                                            revealed=revealed
                                                        />
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    // Additional technologies
                    <div class="mt-16 text-center" style=child(7)>
                        <h3 class="text-2xl font-semibold mb-8 text-secondary-900 dark:text-white">
                            "Additional Technologies"
                        </h3>
                        <div class="flex flex-wrap justify-center gap-3">
                            {EXTRA_TECHNOLOGIES
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="px-4 py-2 bg-white dark:bg-secondary-700 text-secondary-700 dark:text-secondary-300 rounded-full text-sm font-medium shadow-md hover:shadow-lg hover:scale-105 transition-all duration-200 cursor-default border border-secondary-200 dark:border-secondary-600">
                                            {*tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBar(
    name: &'static str,
    level: u8,
    delay: f64,
    revealed: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="mb-4">
            <div class="flex justify-between items-center mb-2">
                <span class="text-sm font-medium text-secondary-700 dark:text-secondary-300">
                    {name}
                </span>
                <span class="text-sm text-secondary-500 dark:text-secondary-400">
                    {format!("{level}%")}
                </span>
            </div>
            <div class="w-full bg-secondary-200 dark:bg-secondary-700 rounded-full h-2">
                <div
                    class="bg-gradient-to-r from-primary-600 to-purple-600 h-2 rounded-full"
                    style=move || bar_style(level, revealed.get(), delay)
                ></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_stay_empty_until_the_reveal() {
        let style = bar_style(95, false, 0.3);
        assert!(style.starts_with("width:0%"));
        // the transition is declared up front so the growth animates
        assert!(style.contains("1.5s"));
    }

    #[test]
    fn bars_grow_to_their_level_after_the_reveal() {
        assert!(bar_style(95, true, 0.0).starts_with("width:95%"));
        assert!(bar_style(70, true, 0.0).starts_with("width:70%"));
    }

    #[test]
    fn bar_delays_sweep_categories_then_rows() {
        assert_eq!(bar_delay(0, 0), 0.0);
        assert!(bar_delay(0, 1) < bar_delay(1, 0));
        // later categories always start after earlier ones at the same row
        assert!(bar_delay(2, 1) > bar_delay(1, 1));
    }
}
