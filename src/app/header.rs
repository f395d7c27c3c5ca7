use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::NAV_LINKS;
use crate::theme::ThemeContext;

use super::icon::{glyph, Icon};

/// Page offset in pixels past which the header swaps to its solid
/// treatment.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Whether the chrome should render in its scrolled (solid, shadowed)
/// state. Reversible in both directions, unlike the section reveals.
pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD
}

/// Smooth-scroll the section whose root carries `anchor`'s id to the top of
/// the viewport. An unknown anchor is a silent no-op, not an error.
pub fn scroll_to_section(anchor: &str) {
    let id = anchor.trim_start_matches('#');
    if let Some(el) = document().get_element_by_id(id) {
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

/// Smooth-scroll back to the top of the page.
pub fn scroll_to_top() {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

#[component]
pub fn Header() -> impl IntoView {
    let theme = crate::theme::use_theme();
    let (menu_open, set_menu_open) = signal(false);
    let (_scroll_x, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));

    // every navigation closes the mobile menu, whether it came from the
    // desktop row or the collapsed one
    let navigate_to = move |anchor: &'static str| {
        scroll_to_section(anchor);
        set_menu_open.set(false);
    };

    view! {
        <header class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 {}",
                if scrolled.get() {
                    "bg-white/90 dark:bg-secondary-900/90 backdrop-blur-md shadow-lg"
                } else {
                    "bg-transparent"
                },
            )
        }>
            <nav class="container">
                <div class="flex items-center justify-between py-4">
                    <div class="text-2xl font-bold gradient-text header-logo-in">"Portfolio"</div>

                    // Desktop navigation
                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_LINKS
                            .iter()
                            .enumerate()
                            .map(|(index, link)| {
                                let anchor = link.anchor;
                                view! {
                                    <button
                                        class="header-item-in font-medium text-secondary-700 dark:text-secondary-300 hover:text-primary-600 dark:hover:text-primary-400 transition-colors duration-200"
                                        style=format!("animation-delay:{}s", index as f64 * 0.1)
                                        on:click=move |_| navigate_to(anchor)
                                    >
                                        {link.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <ThemeToggle theme=theme />
                    </div>

                    // Mobile controls
                    <div class="md:hidden flex items-center space-x-4">
                        <ThemeToggle theme=theme />
                        <button
                            class="p-2 rounded-lg bg-secondary-100 dark:bg-secondary-800 hover:bg-secondary-200 dark:hover:bg-secondary-700 transition-colors duration-200"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open.get()
                        >
                            {move || {
                                if menu_open.get() {
                                    view! {
                                        <Icon
                                            name=glyph::CLOSE
                                            class="w-6 h-6 text-secondary-600 dark:text-secondary-400"
                                        />
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <Icon
                                            name=glyph::MENU
                                            class="w-6 h-6 text-secondary-600 dark:text-secondary-400"
                                        />
                                    }
                                        .into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>

                // Mobile menu: collapses via max-height, forced shut on navigation
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !menu_open.get()
                    class:max-h-96=move || menu_open.get()
                >
                    <div class="py-4 space-y-4 border-t border-secondary-200 dark:border-secondary-700">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                let anchor = link.anchor;
                                view! {
                                    <button
                                        class="block w-full text-left font-medium py-2 text-secondary-700 dark:text-secondary-300 hover:text-primary-600 dark:hover:text-primary-400 transition-colors duration-200"
                                        on:click=move |_| navigate_to(anchor)
                                    >
                                        {link.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </nav>
        </header>
    }
}

/// The dark-mode control: the single writer of the theme flag.
#[component]
fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    view! {
        <button
            class="header-toggle-in p-2 rounded-lg bg-secondary-100 dark:bg-secondary-800 hover:bg-secondary-200 dark:hover:bg-secondary-700 transition-colors duration-200"
            on:click=move |_| theme.toggle()
            aria-label="Toggle dark mode"
        >
            {move || {
                if theme.dark() {
                    view! { <Icon name=glyph::SUN class="w-5 h-5 text-yellow-500" /> }.into_any()
                } else {
                    view! { <Icon name=glyph::MOON class="w-5 h-5 text-secondary-600" /> }
                        .into_any()
                }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_flips_past_the_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(25.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.1));
        assert!(is_scrolled(400.0));
    }

    #[test]
    fn scrolled_reverses_when_the_offset_drops() {
        assert!(is_scrolled(120.0));
        assert!(!is_scrolled(12.0));
        // repeated reads at the same offset agree
        assert_eq!(is_scrolled(50.0), is_scrolled(50.0));
        assert_eq!(is_scrolled(51.0), is_scrolled(51.0));
    }
}
