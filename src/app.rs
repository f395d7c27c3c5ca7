mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod icon;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::theme::{self, ThemeContext};

use about::About;
use contact::Contact;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let theme = theme::provide_theme();
    sync_stored_theme(theme);

    view! {
        // sets the document title
        <Title formatter=|title| format!("Portfolio - {title}") />

        <Router>
            // the dark class lives on its own wrapper so every dark: variant
            // below it (including the page background) keys off an ancestor
            <div class=move || theme.scheme().root_class()>
                <div class="min-h-screen bg-white text-secondary-900 dark:bg-secondary-900 dark:text-white">
                    <Header />
                    <main>
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=path!("/") view=HomePage />
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}

/// The whole page: every section in order, footer last. Each section is an
/// anchor target for the header's smooth-scroll navigation.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Full Stack Developer" />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <Contact />
        <Footer />
    }
}

/// Round-trip the color scheme through local storage once the page is
/// hydrated. The server render always starts from the default scheme.
#[cfg(feature = "hydrate")]
fn sync_stored_theme(theme: ThemeContext) {
    use codee::string::JsonSerdeWasmCodec;
    use leptos_use::storage::use_local_storage;

    use crate::theme::ColorScheme;

    let (stored, set_stored, _) =
        use_local_storage::<ColorScheme, JsonSerdeWasmCodec>("color-scheme");

    // Pull the saved choice (storage reads back asynchronously on first
    // load), then push every toggle back out.
    Effect::watch(
        move || stored.get(),
        move |saved, _, _| theme.restore(*saved),
        true,
    );
    Effect::watch(
        move || theme.scheme(),
        move |scheme, _, _| {
            if stored.get_untracked() != *scheme {
                set_stored.set(*scheme);
            }
        },
        false,
    );
}

#[cfg(not(feature = "hydrate"))]
fn sync_stored_theme(_theme: ThemeContext) {}
