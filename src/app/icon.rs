use leptos::prelude::*;

/// Names for the glyphs components reference directly. Table-driven glyphs
/// (skill categories, stats, social links) arrive as plain strings on their
/// content records instead.
pub mod glyph {
    pub const MENU: &str = "menu";
    pub const CLOSE: &str = "close";
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
    pub const GITHUB: &str = "github";
    pub const ARROW_DOWN: &str = "arrow-down";
    pub const ARROW_UP: &str = "arrow-up";
    pub const EXTERNAL_LINK: &str = "external-link";
    pub const SEND: &str = "send";
    pub const HEART: &str = "heart";
}

/// One line-drawn glyph, keyed by name. Unknown names fall back to a plain
/// dot so a typo is visible instead of a panic.
#[component]
pub fn Icon(name: &'static str, #[prop(optional)] class: &'static str) -> impl IntoView {
    // Filled marks (brand logos, the heart) pull their shape from the fill
    // rather than the stroke.
    let filled = matches!(name, "github" | "twitter" | "heart");

    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill=if filled { "currentColor" } else { "none" }
            stroke=if filled { "none" } else { "currentColor" }
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {glyph_marks(name)}
        </svg>
    }
}

fn glyph_marks(name: &'static str) -> AnyView {
    match name {
        "menu" => view! { <path d="M4 6h16M4 12h16M4 18h16" /> }.into_any(),
        "close" => view! { <path d="M18 6L6 18M6 6l12 12" /> }.into_any(),
        "sun" => view! {
            <circle cx="12" cy="12" r="5" />
            <path d="M12 1v2m0 18v2M4.22 4.22l1.42 1.42m12.72 12.72l1.42 1.42M1 12h2m18 0h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42" />
        }
        .into_any(),
        "moon" => view! { <path d="M21 12.79A9 9 0 1111.21 3 7 7 0 0021 12.79z" /> }.into_any(),
        "arrow-down" => view! { <path d="M12 5v14m7-7l-7 7-7-7" /> }.into_any(),
        "arrow-up" => view! { <path d="M12 19V5m-7 7l7-7 7 7" /> }.into_any(),
        "mail" => view! {
            <rect x="2" y="4" width="20" height="16" rx="2" />
            <path d="M22 6l-10 7L2 6" />
        }
        .into_any(),
        "phone" => view! {
            <path d="M22 16.92v3a2 2 0 01-2.18 2 19.79 19.79 0 01-8.63-3.07 19.5 19.5 0 01-6-6A19.79 19.79 0 012.08 4.18 2 2 0 014.06 2h3a2 2 0 012 1.72c.13.96.36 1.9.7 2.81a2 2 0 01-.45 2.11L8.09 9.91a16 16 0 006 6l1.27-1.22a2 2 0 012.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0122 16.92z" />
        }
        .into_any(),
        "map-pin" => view! {
            <path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0118 0z" />
            <circle cx="12" cy="10" r="3" />
        }
        .into_any(),
        "send" => view! { <path d="M22 2L11 13M22 2l-7 20-4-9-9-4 20-7z" /> }.into_any(),
        "external-link" => view! {
            <path d="M18 13v6a2 2 0 01-2 2H5a2 2 0 01-2-2V8a2 2 0 012-2h6" />
            <path d="M15 3h6v6M10 14L21 3" />
        }
        .into_any(),
        "heart" => view! {
            <path d="M20.84 4.61a5.5 5.5 0 00-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 00-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 000-7.78z" />
        }
        .into_any(),
        "github" => view! {
            <path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z" />
        }
        .into_any(),
        "linkedin" => view! {
            <path d="M16 8a6 6 0 016 6v7h-4v-7a2 2 0 00-2-2 2 2 0 00-2 2v7h-4V9h4v1.5A6 6 0 0116 8z" />
            <rect x="2" y="9" width="4" height="12" />
            <circle cx="4" cy="4" r="2" />
        }
        .into_any(),
        "twitter" => view! {
            <path d="M23 3a10.9 10.9 0 01-3.14 1.53 4.48 4.48 0 00-7.86 3v1A10.66 10.66 0 013 4s-4 9 5 13a11.64 11.64 0 01-7 2c9 5 20 0 20-10.5a4.5 4.5 0 00-.08-.83A7.72 7.72 0 0023 3z" />
        }
        .into_any(),
        "code" => view! { <path d="M16 18l6-6-6-6M8 6l-6 6 6 6" /> }.into_any(),
        "coffee" => view! {
            <path d="M18 8h1a4 4 0 010 8h-1M2 8h16v9a4 4 0 01-4 4H6a4 4 0 01-4-4V8z" />
            <path d="M6 1v3M10 1v3M14 1v3" />
        }
        .into_any(),
        "bulb" => view! {
            <path d="M9 18h6M10 22h4" />
            <path d="M12 2a7 7 0 00-4.95 11.95c.63.63.95 1.47.95 2.35V17h8v-.7c0-.88.32-1.72.95-2.35A7 7 0 0012 2z" />
        }
        .into_any(),
        "users" => view! {
            <path d="M17 21v-2a4 4 0 00-4-4H5a4 4 0 00-4 4v2" />
            <circle cx="9" cy="7" r="4" />
            <path d="M23 21v-2a4 4 0 00-3-3.87M16 3.13a4 4 0 010 7.75" />
        }
        .into_any(),
        "database" => view! {
            <ellipse cx="12" cy="5" rx="9" ry="3" />
            <path d="M21 12c0 1.66-4 3-9 3s-9-1.34-9-3" />
            <path d="M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5" />
        }
        .into_any(),
        "smartphone" => view! {
            <rect x="5" y="2" width="14" height="20" rx="2" />
            <path d="M12 18h.01" />
        }
        .into_any(),
        "cloud" => view! { <path d="M18 10h-1.26A8 8 0 109 20h9a5 5 0 000-10z" /> }.into_any(),
        "palette" => view! {
            <path d="M12 22a10 10 0 110-20 10 9 0 0110 9 5 5 0 01-5 5h-2.25a1.75 1.75 0 00-1.4 2.8l.3.4a1.75 1.75 0 01-1.4 2.8z" />
            <circle cx="7.5" cy="10.5" r="0.5" />
            <circle cx="12" cy="7.5" r="0.5" />
            <circle cx="16.5" cy="10.5" r="0.5" />
        }
        .into_any(),
        "sliders" => view! {
            <path d="M4 21v-7M4 10V3M12 21v-9M12 8V3M20 21v-5M20 12V3M1 14h6M9 8h6M17 16h6" />
        }
        .into_any(),
        _ => view! { <circle cx="12" cy="12" r="2" /> }.into_any(),
    }
}
