// Megift Landing Page — Leptos 0.8 Edition
// Developed by MegStudio (c)2025

pub mod icons;
pub mod pages;
pub mod reveal;
pub mod sections;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use megift::SiteConfig;
use megift::styles::LANDING_CSS;
use pages::{LandingPage, NotFoundPage};

/// Settings shipped with the page, see `landing/site.toml`.
const SITE_TOML: &str = include_str!("../site.toml");

/// Route console output through `log`.
pub fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(level);
}

/// Parse the embedded site config, falling back to defaults.
pub fn load_site_config() -> SiteConfig {
    SiteConfig::load_or_default(SITE_TOML)
}

/// Config from context, or the embedded one when a component is mounted on its own.
pub(crate) fn site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_else(load_site_config)
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(load_site_config());

    view! {
        <style>{LANDING_CSS}</style>
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=LandingPage />
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses_cleanly() {
        let parsed = SiteConfig::from_toml_str(SITE_TOML).expect("site.toml must be valid");
        assert_eq!(parsed, load_site_config());
        assert_eq!(parsed.timing.carousel_interval_ms, 5000);
    }
}
