use dioxus::prelude::*;

use crate::context::{get_initial_scheme, get_profile};
use crate::pages::Home;
use crate::theme::{ColorScheme, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` - The portfolio page
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, the profile and colour scheme contexts, and routing.
#[component]
pub fn App() -> Element {
    let scheme: Signal<ColorScheme> = use_signal(get_initial_scheme);

    use_context_provider(get_profile);
    use_context_provider(|| scheme);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
