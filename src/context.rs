//! Context providers for Folio.
//!
//! The profile is read-only for the whole process; the colour scheme is the
//! only piece of UI state and lives in a signal.
//!
//! ## Usage
//!
//! ```ignore
//! let profile = use_profile();
//! let mut scheme = use_color_scheme();
//! scheme.set(scheme().toggled());
//! ```

use dioxus::prelude::*;
use folio_core::ProfileData;

use crate::theme::ColorScheme;

/// Get the active profile.
pub fn get_profile() -> &'static ProfileData {
    crate::get_profile()
}

/// Get the colour scheme requested on the command line.
pub fn get_initial_scheme() -> ColorScheme {
    crate::get_initial_scheme()
}

/// Hook to access the profile from context.
pub fn use_profile() -> &'static ProfileData {
    use_context::<&'static ProfileData>()
}

/// Hook to read or switch the colour scheme.
pub fn use_color_scheme() -> Signal<ColorScheme> {
    use_context::<Signal<ColorScheme>>()
}
