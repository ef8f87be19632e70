//! Page components for Folio.

mod home;

pub use home::Home;
