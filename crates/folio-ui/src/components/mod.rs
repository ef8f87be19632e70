//! Visual primitives instantiated once per data entry.

mod avatar;
mod badge;
mod blur_fade;
mod hexagon_background;
mod markdown;
mod orbiting_circles;
mod project_card;
mod resume_card;

pub use avatar::*;
pub use badge::*;
pub use blur_fade::*;
pub use hexagon_background::*;
pub use markdown::*;
pub use orbiting_circles::*;
pub use project_card::*;
pub use resume_card::*;
