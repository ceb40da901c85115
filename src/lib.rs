//! 2D platformer movement: contact-based ground tracking, a timed jump arc
//! and grounded/air horizontal control on an avian2d rigid body.

pub mod content;
pub mod core;
pub mod movement;

pub use crate::content::ContentPlugin;
pub use crate::core::CorePlugin;
pub use crate::movement::MovementPlugin;
