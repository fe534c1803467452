//! Section slide animation
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing curves
//! - `timing` - Progress and row-band arithmetic
//!
//! ## L3 Molecular Layer
//! - `animation` - `SectionAnimator`, the terminal `SectionPresenter`
//!
//! The controller in `snapdeck_core::snap` decides *when* a section changes;
//! this module only decides how the change looks. With reduced motion (or a
//! zero duration) the new section is shown on the very next frame.

// L4 Atomic Layer
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

pub use animation::{SectionAnimator, SlideFrame};
pub use easing::{EasingType, EasingTypeExt};
