pub mod config;
pub mod content;
pub mod error;
pub mod snap;

pub use config::{AppConfig, EasingType, GestureConfig, TransitionConfig};
pub use content::{Section, SiteContent};
pub use error::{Error, Result};
pub use snap::{Direction, SectionSnapScroll, Transition, TransitionKind};
