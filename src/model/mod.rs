//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod screen;
pub mod section;
pub mod user_type;

// Re-export for convenience
pub use error::{AppError, ContentError};
pub use identifiers::{InvalidScreenId, InvalidSectionKey, ScreenId, SectionKey};
pub use key_action::KeyAction;
pub use screen::Screen;
pub use section::{Section, SectionBody, Tip};
pub use user_type::{InvalidUserType, UserType};
