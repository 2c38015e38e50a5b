//! View-state layer: turns screen state into rows the view can draw.
//!
//! Everything here is pure. The view calls into it on each draw and only
//! handles terminal concerns itself.
//!
//! # Module Structure
//!
//! - `highlighter`: splits text around needle occurrences
//! - `wrap`: width-aware word wrapping of styled spans
//! - `renderer`: one section (header and body) as lines
//! - `layout`: a whole screen plus per-item row ranges
//! - `scroll`: offset clamping and reveal

pub mod highlighter;
pub mod layout;
pub mod renderer;
pub mod scroll;
pub mod wrap;

pub use layout::{compute_content_layout, compute_menu_layout, ScreenLayout};
pub use renderer::{SectionFlags, SectionStyles};
