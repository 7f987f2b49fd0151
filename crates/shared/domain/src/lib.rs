//! # Domain Models
//!
//! Pure types behind the EPYL landing page: the seven page sections, the transient
//! navigation and carousel state, the static Spanish copy and the site configuration.
//! Keep it lean: no I/O, DOM access or rendering here. The browser binding lives in
//! `epyl-ui` behind the [`nav::SectionLayout`] trait.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod content;
pub mod nav;
pub mod section;

pub use carousel::CarouselState;
pub use nav::{NavState, SectionLayout, active_section};
pub use section::Section;
