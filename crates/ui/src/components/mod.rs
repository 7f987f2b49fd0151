//! Small UI primitives the sections are composed from.

mod button;
mod card;
mod carousel;
mod icon;

pub use button::{Button, ButtonLink, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent};
pub use carousel::Carousel;
pub use icon::{Icon, IconName};
