//! Navigation state: which section is highlighted and whether the mobile menu is open.
//!
//! The state is driven by two events. A click on a nav entry selects the section
//! directly ([`NavState::select`]); a scroll of the page re-derives the active section
//! from the section positions ([`NavState::sync_to_scroll`]).

use crate::section::Section;

/// Read access to the rendered page geometry.
///
/// Implemented over the DOM in the browser and by fixtures in tests.
pub trait SectionLayout {
    /// Current vertical scroll offset of the viewport.
    fn scroll_y(&self) -> f64;

    /// Top offset of the section's element, `None` when the element is not rendered.
    fn offset_top(&self, section: Section) -> Option<f64>;
}

/// Returns the last section (in page order) whose top lies at or above
/// `scroll_y + offset`, or `None` when no rendered section qualifies.
pub fn active_section<L>(layout: &L, offset: f64) -> Option<Section>
where
    L: SectionLayout + ?Sized,
{
    let scroll_position = layout.scroll_y() + offset;

    Section::ALL
        .iter()
        .rev()
        .copied()
        .find(|&section| layout.offset_top(section).is_some_and(|top| top <= scroll_position))
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    active: Section,
    menu_open: bool,
}

impl NavState {
    #[must_use]
    pub const fn new() -> Self {
        Self { active: Section::Home, menu_open: false }
    }

    #[must_use]
    pub const fn active(&self) -> Section {
        self.active
    }

    #[must_use]
    pub const fn is_active(&self, section: Section) -> bool {
        self.active as usize == section as usize
    }

    #[must_use]
    pub const fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Flips the mobile menu and returns the new visibility.
    pub const fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub const fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Handles a click on a nav entry: marks it active and closes the menu.
    ///
    /// Returns the section the caller should scroll into view.
    pub const fn select(&mut self, section: Section) -> Section {
        self.active = section;
        self.menu_open = false;
        section
    }

    /// Re-derives the active section from the page geometry.
    ///
    /// Leaves the state untouched when no section qualifies. Returns `true` if the
    /// active section changed.
    pub fn sync_to_scroll<L>(&mut self, layout: &L, offset: f64) -> bool
    where
        L: SectionLayout + ?Sized,
    {
        match active_section(layout, offset) {
            Some(section) if section != self.active => {
                self.active = section;
                true
            },
            _ => false,
        }
    }
}
