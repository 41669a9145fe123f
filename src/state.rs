//! Interaction state owned by individual components.

use crate::content::NavLink;
use crate::Route;

/// Selection over a fixed, non-empty list. The active index always stays in `[0, len)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    /// Starts on the first item. A zero length is treated as a single item.
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            active: 0,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    pub fn select(self, index: usize) -> Self {
        Self {
            active: index % self.len,
            ..self
        }
    }

    pub fn next(self) -> Self {
        Self {
            active: (self.active + 1) % self.len,
            ..self
        }
    }

    pub fn previous(self) -> Self {
        Self {
            active: (self.active + self.len - 1) % self.len,
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggle(self) -> Self {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }

    pub fn close(self) -> Self {
        MenuState::Closed
    }

    /// Following a link always closes the menu and yields where to go.
    pub fn follow(self, link: &NavLink) -> (Self, Route) {
        (self.close(), link.route())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{NAV_LINKS, ROOMS};

    #[test]
    fn index_stays_in_bounds_for_mixed_steps() {
        let mut carousel = Carousel::new(ROOMS.len());
        // deterministic mix of forward and backward steps
        for step in 0..200u32 {
            carousel = if step % 3 == 0 || step % 7 == 0 {
                carousel.previous()
            } else {
                carousel.next()
            };
            assert!(carousel.active() < ROOMS.len());
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for len in 1..6 {
            let start = Carousel::new(len).select(len / 2);
            let forward = (0..len).fold(start, |c, _| c.next());
            let backward = (0..len).fold(start, |c, _| c.previous());
            assert_eq!(forward, start);
            assert_eq!(backward, start);
        }
    }

    #[test]
    fn select_sets_active_index() {
        let carousel = Carousel::new(ROOMS.len());
        for i in 0..ROOMS.len() {
            assert_eq!(carousel.select(i).active(), i);
        }
    }

    #[test]
    fn select_out_of_range_wraps() {
        assert_eq!(Carousel::new(3).select(4).active(), 1);
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        assert_eq!(Carousel::new(3).previous().active(), 2);
    }

    #[test]
    fn exactly_one_item_active() {
        let carousel = Carousel::new(ROOMS.len()).next();
        let active = (0..ROOMS.len()).filter(|i| carousel.is_active(*i)).count();
        assert_eq!(active, 1);
    }

    #[test]
    fn rooms_walkthrough() {
        let carousel = Carousel::new(ROOMS.len());
        assert_eq!(ROOMS[carousel.active()].name, "Deluxe Room");

        let carousel = carousel.next().next();
        assert_eq!(ROOMS[carousel.active()].name, "Executive Room");

        let carousel = carousel.next();
        assert_eq!(ROOMS[carousel.active()].name, "Deluxe Room");
    }

    #[test]
    fn empty_list_still_has_one_slot() {
        let carousel = Carousel::new(0);
        assert_eq!(carousel.len(), 1);
        assert_eq!(carousel.next().active(), 0);
    }

    #[test]
    fn menu_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
    }

    #[test]
    fn toggle_twice_is_identity() {
        for state in [MenuState::Open, MenuState::Closed] {
            assert_eq!(state.toggle().toggle(), state);
        }
    }

    #[test]
    fn close_always_closes() {
        assert_eq!(MenuState::Open.close(), MenuState::Closed);
        assert_eq!(MenuState::Closed.close(), MenuState::Closed);
    }

    #[test]
    fn hamburger_then_link_closes_and_navigates() {
        let menu = MenuState::default().toggle();
        assert!(menu.is_open());

        let suites = &NAV_LINKS[1];
        let (menu, route) = menu.follow(suites);
        assert!(!menu.is_open());
        assert_eq!(route, Route::Suites);
    }

    #[test]
    fn desktop_link_after_opening_leaves_menu_closed() {
        // Opened on a narrow viewport, then a desktop pill is clicked after widening
        let menu = MenuState::default().toggle().close();
        assert!(!menu.is_open());
        assert!(menu.toggle().is_open());
    }
}
