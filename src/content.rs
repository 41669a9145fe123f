//! Fixed presentation content for the landing page.
//!
//! Everything here is compile-time data. Local images are file names under
//! `config::asset_base()`; remote ones are full URLs handed to the browser as-is.

use crate::Route;
use yew_router::Routable;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Room {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
}

pub const ROOMS: [Room; 3] = [
    Room {
        id: "deluxe",
        name: "Deluxe Room",
        image: "room1.jpeg",
    },
    Room {
        id: "superior",
        name: "Superior Room",
        image: "room2.jpeg",
    },
    Room {
        id: "executive",
        name: "Executive Room",
        image: "room3.jpeg",
    },
];

/// Resting position of a card in the diagonal fan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FanLayout {
    pub rotate: i32,
    pub y: i32,
    pub z: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Facility {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    pub layout: FanLayout,
}

pub const FACILITIES: [Facility; 5] = [
    Facility {
        id: "mini-bar",
        name: "Mini Bar",
        image: "view1.jpg",
        layout: FanLayout { rotate: -14, y: 24, z: 4 },
    },
    Facility {
        id: "workspace",
        name: "Workspace",
        image: "view2.jpg",
        layout: FanLayout { rotate: -7, y: 12, z: 6 },
    },
    Facility {
        id: "jacuzzi",
        name: "Jacuzzi Bathroom",
        image: "room3.jpeg",
        layout: FanLayout { rotate: 0, y: 0, z: 8 },
    },
    Facility {
        id: "library",
        name: "Library Room",
        image: "view1.jpg",
        layout: FanLayout { rotate: 7, y: 12, z: 6 },
    },
    Facility {
        id: "restaurant",
        name: "Restaurant",
        image: "view2.jpg",
        layout: FanLayout { rotate: 14, y: 24, z: 4 },
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CultureImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const TERRACES: CultureImage = CultureImage {
    src: "https://images.pexels.com/photos/33411905/pexels-photo-33411905.jpeg?auto=compress&cs=tinysrgb&w=1600",
    alt: "Lush green terraces landscape",
};

pub const OCEAN_CLIFF: CultureImage = CultureImage {
    src: "https://images.pexels.com/photos/34757096/pexels-photo-34757096.jpeg?auto=compress&cs=tinysrgb&w=1600",
    alt: "Dramatic coastal cliffs and sea",
};

pub const WATERFALL: CultureImage = CultureImage {
    src: "https://images.pexels.com/photos/33988923/pexels-photo-33988923.jpeg?auto=compress&cs=tinysrgb&w=1600",
    alt: "Waterfall surrounded by lush greenery",
};

pub const STATUE: CultureImage = CultureImage {
    src: "https://images.pexels.com/photos/31391434/pexels-photo-31391434.jpeg?auto=compress&cs=tinysrgb&w=1600",
    alt: "Cultural statue surrounded by greenery",
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    /// Route this link points at. Every href in `NAV_LINKS` is in the route table.
    pub fn route(&self) -> Route {
        Route::recognize(self.href).unwrap_or(Route::NotFound)
    }

    /// A link is active on its own path, and non-root links also on any path below it.
    pub fn is_active(&self, current_path: &str) -> bool {
        is_active_path(current_path, self.href)
    }
}

pub fn is_active_path(current_path: &str, target: &str) -> bool {
    current_path == target || (target != "/" && current_path.starts_with(target))
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { label: "Home", href: "/" },
    NavLink { label: "Suites", href: "/suites" },
    NavLink { label: "Experiences", href: "/experiences" },
    NavLink { label: "Gallery", href: "/gallery" },
    NavLink { label: "Dining", href: "/dining" },
    NavLink { label: "About", href: "/about" },
];

pub const BOOKING: NavLink = NavLink { label: "Book Now", href: "/booking" };

pub const HOTEL_LINKS: [NavLink; 4] = [
    NavLink { label: "Suites & Rooms", href: "/suites" },
    NavLink { label: "Experiences", href: "/experiences" },
    NavLink { label: "Dining", href: "/dining" },
    NavLink { label: "Gallery", href: "/gallery" },
];

pub const BRAND_NAME: &str = "Yatu Hotel";
pub const PHONE: &str = "+251 (0) 91 000 0000";
pub const EMAIL: &str = "stay@yatuhotel.com";

// Calendar mockup
pub const CALENDAR_YEAR: i32 = 2024;
pub const CALENDAR_MONTH: u32 = 3;
pub const SELECTED_DAY: u32 = 23;
pub const HIGHLIGHTED_DAY: u32 = 22;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_path_activates_parent_link() {
        assert!(is_active_path("/suites/ocean-view", "/suites"));
        assert!(is_active_path("/suites", "/suites"));
    }

    #[test]
    fn root_link_only_matches_root() {
        assert!(!is_active_path("/", "/suites"));
        assert!(is_active_path("/", "/"));
        assert!(!is_active_path("/suites", "/"));
    }

    #[test]
    fn every_nav_link_resolves_to_a_route() {
        for link in NAV_LINKS.iter().chain(HOTEL_LINKS.iter()).chain([&BOOKING]) {
            assert_ne!(link.route(), Route::NotFound, "{} has no route", link.href);
        }
    }

    #[test]
    fn local_images_are_bare_file_names() {
        let files = ROOMS.iter().map(|r| r.image).chain(FACILITIES.iter().map(|f| f.image));
        for file in files {
            assert!(!file.contains('/'), "{} should be relative to the asset base", file);
        }
    }

    #[test]
    fn fan_layout_is_symmetric() {
        let n = FACILITIES.len();
        for i in 0..n {
            let a = FACILITIES[i].layout;
            let b = FACILITIES[n - 1 - i].layout;
            assert_eq!(a.rotate, -b.rotate);
            assert_eq!(a.y, b.y);
            assert_eq!(a.z, b.z);
        }
    }
}
