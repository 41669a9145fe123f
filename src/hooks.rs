use yew::prelude::*;
use yew_router::prelude::*;
use log::debug;

use crate::content::NavLink;
use crate::state::{Carousel, MenuState};

pub struct UseCarouselHandle {
    pub state: UseStateHandle<Carousel>,
    pub select: Callback<usize>,
    pub next: Callback<MouseEvent>,
    pub previous: Callback<MouseEvent>,
}

/// Carousel over `len` items, reset to the first one on every mount.
#[hook]
pub fn use_carousel(len: usize) -> UseCarouselHandle {
    let state = use_state(|| Carousel::new(len));

    let select = {
        let state = state.clone();
        Callback::from(move |index: usize| {
            state.set(state.select(index));
        })
    };

    let next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.set(state.next());
        })
    };

    let previous = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.set(state.previous());
        })
    };

    UseCarouselHandle {
        state,
        select,
        next,
        previous,
    }
}

pub struct UseMenuHandle {
    pub state: UseStateHandle<MenuState>,
    pub toggle: Callback<MouseEvent>,
    pub close: Callback<MouseEvent>,
    pub follow: Callback<NavLink>,
}

#[hook]
pub fn use_menu() -> UseMenuHandle {
    let state = use_state(MenuState::default);
    let navigator = use_navigator();

    let toggle = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.set(state.toggle());
        })
    };

    let close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.set(state.close());
        })
    };

    // Closes the menu, then asks the router to move to the link target
    let follow = {
        let state = state.clone();
        Callback::from(move |link: NavLink| {
            let (next, route) = state.follow(&link);
            state.set(next);
            debug!("Navigating to {}", link.href);
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    };

    UseMenuHandle {
        state,
        toggle,
        close,
        follow,
    }
}
