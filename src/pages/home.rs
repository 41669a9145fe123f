use yew::prelude::*;

use crate::animation::REVEAL_CSS;
use crate::components::{
    culture::CultureSection, facilities::FacilitiesSection, footer::Footer, hero::Hero,
    location::LocationSection, rooms::RoomsSection,
};

#[function_component(Home)]
pub fn home() -> Html {
    // Land on the hero, not wherever the previous page was scrolled to
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="home-page">
            <Hero />
            <RoomsSection />
            <FacilitiesSection />
            <CultureSection />
            <LocationSection />
            <Footer />
            <style>{REVEAL_CSS}</style>
        </div>
    }
}
