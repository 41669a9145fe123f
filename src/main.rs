use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod animation;
mod config;
mod content;
mod hooks;
mod state;
mod components {
    pub mod calendar;
    pub mod culture;
    pub mod facilities;
    pub mod footer;
    pub mod hero;
    pub mod location;
    pub mod navbar;
    pub mod rooms;
}
mod pages {
    pub mod home;
    pub mod placeholder;
}

use components::navbar::Nav;
use pages::{
    home::Home,
    placeholder::{title_from_slug, NotFound, Placeholder},
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/suites")]
    Suites,
    #[at("/suites/:slug")]
    Suite { slug: String },
    #[at("/experiences")]
    Experiences,
    #[at("/gallery")]
    Gallery,
    #[at("/dining")]
    Dining,
    #[at("/about")]
    About,
    #[at("/booking")]
    Booking,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Suites => {
            info!("Rendering Suites page");
            html! { <Placeholder title="Suites & Rooms" /> }
        },
        Route::Suite { slug } => {
            info!("Rendering Suite page for {}", slug);
            html! { <Placeholder title={title_from_slug(&slug)} subtitle={Some(AttrValue::from("Suites & Rooms"))} /> }
        },
        Route::Experiences => {
            info!("Rendering Experiences page");
            html! { <Placeholder title="Experiences" /> }
        },
        Route::Gallery => {
            info!("Rendering Gallery page");
            html! { <Placeholder title="Gallery" /> }
        },
        Route::Dining => {
            info!("Rendering Dining page");
            html! { <Placeholder title="Dining" /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <Placeholder title="About" /> }
        },
        Route::Booking => {
            info!("Rendering Booking page");
            html! { <Placeholder title="Booking" subtitle={Some(AttrValue::from("Reserve your stay at Yatu"))} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <main class="site-main">
                <Switch<Route> render={switch} />
            </main>
            <style>
                {r#"
                :root {
                    --brand-blue: #1d4ed8;
                    --brand-blue-light: #bfdbfe;
                }

                *,
                *::before,
                *::after {
                    box-sizing: border-box;
                }

                body {
                    margin: 0;
                    min-height: 100vh;
                    background: #fafafa;
                    color: #171717;
                    font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
                }

                h1, h2, p {
                    margin: 0;
                }

                .site-main {
                    position: relative;
                }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Yatu site");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_suite_paths_resolve() {
        assert_eq!(
            Route::recognize("/suites/ocean-view"),
            Some(Route::Suite { slug: "ocean-view".to_string() })
        );
        assert_eq!(Route::recognize("/suites"), Some(Route::Suites));
    }

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::Booking.to_path(), "/booking");
        assert_eq!(Route::Home.to_path(), "/");
    }
}
