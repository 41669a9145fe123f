use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct PlaceholderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

/// Stand-in for sections of the site that only exist as link targets so far.
#[function_component(Placeholder)]
pub fn placeholder(props: &PlaceholderProps) -> Html {
    html! {
        <div class="placeholder-page">
            <div class="placeholder-card">
                <p class="placeholder-eyebrow">{"Yatu Hotel · Bishoftu"}</p>
                <h1>{props.title.clone()}</h1>
                {
                    if let Some(subtitle) = &props.subtitle {
                        html! { <p class="placeholder-subtitle">{subtitle.clone()}</p> }
                    } else {
                        html! {}
                    }
                }
                <p class="placeholder-copy">{"This page is being prepared. Check back soon."}</p>
                <Link<Route> to={Route::Home} classes="placeholder-home">
                    {"Back to home"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .placeholder-page {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 8rem 1rem 4rem;
                    background: linear-gradient(to bottom, #ffffff, #93c5fd);
                }

                .placeholder-card {
                    max-width: 32rem;
                    text-align: center;
                    border-radius: 1.5rem;
                    border: 1px solid #dbeafe;
                    background: rgba(255, 255, 255, 0.8);
                    padding: 2.5rem 2rem;
                    box-shadow: 0 10px 15px rgba(219, 234, 254, 0.4);
                }

                .placeholder-eyebrow {
                    font-size: 11px;
                    text-transform: uppercase;
                    letter-spacing: 0.28em;
                    color: rgba(29, 78, 216, 0.8);
                }

                .placeholder-card h1 {
                    margin: 0.75rem 0;
                    font-family: "Fraunces", serif;
                    font-size: 2.25rem;
                    color: #171717;
                }

                .placeholder-subtitle {
                    font-size: 1rem;
                    color: #404040;
                }

                .placeholder-copy {
                    margin: 1rem 0 1.5rem;
                    font-size: 0.875rem;
                    color: #525252;
                }

                .placeholder-home {
                    display: inline-flex;
                    border-radius: 9999px;
                    background: #2563eb;
                    padding: 0.5rem 1.5rem;
                    font-size: 11px;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.22em;
                    color: #ffffff;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Placeholder title="Page not found" subtitle={Some(AttrValue::from("We couldn't find what you were looking for."))} />
    }
}

/// "ocean-view" -> "Ocean View"
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_becomes_title() {
        assert_eq!(title_from_slug("ocean-view"), "Ocean View");
        assert_eq!(title_from_slug("lake--suite"), "Lake Suite");
        assert_eq!(title_from_slug(""), "");
    }
}
