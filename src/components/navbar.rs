use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{NavLink, BOOKING, BRAND_NAME, NAV_LINKS};
use crate::hooks::use_menu;
use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_menu();
    let current_path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    let follow = |link: NavLink| {
        let follow = menu.follow.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            follow.emit(link);
        })
    };

    let is_open = menu.state.is_open();

    html! {
        <header class="top-nav">
            <div class="nav-bar">
                <button
                    type="button"
                    class="burger-menu"
                    aria-label={if is_open { "Close menu" } else { "Open menu" }}
                    aria-expanded={is_open.to_string()}
                    onclick={menu.toggle.clone()}
                >
                    { if is_open { "✕" } else { "☰" } }
                </button>

                <div onclick={menu.close.clone()}>
                    <Link<Route> to={Route::Home} classes="nav-brand">
                        <div class="nav-brand-mark"></div>
                        <div class="nav-brand-text">
                            <span class="nav-brand-name">{BRAND_NAME}</span>
                            <span class="nav-brand-sub">{"Bishoftu · Arts & Luxurious Hotel"}</span>
                        </div>
                    </Link<Route>>
                </div>

                <nav class="nav-desktop">
                    <div class="nav-pills" onclick={menu.close.clone()}>
                        { for NAV_LINKS.iter().map(|link| {
                            let active = link.is_active(&current_path);
                            html! {
                                <Link<Route> to={link.route()} classes={classes!("nav-link", active.then(|| "active"))}>
                                    <span>{link.label}</span>
                                </Link<Route>>
                            }
                        }) }
                    </div>
                </nav>

                <div class="nav-book" onclick={menu.close.clone()}>
                    <Link<Route> to={BOOKING.route()} classes="nav-book-link">
                        <span>{BOOKING.label}</span>
                        <span class="nav-book-icon">{"↗"}</span>
                    </Link<Route>>
                </div>

                {
                    if is_open {
                        html! {
                            <nav class="nav-mobile">
                                <ul>
                                    { for NAV_LINKS.iter().map(|link| {
                                        let active = link.is_active(&current_path);
                                        html! {
                                            <li>
                                                <a
                                                    href={link.href}
                                                    class={classes!("nav-mobile-link", active.then(|| "active"))}
                                                    onclick={follow(*link)}
                                                >
                                                    <span>{link.label}</span>
                                                </a>
                                            </li>
                                        }
                                    }) }
                                    <li class="nav-mobile-book">
                                        <a href={BOOKING.href} onclick={follow(BOOKING)}>{BOOKING.label}</a>
                                    </li>
                                </ul>
                            </nav>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 1.25rem;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    display: flex;
                    justify-content: center;
                    padding: 0 1rem;
                    pointer-events: none;
                    animation: navDrop 0.6s cubic-bezier(0.34, 1.3, 0.64, 1) both;
                }

                @keyframes navDrop {
                    from {
                        opacity: 0;
                        transform: translateY(-24px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                .nav-bar {
                    pointer-events: auto;
                    position: relative;
                    display: flex;
                    flex-direction: row-reverse;
                    width: 100%;
                    max-width: 72rem;
                    align-items: center;
                    justify-content: space-between;
                    gap: 0.75rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.7);
                    background: rgba(255, 255, 255, 0.5);
                    padding: 0.5rem 1rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    backdrop-filter: blur(24px);
                }

                .burger-menu {
                    display: inline-flex;
                    width: 2.25rem;
                    height: 2.25rem;
                    align-items: center;
                    justify-content: center;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.8);
                    background: rgba(255, 255, 255, 0.8);
                    color: #171717;
                    cursor: pointer;
                }

                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                }

                .nav-brand-mark {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                    border: 1px solid var(--brand-blue);
                    background: rgba(255, 255, 255, 0.6);
                }

                .nav-brand-text span {
                    display: block;
                    font-size: 11px;
                    line-height: 1.25;
                }

                .nav-brand-name {
                    font-family: "Fraunces", serif;
                    letter-spacing: 0.25em;
                    text-transform: uppercase;
                    color: #404040;
                }

                .nav-brand-sub {
                    color: #737373;
                }

                .nav-desktop {
                    display: none;
                }

                .nav-pills {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.8);
                    background: rgba(255, 255, 255, 0.4);
                    padding: 0.25rem;
                }

                .nav-link {
                    position: relative;
                    padding: 0.25rem 0.5rem;
                    border-radius: 9999px;
                    font-size: 11px;
                    letter-spacing: 0.025em;
                    white-space: nowrap;
                    color: #404040;
                    text-decoration: none;
                    transition: background 0.3s, color 0.3s;
                }

                .nav-link:hover {
                    color: #171717;
                }

                .nav-link.active {
                    background: var(--brand-blue);
                    color: #ffffff;
                }

                .nav-book {
                    display: none;
                }

                .nav-book-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    border-radius: 9999px;
                    border: 1px solid var(--brand-blue-light);
                    background: var(--brand-blue);
                    padding: 0.375rem 1rem;
                    font-size: 11px;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.22em;
                    color: #ffffff;
                    text-decoration: none;
                    transition: background 0.2s, color 0.2s;
                }

                .nav-book-link:hover {
                    background: var(--brand-blue-light);
                    color: var(--brand-blue);
                }

                .nav-book-icon {
                    display: flex;
                    width: 1.25rem;
                    height: 1.25rem;
                    align-items: center;
                    justify-content: center;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.7);
                    background: rgba(255, 255, 255, 0.2);
                    transition: transform 0.2s;
                }

                .nav-book-link:hover .nav-book-icon {
                    transform: translate(1.5px, -1.5px);
                }

                .nav-mobile {
                    position: absolute;
                    left: 0;
                    right: 0;
                    top: 100%;
                    margin-top: 0.75rem;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.8);
                    background: rgba(255, 255, 255, 0.9);
                    padding: 0.75rem 1rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                    backdrop-filter: blur(24px);
                    animation: menuIn 0.18s ease-out both;
                }

                @keyframes menuIn {
                    from {
                        opacity: 0;
                        transform: translateY(-8px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                .nav-mobile ul {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }

                .nav-mobile-link {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    border-radius: 9999px;
                    padding: 0.5rem 0.75rem;
                    font-size: 0.875rem;
                    color: #262626;
                    text-decoration: none;
                }

                .nav-mobile-link:hover {
                    background: #ffffff;
                }

                .nav-mobile-link.active {
                    background: var(--brand-blue);
                    color: #ffffff;
                }

                .nav-mobile-book {
                    margin-top: 0.5rem;
                }

                .nav-mobile-book a {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 9999px;
                    background: var(--brand-blue);
                    padding: 0.5rem 1rem;
                    font-size: 11px;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.22em;
                    color: #ffffff;
                    text-decoration: none;
                }

                @media (min-width: 640px) {
                    .nav-book {
                        display: flex;
                    }
                }

                @media (min-width: 768px) {
                    .nav-bar {
                        flex-direction: row;
                    }
                    .burger-menu,
                    .nav-mobile {
                        display: none;
                    }
                    .nav-desktop {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                }
                "#}
            </style>
        </header>
    }
}
