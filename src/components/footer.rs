use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{BOOKING, BRAND_NAME, EMAIL, HOTEL_LINKS, PHONE};
use crate::Route;

pub fn copyright(year: i32) -> String {
    format!("© {} {}, Bishoftu. All rights reserved.", year, BRAND_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-top">
                    <div class="footer-brand">
                        <div class="footer-brand-row">
                            <div class="footer-brand-mark"></div>
                            <div>
                                <p class="footer-brand-name">{BRAND_NAME}</p>
                                <p class="footer-brand-sub">{"Bishoftu · Lakeside Art Retreat"}</p>
                            </div>
                        </div>
                        <p class="footer-about">
                            {"A calm corner on the shores of Bishoftu, where handcrafted details, warm lighting, and water views create a quiet luxury escape just an hour from Addis."}
                        </p>
                        <Link<Route> to={BOOKING.route()} classes="footer-book">
                            {BOOKING.label}
                        </Link<Route>>
                    </div>

                    <div class="footer-columns">
                        <div class="footer-column">
                            <p class="footer-column-title">{"Hotel"}</p>
                            <ul>
                                { for HOTEL_LINKS.iter().map(|link| html! {
                                    <li>
                                        <Link<Route> to={link.route()}>{link.label}</Link<Route>>
                                    </li>
                                }) }
                            </ul>
                        </div>

                        <div class="footer-column wide">
                            <p class="footer-column-title">{"Visit Us"}</p>
                            <p>{"Bishoftu, Ethiopia"}</p>
                            <p class="footer-muted">
                                {"Overlooking one of the crater lakes, a short drive from Addis Ababa."}
                            </p>
                            <p class="footer-contact"><span aria-hidden="true">{"☏"}</span><span>{PHONE}</span></p>
                            <p class="footer-contact"><span aria-hidden="true">{"✉"}</span><span>{EMAIL}</span></p>
                            <div class="footer-social">
                                <a href="#" aria-label="Instagram">{"IG"}</a>
                                <a href="#" aria-label="Facebook">{"FB"}</a>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{copyright(year)}</p>
                    <div class="footer-legal">
                        <button type="button">{"Privacy Policy"}</button>
                        <span class="footer-dot"></span>
                        <button type="button">{"Terms"}</button>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    width: 100%;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    background: #020617;
                    color: rgba(255, 255, 255, 0.8);
                }

                .footer-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                    padding: 3rem 1rem;
                }

                .footer-top {
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                }

                .footer-brand {
                    max-width: 24rem;
                }

                .footer-brand-row {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .footer-brand-mark {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                    border: 1px solid var(--brand-blue-light);
                    background: rgba(255, 255, 255, 0.1);
                }

                .footer-brand-name {
                    font-family: "Fraunces", serif;
                    font-size: 0.875rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: #ffffff;
                }

                .footer-brand-sub {
                    font-size: 11px;
                    color: rgba(255, 255, 255, 0.6);
                }

                .footer-about {
                    margin: 1rem 0;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.7);
                }

                .footer-book {
                    display: inline-flex;
                    border-radius: 9999px;
                    border: 1px solid var(--brand-blue-light);
                    background: var(--brand-blue);
                    padding: 0.5rem 1.5rem;
                    font-size: 11px;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.22em;
                    color: #ffffff;
                    text-decoration: none;
                    transition: background 0.2s, color 0.2s;
                }

                .footer-book:hover {
                    background: var(--brand-blue-light);
                    color: var(--brand-blue);
                }

                .footer-columns {
                    display: flex;
                    flex: 1;
                    flex-direction: column;
                    gap: 2rem;
                }

                .footer-column {
                    min-width: 140px;
                    font-size: 0.875rem;
                }

                .footer-column.wide {
                    min-width: 180px;
                }

                .footer-column p {
                    margin-bottom: 0.5rem;
                }

                .footer-column ul {
                    list-style: none;
                    padding: 0;
                }

                .footer-column li {
                    margin-bottom: 0.5rem;
                }

                .footer-column a {
                    color: inherit;
                    text-decoration: none;
                }

                .footer-column a:hover {
                    color: #ffffff;
                }

                .footer-column-title {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.22em;
                    color: rgba(255, 255, 255, 0.6);
                }

                .footer-muted {
                    color: rgba(255, 255, 255, 0.6);
                }

                .footer-contact {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .footer-contact span:first-child {
                    color: var(--brand-blue-light);
                }

                .footer-social {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: 0.75rem;
                }

                .footer-social a {
                    display: flex;
                    width: 2rem;
                    height: 2rem;
                    align-items: center;
                    justify-content: center;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(255, 255, 255, 0.05);
                    font-size: 10px;
                    transition: background 0.2s;
                }

                .footer-social a:hover {
                    background: rgba(255, 255, 255, 0.15);
                }

                .footer-bottom {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    justify-content: space-between;
                    gap: 0.75rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding-top: 1.5rem;
                    font-size: 11px;
                    color: rgba(255, 255, 255, 0.5);
                }

                .footer-legal {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 1rem;
                }

                .footer-legal button {
                    border: none;
                    background: none;
                    color: inherit;
                    font-size: inherit;
                    cursor: pointer;
                }

                .footer-legal button:hover {
                    color: #ffffff;
                }

                .footer-dot {
                    width: 0.25rem;
                    height: 0.25rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.3);
                }

                @media (min-width: 768px) {
                    .footer-inner {
                        padding: 4rem 1rem;
                    }
                    .footer-top,
                    .footer-columns {
                        flex-direction: row;
                    }
                    .footer-top {
                        align-items: flex-start;
                        justify-content: space-between;
                    }
                    .footer-columns {
                        justify-content: flex-end;
                    }
                    .footer-bottom {
                        flex-direction: row;
                        align-items: center;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_year_and_brand() {
        assert_eq!(copyright(2025), "© 2025 Yatu Hotel, Bishoftu. All rights reserved.");
    }
}
