use yew::prelude::*;

use crate::animation::use_scroll_reveal;
use crate::config;

#[function_component(LocationSection)]
pub fn location_section() -> Html {
    let section_ref = use_node_ref();
    use_scroll_reveal(section_ref.clone(), 0.8);

    html! {
        <section class="location-section" ref={section_ref}>
            <div class="location-inner" data-reveal="">
                <div class="location-card-wrap">
                    <div class="location-card">
                        <p class="location-eyebrow">{"Find Us"}</p>
                        <h2>
                            {"Lakeside in Bishoftu,"}
                            <span>{"just an hour from Addis."}</span>
                        </h2>
                        <p class="location-copy">
                            {"Yatu Hotel is tucked along one of Bishoftu's crater lakes, away from the city rush but close enough for an effortless weekend escape. Easy road access, calm surroundings, and views that make you forget your notifications exist."}
                        </p>

                        <div class="location-address">
                            <p>
                                <span class="location-pin" aria-hidden="true">{"⌖"}</span>
                                <span>
                                    {"Yatu Hotel, Lakeside Road"}
                                    <br />
                                    {"Bishoftu, Oromia, Ethiopia"}
                                </span>
                            </p>
                            <p class="location-note">
                                {"Exact directions and navigation are available on Google Maps and other map apps."}
                            </p>
                        </div>

                        <a href={config::DIRECTIONS_URL} target="_blank" rel="noreferrer" class="location-directions">
                            <span aria-hidden="true">{"➤"}</span>
                            <span>{"Get Directions"}</span>
                        </a>
                    </div>
                </div>

                <div class="location-map-wrap">
                    <div class="location-map">
                        <iframe
                            src={config::MAP_EMBED_URL}
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade"
                            aria-label="Map showing Yatu Hotel location in Bishoftu"
                        ></iframe>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .location-section {
                    width: 100%;
                    padding: 5rem 1rem;
                    background: linear-gradient(to bottom, #93c5fd, #ffffff, #ffffff);
                }

                .location-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                    --reveal-duration: 0.9s;
                }

                .location-card-wrap,
                .location-map-wrap {
                    flex: 1;
                }

                .location-card {
                    height: 100%;
                    border-radius: 1.5rem;
                    border: 1px solid #dbeafe;
                    background: rgba(255, 255, 255, 0.8);
                    padding: 1.5rem;
                    box-shadow: 0 10px 15px rgba(219, 234, 254, 0.4);
                    backdrop-filter: blur(24px);
                }

                .location-eyebrow {
                    font-size: 11px;
                    text-transform: uppercase;
                    letter-spacing: 0.28em;
                    color: rgba(29, 78, 216, 0.8);
                }

                .location-card h2 {
                    margin-top: 0.75rem;
                    font-family: "Fraunces", serif;
                    font-size: 1.875rem;
                    line-height: 1.375;
                    color: #171717;
                }

                .location-card h2 span {
                    display: block;
                }

                .location-copy {
                    margin-top: 1rem;
                    font-size: 0.875rem;
                    color: #525252;
                }

                .location-address {
                    margin-top: 1.5rem;
                    font-size: 0.875rem;
                    color: #404040;
                }

                .location-address p {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                }

                .location-pin {
                    color: #2563eb;
                }

                .location-note {
                    font-size: 0.75rem;
                    color: #737373;
                }

                .location-directions {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                    border-radius: 9999px;
                    background: #2563eb;
                    padding: 0.5rem 1.5rem;
                    font-size: 11px;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.22em;
                    color: #ffffff;
                    text-decoration: none;
                    box-shadow: 0 4px 6px rgba(59, 130, 246, 0.3);
                    transition: background 0.2s;
                }

                .location-directions:hover {
                    background: #3b82f6;
                }

                .location-map {
                    height: 320px;
                    overflow: hidden;
                    border-radius: 32px;
                    border: 1px solid #dbeafe;
                    background: rgba(239, 246, 255, 0.4);
                    box-shadow: 0 10px 15px rgba(219, 234, 254, 0.4);
                }

                .location-map iframe {
                    width: 100%;
                    height: 100%;
                    border: 0;
                }

                @media (min-width: 768px) {
                    .location-section {
                        padding: 6rem 1rem;
                    }
                    .location-inner {
                        flex-direction: row;
                        align-items: stretch;
                        justify-content: space-between;
                    }
                    .location-card {
                        padding: 2rem;
                    }
                    .location-card h2 {
                        font-size: 2.1rem;
                    }
                    .location-map {
                        height: 100%;
                    }
                }
                "#}
            </style>
        </section>
    }
}
