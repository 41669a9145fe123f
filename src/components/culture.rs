use yew::prelude::*;

use crate::animation::{reveal_delay, use_scroll_reveal};
use crate::content::{CultureImage, OCEAN_CLIFF, STATUE, TERRACES, WATERFALL};

// Grid placement, in paint order
const TILES: [(CultureImage, &str); 4] = [
    (TERRACES, "culture-tile tall"),
    (OCEAN_CLIFF, "culture-tile"),
    (STATUE, "culture-tile tall"),
    (WATERFALL, "culture-tile low"),
];

#[function_component(CultureSection)]
pub fn culture_section() -> Html {
    let section_ref = use_node_ref();
    use_scroll_reveal(section_ref.clone(), 0.8);

    html! {
        <section class="culture-section" ref={section_ref}>
            <div class="culture-inner">
                <div class="culture-heading" data-reveal="">
                    <h2>
                        {"Experience the Local"}
                        <span>{"Culture and Sights"}</span>
                    </h2>

                    <div class="culture-aside">
                        <p>
                            {"Discover Bishoftu's crater lakes, lush landscapes, and cultural landmarks: curated day trips and guided experiences that turn your stay at Yatu into a story worth telling."}
                        </p>
                        <button type="button" class="culture-more">
                            {"More Info"}
                            <span class="culture-more-icon">{"↗"}</span>
                        </button>
                    </div>
                </div>

                <div class="culture-grid">
                    { for TILES.iter().enumerate().map(|(index, (image, class))| html! {
                        <div class={*class} data-reveal="" style={reveal_delay(0.4, 0.12, index)}>
                            <img src={image.src} alt={image.alt} loading="lazy" />
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .culture-section {
                    width: 100%;
                    padding: 5rem 1rem;
                    background: #ffffff;
                }

                .culture-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                }

                .culture-heading {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    --reveal-y: 30px;
                }

                .culture-heading h2 {
                    font-family: "Fraunces", serif;
                    font-size: 1.875rem;
                    line-height: 1.25;
                    color: #171717;
                }

                .culture-heading h2 span {
                    display: block;
                }

                .culture-aside {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    gap: 1rem;
                }

                .culture-aside p {
                    font-size: 0.875rem;
                    color: #525252;
                }

                .culture-more {
                    display: inline-flex;
                    align-items: center;
                    border-radius: 9999px;
                    border: 1px solid #d4d4d4;
                    background: #ffffff;
                    padding: 0.5rem 1.5rem;
                    font-size: 0.75rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.22em;
                    color: #171717;
                    cursor: pointer;
                    transition: background 0.2s, color 0.2s;
                }

                .culture-more:hover {
                    background: #171717;
                    color: #ffffff;
                }

                .culture-more-icon {
                    display: flex;
                    margin-left: 0.5rem;
                    width: 1.25rem;
                    height: 1.25rem;
                    align-items: center;
                    justify-content: center;
                    border-radius: 9999px;
                    background: #171717;
                    color: #ffffff;
                }

                .culture-grid {
                    display: grid;
                    gap: 1rem;
                }

                .culture-tile {
                    position: relative;
                    height: 180px;
                    border-radius: 32px;
                    overflow: hidden;
                    background: #e5e5e5;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    --reveal-duration: 0.7s;
                }

                .culture-tile.tall {
                    height: 260px;
                }

                .culture-tile.low {
                    height: 200px;
                }

                .culture-tile img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                @media (min-width: 768px) {
                    .culture-section {
                        padding: 6rem 1rem;
                    }
                    .culture-heading {
                        flex-direction: row;
                        align-items: flex-start;
                        justify-content: space-between;
                    }
                    .culture-heading h2 {
                        font-size: 2.3rem;
                    }
                    .culture-aside {
                        max-width: 24rem;
                        align-items: flex-end;
                        text-align: right;
                    }
                    .culture-grid {
                        grid-template-columns: minmax(0, 1.1fr) minmax(0, 0.9fr) minmax(0, 1.1fr);
                        grid-auto-rows: minmax(0, 180px);
                    }
                    .culture-tile.tall {
                        grid-row: span 2;
                        height: 100%;
                    }
                    .culture-tile.low {
                        height: 210px;
                    }
                }
                "#}
            </style>
        </section>
    }
}
