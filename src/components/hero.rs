use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::{use_intro, use_scrub, Anchor, ScrollPoint, Scrub, ScrubRange, Shift};
use crate::config;
use crate::Route;

const FROM_TOP: ScrollPoint = ScrollPoint::new(Anchor::Top, Anchor::Top);

const PARALLAX: [Scrub; 3] = [
    Scrub {
        selector: "[data-scrub='text']",
        range: ScrubRange {
            start: FROM_TOP,
            end: ScrollPoint::new(Anchor::Bottom, Anchor::Top).offset(150.0),
        },
        shift: Shift::Percent(-8.0),
    },
    Scrub {
        selector: "[data-scrub='circle']",
        range: ScrubRange {
            start: FROM_TOP,
            end: ScrollPoint::new(Anchor::Bottom, Anchor::Top).offset(150.0),
        },
        shift: Shift::Percent(8.0),
    },
    Scrub {
        selector: "[data-scrub='tagline']",
        range: ScrubRange {
            start: FROM_TOP,
            end: ScrollPoint::new(Anchor::Bottom, Anchor::Top).offset(200.0),
        },
        shift: Shift::Percent(-15.0),
    },
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let section_ref = use_node_ref();
    use_intro(section_ref.clone());
    use_scrub(section_ref.clone(), &PARALLAX);

    html! {
        <section class="hero" ref={section_ref}>
            <div class="hero-background">
                <img src={config::asset_url("yatuhome1.jpg")} alt="Yatu Hotel Bishoftu lounge area" />
                <div class="hero-vignette"></div>
            </div>

            <div class="hero-content">
                <div data-scrub="text">
                    <div class="hero-text" data-reveal="">
                        <p class="hero-eyebrow">{"Bishoftu · Ethiopia"}</p>
                        <h1>
                            {"Book Your"}
                            <span>{"Comfort Room Today."}</span>
                        </h1>
                        <p class="hero-copy">
                            {"A lakeside art retreat where handcrafted details, warm lighting, and calm water views meet understated luxury."}
                        </p>
                        <div class="hero-cta-row">
                            <Link<Route> to={Route::Booking} classes="hero-cta">
                                {"Book your stay"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>

                <div class="hero-preview">
                    <div data-scrub="tagline">
                        <div class="hero-tagline" data-reveal="" style="--reveal-y: 20px; --reveal-delay: 0.9s; --reveal-duration: 1s;">
                            {"Get ready for an artful escape. Reserve your spot now and step into a lakeside retreat crafted for slow mornings and long evenings."}
                        </div>
                    </div>

                    <div data-scrub="circle">
                        <div class="hero-circle" data-reveal="pop" style="--reveal-delay: 0.5s; --reveal-duration: 1s;">
                            <img src={config::asset_url("yatuhome.jpg")} alt="Signature room at Yatu Hotel" />
                            <div class="hero-circle-vignette"></div>
                        </div>
                    </div>

                    <div class="hero-orbit" aria-hidden="true">
                        <div class="hero-orbit-ring">
                            <div class="hero-orbit-label enchanting"><span>{"Enchanting"}</span><i></i></div>
                            <div class="hero-orbit-label unique"><span>{"Unique"}</span><i></i></div>
                            <div class="hero-orbit-label rejuvenate"><span>{"Rejuvenate"}</span><i></i></div>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    width: 100%;
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    padding: 7rem 1rem 4rem;
                    overflow: hidden;
                }

                .hero-background {
                    position: absolute;
                    inset: 0;
                    z-index: -20;
                }

                .hero-background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: brightness(0.7);
                }

                .hero-vignette {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right, rgba(0, 0, 0, 0.55), rgba(0, 0, 0, 0.25), rgba(0, 0, 0, 0.1));
                }

                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 72rem;
                    width: 100%;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                }

                .hero-text {
                    max-width: 36rem;
                    text-align: left;
                    --reveal-duration: 1s;
                }

                .hero-eyebrow {
                    font-size: 11px;
                    letter-spacing: 0.35em;
                    text-transform: uppercase;
                    color: rgba(255, 255, 255, 0.8);
                }

                .hero-text h1 {
                    margin: 1.25rem 0;
                    font-family: "Fraunces", serif;
                    font-size: 2.25rem;
                    line-height: 1.25;
                    color: #ffffff;
                }

                .hero-text h1 span {
                    display: block;
                }

                .hero-copy {
                    max-width: 28rem;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.85);
                }

                .hero-cta-row {
                    padding-top: 1.75rem;
                }

                .hero-cta {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 9999px;
                    background: #2563eb;
                    padding: 0.625rem 2rem;
                    font-size: 11px;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.22em;
                    color: #ffffff;
                    text-decoration: none;
                    box-shadow: 0 4px 6px rgba(59, 130, 246, 0.3);
                    transition: background 0.2s;
                }

                .hero-cta:hover {
                    background: #3b82f6;
                }

                .hero-preview {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }

                .hero-tagline {
                    max-width: 20rem;
                    text-align: right;
                    font-size: 12px;
                    color: rgba(255, 255, 255, 0.9);
                }

                .hero-circle {
                    position: relative;
                    width: 14rem;
                    height: 14rem;
                    border-radius: 9999px;
                    overflow: hidden;
                    border: 5px solid rgba(255, 255, 255, 0.9);
                    background: #e5e5e5;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }

                .hero-circle img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .hero-circle-vignette {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.4), transparent, rgba(0, 0, 0, 0.1));
                }

                .hero-orbit {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .hero-orbit-ring {
                    position: relative;
                    width: 16rem;
                    height: 16rem;
                }

                .hero-orbit-label {
                    position: absolute;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 11px;
                    color: #ffffff;
                }

                .hero-orbit-label i {
                    width: 0.625rem;
                    height: 0.625rem;
                    border-radius: 9999px;
                    background: #ffffff;
                }

                .hero-orbit-label.enchanting { top: -0.25rem; right: 0.75rem; }
                .hero-orbit-label.unique { top: 50%; right: 0; transform: translateY(-50%); }
                .hero-orbit-label.rejuvenate { bottom: 0.75rem; right: 1.5rem; }

                @media (min-width: 768px) {
                    .hero-content {
                        flex-direction: row;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .hero-text h1 {
                        font-size: 3rem;
                    }
                    .hero-copy {
                        font-size: 1rem;
                    }
                    .hero-preview {
                        align-items: flex-end;
                    }
                    .hero-circle {
                        width: 18rem;
                        height: 18rem;
                    }
                    .hero-orbit {
                        justify-content: flex-end;
                    }
                    .hero-orbit-ring {
                        width: 20rem;
                        height: 20rem;
                    }
                }

                @media (min-width: 1024px) {
                    .hero-text h1 {
                        font-size: 3.75rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
