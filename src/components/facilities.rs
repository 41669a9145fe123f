use yew::prelude::*;

use crate::animation::{
    reveal_delay, use_scroll_reveal, use_scrub, Anchor, ScrollPoint, Scrub, ScrubRange, Shift,
};
use crate::config;
use crate::content::{Facility, FanLayout, FACILITIES};

// Hovered cards jump above every resting card
const HOVER_Z: i32 = 20;

// Written on the slot, which Yew never restyles after mount; the card inherits it
const CARD_DRIFT: [Scrub; 1] = [Scrub {
    selector: "[data-facility-slot]",
    range: ScrubRange {
        start: ScrollPoint::new(Anchor::Top, Anchor::Bottom),
        end: ScrollPoint::new(Anchor::Bottom, Anchor::Top),
    },
    shift: Shift::Pixels(-10.0),
}];

/// Inline style for a card: resting in the fan, or lifted and straightened on hover.
pub fn card_style(layout: FanLayout, hovered: bool) -> String {
    if hovered {
        format!(
            "--fan-y: {}px; transform: translateY(calc(var(--fan-y) + var(--scrub, 0px))) rotate(0deg) rotateY(6deg) scale(1.08); z-index: {}; transition-duration: 0.4s;",
            layout.y - 24,
            HOVER_Z
        )
    } else {
        format!(
            "--fan-y: {}px; transform: translateY(calc(var(--fan-y) + var(--scrub, 0px))) rotate({}deg); z-index: {}; transition-duration: 0.45s;",
            layout.y, layout.rotate, layout.z
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct FacilityCardProps {
    pub facility: Facility,
    pub index: usize,
}

#[function_component(FacilityCard)]
pub fn facility_card(props: &FacilityCardProps) -> Html {
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <div class="facility-slot" data-facility-slot="" data-reveal="" style={reveal_delay(0.35, 0.12, props.index)}>
            <button
                type="button"
                class="facility-card"
                style={card_style(props.facility.layout, *hovered)}
                {onmouseenter}
                {onmouseleave}
            >
                <img src={config::asset_url(props.facility.image)} alt={props.facility.name} />
                <div class="facility-overlay"></div>
                <div class="facility-label"><p>{props.facility.name}</p></div>
            </button>
        </div>
    }
}

#[function_component(FacilitiesSection)]
pub fn facilities_section() -> Html {
    let section_ref = use_node_ref();
    use_scroll_reveal(section_ref.clone(), 0.75);
    use_scrub(section_ref.clone(), &CARD_DRIFT);

    html! {
        <section class="facilities-section" ref={section_ref}>
            <div class="facilities-inner">
                <div class="facilities-heading" data-reveal="">
                    <p>
                        {"Experience curated spaces that make every moment at Yatu feel considered, from quiet reading corners and work-ready desks to intimate bars and warm, plant-filled lounges."}
                    </p>
                    <h2>
                        {"Premier Facilities and"}
                        <span>{"Guest Services"}</span>
                    </h2>
                </div>

                <div class="facilities-row">
                    { for FACILITIES.iter().enumerate().map(|(index, facility)| html! {
                        <FacilityCard key={facility.id} facility={*facility} {index} />
                    }) }
                </div>

                <div class="facilities-more">
                    <button type="button" class="facilities-see-all">{"See All"}</button>
                </div>
            </div>

            <style>
                {r#"
                .facilities-section {
                    width: 100%;
                    padding: 5rem 1rem;
                    background: linear-gradient(to bottom, #ffffff, #ffffff, #93c5fd);
                }

                .facilities-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                }

                .facilities-heading {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    --reveal-y: 30px;
                }

                .facilities-heading p {
                    max-width: 28rem;
                    font-size: 0.875rem;
                    color: #525252;
                }

                .facilities-heading h2 {
                    font-family: "Fraunces", serif;
                    font-size: 1.875rem;
                    line-height: 1.375;
                    color: #171717;
                }

                .facilities-heading h2 span {
                    display: block;
                    color: #1e40af;
                }

                .facilities-row {
                    display: flex;
                    gap: 1rem;
                    overflow-x: auto;
                    padding-bottom: 1rem;
                    perspective: 1200px;
                }

                .facility-slot {
                    --reveal-duration: 0.7s;
                }

                .facility-card {
                    position: relative;
                    display: flex;
                    height: 280px;
                    min-width: 160px;
                    max-width: 190px;
                    padding: 0;
                    border: none;
                    cursor: pointer;
                    overflow: hidden;
                    border-radius: 32px;
                    background: #e5e5e5;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    transition-property: transform, box-shadow;
                    transition-timing-function: cubic-bezier(0.215, 0.61, 0.355, 1);
                }

                .facility-card:hover {
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.2);
                }

                .facility-card img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .facility-overlay {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.5), rgba(0, 0, 0, 0.1), rgba(0, 0, 0, 0));
                }

                .facility-label {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 1.25rem;
                    padding: 0 1rem;
                    text-align: left;
                    font-size: 13px;
                    color: #ffffff;
                    text-shadow: 0 1px 3px rgba(0, 0, 0, 0.65);
                }

                .facilities-more {
                    display: flex;
                    justify-content: center;
                    padding-top: 1rem;
                }

                .facilities-see-all {
                    border-radius: 9999px;
                    border: 1px solid #d4d4d4;
                    background: #ffffff;
                    padding: 0.5rem 1.5rem;
                    font-size: 0.75rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.22em;
                    color: #262626;
                    cursor: pointer;
                    transition: background 0.2s, color 0.2s;
                }

                .facilities-see-all:hover {
                    background: #171717;
                    color: #ffffff;
                }

                @media (min-width: 768px) {
                    .facilities-section {
                        padding: 6rem 1rem;
                    }
                    .facilities-heading {
                        flex-direction: row;
                        align-items: flex-start;
                        justify-content: space-between;
                    }
                    .facilities-heading h2 {
                        font-size: 2.3rem;
                        text-align: right;
                    }
                    .facilities-row {
                        justify-content: center;
                        overflow: visible;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_card_sits_in_fan() {
        let style = card_style(FACILITIES[0].layout, false);
        assert!(style.contains("--fan-y: 24px"));
        assert!(style.contains("rotate(-14deg)"));
        assert!(style.contains("z-index: 4"));
    }

    #[test]
    fn hovered_card_lifts_straightens_and_comes_forward() {
        let layout = FACILITIES[4].layout;
        let style = card_style(layout, true);
        assert!(style.contains("--fan-y: 0px"));
        assert!(style.contains("rotate(0deg)"));
        assert!(style.contains("scale(1.08)"));
        assert!(FACILITIES.iter().all(|f| f.layout.z < HOVER_Z));
    }

    #[test]
    fn card_style_reads_drift_without_owning_it() {
        for facility in FACILITIES.iter() {
            for hovered in [false, true] {
                let style = card_style(facility.layout, hovered);
                assert!(style.contains("var(--scrub, 0px)"));
                assert!(!style.contains("--scrub:"));
            }
        }
        assert_eq!(CARD_DRIFT[0].selector, "[data-facility-slot]");
    }
}
