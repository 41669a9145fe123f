use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::{reveal_delay, use_scroll_reveal};
use crate::components::calendar::Calendar;
use crate::config;
use crate::content::{Room, ROOMS};
use crate::hooks::use_carousel;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct RoomCardProps {
    pub room: Room,
    pub index: usize,
    pub active: bool,
    pub on_select: Callback<usize>,
}

#[function_component(RoomCard)]
pub fn room_card(props: &RoomCardProps) -> Html {
    let onclick = {
        let on_select = props.on_select.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| on_select.emit(index))
    };

    html! {
        <div class="room-card-slot" data-reveal="" style={reveal_delay(0.4, 0.12, props.index)}>
            <button
                type="button"
                class={classes!("room-card", props.active.then(|| "active"))}
                aria-pressed={props.active.to_string()}
                {onclick}
            >
                <img src={config::asset_url(props.room.image)} alt={props.room.name} />
                <div class="room-card-overlay"></div>
                <div class="room-card-pill"><span>{"Detail"}</span></div>
                <div class="room-card-name"><p>{props.room.name}</p></div>
            </button>
        </div>
    }
}

#[function_component(RoomsSection)]
pub fn rooms_section() -> Html {
    let section_ref = use_node_ref();
    let carousel = use_carousel(ROOMS.len());
    use_scroll_reveal(section_ref.clone(), 0.7);

    html! {
        <section class="rooms-section" ref={section_ref}>
            <div class="rooms-inner">
                <div class="rooms-left">
                    <div
                        class="rooms-cards"
                        aria-label={format!("Room {} of {}", carousel.state.active() + 1, carousel.state.len())}
                    >
                        { for ROOMS.iter().enumerate().map(|(index, room)| html! {
                            <RoomCard
                                key={room.id}
                                room={*room}
                                {index}
                                active={carousel.state.is_active(index)}
                                on_select={carousel.select.clone()}
                            />
                        }) }
                    </div>

                    <div class="rooms-text" data-reveal="">
                        <div class="rooms-copy">
                            <h2>
                                {"Choose the Best Room"}
                                <span>{"for Your Perfect Stay!"}</span>
                            </h2>
                            <p>
                                {"Experience comfort and style at Yatu Hotel by choosing a room tailored to how you like to rest, whether it's a lakeside sunrise, a quiet workspace, or an art-filled corner to unwind."}
                            </p>
                            <Link<Route> to={Route::Booking} classes="rooms-booking">
                                <span>{"Booking"}</span>
                                <span class="rooms-booking-icon">{"↗"}</span>
                            </Link<Route>>
                        </div>

                        <div class="rooms-arrows">
                            <button type="button" class="rooms-arrow" aria-label="Previous room" onclick={carousel.previous.clone()}>
                                {"←"}
                            </button>
                            <button type="button" class="rooms-arrow" aria-label="Next room" onclick={carousel.next.clone()}>
                                {"→"}
                            </button>
                        </div>
                    </div>
                </div>

                <div class="rooms-right">
                    <p class="rooms-calendar-title">
                        {"Check Your Availability Room"}
                        <span>{"On This Calendar"}</span>
                    </p>
                    <div data-reveal="right" style={reveal_delay(0.7, 0.0, 0)}>
                        <Calendar />
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .rooms-section {
                    width: 100%;
                    padding: 4rem 1rem;
                    background: linear-gradient(to bottom, #ffffff, #93c5fd, #ffffff);
                }

                .rooms-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                }

                .rooms-left {
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .rooms-cards {
                    display: flex;
                    gap: 1rem;
                    overflow-x: auto;
                    padding-bottom: 0.5rem;
                }

                .room-card-slot {
                    flex: 1;
                    min-width: 220px;
                    --reveal-y: 30px;
                    --reveal-duration: 0.7s;
                }

                .room-card {
                    position: relative;
                    display: flex;
                    width: 100%;
                    height: 11rem;
                    padding: 0;
                    border: none;
                    cursor: pointer;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    background: #e5e5e5;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    transition: transform 0.2s ease;
                }

                .room-card:hover {
                    transform: scale(1.02);
                }

                .room-card.active {
                    transform: scale(1.03);
                }

                .room-card img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .room-card-overlay {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.5), rgba(0, 0, 0, 0.05), rgba(0, 0, 0, 0.05));
                }

                .room-card-pill {
                    position: absolute;
                    left: 0.75rem;
                    top: 0.75rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.6);
                    background: rgba(0, 0, 0, 0.3);
                    padding: 0.25rem 0.75rem;
                    backdrop-filter: blur(12px);
                    font-size: 11px;
                    color: rgba(255, 255, 255, 0.9);
                }

                .room-card-name {
                    position: absolute;
                    left: 0.75rem;
                    right: 0.75rem;
                    bottom: 0.75rem;
                    text-align: left;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #ffffff;
                    text-shadow: 0 2px 4px rgba(0, 0, 0, 0.4);
                }

                .rooms-text {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .rooms-copy {
                    max-width: 36rem;
                }

                .rooms-copy h2 {
                    font-family: "Fraunces", serif;
                    font-size: 1.875rem;
                    line-height: 1.375;
                    color: #171717;
                }

                .rooms-copy h2 span,
                .rooms-calendar-title span {
                    display: block;
                }

                .rooms-copy p {
                    margin: 0.75rem 0;
                    font-size: 0.875rem;
                    color: #525252;
                }

                .rooms-booking {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    border-radius: 9999px;
                    border: 1px solid #171717;
                    background: #ffffff;
                    padding: 0.5rem 1.5rem;
                    font-size: 0.75rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.22em;
                    color: #171717;
                    text-decoration: none;
                    transition: background 0.2s, color 0.2s;
                }

                .rooms-booking:hover {
                    background: #171717;
                    color: #ffffff;
                }

                .rooms-booking-icon {
                    display: flex;
                    width: 1.25rem;
                    height: 1.25rem;
                    align-items: center;
                    justify-content: center;
                    border-radius: 9999px;
                    background: #171717;
                    color: #ffffff;
                }

                .rooms-arrows {
                    display: flex;
                    gap: 0.5rem;
                }

                .rooms-arrow {
                    width: 2.25rem;
                    height: 2.25rem;
                    border-radius: 9999px;
                    border: 1px solid #d4d4d4;
                    background: #ffffff;
                    color: #262626;
                    cursor: pointer;
                    transition: background 0.2s, color 0.2s;
                }

                .rooms-arrow:hover {
                    background: #171717;
                    color: #ffffff;
                }

                .rooms-right {
                    width: 100%;
                    max-width: 24rem;
                    align-self: center;
                }

                .rooms-calendar-title {
                    margin-bottom: 1rem;
                    text-align: right;
                    font-family: "Fraunces", serif;
                    font-size: 1.125rem;
                    color: #171717;
                }

                @media (min-width: 768px) {
                    .rooms-section {
                        padding: 6rem 1rem;
                    }
                    .rooms-inner {
                        flex-direction: row;
                        align-items: flex-start;
                        justify-content: space-between;
                    }
                    .rooms-cards {
                        overflow: visible;
                    }
                    .rooms-text {
                        flex-direction: row;
                        align-items: flex-end;
                        justify-content: space-between;
                    }
                    .rooms-copy h2 {
                        font-size: 2.25rem;
                    }
                    .rooms-right {
                        align-self: flex-start;
                    }
                }
                "#}
            </style>
        </section>
    }
}
