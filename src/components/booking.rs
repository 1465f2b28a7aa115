use log::info;
use yew::prelude::*;

use crate::components::icon::Icon;
use crate::components::presence::use_presence;
use crate::config;
use crate::venue::forms::BookingDraft;
use crate::venue::icon::IconKind;

fn field_input(
    draft: &UseStateHandle<BookingDraft>,
    apply: fn(&mut BookingDraft, String),
) -> Callback<InputEvent> {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        apply(&mut next, input.value());
        draft.set(next);
    })
}

#[derive(Properties, PartialEq)]
pub struct BookingTriggerProps {
    pub on_open: Callback<()>,
}

#[function_component(BookingTrigger)]
pub fn booking_trigger(props: &BookingTriggerProps) -> Html {
    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(()))
    };

    html! {
        <button class="booking-trigger" {onclick}>
            <div class="pill pill-green">
                <Icon kind={IconKind::Ship} size={20} />
                <span>{"Book Yacht Experience"}</span>
            </div>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingOverlayProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(BookingOverlay)]
pub fn booking_overlay(props: &BookingOverlayProps) -> Html {
    let presence = use_presence(props.open, config::OVERLAY_EXIT_MS);
    let draft = use_state(BookingDraft::default);

    if !presence.is_mounted() {
        return html! {};
    }

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    let on_book = {
        let draft = draft.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            // No booking service yet; the request only reaches the console.
            info!("Booking requested: {}", *draft);
            draft.set(BookingDraft::default());
            on_close.emit(());
        })
    };

    let guests = draft.guests.map(|n| n.to_string()).unwrap_or_default();

    html! {
        <div class={classes!("overlay", "overlay-top", presence.class())} role="dialog" aria-modal="true" aria-label="Book Yacht Experience">
            <div class="card">
                <div class="card-header">
                    <div class="card-title">
                        <div class="card-badge">
                            <Icon kind={IconKind::Ship} class={classes!("icon-rose")} />
                        </div>
                        <h2>{"Book Yacht Experience"}</h2>
                    </div>
                    <button class="close-button" onclick={on_close} aria-label="Close">
                        <Icon kind={IconKind::Close} />
                    </button>
                </div>
                <div class="form-grid">
                    <div class="form-row two-columns">
                        <div>
                            <label for="date">{"Date"}</label>
                            <input id="date" type="date" value={draft.date.clone()}
                                oninput={field_input(&draft, |d, v| d.date = v)} />
                        </div>
                        <div>
                            <label for="time">{"Time"}</label>
                            <input id="time" type="time" value={draft.time.clone()}
                                oninput={field_input(&draft, |d, v| d.time = v)} />
                        </div>
                    </div>
                    <div>
                        <label for="guests">{"Number of Guests"}</label>
                        <input id="guests" type="number"
                            min={config::MIN_GUESTS.to_string()}
                            max={config::MAX_GUESTS.to_string()}
                            value={guests}
                            oninput={field_input(&draft, |d, v| d.set_guests(&v))} />
                    </div>
                    <div>
                        <label for="notes">{"Special Requests"}</label>
                        <input id="notes" value={draft.notes.clone()}
                            oninput={field_input(&draft, |d, v| d.notes = v)} />
                    </div>
                    <button class="primary-button wide" onclick={on_book}>{"Book Now"}</button>
                </div>
            </div>
        </div>
    }
}
