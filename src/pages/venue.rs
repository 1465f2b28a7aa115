use std::rc::Rc;

use yew::prelude::*;

use crate::components::{
    audio_toggle::AudioToggle,
    background::BackgroundVideo,
    booking::{BookingOverlay, BookingTrigger},
    detail_overlay::DetailOverlay,
    hotspot::HotspotMarker,
    particles::ParticleField,
    subscribe::{SubscribeTrigger, SubscriptionPanel},
};
use crate::venue::catalog::VenueCatalog;
use crate::venue::state::{VenueAction, VenueState};

#[derive(Properties, PartialEq)]
pub struct InteractiveVenueProps {
    pub catalog: Rc<VenueCatalog>,
}

fn dispatch_with(state: &UseReducerHandle<VenueState>, action: fn() -> VenueAction) -> Callback<()> {
    let dispatcher = state.dispatcher();
    Callback::from(move |_| dispatcher.dispatch(action()))
}

#[function_component(InteractiveVenue)]
pub fn interactive_venue(props: &InteractiveVenueProps) -> Html {
    let state = {
        let catalog = props.catalog.clone();
        use_reducer(move || VenueState::new(catalog))
    };

    let on_select = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: String| dispatcher.dispatch(VenueAction::SelectArea(id)))
    };

    html! {
        <div class="venue">
            <div class="venue-stage">
                <BackgroundVideo />
                <ParticleField />

                if !state.catalog().is_empty() {
                    <div class="hotspot-layer">
                        { for state.catalog().areas().iter().map(|area| html! {
                            <HotspotMarker key={area.id.clone()} area={area.clone()} on_select={on_select.clone()} />
                        }) }
                    </div>
                }

                <BookingTrigger on_open={dispatch_with(&state, || VenueAction::OpenBooking)} />
                <SubscribeTrigger on_open={dispatch_with(&state, || VenueAction::OpenSubscribe)} />

                <BookingOverlay
                    open={state.booking_open}
                    on_close={dispatch_with(&state, || VenueAction::CloseBooking)}
                />
            </div>

            <DetailOverlay
                area={state.selected_area().cloned()}
                on_close={dispatch_with(&state, || VenueAction::CloseDetail)}
            />

            <SubscriptionPanel
                open={state.subscribe_open}
                on_close={dispatch_with(&state, || VenueAction::CloseSubscribe)}
            />

            <AudioToggle />

            <style>
                {r#"
                .venue {
                    position: relative;
                    width: 100%;
                    height: 100vh;
                    overflow: hidden;
                    background: linear-gradient(to bottom, #fb7185, #fda4af, #bbf7d0);
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .venue-stage {
                    position: relative;
                    width: 100%;
                    height: 100%;
                }

                .background-video,
                .background-fallback {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .background-fallback {
                    background: linear-gradient(135deg, #fda4af 0%, #fecdd3 45%, #bbf7d0 100%);
                }

                .particle-field {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }

                .particle {
                    position: absolute;
                    border-radius: 9999px;
                    background: #ffffff;
                    opacity: 0;
                    animation: particleFloat 3s ease-in-out infinite;
                }

                @keyframes particleFloat {
                    0% { transform: translateY(0); opacity: 0; }
                    50% { transform: translateY(-20px); opacity: 1; }
                    100% { transform: translateY(0); opacity: 0; }
                }

                .hotspot-layer {
                    position: absolute;
                    inset: 0;
                }

                .hotspot {
                    position: absolute;
                    background: none;
                    border: none;
                    padding: 0;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }

                .hotspot:hover {
                    transform: scale(1.2);
                }

                .hotspot-marker {
                    position: relative;
                    width: 48px;
                    height: 48px;
                    background: #4ade80;
                    border-radius: 9999px;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .hotspot-wobble {
                    display: flex;
                    animation: wobble 4s linear infinite;
                }

                @keyframes wobble {
                    0% { transform: rotate(0deg); }
                    25% { transform: rotate(5deg); }
                    50% { transform: rotate(0deg); }
                    75% { transform: rotate(-5deg); }
                    100% { transform: rotate(0deg); }
                }

                .hotspot-pulse {
                    position: absolute;
                    inset: -4px;
                    background: rgba(74, 222, 128, 0.3);
                    border-radius: 9999px;
                    animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                }

                @keyframes pulse {
                    50% { opacity: 0.5; }
                }

                .hotspot-label {
                    position: absolute;
                    top: 100%;
                    left: 50%;
                    transform: translateX(-50%);
                    margin-top: 8px;
                    background: rgba(0, 0, 0, 0.75);
                    color: #ffffff;
                    font-size: 0.875rem;
                    padding: 4px 12px;
                    border-radius: 9999px;
                    white-space: nowrap;
                    opacity: 0;
                    transition: opacity 0.2s ease;
                }

                .hotspot:hover .hotspot-label,
                .hotspot:focus-visible .hotspot-label {
                    opacity: 1;
                }

                .icon-rose {
                    color: #e11d48;
                }

                .booking-trigger,
                .subscribe-trigger {
                    background: none;
                    border: none;
                    padding: 0;
                    cursor: pointer;
                    z-index: 10;
                    transition: transform 0.2s ease;
                }

                .booking-trigger:hover,
                .subscribe-trigger:hover {
                    transform: scale(1.1);
                }

                .booking-trigger {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                }

                .subscribe-trigger {
                    position: fixed;
                    bottom: 1rem;
                    right: 1rem;
                }

                .pill {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #ffffff;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                    font-size: 1rem;
                }

                .pill-green { background: #22c55e; }
                .pill-rose { background: #f43f5e; }

                .overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.5);
                    backdrop-filter: blur(4px);
                }

                .overlay-top {
                    z-index: 20;
                }

                .overlay.entering { animation: overlayIn 0.2s ease-out forwards; }
                .overlay.leaving { animation: overlayOut 0.2s ease-in forwards; }

                @keyframes overlayIn {
                    from { opacity: 0; transform: scale(0.8); }
                    to { opacity: 1; transform: scale(1); }
                }

                @keyframes overlayOut {
                    from { opacity: 1; transform: scale(1); }
                    to { opacity: 0; transform: scale(0.8); }
                }

                .card {
                    width: 100%;
                    max-width: 42rem;
                    margin: 0 1rem;
                    padding: 1.5rem;
                    border-radius: 12px;
                    background: linear-gradient(to bottom right, #ffe4e6, #dcfce7);
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2);
                }

                .card-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1rem;
                }

                .card-title {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .card-title h2 {
                    margin: 0;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #e11d48;
                }

                .card-badge {
                    width: 40px;
                    height: 40px;
                    background: #4ade80;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .card-description {
                    margin: 0 0 1rem;
                    color: #15803d;
                }

                .close-button {
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: #15803d;
                }

                .close-button:hover {
                    color: #14532d;
                }

                .carousel {
                    position: relative;
                    width: 100%;
                    max-width: 36rem;
                    margin: 0 auto;
                }

                .carousel-viewport {
                    overflow: hidden;
                    border-radius: 8px;
                }

                .carousel-track {
                    display: flex;
                    transition: transform 0.4s ease;
                }

                .carousel-slide {
                    flex: 0 0 100%;
                }

                .carousel-slide img {
                    display: block;
                    width: 100%;
                    height: auto;
                    border-radius: 8px;
                }

                .carousel-nav {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 32px;
                    height: 32px;
                    border-radius: 9999px;
                    border: 1px solid #86efac;
                    background: #ffffff;
                    cursor: pointer;
                    font-size: 1.25rem;
                    line-height: 1;
                }

                .carousel-nav.prev { left: -3rem; }
                .carousel-nav.next { right: -3rem; }

                .carousel-counter {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.5rem;
                    padding: 2px 8px;
                    border-radius: 9999px;
                    background: rgba(0, 0, 0, 0.55);
                    color: #ffffff;
                    font-size: 0.75rem;
                }

                .carousel-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 0.75rem;
                }

                .carousel-dot {
                    width: 8px;
                    height: 8px;
                    padding: 0;
                    border: none;
                    border-radius: 9999px;
                    background: #fda4af;
                    cursor: pointer;
                }

                .carousel-dot.active {
                    background: #e11d48;
                }

                .form-grid {
                    display: grid;
                    gap: 1rem;
                }

                .form-row.two-columns {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }

                .form-row.labelled {
                    display: grid;
                    grid-template-columns: 1fr 3fr;
                    align-items: center;
                    gap: 1rem;
                }

                .form-row.labelled label {
                    text-align: right;
                }

                .form-grid label {
                    display: block;
                    color: #e11d48;
                    font-size: 0.875rem;
                    margin-bottom: 0.25rem;
                }

                .form-grid input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.5rem 0.75rem;
                    border: 1px solid #86efac;
                    border-radius: 6px;
                    background: #ffffff;
                }

                .form-grid input:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px #f43f5e;
                }

                .primary-button {
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 6px;
                    background: #22c55e;
                    color: #ffffff;
                    cursor: pointer;
                    font-size: 1rem;
                }

                .primary-button:hover {
                    background: #16a34a;
                }

                .primary-button.wide { width: 100%; }
                .primary-button.push-right { margin-left: auto; }

                .sheet-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 30;
                    background: rgba(0, 0, 0, 0.5);
                }

                .sheet {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    height: 400px;
                    box-sizing: border-box;
                    padding: 1.5rem;
                    background: linear-gradient(to right, #ffe4e6, #dcfce7);
                    box-shadow: 0 -10px 30px rgba(0, 0, 0, 0.2);
                }

                .sheet-backdrop.entering .sheet { animation: sheetUp 0.2s ease-out forwards; }
                .sheet-backdrop.leaving .sheet { animation: sheetDown 0.2s ease-in forwards; }

                @keyframes sheetUp {
                    from { transform: translateY(100%); }
                    to { transform: translateY(0); }
                }

                @keyframes sheetDown {
                    from { transform: translateY(0); }
                    to { transform: translateY(100%); }
                }

                .sheet-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                }

                .sheet-header h2 {
                    margin: 0 0 0.5rem;
                    color: #e11d48;
                    font-size: 1.125rem;
                }

                .sheet-header p {
                    margin: 0 0 1rem;
                    color: #15803d;
                    font-size: 0.875rem;
                }

                .audio-toggle {
                    position: fixed;
                    bottom: 1rem;
                    left: 1rem;
                    z-index: 10;
                    padding: 0.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: #22c55e;
                    color: #ffffff;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                    cursor: pointer;
                    font-size: 1.25rem;
                }

                @media (max-width: 640px) {
                    .carousel-nav.prev { left: 0.25rem; }
                    .carousel-nav.next { right: 0.25rem; }

                    .form-row.two-columns {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
