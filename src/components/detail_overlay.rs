use yew::prelude::*;

use crate::components::carousel::ImageCarousel;
use crate::components::icon::Icon;
use crate::components::presence::use_presence;
use crate::config;
use crate::venue::catalog::VenueArea;
use crate::venue::icon::IconKind;

#[derive(Properties, PartialEq)]
pub struct DetailOverlayProps {
    pub area: Option<VenueArea>,
    pub on_close: Callback<()>,
}

#[function_component(DetailOverlay)]
pub fn detail_overlay(props: &DetailOverlayProps) -> Html {
    let presence = use_presence(props.area.is_some(), config::OVERLAY_EXIT_MS);
    // Keeps the last area on screen while the exit animation runs.
    let shown = use_mut_ref(|| props.area.clone());
    if props.area.is_some() {
        *shown.borrow_mut() = props.area.clone();
    }

    if !presence.is_mounted() {
        return html! {};
    }
    let Some(area) = shown.borrow().clone() else {
        return html! {};
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    html! {
        <div class={classes!("overlay", presence.class())} role="dialog" aria-modal="true" aria-label={area.name.clone()}>
            <div class="card">
                <div class="card-header">
                    <div class="card-title">
                        <div class="card-badge">
                            <Icon kind={area.icon} class={classes!("icon-rose")} />
                        </div>
                        <h2>{&area.name}</h2>
                    </div>
                    <button class="close-button" onclick={on_close} aria-label="Close">
                        <Icon kind={IconKind::Close} />
                    </button>
                </div>
                <p class="card-description">{&area.description}</p>
                <ImageCarousel key={area.id.clone()} name={area.name.clone()} images={area.images.clone()} />
            </div>
        </div>
    }
}
