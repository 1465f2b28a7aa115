use yew::prelude::*;

use crate::components::icon::Icon;
use crate::venue::catalog::VenueArea;

#[derive(Properties, PartialEq)]
pub struct HotspotProps {
    pub area: VenueArea,
    pub on_select: Callback<String>,
}

#[function_component(HotspotMarker)]
pub fn hotspot_marker(props: &HotspotProps) -> Html {
    let onclick = {
        let id = props.area.id.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_select.emit(id.clone());
        })
    };

    let position = format!(
        "left: {}%; top: {}%;",
        props.area.position.x, props.area.position.y
    );

    html! {
        <button class="hotspot" style={position} {onclick} aria-label={props.area.name.clone()}>
            <div class="hotspot-marker">
                <div class="hotspot-wobble">
                    <Icon kind={props.area.icon} class={classes!("icon-rose")} />
                </div>
                <div class="hotspot-pulse"></div>
            </div>
            <div class="hotspot-label">{&props.area.name}</div>
        </button>
    }
}
