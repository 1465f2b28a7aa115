use log::warn;
use yew::prelude::*;

use crate::config;

#[function_component(BackgroundVideo)]
pub fn background_video() -> Html {
    let failed = use_state(|| false);

    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| {
            warn!("Background video {} could not be loaded", config::BACKGROUND_VIDEO);
            failed.set(true);
        })
    };

    if *failed {
        return html! { <div class="background-fallback"></div> };
    }

    html! {
        <video class="background-video" autoplay=true loop=true muted=true playsinline=true>
            <source src={config::BACKGROUND_VIDEO} type="video/mp4" {onerror} />
            {"Your browser does not support the video tag."}
        </video>
    }
}
