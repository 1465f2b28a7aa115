use log::{debug, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{js_sys, HtmlAudioElement, HtmlMediaElement};
use yew::prelude::*;

use crate::config;
use crate::venue::playback::{MediaError, PlaybackState};

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Drives the element towards `target`. Starting playback hands back the
/// pending play promise, which may still be rejected by the browser.
fn apply(audio: &HtmlMediaElement, target: PlaybackState) -> Result<Option<js_sys::Promise>, MediaError> {
    match target {
        PlaybackState::Playing => audio
            .play()
            .map(Some)
            .map_err(|e| MediaError::Playback(describe(&e))),
        PlaybackState::Paused => audio
            .pause()
            .map(|_| None)
            .map_err(|e| MediaError::Playback(describe(&e))),
    }
}

/// The only owner of the ambient `<audio>` element.
#[function_component(AudioToggle)]
pub fn audio_toggle() -> Html {
    let audio_ref = use_node_ref();
    let playback = use_state(PlaybackState::default);

    let onclick = {
        let audio_ref = audio_ref.clone();
        let playback = playback.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(audio) = audio_ref.cast::<HtmlAudioElement>() else {
                warn!("{}", MediaError::Missing("audio"));
                return;
            };

            let next = (*playback).toggled();
            match apply(&audio, next) {
                Ok(pending) => {
                    debug!("Ambient audio {:?}", next);
                    playback.set(next);
                    if let Some(promise) = pending {
                        let setter = playback.setter();
                        spawn_local(async move {
                            if let Err(err) = JsFuture::from(promise).await {
                                gloo_console::warn!("Ambient audio rejected:", err.clone());
                                warn!("{}", MediaError::Playback(describe(&err)));
                                setter.set(PlaybackState::Paused);
                            }
                        });
                    }
                }
                Err(err) => warn!("{}", err),
            }
        })
    };

    html! {
        <>
            <button
                class="audio-toggle"
                {onclick}
                aria-label={playback.aria_label()}
                aria-pressed={playback.is_playing().to_string()}
            >
                {playback.glyph()}
            </button>
            <audio ref={audio_ref} loop=true src={config::AMBIENT_AUDIO} />
        </>
    }
}
