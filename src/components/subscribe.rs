use log::info;
use yew::prelude::*;

use crate::components::icon::Icon;
use crate::components::presence::use_presence;
use crate::config;
use crate::venue::forms::SubscriptionDraft;
use crate::venue::icon::IconKind;

#[derive(Properties, PartialEq)]
pub struct SubscribeTriggerProps {
    pub on_open: Callback<()>,
}

#[function_component(SubscribeTrigger)]
pub fn subscribe_trigger(props: &SubscribeTriggerProps) -> Html {
    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(()))
    };

    html! {
        <button class="subscribe-trigger" {onclick}>
            <div class="pill pill-rose">
                <Icon kind={IconKind::ArrowUp} size={20} />
                <span>{"Subscribe Now"}</span>
            </div>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct SubscriptionPanelProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(SubscriptionPanel)]
pub fn subscription_panel(props: &SubscriptionPanelProps) -> Html {
    let presence = use_presence(props.open, config::OVERLAY_EXIT_MS);
    let draft = use_state(SubscriptionDraft::default);

    if !presence.is_mounted() {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_input = |apply: fn(&mut SubscriptionDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        })
    };

    let on_subscribe = {
        let draft = draft.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            // No subscription service yet; the signup only reaches the console.
            info!("Subscription requested: {}", *draft);
            draft.set(SubscriptionDraft::default());
            on_close.emit(());
        })
    };

    html! {
        <div class={classes!("sheet-backdrop", presence.class())} onclick={close.clone()}>
            <div class="sheet" role="dialog" aria-modal="true" aria-labelledby="sheet-title" onclick={keep_open}>
                <button class="close-button sheet-close" onclick={close} aria-label="Close">
                    <Icon kind={IconKind::Close} size={16} />
                </button>
                <div class="sheet-header">
                    <h2 id="sheet-title">{"Join The Morning Party"}</h2>
                    <p>{"Subscribe to get exclusive access to our sunrise experiences and special events."}</p>
                </div>
                <div class="form-grid">
                    <div class="form-row labelled">
                        <label for="name">{"Name"}</label>
                        <input id="name" value={draft.name.clone()}
                            oninput={on_input(|d, v| d.name = v)} />
                    </div>
                    <div class="form-row labelled">
                        <label for="email">{"Email"}</label>
                        <input id="email" type="email" value={draft.email.clone()}
                            oninput={on_input(|d, v| d.email = v)} />
                    </div>
                    <div class="form-row labelled">
                        <label for="phone">{"Phone"}</label>
                        <input id="phone" type="tel" value={draft.phone.clone()}
                            oninput={on_input(|d, v| d.phone = v)} />
                    </div>
                    <button class="primary-button push-right" onclick={on_subscribe}>{"Subscribe"}</button>
                </div>
            </div>
        </div>
    }
}
