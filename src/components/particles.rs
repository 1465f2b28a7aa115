use web_sys::js_sys;
use yew::prelude::*;

use crate::config;
use crate::venue::particle::ParticleStyle;

#[derive(Properties, PartialEq)]
pub struct ParticleProps {
    pub index: usize,
}

/// Renders nothing until mounted so the random layout is only ever
/// computed on the client, then keeps it for the particle's lifetime.
#[function_component(Particle)]
pub fn particle(props: &ParticleProps) -> Html {
    let style = use_state(|| None::<ParticleStyle>);

    {
        let style = style.clone();
        let index = props.index;
        use_effect_with_deps(
            move |_| {
                style.set(Some(ParticleStyle::from_samples(index, js_sys::Math::random)));
                || ()
            },
            (),
        );
    }

    match *style {
        Some(style) => html! { <div class="particle" style={style.to_css()}></div> },
        None => html! {},
    }
}

#[function_component(ParticleField)]
pub fn particle_field() -> Html {
    html! {
        <div class="particle-field" aria-hidden="true">
            { for (0..config::PARTICLE_COUNT).map(|i| html! {
                <Particle key={i.to_string()} index={i} />
            }) }
        </div>
    }
}
