use log::warn;
use yew::prelude::*;

use crate::config;
use crate::venue::carousel::CarouselPosition;

#[derive(Properties, PartialEq)]
pub struct ImageCarouselProps {
    pub name: String,
    pub images: Vec<String>,
}

#[derive(Properties, PartialEq)]
struct SlideProps {
    src: String,
    alt: String,
}

#[function_component(Slide)]
fn slide(props: &SlideProps) -> Html {
    let broken = use_state(|| false);

    let onerror = {
        let broken = broken.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            if *broken {
                return; // placeholder failed too
            }
            warn!("Venue image {} could not be loaded", src);
            broken.set(true);
        })
    };

    let src = if *broken {
        config::BROKEN_MEDIA_PLACEHOLDER.to_string()
    } else {
        props.src.clone()
    };

    html! {
        <div class="carousel-slide">
            <img
                src={src}
                alt={props.alt.clone()}
                width="600"
                height="400"
                {onerror}
            />
        </div>
    }
}

#[function_component(ImageCarousel)]
pub fn image_carousel(props: &ImageCarouselProps) -> Html {
    let position = use_state(|| CarouselPosition::new(props.images.len()));

    let on_prev = {
        let position = position.clone();
        Callback::from(move |_: MouseEvent| position.set(position.prev()))
    };
    let on_next = {
        let position = position.clone();
        Callback::from(move |_: MouseEvent| position.set(position.next()))
    };

    let multiple = position.len() > 1;

    html! {
        <div class="carousel" aria-roledescription="carousel">
            <div class="carousel-viewport">
                <div class="carousel-track" style={position.track_offset()}>
                    { for props.images.iter().enumerate().map(|(i, src)| html! {
                        <Slide
                            key={i.to_string()}
                            src={src.clone()}
                            alt={format!("{} image {}", props.name, i + 1)}
                        />
                    }) }
                </div>
            </div>
            if multiple {
                <>
                <button class="carousel-nav prev" onclick={on_prev} aria-label="Previous slide">{"‹"}</button>
                <button class="carousel-nav next" onclick={on_next} aria-label="Next slide">{"›"}</button>
                <div class="carousel-counter">
                    {format!("{} / {}", position.index() + 1, position.len())}
                </div>
                <div class="carousel-dots">
                    { for (0..position.len()).map(|i| {
                        let active = position.is_current(i).then_some("active");
                        let onclick = {
                            let position = position.clone();
                            Callback::from(move |_: MouseEvent| position.set(position.go_to(i)))
                        };
                        html! {
                            <button
                                class={classes!("carousel-dot", active)}
                                {onclick}
                                aria-label={format!("Go to slide {}", i + 1)}
                            />
                        }
                    }) }
                </div>
                </>
            }
        </div>
    }
}
