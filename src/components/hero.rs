use yew::prelude::*;

use crate::content::{ActionStyle, Hero};
use crate::nav::Section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: Hero,
    pub on_navigate: Callback<Section>,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let hero = &props.hero;
    let (lead, accent, tail) = &hero.headline;

    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="hero-shade"></div>
            <div class="container hero-row">
                <div class="hero-copy">
                    <h1>{ lead.clone() }{ " " }<span class="accent">{ accent.clone() }</span>{ " " }{ tail.clone() }</h1>
                    <p class="hero-blurb">{ hero.blurb.clone() }</p>
                    <div class="hero-actions">
                        { for hero.actions.iter().map(|a| {
                            let target = a.target;
                            let class = match a.style {
                                ActionStyle::Solid => "btn",
                                ActionStyle::Outline => "btn btn-outline",
                            };
                            html! {
                                <button {class} onclick={props.on_navigate.reform(move |_: MouseEvent| target)}>
                                    { a.label.clone() }
                                </button>
                            }
                        })}
                    </div>
                </div>
                <div class="hero-media">
                    <img src={hero.image.src.clone()} alt={hero.image.alt.clone()} />
                </div>
            </div>
        </section>
    }
}
