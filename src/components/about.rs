use yew::prelude::*;

use super::SectionTitle;
use crate::content::About;
use crate::nav::Section;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub about: About,
}

#[function_component(AboutSection)]
pub fn about_section(props: &AboutProps) -> Html {
    let about = &props.about;

    html! {
        <section id={Section::About.id()} class="band about">
            <div class="container">
                <SectionTitle title={about.title.clone()} />
                <div class="about-row">
                    <div class="about-media">
                        <img src={about.image.src.clone()} alt={about.image.alt.clone()} />
                    </div>
                    <div class="about-copy">
                        <h3>{ about.heading.clone() }</h3>
                        { for about.paragraphs.iter().map(|p| html! { <p>{ p.clone() }</p> }) }

                        <div class="highlights">
                            { for about.highlights.iter().map(|h| html! {
                                <div class="card highlight">
                                    <div class="icon" aria-hidden="true">{ h.icon.glyph() }</div>
                                    <h4>{ h.title.clone() }</h4>
                                    <p>{ h.body.clone() }</p>
                                </div>
                            })}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
