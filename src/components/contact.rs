use yew::prelude::*;

use super::SectionTitle;
use crate::content::{Contact, Icon};
use crate::dom;
use crate::nav::Section;

pub const ACKNOWLEDGEMENT: &str = "Message sent! (This is a demo)";

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub contact: Contact,
}

fn detail(icon: Icon, title: &str, lines: Html) -> Html {
    html! {
        <div class="detail">
            <span class="icon" aria-hidden="true">{ icon.glyph() }</span>
            <div>
                <h4>{ title }</h4>
                { lines }
            </div>
        </div>
    }
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactProps) -> Html {
    let c = &props.contact;

    // type=button: the form never submits anywhere
    let on_send = Callback::from(|_: MouseEvent| dom::acknowledge(ACKNOWLEDGEMENT));

    html! {
        <section id={Section::Contact.id()} class="band contact">
            <div class="container">
                <SectionTitle title={c.title.clone()} />
                <div class="contact-row">
                    <div class="card contact-card">
                        <h3>{ "Get In Touch" }</h3>
                        { detail(Icon::MapPin, "Address", html! { <p class="small">{ c.address.clone() }</p> }) }
                        { detail(Icon::Clock, "Hours", html! {
                            <>{ for c.hours.iter().map(|h| html! { <p class="small">{ h.clone() }</p> }) }</>
                        }) }
                        { detail(Icon::Phone, "Contact", html! {
                            <>
                                <p class="small">{ format!("Phone: {}", c.phone) }</p>
                                <p class="small">{ format!("Email: {}", c.email) }</p>
                            </>
                        }) }

                        <h4 class="follow">{ "Follow Us" }</h4>
                        <div class="socials">
                            { for c.socials.iter().map(|s| html! {
                                <a class="chip" href={s.href.clone()} aria-label={s.label.clone()}>{ s.label.clone() }</a>
                            })}
                        </div>
                    </div>

                    <div class="card contact-card">
                        <h3>{ "Send Us a Message" }</h3>
                        <form class="contact-form">
                            <label for="name">{ "Name" }</label>
                            <input type="text" id="name" placeholder="Your name" />

                            <label for="email">{ "Email" }</label>
                            <input type="email" id="email" placeholder="Your email" />

                            <label for="message">{ "Message" }</label>
                            <textarea id="message" rows="4" placeholder="Your message" />

                            <button type="button" class="btn btn-block" onclick={on_send}>{ "Send Message" }</button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
