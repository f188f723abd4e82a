use yew::prelude::*;

use super::{FaqList, SectionTitle};
use crate::content::{Faq, Menu, MenuCategory};
use crate::nav::Section;

#[derive(Properties, PartialEq)]
pub struct MenuProps {
    pub menu: Menu,
    pub faqs: Vec<Faq>,
}

fn category_card(category: &MenuCategory) -> Html {
    html! {
        <div class="card menu-card">
            <div class="menu-card-head">
                <h3>{ category.category.clone() }</h3>
            </div>
            <ul class="menu-items">
                { for category.items.iter().map(|item| html! {
                    <li>
                        <div>
                            <h4>{ item.name.clone() }</h4>
                            <p class="small">{ item.description.clone() }</p>
                        </div>
                        <span class="price">{ item.price.clone() }</span>
                    </li>
                })}
            </ul>
        </div>
    }
}

#[function_component(MenuSection)]
pub fn menu_section(props: &MenuProps) -> Html {
    let menu = &props.menu;

    html! {
        <section id={Section::Menu.id()} class="band menu">
            <div class="container">
                <SectionTitle title={menu.title.clone()} />
                <p class="lede">{ menu.intro.clone() }</p>

                <div class="menu-grid">
                    { for menu.categories.iter().map(category_card) }
                </div>

                <div class="faq">
                    <h3 class="faq-title">{ "Frequently Asked Questions" }</h3>
                    <FaqList faqs={props.faqs.clone()} />
                </div>
            </div>
        </section>
    }
}
