use yew::prelude::*;

use crate::content::Brand;
use crate::dom;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: Brand,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = use_memo((), |_| dom::current_year());
    let Brand { name, since } = &props.brand;

    html! {
        <footer class="footer">
            <div class="container footer-row">
                <div class="brand">
                    <span class="brand-icon" aria-hidden="true">{ "☕" }</span>
                    <span class="brand-name">{ name.clone() }</span>
                </div>
                <div class="footer-meta">
                    <p>{ format!("© {} {}. All rights reserved.", *year, name) }</p>
                    <p class="small">{ format!("Crafting perfect coffee moments since {since}") }</p>
                </div>
            </div>
        </footer>
    }
}
