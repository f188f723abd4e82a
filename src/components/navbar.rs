use yew::prelude::*;

use crate::nav::{NavState, Section};

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub brand: AttrValue,
    pub state: NavState,
    pub on_navigate: Callback<Section>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let NavState {
        active,
        menu_open,
        scrolled,
    } = props.state;

    let link = |section: Section| {
        let onclick = props.on_navigate.reform(move |_: MouseEvent| section);
        html! {
            <button
                key={section.id()}
                class={classes!("nav-link", (section == active).then_some("active"))}
                {onclick}
            >
                { section.label() }
            </button>
        }
    };

    let on_toggle = props.on_toggle_menu.reform(|_: MouseEvent| ());

    html! {
        <nav class={classes!("navbar", scrolled.then_some("scrolled"))}>
            <div class="container nav-row">
                <div class="brand">
                    <span class="brand-icon" aria-hidden="true">{ "☕" }</span>
                    <span class="brand-name">{ props.brand.clone() }</span>
                </div>

                <div class="nav-desktop">
                    { for Section::ALL.into_iter().map(&link) }
                </div>

                <button
                    class="nav-toggle"
                    aria-label={ if menu_open { "Close menu" } else { "Open menu" } }
                    aria-expanded={ menu_open.to_string() }
                    onclick={on_toggle}
                >
                    { if menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            if menu_open {
                <div class="nav-overlay">
                    <div class="container nav-overlay-list">
                        { for Section::ALL.into_iter().map(&link) }
                    </div>
                </div>
            }
        </nav>
    }
}
