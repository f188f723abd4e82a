// src/app.rs — page shell: nav state, scroll wiring, section layout

use std::rc::Rc;

use gloo::console::warn;
use yew::prelude::*;

use crate::components::{
    AboutSection, ContactSection, Footer, HeroSection, MenuSection, NavBar,
};
use crate::content::SiteContent;
use crate::dom::{self, DomViewport};
use crate::nav::{self, NavAction, NavConfig, NavState, ScrollSample, Section};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = NavConfig::default();
    let nav_state = use_reducer(NavState::default);

    // Scroll tracking for the lifetime of the page
    {
        let dispatcher = nav_state.dispatcher();
        use_effect_with((), move |_| {
            let watch = dom::watch_scroll(move || {
                let Some(viewport) = DomViewport::new() else { return; };
                dispatcher.dispatch(NavAction::Scrolled(ScrollSample::take(&viewport, &config)));
            });
            if watch.is_none() {
                warn!("no window: scroll tracking disabled");
            }
            move || drop(watch)
        });
    }

    let on_navigate = {
        let dispatcher = nav_state.dispatcher();
        Callback::from(move |section: Section| {
            let Some(viewport) = DomViewport::new() else { return; };
            if let Some(action) = nav::navigate_to(&viewport, section, &config) {
                dispatcher.dispatch(action);
            }
        })
    };

    let on_toggle_menu = {
        let dispatcher = nav_state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(NavAction::ToggleMenu))
    };

    let content = &props.content;

    html! {
        <div class="site">
            <NavBar
                brand={content.brand.name.clone()}
                state={*nav_state}
                on_navigate={on_navigate.clone()}
                {on_toggle_menu}
            />
            <HeroSection hero={content.hero.clone()} on_navigate={on_navigate} />
            <AboutSection about={content.about.clone()} />
            <MenuSection menu={content.menu.clone()} faqs={content.faqs.clone()} />
            <ContactSection contact={content.contact.clone()} />
            <Footer brand={content.brand.clone()} />
        </div>
    }
}

/// Shown instead of the page when the embedded content fails to load.
#[function_component(Fallback)]
pub fn fallback() -> Html {
    html! {
        <main class="fallback">
            <h1>{ "Mocha Haven" }</h1>
            <p>{ "This page could not be loaded. Please try again later." }</p>
        </main>
    }
}
