// src/main.rs — Mocha Haven (Rust + Yew + WASM)

mod accordion;
mod app;
mod components;
mod content;
mod dom;
mod nav;

use std::rc::Rc;

use gloo::console::{error, log};

use app::{App, AppProps, Fallback};
use content::SiteContent;

fn main() {
    // index.html provides: <div id="app"></div>
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    else {
        error!("mount point #app not found");
        return;
    };

    match SiteContent::embedded() {
        Ok(content) => {
            log!(format!(
                "{}: {} menu categories, {} FAQs",
                content.brand.name,
                content.menu.categories.len(),
                content.faqs.len()
            ));
            let props = AppProps {
                content: Rc::new(content),
            };
            yew::Renderer::<App>::with_root_and_props(root, props).render();
        }
        Err(e) => {
            error!(format!("failed to load site content: {e}"));
            yew::Renderer::<Fallback>::with_root(root).render();
        }
    }
}
