pub mod about;
pub mod contact;
pub mod faq;
pub mod footer;
pub mod hero;
pub mod menu;
pub mod navbar;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use faq::FaqList;
pub use footer::Footer;
pub use hero::HeroSection;
pub use menu::MenuSection;
pub use navbar::NavBar;

use yew::prelude::*;

/// Centered section title with the short rule under it.
#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub title: AttrValue,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="section-title">
            <h2>{ props.title.clone() }</h2>
            <div class="rule"></div>
        </div>
    }
}
