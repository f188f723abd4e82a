// src/content.rs — static site copy (menu, FAQ, contact details)
//
// The document is compiled in from assets/content.json and decoded once at
// startup. Nothing here is mutated after that.

use serde::Deserialize;

use crate::nav::Section;

const EMBEDDED: &str = include_str!("../assets/content.json");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content.json is not valid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("menu has no categories")]
    EmptyMenu,
    #[error("menu category {0:?} has no items")]
    EmptyCategory(String),
    #[error("FAQ list is empty")]
    NoFaqs,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SiteContent {
    pub brand: Brand,
    pub hero: Hero,
    pub about: About,
    pub menu: Menu,
    pub faqs: Vec<Faq>,
    pub contact: Contact,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Brand {
    pub name: String,
    pub since: u32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Hero {
    /// Lead, accented word, tail.
    pub headline: (String, String, String),
    pub blurb: String,
    pub image: Image,
    pub actions: Vec<HeroAction>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
    Solid,
    Outline,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HeroAction {
    pub label: String,
    pub target: Section,
    pub style: ActionStyle,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct About {
    pub title: String,
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub image: Image,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Coffee,
    Clock,
    MapPin,
    Phone,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Coffee => "☕",
            Icon::Clock => "🕒",
            Icon::MapPin => "📍",
            Icon::Phone => "📞",
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Highlight {
    pub icon: Icon,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Menu {
    pub title: String,
    pub intro: String,
    pub categories: Vec<MenuCategory>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MenuCategory {
    pub category: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub price: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Contact {
    pub title: String,
    pub address: String,
    pub hours: Vec<String>,
    pub phone: String,
    pub email: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

impl SiteContent {
    pub fn embedded() -> Result<Self, ContentError> {
        Self::parse(EMBEDDED)
    }

    pub fn parse(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.menu.categories.is_empty() {
            return Err(ContentError::EmptyMenu);
        }
        if let Some(c) = self.menu.categories.iter().find(|c| c.items.is_empty()) {
            return Err(ContentError::EmptyCategory(c.category.clone()));
        }
        if self.faqs.is_empty() {
            return Err(ContentError::NoFaqs);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn embedded_value() -> serde_json::Value {
        serde_json::from_str(EMBEDDED).unwrap()
    }

    #[test]
    fn embedded_catalog_decodes() {
        let c = SiteContent::embedded().unwrap();
        assert_eq!(c.brand.name, "Mocha Haven");

        let names: Vec<&str> = c.menu.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Coffee", "Specialty Drinks", "Pastries"]);
        assert!(c.menu.categories.iter().all(|c| c.items.len() == 4));

        assert_eq!(c.faqs.len(), 4);
        assert_eq!(c.about.highlights.len(), 3);
        assert_eq!(c.about.highlights[2].icon, Icon::MapPin);
    }

    #[test]
    fn hero_actions_point_at_sections() {
        let c = SiteContent::embedded().unwrap();
        let targets: Vec<(Section, ActionStyle)> =
            c.hero.actions.iter().map(|a| (a.target, a.style)).collect();
        assert_eq!(
            targets,
            vec![
                (Section::Menu, ActionStyle::Solid),
                (Section::Contact, ActionStyle::Outline),
            ]
        );
    }

    #[test]
    fn first_menu_item() {
        let c = SiteContent::embedded().unwrap();
        assert_eq!(
            c.menu.categories[0].items[0],
            MenuItem {
                name: "Espresso".into(),
                price: "$3.50".into(),
                description: "Strong, concentrated coffee served in a small cup".into(),
            }
        );
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SiteContent::parse("{ \"brand\": ").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn rejects_unknown_section_target() {
        let mut v = embedded_value();
        v["hero"]["actions"][0]["target"] = "lobby".into();
        let err = SiteContent::parse(&v.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn rejects_empty_menu() {
        let mut v = embedded_value();
        v["menu"]["categories"] = serde_json::json!([]);
        let err = SiteContent::parse(&v.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::EmptyMenu));
    }

    #[test]
    fn rejects_empty_category() {
        let mut v = embedded_value();
        v["menu"]["categories"][1]["items"] = serde_json::json!([]);
        let err = SiteContent::parse(&v.to_string()).unwrap_err();
        assert_eq!(err.to_string(), "menu category \"Specialty Drinks\" has no items");
    }

    #[test]
    fn rejects_missing_faqs() {
        let mut v = embedded_value();
        v["faqs"] = serde_json::json!([]);
        let err = SiteContent::parse(&v.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::NoFaqs));
    }
}
