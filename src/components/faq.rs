use yew::prelude::*;

use crate::accordion::Accordion;
use crate::content::Faq;

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub faqs: Vec<Faq>,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let accordion = use_state(Accordion::default);

    html! {
        <div class="faq-list">
            { for props.faqs.iter().enumerate().map(|(i, faq)| {
                let open = accordion.is_expanded(i);
                let onclick = {
                    let accordion = accordion.clone();
                    Callback::from(move |_: MouseEvent| accordion.set(accordion.toggle(i)))
                };
                html! {
                    <div class="faq-item" key={i}>
                        <button class={classes!("faq-q", open.then_some("open"))} aria-expanded={open.to_string()} {onclick}>
                            <span>{ faq.question.clone() }</span>
                            <span class="chevron" aria-hidden="true">{ if open { "▴" } else { "▾" } }</span>
                        </button>
                        if open {
                            <div class="faq-a"><p>{ faq.answer.clone() }</p></div>
                        }
                    </div>
                }
            })}
        </div>
    }
}
