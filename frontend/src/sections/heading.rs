use yew::prelude::*;

use crate::components::reveal::Stagger;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub lede: Option<AttrValue>,
    pub entered: bool,
}

/// Title, divider and optional lede that open every content section.
#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let entered = props.entered;

    html! {
        <div class="section-heading" style={Stagger::Parent.style(entered)}>
            <h2 style={Stagger::Child(0).style(entered)}>{ props.title.clone() }</h2>
            <div class="section-divider" style={Stagger::Child(1).style(entered)}></div>
            {
                if let Some(lede) = &props.lede {
                    html! { <p class="section-lede" style={Stagger::Child(2).style(entered)}>{ lede.clone() }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
