use yew::prelude::*;

use crate::components::reveal::{use_entrance, Stagger};
use crate::config;
use crate::content;
use crate::sections::heading::SectionHeading;

#[function_component]
pub fn Skills() -> Html {
    let node = use_node_ref();
    let entered = use_entrance(&node, config::ENTRANCE_THRESHOLD);

    html! {
        <section id="skills" class="section" ref={node}>
            <style>
                {r#"
                    .skills-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2.5rem; }
                    .skill-group { background: #fff; padding: 2rem; border-radius: 12px; box-shadow: 0 8px 24px rgba(0,0,0,0.08); }
                    .skill-badge { width: 4rem; height: 4rem; border-radius: 8px; margin-bottom: 1.5rem; }
                    .skill-group h3 { font-size: 1.5rem; margin: 0 0 1rem; }
                    .skill-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
                    .skill-tag { background: #f3f4f6; padding: 0.25rem 0.75rem; border-radius: 999px; font-size: 0.875rem; transition: transform 0.3s; }
                    .skill-tag:hover { transform: translateY(-2px); }
                "#}
            </style>
            <div class="section-inner">
                <SectionHeading
                    title="Skills & Expertise"
                    lede="Here are the technologies and tools I work with to bring ideas to life."
                    entered={entered}
                />
                <div class="skills-grid" style={Stagger::Parent.style(entered)}>
                    { for content::SKILL_GROUPS.iter().zip(0..).map(|(group, index)| html! {
                        <div class="skill-group card-lift" style={Stagger::Child(index).style(entered)}>
                            <div class="skill-badge" style={format!("background: {};", group.accent)}></div>
                            <h3>{ group.title }</h3>
                            <div class="skill-tags">
                                { for group.skills.iter().map(|skill| html! { <span class="skill-tag">{ *skill }</span> }) }
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
