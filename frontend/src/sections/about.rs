use yew::prelude::*;

use crate::components::reveal::{use_entrance, Stagger};
use crate::config;
use crate::content;
use crate::sections::heading::SectionHeading;

#[function_component]
pub fn About() -> Html {
    let node = use_node_ref();
    let entered = use_entrance(&node, config::ENTRANCE_THRESHOLD);

    html! {
        <section id="about" class="section section-alt" ref={node}>
            <style>
                {r#"
                    .about-body { display: flex; flex-wrap: wrap; gap: 3rem; align-items: center; }
                    .about-body > div { flex: 1 1 380px; }
                    .about-body p { font-size: 1.1rem; line-height: 1.7; margin-bottom: 1.5rem; }
                    .stats-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }
                    .stat-card { background: #fff; padding: 1.5rem; border-radius: 8px; text-align: center; box-shadow: 0 4px 12px rgba(0,0,0,0.06); }
                    .stat-value { font-size: 3rem; font-weight: 700; color: var(--accent); margin-bottom: 0.5rem; }
                    @media (max-width: 640px) { .stats-grid { grid-template-columns: 1fr; } }
                "#}
            </style>
            <div class="section-inner">
                <SectionHeading title="About Me" entered={entered} />
                <div class="about-body" style={Stagger::Parent.style(entered)}>
                    <div style={Stagger::Child(0).style(entered)}>
                        { for content::ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{ *paragraph }</p> }) }
                    </div>
                    <div class="stats-grid" style={Stagger::Child(1).style(entered)}>
                        { for content::STATS.iter().map(|stat| html! {
                            <div class="stat-card card-lift">
                                <div class="stat-value">{ stat.value }</div>
                                <p>{ stat.label }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
