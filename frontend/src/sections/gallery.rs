use yew::prelude::*;

use crate::components::reveal::{use_entrance, Stagger};
use crate::config;
use crate::content::{self, Showcase};
use crate::sections::heading::SectionHeading;

#[derive(Properties, PartialEq)]
struct ShowcaseCardProps {
    item: &'static Showcase,
    index: u32,
    entered: bool,
}

#[function_component]
fn ShowcaseCard(props: &ShowcaseCardProps) -> Html {
    let item = props.item;

    html! {
        <article class="showcase-card card-lift" style={Stagger::Child(props.index).style(props.entered)}>
            <div class="showcase-image">
                <img src={item.image} alt={item.title} loading="lazy" />
            </div>
            <div class="showcase-body">
                <h3>{ item.title }</h3>
                <p>{ item.description }</p>
                <div class="showcase-tech">
                    { for item.technologies.iter().map(|tech| html! { <span>{ *tech }</span> }) }
                </div>
                <div class="showcase-links">
                    <a href={item.live_url} target="_blank" rel="noopener noreferrer">{"Live Demo"}</a>
                    <a href={item.code_url} target="_blank" rel="noopener noreferrer">{"Code"}</a>
                </div>
            </div>
        </article>
    }
}

const GALLERY_STYLE: &str = r#"
    .showcase-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 2rem; }
    .showcase-card { background: #fff; border-radius: 8px; overflow: hidden; box-shadow: 0 4px 12px rgba(0,0,0,0.08); }
    .showcase-image { height: 12rem; overflow: hidden; }
    .showcase-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.5s; }
    .showcase-card:hover .showcase-image img { transform: scale(1.1); }
    .showcase-body { padding: 1.5rem; }
    .showcase-body h3 { font-size: 1.25rem; margin: 0 0 0.5rem; }
    .showcase-body p { color: var(--muted); margin-bottom: 1rem; }
    .showcase-tech { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1rem; }
    .showcase-tech span { background: #f3f4f6; padding: 0.25rem 0.75rem; border-radius: 999px; font-size: 0.8rem; }
    .showcase-links { display: flex; gap: 1rem; }
    .showcase-links a { color: var(--accent); text-decoration: none; font-weight: 500; }
    .showcase-links a:hover { text-decoration: underline; }
"#;

#[derive(Properties, PartialEq)]
struct GalleryProps {
    id: &'static str,
    title: AttrValue,
    lede: AttrValue,
    items: &'static [Showcase],
    #[prop_or_default]
    alt: bool,
}

#[function_component]
fn Gallery(props: &GalleryProps) -> Html {
    let node = use_node_ref();
    let entered = use_entrance(&node, config::ENTRANCE_THRESHOLD);

    html! {
        <section id={props.id} class={classes!("section", props.alt.then_some("section-alt"))} ref={node}>
            <style>{ GALLERY_STYLE }</style>
            <div class="section-inner">
                <SectionHeading title={props.title.clone()} lede={props.lede.clone()} entered={entered} />
                <div class="showcase-grid" style={Stagger::Parent.style(entered)}>
                    { for props.items.iter().zip(0..).map(|(item, index)| html! {
                        <ShowcaseCard item={item} index={index} entered={entered} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component]
pub fn Portfolio() -> Html {
    html! {
        <Gallery
            id="portfolio"
            title="My Portfolio"
            lede="A selection of recent design and development work."
            items={content::PORTFOLIO_ITEMS}
            alt=true
        />
    }
}

#[function_component]
pub fn Projects() -> Html {
    html! {
        <Gallery
            id="projects"
            title="Featured Projects"
            lede="Here are some of my recent projects. Each one was carefully crafted to solve specific problems and deliver exceptional user experiences."
            items={content::PROJECTS}
        />
    }
}
