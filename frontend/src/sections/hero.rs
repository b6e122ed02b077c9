use yew::prelude::*;

use crate::components::reveal::{use_entrance_on_mount, Stagger};
use crate::content;
use crate::utils::scroll_to_section;

#[function_component]
pub fn Hero() -> Html {
    let entered = use_entrance_on_mount();

    let jump_to = |id: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(id);
        })
    };

    html! {
        <header class="hero">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding: 5rem 1.5rem 4rem;
                    }
                    .hero-inner {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 3rem;
                    }
                    .hero-copy { flex: 1 1 420px; }
                    .hero-greeting { color: var(--accent); font-weight: 500; display: block; margin-bottom: 0.75rem; }
                    .hero h1 { font-size: 3.5rem; margin: 0 0 1rem; }
                    .hero h2 { font-size: 1.75rem; font-weight: 500; color: var(--muted); margin: 0 0 1.5rem; }
                    .hero p { font-size: 1.1rem; line-height: 1.7; max-width: 32rem; margin-bottom: 2rem; }
                    .hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; }
                    .hero-portrait {
                        width: 20rem;
                        height: 20rem;
                        border-radius: 50%;
                        overflow: hidden;
                        border: 4px solid #fff;
                        box-shadow: 0 20px 40px rgba(0,0,0,0.15);
                    }
                    .hero-portrait img { width: 100%; height: 100%; object-fit: cover; }
                    @media (max-width: 768px) {
                        .hero h1 { font-size: 2.5rem; }
                        .hero-portrait { width: 16rem; height: 16rem; margin: 0 auto; }
                    }
                "#}
            </style>
            <div class="hero-inner" style={Stagger::Parent.style(entered)}>
                <div class="hero-copy">
                    <span class="hero-greeting" style={Stagger::Child(0).style(entered)}>{"Hello, I'm"}</span>
                    <h1 style={Stagger::Child(1).style(entered)}>{ content::OWNER_NAME }</h1>
                    <h2 style={Stagger::Child(2).style(entered)}>{ content::OWNER_ROLE }</h2>
                    <p style={Stagger::Child(3).style(entered)}>{ content::OWNER_PITCH }</p>
                    <div class="hero-actions" style={Stagger::Child(4).style(entered)}>
                        <a href="#contact" class="button-primary" onclick={jump_to("contact")}>
                            {"Get in Touch"}
                        </a>
                        <a href="#projects" class="button-outline" onclick={jump_to("projects")}>
                            {"View Projects"}
                        </a>
                    </div>
                </div>
                <div class="hero-portrait" style={Stagger::Child(5).style(entered)}>
                    <img src={content::PORTRAIT_URL} alt={format!("Portrait of {}", content::OWNER_NAME)} />
                </div>
            </div>
        </header>
    }
}
