use yew::prelude::*;

use crate::sections::{
    about::About,
    contact::Contact,
    footer::Footer,
    gallery::{Portfolio, Projects},
    hero::Hero,
    skills::Skills,
};

/// Single-page layout; every section is reachable from the nav by its id.
#[function_component]
pub fn Home() -> Html {
    html! {
        <div class="page">
            <Hero />
            <main>
                <About />
                <Portfolio />
                <Skills />
                <Projects />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
