use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod utils;
mod contact {
    pub mod api;
    pub mod form;
    pub mod models;
}
mod components {
    pub mod notification;
    pub mod reveal;
}
mod sections {
    pub mod heading;
    pub mod hero;
    pub mod about;
    pub mod gallery;
    pub mod skills;
    pub mod contact;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{home::Home, not_found::NotFound};
use utils::{scroll_to_section, scroll_to_top};

/// Nav bar switches to its solid style once the page has moved this far.
const NAV_SCROLL_PX: i32 = 10;

fn nav_is_scrolled(scroll_top: i32) -> bool {
    scroll_top > NAV_SCROLL_PX
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let callback = window.clone().map(|window| {
                let win = window.clone();
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    let scroll_top = win
                        .document()
                        .and_then(|document| document.document_element())
                        .map(|element| element.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(nav_is_scrolled(scroll_top));
                });
                let _ = window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                scroll_callback
            });

            move || {
                if let (Some(window), Some(callback)) = (window, callback) {
                    let _ = window
                        .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |target: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(target);
        })
    };

    let go_top = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_top();
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo" onclick={go_top}>
                    {content::OWNER_NAME}
                </a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for content::NAV_LINKS.iter().map(|link| html! {
                        <a href={format!("#{}", link.target)} class="nav-link" onclick={go_to(link.target)}>
                            {link.label}
                        </a>
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
