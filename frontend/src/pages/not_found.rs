use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <div class="not-found" style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; text-align: center; padding: 2rem;">
            <h1 style="font-size: 4rem; margin: 0;">{"404"}</h1>
            <p style="font-size: 1.25rem; color: #4b5563;">{"Oops! Page not found"}</p>
            <Link<Route> to={Route::Home} classes="button-primary">
                {"Return to Home"}
            </Link<Route>>
        </div>
    }
}
