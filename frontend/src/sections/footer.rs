use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::content;
use crate::utils::{scroll_to_section, scroll_to_top};

#[function_component]
pub fn Footer() -> Html {
    let to_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_top();
    });

    html! {
        <footer class="footer">
            <style>
                {r#"
                    .footer { background: #111827; color: #e5e7eb; padding: 3rem 1.5rem; }
                    .footer-inner { max-width: 1100px; margin: 0 auto; display: flex; flex-wrap: wrap; justify-content: space-between; gap: 2rem; }
                    .footer a { color: #e5e7eb; text-decoration: none; }
                    .footer a:hover { color: #fff; }
                    .footer-links { display: flex; gap: 1.5rem; flex-wrap: wrap; }
                    .footer-bottom { max-width: 1100px; margin: 2rem auto 0; padding-top: 1.5rem; border-top: 1px solid #374151; font-size: 0.875rem; color: #9ca3af; }
                "#}
            </style>
            <div class="footer-inner">
                <div>
                    <a href="#" class="footer-brand" onclick={to_top}>{ content::OWNER_NAME }</a>
                    <p>{ content::OWNER_ROLE }</p>
                </div>
                <nav class="footer-links">
                    { for content::NAV_LINKS.iter().map(|link| {
                        let target = link.target;
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            scroll_to_section(target);
                        });
                        html! { <a href={format!("#{}", target)} {onclick}>{ link.label }</a> }
                    }) }
                </nav>
            </div>
            <div class="footer-bottom">
                { format!("© {} {}. All rights reserved.", Date::new_0().get_full_year(), content::OWNER_NAME) }
            </div>
        </footer>
    }
}

