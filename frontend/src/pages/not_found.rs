use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::use_content;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let content = use_content();
    let page_style = format!("background-color: {}; color: white;", content.ui.brand.bg);

    html! {
        <div class="not-found" style={page_style}>
            <h1>{"Page not found"}</h1>
            <p>{"This site is a single page. Everything lives on the home page."}</p>
            <Link<Route> to={Route::Home} classes="pill outline">
                { format!("Back to {}", content.org.name) }
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    text-align: center;
                }
                "#}
            </style>
        </div>
    }
}
