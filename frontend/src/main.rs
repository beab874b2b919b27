use std::rc::Rc;

use log::{debug, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod hooks {
    pub mod countdown;
    pub mod parallax;
    pub mod reveal;
    pub mod scroll;
}
mod components {
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod join;
    pub mod newsletter;
    pub mod sections;
    pub mod ticker;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use content::Content;
use pages::{home::Home, not_found::NotFound};

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
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    content: Rc<Content>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<Content>> context={props.content.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<Content>>>
    }
}

/// Checks that styles.css made it into the page: a `.reveal` element should
/// start fully transparent.
fn style_probe() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(probe) = document.create_element("div") else {
        return;
    };
    probe.set_class_name("reveal");
    let _ = probe.set_attribute("style", "display: none;");
    if body.append_child(&probe).is_err() {
        return;
    }

    let opacity = web_sys::window()
        .and_then(|w| w.get_computed_style(&probe).ok().flatten())
        .and_then(|style| style.get_property_value("opacity").ok());
    match opacity.as_deref() {
        Some("0") => gloo_console::log!("[style probe] .reveal starts hidden, stylesheet active"),
        other => gloo_console::warn!(
            "[style probe] .reveal opacity is",
            format!("{:?}", other),
            "- is styles.css loaded?"
        ),
    }
    let _ = body.remove_child(&probe);
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if console_log::init_with_level(config::log_level()).is_err() {
        gloo_console::error!("error initializing log");
    }

    if config::style_probe_enabled() {
        debug!("Running style probe");
        style_probe();
    }

    let content = Rc::new(Content::load());
    info!("Starting {} site", content.org.name);
    yew::Renderer::<App>::with_props(AppProps { content }).render();
}
