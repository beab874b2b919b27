use yew::prelude::*;

use crate::content::use_content;
use crate::hooks::scroll::use_scroll_metrics;

const SCROLLED_AFTER_PX: f64 = 24.0;

#[function_component(Header)]
pub fn header() -> Html {
    let content = use_content();
    let metrics = use_scroll_metrics();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    // Anchor clicks still navigate; this only folds the mobile menu away.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let mut links = vec![
        ("#why", "Why"),
        ("#programs", "Programs"),
        ("#events", "Events"),
    ];
    if !content.photos().is_empty() {
        links.push(("#photos", "Photos"));
    }
    links.push(("#newsletter", "Newsletter"));

    let primary = content.ui.brand.primary.clone();
    let scrolled = metrics.offset > SCROLLED_AFTER_PX;

    html! {
        <header class={classes!("site-header", scrolled.then(|| "scrolled"))}>
            <div class="container header-row">
                <a href="#home" class="brand" onclick={close_menu.clone()}>
                    <span class="brand-name">{ content.org.name.clone() }</span>
                    <span class="brand-tagline">{ content.org.tagline.clone() }</span>
                </a>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class={classes!("header-nav", (*menu_open).then(|| "mobile-menu-open"))}>
                    { for links.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>{ *label }</a>
                    }) }
                    <a href="#join" class="join-button" onclick={close_menu.clone()}
                       style={format!("background-color: {}; color: black;", primary)}>
                        {"Join"}
                    </a>
                </nav>
            </div>
            <div class="scroll-progress"
                 style={format!("width: {:.2}%; background-color: {};", metrics.progress * 100.0, primary)}>
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    backdrop-filter: blur(8px);
                    background: rgba(0, 0, 0, 0.3);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    transition: background 0.3s ease;
                }
                .site-header.scrolled {
                    background: rgba(0, 0, 0, 0.7);
                }
                .header-row {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding-top: 0.75rem;
                    padding-bottom: 0.75rem;
                }
                .brand {
                    display: flex;
                    align-items: baseline;
                    gap: 0.5rem;
                }
                .brand-name {
                    font-size: 1.5rem;
                    font-weight: 900;
                    letter-spacing: -0.02em;
                }
                .brand-tagline {
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                .header-nav {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                }
                .nav-link:hover {
                    color: #8FA98B;
                }
                .join-button {
                    padding: 0.375rem 0.75rem;
                    border-radius: 0.75rem;
                }
                .scroll-progress {
                    height: 2px;
                    transition: width 0.1s linear;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.25rem;
                }
                .burger-menu span {
                    display: block;
                    width: 22px;
                    height: 2px;
                    background: white;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .header-nav {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1rem;
                        background: rgba(0, 0, 0, 0.9);
                    }
                    .header-nav.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}
