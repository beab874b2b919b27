use yew::prelude::*;

use crate::components::ticker::Ticker;
use crate::content::use_content;
use crate::hooks::countdown::{use_countdown, Remaining};
use crate::hooks::parallax::use_parallax;

#[derive(Properties, PartialEq)]
pub struct CountdownBadgeProps {
    pub label: AttrValue,
    pub remaining: Remaining,
}

#[function_component(CountdownBadge)]
pub fn countdown_badge(props: &CountdownBadgeProps) -> Html {
    html! {
        <div class="countdown reveal">
            <div class="countdown-badge">
                <span class="countdown-label">{ props.label.clone() }</span>
                <span class="countdown-value">{ props.remaining.to_string() }</span>
            </div>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let content = use_content();

    let blob_a = use_node_ref();
    let blob_b = use_node_ref();
    use_parallax(blob_a.clone(), 0.15);
    use_parallax(blob_b.clone(), 0.1);

    let remaining = use_countdown(Some(content.countdown_target()));

    let primary = content.ui.brand.primary.clone();
    let cta_style = format!("background-color: {}; color: black;", primary);

    html! {
        <section id="home" class="hero">
            <div ref={blob_a} class="hero-blob hero-blob-a"></div>
            <div ref={blob_b} class="hero-blob hero-blob-b"></div>
            <div class="hero-shade"></div>

            <div class="container hero-content">
                <div class="reveal">
                    <h1>{ content.org.hero_title.clone() }</h1>
                    <p class="hero-subtitle">{ content.hero_subtitle().to_string() }</p>
                    <div class="hero-cta-group">
                        <a href="#join" class="pill" style={cta_style}>
                            { format!("Join {}", content.org.name) }
                        </a>
                        <a href="#why" class="pill outline">{"How we’re different"}</a>
                    </div>
                </div>

                {
                    if let Some(remaining) = remaining {
                        html! { <CountdownBadge label="Wharton Global deadline" remaining={remaining} /> }
                    } else {
                        html! {}
                    }
                }
            </div>

            <Ticker items={content.ticker_items()} dot_color={primary} />

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100svh;
                    overflow: hidden;
                }
                .hero-blob {
                    position: absolute;
                    border-radius: 9999px;
                    filter: blur(64px);
                    will-change: transform;
                }
                .hero-blob-a {
                    top: -6rem;
                    left: -6rem;
                    height: 40rem;
                    width: 40rem;
                    opacity: 0.3;
                    background: radial-gradient(closest-side, #8FA98B, transparent 60%);
                }
                .hero-blob-b {
                    bottom: -8rem;
                    right: -6rem;
                    height: 36rem;
                    width: 36rem;
                    opacity: 0.25;
                    background: radial-gradient(closest-side, #7cc1b3, transparent 60%);
                }
                .hero-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(0,0,0,0.2), rgba(0,0,0,0.4), rgba(0,0,0,0.7));
                }
                .hero-content {
                    position: relative;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }
                .hero h1 {
                    font-size: clamp(2.5rem, 6vw, 3.75rem);
                    font-weight: 900;
                    line-height: 1.1;
                    margin: 0;
                }
                .hero-subtitle {
                    margin-top: 1rem;
                    font-size: 1.125rem;
                    color: rgba(255, 255, 255, 0.8);
                    max-width: 42rem;
                }
                .hero-cta-group {
                    margin-top: 2rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }
                .countdown {
                    margin-top: 2.5rem;
                }
                .countdown-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 1rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    padding: 0.75rem 1rem;
                }
                .countdown-label {
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 0.875rem;
                }
                .countdown-value {
                    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
                    font-size: 1.125rem;
                }
                "#}
            </style>
        </section>
    }
}
