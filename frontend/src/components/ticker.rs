use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TickerProps {
    pub items: Vec<String>,
    pub dot_color: String,
}

/// The list twice over, so the CSS loop can wrap at -100% without a gap.
pub fn looped<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().chain(items.iter()).cloned().collect()
}

#[function_component(Ticker)]
pub fn ticker(props: &TickerProps) -> Html {
    let dot_style = format!("background-color: {};", props.dot_color);

    html! {
        <div class="ticker">
            <style>
                {r#"
                @keyframes ticker {
                    0%   { transform: translateX(0); }
                    100% { transform: translateX(-100%); }
                }
                .ticker {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    overflow: hidden;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(0, 0, 0, 0.4);
                }
                .ticker-track {
                    display: inline-block;
                    white-space: nowrap;
                    will-change: transform;
                    animation: ticker 30s linear infinite;
                }
                .ticker-item {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1.5rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .ticker-dot {
                    height: 6px;
                    width: 6px;
                    border-radius: 9999px;
                }
                "#}
            </style>
            <div class="ticker-track">
                { for looped(&props.items).into_iter().map(|text| html! {
                    <span class="ticker-item">
                        <span class="ticker-dot" style={dot_style.clone()}></span>
                        { text }
                    </span>
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looped_repeats_in_order() {
        let items = vec!["a", "b", "c"];
        assert_eq!(looped(&items), vec!["a", "b", "c", "a", "b", "c"]);
        assert!(looped::<&str>(&[]).is_empty());
    }
}
