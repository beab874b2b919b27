use yew::prelude::*;

use crate::content::use_content;

const PERKS: [&str; 3] = [
    "Speaker nights with real Q&A",
    "Competition prep that actually helps",
    "Project artifacts you can use in apps",
];

#[function_component(Join)]
pub fn join() -> Html {
    let content = use_content();
    let name = content.org.name.clone();
    let dot_style = format!("background-color: {};", content.ui.brand.primary);

    html! {
        <section id="join" class="container section reveal">
            <div class="join-grid">
                <div>
                    <h2>{ format!("Join {} Today", name) }</h2>
                    <p class="lead">
                        {"Expect financial literacy slides tied to real competitions, Monopoly strategy sessions, Wharton Global prep & participation, "}
                        {"Shark Tank style pitches, and pipelines to internships and collabs."}
                    </p>
                    <div class="join-perks">
                        { for PERKS.iter().map(|perk| html! {
                            <div class="join-perk">
                                <span class="join-dot" style={dot_style.clone()}></span>
                                { *perk }
                            </div>
                        }) }
                    </div>
                    <div class="join-actions">
                        <a href={content.mailto()} class="pill join-email">{"Email us"}</a>
                        <a href="#newsletter" class="pill outline">{"Get the Report"}</a>
                    </div>
                </div>
                <div class="card">
                    <h3>{"Quick Links"}</h3>
                    <ul class="quick-links">
                        <li><a href="#why">{ format!("Why {}", name) }</a></li>
                        <li><a href="#programs">{"Programs"}</a></li>
                        <li><a href="#events">{"Upcoming Events"}</a></li>
                        <li><a href="#newsletter">{"Acre Report"}</a></li>
                    </ul>
                </div>
            </div>
            <style>
                {r#"
                .join-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                    gap: 1.5rem;
                    align-items: center;
                }
                .join-perks {
                    margin-top: 1.5rem;
                    display: grid;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                }
                .join-perk {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .join-dot {
                    display: inline-block;
                    height: 10px;
                    width: 10px;
                    border-radius: 9999px;
                }
                .join-actions {
                    margin-top: 2rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }
                .join-email {
                    background: white;
                    color: black;
                }
                .quick-links {
                    margin: 0.75rem 0 0;
                    padding: 0;
                    list-style: none;
                    display: grid;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                .quick-links a:hover {
                    text-decoration: underline;
                }
                "#}
            </style>
        </section>
    }
}
