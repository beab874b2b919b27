use yew::prelude::*;

use crate::content::use_content;

#[function_component(Why)]
pub fn why() -> Html {
    let content = use_content();

    html! {
        <section id="why" class="container section reveal">
            <h2>{ format!("What Makes {} Different", content.org.name) }</h2>
            <p class="lead">
                {"We run Monopoly strategy sessions, prep "}<em>{"and"}</em>
                {" compete in Wharton Global and JA Titan, and host speaker nights where members get direct access to young professionals and alumni."}
            </p>
            <div class="grid">
                { for content.why.iter().map(|card| html! {
                    <div class="card reveal">
                        <h3>{ card.title.clone() }</h3>
                        <p>{ card.body.clone() }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Programs)]
pub fn programs() -> Html {
    let content = use_content();

    html! {
        <section id="programs" class="container section reveal">
            <h2>{"Prep, Compete, and Build"}</h2>
            <div class="grid">
                { for content.programs.iter().map(|program| html! {
                    <div class="card program-card reveal">
                        <h3>{ program.name.clone() }</h3>
                        <p>{ program.desc.clone() }</p>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .program-card {
                    background: linear-gradient(135deg, rgba(255,255,255,0.05), rgba(255,255,255,0));
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(Events)]
pub fn events() -> Html {
    let content = use_content();

    html! {
        <section id="events" class="container section reveal">
            <div class="events-header">
                <div>
                    <h2>{"Upcoming Milestones"}</h2>
                    <p class="lead">
                        {"September–October: poster campaign + incentives. Mid-October: first meeting with financial literacy slides and Monopoly play. "}
                        {"Sep–Dec: Wharton Global prep and participation. Year-round: guest speakers and internship opportunities."}
                    </p>
                </div>
                <a href="#join" class="pill outline events-notify">{"Get notified"}</a>
            </div>
            <div class="event-list">
                { for content.events.iter().map(|event| {
                    let (big, small) = event.date_parts();
                    html! {
                        <div class="card event-row reveal">
                            <div class="event-date">
                                <div class="event-date-big">{ big.to_string() }</div>
                                <div class="event-date-small">{ small.to_string() }</div>
                            </div>
                            <div class="event-body">
                                <div class="event-title">{ event.title.clone() }</div>
                                <div class="event-meta">{ event.meta.clone() }</div>
                            </div>
                            <a href="#join" class="event-rsvp">{"RSVP"}</a>
                        </div>
                    }
                }) }
            </div>
            <style>
                {r#"
                .events-header {
                    display: flex;
                    align-items: flex-end;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .event-list {
                    margin-top: 1.5rem;
                    display: grid;
                    gap: 1rem;
                }
                .event-row {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .event-date {
                    width: 5rem;
                    text-align: center;
                }
                .event-date-big {
                    font-size: 1.25rem;
                    font-weight: 900;
                }
                .event-date-small {
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: rgba(255, 255, 255, 0.6);
                }
                .event-body {
                    flex: 1;
                }
                .event-title {
                    font-weight: 600;
                }
                .event-meta {
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 0.875rem;
                }
                .event-rsvp {
                    padding: 0.375rem 0.75rem;
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.1);
                    font-size: 0.875rem;
                }
                .event-rsvp:hover {
                    background: rgba(255, 255, 255, 0.2);
                }
                @media (max-width: 768px) {
                    .events-notify {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}

/// Rendered only when content.json lists photos.
#[function_component(Photos)]
pub fn photos() -> Html {
    let content = use_content();
    let photos = content.photos();
    if photos.is_empty() {
        return html! {};
    }

    html! {
        <section id="photos" class="container section reveal">
            <h2>{"Club in Action"}</h2>
            <div class="grid">
                { for photos.iter().map(|photo| html! {
                    <img src={photo.url.clone()} alt={photo.alt_text().to_string()} loading="lazy" class="photo" />
                }) }
            </div>
            <style>
                {r#"
                .photo {
                    width: 100%;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                "#}
            </style>
        </section>
    }
}
