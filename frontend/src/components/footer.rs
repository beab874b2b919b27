use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::content::{use_content, Socials};

/// Socials that are actually configured, in display order.
pub fn social_links(socials: &Socials) -> Vec<(&'static str, String)> {
    [
        ("Instagram", &socials.instagram),
        ("Discord", &socials.discord),
        ("LinkedIn", &socials.linkedin),
    ]
    .into_iter()
    .filter_map(|(label, url)| match url.as_deref() {
        Some(url) if !url.is_empty() => Some((label, url.to_string())),
        _ => None,
    })
    .collect()
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let content = use_content();
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-row">
                <div class="footer-copy">
                    { format!("© {} {}. All rights reserved.", year, content.org.name) }
                </div>
                <div class="footer-socials">
                    { for social_links(&content.org.socials).into_iter().map(|(label, url)| html! {
                        <a href={url} target="_blank" rel="noopener noreferrer">{ label }</a>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .footer-row {
                    padding-top: 2rem;
                    padding-bottom: 2rem;
                    font-size: 0.875rem;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                .footer-socials {
                    display: flex;
                    gap: 1rem;
                }
                .footer-socials a:hover {
                    color: white;
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_socials_are_skipped() {
        let socials = Socials {
            instagram: Some("https://instagram.com/acre".into()),
            discord: None,
            linkedin: Some(String::new()),
        };
        assert_eq!(
            social_links(&socials),
            vec![("Instagram", "https://instagram.com/acre".to_string())]
        );
        assert!(social_links(&Socials::default()).is_empty());
    }
}
