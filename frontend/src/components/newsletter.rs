use yew::prelude::*;

use crate::content::{use_content, NewsletterForm};

/// What the signup box shows. There is no in-between state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NewsletterView {
    Form { action: String },
    Placeholder,
}

impl From<&NewsletterForm> for NewsletterView {
    fn from(form: &NewsletterForm) -> Self {
        if form.enabled {
            NewsletterView::Form {
                action: form.url.clone(),
            }
        } else {
            NewsletterView::Placeholder
        }
    }
}

#[function_component(Newsletter)]
pub fn newsletter() -> Html {
    let content = use_content();
    let button_style = format!("background-color: {}; color: black;", content.ui.brand.primary);

    let body = match NewsletterView::from(&content.newsletter.form) {
        NewsletterView::Form { action } => html! {
            <form class="newsletter-form" action={action} method="POST">
                <input type="email" name="email" required={true} placeholder="you@example.org" class="newsletter-input" />
                <button class="newsletter-submit" style={button_style}>{"Subscribe"}</button>
            </form>
        },
        NewsletterView::Placeholder => html! {
            <div class="newsletter-placeholder">{"Connect a form later in content.json → newsletter.form"}</div>
        },
    };

    html! {
        <section id="newsletter" class="container section reveal">
            <div class="newsletter-panel">
                <h2>{"The Acre Report Newsletter"}</h2>
                <p class="lead">{ content.newsletter.blurb.clone() }</p>
                { body }
            </div>
            <style>
                {r#"
                .newsletter-panel {
                    border-radius: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 2.5rem;
                    background: linear-gradient(135deg, #101213, #0b0c0d);
                }
                .newsletter-form {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }
                .newsletter-input {
                    flex: 1;
                    min-width: 14rem;
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 0.75rem 1rem;
                    color: white;
                }
                .newsletter-input:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px #8FA98B;
                }
                .newsletter-submit {
                    padding: 0.75rem 1.25rem;
                    border-radius: 0.75rem;
                    border: none;
                    font-weight: 600;
                    cursor: pointer;
                }
                .newsletter-placeholder {
                    margin-top: 1.5rem;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_form_posts_to_configured_url() {
        let form = NewsletterForm {
            enabled: true,
            url: "https://forms.example.org/acre".to_string(),
        };
        assert_eq!(
            NewsletterView::from(&form),
            NewsletterView::Form {
                action: "https://forms.example.org/acre".to_string()
            }
        );
    }

    #[test]
    fn disabled_form_is_a_placeholder_even_with_url() {
        let form = NewsletterForm {
            enabled: false,
            url: "https://forms.example.org/acre".to_string(),
        };
        assert_eq!(NewsletterView::from(&form), NewsletterView::Placeholder);
        assert_eq!(NewsletterView::from(&NewsletterForm::default()), NewsletterView::Placeholder);
    }
}
