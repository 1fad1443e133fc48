//! Contact: LET'S TALK headline, the big form next to the studio's
//! contact details, and the footer.

use std::collections::HashMap;

use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::form::{BigTypographyForm, FormField};
use crate::components::headline::StretchedHeadline;
use crate::components::layout::SplitScreen;
use crate::config;
use crate::theme;

fn contact_fields() -> Vec<FormField> {
    vec![
        FormField::text("name", "NAME", "Your Name"),
        FormField::text("company", "COMPANY", "Company"),
        FormField::email("email", "EMAIL", "Email Address"),
        FormField::multiline("message", "PROJECT", "Tell us about your project..."),
    ]
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    // Submission is handled outside this site; keep a trace of what would
    // have been sent.
    let on_submit = Callback::from(|data: HashMap<String, String>| {
        let payload = serde_json::to_string(&data).unwrap_or_default();
        gloo_console::log!("contact submission", payload);
    });

    let info_block = |label: &str, body: Html| -> Html {
        html! {
            <div class="contact-info-block">
                <span class="contact-info-label">{ label.to_string() }</span>
                { body }
            </div>
        }
    };

    let details = html! {
        <div class="contact-info">
            { info_block("EMAIL", html! { <p>{"hello@voidframe.studio"}</p> }) }
            { info_block("PHONE", html! { <p>{"+82 2 1234 5678"}</p> }) }
            { info_block("ADDRESS", html! {
                <p class="contact-address">
                    {"12F, Teheran-ro 427"}<br />
                    {"Gangnam-gu, Seoul"}<br />
                    {"South Korea"}
                </p>
            }) }
            { info_block("SOCIAL", html! {
                <div class="contact-social">
                    { for ["Instagram", "Vimeo", "LinkedIn"].iter().map(|name| html! {
                        <span data-cursor="hover">{ *name }</span>
                    }) }
                </div>
            }) }
        </div>
    };

    let form = html! {
        <BigTypographyForm
            fields={contact_fields()}
            submit_label="SEND MESSAGE"
            font_size="clamp(1.2rem, 2.5vw, 2rem)"
            on_submit={on_submit}
        />
    };

    let year = Utc::now().year();

    let css = format!(
        r#"
            .contact {{
                background-color: {bg};
                min-height: 100vh;
                display: flex;
                flex-direction: column;
            }}
            .contact .contact-headline {{
                position: relative;
                padding: 8rem 4rem 3rem;
                overflow: hidden;
            }}
            .contact .contact-decoration {{
                position: absolute;
                filter: invert(1);
                pointer-events: none;
            }}
            .contact .stretched-headline {{
                position: relative;
                z-index: 1;
                color: {text};
            }}
            .contact .contact-body {{
                flex: 1;
                padding: 0 4rem 5rem;
            }}
            .contact .contact-info {{
                display: flex;
                flex-direction: column;
                gap: 2rem;
                padding-top: 1rem;
            }}
            .contact .contact-info-label {{
                display: block;
                color: rgba(255, 255, 255, 0.4);
                font-size: {overline};
                font-weight: 600;
                letter-spacing: 0.15em;
                text-transform: uppercase;
                margin-bottom: 0.25rem;
            }}
            .contact .contact-info p {{
                color: {text};
                font-size: {body};
            }}
            .contact .contact-address {{
                line-height: 1.8;
            }}
            .contact .contact-social {{
                display: flex;
                gap: 1.5rem;
            }}
            .contact .contact-social span {{
                color: rgba(255, 255, 255, 0.6);
                font-size: 0.875rem;
                cursor: pointer;
                transition: color 0.3s ease;
            }}
            .contact .contact-social span:hover {{
                color: {accent};
            }}
            .contact .contact-footer {{
                border-top: 1px solid {divider};
                padding: 1.5rem 4rem;
                display: flex;
                justify-content: space-between;
                align-items: center;
                flex-wrap: wrap;
                gap: 1rem;
            }}
            .contact .contact-footer span {{
                color: {faint};
                font-size: {overline};
                letter-spacing: 0.05em;
            }}
            .contact .contact-footer-links {{
                display: flex;
                gap: 1.5rem;
            }}
            .contact .contact-footer-links span {{
                letter-spacing: 0.1em;
                cursor: pointer;
                transition: color 0.3s ease;
            }}
            .contact .contact-footer-links span:hover {{
                color: {text};
            }}
        "#,
        bg = theme::BG,
        text = theme::TEXT_PRIMARY,
        accent = theme::ACCENT,
        divider = theme::DIVIDER,
        faint = theme::TEXT_FAINT,
        body = theme::SIZE_BODY,
        overline = theme::SIZE_OVERLINE,
    );

    html! {
        <section class="contact">
            <style>{css}</style>
            <div class="contact-headline">
                <img
                    class="contact-decoration"
                    style="right: 5%; top: 10%; width: 280px; opacity: 0.06;"
                    src={config::asset("voidframe/handle-grafyti-stop.png")}
                    alt=""
                />
                <img
                    class="contact-decoration"
                    style="left: 2%; bottom: 20%; width: 180px; opacity: 0.04;"
                    src={config::asset("voidframe/prise-grafyti-3-stop.png")}
                    alt=""
                />
                <StretchedHeadline
                    text="LET'S TALK"
                    font_size="clamp(3rem, 10vw, 9rem)"
                />
            </div>
            <div class="contact-body">
                <SplitScreen ratio="60:40" stack_at="md" gap={4} left={form} right={details} />
            </div>
            <footer class="contact-footer">
                <span>
                    { format!("\u{a9} {year} VOIDFRAME STUDIO. All rights reserved.") }
                </span>
                <div class="contact-footer-links">
                    { for ["PRIVACY", "TERMS"].iter().map(|link| html! {
                        <span data-cursor="hover">{ *link }</span>
                    }) }
                </div>
            </footer>
        </section>
    }
}
