//! Oversized-typography contact form: underline-only inputs at display
//! sizes, one submit button. Field values live in a name → value map and
//! the submit callback receives the whole map with default prevented.

use std::collections::HashMap;

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::theme;

#[derive(Clone, PartialEq)]
pub struct FormField {
    pub name: AttrValue,
    pub label: Option<AttrValue>,
    pub placeholder: AttrValue,
    pub kind: AttrValue,
    pub multiline: bool,
}

impl FormField {
    pub fn text(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name: AttrValue::Static(name),
            label: Some(AttrValue::Static(label)),
            placeholder: AttrValue::Static(placeholder),
            kind: AttrValue::Static("text"),
            multiline: false,
        }
    }

    pub fn email(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            kind: AttrValue::Static("email"),
            ..Self::text(name, label, placeholder)
        }
    }

    pub fn multiline(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            multiline: true,
            ..Self::text(name, label, placeholder)
        }
    }
}

/// Clone-and-update fold applied on every keystroke.
pub fn set_value(
    values: &HashMap<String, String>,
    name: &str,
    value: String,
) -> HashMap<String, String> {
    let mut next = values.clone();
    next.insert(name.to_string(), value);
    next
}

/// The submit payload: every declared field, untouched ones as empty
/// strings.
pub fn collect(fields: &[FormField], values: &HashMap<String, String>) -> HashMap<String, String> {
    fields
        .iter()
        .map(|field| {
            (
                field.name.to_string(),
                values.get(field.name.as_str()).cloned().unwrap_or_default(),
            )
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct BigTypographyFormProps {
    pub fields: Vec<FormField>,
    #[prop_or(AttrValue::Static("SEND"))]
    pub submit_label: AttrValue,
    #[prop_or(AttrValue::Static("clamp(1.5rem, 3vw, 2.5rem)"))]
    pub font_size: AttrValue,
    #[prop_or(AttrValue::Static(theme::ACCENT))]
    pub accent: AttrValue,
    #[prop_or_default]
    pub on_submit: Callback<HashMap<String, String>>,
}

#[function_component(BigTypographyForm)]
pub fn big_typography_form(props: &BigTypographyFormProps) -> Html {
    let values = use_state(HashMap::<String, String>::new);

    let onsubmit = {
        let values = values.clone();
        let fields = props.fields.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(collect(&fields, &values));
        })
    };

    let css = format!(
        r#"
            .big-form {{
                display: flex;
                flex-direction: column;
                gap: 2.5rem;
                width: 100%;
            }}
            .big-form .form-field-label {{
                display: block;
                color: rgba(255, 255, 255, 0.4);
                font-size: {overline};
                font-weight: 600;
                letter-spacing: 0.1em;
                text-transform: uppercase;
                margin-bottom: 0.5rem;
            }}
            .big-form input,
            .big-form textarea {{
                width: 100%;
                background: transparent;
                border: none;
                border-bottom: 2px solid rgba(255, 255, 255, 0.2);
                color: {text};
                font-size: {font_size};
                font-weight: 300;
                padding: 0.75rem 0;
                outline: none;
                resize: none;
                transition: border-color 0.3s ease;
            }}
            .big-form input:hover,
            .big-form textarea:hover {{
                border-bottom-color: rgba(255, 255, 255, 0.5);
            }}
            .big-form input:focus,
            .big-form textarea:focus {{
                border-bottom-color: {accent};
            }}
            .big-form input::placeholder,
            .big-form textarea::placeholder {{
                color: rgba(255, 255, 255, 0.25);
            }}
            .big-form .form-submit {{
                align-self: flex-start;
                margin-top: 1rem;
                padding: 0.75rem 3rem;
                background: transparent;
                border: 2px solid {text};
                color: {text};
                font-size: 1rem;
                font-weight: 700;
                letter-spacing: 0.1em;
                text-transform: uppercase;
                cursor: pointer;
                transition: background-color 0.3s ease, border-color 0.3s ease;
            }}
            .big-form .form-submit:hover {{
                background-color: {accent};
                border-color: {accent};
            }}
        "#,
        overline = theme::SIZE_OVERLINE,
        text = theme::TEXT_PRIMARY,
        font_size = props.font_size,
        accent = props.accent,
    );

    html! {
        <form class="big-form" {onsubmit}>
            <style>{css}</style>
            { for props.fields.iter().map(|field| {
                let name = field.name.clone();
                let value = values
                    .get(field.name.as_str())
                    .cloned()
                    .unwrap_or_default();
                let label = field.label.clone().map(|label| html! {
                    <span class="form-field-label">{ label }</span>
                });

                let control = if field.multiline {
                    let oninput = {
                        let values = values.clone();
                        let name = name.clone();
                        Callback::from(move |e: InputEvent| {
                            let area: HtmlTextAreaElement = e.target_unchecked_into();
                            values.set(set_value(&values, &name, area.value()));
                        })
                    };
                    html! {
                        <textarea
                            name={name.clone()}
                            rows="3"
                            placeholder={field.placeholder.clone()}
                            value={value}
                            data-cursor="hover"
                            {oninput}
                        />
                    }
                } else {
                    let oninput = {
                        let values = values.clone();
                        let name = name.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            values.set(set_value(&values, &name, input.value()));
                        })
                    };
                    html! {
                        <input
                            name={name.clone()}
                            type={field.kind.clone()}
                            placeholder={field.placeholder.clone()}
                            value={value}
                            data-cursor="hover"
                            {oninput}
                        />
                    }
                };

                html! {
                    <div class="form-field" key={field.name.as_str()}>
                        { label.unwrap_or_default() }
                        { control }
                    </div>
                }
            }) }
            <button type="submit" class="form-submit" data-cursor="hover">
                { props.submit_label.clone() }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_fields() -> Vec<FormField> {
        vec![
            FormField::text("name", "NAME", "Your Name"),
            FormField::email("email", "EMAIL", "Email Address"),
        ]
    }

    #[test]
    fn keystrokes_fold_into_the_value_map() {
        let mut values = HashMap::new();
        for prefix in ["a", "a@", "a@b", "a@b.com"] {
            values = set_value(&values, "email", prefix.to_string());
        }
        assert_eq!(values.get("email").unwrap(), "a@b.com");
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn submit_payload_carries_the_typed_value() {
        let fields = vec![FormField::email("email", "EMAIL", "Email Address")];
        let values = set_value(&HashMap::new(), "email", "a@b.com".to_string());
        let payload = collect(&fields, &values);
        assert_eq!(payload.len(), 1);
        assert_eq!(payload.get("email").unwrap(), "a@b.com");
    }

    #[test]
    fn untouched_fields_submit_as_empty_strings() {
        let payload = collect(&contact_fields(), &HashMap::new());
        assert_eq!(payload.get("name").unwrap(), "");
        assert_eq!(payload.get("email").unwrap(), "");
    }

    #[test]
    fn values_for_undeclared_fields_are_not_submitted() {
        let values = set_value(&HashMap::new(), "ghost", "boo".to_string());
        let payload = collect(&contact_fields(), &values);
        assert!(!payload.contains_key("ghost"));
    }
}
