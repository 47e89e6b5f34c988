use dioxus::prelude::*;

use crate::domain::{overall_quality, FieldIssue, FieldKey, RawValue};
use crate::ui::theme;

/// One labelled input. Out-of-range values are accepted here and only flagged;
/// the controller rejects them on submit.
#[component]
pub fn FieldInput(field_key: FieldKey, value: RawValue, onchange: EventHandler<String>) -> Element {
    let field = field_key.field();
    let text = value.to_string();
    // An empty field is only reported once the user submits.
    let hint = match field.normalize(&value) {
        Ok(_) | Err(FieldIssue::Missing) => None,
        Err(issue) => Some(format!("{} {}", field.label, issue.describe(field))),
    };
    let flagged = hint.is_some();

    if field_key == overall_quality().key {
        return rsx! {
            div { class: "field",
                label { class: "field-label",
                    span { "{field.label}" }
                    span { class: "field-unit", "{text} / {field.max}" }
                }
                input {
                    class: "slider",
                    r#type: "range",
                    min: "{field.min}",
                    max: "{field.max}",
                    step: "1",
                    value: "{text}",
                    oninput: move |evt| onchange.call(evt.value()),
                }
                p { class: "field-description", "{field.description}" }
            }
        };
    }

    rsx! {
        div { class: "field",
            label { class: "field-label",
                span { "{field.label}" }
                if !field.unit.is_empty() {
                    span { class: "field-unit", "{field.unit}" }
                }
            }
            input {
                class: theme::input_class(flagged),
                r#type: "number",
                min: "{field.min}",
                max: "{field.max}",
                placeholder: field.range_hint(),
                value: "{text}",
                oninput: move |evt| onchange.call(evt.value()),
            }
            if let Some(hint) = hint {
                p { class: "field-hint", "{hint}" }
            } else {
                p { class: "field-description", "{field.description}" }
            }
        }
    }
}
