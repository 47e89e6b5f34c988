use dioxus::prelude::*;

use crate::{
    app::{persist_user_state, request_estimate},
    domain::{fields, AppState, CurrencySelection, RequestController},
    ui::{
        components::{EstimatePanel, FieldInput},
        theme,
    },
};

#[component]
pub fn EstimatePage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    // The controller lives and dies with this page; leaving it drops any
    // request still in flight along with the page's tasks.
    let mut controller =
        use_signal(|| RequestController::with_form(state.with(|st| st.saved_form())));

    use_drop(move || persist_user_state(&state));

    let (form, outcome) = controller.with(|c| (c.form().clone(), c.outcome().clone()));
    let pending = outcome.is_pending();
    let currency = state.with(|st| st.currency);
    let presenter = state.with(|st| st.presenter());

    let on_submit = move |_| request_estimate(controller, state);

    let on_cancel = move |_| {
        if controller.with_mut(|c| c.cancel()) {
            tracing::info!("estimate request cancelled");
        }
    };

    let on_reset = move |_| {
        controller.with_mut(|c| c.reset_form());
        let inputs = controller.with(|c| c.form().to_inputs());
        state.with_mut(|st| st.saved_inputs = inputs);
    };

    let on_currency = move |selected: CurrencySelection| {
        state.with_mut(|st| st.currency = selected);
        persist_user_state(&state);
    };

    rsx! {
        div {
            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "Property details" }
                for field in fields() {
                    FieldInput {
                        key: "{field.key}",
                        field_key: field.key,
                        value: form.get(field.key).clone(),
                        onchange: move |value: String| {
                            let key = field.key;
                            controller.with_mut(|c| c.set_field(key, value.as_str()));
                            let inputs = controller.with(|c| c.form().to_inputs());
                            state.with_mut(|st| st.saved_inputs = inputs);
                        },
                    }
                }
                div { class: "actions",
                    button {
                        class: theme::BTN_PRIMARY,
                        disabled: pending,
                        onclick: on_submit,
                        if pending { "Estimating…" } else { "Estimate price" }
                    }
                    if pending {
                        button {
                            class: theme::BTN_SECONDARY,
                            onclick: on_cancel,
                            "Cancel"
                        }
                    }
                    button {
                        class: theme::BTN_SECONDARY,
                        onclick: on_reset,
                        "Reset"
                    }
                }
            }
            EstimatePanel {
                outcome,
                currency,
                presenter,
                oncurrency: on_currency,
            }
        }
    }
}
