use dioxus::prelude::*;

use crate::{
    app::{load_service_settings, persist_user_state},
    config::ServiceSettings,
    domain::AppState,
    infra::PredictionClient,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let initial = state.with(|st| st.settings.clone());

    let mut base_url_input = use_signal(|| initial.base_url.clone());
    let mut rate_input = use_signal(|| format!("{:.2}", initial.secondary_rate));
    let mut timeout_input = use_signal(|| initial.request_timeout_secs.to_string());
    let mut checking = use_signal(|| false);

    let on_apply = {
        let mut state = state;
        move |_| {
            let current = state.with(|st| st.settings.clone());
            match parse_settings(&current, base_url_input(), rate_input(), timeout_input()) {
                Ok(settings) => match state.with_mut(|st| st.apply_settings(&settings)) {
                    Ok(()) => {
                        tracing::info!(base_url = %settings.base_url, rate = settings.secondary_rate, "service settings updated");
                        persist_user_state(&state);
                        push_toast(toasts, ToastKind::Success, "Saved service settings.");
                    }
                    Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
                },
                Err(message) => push_toast(toasts, ToastKind::Error, message),
            }
        }
    };

    let on_reset = {
        let mut state = state;
        move |_| {
            let defaults = load_service_settings();
            base_url_input.set(defaults.base_url.clone());
            rate_input.set(format!("{:.2}", defaults.secondary_rate));
            timeout_input.set(defaults.request_timeout_secs.to_string());
            state.with_mut(|st| {
                st.base_settings = defaults;
                st.clear_overrides();
            });
            persist_user_state(&state);
            push_toast(toasts, ToastKind::Info, "Restored default service settings.");
        }
    };

    let on_check = move |_| {
        if checking() {
            return;
        }
        let settings = state.with(|st| st.settings.clone());
        checking.set(true);
        spawn(async move {
            let result = match PredictionClient::new(&settings) {
                Ok(client) => client.health().await,
                Err(err) => Err(err),
            };
            match result {
                Ok(status) => push_toast(
                    toasts,
                    ToastKind::Success,
                    format!("Service reachable: {}", status.status),
                ),
                Err(err) => {
                    tracing::warn!(error = %err, "health check failed");
                    push_toast(
                        toasts,
                        ToastKind::Error,
                        format!("Service unreachable: {err}"),
                    );
                }
            }
            checking.set(false);
        });
    };

    rsx! {
        div {
            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "Prediction service" }
                div { class: "field",
                    label { class: "field-label", span { "Service URL" } }
                    input {
                        class: theme::input_class(false),
                        value: base_url_input(),
                        oninput: move |evt| base_url_input.set(evt.value()),
                    }
                }
                div { class: "field",
                    label { class: "field-label",
                        span { "Request timeout" }
                        span { class: "field-unit", "seconds" }
                    }
                    input {
                        class: theme::input_class(false),
                        value: timeout_input(),
                        oninput: move |evt| timeout_input.set(evt.value()),
                    }
                }
                div { class: "field",
                    label { class: "field-label",
                        span { "Exchange rate" }
                        span { class: "field-unit", "INR per USD" }
                    }
                    input {
                        class: theme::input_class(false),
                        value: rate_input(),
                        oninput: move |evt| rate_input.set(evt.value()),
                    }
                    p { class: "field-description", "Fixed rate used to show estimates in rupees. It is not refreshed automatically." }
                }
                div { class: "actions",
                    button { class: theme::BTN_PRIMARY, onclick: on_apply, "Apply" }
                    button { class: theme::BTN_SECONDARY, onclick: on_reset, "Reset" }
                    button {
                        class: theme::BTN_SECONDARY,
                        disabled: checking(),
                        onclick: on_check,
                        if checking() { "Checking…" } else { "Check connection" }
                    }
                }
            }
        }
    }
}

fn parse_settings(
    current: &ServiceSettings,
    base_url: String,
    rate: String,
    timeout: String,
) -> Result<ServiceSettings, String> {
    let secondary_rate = rate
        .trim()
        .parse::<f64>()
        .map_err(|_| "Exchange rate must be a number.".to_string())?;
    let request_timeout_secs = timeout
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .ok_or_else(|| "Timeout must be a whole number of seconds.".to_string())?;

    let settings = ServiceSettings {
        base_url: base_url.trim().to_string(),
        secondary_rate,
        request_timeout_secs,
        ..current.clone()
    };
    settings.validate().map_err(|err| err.to_string())?;
    Ok(settings)
}
