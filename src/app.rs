use dioxus::{prelude::*, signals::Signal};

use crate::{
    config::ServiceSettings,
    domain::{AppState, RequestController},
    infra::{PredictionClient, PredictionService},
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{EstimatePage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Estimate {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(|| AppState::new(load_service_settings()));
    use_hook({
        let mut state = state;
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Environment settings, or the built-in defaults when they are unusable.
pub fn load_service_settings() -> ServiceSettings {
    ServiceSettings::from_env().unwrap_or_else(|err| {
        tracing::warn!(%err, "falling back to default service settings");
        ServiceSettings::default()
    })
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        tracing::warn!(%err, "failed to persist user state");
    }
}

/// Starts a submission and settles it when the service answers.
///
/// The task belongs to the calling component's scope, so it is dropped with
/// the page that owns `controller`.
pub fn request_estimate(mut controller: Signal<RequestController>, state: Signal<AppState>) {
    let Some(dispatch) = controller.with_mut(|c| c.begin_submit()) else {
        return;
    };
    let settings = state.with(|st| st.settings.clone());

    spawn(async move {
        let result = match PredictionClient::new(&settings) {
            Ok(client) => client.predict(&dispatch.request).await,
            Err(err) => Err(err),
        };
        let applied = controller.with_mut(|c| c.settle(dispatch.ticket, result));
        tracing::debug!(applied, "estimate settled");
    });
}

#[component]
pub fn Estimate() -> Element {
    rsx! { Shell { EstimatePage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
