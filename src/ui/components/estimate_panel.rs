use dioxus::prelude::*;

use crate::domain::{CurrencyPresenter, CurrencySelection, PredictionOutcome};
use crate::ui::components::CurrencyToggle;
use crate::ui::theme;

#[component]
pub fn EstimatePanel(
    outcome: PredictionOutcome,
    currency: CurrencySelection,
    presenter: CurrencyPresenter,
    oncurrency: EventHandler<CurrencySelection>,
) -> Element {
    if outcome.is_pending() {
        return rsx! {
            section { class: "{theme::PANEL} estimate estimate-pending", "Estimating…" }
        };
    }
    if let Some(message) = outcome.error() {
        return rsx! {
            section { class: "{theme::PANEL} estimate-error",
                h2 { class: theme::PANEL_TITLE, "Estimate unavailable" }
                p { "{message}" }
            }
        };
    }
    // Idle formats to nothing.
    let Some(display) = presenter.format(outcome.value(), currency) else {
        return rsx! { Fragment {} };
    };
    let note = match currency {
        CurrencySelection::Primary => "Model estimate in US dollars.".to_string(),
        CurrencySelection::Secondary => format!(
            "Converted at a fixed {:.2} INR per USD.",
            presenter.secondary_rate()
        ),
    };
    rsx! {
        section { class: "{theme::PANEL} estimate",
            h2 { class: theme::PANEL_TITLE, "Estimated price" }
            p { class: "estimate-value", "{display}" }
            p { class: "estimate-note", "{note}" }
            CurrencyToggle { selected: currency, onselect: oncurrency }
        }
    }
}
