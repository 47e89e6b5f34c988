use dioxus::prelude::*;

use crate::domain::CurrencySelection;
use crate::ui::theme;

/// Switches the displayed currency. Never triggers a new request.
#[component]
pub fn CurrencyToggle(selected: CurrencySelection, onselect: EventHandler<CurrencySelection>) -> Element {
    let next = selected.toggled();
    rsx! {
        div { class: "actions",
            button {
                class: theme::BTN_TOGGLE,
                onclick: move |_| onselect.call(next),
                "Show in {next.symbol()} {next.code()}"
            }
        }
    }
}
