//! Class helpers so pages agree on styling. The rules live in `assets/main.css`.

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "btn btn-active"
    } else {
        "btn"
    }
}

pub const BTN_TOGGLE: &str = "btn btn-small";

pub fn input_class(flagged: bool) -> &'static str {
    if flagged {
        "input input-invalid"
    } else {
        "input"
    }
}

pub const BTN_PRIMARY: &str = "btn btn-primary";
pub const BTN_SECONDARY: &str = "btn";
pub const PANEL: &str = "panel";
pub const PANEL_TITLE: &str = "panel-title";
