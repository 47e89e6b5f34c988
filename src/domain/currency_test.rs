use super::*;

#[test]
fn primary_uses_dollar_and_groups_of_three() {
    let presenter = CurrencyPresenter::new(90.0);
    assert_eq!(
        presenter.format(Some(215_000.0), CurrencySelection::Primary),
        Some("$215,000".to_string())
    );
    assert_eq!(
        presenter.format(Some(1_234_567.4), CurrencySelection::Primary),
        Some("$1,234,567".to_string())
    );
}

#[test]
fn secondary_converts_and_uses_indian_grouping() {
    let presenter = CurrencyPresenter::new(90.0);
    let display = presenter
        .format(Some(215_000.0), CurrencySelection::Secondary)
        .expect("value present");
    assert_eq!(display, "₹1,93,50,000");
    assert_eq!(display.replace(',', ""), "₹19350000");
}

#[test]
fn no_value_means_no_display() {
    let presenter = CurrencyPresenter::default();
    assert_eq!(presenter.format(None, CurrencySelection::Primary), None);
    assert_eq!(presenter.format(Some(f64::NAN), CurrencySelection::Secondary), None);
}

#[test]
fn zero_is_a_real_estimate() {
    let presenter = CurrencyPresenter::default();
    assert_eq!(
        presenter.format(Some(0.0), CurrencySelection::Primary),
        Some("$0".to_string())
    );
}

#[test]
fn small_and_negative_values_keep_sign_and_grouping() {
    let presenter = CurrencyPresenter::new(1.0);
    assert_eq!(
        presenter.format(Some(999.6), CurrencySelection::Primary),
        Some("$1,000".to_string())
    );
    assert_eq!(
        presenter.format(Some(-1_500.0), CurrencySelection::Primary),
        Some("-$1,500".to_string())
    );
    assert_eq!(
        presenter.format(Some(950.0), CurrencySelection::Secondary),
        Some("₹950".to_string())
    );
    assert_eq!(
        presenter.format(Some(123_456.0), CurrencySelection::Secondary),
        Some("₹1,23,456".to_string())
    );
}

#[test]
fn format_is_repeatable() {
    let presenter = CurrencyPresenter::new(90.0);
    let first = presenter.format(Some(182_500.75), CurrencySelection::Secondary);
    let second = presenter.format(Some(182_500.75), CurrencySelection::Secondary);
    assert_eq!(first, second);
}

#[test]
fn toggling_switches_between_codes() {
    assert_eq!(CurrencySelection::Primary.toggled(), CurrencySelection::Secondary);
    assert_eq!(CurrencySelection::Secondary.toggled().code(), "USD");
}
