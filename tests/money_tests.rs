use rclinic::forms::checkbox::{parse_selection, serialize_checkboxes, serialize_labels};
use rclinic::utils::money::{
    MAX_AMOUNT, checked_cents, format_amount, format_brl, format_cents, parse_amount, to_cents,
};

#[test]
fn test_format_cents() {
    assert_eq!(format_cents(0), "0,00");
    assert_eq!(format_cents(5), "0,05");
    assert_eq!(format_cents(15000), "150,00");
    assert_eq!(format_cents(123456), "1.234,56");
    assert_eq!(format_cents(100_000_000), "1.000.000,00");
    assert_eq!(format_cents(-123456), "-1.234,56");
    assert_eq!(format_brl(1234.5), "R$ 1.234,50");
}

#[test]
fn test_parse_amount_shapes() {
    assert_eq!(parse_amount("1.234,56"), Some(1234.56));
    assert_eq!(parse_amount("R$ 150,00"), Some(150.0));
    assert_eq!(parse_amount("150"), Some(150.0));
    assert_eq!(parse_amount("1.234"), Some(1234.0));
    assert_eq!(parse_amount("150.0"), Some(150.0));
    assert_eq!(parse_amount("99.90"), Some(99.9));
    assert_eq!(parse_amount("-50,00"), Some(-50.0));
}

#[test]
fn test_parse_amount_from_budget_text() {
    let budget = "Trat:Drenagem | Pag:PIX | Valor: R$ 1.234,56";
    assert_eq!(parse_amount(budget), Some(1234.56));
}

#[test]
fn test_parse_amount_rejects_garbage() {
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("-"), None);
    assert_eq!(parse_amount("abc"), None);
    assert_eq!(parse_amount("1,2,3"), None);
    assert_eq!(parse_amount("12.34.5"), None);
    assert_eq!(parse_amount("Motivo:Limpeza"), None);
}

#[test]
fn test_amount_round_trip_through_text() {
    for cents in [0, 1, 99, 15000, 123456, 9_999_999] {
        let text = format_cents(cents);
        assert_eq!(parse_amount(&text).map(to_cents), Some(cents), "{text}");
    }
}

#[test]
fn test_fractional_amounts_round_trip_within_half_a_cent() {
    for value in [0.0, 0.004, 0.1, 1.005, 99.999, 150.25, 1234.5678, -0.75, -1234.56, -99_999.994] {
        let text = format_amount(value);
        let back = parse_amount(&text).unwrap_or_else(|| panic!("unreadable '{text}'"));
        assert!((back - value).abs() <= 0.005 + 1e-9, "{value} -> {text} -> {back}");
    }
}

#[test]
fn test_checked_cents_bounds() {
    assert_eq!(checked_cents(0.0), Some(0));
    assert_eq!(checked_cents(150.25), Some(15025));
    assert_eq!(checked_cents(MAX_AMOUNT), Some(100_000_000_000));
    assert_eq!(checked_cents(MAX_AMOUNT + 1.0), None);
    assert_eq!(checked_cents(1.0e17), None);
    assert_eq!(checked_cents(-0.01), None);
    assert_eq!(checked_cents(f64::NAN), None);
    assert_eq!(checked_cents(f64::INFINITY), None);
}

#[test]
fn test_checkbox_serialization() {
    let items = [("Alergia", true), ("Medicamentos", false), ("Epilepsia", true)];
    assert_eq!(serialize_checkboxes(items), "Alergia, Epilepsia");

    let none = [("Alergia", false), ("Epilepsia", false)];
    assert_eq!(serialize_checkboxes(none), "Nada");

    assert_eq!(serialize_labels(Vec::<&str>::new()), "Nada");
    assert_eq!(serialize_labels(["Melasma", "Rugas"]), "Melasma, Rugas");
}

#[test]
fn test_parse_selection() {
    assert_eq!(parse_selection("Alergia, Epilepsia"), vec!["Alergia", "Epilepsia"]);
    assert!(parse_selection("Nada").is_empty());
    assert!(parse_selection("-").is_empty());
    assert!(parse_selection("  ").is_empty());
}
