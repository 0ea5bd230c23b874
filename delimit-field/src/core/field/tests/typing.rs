use super::*;

#[test]
fn test_typing_thousands() {
    let field = thousands();
    let mut host = TextField::new();

    let result = field.process_key(&mut host, &press('1'));
    assert!(result.consumed);
    assert_eq!(host.text(), "1");

    type_keys(&field, &mut host, "234");
    assert_eq!(host.text(), "1,234");
    assert_eq!(host.caret(), 5);

    type_keys(&field, &mut host, "5");
    assert_eq!(host.text(), "12,345");
    assert_eq!(host.caret(), 6);
    assert!(host.take_suppressed());
}

#[test]
fn test_result_carries_edit() {
    let field = thousands();
    let mut host = TextField::with_text("1,234");

    let result = field.process_key(&mut host, &press('5'));
    assert_eq!(result.edit, Some(EditResult::new("12,345", 6)));
}

#[test]
fn test_typing_over_selection() {
    let field = thousands();
    let mut host = TextField::with_text("12,345");
    host.select(0, 2);

    field.process_key(&mut host, &press('9'));
    assert_eq!(host.text(), "9,345");
    assert_eq!(host.selection(), Selection::caret(1));
}

#[test]
fn test_serial_key_letters_are_lowercased() {
    let field = DelimitedField::new(FieldConfig::preset(Preset::SerialKey));
    let mut host = TextField::new();

    type_keys(&field, &mut host, "827AB");
    assert_eq!(host.text(), "827ab");

    field.process_key(&mut host, &press_shift('C'));
    assert_eq!(host.text(), "827ab-C");
    assert_eq!(host.caret(), 7);
}

#[test]
fn test_full_field_swallows_key() {
    let config = FieldConfig::new("-", 2, Direction::Ltr)
        .unwrap()
        .with_max_length(Some(5));
    let field = DelimitedField::new(config);
    let mut host = TextField::new();
    type_keys(&field, &mut host, "1234");
    assert_eq!(host.text(), "12-34");
    host.take_suppressed();

    host.set_caret(2);
    let result = field.process_key(&mut host, &press('9'));
    assert!(result.consumed);
    assert_eq!(result.edit, None);
    assert_eq!(host.text(), "12-34");
    assert_eq!(host.caret(), 2);
    assert!(host.take_suppressed());
}

#[test]
fn test_overwrite_in_full_field() {
    let config = FieldConfig::new("-", 2, Direction::Ltr)
        .unwrap()
        .with_alphabet(Alphabet::Alphanumeric)
        .with_max_length(Some(5))
        .with_overwrite(true);
    let field = DelimitedField::new(config);
    let mut host = TextField::with_text("12-34");
    host.set_caret(2);

    field.process_key(&mut host, &press('x'));
    assert_eq!(host.text(), "12-x4");
    assert_eq!(host.caret(), 4);
}

#[test]
fn test_card_number_prefill() {
    let field = DelimitedField::new(FieldConfig::preset(Preset::CardNumber));
    let mut host = TextField::new();

    type_keys(&field, &mut host, "4820");
    assert_eq!(host.text(), "4820 ");
    assert_eq!(host.caret(), 5);

    type_keys(&field, &mut host, "672882915824");
    assert_eq!(host.text(), "4820 6728 8291 5824");
    assert_eq!(field.payload(&host), "4820672882915824");
}

#[test]
fn test_normalize_programmatic_value() {
    let field = thousands();
    let mut host = TextField::with_text("12,34567");
    host.set_caret(0);

    let result = field.normalize(&mut host);
    assert_eq!(result.buffer, "1,234,567");
    assert_eq!(host.text(), "1,234,567");
    assert_eq!(host.caret(), 9);
    assert_eq!(field.payload(&host), "1234567");
}
