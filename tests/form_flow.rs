use keypad_core::{AdapterConfig, FormAction, FormOutcome, KeypadForm, Messages};

fn type_digits(form: &mut KeypadForm, digits: &str) {
    for c in digits.chars() {
        assert_eq!(form.apply(FormAction::Insert(c)), FormOutcome::Continue);
    }
}

#[test]
fn enter_shows_count_and_every_combination() {
    let mut form = KeypadForm::new(AdapterConfig::default());
    type_digits(&mut form, "23");
    form.apply(FormAction::Submit);

    assert_eq!(form.error, None);
    let view = form.results.as_ref().expect("results should be visible");
    assert_eq!(view.count, 9);
    assert_eq!(view.items.len(), 9);
    assert!(!view.truncated);
    assert_eq!(form.count_label().as_deref(), Some("Total combinations: 9"));
}

#[test]
fn empty_input_shows_message_and_hides_results() {
    let mut form = KeypadForm::new(AdapterConfig::default());
    type_digits(&mut form, "   ");
    form.apply(FormAction::Submit);

    assert_eq!(form.error, Some(Messages::default().empty_input));
    assert!(form.results.is_none());
    assert_eq!(form.count_label(), None);
}

#[test]
fn digits_outside_two_to_nine_are_rejected() {
    for input in ["0", "1", "21", "2a", "-2"] {
        let mut form = KeypadForm::new(AdapterConfig::default());
        type_digits(&mut form, input);
        form.apply(FormAction::Submit);
        assert_eq!(form.error, Some(Messages::default().invalid_digits), "{input}");
        assert!(form.results.is_none());
    }
}

#[test]
fn backspace_edits_the_field() {
    let mut form = KeypadForm::new(AdapterConfig::default());
    type_digits(&mut form, "21");
    form.apply(FormAction::Backspace);
    form.apply(FormAction::Submit);

    assert_eq!(form.input, "2");
    assert_eq!(form.results.unwrap().items, ["a", "b", "c"]);
}

#[test]
fn reset_clears_everything_and_focuses_input() {
    let mut form = KeypadForm::new(AdapterConfig::default());
    type_digits(&mut form, "79");
    form.apply(FormAction::Submit);
    form.focused = false;

    form.apply(FormAction::Reset);
    assert!(form.input.is_empty());
    assert_eq!(form.error, None);
    assert!(form.results.is_none());
    assert!(form.focused);

    type_digits(&mut form, "x");
    form.apply(FormAction::Submit);
    form.apply(FormAction::Reset);
    assert_eq!(form.error, None);
}

#[test]
fn configured_messages_are_used() {
    let config = AdapterConfig {
        messages: Messages {
            invalid_digits: "Solo se permiten números del 2 al 9.".to_string(),
            count_label: "Total de combinaciones: {count}".to_string(),
            ..Messages::default()
        },
        ..AdapterConfig::default()
    };
    let mut form = KeypadForm::new(config);
    type_digits(&mut form, "1");
    form.apply(FormAction::Submit);
    assert_eq!(form.error.as_deref(), Some("Solo se permiten números del 2 al 9."));

    form.apply(FormAction::Reset);
    type_digits(&mut form, "7");
    form.apply(FormAction::Submit);
    assert_eq!(form.count_label().as_deref(), Some("Total de combinaciones: 4"));
}

#[test]
fn quit_is_reported_to_the_front_end() {
    let mut form = KeypadForm::new(AdapterConfig::default());
    assert_eq!(form.apply(FormAction::Quit), FormOutcome::Quit);
}
