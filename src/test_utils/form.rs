use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_form_action(form: &ElementRef<'_>, endpoint: &str) {
    let method = form.value().attr("method").unwrap_or_default();
    let action = form
        .value()
        .attr("action")
        .unwrap_or_else(|| panic!("action attribute missing"));

    assert_eq!(method, "post", "want form with method=\"post\", got {method:?}");
    assert_eq!(
        action, endpoint,
        "want form with attribute action=\"{endpoint}\", got {action:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    for input in form.select(&Selector::parse("input").unwrap()) {
        let input_name = input.value().attr("name").unwrap_or_default();

        if input_name == name {
            let input_type = input.value().attr("type").unwrap_or_default();
            let input_required = input.value().attr("required");

            assert_eq!(
                input_type, type_,
                "want input with type \"{type_}\", got {input_type:?}"
            );

            assert!(
                input_required.is_some(),
                "want input with name {name} to have the required attribute but got none"
            );

            return;
        }
    }

    panic!("No input found with name \"{name}\" and type \"{type_}\"");
}

#[track_caller]
pub(crate) fn assert_form_input_with_value(form: &ElementRef<'_>, name: &str, value: &str) {
    for input in form.select(&Selector::parse("input").unwrap()) {
        let input_name = input.value().attr("name").unwrap_or_default();

        if input_name == name {
            let input_value = input.value().attr("value").unwrap_or_default();

            assert_eq!(
                input_value, value,
                "want input {name} with value \"{value}\", got {input_value:?}"
            );

            return;
        }
    }

    panic!("No input found with name \"{name}\"");
}

#[track_caller]
pub(crate) fn assert_form_submit_button(form: &ElementRef<'_>, text: &str) {
    let submit_button = form
        .select(&Selector::parse("button").unwrap())
        .next()
        .expect("No button found");

    assert_eq!(
        submit_button.value().attr("type").unwrap_or_default(),
        "submit",
        "want submit button with type=\"submit\""
    );
    let got_text = submit_button.text().collect::<Vec<_>>().join("");
    assert_eq!(text, got_text.trim());
}

#[track_caller]
pub(crate) fn assert_field_error(form: &ElementRef<'_>, field: &str, want_error_message: &str) {
    let selector = Selector::parse(&format!("p#{field}-error")).unwrap();
    let error_message = form
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No error message found for {field}"))
        .text()
        .collect::<Vec<_>>()
        .join("");

    assert_eq!(want_error_message, error_message.trim());
}

#[track_caller]
pub(crate) fn assert_no_field_errors(form: &ElementRef<'_>) {
    let selector = Selector::parse("p[id$=\"-error\"]").unwrap();
    let errors: Vec<_> = form.select(&selector).collect();

    assert!(errors.is_empty(), "want no field errors, got {}", errors.len());
}
