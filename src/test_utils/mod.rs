#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use form::{
    assert_field_error, assert_form_action, assert_form_input, assert_form_input_with_value,
    assert_form_submit_button, assert_no_field_errors, must_get_form,
};
pub(crate) use html::{assert_valid_html, parse_html, select_text};
pub(crate) use http::{assert_redirect, get_test_server, seed_transactions};
