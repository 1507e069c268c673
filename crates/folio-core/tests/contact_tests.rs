// Host-side tests for contact form submission decisions.

use folio_core::*;

const ENDPOINT: &str = "https://formspree.io/f/example";

fn filled() -> ContactState {
    ContactState {
        form: ContactForm {
            name: " Ada ".into(),
            email: "ada@example.com".into(),
            message: "Let's build something.".into(),
            company: String::new(),
        },
        ..ContactState::default()
    }
}

#[test]
fn honeypot_submission_sends_nothing_and_shows_nothing() {
    let mut s = filled();
    s.form.company = "Spam Inc".into();
    assert_eq!(s.submit(Some(ENDPOINT)), SubmitAction::Ignore);
    assert_eq!(s.status, SubmitStatus::Idle);
    assert!(s.errors.is_empty());
}

#[test]
fn valid_form_produces_trimmed_payload_and_sending_status() {
    let mut s = filled();
    let (endpoint, payload) = match s.submit(Some(ENDPOINT)) {
        SubmitAction::Send { endpoint, payload } => (endpoint, payload),
        other => panic!("expected Send, got {other:?}"),
    };
    assert_eq!(endpoint, ENDPOINT);
    assert_eq!(payload.name, "Ada");
    assert!(s.status.is_sending());

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Let's build something."
        })
    );
    assert!(json.get("company").is_none());

    assert_eq!(s.submit(Some(ENDPOINT)), SubmitAction::Ignore, "already sending");
}

#[test]
fn field_errors_block_submission() {
    let mut s = ContactState::default();
    s.form.email = "not-an-email".into();
    assert_eq!(s.submit(Some(ENDPOINT)), SubmitAction::Invalid);
    assert_eq!(s.status, SubmitStatus::Idle);
    assert_eq!(
        s.error_for(Field::Name),
        Some(&FieldError::Required(Field::Name))
    );
    assert_eq!(s.error_for(Field::Email), Some(&FieldError::InvalidEmail));
    assert_eq!(
        s.error_for(Field::Message).map(ToString::to_string),
        Some("message is required".to_string())
    );

    s.form = filled().form;
    assert!(matches!(s.submit(Some(ENDPOINT)), SubmitAction::Send { .. }));
    assert!(s.errors.is_empty());
}

#[test]
fn email_shapes() {
    let ok = ["a@b.co", "first.last@sub.example.org"];
    let bad = ["@b.co", "a@b", "a@.co", "a@b.", "a b@c.io", "a@b@c.io"];
    for e in ok {
        let f = ContactForm { name: "n".into(), email: e.into(), message: "m".into(), ..Default::default() };
        assert!(f.validate().is_ok(), "{e} should be accepted");
    }
    for e in bad {
        let f = ContactForm { name: "n".into(), email: e.into(), message: "m".into(), ..Default::default() };
        assert_eq!(f.validate(), Err(vec![FieldError::InvalidEmail]), "{e} should be rejected");
    }
}

#[test]
fn missing_endpoint_is_reported_without_sending() {
    let mut s = filled();
    assert_eq!(s.submit(Some("  ")), SubmitAction::Blocked);
    assert_eq!(s.status.message(), Some("Form endpoint not set."));
}

#[test]
fn success_clears_the_form() {
    let mut s = filled();
    s.submit(Some(ENDPOINT));
    s.finish(Ok(()));
    assert_eq!(s.status, SubmitStatus::Sent(MSG_SENT.into()));
    assert_eq!(s.form, ContactForm::default());
}

#[test]
fn failures_keep_the_form_and_explain() {
    let mut s = filled();
    s.submit(Some(ENDPOINT));
    s.finish(Err(ContactError::Network("offline".into())));
    assert_eq!(s.status.message(), Some(MSG_NETWORK_FAILURE));
    assert_eq!(s.form.name, " Ada ");

    s.finish(Err(ContactError::Rejected { status: 422, message: None }));
    assert_eq!(s.status.message(), Some(MSG_GENERIC_FAILURE));

    let body = r#"{"errors":[{"field":"email","message":"should be an email"}]}"#;
    s.finish(Err(ContactError::Rejected {
        status: 422,
        message: relay_error_message(body),
    }));
    assert_eq!(s.status.message(), Some("should be an email"));
}

#[test]
fn relay_error_body_parsing_is_lenient() {
    assert_eq!(relay_error_message("not json"), None);
    assert_eq!(relay_error_message("{}"), None);
    assert_eq!(relay_error_message(r#"{"errors":[{"code":"X"}]}"#), None);
    assert_eq!(
        relay_error_message(r#"{"errors":[{"message":"first"},{"message":"second"}]}"#),
        Some("first".into())
    );
}

#[test]
fn only_the_first_relay_error_is_consulted() {
    // a message on a later entry is not promoted
    assert_eq!(
        relay_error_message(r#"{"errors":[{},{"message":"second"}]}"#),
        None
    );
    let mut s = ContactState::default();
    s.finish(Err(ContactError::Rejected {
        status: 422,
        message: relay_error_message(r#"{"errors":[{"code":"X"},{"message":"later"}]}"#),
    }));
    assert_eq!(s.status.message(), Some(MSG_GENERIC_FAILURE));
}
