use portfolio_contact_api::{
    entities::contact::{count_links, ContactSubmission},
    errors::ContactRejection,
};
use serde_json::{json, Value};

fn form(name: &str, email: &str, subject: &str, message: &str) -> Value {
    json!({ "name": name, "email": email, "subject": subject, "message": message })
}

fn accepts(payload: &Value) -> ContactSubmission {
    ContactSubmission::parse(payload).unwrap_or_else(|e| panic!("expected {payload} to pass, got: {e}"))
}

fn rejects(payload: &Value) -> ContactRejection {
    match ContactSubmission::parse(payload) {
        Ok(submission) => panic!("expected {payload} to be rejected, got {submission:?}"),
        Err(e) => e,
    }
}

#[test]
fn valid_form_is_trimmed_and_email_lowercased() {
    let submission = accepts(&form("  Ada  ", " Foo@Bar.COM ", " Hello ", "\n Hi there \t"));

    assert_eq!(submission.name(), "Ada");
    assert_eq!(submission.email(), "foo@bar.com");
    assert_eq!(submission.subject(), "Hello");
    assert_eq!(submission.message(), "Hi there");
}

#[test]
fn payload_must_be_an_object() {
    for payload in [Value::Null, json!("text"), json!(42), json!(true), json!([form("A", "a@b.c", "S", "M")])] {
        assert!(matches!(rejects(&payload), ContactRejection::NotAnObject), "{payload}");
    }
}

#[test]
fn every_field_is_required() {
    for field in ["name", "email", "subject", "message"] {
        let mut payload = form("Ada", "ada@example.com", "Hi", "Hello");
        payload.as_object_mut().unwrap().remove(field);

        assert!(matches!(rejects(&payload), ContactRejection::MissingField(f) if f == field));
    }
}

#[test]
fn falsy_values_count_as_missing() {
    for value in [Value::Null, json!(""), json!(false), json!(0), json!(0.0)] {
        let mut payload = form("Ada", "ada@example.com", "Hi", "Hello");
        payload["subject"] = value.clone();

        assert!(
            matches!(rejects(&payload), ContactRejection::MissingField("subject")),
            "{value} should be treated as missing"
        );
    }
}

#[test]
fn non_text_values_are_rejected() {
    for value in [json!(7), json!(true), json!(["Ada"]), json!({ "first": "Ada" }), json!([])] {
        let mut payload = form("Ada", "ada@example.com", "Hi", "Hello");
        payload["name"] = value.clone();

        assert!(
            matches!(rejects(&payload), ContactRejection::NotText("name")),
            "{value} should be rejected as non-text"
        );
    }
}

#[test]
fn whitespace_only_fields_are_rejected() {
    let rejection = rejects(&form("   ", "ada@example.com", "Hi", "Hello"));

    assert!(matches!(rejection, ContactRejection::Invalid(_)));
}

#[test]
fn malformed_emails_are_rejected() {
    for email in ["bad", "a@b", "a@b.", "@b.c", "a@.c", "a b@c.d", "a@b@c.d", "a@b .cd"] {
        assert!(
            matches!(rejects(&form("A", email, "S", "M")), ContactRejection::Invalid(_)),
            "{email} should be rejected"
        );
    }
}

#[test]
fn permissive_emails_are_accepted() {
    for email in ["a@b.c", "first.last+tag@sub.example.co.uk", "x@localhost.localdomain"] {
        accepts(&form("A", email, "S", "M"));
    }
}

#[test]
fn name_length_boundary() {
    accepts(&form(&"n".repeat(100), "a@b.c", "S", "M"));
    rejects(&form(&"n".repeat(101), "a@b.c", "S", "M"));
}

#[test]
fn ceilings_apply_to_trimmed_values() {
    let padded = format!("  {} ", "n".repeat(100));
    let submission = accepts(&form(&padded, "a@b.c", "S", &format!("{}\n\n", "m".repeat(2000))));

    assert_eq!(submission.name().len(), 100);
    assert_eq!(submission.message().len(), 2000);
    rejects(&form(&format!(" {} ", "n".repeat(101)), "a@b.c", "S", "M"));
}

#[test]
fn lengths_are_counted_in_characters() {
    let submission = accepts(&form(&"é".repeat(100), "a@b.c", "S", "M"));

    assert_eq!(submission.name().chars().count(), 100);
    rejects(&form(&"é".repeat(101), "a@b.c", "S", "M"));
}

#[test]
fn other_field_ceilings() {
    let long_email = format!("{}@example.com", "a".repeat(244));
    assert_eq!(long_email.chars().count(), 256);
    rejects(&form("A", &long_email, "S", "M"));

    let max_email = format!("{}@example.com", "a".repeat(243));
    accepts(&form("A", &max_email, "S", "M"));

    accepts(&form("A", "a@b.c", &"s".repeat(200), "M"));
    rejects(&form("A", "a@b.c", &"s".repeat(201), "M"));

    accepts(&form("A", "a@b.c", "S", &"m".repeat(2000)));
    rejects(&form("A", "a@b.c", "S", &"m".repeat(2001)));
}

#[test]
fn two_links_are_tolerated() {
    accepts(&form("A", "a@b.c", "S", "See https://example.com and http://example.org"));
}

#[test]
fn three_links_are_rejected_as_spam() {
    let message = "https://a.example http://b.example https://c.example";

    assert!(matches!(rejects(&form("A", "a@b.c", "S", message)), ContactRejection::Invalid(_)));
}

#[test]
fn link_counting_matches_both_schemes() {
    assert_eq!(count_links("no links here"), 0);
    assert_eq!(count_links("http://a https://b"), 2);
    assert_eq!(count_links("https://a.example/?next=http://b.example"), 2);
    assert_eq!(count_links("ftp://a www.example.com"), 0);
}

#[test]
fn extra_fields_are_ignored() {
    let mut payload = form("Ada", "ada@example.com", "Hi", "Hello");
    payload["website"] = json!("https://spam.example");

    accepts(&payload);
}
