//! Request shape checks shared by the HTTP handlers.
//!
//! Two policies exist. Book and login payloads must carry exactly the
//! expected key set. The security-question payload gets a structural check
//! that reports every violation it finds. Handlers only act on pass/fail;
//! violations go to the debug log.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::{BookId, Error, SecurityAnswers};

/// Message for a path id that is not a number.
pub const INVALID_ID_MESSAGE: &str = "Input Was Not Valid. Id must be a number.";
/// Message for any payload failing a shape or type check.
pub const BAD_REQUEST_MESSAGE: &str = "Bad Request";

const SECURITY_QUESTIONS_FIELD: &str = "securityQuestions";
const ANSWER_FIELD: &str = "answer";

pub(crate) fn bad_request() -> Error {
    Error::invalid_request(BAD_REQUEST_MESSAGE)
}

fn invalid_id() -> Error {
    Error::invalid_request(INVALID_ID_MESSAGE)
}

/// Parse a path id, reading the leading integer of the segment.
///
/// Leading whitespace and a sign are accepted and trailing characters are
/// ignored, so `"5abc"` reads as 5. A segment without leading digits, or one
/// that overflows, is rejected.
///
/// # Examples
/// ```
/// use books::inbound::http::validation::parse_book_id;
///
/// assert_eq!(parse_book_id("42").unwrap(), 42);
/// assert_eq!(parse_book_id(" 7th").unwrap(), 7);
/// assert!(parse_book_id("foo").is_err());
/// ```
pub fn parse_book_id(raw: &str) -> Result<BookId, Error> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let unsigned = trimmed.get(sign_len..).unwrap_or_default();
    let digits_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_len == 0 {
        return Err(invalid_id());
    }
    // The sign stays attached so `i64::MIN` parses.
    trimmed
        .get(..sign_len + digits_len)
        .unwrap_or_default()
        .parse()
        .map_err(|_| invalid_id())
}

/// True when `body` is an object whose key set equals `expected`.
///
/// Order is irrelevant; a missing or an extra key fails the check.
///
/// # Examples
/// ```
/// use books::inbound::http::validation::has_exact_keys;
/// use serde_json::json;
///
/// assert!(has_exact_keys(&json!({"b": 1, "a": 2}), &["a", "b"]));
/// assert!(!has_exact_keys(&json!({"a": 2}), &["a", "b"]));
/// assert!(!has_exact_keys(&json!({"a": 1, "b": 2, "c": 3}), &["a", "b"]));
/// ```
pub fn has_exact_keys(body: &Value, expected: &[&str]) -> bool {
    body.as_object().is_some_and(|object| {
        object.len() == expected.len() && expected.iter().all(|key| object.contains_key(*key))
    })
}

/// Check the key set of `body`, then deserialise it into `T`.
///
/// A type mismatch after a key-set match is the same `Bad Request`.
pub fn parse_exact<T>(body: Value, expected: &[&str]) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    if !has_exact_keys(&body, expected) {
        debug!(?expected, "payload key set rejected");
        return Err(bad_request());
    }
    serde_json::from_value(body).map_err(|err| {
        debug!(error = %err, "payload types rejected");
        bad_request()
    })
}

/// Outcome of a structural check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeReport {
    violations: Vec<String>,
}

impl ShapeReport {
    fn violation(&mut self, path: &str, reason: &str) {
        self.violations.push(format!("{path}: {reason}"));
    }

    /// True when no violation was recorded.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violation descriptions in discovery order.
    pub fn violations(&self) -> &[String] {
        &self.violations
    }
}

fn check_only_key(object: &Map<String, Value>, path: &str, allowed: &str, report: &mut ShapeReport) {
    for key in object.keys().filter(|key| key.as_str() != allowed) {
        report.violation(&format!("{path}/{key}"), "unexpected property");
    }
    if !object.contains_key(allowed) {
        report.violation(&format!("{path}/{allowed}"), "required property missing");
    }
}

fn check_answer_entry(index: usize, entry: &Value, report: &mut ShapeReport) {
    let path = format!("/{SECURITY_QUESTIONS_FIELD}/{index}");
    let Some(object) = entry.as_object() else {
        report.violation(&path, "expected an object");
        return;
    };
    check_only_key(object, &path, ANSWER_FIELD, report);
    if object.get(ANSWER_FIELD).is_some_and(|answer| !answer.is_string()) {
        report.violation(&format!("{path}/{ANSWER_FIELD}"), "expected a string");
    }
}

/// Structural check of a security-question payload.
///
/// The body must be `{"securityQuestions": [{"answer": "..."}, ...]}` with no
/// other properties at any level.
///
/// # Examples
/// ```
/// use books::inbound::http::validation::check_security_answers_shape;
/// use serde_json::json;
///
/// let ok = json!({"securityQuestions": [{"answer": "Hedwig"}]});
/// assert!(check_security_answers_shape(&ok).is_valid());
///
/// let extra = json!({"securityQuestions": [{"answer": "Hedwig", "question": "Pet?"}]});
/// assert!(!check_security_answers_shape(&extra).is_valid());
/// ```
pub fn check_security_answers_shape(body: &Value) -> ShapeReport {
    let mut report = ShapeReport::default();
    let Some(object) = body.as_object() else {
        report.violation("", "expected an object");
        return report;
    };
    check_only_key(object, "", SECURITY_QUESTIONS_FIELD, &mut report);
    match object.get(SECURITY_QUESTIONS_FIELD) {
        Some(Value::Array(entries)) => {
            for (index, entry) in entries.iter().enumerate() {
                check_answer_entry(index, entry, &mut report);
            }
        }
        Some(_) => report.violation(&format!("/{SECURITY_QUESTIONS_FIELD}"), "expected an array"),
        None => {}
    }
    report
}

/// Validate a security-question payload and pull out the answers in order.
pub fn parse_security_answers(body: &Value) -> Result<SecurityAnswers, Error> {
    let report = check_security_answers_shape(body);
    if !report.is_valid() {
        debug!(violations = ?report.violations(), "security question payload rejected");
        return Err(bad_request());
    }
    let answers = body
        .get(SECURITY_QUESTIONS_FIELD)
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get(ANSWER_FIELD).and_then(Value::as_str))
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();
    Ok(SecurityAnswers::new(answers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BOOK_FIELDS, Book, ErrorCode};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("1", 1)]
    #[case("42", 42)]
    #[case("  7", 7)]
    #[case("5abc", 5)]
    #[case("-3", -3)]
    #[case("+8", 8)]
    #[case("3.9", 3)]
    #[case("-9223372036854775808", BookId::MIN)]
    #[case("9223372036854775807x", BookId::MAX)]
    fn parses_leading_integers(#[case] raw: &str, #[case] expected: BookId) {
        assert_eq!(parse_book_id(raw), Ok(expected));
    }

    #[rstest]
    #[case("foo")]
    #[case("")]
    #[case("-")]
    #[case("abc5")]
    #[case("99999999999999999999")]
    #[case("-9223372036854775809")]
    #[case("+-4")]
    fn rejects_ids_without_leading_digits(#[case] raw: &str) {
        let error = parse_book_id(raw).expect_err("not a number");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.message(), INVALID_ID_MESSAGE);
    }

    #[rstest]
    #[case(json!({"id": 1, "title": "t", "author": "a"}), true)]
    #[case(json!({"author": "a", "id": 1, "title": "t"}), true)]
    #[case(json!({"id": 7, "author": "a"}), false)]
    #[case(json!({"title": "Test Book"}), false)]
    #[case(json!({"id": 1, "title": "t", "author": "a", "extraKey": "x"}), false)]
    #[case(json!({"id": 1, "title": "t", "writer": "a"}), false)]
    #[case(json!([1, "t", "a"]), false)]
    #[case(json!(null), false)]
    fn exact_key_set(#[case] body: Value, #[case] expected: bool) {
        assert_eq!(has_exact_keys(&body, &BOOK_FIELDS), expected);
    }

    #[rstest]
    fn parse_exact_rejects_wrong_types_as_bad_request() {
        let error = parse_exact::<Book>(json!({"id": "1", "title": "t", "author": "a"}), &BOOK_FIELDS)
            .expect_err("id must be an integer");
        assert_eq!(error.message(), BAD_REQUEST_MESSAGE);
    }

    #[rstest]
    fn parse_exact_builds_the_record() {
        let book: Book = parse_exact(json!({"id": 6, "title": "The Hobbit", "author": "J. R. R. Tolkien"}), &BOOK_FIELDS)
            .expect("valid book");
        assert_eq!(book, Book::new(6, "The Hobbit", "J. R. R. Tolkien"));
    }

    #[rstest]
    #[case(json!({"securityQuestions": [{"answer": "a"}, {"answer": "b"}, {"answer": "c"}]}), 0)]
    #[case(json!({"securityQuestions": []}), 0)]
    #[case(json!({}), 1)]
    #[case(json!({"securityQuestions": [{"answer": "a"}], "email": "x"}), 1)]
    #[case(json!({"securityQuestions": "a"}), 1)]
    #[case(json!({"securityQuestions": [{"answer": "a", "question": "q"}]}), 1)]
    #[case(json!({"securityQuestions": [{"answer": 3}]}), 1)]
    #[case(json!({"securityQuestions": [{}]}), 1)]
    #[case(json!({"securityQuestions": ["a", {"answer": "b", "question": "q"}]}), 2)]
    #[case(json!("text"), 1)]
    fn structural_check_counts_violations(#[case] body: Value, #[case] violations: usize) {
        let report = check_security_answers_shape(&body);
        assert_eq!(report.violations().len(), violations, "{:?}", report.violations());
        assert_eq!(report.is_valid(), violations == 0);
    }

    #[rstest]
    fn violations_name_the_offending_path() {
        let report = check_security_answers_shape(&json!({
            "securityQuestions": [{"answer": "a"}, {"answer": "b", "question": "q"}]
        }));
        assert_eq!(
            report.violations(),
            ["/securityQuestions/1/question: unexpected property"]
        );
    }

    #[rstest]
    fn answers_keep_submission_order() {
        let answers = parse_security_answers(&json!({
            "securityQuestions": [{"answer": "Hedwig"}, {"answer": "Quidditch Through the Ages"}, {"answer": "Evans"}]
        }))
        .expect("valid payload");
        assert_eq!(answers.get(0), Some("Hedwig"));
        assert_eq!(answers.get(2), Some("Evans"));
        assert_eq!(answers.get(3), None);
    }
}
