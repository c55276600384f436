//! Argument family templates.
//!
//! ```text
//! <Endpoint> argument ['<name>' ][type '<type>' ][with value '<value>' ]<issue>.
//! ```

use std::fmt::Write;

use super::{capitalize, Fields};

/// ArgumentInvalid and ArgumentMissing.
pub(crate) fn invalid(f: &Fields<'_>) -> String {
    let mut msg = endpoint(f);
    msg.push_str(" argument");
    if let Some(name) = f.get("argument_name") {
        let _ = write!(msg, " '{name}'");
    }
    if let Some(ty) = f.get("argument_type") {
        let _ = write!(msg, " type '{ty}'");
    }
    if let Some(value) = f.get("argument_value") {
        let _ = write!(msg, " with value '{value}'");
    }
    let issue = f.get("issue").unwrap_or_else(|| "is invalid".to_string());
    let _ = write!(msg, " {issue}.");
    msg
}

/// ArgumentOutOfRange: the base sentence plus the accepted range.
pub(crate) fn out_of_range(f: &Fields<'_>) -> String {
    let mut msg = invalid(f);

    let lower = f
        .get("min")
        .map(|v| format!("greater than or equal to '{v}'"))
        .or_else(|| f.get("min_boundary").map(|v| format!("greater than '{v}'")));
    let upper = f
        .get("max")
        .map(|v| format!("less than or equal to '{v}'"))
        .or_else(|| f.get("max_boundary").map(|v| format!("less than '{v}'")));

    match (lower, upper) {
        (Some(lower), Some(upper)) => {
            let _ = write!(msg, " Value must be {lower} and {upper}.");
        }
        (Some(bound), None) | (None, Some(bound)) => {
            let _ = write!(msg, " Value must be {bound}.");
        }
        (None, None) => {}
    }
    msg
}

/// ArgumentType: the base sentence plus the expected type.
pub(crate) fn wrong_type(f: &Fields<'_>) -> String {
    let mut msg = invalid(f);
    if let Some(expected) = f.get("expected_type") {
        let _ = write!(msg, " Must be type '{expected}'.");
    }
    msg
}

/// `"<Endpoint type>[ naming]"`.
fn endpoint(f: &Fields<'_>) -> String {
    let endpoint_type = f
        .get("endpoint_type")
        .unwrap_or_else(|| "function".to_string());
    let callable = matches!(
        endpoint_type.to_ascii_lowercase().as_str(),
        "function" | "method"
    );
    let suffix = if callable { "()" } else { "" };

    let mut out = capitalize(&endpoint_type);
    match (f.get("package_name"), f.get("endpoint_name")) {
        (Some(pkg), Some(name)) => {
            let _ = write!(out, " '{pkg}#{name}{suffix}'");
        }
        (None, Some(name)) => {
            let _ = write!(out, " '{name}{suffix}'");
        }
        (Some(pkg), None) => {
            let _ = write!(out, " in package '{pkg}'");
        }
        (None, None) => {}
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::kind::Kind;
    use crate::messages::testing::*;
    use crate::options::Ignore;
    use pretty_assertions::assert_eq;
    use serror_core::Value;

    #[test]
    fn bare_invalid() {
        assert_eq!(render(Kind::ArgumentInvalid, &[]), "Function argument is invalid.");
        assert_eq!(render(Kind::ArgumentMissing, &[]), "Function argument is missing.");
    }

    #[test]
    fn name_and_value() {
        assert_eq!(
            render(
                Kind::ArgumentInvalid,
                &[("argument_name", "bar".into()), ("argument_value", 100.into())]
            ),
            "Function argument 'bar' with value '100' is invalid."
        );
    }

    #[test]
    fn endpoint_naming() {
        assert_eq!(
            render(
                Kind::ArgumentInvalid,
                &[("package_name", "geo".into()), ("endpoint_name", "project".into())]
            ),
            "Function 'geo#project()' argument is invalid."
        );
        assert_eq!(
            render(
                Kind::ArgumentMissing,
                &[
                    ("endpoint_type", "method".into()),
                    ("endpoint_name", "save".into()),
                    ("argument_name", "id".into()),
                ]
            ),
            "Method 'save()' argument 'id' is missing."
        );
        assert_eq!(
            render(
                Kind::ArgumentInvalid,
                &[("endpoint_type", "route".into()), ("endpoint_name", "/users".into())]
            ),
            "Route '/users' argument is invalid."
        );
        assert_eq!(
            render(Kind::ArgumentInvalid, &[("package_name", "geo".into())]),
            "Function in package 'geo' argument is invalid."
        );
    }

    #[test]
    fn argument_type_clause() {
        assert_eq!(
            render(
                Kind::ArgumentType,
                &[
                    ("argument_name", "port".into()),
                    ("argument_type", "string".into()),
                    ("expected_type", "integer".into()),
                ]
            ),
            "Function argument 'port' type 'string' is the wrong type. Must be type 'integer'."
        );
    }

    #[test]
    fn range_clauses() {
        assert_eq!(
            render(
                Kind::ArgumentOutOfRange,
                &[("argument_name", "x".into()), ("min", 1.into()), ("max", 10.into())]
            ),
            "Function argument 'x' is out of range. \
             Value must be greater than or equal to '1' and less than or equal to '10'."
        );
        assert_eq!(
            render(Kind::ArgumentOutOfRange, &[("min_boundary", 0.into())]),
            "Function argument is out of range. Value must be greater than '0'."
        );
        assert_eq!(
            render(Kind::ArgumentOutOfRange, &[("max_boundary", 5.into())]),
            "Function argument is out of range. Value must be less than '5'."
        );
        // The exact bound wins over the strict one.
        assert_eq!(
            render(
                Kind::ArgumentOutOfRange,
                &[("min", 1.into()), ("min_boundary", 0.into())]
            ),
            "Function argument is out of range. Value must be greater than or equal to '1'."
        );
    }

    #[test]
    fn suppression_equals_omission() {
        let params = [("argument_name", Value::from("bar")), ("argument_value", Value::from(100))];
        let ignore = Ignore::Names(vec!["argument_value".to_string()]);
        assert_eq!(
            render_ignoring(Kind::ArgumentInvalid, &params, &ignore),
            render(Kind::ArgumentInvalid, &params[..1])
        );
    }

    #[test]
    fn ignore_all_keeps_defaults() {
        let params = [
            ("argument_name", Value::from("bar")),
            ("issue", Value::from("is bad")),
        ];
        assert_eq!(
            render_ignoring(Kind::ArgumentInvalid, &params, &Ignore::All),
            "Function argument is invalid."
        );
    }
}
