use super::{capitalize, Fields};

pub(crate) fn common(_: &Fields<'_>) -> String {
    "An error has occurred.".to_string()
}

pub(crate) fn system(_: &Fields<'_>) -> String {
    "A system error has occurred.".to_string()
}

fn feature(f: &Fields<'_>, state: &str) -> String {
    let target = f
        .get("target")
        .unwrap_or_else(|| "the requested action".to_string());
    format!("{} is not {state}.", capitalize(&target))
}

pub(crate) fn not_implemented(f: &Fields<'_>) -> String {
    feature(f, "implemented")
}

pub(crate) fn not_supported(f: &Fields<'_>) -> String {
    feature(f, "supported")
}

#[cfg(test)]
mod tests {
    use crate::kind::Kind;
    use crate::messages::testing::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fixed_sentences() {
        assert_eq!(render(Kind::Common, &[]), "An error has occurred.");
        assert_eq!(render(Kind::System, &[("issue", "ignored".into())]), "A system error has occurred.");
    }

    #[test]
    fn features() {
        assert_eq!(
            render(Kind::NotImplemented, &[]),
            "The requested action is not implemented."
        );
        assert_eq!(
            render(Kind::NotSupported, &[("target", "streaming upload".into())]),
            "Streaming upload is not supported."
        );
    }
}
