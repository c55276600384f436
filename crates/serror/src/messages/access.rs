use super::{capitalize, Fields};

/// `"<Resource> not found."`
pub(crate) fn not_found(f: &Fields<'_>) -> String {
    let resource = f.get("resource").unwrap_or_else(|| "resource".to_string());
    format!("{} not found.", capitalize(&resource))
}
