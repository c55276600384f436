//! External-service and database templates.

use serror_core::codes::connection_issue;

use super::{article, Fields};

// ── External services ─────────────────────────────────────────────

fn remote_service(f: &Fields<'_>) -> String {
    match f.get("service") {
        Some(service) => format!("remote {service} service"),
        None => "remote service".to_string(),
    }
}

/// ExternalService, Unavailable and Timeout.
pub(crate) fn external(f: &Fields<'_>) -> String {
    let service = remote_service(f);
    match f.get("issue") {
        Some(issue) => format!("The {service} {issue}."),
        None => format!("There was an error with the {service}."),
    }
}

/// Connection: the issue is derived from the code when not given.
pub(crate) fn connection(f: &Fields<'_>) -> String {
    let issue = f
        .get("issue")
        .or_else(|| f.code().and_then(connection_issue).map(str::to_string))
        .unwrap_or_else(|| "failed".to_string());
    format!("The {} connection {issue}.", remote_service(f))
}

// ── Database ──────────────────────────────────────────────────────

/// `"[local |remote ]<service>"`.
fn data_service(f: &Fields<'_>) -> String {
    let service = f.get("service").unwrap_or_else(|| "database".to_string());
    match f.flag("is_local") {
        Some(true) => format!("local {service}"),
        Some(false) => format!("remote {service}"),
        None => service,
    }
}

pub(crate) fn database(f: &Fields<'_>) -> String {
    let service = data_service(f);
    match f.get("issue") {
        Some(issue) => format!("The {service} {issue}."),
        None => format!("There was an error with the {service}."),
    }
}

/// ConstraintViolation and UniqueConstraintViolation.
pub(crate) fn constraint_violation(f: &Fields<'_>) -> String {
    let service = data_service(f);
    if let Some(issue) = f.get("issue") {
        return format!("The {service} operation {issue}.");
    }
    let constraint = match f.get("constraint_type") {
        Some(ctype) => format!("{} {ctype} constraint", article(&ctype)),
        None => "a constraint".to_string(),
    };
    match f.get("entity_type") {
        Some(entity) => format!("The {service} operation violated {constraint} on '{entity}'."),
        None => format!("The {service} operation violated {constraint}."),
    }
}

pub(crate) fn rollback(f: &Fields<'_>) -> String {
    let service = data_service(f);
    let issue = f
        .get("issue")
        .unwrap_or_else(|| "was rolled back".to_string());
    format!("The {service} transaction {issue}.")
}

pub(crate) fn transaction(f: &Fields<'_>) -> String {
    let service = data_service(f);
    match f.get("issue") {
        Some(issue) => format!("The {service} transaction {issue}."),
        None => format!("There was an error with the {service} transaction."),
    }
}
