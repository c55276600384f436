//! Basic serror example
//!
//! Walks through construction, status overrides, message suppression,
//! wrapping native failures and the re-throw filter.
//!
//! # Environment Variables
//!
//! - `SERROR_LOG=info` - Log re-raised errors (`trace` adds classification events)
//! - `SERROR_IGNORE_FOR_MESSAGE=all` - Keep caller fields out of every message
//! - `SERROR_NO_INSTANCE_HIDING_ON_WRAP=true` - Leave typed failures unwrapped
//! - `SERROR_WRAP_USER_ERROR_TYPE=ArgumentInvalidError` - Kind for user-input failures

use std::io;

use serror::{
    match_kind, rethrow_if, serr, wrap, Criteria, Failure, Ignore, Kind, Options, ResultExt, SError,
    SResult, Scope, translate_value,
};
use tracing_subscriber::EnvFilter;

// SERROR_LOG=serror=trace cargo run -p serror-basic
fn main() {
    let filter = EnvFilter::try_from_env("SERROR_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== serror Basic Example ===\n");

    construction();
    suppression();
    scoped_overrides();
    wrapping();
    rethrowing();

    println!("\n=== Example Complete ===");
}

fn show(label: &str, err: &SError) {
    println!(
        "{label:<28} {:<34} {} {:<22} {}",
        err.name(),
        err.status(),
        err.code().unwrap_or("-"),
        err.message()
    );
}

fn construction() {
    println!("--- Construction ---");

    show("bare", &SError::from(Kind::NotFound));
    show(
        "with resource",
        &serr!(NotFound, { resource: "the hidden garden", hint: "Check the map." }),
    );
    show(
        "out of range",
        &serr!(ArgumentOutOfRange, { argument_name: "port", min: 1024, max: 65535 }),
    );
    show("inherited status", &SError::from(Kind::BadCredentials));
    show("kind code", &SError::from(Kind::Timeout));

    let remote = SError::new(
        Kind::Transaction,
        Options::new().field("is_local", false),
    );
    show("remote transaction", &remote);

    match serde_json::to_string(&remote) {
        Ok(json) => println!("{:<28} {json}", "as json"),
        Err(e) => println!("{:<28} <{e}>", "as json"),
    }
    println!();
}

fn suppression() {
    println!("--- Message suppression ---");

    let mut scope = Scope::new();
    let shown = scope.error(
        Kind::BadCredentials,
        Options::new().field("action", "login as admin"),
    );
    show("field shown", &shown);

    if let Err(e) = scope.set_setting("ignore_for_message", Ignore::All) {
        show("rejected setting", &e);
    }
    let hidden = scope.error(
        Kind::BadCredentials,
        Options::new().field("action", "login as admin"),
    );
    show("field suppressed", &hidden);
    println!(
        "{:<28} {:?}",
        "field still on error",
        hidden.field("action").map(translate_value)
    );
    println!();
}

fn scoped_overrides() {
    println!("--- Scoped overrides ---");

    let mut scope = Scope::new();
    if let Err(e) = scope.set_status("NotFoundError", 410) {
        show("rejected status", &e);
    }
    show("overridden parent", &scope.error(Kind::FileNotFound, Options::new()));

    // Out-of-range statuses come back as an ArgumentOutOfRangeError.
    if let Err(e) = scope.set_status("NotFoundError", 42) {
        show("rejected status", &e);
    }

    scope.register_parent("QuotaExceededError", "ArgumentInvalidError");
    println!(
        "{:<28} {:?}",
        "custom name status",
        scope.get_status("QuotaExceededError")
    );
    println!();
}

fn parse_port(raw: &str) -> SResult<u16> {
    raw.parse::<u16>()
        .wrap_err_with(Options::new().field("argument_name", "port").field("max", 65535))
}

fn wrapping() {
    println!("--- Wrapping native failures ---");

    let refused = io::Error::new(io::ErrorKind::ConnectionRefused, "connect failed");
    if let Some(err) = wrap(refused, Options::new()).into_wrapped() {
        show("io refused", &err);
    }

    for raw in ["8080", "70000", "http"] {
        match parse_port(raw) {
            Ok(port) => println!("{:<28} {port}", format!("parse {raw:?}")),
            Err(e) => show(&format!("parse {raw:?}"), &e),
        }
    }

    let mut scope = Scope::new();
    if scope.set_setting("no_instance_hiding_on_wrap", true).is_ok() {
        let kept = scope.wrap(Failure::syntax("unexpected '}'"), Options::new());
        println!("{:<28} wrapped={}", "instance hiding off", kept.was_wrapped());
    }
    println!();
}

fn handle(err: SError) -> Result<&'static str, SError> {
    let err = rethrow_if(err, &Criteria::new().status_gte(500).code_is("ECONNRESET"))?;
    Ok(match_kind!(err, {
        FileNotFound => "create the file",
        NotFound => "use a default",
        ArgumentInvalid => "ask again",
        _ => "log and continue",
    }))
}

fn rethrowing() {
    println!("--- Re-throw filter ---");

    let errors = [
        SError::from(Kind::FileNotFound),
        SError::from(Kind::DirectoryNotFound),
        SError::from(Kind::ArgumentMissing),
        SError::from(Kind::Unavailable),
        SError::from(io::Error::new(io::ErrorKind::ConnectionReset, "peer")),
    ];
    for err in errors {
        let name = err.name();
        match handle(err) {
            Ok(action) => println!("{name:<28} handled: {action}"),
            Err(e) => {
                tracing::info!(
                    kind = name,
                    status = e.status(),
                    code = e.code().unwrap_or(""),
                    "re-raised"
                );
                println!("{name:<28} re-raised ({} {})", e.status(), e.status_name());
            }
        }
    }
}
