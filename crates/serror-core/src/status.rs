//! HTTP status code → name table.
//!
//! Covers the client and server error ranges (400–511) plus the common
//! non-standard extensions seen in the wild (IIS, nginx, Cloudflare, ...).
//! Every status an error can carry is one of these; success and redirect
//! codes deliberately resolve to [`UNASSIGNED`].

/// Name reported for any status without a table entry.
pub const UNASSIGNED: &str = "Unassigned";

/// Human-readable name for an HTTP error status.
///
/// ```
/// use serror_core::status::status_name;
///
/// assert_eq!(status_name(404), "Not Found");
/// assert_eq!(status_name(440), "Login Time-out");
/// assert_eq!(status_name(299), "Unassigned");
/// ```
pub fn status_name(status: u16) -> &'static str {
    match status {
        // ── 4xx client errors ─────────────────────────────────────
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Payload Too Large",
        414 => "URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Range Not Satisfiable",
        417 => "Expectation Failed",
        418 => "I'm a Teapot",
        421 => "Misdirected Request",
        422 => "Unprocessable Content",
        423 => "Locked",
        424 => "Failed Dependency",
        425 => "Too Early",
        426 => "Upgrade Required",
        428 => "Precondition Required",
        429 => "Too Many Requests",
        431 => "Request Header Fields Too Large",
        451 => "Unavailable For Legal Reasons",

        // ── 4xx non-standard ──────────────────────────────────────
        440 => "Login Time-out",
        444 => "No Response",
        449 => "Retry With",
        450 => "Blocked by Windows Parental Controls",
        494 => "Request Header Too Large",
        495 => "SSL Certificate Error",
        496 => "SSL Certificate Required",
        497 => "HTTP Request Sent to HTTPS Port",
        498 => "Invalid Token",
        499 => "Client Closed Request",

        // ── 5xx server errors ─────────────────────────────────────
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        506 => "Variant Also Negotiates",
        507 => "Insufficient Storage",
        508 => "Loop Detected",
        510 => "Not Extended",
        511 => "Network Authentication Required",

        // ── 5xx non-standard ──────────────────────────────────────
        509 => "Bandwidth Limit Exceeded",
        520 => "Web Server Returned an Unknown Error",
        521 => "Web Server Is Down",
        522 => "Connection Timed Out",
        523 => "Origin Is Unreachable",
        524 => "A Timeout Occurred",
        525 => "SSL Handshake Failed",
        526 => "Invalid SSL Certificate",
        527 => "Railgun Error",
        529 => "Site Is Overloaded",
        530 => "Site Is Frozen",
        540 => "Temporarily Disabled",
        561 => "Unauthorized",
        598 => "Network Read Timeout Error",
        599 => "Network Connect Timeout Error",

        _ => UNASSIGNED,
    }
}
