//! Error code strings.
//!
//! Error codes are the short symbolic names (`ENOENT`, `ECONNRESET`, ...)
//! an error carries in its `code` field. Two concerns live here:
//!
//! | Module    | Purpose                                                    |
//! |-----------|------------------------------------------------------------|
//! | `errno`   | Naming raw OS errors and `io::Error`s                      |
//! | `family`  | The code families the classifier keys on, plus the phrase  |
//! |           | a connection error uses for each connection code           |
//!
//! # Usage
//!
//! ```rust
//! use serror_core::codes::{io_error_code, is_connection_code};
//!
//! let err = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "peer hung up");
//! let code = io_error_code(&err);
//! assert_eq!(code, Some("ECONNRESET"));
//! assert!(is_connection_code("ECONNRESET"));
//! ```

mod errno;
mod family;

pub use errno::*;
pub use family::*;
