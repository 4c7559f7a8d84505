//! RFC 6570 URI Template parsing and expansion.
//!
//! ```
//! use uritemplate::{Template, VariableBag};
//!
//! let template = Template::new("http://example.com{+path}{?query*}").unwrap();
//! let variables = VariableBag::new()
//!     .with("path", "/search")
//!     .with("query", [("q", "rust"), ("page", "2")]);
//!
//! assert_eq!(
//!     template.expand(&variables),
//!     "http://example.com/search?q=rust&page=2"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;

pub use domain::{Template, VariableBag, VariableValue};
pub use error::{Result, TemplateError};
