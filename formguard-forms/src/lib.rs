//! Form handling for formguard
//!
//! Decoded multipart forms ([`FormData`]), the application's form records
//! and [`FormPipe`], which builds a record from a form and validates it.
//!
//! ```
//! use formguard_forms::{FormData, FormPipe, Signup};
//!
//! let form = FormData::new()
//!     .value_part("email", "reader@example.com")
//!     .value_part("username", "reader")
//!     .value_part("password", "Secret12!")
//!     .value_part("confirm", "Secret12!");
//!
//! let signup: Signup = FormPipe::parse(&form).unwrap();
//! assert_eq!(signup.username, "reader");
//! ```
//!
//! Upload limits come from [`FormSettings`], loaded from `FORMGUARD_*`
//! environment variables or any `formguard_config::ConfigManager`.

mod data;
mod error;
mod pipe;
mod records;
mod settings;

pub use data::FormData;
pub use error::{FormError, FormResult};
pub use pipe::FormPipe;
pub use records::*;
pub use settings::{ENV_PREFIX, FormSettings};
