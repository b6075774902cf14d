//! Declarative validation for records
//!
//! Each field of a record may carry a rule annotation such as
//! `"required,min=7,password"`. [`validate`] walks the fields in declaration
//! order, runs each field's rules until the first failure and collects one
//! message per failing path.
//!
//! # Examples
//!
//! ## Hand-written record
//!
//! ```
//! use formguard_validation::{validate, AsFieldValue, Field, Record, Validatable};
//!
//! struct Signup {
//!     email: String,
//!     password: String,
//!     confirm: String,
//! }
//!
//! impl Record for Signup {
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::new("Email", Some("required,email"), self.email.as_field_value()),
//!             Field::new("Password", Some("required,min=7,password"), self.password.as_field_value()),
//!             Field::new("Confirm", Some("required,confirm=Password"), self.confirm.as_field_value()),
//!         ]
//!     }
//! }
//!
//! impl Validatable for Signup {
//!     fn as_record(&self) -> Option<&dyn Record> {
//!         Some(self)
//!     }
//! }
//!
//! let input = Signup {
//!     email: "a@b.com".to_string(),
//!     password: "Password1!".to_string(),
//!     confirm: "Password1?".to_string(),
//! };
//!
//! let report = validate(&input).unwrap_err();
//! assert_eq!(report.get("Confirm"), Some("Confirm must match Password"));
//! assert_eq!(report.len(), 1);
//! ```
//!
//! ## Sequences
//!
//! Rules after `dive` apply to every element, reported as `Name[i]`:
//!
//! ```
//! use formguard_validation::{AsFieldValue, Field, Record, Validate};
//!
//! struct Post {
//!     tags: Vec<String>,
//! }
//!
//! impl Record for Post {
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![Field::new("Tags", Some("required,gt=0,dive,min=2"), self.tags.as_field_value())]
//!     }
//! }
//!
//! let post = Post { tags: vec!["go".to_string(), "x".to_string()] };
//! let report = post.validate().unwrap_err();
//! assert_eq!(report.get("Tags[1]"), Some("Tags[1] must be at least 2 characters long"));
//! ```
//!
//! ## Logging
//!
//! The engine logs through `formguard-log`; set `FORMGUARD_LOG_LEVEL=trace`
//! to see each failing rule.

mod dispatch;
mod engine;
mod errors;
mod rules;
mod traits;
mod upload;
mod validators;
mod value;

pub use dispatch::*;
pub use engine::validate;
pub use errors::*;
pub use rules::*;
pub use traits::*;
pub use upload::*;
pub use validators::*;
pub use value::*;

#[cfg(feature = "derive")]
pub use formguard_macro::Record;
