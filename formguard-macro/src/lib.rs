// Procedural macros for formguard records

use proc_macro::TokenStream;

mod record;

/// Derives `Record` and `Validatable` for a struct with named fields.
///
/// Every field is listed in declaration order. Rules come from the
/// `#[validate]` attribute:
///
/// ```ignore
/// #[derive(Record)]
/// #[validate(rename_all = "PascalCase")]
/// struct Signup {
///     #[validate("required,email")]
///     email: String,
///     #[validate(rules = "required,min=7,password")]
///     password: String,
///     #[validate(rules = "required,confirm=Password", rename = "Confirm")]
///     password_confirm: String,
///     #[validate(skip)]
///     session: Session,
/// }
/// ```
///
/// Fields without rules are still listed so that `confirm` can find them;
/// use `skip` for fields whose type has no field value conversion.
/// `#[validate(crate = "...")]` changes the path used for the runtime crate.
#[proc_macro_derive(Record, attributes(validate))]
pub fn record_derive(input: TokenStream) -> TokenStream {
    record::record_derive_impl(input)
}
