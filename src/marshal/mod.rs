//! Marshalling subsystem
//!
//! Turns a flat, ordered sequence of `(dotted.key, raw value)` pairs —
//! the shape of a submitted form — into schema-typed data plus a
//! parallel error tree. One bad pair never aborts the rest: failures
//! are localized to their own path.

mod coerce;
mod errors;
mod form;
mod store;

pub use errors::WriteError;
pub use form::{FormData, FormView, Input, Resolved, SeqKind};
pub use store::Value;

use tracing::debug;

use crate::path::Path;
use crate::report::Errors;
use crate::schema::{Node, SchemaResult, TraverseError};

/// Marshal input pairs against a schema.
///
/// Pairs are processed in input order. Keys the schema does not define
/// are skipped as form noise; coercion and required-field failures are
/// recorded in the error tree at the pair's path while the data keeps
/// the raw input (coercion) or null (required). Only a malformed schema
/// aborts: that is a programmer error, not a user-input error.
pub fn marshall<'s, I, K, V>(params: I, schema: &'s Node) -> SchemaResult<(FormData<'s>, Errors)>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Input>,
{
    let mut data = FormData::new(schema);
    let mut errors = Errors::new();

    for (key, value) in params {
        let path = Path::parse(key.as_ref());
        match data.write(&path, value) {
            Ok(()) => {}
            Err(WriteError::Traverse(TraverseError::Definition(fatal))) => return Err(fatal),
            Err(WriteError::Traverse(reason)) => {
                debug!(key = %path, %reason, "skipping key not defined by the schema");
            }
            Err(WriteError::Coercion { message, .. })
            | Err(WriteError::Required { message, .. }) => {
                debug!(key = %path, %message, "recording field error");
                errors.get_or_create(&path).push(message);
            }
        }
    }

    Ok((data, errors))
}
