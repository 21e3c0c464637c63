// file: src/pipeline/form.rs
// description: shared input collection for the results and export flows

use crate::models::{QueryForm, QueryInput};
use crate::surface::Surface;
use tracing::debug;

/// Reads every field of `form` from the surface. Missing fields are sent as
/// empty strings; values are not validated.
pub fn collect_input<S: Surface>(form: QueryForm, surface: &S) -> QueryInput {
    form.field_names()
        .iter()
        .fold(QueryInput::new(), |input, name| {
            let value = surface.read_field(name).unwrap_or_else(|| {
                debug!("Field {} not present, sending empty value", name);
                String::new()
            });
            input.with_field(*name, value)
        })
}
