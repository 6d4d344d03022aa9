//! Error types for catalogs.
use std::fmt::{self, Debug, Formatter};
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from main are shown with Debug, while thiserror implements Display.
                    // This redirects Debug to Display.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

#[derive(Error)]
pub enum CatalogError {
    #[error("Unknown {kind} category: `{slug}`")]
    UnknownCategory { kind: &'static str, slug: String },

    #[error("Item #{id} has an invalid date: `{value}`, expected YYYY-MM-DD")]
    InvalidDate {
        id: u32,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error(
        "Item #{id} ({date}) is listed after the older item #{previous_id} ({previous_date}), catalogs must be ordered newest first"
    )]
    OutOfOrder {
        id: u32,
        date: String,
        previous_id: u32,
        previous_date: String,
    },
}

impl_debug_for_error!(CatalogError);
