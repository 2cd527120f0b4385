//! Style catalog: the storefront's compiled-in model line-up.
//!
//! Maps each sellable model code to the warehouse supplier's numeric style id
//! and brand. The table is static: adding a model is a code change, since
//! every new model needs artwork and pricing review anyway.

pub mod style;

pub use style::{StyleCatalogEntry, entries, find, find_model, split_legacy_part_number};
