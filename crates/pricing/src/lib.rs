//! Order pricing.
//!
//! Volume-discount and embroidery-fee tables for custom hat orders plus quote
//! assembly, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage). All amounts are in the smallest currency unit (cents).

pub mod quote;

pub use quote::{
    ARTWORK_SETUP_FEE, EXTRA_LOCATION_PRICE, EmbroideryType, Quote, QuoteBreakdown, QuoteLine,
    QuoteRequest, SETUP_FEE_WAIVER_MIN_HATS, price_quote, puff_price_per_hat,
    volume_discount_per_hat,
};
