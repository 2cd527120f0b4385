use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hatworks_core::{DomainError, QuoteId};

/// One-time artwork digitizing fee, in cents. Waived at
/// [`SETUP_FEE_WAIVER_MIN_HATS`] hats and above.
pub const ARTWORK_SETUP_FEE: u64 = 4_000;

/// Order size at which the artwork setup fee is waived.
pub const SETUP_FEE_WAIVER_MIN_HATS: u64 = 12;

/// Surcharge per hat, per embroidery location beyond the front, in cents.
pub const EXTRA_LOCATION_PRICE: u64 = 500;

/// Embroidery style for the whole order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbroideryType {
    Standard,
    Puff,
}

/// Quote line: hat model, quantity, unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub model: String,
    #[serde(default)]
    pub color: Option<String>,
    pub quantity: u32,
    /// Per-hat price in cents.
    pub unit_price: u64,
}

/// Pricing request for one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub lines: Vec<QuoteLine>,
    pub embroidery_type: EmbroideryType,
    /// Embroidery placements beyond the included front location.
    #[serde(default)]
    pub extra_locations: Vec<String>,
}

/// Itemized amounts making up a quote. All values in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    pub total_hats: u64,
    pub hat_subtotal: u64,
    pub volume_discount: u64,
    pub discounted_subtotal: u64,
    /// Charged artwork setup fee (zero when waived).
    pub artwork_fee: u64,
    pub artwork_setup_waived: bool,
    pub puff_embroidery_fee: u64,
    pub extra_locations_fee: u64,
    pub total_amount: u64,
}

/// Priced order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub quote_id: QuoteId,
    pub quoted_at: DateTime<Utc>,
    pub embroidery_type: EmbroideryType,
    pub breakdown: QuoteBreakdown,
}

/// Per-hat volume discount, in cents, for an order totalling `total_hats`.
pub fn volume_discount_per_hat(total_hats: u64) -> u64 {
    match total_hats {
        n if n >= 188 => 400,
        n if n >= 96 => 300,
        n if n >= 48 => 200,
        n if n >= 24 => 100,
        _ => 0,
    }
}

/// Per-hat 3D-puff embroidery price, in cents, for an order totalling
/// `total_hats`.
pub fn puff_price_per_hat(total_hats: u64) -> u64 {
    match total_hats {
        n if n >= 188 => 200,
        n if n >= 96 => 300,
        n if n >= 48 => 400,
        n if n >= 24 => 500,
        n if n >= 12 => 600,
        _ => 700,
    }
}

/// Price an order.
///
/// The hat subtotal is discounted per hat by volume tier, the artwork setup
/// fee is waived from [`SETUP_FEE_WAIVER_MIN_HATS`] hats, and 3D-puff and
/// extra-location charges are flat per-hat surcharges. The discount never
/// exceeds the subtotal.
pub fn price_quote(
    request: &QuoteRequest,
    quote_id: QuoteId,
    quoted_at: DateTime<Utc>,
) -> Result<Quote, DomainError> {
    if request.lines.is_empty() {
        return Err(DomainError::validation(
            "cannot quote an order without lines",
        ));
    }

    let mut total_hats: u64 = 0;
    let mut hat_subtotal: u64 = 0;
    for line in &request.lines {
        if line.quantity == 0 {
            return Err(DomainError::validation(
                "quote line quantity must be positive",
            ));
        }
        if line.unit_price == 0 {
            return Err(DomainError::validation(
                "quote line unit_price must be positive",
            ));
        }
        let line_total = u64::try_from((line.quantity as u128) * (line.unit_price as u128))
            .map_err(|_| DomainError::invariant("quote line amount overflow"))?;
        hat_subtotal = hat_subtotal
            .checked_add(line_total)
            .ok_or_else(|| DomainError::invariant("quote subtotal overflow"))?;
        // total_hats <= hat_subtotal since unit_price >= 1, so this cannot overflow.
        total_hats += u64::from(line.quantity);
    }

    let volume_discount = volume_discount_per_hat(total_hats)
        .checked_mul(total_hats)
        .ok_or_else(|| DomainError::invariant("volume discount overflow"))?
        .min(hat_subtotal);
    let discounted_subtotal = hat_subtotal - volume_discount;

    let artwork_setup_waived = total_hats >= SETUP_FEE_WAIVER_MIN_HATS;
    let artwork_fee = if artwork_setup_waived {
        0
    } else {
        ARTWORK_SETUP_FEE
    };

    let puff_embroidery_fee = match request.embroidery_type {
        EmbroideryType::Puff => puff_price_per_hat(total_hats)
            .checked_mul(total_hats)
            .ok_or_else(|| DomainError::invariant("puff fee overflow"))?,
        EmbroideryType::Standard => 0,
    };

    let extra_locations_fee = EXTRA_LOCATION_PRICE
        .checked_mul(request.extra_locations.len() as u64)
        .and_then(|per_hat| per_hat.checked_mul(total_hats))
        .ok_or_else(|| DomainError::invariant("extra location fee overflow"))?;

    let total_amount = discounted_subtotal
        .checked_add(artwork_fee)
        .and_then(|total| total.checked_add(puff_embroidery_fee))
        .and_then(|total| total.checked_add(extra_locations_fee))
        .ok_or_else(|| DomainError::invariant("quote total overflow"))?;

    Ok(Quote {
        quote_id,
        quoted_at,
        embroidery_type: request.embroidery_type,
        breakdown: QuoteBreakdown {
            total_hats,
            hat_subtotal,
            volume_discount,
            discounted_subtotal,
            artwork_fee,
            artwork_setup_waived,
            puff_embroidery_fee,
            extra_locations_fee,
            total_amount,
        },
    })
}
