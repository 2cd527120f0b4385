//! Lookup-key normalization for warehouse part numbers and color names.
//!
//! The supplier's SKU records are inconsistent: part numbers come as
//! `112-BLK`, `112BLK`, or `R112-BLK`, color names as `Black/Charcoal` or
//! `Heather Grey`. Every snapshot key and every query goes through the same
//! three normalizers so both sides of a lookup agree on spelling.

/// Normalize a full part number: uppercase, all whitespace removed.
///
/// Dashes and slashes are kept; only whitespace is noise here.
pub fn part_number_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Extract the trailing color-code suffix of a part number, uppercased.
///
/// The suffix is the longest run of ASCII letters, optionally joined by
/// single `-` or `/` separators, that reaches the end of the string. A dash
/// directly in front of the run is a model/color separator and is not part
/// of the code: `112-BLK` → `BLK`, `112BLK` → `BLK`,
/// `112PFP-RTEDGBRN` → `PFP-RTEDGBRN`. Returns `None` when the part number
/// does not end in a letter.
pub fn color_code_suffix(part_number: &str) -> Option<String> {
    let bytes = part_number.as_bytes();
    if bytes.is_empty() || !bytes[bytes.len() - 1].is_ascii_alphabetic() {
        return None;
    }

    let mut start = bytes.len();
    let mut i = bytes.len();
    while i > 0 {
        let b = bytes[i - 1];
        if b.is_ascii_alphabetic() {
            i -= 1;
            start = i;
        } else if (b == b'-' || b == b'/') && i >= 2 && bytes[i - 2].is_ascii_alphabetic() {
            // Separator counts only when flanked by letters on both sides.
            i -= 1;
        } else {
            break;
        }
    }

    Some(part_number[start..].to_ascii_uppercase())
}

/// Normalize a color name: uppercase, whitespace and `/` removed.
///
/// `Black/Charcoal` and `Heather Grey / Black` both collapse to one token.
pub fn color_name_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '/')
        .flat_map(char::to_uppercase)
        .collect()
}
