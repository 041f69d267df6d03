//! Display Formatting
//!
//! Price and image helpers used by the product cards.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves untouched
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Maximum fraction digits shown, matching `toLocaleString` defaults
const MAX_FRACTION_DIGITS: usize = 3;

/// Placeholder image URL with `name` URL-encoded into it
pub fn placeholder_url(base: &str, name: &str) -> String {
    format!("{}{}", base, utf8_percent_encode(name, URI_COMPONENT))
}

/// Image to show for a product: its own URL, or the placeholder
pub fn image_src(base: &str, name: &str, image_url: &str) -> String {
    if image_url.trim().is_empty() {
        placeholder_url(base, name)
    } else {
        image_url.to_string()
    }
}

/// Format a price the way `vi-VN` locales do: `.` groups thousands,
/// `,` separates up to three fraction digits, then the currency suffix.
pub fn format_price(price: f64, suffix: &str) -> String {
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, price.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if price < 0.0 { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}{}", sign, grouped, suffix)
    } else {
        format!("{}{},{}{}", sign, grouped, frac_part, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://placehold.co/400x250/eee/212529?text=";

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(0.5, "₫"), "0,5₫");
        assert_eq!(format_price(999.0, "₫"), "999₫");
        assert_eq!(format_price(1000.0, "₫"), "1.000₫");
        assert_eq!(format_price(95000.0, "₫"), "95.000₫");
        assert_eq!(format_price(110000.0, "₫"), "110.000₫");
        assert_eq!(format_price(1234567.0, "₫"), "1.234.567₫");
    }

    #[test]
    fn test_format_price_fraction_digits() {
        assert_eq!(format_price(1500.25, "₫"), "1.500,25₫");
        assert_eq!(format_price(2.0004, "₫"), "2₫");
        assert_eq!(format_price(2.1239, "₫"), "2,124₫");
    }

    #[test]
    fn test_placeholder_encodes_like_uri_component() {
        assert_eq!(placeholder_url(BASE, "Sách A"), format!("{}S%C3%A1ch%20A", BASE));
        assert_eq!(placeholder_url(BASE, "a&b=c"), format!("{}a%26b%3Dc", BASE));
        assert_eq!(placeholder_url(BASE, "it's (ok)!"), format!("{}it's%20(ok)!", BASE));
    }

    #[test]
    fn test_image_src_falls_back_to_placeholder() {
        assert_eq!(image_src(BASE, "X", "cover.png"), "cover.png");
        assert_eq!(image_src(BASE, "X", ""), format!("{}X", BASE));
        assert_eq!(image_src(BASE, "X", "  "), format!("{}X", BASE));
    }
}
