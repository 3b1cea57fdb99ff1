use crate::models::PricedOption;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// What a product card renders: the price to pay, the crossed-out "was"
/// price, and the percentage-off badge. `original_price` is a cosmetic
/// figure derived from the markup factor, not a historical price; it must
/// never be persisted as authoritative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayPrice {
    pub final_price: i64,
    pub original_price: i64,
    pub discount_percent: i64,
}

fn round_to_unit(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// Composes base price and option deltas into the displayed price. Deltas
/// are zero when no size or variant is selected. The markup factor is a
/// per-call-site display multiplier (product previews and related-product
/// cards use different ones).
pub fn compute_display_price(
    base_price: i64,
    size_delta: i64,
    variant_delta: i64,
    markup_factor: Decimal,
) -> DisplayPrice {
    let final_price = base_price + size_delta + variant_delta;
    let original_price = round_to_unit(Decimal::from(final_price) * markup_factor);
    let discount_percent = if original_price == 0 {
        0
    } else {
        round_to_unit(
            Decimal::from(original_price - final_price) / Decimal::from(original_price)
                * Decimal::from(100),
        )
    };
    DisplayPrice {
        final_price,
        original_price,
        discount_percent,
    }
}

/// Convenience over [`compute_display_price`] for the common call shape
/// where the caller holds the currently selected options.
pub fn display_price_for_options(
    base_price: i64,
    size: Option<&PricedOption>,
    variant: Option<&PricedOption>,
    markup_factor: Decimal,
) -> DisplayPrice {
    compute_display_price(
        base_price,
        size.map_or(0, |o| o.price_delta),
        variant.map_or(0, |o| o.price_delta),
        markup_factor,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn markup_and_badge_computation() {
        let price = compute_display_price(500, 50, 0, dec!(1.4));
        assert_eq!(price.final_price, 550);
        assert_eq!(price.original_price, 770);
        assert_eq!(price.discount_percent, 29);
    }

    #[test]
    fn no_markup_means_no_badge() {
        let price = compute_display_price(500, 0, 0, dec!(1.0));
        assert_eq!(price.original_price, 500);
        assert_eq!(price.discount_percent, 0);
    }

    #[test]
    fn zero_original_price_guards_division() {
        let price = compute_display_price(0, 0, 0, dec!(1.4));
        assert_eq!(price.final_price, 0);
        assert_eq!(price.original_price, 0);
        assert_eq!(price.discount_percent, 0);
    }

    #[test]
    fn negative_delta_lowers_final_price() {
        let price = compute_display_price(1000, -100, 0, dec!(1.25));
        assert_eq!(price.final_price, 900);
        assert_eq!(price.original_price, 1125);
        assert_eq!(price.discount_percent, 20);
    }

    #[test]
    fn option_deltas_default_to_zero() {
        let size = PricedOption {
            name: "XL".into(),
            price_delta: 50,
            hex: None,
        };
        let with_size = display_price_for_options(500, Some(&size), None, dec!(1.4));
        assert_eq!(with_size.final_price, 550);
        let bare = display_price_for_options(500, None, None, dec!(1.4));
        assert_eq!(bare.final_price, 500);
    }
}
