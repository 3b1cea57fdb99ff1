use storefront_core::{
    config::AppConfig,
    models::PricedOption,
    services::pricing::{compute_display_price, display_price_for_options},
};
use rust_decimal_macros::dec;

#[test]
fn product_preview_price_with_size_upcharge() {
    let price = compute_display_price(500, 50, 0, dec!(1.4));
    assert_eq!(price.final_price, 550);
    assert_eq!(price.original_price, 770);
    assert_eq!(price.discount_percent, 29);
}

#[test]
fn related_card_uses_the_lower_markup() {
    let config = AppConfig::default();
    let preview = compute_display_price(1000, 0, 0, config.pricing.preview_markup_factor);
    let related = compute_display_price(1000, 0, 0, config.pricing.related_markup_factor);
    assert_eq!(preview.original_price, 1400);
    assert_eq!(related.original_price, 1250);
    assert!(preview.discount_percent > related.discount_percent);
}

#[test]
fn selected_options_contribute_their_deltas() {
    let size = PricedOption {
        name: "A2".into(),
        price_delta: 150,
        hex: None,
    };
    let variant = PricedOption {
        name: "Walnut".into(),
        price_delta: 80,
        hex: Some("#5d432c".into()),
    };
    let price = display_price_for_options(500, Some(&size), Some(&variant), dec!(1.25));
    assert_eq!(price.final_price, 730);
    assert_eq!(price.original_price, 913); // 912.5 rounds away from zero
    assert_eq!(price.discount_percent, 20);
}

#[test]
fn free_product_renders_without_a_badge() {
    let price = display_price_for_options(0, None, None, dec!(1.4));
    assert_eq!(price.final_price, 0);
    assert_eq!(price.original_price, 0);
    assert_eq!(price.discount_percent, 0);
}
