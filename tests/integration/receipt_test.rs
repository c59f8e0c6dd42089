// Integration tests for receipt aggregation over a cart
//
// Exercises the full per-line pipeline: product -> applicable taxes ->
// line record -> cart totals, including the serialized receipt shape.

#[path = "../helpers/mod.rs"]
mod helpers;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use helpers::{exempt_category, imported_product, product, standard_category};
use taxcart::modules::carts::models::{Cart, CartItem};
use taxcart::modules::carts::services::ReceiptBuilder;
use taxcart::modules::settings::services::{CalculationMode, TaxSettings};

fn cart_with(items: Vec<(taxcart::modules::catalog::models::Product, i32)>) -> Cart {
    let mut cart = Cart::new("session-1");
    for (product, quantity) in items {
        let item = CartItem::new(cart.id, product, quantity);
        cart.items.push(item);
    }
    cart
}

#[test]
fn test_mixed_cart_sum_mode() {
    let builder = ReceiptBuilder::new();
    let cart = cart_with(vec![
        (product("book", dec!(12.49), exempt_category()), 1),
        (product("cd", dec!(14.99), standard_category()), 1),
        (imported_product("perfume", dec!(27.99), standard_category()), 1),
    ]);

    let receipt = builder.receipt(&cart, &TaxSettings::default()).unwrap();

    assert_eq!(receipt.items.len(), 3);

    // Lines come out in cart order
    assert_eq!(receipt.items[0].code, "book");
    assert_eq!(receipt.items[1].code, "cd");
    assert_eq!(receipt.items[2].code, "perfume");

    assert_eq!(receipt.items[0].base_tax_amount, Decimal::ZERO);
    assert_eq!(receipt.items[1].base_tax_amount, dec!(1.50));
    assert_eq!(receipt.items[2].base_tax_amount, dec!(2.80));
    assert_eq!(receipt.items[2].additional_tax_amount, dec!(1.40));

    // 12.49 + (14.99 + 1.50) + (27.99 + 2.80 + 1.40)
    assert_eq!(receipt.total_price, dec!(61.17));
    assert_eq!(receipt.total_tax_amount, dec!(5.70));
}

#[test]
fn test_cascade_mode_raises_import_duty() {
    let builder = ReceiptBuilder::new();
    let cart = cart_with(vec![(
        imported_product("perfume", dec!(27.99), standard_category()),
        1,
    )]);
    let settings = TaxSettings {
        calculation_mode: CalculationMode::Cascade,
        ..TaxSettings::default()
    };

    let receipt = builder.receipt(&cart, &settings).unwrap();

    // Duty computed on 27.99 + 2.80 = 30.79 -> 1.55
    assert_eq!(receipt.items[0].additional_tax_amount, dec!(1.55));
    assert_eq!(receipt.total_price, dec!(32.34));
    assert_eq!(receipt.total_tax_amount, dec!(4.35));
}

#[test]
fn test_total_tax_equals_sum_of_line_taxes() {
    let builder = ReceiptBuilder::new();
    let cart = cart_with(vec![
        (product("a", dec!(9.99), standard_category()), 2),
        (imported_product("b", dec!(4.20), standard_category()), 3),
        (product("c", dec!(0.85), exempt_category()), 1),
    ]);

    let receipt = builder.receipt(&cart, &TaxSettings::default()).unwrap();

    let line_tax_sum: Decimal = receipt
        .items
        .iter()
        .map(|line| line.base_tax_amount + line.additional_tax_amount)
        .sum();

    assert_eq!(receipt.total_tax_amount, line_tax_sum.round_dp(2));
}

#[test]
fn test_quantity_drives_tax_but_not_price_total() {
    let builder = ReceiptBuilder::new();
    let cart = cart_with(vec![(product("a", dec!(10.00), standard_category()), 3)]);

    let receipt = builder.receipt(&cart, &TaxSettings::default()).unwrap();

    // Tax is computed per quantity (10% of 10.00 x 3)...
    assert_eq!(receipt.items[0].base_tax_amount, dec!(3.00));
    // ...while the base price enters the total once per line
    assert_eq!(receipt.total_price, dec!(13.00));
}

#[test]
fn test_inclusive_prices_produce_tax_free_receipt() {
    let builder = ReceiptBuilder::new();
    let cart = cart_with(vec![
        (imported_product("perfume", dec!(27.99), standard_category()), 1),
        (product("cd", dec!(14.99), standard_category()), 2),
    ]);
    let settings = TaxSettings {
        base_price_includes_taxes: true,
        ..TaxSettings::default()
    };

    let receipt = builder.receipt(&cart, &settings).unwrap();

    assert_eq!(receipt.total_tax_amount, Decimal::ZERO);
    assert_eq!(receipt.total_price, dec!(42.98));
}

#[test]
fn test_empty_cart() {
    let builder = ReceiptBuilder::new();
    let cart = Cart::new("empty-session");

    let receipt = builder.receipt(&cart, &TaxSettings::default()).unwrap();

    assert!(receipt.items.is_empty());
    assert_eq!(receipt.total_price, Decimal::ZERO);
    assert_eq!(receipt.total_tax_amount, Decimal::ZERO);
}

#[test]
fn test_receipt_serializes_expected_shape() {
    let builder = ReceiptBuilder::new();
    let mut perfume = imported_product("perfume", dec!(27.99), standard_category());
    perfume.description = Some("Eau de toilette".to_string());
    perfume.display_price = Some(dec!(32.19));
    let cart = cart_with(vec![(perfume, 1)]);

    let receipt = builder.receipt(&cart, &TaxSettings::default()).unwrap();
    let json = serde_json::to_value(&receipt).unwrap();

    assert_eq!(json["total_price"], "32.19");
    assert_eq!(json["total_tax_amount"], "4.20");

    let line = &json["items"][0];
    assert_eq!(line["code"], "perfume");
    assert_eq!(line["description"], "Eau de toilette");
    assert_eq!(line["base_price"], "27.99");
    assert_eq!(line["display_price"], "32.19");
    assert_eq!(line["currency"], "USD");
    assert_eq!(line["category"], "general");
    assert_eq!(line["base_tax_amount"], "2.80");
    assert_eq!(line["additional_tax_amount"], "1.40");
}
