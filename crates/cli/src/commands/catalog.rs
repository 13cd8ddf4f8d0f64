//! Catalog commands: delivery/payment methods and money formatting.

use dukkan_core::{DeliveryMethod, PaymentMethod, format_money};
use rust_decimal::Decimal;

/// One line per delivery and payment method: id, then title.
///
/// Delivery lines also carry the turnaround note and the price note.
#[must_use]
pub fn method_lines() -> Vec<String> {
    let delivery = DeliveryMethod::ALL
        .into_iter()
        .map(|m| {
            format!(
                "delivery\t{}\t{}\t{}\t{}",
                m.id(),
                m.title(),
                m.turnaround(),
                m.price_note()
            )
        });
    let payment = PaymentMethod::ALL
        .into_iter()
        .map(|m| format!("payment\t{}\t{}", m.id(), m.title()));
    delivery.chain(payment).collect()
}

/// Print the delivery and payment methods offered at checkout.
#[allow(clippy::print_stdout)]
pub fn methods() {
    for line in method_lines() {
        println!("{line}");
    }
}

/// Print an amount in the `ar-KW` dinar format.
#[allow(clippy::print_stdout)]
pub fn money(amount: Decimal) {
    println!("{}", format_money(amount));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_lines() {
        let lines = method_lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("delivery\t1\t"));
        assert!(lines[1].starts_with("delivery\t2\t"));
        assert!(lines[1].ends_with("\t\tرسوم التوصيل حسب المنطقة"));
        assert!(lines[0].ends_with(&format_money(Decimal::ZERO)));
        assert!(lines[2].starts_with("payment\tonline\t"));
        assert!(lines[3].starts_with("payment\tcash\t"));
    }
}
