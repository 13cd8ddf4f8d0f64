//! Order messages sent to the shop over WhatsApp.
//!
//! A checkout is turned into an Arabic plain-text summary: the cart lines,
//! then one section per checkout choice, each under a bold heading and a
//! tatweel rule. The summary is then escaped with [`escape_message`] so it can
//! be dropped into a `wa.me` deep link.
//!
//! # Example
//!
//! ```
//! use dukkan_core::message::encode_order_message;
//! use dukkan_core::{CartLine, DeliveryMethod, OrderChoices, SelectedOption};
//! use rust_decimal::Decimal;
//!
//! let choices = OrderChoices {
//!     recipient: "Ali".to_owned(),
//!     shipping_method: DeliveryMethod::Pickup.shipping_method(),
//!     delivery_address: String::new(),
//!     payment_method: "Cash".to_owned(),
//! };
//! let lines = [CartLine {
//!     product_title: "Zaatar Mix".to_owned(),
//!     unit_price: Decimal::new(25, 1),
//!     quantity: 2,
//!     selected_options: vec![SelectedOption {
//!         name: "Size".to_owned(),
//!         value: "250g".to_owned(),
//!     }],
//! }];
//!
//! let encoded = encode_order_message(&choices, &lines, Decimal::new(5, 0)).unwrap();
//! assert!(encoded.as_str().contains("%2AZaatar%20Mix%2A"));
//! assert!(!encoded.as_str().contains(' '));
//! ```

mod escape;
mod whatsapp;

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::money::format_money;
use crate::types::order::{CartLine, OrderChoices, OrderError};

pub use escape::{escape_char, escape_message};
pub use whatsapp::{PhoneError, WhatsAppPhone, whatsapp_link};

/// Visual rule drawn under every heading (23 × U+0640 ARABIC TATWEEL).
pub const RULE: &str = "ـــــــــــــــــــــــ";

/// Separator between selected option values on an item line.
pub const OPTION_SEPARATOR: &str = " | ";

const CART_HEADING: &str = "*السلة*";
const QUANTITY_LABEL: &str = "الكمية: ";
const SHIPPING_HEADING: &str = "*طريقة التوصيل*";
const ADDRESS_HEADING: &str = "*العنوان*";
const PAYMENT_HEADING: &str = "*طريقة الدفع*";
const SUBTOTAL_HEADING: &str = "*الاجمالي قبل رسوم التوصيل*";
const BILLED_TO_HEADING: &str = "*الفاتورة باسم*";

/// An order message that is already escaped for a deep link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedOrderMessage(String);

impl EncodedOrderMessage {
    /// Escape a composed message.
    #[must_use]
    pub fn escape(text: &str) -> Self {
        Self(escape_message(text))
    }

    /// Returns the escaped message as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the message and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EncodedOrderMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EncodedOrderMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Build the readable, unescaped order summary.
///
/// `total_amount` is the cart subtotal before delivery fees. Lines keep their
/// order. The address section is written only for delivery orders; unknown
/// shipping ids skip it.
///
/// # Errors
///
/// Returns an [`OrderError`] if any choice or line fails validation. Nothing
/// is composed in that case.
pub fn compose_order_message(
    choices: &OrderChoices,
    lines: &[CartLine],
    total_amount: Decimal,
) -> Result<String, OrderError> {
    choices.validate()?;
    for (index, line) in lines.iter().enumerate() {
        line.validate(index)?;
    }
    if total_amount.is_sign_negative() && !total_amount.is_zero() {
        return Err(OrderError::NegativeTotal);
    }

    let mut message = String::with_capacity(256 + lines.len() * 96);

    push_heading(&mut message, CART_HEADING);
    message.push('\n');

    for (index, line) in lines.iter().enumerate() {
        let line_total = line
            .line_total()
            .ok_or(OrderError::AmountOverflow { index })?;
        let options = line
            .selected_options
            .iter()
            .map(|option| option.value.as_str())
            .collect::<Vec<_>>()
            .join(OPTION_SEPARATOR);

        message.push('*');
        message.push_str(&line.product_title);
        message.push_str("*\n");
        message.push_str(&options);
        message.push('\n');
        message.push_str(QUANTITY_LABEL);
        message.push_str(&line.quantity.to_string());
        message.push('\n');
        message.push_str(&format_money(line_total));
        message.push_str("\n\n");
    }

    push_section(&mut message, SHIPPING_HEADING, &choices.shipping_method.title);

    if choices.includes_address() {
        push_section(&mut message, ADDRESS_HEADING, &choices.delivery_address);
    }

    push_section(&mut message, PAYMENT_HEADING, &choices.payment_method);

    message.push('\n');
    push_heading(&mut message, SUBTOTAL_HEADING);
    message.push_str(&format_money(total_amount));

    message.push_str("\n\n");
    push_heading(&mut message, BILLED_TO_HEADING);
    message.push_str(&choices.recipient);

    Ok(message)
}

/// Build the order summary and escape it for a deep link.
///
/// # Errors
///
/// Returns an [`OrderError`] if any choice or line fails validation.
pub fn encode_order_message(
    choices: &OrderChoices,
    lines: &[CartLine],
    total_amount: Decimal,
) -> Result<EncodedOrderMessage, OrderError> {
    let text = compose_order_message(choices, lines, total_amount)?;
    Ok(EncodedOrderMessage::escape(&text))
}

fn push_heading(message: &mut String, heading: &str) {
    message.push_str(heading);
    message.push('\n');
    message.push_str(RULE);
    message.push('\n');
}

fn push_section(message: &mut String, heading: &str, body: &str) {
    message.push('\n');
    push_heading(message, heading);
    message.push_str(body);
    message.push_str("\n\n");
}
