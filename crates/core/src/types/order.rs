//! Checkout inputs: cart lines and the customer's order choices.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ShippingMethodId;
use super::method::DeliveryMethod;

/// Errors raised when checkout input is incomplete or malformed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// No name was given for the invoice.
    #[error("recipient cannot be empty")]
    EmptyRecipient,
    /// The shipping method has no display title.
    #[error("shipping method title cannot be empty")]
    EmptyShippingTitle,
    /// Delivery was chosen without an address.
    #[error("delivery address is required for delivery orders")]
    MissingDeliveryAddress,
    /// No payment method was chosen.
    #[error("payment method cannot be empty")]
    EmptyPaymentMethod,
    /// A cart line has no product title.
    #[error("cart line {index}: product title cannot be empty")]
    EmptyProductTitle {
        /// Position of the offending line.
        index: usize,
    },
    /// A cart line has a zero quantity.
    #[error("cart line {index}: quantity must be at least 1")]
    ZeroQuantity {
        /// Position of the offending line.
        index: usize,
    },
    /// A cart line has a negative unit price.
    #[error("cart line {index}: unit price cannot be negative")]
    NegativeUnitPrice {
        /// Position of the offending line.
        index: usize,
    },
    /// A cart line's total does not fit in a `Decimal`.
    #[error("cart line {index}: line total is too large")]
    AmountOverflow {
        /// Position of the offending line.
        index: usize,
    },
    /// The cart total is negative.
    #[error("total amount cannot be negative")]
    NegativeTotal,
}

/// Selected option on a product variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    /// Option name (e.g., "Size").
    pub name: String,
    /// Selected value (e.g., "250g").
    pub value: String,
}

/// A line item in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Title of the product.
    pub product_title: String,
    /// Price of one unit in KWD.
    pub unit_price: Decimal,
    /// Number of units.
    pub quantity: u32,
    /// Variant options, in the order the product defines them.
    pub selected_options: Vec<SelectedOption>,
}

impl CartLine {
    /// Price of the whole line (`unit_price * quantity`).
    ///
    /// Returns `None` if the product overflows.
    #[must_use]
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }

    /// Check the line for missing or out-of-range values.
    ///
    /// `index` is the line's position in the cart and is carried into the error.
    ///
    /// # Errors
    ///
    /// Returns an error if the title is blank, the quantity is zero, the
    /// unit price is negative, or the line total overflows.
    pub fn validate(&self, index: usize) -> Result<(), OrderError> {
        if self.product_title.trim().is_empty() {
            return Err(OrderError::EmptyProductTitle { index });
        }
        if self.quantity == 0 {
            return Err(OrderError::ZeroQuantity { index });
        }
        if self.unit_price.is_sign_negative() && !self.unit_price.is_zero() {
            return Err(OrderError::NegativeUnitPrice { index });
        }
        if self.line_total().is_none() {
            return Err(OrderError::AmountOverflow { index });
        }
        Ok(())
    }
}

/// The shipping option picked at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingMethod {
    /// Stable identifier (1 = pickup, 2 = delivery).
    pub id: ShippingMethodId,
    /// Display title written into the order message.
    pub title: String,
}

impl ShippingMethod {
    /// The known delivery method behind this id, if any.
    #[must_use]
    pub const fn kind(&self) -> Option<DeliveryMethod> {
        DeliveryMethod::from_id(self.id)
    }
}

/// Everything the customer chose at checkout besides the cart itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderChoices {
    /// Name the invoice is made out to.
    pub recipient: String,
    /// Pickup or delivery.
    pub shipping_method: ShippingMethod,
    /// Only read for delivery orders.
    #[serde(default)]
    pub delivery_address: String,
    /// Payment method title.
    pub payment_method: String,
}

impl OrderChoices {
    /// Whether the order message carries an address section.
    ///
    /// Shipping ids outside the known set never do.
    #[must_use]
    pub fn includes_address(&self) -> bool {
        self.shipping_method
            .kind()
            .is_some_and(DeliveryMethod::requires_address)
    }

    /// Check the choices for missing values.
    ///
    /// # Errors
    ///
    /// Returns an error if the recipient, shipping title, or payment method is
    /// blank, or if delivery was chosen without an address.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.recipient.trim().is_empty() {
            return Err(OrderError::EmptyRecipient);
        }
        if self.shipping_method.title.trim().is_empty() {
            return Err(OrderError::EmptyShippingTitle);
        }
        if self.includes_address() && self.delivery_address.trim().is_empty() {
            return Err(OrderError::MissingDeliveryAddress);
        }
        if self.payment_method.trim().is_empty() {
            return Err(OrderError::EmptyPaymentMethod);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn line(title: &str, price: &str, quantity: u32) -> CartLine {
        CartLine {
            product_title: title.to_owned(),
            unit_price: Decimal::from_str(price).unwrap(),
            quantity,
            selected_options: Vec::new(),
        }
    }

    fn choices(shipping_id: i32, address: &str) -> OrderChoices {
        OrderChoices {
            recipient: "Ali".to_owned(),
            shipping_method: ShippingMethod {
                id: ShippingMethodId::new(shipping_id),
                title: "Pickup".to_owned(),
            },
            delivery_address: address.to_owned(),
            payment_method: "Cash".to_owned(),
        }
    }

    #[test]
    fn test_line_total_multiplies_quantity() {
        assert_eq!(
            line("Zaatar Mix", "2.5", 2).line_total(),
            Some(Decimal::from_str("5.0").unwrap())
        );
    }

    #[test]
    fn test_line_total_overflow_is_rejected() {
        let huge = line("Saffron", "79228162514264337593543950335", 2);
        assert_eq!(huge.line_total(), None);
        assert_eq!(huge.validate(4), Err(OrderError::AmountOverflow { index: 4 }));

        let single = line("Saffron", "79228162514264337593543950335", 1);
        assert!(single.validate(0).is_ok());
    }

    #[test]
    fn test_validate_line() {
        assert!(line("Zaatar Mix", "2.5", 1).validate(0).is_ok());
        assert!(line("Free sample", "0", 1).validate(0).is_ok());
        assert_eq!(
            line("  ", "1", 1).validate(3),
            Err(OrderError::EmptyProductTitle { index: 3 })
        );
        assert_eq!(
            line("Sumac", "1", 0).validate(1),
            Err(OrderError::ZeroQuantity { index: 1 })
        );
        assert_eq!(
            line("Sumac", "-0.5", 1).validate(2),
            Err(OrderError::NegativeUnitPrice { index: 2 })
        );
    }

    #[test]
    fn test_includes_address_only_for_delivery() {
        assert!(!choices(1, "Salmiya").includes_address());
        assert!(choices(2, "Salmiya").includes_address());
        assert!(!choices(9, "Salmiya").includes_address());
    }

    #[test]
    fn test_validate_choices() {
        assert!(choices(1, "").validate().is_ok());
        assert!(choices(2, "Salmiya, Block 10").validate().is_ok());
        assert!(choices(7, "").validate().is_ok());

        assert_eq!(
            choices(2, "   ").validate(),
            Err(OrderError::MissingDeliveryAddress)
        );

        let mut no_recipient = choices(1, "");
        no_recipient.recipient = String::new();
        assert_eq!(no_recipient.validate(), Err(OrderError::EmptyRecipient));

        let mut no_payment = choices(1, "");
        no_payment.payment_method = " ".to_owned();
        assert_eq!(no_payment.validate(), Err(OrderError::EmptyPaymentMethod));

        let mut no_title = choices(1, "");
        no_title.shipping_method.title = String::new();
        assert_eq!(no_title.validate(), Err(OrderError::EmptyShippingTitle));
    }

    #[test]
    fn test_deserialize_camel_case_payload() {
        let json = r#"{
            "recipient": "Ali",
            "shippingMethod": {"id": 2, "title": "توصيل"},
            "deliveryAddress": "Salmiya",
            "paymentMethod": "Cash"
        }"#;
        let parsed: OrderChoices = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.shipping_method.kind(), Some(DeliveryMethod::Delivery));
        assert_eq!(parsed.delivery_address, "Salmiya");

        let line_json = r#"{
            "productTitle": "Zaatar Mix",
            "unitPrice": "2.5",
            "quantity": 2,
            "selectedOptions": [{"name": "Size", "value": "250g"}]
        }"#;
        let parsed: CartLine = serde_json::from_str(line_json).unwrap();
        assert_eq!(parsed.quantity, 2);
        assert_eq!(parsed.selected_options[0].value, "250g");
    }

    #[test]
    fn test_deserialize_rejects_missing_fields() {
        let json = r#"{"shippingMethod": {"id": 1, "title": "Pickup"}, "paymentMethod": "Cash"}"#;
        assert!(serde_json::from_str::<OrderChoices>(json).is_err());

        let line_json = r#"{"productTitle": "Zaatar Mix", "quantity": 2, "selectedOptions": []}"#;
        assert!(serde_json::from_str::<CartLine>(line_json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_negative_quantity() {
        let line_json =
            r#"{"productTitle": "Zaatar Mix", "unitPrice": "1", "quantity": -1, "selectedOptions": []}"#;
        assert!(serde_json::from_str::<CartLine>(line_json).is_err());
    }
}
