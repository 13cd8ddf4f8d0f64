//! Delivery and payment methods offered at checkout.
//!
//! Both lists are closed and keyed by stable identifiers so that reordering
//! the options in a form never changes what an order means.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ShippingMethodId;
use super::money::format_money;
use super::order::ShippingMethod;

/// How the order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    /// Customer collects the order from the shop.
    Pickup,
    /// Shop delivers to the customer's address.
    Delivery,
}

impl DeliveryMethod {
    /// Every delivery method, in display order.
    pub const ALL: [Self; 2] = [Self::Pickup, Self::Delivery];

    /// Stable identifier submitted by the checkout form.
    #[must_use]
    pub const fn id(self) -> ShippingMethodId {
        match self {
            Self::Pickup => ShippingMethodId::new(1),
            Self::Delivery => ShippingMethodId::new(2),
        }
    }

    /// Look up a delivery method by its identifier.
    ///
    /// Returns `None` for identifiers outside the closed set.
    #[must_use]
    pub const fn from_id(id: ShippingMethodId) -> Option<Self> {
        match id.as_i32() {
            1 => Some(Self::Pickup),
            2 => Some(Self::Delivery),
            _ => None,
        }
    }

    /// Arabic display title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Pickup => "استلام من المحل",
            Self::Delivery => "توصيل",
        }
    }

    /// Short note shown under the title. Empty for delivery.
    #[must_use]
    pub const fn turnaround(self) -> &'static str {
        match self {
            Self::Pickup => "استلم طلبك بنفسك",
            Self::Delivery => "",
        }
    }

    /// Price line shown on the option.
    ///
    /// Pickup is free and shows a formatted zero; delivery fees depend on the
    /// area and are quoted over the chat.
    #[must_use]
    pub fn price_note(self) -> String {
        match self {
            Self::Pickup => format_money(Decimal::ZERO),
            Self::Delivery => "رسوم التوصيل حسب المنطقة".to_owned(),
        }
    }

    /// Whether the order message must carry a delivery address.
    #[must_use]
    pub const fn requires_address(self) -> bool {
        matches!(self, Self::Delivery)
    }

    /// The shipping method value a checkout form submits for this option.
    #[must_use]
    pub fn shipping_method(self) -> ShippingMethod {
        ShippingMethod {
            id: self.id(),
            title: self.title().to_owned(),
        }
    }
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Payment link sent over the messaging channel.
    Online,
    /// Cash on pickup or delivery.
    Cash,
}

impl PaymentMethod {
    /// Every payment method, in display order.
    pub const ALL: [Self; 2] = [Self::Online, Self::Cash];

    /// Stable identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Cash => "cash",
        }
    }

    /// Arabic display title, as written into the order message.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Online => "دفع إلكتروني",
            Self::Cash => "نقداً",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(Self::Online),
            "cash" => Ok(Self::Cash),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_method_ids_are_stable() {
        assert_eq!(DeliveryMethod::Pickup.id().as_i32(), 1);
        assert_eq!(DeliveryMethod::Delivery.id().as_i32(), 2);
    }

    #[test]
    fn test_delivery_method_from_id() {
        for method in DeliveryMethod::ALL {
            assert_eq!(DeliveryMethod::from_id(method.id()), Some(method));
        }
        assert_eq!(DeliveryMethod::from_id(ShippingMethodId::new(0)), None);
        assert_eq!(DeliveryMethod::from_id(ShippingMethodId::new(3)), None);
    }

    #[test]
    fn test_only_delivery_requires_address() {
        assert!(!DeliveryMethod::Pickup.requires_address());
        assert!(DeliveryMethod::Delivery.requires_address());
    }

    #[test]
    fn test_turnaround_and_price_note() {
        assert_eq!(DeliveryMethod::Pickup.turnaround(), "استلم طلبك بنفسك");
        assert_eq!(DeliveryMethod::Delivery.turnaround(), "");
        assert_eq!(
            DeliveryMethod::Pickup.price_note(),
            "\u{200F}٠٫٠٠٠\u{00A0}د.ك.\u{200F}"
        );
        assert_eq!(
            DeliveryMethod::Delivery.price_note(),
            "رسوم التوصيل حسب المنطقة"
        );
    }

    #[test]
    fn test_shipping_method_from_delivery_method() {
        let shipping = DeliveryMethod::Delivery.shipping_method();
        assert_eq!(shipping.id, ShippingMethodId::new(2));
        assert_eq!(shipping.title, "توصيل");
        assert_eq!(shipping.kind(), Some(DeliveryMethod::Delivery));
    }

    #[test]
    fn test_payment_method_roundtrip_through_id() {
        for method in PaymentMethod::ALL {
            let parsed: PaymentMethod = method.id().parse().unwrap();
            assert_eq!(parsed, method);
            assert_eq!(method.to_string(), method.id());
        }
    }

    #[test]
    fn test_payment_method_rejects_unknown() {
        assert!("card".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_method_serde_names() {
        assert_eq!(
            serde_json::to_string(&DeliveryMethod::Pickup).unwrap(),
            "\"pickup\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Online).unwrap(),
            "\"online\""
        );
    }
}
