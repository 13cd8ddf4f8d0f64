//! Shipping method identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a shipping method as submitted by the checkout form.
///
/// Serialized as the bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShippingMethodId(i32);

impl ShippingMethodId {
    /// Create a new ID from an i32 value.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the underlying i32 value.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ShippingMethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ShippingMethodId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<ShippingMethodId> for i32 {
    fn from(id: ShippingMethodId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_method_id_serde_is_transparent() {
        let id = ShippingMethodId::new(2);
        assert_eq!(serde_json::to_string(&id).unwrap(), "2");

        let parsed: ShippingMethodId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed.as_i32(), 7);
    }

    #[test]
    fn test_shipping_method_id_conversions() {
        let id: ShippingMethodId = 1.into();
        let raw: i32 = id.into();
        assert_eq!(raw, 1);
        assert_eq!(id.to_string(), "1");
    }
}
