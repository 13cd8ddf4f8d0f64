//! WhatsApp click-to-chat links.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::EncodedOrderMessage;

/// Base URL of WhatsApp click-to-chat links.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Errors that can occur when parsing a [`WhatsAppPhone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input contains something other than digits and separators.
    #[error("phone number contains invalid character {0:?}")]
    InvalidCharacter(char),
    /// The number has too few or too many digits.
    #[error("phone number must have between {min} and {max} digits (got {got})")]
    InvalidLength {
        /// Minimum digit count.
        min: usize,
        /// Maximum digit count.
        max: usize,
        /// Digits found.
        got: usize,
    },
}

/// An international phone number in the digits-only form `wa.me` expects.
///
/// ## Constraints
///
/// - An optional leading `+`
/// - Spaces, dashes, and parentheses are dropped
/// - 8-15 digits remain (E.164 allows at most 15)
///
/// ## Examples
///
/// ```
/// use dukkan_core::message::WhatsAppPhone;
///
/// let phone = WhatsAppPhone::parse("+965 5555-1234").unwrap();
/// assert_eq!(phone.as_str(), "96555551234");
///
/// assert!(WhatsAppPhone::parse("").is_err());
/// assert!(WhatsAppPhone::parse("+965 call me").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WhatsAppPhone(String);

impl WhatsAppPhone {
    /// Fewest digits accepted.
    pub const MIN_DIGITS: usize = 8;
    /// Most digits accepted.
    pub const MAX_DIGITS: usize = 15;

    /// Parse a phone number.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains letters or other
    /// symbols, or has a digit count outside 8-15.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PhoneError::Empty);
        }

        let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let mut digits = String::with_capacity(body.len());
        for c in body.chars() {
            match c {
                '0'..='9' => digits.push(c),
                ' ' | '-' | '(' | ')' => {}
                other => return Err(PhoneError::InvalidCharacter(other)),
            }
        }

        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&digits.len()) {
            return Err(PhoneError::InvalidLength {
                min: Self::MIN_DIGITS,
                max: Self::MAX_DIGITS,
                got: digits.len(),
            });
        }

        Ok(Self(digits))
    }

    /// Returns the digits as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WhatsAppPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}

impl std::str::FromStr for WhatsAppPhone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for WhatsAppPhone {
    type Error = PhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<WhatsAppPhone> for String {
    fn from(phone: WhatsAppPhone) -> Self {
        phone.0
    }
}

/// Build the click-to-chat link that opens a chat with `phone` prefilled with `message`.
///
/// The message is inserted verbatim; it is already escaped.
#[must_use]
pub fn whatsapp_link(phone: &WhatsAppPhone, message: &EncodedOrderMessage) -> String {
    format!("{WHATSAPP_BASE_URL}/{}?text={}", phone.as_str(), message.as_str())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_separators() {
        assert_eq!(WhatsAppPhone::parse("+965 5555 1234").unwrap().as_str(), "96555551234");
        assert_eq!(WhatsAppPhone::parse("(965) 5555-1234").unwrap().as_str(), "96555551234");
        assert_eq!(WhatsAppPhone::parse("96555551234").unwrap().as_str(), "96555551234");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(WhatsAppPhone::parse("   "), Err(PhoneError::Empty));
    }

    #[test]
    fn test_parse_invalid_character() {
        assert_eq!(
            WhatsAppPhone::parse("965x5555"),
            Err(PhoneError::InvalidCharacter('x'))
        );
        assert!(WhatsAppPhone::parse("++96555551234").is_err());
    }

    #[test]
    fn test_parse_length_bounds() {
        assert!(matches!(
            WhatsAppPhone::parse("1234567"),
            Err(PhoneError::InvalidLength { got: 7, .. })
        ));
        assert!(WhatsAppPhone::parse("12345678").is_ok());
        assert!(WhatsAppPhone::parse("123456789012345").is_ok());
        assert!(matches!(
            WhatsAppPhone::parse("1234567890123456"),
            Err(PhoneError::InvalidLength { got: 16, .. })
        ));
    }

    #[test]
    fn test_display_adds_plus() {
        let phone = WhatsAppPhone::parse("96555551234").unwrap();
        assert_eq!(phone.to_string(), "+96555551234");
    }

    #[test]
    fn test_serde_validates() {
        let phone: WhatsAppPhone = serde_json::from_str("\"+965 5555 1234\"").unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"96555551234\"");
        assert!(serde_json::from_str::<WhatsAppPhone>("\"nope\"").is_err());
    }

    #[test]
    fn test_whatsapp_link_keeps_payload_verbatim() {
        let phone = WhatsAppPhone::parse("+965 5555 1234").unwrap();
        let message = EncodedOrderMessage::escape("*السلة*\nAli");
        assert_eq!(
            whatsapp_link(&phone, &message),
            "https://wa.me/96555551234?text=%2Aالسلة%2A%0AAli"
        );
    }
}
