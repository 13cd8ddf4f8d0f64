//! Order message commands.
//!
//! # Usage
//!
//! ```bash
//! # Print the escaped payload for an order file
//! dk-cli order encode -f order.yaml
//!
//! # Print the WhatsApp link instead
//! dk-cli order encode -f order.yaml --phone "+965 5555 1234"
//!
//! # Print the readable message
//! dk-cli order encode -f order.json --preview
//! ```
//!
//! # Environment Variables
//!
//! - `DUKKAN_WHATSAPP_PHONE` - Default WhatsApp number when `--phone` is not given
//!
//! # Order File
//!
//! YAML or JSON, same shape as the storefront's `POST /checkout` body.
//! `totalAmount` may be left out, in which case the line totals are summed.
//!
//! ```yaml
//! orderChoices:
//!   recipient: Ali
//!   shippingMethod: { id: 1, title: Pickup }
//!   paymentMethod: Cash
//! lines:
//!   - productTitle: Zaatar Mix
//!     unitPrice: "2.5"
//!     quantity: 2
//!     selectedOptions: [{ name: Size, value: 250g }]
//! ```

use std::path::Path;

use dukkan_core::message::PhoneError;
use dukkan_core::{
    CartLine, OrderChoices, OrderError, WhatsAppPhone, compose_order_message,
    encode_order_message, whatsapp_link,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while encoding an order file.
#[derive(Debug, Error)]
pub enum OrderCommandError {
    /// The order file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// The order file could not be read.
    #[error("Failed to read order file: {0}")]
    Io(#[from] std::io::Error),

    /// The order file is not valid YAML/JSON or has the wrong shape.
    #[error("Invalid order file: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The order failed validation.
    #[error("Invalid order: {0}")]
    Order(#[from] OrderError),

    /// The phone number is malformed.
    #[error("Invalid phone number: {0}")]
    Phone(#[from] PhoneError),
}

/// Contents of an order file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFile {
    pub order_choices: OrderChoices,
    pub lines: Vec<CartLine>,
    #[serde(default)]
    pub total_amount: Option<Decimal>,
}

impl OrderFile {
    /// Parse an order file from YAML or JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid YAML/JSON or is missing fields.
    pub fn parse(content: &str) -> Result<Self, OrderCommandError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// The given total, or the sum of the line totals when none was given.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::AmountOverflow` if a line total, or the running
    /// sum, does not fit in a `Decimal`.
    pub fn total(&self) -> Result<Decimal, OrderError> {
        if let Some(total) = self.total_amount {
            return Ok(total);
        }
        self.lines
            .iter()
            .enumerate()
            .try_fold(Decimal::ZERO, |sum, (index, line)| {
                line.line_total()
                    .and_then(|line_total| sum.checked_add(line_total))
                    .ok_or(OrderError::AmountOverflow { index })
            })
    }
}

/// What `encode` should print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Readable message.
    Preview,
    /// Escaped payload.
    Payload,
    /// WhatsApp link.
    Link,
}

/// Render an order file in the requested form.
///
/// # Errors
///
/// Returns an error if the order is invalid, or if a link is requested
/// without a valid phone number.
pub fn render(
    order: &OrderFile,
    output: Output,
    phone: Option<&str>,
) -> Result<String, OrderCommandError> {
    let total = order.total()?;
    match output {
        Output::Preview => Ok(compose_order_message(
            &order.order_choices,
            &order.lines,
            total,
        )?),
        Output::Payload => {
            Ok(encode_order_message(&order.order_choices, &order.lines, total)?.into_inner())
        }
        Output::Link => {
            let phone = WhatsAppPhone::parse(phone.unwrap_or_default())?;
            let message = encode_order_message(&order.order_choices, &order.lines, total)?;
            Ok(whatsapp_link(&phone, &message))
        }
    }
}

/// Encode an order file and print the result.
///
/// # Arguments
///
/// * `file_path` - Path to the YAML or JSON order file
/// * `phone` - WhatsApp number; falls back to `DUKKAN_WHATSAPP_PHONE`
/// * `preview` - Print the readable message instead of the escaped one
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or the order is invalid.
#[allow(clippy::print_stdout)]
pub async fn encode(
    file_path: &str,
    phone: Option<String>,
    preview: bool,
) -> Result<(), OrderCommandError> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let path = Path::new(file_path);
    if !path.exists() {
        return Err(OrderCommandError::FileNotFound(file_path.to_string()));
    }

    info!(path = %file_path, "Loading order from file");
    let content = tokio::fs::read_to_string(path).await?;
    let order = OrderFile::parse(&content)?;
    info!(lines = order.lines.len(), "Parsed order");

    let phone = phone.or_else(|| std::env::var("DUKKAN_WHATSAPP_PHONE").ok());
    let output = if preview {
        Output::Preview
    } else if phone.is_some() {
        Output::Link
    } else {
        Output::Payload
    };

    let rendered = render(&order, output, phone.as_deref())?;
    println!("{rendered}");

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const YAML_ORDER: &str = r#"
orderChoices:
  recipient: Ali
  shippingMethod: { id: 1, title: Pickup }
  paymentMethod: Cash
lines:
  - productTitle: Zaatar Mix
    unitPrice: "2.5"
    quantity: 2
    selectedOptions: [{ name: Size, value: 250g }]
  - productTitle: Sumac
    unitPrice: "1.25"
    quantity: 1
    selectedOptions: []
"#;

    #[test]
    fn test_parse_yaml_defaults_total_to_line_sum() {
        let order = OrderFile::parse(YAML_ORDER).unwrap();
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.order_choices.delivery_address, "");
        assert_eq!(order.total(), Ok(Decimal::new(625, 2)));
    }

    #[test]
    fn test_parse_json_with_total() {
        let json = r#"{
            "orderChoices": {
                "recipient": "Ali",
                "shippingMethod": {"id": 2, "title": "توصيل"},
                "deliveryAddress": "Salmiya",
                "paymentMethod": "Cash"
            },
            "lines": [],
            "totalAmount": "3.5"
        }"#;
        let order = OrderFile::parse(json).unwrap();
        assert_eq!(order.total(), Ok(Decimal::new(35, 1)));
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        let result = OrderFile::parse("lines: []");
        assert!(matches!(result, Err(OrderCommandError::Parse(_))));
    }

    #[test]
    fn test_render_preview_and_payload() {
        let order = OrderFile::parse(YAML_ORDER).unwrap();

        let preview = render(&order, Output::Preview, None).unwrap();
        assert!(preview.contains("*Zaatar Mix*\n250g\n"));

        let payload = render(&order, Output::Payload, None).unwrap();
        assert!(payload.contains("%2AZaatar%20Mix%2A%0A250g%0A"));
        assert!(!payload.contains(' '));
    }

    #[test]
    fn test_render_link() {
        let order = OrderFile::parse(YAML_ORDER).unwrap();
        let link = render(&order, Output::Link, Some("+965 5555 1234")).unwrap();
        assert!(link.starts_with("https://wa.me/96555551234?text=%2A"));
    }

    #[test]
    fn test_render_link_requires_phone() {
        let order = OrderFile::parse(YAML_ORDER).unwrap();
        let result = render(&order, Output::Link, None);
        assert!(matches!(result, Err(OrderCommandError::Phone(PhoneError::Empty))));
    }

    #[test]
    fn test_render_rejects_invalid_order() {
        let mut order = OrderFile::parse(YAML_ORDER).unwrap();
        order.order_choices.recipient = String::new();
        let result = render(&order, Output::Payload, None);
        assert!(matches!(
            result,
            Err(OrderCommandError::Order(OrderError::EmptyRecipient))
        ));
    }

    #[test]
    fn test_total_overflow_is_an_order_error() {
        let yaml = r#"
orderChoices:
  recipient: Ali
  shippingMethod: { id: 1, title: Pickup }
  paymentMethod: Cash
lines:
  - productTitle: Saffron
    unitPrice: "79228162514264337593543950335"
    quantity: 1
    selectedOptions: []
  - productTitle: Saffron
    unitPrice: "79228162514264337593543950335"
    quantity: 1
    selectedOptions: []
"#;
        let order = OrderFile::parse(yaml).unwrap();
        assert_eq!(order.total(), Err(OrderError::AmountOverflow { index: 1 }));

        let result = render(&order, Output::Preview, None);
        assert!(matches!(
            result,
            Err(OrderCommandError::Order(OrderError::AmountOverflow { index: 1 }))
        ));
    }
}
