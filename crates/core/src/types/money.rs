//! Kuwaiti Dinar amounts and their `ar-KW` rendering.
//!
//! The shop only sells in KWD and only writes order messages in Arabic, so
//! both the currency and the locale are fixed. Formatting follows the CLDR
//! currency pattern for `ar-KW`:
//!
//! - three fraction digits (the dinar's minor unit is the fils, 1/1000)
//! - Arabic-Indic digits with `٬` grouping and `٫` as the decimal separator
//! - a leading right-to-left mark and a trailing `د.ك.` symbol
//! - negatives put an Arabic letter mark and `-` ahead of the leading mark

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of fraction digits rendered for KWD.
pub const KWD_MINOR_UNITS: u32 = 3;

/// ISO 4217 code of the shop currency.
pub const KWD_CODE: &str = "KWD";

/// Localized dinar symbol, without the trailing direction mark.
pub const KWD_SYMBOL: &str = "د.ك.";

const RIGHT_TO_LEFT_MARK: char = '\u{200F}';
const ARABIC_LETTER_MARK: char = '\u{061C}';
const NO_BREAK_SPACE: char = '\u{00A0}';
const ARABIC_DECIMAL_SEPARATOR: char = '\u{066B}';
const ARABIC_GROUP_SEPARATOR: char = '\u{066C}';
const ARABIC_INDIC_ZERO: u32 = 0x0660;

/// An amount in Kuwaiti Dinar.
///
/// ```
/// use dukkan_core::Money;
/// use rust_decimal::Decimal;
///
/// let money = Money::new(Decimal::new(50, 1));
/// assert_eq!(money.to_string(), "\u{200F}٥٫٠٠٠\u{00A0}د.ك.\u{200F}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wrap a dinar amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The raw amount, unrounded.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The amount rounded to whole fils, half away from zero.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(KWD_MINOR_UNITS, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Render the amount in the `ar-KW` currency style.
    #[must_use]
    pub fn format(&self) -> String {
        let rounded = self.rounded();
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let plain = format!("{:.3}", rounded.abs());
        let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

        let mut out = String::with_capacity(plain.len() * 2 + 16);
        if negative {
            out.push(ARABIC_LETTER_MARK);
            out.push('-');
        }
        out.push(RIGHT_TO_LEFT_MARK);
        push_grouped_digits(&mut out, integer);
        out.push(ARABIC_DECIMAL_SEPARATOR);
        out.extend(fraction.chars().map(to_arabic_indic));
        out.push(NO_BREAK_SPACE);
        out.push_str(KWD_SYMBOL);
        out.push(RIGHT_TO_LEFT_MARK);
        out
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

/// Format a dinar amount in the `ar-KW` currency style.
///
/// Shorthand for `Money::new(amount).format()`.
#[must_use]
pub fn format_money(amount: Decimal) -> String {
    Money::new(amount).format()
}

fn push_grouped_digits(out: &mut String, integer: &str) {
    let len = integer.len();
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(ARABIC_GROUP_SEPARATOR);
        }
        out.push(to_arabic_indic(c));
    }
}

fn to_arabic_indic(c: char) -> char {
    c.to_digit(10)
        .and_then(|d| char::from_u32(ARABIC_INDIC_ZERO + d))
        .unwrap_or(c)
}
