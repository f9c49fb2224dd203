//! Currency descriptors.
//!
//! A `Currency` is a plain value: an ISO 4217 code plus the number of
//! fraction digits amounts in that currency are kept at. Two descriptors are
//! the same currency when their codes match.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, MoneyResult};

/// Largest scale a `Decimal` can carry.
pub const MAX_FRACTION_DIGITS: u32 = 28;

/// ISO 4217 alphabetic code, stored as three uppercase ASCII letters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// Builds a code from bytes known to be uppercase ASCII letters.
    const fn from_ascii(bytes: [u8; 3]) -> Self {
        Self(bytes)
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ever constructed from ASCII letters.
        std::str::from_utf8(&self.0).unwrap_or("")
    }
}

impl FromStr for CurrencyCode {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bytes = trimmed.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(MoneyError::InvalidCurrencyCode(s.to_string()));
        }
        Ok(Self([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ]))
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CurrencyCode({})", self.as_str())
    }
}

/// A currency and the scale its amounts are expressed at.
///
/// Equality and hashing only look at the code, so two descriptors that
/// disagree on fraction digits still compare equal. Registries are expected
/// to hold one descriptor per code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "CurrencyRepr")]
pub struct Currency {
    code: CurrencyCode,
    fraction_digits: u32,
}

#[derive(Deserialize)]
struct CurrencyRepr {
    code: CurrencyCode,
    fraction_digits: u32,
}

impl TryFrom<CurrencyRepr> for Currency {
    type Error = MoneyError;

    fn try_from(repr: CurrencyRepr) -> Result<Self, Self::Error> {
        Self::with_code(repr.code, repr.fraction_digits)
    }
}

impl Currency {
    /// US Dollar
    pub const USD: Self = Self::known(*b"USD", 2);
    /// Euro
    pub const EUR: Self = Self::known(*b"EUR", 2);
    /// Canadian Dollar
    pub const CAD: Self = Self::known(*b"CAD", 2);
    /// Pound Sterling
    pub const GBP: Self = Self::known(*b"GBP", 2);
    /// Swiss Franc
    pub const CHF: Self = Self::known(*b"CHF", 2);
    /// Singapore Dollar
    pub const SGD: Self = Self::known(*b"SGD", 2);
    /// Japanese Yen
    pub const JPY: Self = Self::known(*b"JPY", 0);
    /// South Korean Won
    pub const KRW: Self = Self::known(*b"KRW", 0);
    /// Indonesian Rupiah
    pub const IDR: Self = Self::known(*b"IDR", 0);
    /// Bahraini Dinar
    pub const BHD: Self = Self::known(*b"BHD", 3);
    /// Kuwaiti Dinar
    pub const KWD: Self = Self::known(*b"KWD", 3);

    /// Every built-in descriptor.
    pub const ISO_DEFAULTS: [Self; 11] = [
        Self::USD,
        Self::EUR,
        Self::CAD,
        Self::GBP,
        Self::CHF,
        Self::SGD,
        Self::JPY,
        Self::KRW,
        Self::IDR,
        Self::BHD,
        Self::KWD,
    ];

    const fn known(code: [u8; 3], fraction_digits: u32) -> Self {
        Self {
            code: CurrencyCode::from_ascii(code),
            fraction_digits,
        }
    }

    /// Creates a descriptor from a textual code.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrencyCode` for malformed codes and
    /// `InvalidFractionDigits` when `fraction_digits` exceeds
    /// [`MAX_FRACTION_DIGITS`].
    pub fn try_new(code: &str, fraction_digits: u32) -> MoneyResult<Self> {
        Self::with_code(code.parse()?, fraction_digits)
    }

    /// Creates a descriptor from an already parsed code.
    pub fn with_code(code: CurrencyCode, fraction_digits: u32) -> MoneyResult<Self> {
        if fraction_digits > MAX_FRACTION_DIGITS {
            return Err(MoneyError::InvalidFractionDigits {
                code,
                digits: fraction_digits,
            });
        }
        Ok(Self {
            code,
            fraction_digits,
        })
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> CurrencyCode {
        self.code
    }

    /// Number of digits kept to the right of the decimal point.
    #[must_use]
    pub const fn fraction_digits(&self) -> u32 {
        self.fraction_digits
    }

    /// The smallest amount representable at this currency's scale.
    #[must_use]
    pub fn minimum_increment(&self) -> Decimal {
        Decimal::new(1, self.fraction_digits)
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.code, f)
    }
}
