//! Order number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`OrderNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderNumberError {
    /// The input is empty or contains only whitespace.
    #[error("order number cannot be empty")]
    Empty,
}

/// An order number as typed by a customer.
///
/// The original text is kept verbatim so it can be forwarded upstream
/// exactly as entered. Matching against upstream records goes through
/// [`OrderNumber::normalized`], which is case- and whitespace-insensitive.
///
/// ## Examples
///
/// ```
/// use brand_hangar_core::OrderNumber;
///
/// let number = OrderNumber::parse(" ORD-100 ").unwrap();
/// assert_eq!(number.as_str(), " ORD-100 ");
/// assert_eq!(number.normalized(), "ord-100");
///
/// assert!(OrderNumber::parse("").is_err());
/// assert!(OrderNumber::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Parse an `OrderNumber` from user input.
    ///
    /// # Errors
    ///
    /// Returns [`OrderNumberError::Empty`] if the input is empty or blank.
    pub fn parse(s: &str) -> Result<Self, OrderNumberError> {
        if s.trim().is_empty() {
            return Err(OrderNumberError::Empty);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the order number exactly as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `OrderNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns the comparison key for this order number.
    #[must_use]
    pub fn normalized(&self) -> String {
        normalize(&self.0)
    }

    /// Whether an upstream order number refers to the same order.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        normalize(candidate) == self.normalized()
    }
}

/// Trim surrounding whitespace and lowercase.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OrderNumber {
    type Err = OrderNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for OrderNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
