use serde::{Deserialize, Serialize};

use banking_core::ProductCode;

/// Well-known specific product codes.
pub mod codes {
    /// Business current account.
    pub const CURRENT_ACCOUNT: &str = "CTA-CRT";
    /// Business credit.
    pub const BUSINESS_CREDIT: &str = "CRE-EMP";
    /// Credit card.
    pub const CREDIT_CARD: &str = "CRE-TRJ";
}

/// Coarse product category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductType {
    /// Checking-style deposit account.
    Checking,
    /// Credit-bearing product.
    Credit,
    Unrecognized(String),
}

impl ProductType {
    pub const CHECKING_CODE: &'static str = "CBA";
    pub const CREDIT_CODE: &'static str = "CRE";

    pub fn from_code(code: &str) -> Self {
        match code {
            Self::CHECKING_CODE => Self::Checking,
            Self::CREDIT_CODE => Self::Credit,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Checking => Self::CHECKING_CODE,
            Self::Credit => Self::CREDIT_CODE,
            Self::Unrecognized(code) => code,
        }
    }
}

impl From<String> for ProductType {
    fn from(value: String) -> Self {
        Self::from_code(&value)
    }
}

impl From<ProductType> for String {
    fn from(value: ProductType) -> Self {
        value.code().to_string()
    }
}

impl core::fmt::Display for ProductType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

/// Product record as returned by the product service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub code: ProductCode,
    pub product_type: ProductType,
    pub name: String,
}

impl Product {
    pub fn new(code: ProductCode, product_type: ProductType, name: impl Into<String>) -> Self {
        Self {
            code,
            product_type,
            name: name.into(),
        }
    }

    /// Whether this is the business current account product.
    pub fn is_current_account(&self) -> bool {
        self.code == codes::CURRENT_ACCOUNT
    }

    /// Whether a business client may take this credit product.
    pub fn is_business_credit_eligible(&self) -> bool {
        self.code == codes::BUSINESS_CREDIT || self.code == codes::CREDIT_CARD
    }
}
