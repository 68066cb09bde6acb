use serde::{Deserialize, Serialize};

use banking_core::ClientCode;

/// Category of the account holder.
///
/// Codes outside the known set are kept as `Unrecognized` so the provisioning
/// rules can reject them explicitly instead of failing to load the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClientType {
    Personal,
    Business,
    Unrecognized(String),
}

impl ClientType {
    pub const PERSONAL_CODE: &'static str = "PER";
    pub const BUSINESS_CODE: &'static str = "EMP";

    pub fn from_code(code: &str) -> Self {
        match code {
            Self::PERSONAL_CODE => Self::Personal,
            Self::BUSINESS_CODE => Self::Business,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Personal => Self::PERSONAL_CODE,
            Self::Business => Self::BUSINESS_CODE,
            Self::Unrecognized(code) => code,
        }
    }
}

impl From<String> for ClientType {
    fn from(value: String) -> Self {
        Self::from_code(&value)
    }
}

impl From<ClientType> for String {
    fn from(value: ClientType) -> Self {
        value.code().to_string()
    }
}

impl core::fmt::Display for ClientType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

/// Client record as returned by the client service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub code: ClientCode,
    pub client_type: ClientType,
    pub name: String,
}

impl Client {
    pub fn new(code: ClientCode, client_type: ClientType, name: impl Into<String>) -> Self {
        Self {
            code,
            client_type,
            name: name.into(),
        }
    }

    pub fn is_business(&self) -> bool {
        self.client_type == ClientType::Business
    }
}
