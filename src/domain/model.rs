use crate::utils::error::Result;
use crate::utils::validation::{validate_header_safe, Validate};
use serde::{Deserialize, Deserializer, Serialize};

/// 訪客在聯絡表單填寫的內容，只存活於單次請求
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub message: String,
}

// 表單送出 null 時與缺欄位一樣視為空字串
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

impl Validate for ContactSubmission {
    /// Only the header-bound fields are checked; empty values pass through.
    fn validate(&self) -> Result<()> {
        validate_header_safe("name", &self.name)?;
        validate_header_safe("email", &self.email)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub sender_name: String,
    pub sender_email: String,
    pub reply_to: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
}

impl ContactResponse {
    pub fn success() -> Self {
        Self { success: true }
    }

    pub fn failure() -> Self {
        Self { success: false }
    }
}
