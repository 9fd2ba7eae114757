//! User request models.

use serde::Serialize;

use crate::error::ClientError;

/// Fields accepted by `PUT /api/users/{id}`. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl UserUpdate {
    /// Grafana needs a login or an email to identify the updated account.
    pub fn validate(&self) -> Result<(), ClientError> {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        if present(&self.login) || present(&self.email) {
            Ok(())
        } else {
            Err(ClientError::ValidationError(
                "Login or email must be filled.".to_string(),
            ))
        }
    }
}
