use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Ephemeral presence record; lives in the cache under its channel key and
/// expires five days after the last write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub username: String,
    pub fullname: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterParticipant {
    pub username: Option<String>,
    pub fullname: Option<String>,
    pub email: Option<String>,
}

impl RegisterParticipant {
    pub fn validate(self) -> Result<Participant, AppError> {
        let fullname = self
            .fullname
            .ok_or_else(|| AppError::BadRequest(super::MSG_FULLNAME_EMPTY.into()))?;
        let username = self
            .username
            .ok_or_else(|| AppError::BadRequest(super::MSG_USERNAME_EMPTY.into()))?;
        let email = self
            .email
            .ok_or_else(|| AppError::BadRequest(super::MSG_EMAIL_EMPTY.into()))?;

        Ok(Participant {
            username,
            fullname,
            email,
        })
    }
}
