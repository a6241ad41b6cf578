//! # Settings Commands
//!
//! The change-password form. Only the form rules are enforced; there is no
//! credential store behind it.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use schoolcart_core::validation::validate_password_change;

use crate::error::ApiError;

/// Change-password form fields.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

// Keep passwords out of logs.
impl std::fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordChange").finish_non_exhaustive()
    }
}

/// Checks the form: all fields filled, new password at least 8 characters,
/// confirmation matching.
pub fn change_password(form: &PasswordChange) -> Result<(), ApiError> {
    debug!("change_password command");

    validate_password_change(&form.current, &form.new, &form.confirm)?;

    info!("Password change accepted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn form(current: &str, new: &str, confirm: &str) -> PasswordChange {
        PasswordChange {
            current: current.to_string(),
            new: new.to_string(),
            confirm: confirm.to_string(),
        }
    }

    #[test]
    fn test_valid_change() {
        assert!(change_password(&form("old-secret", "new-secret", "new-secret")).is_ok());
    }

    #[test]
    fn test_rejections() {
        let err = change_password(&form("", "new-secret", "new-secret")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = change_password(&form("old-secret", "short", "short")).unwrap_err();
        assert_eq!(err.message, "new password must be at least 8 characters");

        let err = change_password(&form("old-secret", "new-secret", "new-secrex")).unwrap_err();
        assert_eq!(err.message, "password confirmation does not match new password");
    }

    #[test]
    fn test_debug_hides_passwords() {
        let printed = format!("{:?}", form("old-secret", "new-secret", "new-secret"));
        assert!(!printed.contains("secret"));
    }
}
