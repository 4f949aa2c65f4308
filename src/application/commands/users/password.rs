use crate::application::error::{ApplicationError, ApplicationResult};

pub(super) const MIN_PASSWORD_LENGTH: usize = 8;

pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.is_empty() {
        return Err(ApplicationError::field("password", "password is required"));
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApplicationError::field(
            "password",
            format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }

    Ok(())
}
