use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult, FieldError, FieldErrorKind},
    },
    domain::{
        errors::DomainError,
        user::{Email, NewUser, PasswordHash, UserName},
    },
};

pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let name = UserName::new(command.name)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser {
            name,
            email,
            password_hash,
            created_at: self.clock.now(),
        };

        let user = self
            .user_repo
            .insert(new_user)
            .await
            .map_err(|err| match err {
                DomainError::Conflict(_) => ApplicationError::Field(FieldError::new(
                    "email",
                    "email is already registered",
                    FieldErrorKind::Conflict,
                )),
                other => other.into(),
            })?;

        tracing::info!(user_id = user.id.0, "user registered");
        Ok(user.into())
    }
}
