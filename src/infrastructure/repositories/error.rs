use crate::domain::{errors::DomainError, slug::SluggedCollection};

const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_POST_AUTHOR: &str = "posts_author_id_fkey";
const CNT_POST_TAG: &str = "post_tags_tag_id_fkey";
const CNT_HOME_PAGE_SINGLETON: &str = "home_page_id_check";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                if let Some(collection) = SluggedCollection::from_slug_index(constraint) {
                    return DomainError::DuplicateSlug(collection);
                }
                return match constraint {
                    CNT_USER_EMAIL => DomainError::Conflict("email already exists".into()),
                    CNT_POST_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_POST_TAG => DomainError::NotFound("tag not found".into()),
                    CNT_HOME_PAGE_SINGLETON => {
                        DomainError::Validation("only one home page may exist".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
