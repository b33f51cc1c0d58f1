use serde::{Deserialize, Serialize};
use ulid::Ulid;
use validator::Validate;

use alimento_shared::Result;

/// The locally signed-in account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Validate)]
pub struct SignInInput {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

#[derive(Debug, Validate)]
pub struct SignUpInput {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    #[validate(length(min = 1))]
    pub name: String,
}

/// Demo credential rule: any email containing "test" signs in, and the
/// account name is everything before the "@".
pub fn sign_in(input: SignInInput) -> Result<User> {
    input.validate()?;

    if !input.email.contains("test") {
        alimento_shared::invalid!("Invalid credentials");
    }

    let name = input
        .email
        .split('@')
        .next()
        .unwrap_or_default()
        .to_owned();

    Ok(User {
        id: Ulid::new().to_string(),
        email: input.email,
        name,
    })
}

pub fn sign_up(input: SignUpInput) -> Result<User> {
    input.validate()?;

    Ok(User {
        id: Ulid::new().to_string(),
        email: input.email,
        name: input.name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_needs_a_test_email_and_six_character_password() {
        let user = sign_in(SignInInput {
            email: "test@example.com".to_owned(),
            password: "secret".to_owned(),
        })
        .unwrap();
        assert_eq!(user.name, "test");
        assert_eq!(user.email, "test@example.com");

        let wrong_email = sign_in(SignInInput {
            email: "someone@example.com".to_owned(),
            password: "secret".to_owned(),
        });
        assert!(wrong_email.is_err());

        let short_password = sign_in(SignInInput {
            email: "test@example.com".to_owned(),
            password: "short".to_owned(),
        });
        assert!(short_password.is_err());
    }

    #[test]
    fn sign_up_requires_every_field() {
        let user = sign_up(SignUpInput {
            email: "ada@example.com".to_owned(),
            password: "lovelace".to_owned(),
            name: "Ada".to_owned(),
        })
        .unwrap();
        assert_eq!(user.name, "Ada");
        assert!(!user.id.is_empty());

        let missing_name = sign_up(SignUpInput {
            email: "ada@example.com".to_owned(),
            password: "lovelace".to_owned(),
            name: String::new(),
        });
        assert!(missing_name.is_err());
    }
}
