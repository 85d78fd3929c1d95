//! The user store behind the auth endpoints.
//!
//! Handlers only see [`UserStore`]; the diesel implementation hashes
//! passwords with bcrypt before they reach the database.

use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::database::{self, model::user::NewUser, model::user::User};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("An account with this email already exists")]
    DuplicateAccount,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("All fields are required")]
    MissingField(&'static str),

    #[error(transparent)]
    Database(#[from] database::Error),

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

pub trait UserStore: Send + Sync {
    /// Creates a user. Fails with [`StoreError::DuplicateAccount`] if the
    /// email is taken.
    fn register(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Finds the user matching both email and password.
    fn authenticate(&self, email: &str, password: &str) -> Result<User, StoreError>;
}

pub struct DieselUserStore {
    pool: database::Pool,
    hash_cost: u32,
}

impl DieselUserStore {
    pub fn new(pool: database::Pool) -> Self {
        Self {
            pool,
            hash_cost: bcrypt::DEFAULT_COST,
        }
    }

    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }
}

impl UserStore for DieselUserStore {
    fn register(&self, new_user: NewUser) -> Result<User, StoreError> {
        require("name", &new_user.name)?;
        require("email", &new_user.email)?;
        require("phoneNumber", &new_user.phone_number)?;
        require("password", &new_user.password)?;

        let mut conn = self.pool.get().map_err(database::Error::from)?;

        if database::action::user::get_user_by_email(&mut conn, &new_user.email)
            .map_err(database::Error::from)?
            .is_some()
        {
            return Err(StoreError::DuplicateAccount);
        }

        let hash = bcrypt::hash(new_user.password.as_str(), self.hash_cost)?;

        let user = database::action::user::insert_new_user(
            &mut conn,
            &new_user.name,
            &new_user.email,
            &new_user.phone_number,
            &hash,
        )
        .map_err(|err| match err {
            // lost a race with a concurrent registration
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                StoreError::DuplicateAccount
            }
            err => StoreError::Database(err.into()),
        })?;

        log::info!("registered user {}", user.id);

        Ok(user)
    }

    fn authenticate(&self, email: &str, password: &str) -> Result<User, StoreError> {
        require("email", email)?;
        require("password", password)?;

        let mut conn = self.pool.get().map_err(database::Error::from)?;

        let user = database::action::user::get_user_by_email(&mut conn, email)
            .map_err(database::Error::from)?
            .ok_or(StoreError::InvalidCredentials)?;

        if !bcrypt::verify(password, user.password.as_str())? {
            return Err(StoreError::InvalidCredentials);
        }

        Ok(user)
    }
}

fn require(field: &'static str, value: &str) -> Result<(), StoreError> {
    if value.is_empty() {
        return Err(StoreError::MissingField(field));
    }

    Ok(())
}
