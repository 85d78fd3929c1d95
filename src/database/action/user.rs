use diesel::prelude::*;
use uuid::Uuid;

use crate::database::model::user::User;

pub fn insert_new_user(
    conn: &mut SqliteConnection,
    new_name: &str,
    new_email: &str,
    new_phone_number: &str,
    new_password: &str,
) -> QueryResult<User> {
    use crate::database::schema::users::dsl::*;

    let new_user = User {
        id: Uuid::new_v4().to_string(),
        name: new_name.to_string(),
        email: new_email.to_string(),
        phone_number: new_phone_number.to_string(),
        password: new_password.to_string(),
    };

    diesel::insert_into(users).values(&new_user).execute(conn)?;

    Ok(new_user)
}

pub fn get_user_by_email(conn: &mut SqliteConnection, email: &str) -> QueryResult<Option<User>> {
    use crate::database::schema::users::dsl::{email as email_column, users};

    users
        .filter(email_column.eq(email))
        .first::<User>(conn)
        .optional()
}
