use diesel::prelude::*;

use crate::db::models::auth::{NewUser, NewUserCredential, User, UserCredential};

pub struct AuthRepo;

impl AuthRepo {
    pub fn find_by_id(
        conn: &mut PgConnection,
        user_id: uuid::Uuid,
    ) -> Result<Option<User>, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        users
            .filter(id.eq(user_id))
            .filter(is_active.eq(true))
            .select(User::as_select())
            .first(conn)
            .optional()
    }

    pub fn find_by_email(
        conn: &mut PgConnection,
        user_email: &str,
    ) -> Result<Option<User>, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        users
            .filter(email.eq(user_email))
            .filter(is_active.eq(true))
            .select(User::as_select())
            .first(conn)
            .optional()
    }

    pub fn exists_by_email(
        conn: &mut PgConnection,
        user_email: &str,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        diesel::select(diesel::dsl::exists(users.filter(email.eq(user_email)))).get_result(conn)
    }

    pub fn exists_by_username(
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        diesel::select(diesel::dsl::exists(users.filter(username.eq(name)))).get_result(conn)
    }

    pub fn insert_user(
        conn: &mut PgConnection,
        new_user: &NewUser,
    ) -> Result<User, diesel::result::Error> {
        diesel::insert_into(crate::schema::users::table)
            .values(new_user)
            .get_result(conn)
    }

    pub fn insert_credential(
        conn: &mut PgConnection,
        new_credential: &NewUserCredential,
    ) -> Result<usize, diesel::result::Error> {
        diesel::insert_into(crate::schema::user_credentials::table)
            .values(new_credential)
            .execute(conn)
    }

    pub fn find_primary_credential(
        conn: &mut PgConnection,
        owner: uuid::Uuid,
    ) -> Result<Option<UserCredential>, diesel::result::Error> {
        use crate::schema::user_credentials::dsl::*;
        user_credentials
            .filter(user_id.eq(owner))
            .filter(is_primary.eq(true))
            .select(UserCredential::as_select())
            .first(conn)
            .optional()
    }
}
