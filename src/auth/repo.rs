use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// User record in the `logindata` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub firstname: String,
    pub lastname: String,
}

impl User {
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, firstname, lastname
            FROM logindata
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, firstname, lastname
            FROM logindata
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn create(
        db: &PgPool,
        email: &str,
        password_hash: &str,
        firstname: &str,
        lastname: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO logindata (email, password_hash, firstname, lastname)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password_hash, firstname, lastname
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(firstname)
        .bind(lastname)
        .fetch_one(db)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_json_never_contains_password_hash() {
        let user = User {
            id: 1,
            email: "alice@example.com".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            firstname: "Alice".into(),
            lastname: "A".into(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2"));
        assert!(json.contains("alice@example.com"));
        assert!(json.contains("Alice"));
    }
}
