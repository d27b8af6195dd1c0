use crate::domain::models::account::Account;
use crate::infrastructure::databases::surrealdb::Database;
use ::surrealdb::sql::Thing;

/// Inserts an account hashed by SurrealDB's own argon2 and returns it with
/// the plaintext password.
pub async fn seed_account(conn: &Database) -> Account {
    let thing: Option<Thing> = conn
        .query(
            r#"
            LET $account = (CREATE account CONTENT {
                name: $name,
                email: $email,
                password: crypto::argon2::generate($password)
            });
            RETURN $account[0].id;
            "#,
        )
        .bind(("name", "Test Account"))
        .bind(("email", "test_account@email.com"))
        .bind(("password", "stR0ngP4ssw0rd!"))
        .await
        .unwrap()
        .take(1)
        .unwrap();

    Account {
        id: thing.unwrap().id.to_raw(),
        name: "Test Account".to_string(),
        email: "test_account@email.com".to_string(),
        password: "stR0ngP4ssw0rd!".to_string(),
    }
}

pub async fn count_accounts(conn: &Database, email: &str) -> usize {
    let ids: Vec<Thing> = conn
        .query("SELECT VALUE id FROM account WHERE email = $email")
        .bind(("email", email.to_owned()))
        .await
        .unwrap()
        .take(0)
        .unwrap();

    ids.len()
}

pub async fn stored_password(conn: &Database, email: &str) -> Option<String> {
    conn.query("(SELECT VALUE password FROM account WHERE email = $email LIMIT 1)[0]")
        .bind(("email", email.to_owned()))
        .await
        .unwrap()
        .take(0)
        .unwrap()
}
