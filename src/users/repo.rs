use anyhow::Context;
use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::mysql::MySqlRow;
use sqlx::types::Decimal;
use sqlx::{MySqlPool, Row};

use super::dto::{Address, Bank, Company, Crypto, Hair, User};
use super::json::JsonField;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users, ordered by ascending id.
    async fn list_users(&self) -> anyhow::Result<Vec<User>>;
}

pub struct MySqlUserStore {
    pool: MySqlPool,
}

impl MySqlUserStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for MySqlUserStore {
    async fn list_users(&self) -> anyhow::Result<Vec<User>> {
        let rows = sqlx::query("SELECT * FROM users ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .context("failed to fetch users")?;

        rows.into_iter().map(user_from_row).collect()
    }
}

fn user_from_row(row: MySqlRow) -> anyhow::Result<User> {
    Ok(User {
        id: row.try_get("id")?,
        first_name: row.try_get("firstName")?,
        last_name: row.try_get("lastName")?,
        maiden_name: row.try_get("maidenName")?,
        age: row.try_get("age")?,
        gender: row.try_get("gender")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        username: row.try_get("username")?,
        password: row.try_get("password")?,
        birth_date: row.try_get("birthDate")?,
        image: row.try_get("image")?,
        blood_group: row.try_get("bloodGroup")?,
        height: decimal_column(&row, "height")?,
        weight: decimal_column(&row, "weight")?,
        eye_color: row.try_get("eyeColor")?,
        hair: json_column::<Hair>(&row, "hair"),
        ip: row.try_get("ip")?,
        address: json_column::<Address>(&row, "address"),
        mac_address: row.try_get("macAddress")?,
        university: row.try_get("university")?,
        bank: json_column::<Bank>(&row, "bank"),
        company: json_column::<Company>(&row, "company"),
        ein: row.try_get("ein")?,
        ssn: row.try_get("ssn")?,
        user_agent: row.try_get("userAgent")?,
        crypto: json_column::<Crypto>(&row, "crypto"),
        role: row.try_get("role")?,
        created_at: row.try_get("createdAt")?,
        updated_at: row.try_get("updatedAt")?,
    })
}

fn decimal_column(row: &MySqlRow, column: &str) -> anyhow::Result<Option<f64>> {
    let value: Option<Decimal> = row.try_get(column)?;
    Ok(value.and_then(|d| d.to_f64()))
}

/// Read one JSON-typed column, classifying it as parsed, raw text or absent
/// before resolving. Malformed sub-documents become None, never an error.
fn json_column<T: DeserializeOwned>(row: &MySqlRow, column: &str) -> Option<T> {
    let field = match row.try_get::<Option<Value>, _>(column) {
        Ok(value) => JsonField::from_column(value),
        // Column did not decode as JSON; retry as text for drivers or
        // schemas that hand the document back as a plain string.
        Err(_) => match row.try_get::<Option<String>, _>(column) {
            Ok(Some(text)) => JsonField::Raw(text),
            _ => JsonField::Absent,
        },
    };
    field.resolve_as()
}
