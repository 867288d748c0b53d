pub mod data;
mod schema;

use anyhow::Context;
use serde::Serialize;
use serde_json::Value;
use sqlx::{ConnectOptions, Connection, MySql, MySqlConnection, QueryBuilder};
use tracing::{error, info, warn};

use crate::config::DbConfig;
use data::SeedUser;

/// Best-effort bootstrap: any failure is logged and absorbed so the service
/// can still start. This is the only place errors are swallowed.
pub async fn run_best_effort(db: &DbConfig) {
    match run(db).await {
        Ok(0) => info!("seed finished, nothing to insert"),
        Ok(inserted) => info!(inserted, "seed finished"),
        Err(err) => error!(error = ?err, "seed failed, continuing startup"),
    }
}

async fn run(db: &DbConfig) -> anyhow::Result<u64> {
    let mut conn = db
        .server_options()
        .connect()
        .await
        .context("connect to database server")?;
    schema::ensure_database(&mut conn, &db.name).await?;
    conn.close().await.ok();

    let mut conn = db
        .connect_options()
        .connect()
        .await
        .with_context(|| format!("connect to database {}", db.name))?;
    schema::ensure_users_table(&mut conn).await?;

    let users = data::users()?;
    let inserted = import(&mut conn, &users).await;
    conn.close().await.ok();
    inserted
}

/// Why an import run inserted nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipReason {
    AlreadySeeded,
    EmptyDataset,
}

/// The count guard: existing rows win over the dataset, and an empty dataset
/// has nothing to insert. Full-skip-or-full-insert, not an upsert.
fn should_skip(existing: i64, dataset_len: usize) -> Option<SkipReason> {
    if existing > 0 {
        Some(SkipReason::AlreadySeeded)
    } else if dataset_len == 0 {
        Some(SkipReason::EmptyDataset)
    } else {
        None
    }
}

/// Insert the dataset unless the count guard says otherwise. Re-runs against
/// a populated table are a successful no-op.
pub async fn import(conn: &mut MySqlConnection, users: &[SeedUser]) -> anyhow::Result<u64> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&mut *conn)
        .await
        .context("count existing users")?;
    match should_skip(existing, users.len()) {
        Some(SkipReason::AlreadySeeded) => {
            info!(existing, "users already present, skipping seed");
            return Ok(0);
        }
        Some(SkipReason::EmptyDataset) => {
            warn!("user dataset is empty, skipping seed");
            return Ok(0);
        }
        None => {}
    }

    let mut qb: QueryBuilder<MySql> = QueryBuilder::new(
        "INSERT INTO users (firstName, lastName, maidenName, age, gender, email, phone, \
         username, password, birthDate, image, bloodGroup, height, weight, eyeColor, hair, \
         ip, address, macAddress, university, bank, company, ein, ssn, userAgent, crypto, role) ",
    );
    qb.push_values(users, |mut b, user| {
        b.push_bind(&user.first_name)
            .push_bind(&user.last_name)
            .push_bind(&user.maiden_name)
            .push_bind(user.age)
            .push_bind(user.gender)
            .push_bind(&user.email)
            .push_bind(&user.phone)
            .push_bind(&user.username)
            .push_bind(&user.password)
            .push_bind(&user.birth_date)
            .push_bind(&user.image)
            .push_bind(&user.blood_group)
            .push_bind(user.height)
            .push_bind(user.weight)
            .push_bind(&user.eye_color)
            .push_bind(as_json(&user.hair))
            .push_bind(&user.ip)
            .push_bind(as_json(&user.address))
            .push_bind(&user.mac_address)
            .push_bind(&user.university)
            .push_bind(as_json(&user.bank))
            .push_bind(as_json(&user.company))
            .push_bind(&user.ein)
            .push_bind(&user.ssn)
            .push_bind(&user.user_agent)
            .push_bind(as_json(&user.crypto))
            .push_bind(&user.role);
    });

    let result = qb
        .build()
        .execute(&mut *conn)
        .await
        .context("bulk insert users")?;
    Ok(result.rows_affected())
}

/// Serialize a sub-document for a JSON column; absent maps to SQL NULL.
fn as_json<T: Serialize>(field: &Option<T>) -> Option<Value> {
    field.as_ref().and_then(|v| serde_json::to_value(v).ok())
}
