use anyhow::Context;
use sqlx::{Executor, MySqlConnection};

const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INT AUTO_INCREMENT PRIMARY KEY,
    firstName VARCHAR(100) NOT NULL,
    lastName VARCHAR(100) NOT NULL,
    maidenName VARCHAR(100),
    age INT,
    gender ENUM('male', 'female', 'other'),
    email VARCHAR(255) UNIQUE NOT NULL,
    phone VARCHAR(50),
    username VARCHAR(100) UNIQUE,
    password VARCHAR(255),
    birthDate VARCHAR(50),
    image VARCHAR(500),
    bloodGroup VARCHAR(10),
    height DECIMAL(8,2),
    weight DECIMAL(8,2),
    eyeColor VARCHAR(50),
    hair JSON,
    ip VARCHAR(45),
    address JSON,
    macAddress VARCHAR(50),
    university VARCHAR(255),
    bank JSON,
    company JSON,
    ein VARCHAR(50),
    ssn VARCHAR(50),
    userAgent VARCHAR(500),
    crypto JSON,
    role VARCHAR(100),
    createdAt TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updatedAt TIMESTAMP DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
    INDEX idx_email (email),
    INDEX idx_username (username),
    INDEX idx_role (role)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci
"#;

/// `CREATE DATABASE IF NOT EXISTS` on a server-level connection. The name is
/// an identifier, not a bindable value, so it is backtick-quoted.
pub async fn ensure_database(conn: &mut MySqlConnection, name: &str) -> anyhow::Result<()> {
    let quoted = name.replace('`', "``");
    conn.execute(format!("CREATE DATABASE IF NOT EXISTS `{quoted}`").as_str())
        .await
        .with_context(|| format!("create database {name}"))?;
    Ok(())
}

pub async fn ensure_users_table(conn: &mut MySqlConnection) -> anyhow::Result<()> {
    conn.execute(CREATE_USERS_TABLE)
        .await
        .context("create users table")?;
    Ok(())
}
