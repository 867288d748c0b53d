use anyhow::Context;
use serde::Deserialize;

use crate::users::dto::{Address, Bank, Company, Crypto, Gender, Hair};

/// One record of the bundled dataset. Shaped like a `User` minus the
/// store-assigned columns (id, createdAt, updatedAt).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedUser {
    pub first_name: String,
    pub last_name: String,
    pub maiden_name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub email: String,
    pub phone: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub birth_date: Option<String>,
    pub image: Option<String>,
    pub blood_group: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub eye_color: Option<String>,
    pub hair: Option<Hair>,
    pub ip: Option<String>,
    pub address: Option<Address>,
    pub mac_address: Option<String>,
    pub university: Option<String>,
    pub bank: Option<Bank>,
    pub company: Option<Company>,
    pub ein: Option<String>,
    pub ssn: Option<String>,
    pub user_agent: Option<String>,
    pub crypto: Option<Crypto>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SeedData {
    users: Vec<SeedUser>,
}

const USERS_JSON: &str = include_str!("users.json");

pub fn users() -> anyhow::Result<Vec<SeedUser>> {
    let data: SeedData =
        serde_json::from_str(USERS_JSON).context("parse bundled user dataset")?;
    Ok(data.users)
}
