use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hair {
    pub color: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address: String,
    pub city: String,
    pub state: String,
    pub state_code: String,
    pub postal_code: String,
    pub coordinates: Coordinates,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    pub card_expire: String,
    pub card_number: String,
    pub card_type: String,
    pub currency: String,
    pub iban: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub department: String,
    pub name: String,
    pub title: String,
    pub address: Address,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Crypto {
    pub coin: String,
    pub wallet: String,
    pub network: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// A full user row with all sub-documents materialized as structured values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
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
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub success: bool,
    pub total: usize,
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hair_serializes_with_type_key() {
        let hair = Hair {
            color: "Brown".into(),
            kind: "Curly".into(),
        };
        assert_eq!(
            serde_json::to_value(&hair).unwrap(),
            json!({"color": "Brown", "type": "Curly"})
        );
    }

    #[test]
    fn gender_uses_lowercase_wire_form() {
        assert_eq!(serde_json::to_value(Gender::Female).unwrap(), json!("female"));
        assert_eq!(
            serde_json::from_value::<Gender>(json!("male")).unwrap(),
            Gender::Male
        );
    }

    #[test]
    fn error_envelope_omits_detail_when_absent() {
        let body = serde_json::to_value(ErrorResponse {
            success: false,
            message: "Route not found".into(),
            error: None,
        })
        .unwrap();
        assert_eq!(body, json!({"success": false, "message": "Route not found"}));
    }

    #[test]
    fn address_round_trips_camel_case_keys() {
        let value = json!({
            "address": "626 Main Street",
            "city": "Phoenix",
            "state": "Mississippi",
            "stateCode": "MS",
            "postalCode": "29112",
            "coordinates": {"lat": -77.16213, "lng": -92.084824},
            "country": "United States"
        });
        let address: Address = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(address.state_code, "MS");
        assert_eq!(serde_json::to_value(&address).unwrap(), value);
    }
}
