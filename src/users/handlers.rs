use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::{error, info, instrument};

use crate::error::ApiError;
use crate::state::AppState;

use super::dto::{ErrorResponse, UsersResponse};

/// GET /users
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<UsersResponse>, ApiError> {
    let users = state.store.list_users().await.map_err(|e| {
        error!(error = %e, "fetching users failed");
        ApiError::from_store_error(e, state.env)
    })?;

    info!(total = users.len(), "users fetched");
    Ok(Json(UsersResponse {
        success: true,
        total: users.len(),
        users,
    }))
}

/// Uniform envelope for any unmatched route.
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            message: "Route not found".into(),
            error: None,
        }),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::config::Environment;
    use crate::users::dto::User;
    use crate::users::repo::UserStore;

    struct FixedStore(Vec<User>);

    #[async_trait]
    impl UserStore for FixedStore {
        async fn list_users(&self) -> anyhow::Result<Vec<User>> {
            Ok(self.0.clone())
        }
    }

    struct UnreachableStore;

    #[async_trait]
    impl UserStore for UnreachableStore {
        async fn list_users(&self) -> anyhow::Result<Vec<User>> {
            let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
            Err(anyhow::Error::new(sqlx::Error::Io(io)).context("failed to fetch users"))
        }
    }

    fn sample_user(id: i32, first: &str, last: &str, email: &str) -> User {
        User {
            id,
            first_name: first.into(),
            last_name: last.into(),
            maiden_name: None,
            age: None,
            gender: None,
            email: email.into(),
            phone: None,
            username: None,
            password: None,
            birth_date: None,
            image: None,
            blood_group: None,
            height: None,
            weight: None,
            eye_color: None,
            hair: None,
            ip: None,
            address: None,
            mac_address: None,
            university: None,
            bank: None,
            company: None,
            ein: None,
            ssn: None,
            user_agent: None,
            crypto: None,
            role: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn state_with(store: Arc<dyn UserStore>) -> AppState {
        AppState {
            store,
            env: Environment::Development,
        }
    }

    #[tokio::test]
    async fn list_users_wraps_rows_in_success_envelope() {
        let users = vec![
            sample_user(1, "Emily", "Johnson", "emily.johnson@x.dummyjson.com"),
            sample_user(2, "Michael", "Williams", "michael.williams@x.dummyjson.com"),
        ];
        let state = state_with(Arc::new(FixedStore(users)));

        let Json(body) = list_users(State(state)).await.expect("handler should succeed");
        assert!(body.success);
        assert_eq!(body.total, 2);
        let ids: Vec<i32> = body.users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn list_users_with_empty_table_reports_zero_total() {
        let state = state_with(Arc::new(FixedStore(Vec::new())));
        let Json(body) = list_users(State(state)).await.expect("handler should succeed");
        assert!(body.success);
        assert_eq!(body.total, 0);
        assert!(body.users.is_empty());
    }

    #[tokio::test]
    async fn unreachable_store_answers_500_with_failure_envelope() {
        use axum::response::IntoResponse;

        let state = state_with(Arc::new(UnreachableStore));
        let err = list_users(State(state)).await.expect_err("handler should fail");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn unmatched_routes_get_the_not_found_envelope() {
        let (status, Json(body)) = not_found().await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.success);
        assert_eq!(body.message, "Route not found");
        assert!(body.error.is_none());
    }
}
