//! Authentication endpoints.

use serde_json::{json, Value};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{ApiMessage, LoginResponse, RegisterPayload, User};

pub async fn login(
    client: &ApiClient,
    email: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    client
        .post_json("/login", &json!({ "email": email, "password": password }))
        .await
}

pub async fn register(client: &ApiClient, payload: &RegisterPayload) -> Result<ApiMessage, ApiError> {
    client.post_json("/register", payload).await
}

/// Ask the backend to revoke the current token. Callers treat failure as
/// advisory; the local credential is cleared regardless.
pub async fn logout(client: &ApiClient) -> Result<ApiMessage, ApiError> {
    client.post_empty("/logout").await
}

/// Fetch the authenticated user. The backend has shipped three envelope
/// shapes for this endpoint over time (`{user: …}`, `{data: …}`, and the
/// bare object), so the response is normalized before decoding.
pub async fn profile(client: &ApiClient) -> Result<User, ApiError> {
    let value: Value = client.get_json("/profile", &[]).await?;
    let user = extract_user_value(value);
    serde_json::from_value(user).map_err(|e| ApiError::Decode(e.to_string()))
}

fn extract_user_value(value: Value) -> Value {
    if let Some(user) = value.get("user") {
        return user.clone();
    }
    if let Some(data) = value.get("data") {
        if data.is_object() {
            return data.clone();
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARE: &str = r#"{"id": 3, "name": "Rosa", "email": "rosa@mail.com", "rol": "admin"}"#;

    #[test]
    fn test_profile_envelope_shapes() {
        let bare: Value = serde_json::from_str(BARE).unwrap();
        let wrapped_user: Value = serde_json::from_str(&format!(r#"{{"user": {BARE}}}"#)).unwrap();
        let wrapped_data: Value = serde_json::from_str(&format!(r#"{{"data": {BARE}}}"#)).unwrap();

        for value in [bare, wrapped_user, wrapped_data] {
            let user: User = serde_json::from_value(extract_user_value(value)).unwrap();
            assert_eq!(user.name, "Rosa");
            assert!(user.is_admin());
        }
    }

    #[test]
    fn test_profile_data_array_is_not_a_user() {
        // A `data` array (list envelope) must fall through to the bare value
        // and then fail to decode, not be mistaken for a profile.
        let value: Value = serde_json::from_str(r#"{"data": [1, 2, 3]}"#).unwrap();
        let normalized = extract_user_value(value.clone());
        assert_eq!(normalized, value);
    }
}
