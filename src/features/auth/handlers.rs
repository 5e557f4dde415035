use crate::core::error::Result;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::types::ApiResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user retrieved successfully", body = ApiResponse<AuthenticatedUser>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_me(user: AuthenticatedUser) -> Result<Json<ApiResponse<AuthenticatedUser>>> {
    Ok(Json(ApiResponse::success(Some(user), None, None)))
}

#[cfg(test)]
mod tests {
    use crate::features::auth::routes;
    use crate::shared::test_helpers::{create_admin_user, with_auth};
    use axum_test::TestServer;

    #[tokio::test]
    async fn me_returns_the_authenticated_user() {
        let user = create_admin_user();
        let app = with_auth(routes::protected_routes(), user.clone());
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/auth/me").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], user.id.to_string());
        assert_eq!(body["data"]["role"], "admin");
    }

    #[tokio::test]
    async fn me_requires_authentication() {
        let server = TestServer::new(routes::protected_routes()).unwrap();

        let response = server.get("/api/auth/me").await;
        response.assert_status_unauthorized();
    }
}
