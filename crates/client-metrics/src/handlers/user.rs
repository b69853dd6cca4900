//! Mock user endpoint.
//!
//! Stands in for an external user service so the instrumented client has
//! something to call during local testing.

use tracing::instrument;

/// Body returned by `GET /user`.
pub const USER_DETAILS: &str = "user details";

/// Handler for GET /user
///
/// Always returns 200 OK with a fixed body. Query parameters are ignored.
#[instrument(skip_all, name = "cm.user.details")]
pub async fn user_details() -> &'static str {
    USER_DETAILS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_user_details_body() {
        assert_eq!(user_details().await, "user details");
    }
}
