//! Unit tests for the auth crate

#[cfg(test)]
mod support {
    use std::sync::Arc;

    use crate::application::config::AuthConfig;
    use crate::application::sign_up::{SignUpInput, SignUpUseCase};
    use crate::infra::memory::InMemoryAuthRepository;

    pub const PASSWORD: &str = "correct horse battery";

    pub fn sign_up_input(email: &str) -> SignUpInput {
        SignUpInput {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: email.to_string(),
            phone: "9876543210".to_string(),
            address: "12 MG Road".to_string(),
            password: PASSWORD.to_string(),
        }
    }

    pub async fn registered(email: &str) -> (Arc<InMemoryAuthRepository>, Arc<AuthConfig>) {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = Arc::new(AuthConfig::development());
        SignUpUseCase::new(repo.clone(), config.clone())
            .execute(sign_up_input(email))
            .await
            .unwrap();
        (repo, config)
    }
}

#[cfg(test)]
mod customer_tests {
    use std::sync::Arc;

    use kernel::email::Email;
    use kernel::id::UserId;

    use super::support::{PASSWORD, registered, sign_up_input};
    use crate::application::change_password::{ChangePasswordInput, ChangePasswordUseCase};
    use crate::application::config::AuthConfig;
    use crate::application::sign_in::SignInUseCase;
    use crate::application::sign_up::SignUpUseCase;
    use crate::application::users::{DeleteUserUseCase, ListUsersUseCase};
    use crate::error::AuthError;
    use crate::infra::memory::InMemoryAuthRepository;

    #[tokio::test]
    async fn test_sign_up_normalizes_and_hashes() {
        let (repo, _) = registered("Asha@Example.com").await;

        let email = Email::new("asha@example.com").unwrap();
        let hash = repo.password_hash(&email).await.unwrap();
        assert!(hash.as_phc_string().starts_with("$argon2id$"));
        assert!(!hash.as_phc_string().contains(PASSWORD));
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let (repo, config) = registered("a@example.com").await;

        let err = SignUpUseCase::new(repo, config)
            .execute(sign_up_input("A@EXAMPLE.COM"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[tokio::test]
    async fn test_sign_up_validates_before_store() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let use_case = SignUpUseCase::new(repo.clone(), Arc::new(AuthConfig::development()));

        let mut input = sign_up_input("a@example.com");
        input.first_name = "  ".to_string();
        assert!(matches!(
            use_case.execute(input).await.unwrap_err(),
            AuthError::Validation(_)
        ));

        let mut input = sign_up_input("a@example.com");
        input.password = "short".to_string();
        assert!(matches!(
            use_case.execute(input).await.unwrap_err(),
            AuthError::PasswordValidation(_)
        ));

        assert!(
            ListUsersUseCase::new(repo, Arc::new(AuthConfig::development()))
                .execute()
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_sign_in_failures_are_uniform() {
        let (repo, config) = registered("a@example.com").await;
        let use_case = SignInUseCase::new(repo, config);

        let profile = use_case
            .execute("a@example.com", PASSWORD.to_string())
            .await
            .unwrap();
        assert_eq!(profile.full_name(), "Asha Rao");

        let wrong = use_case
            .execute("a@example.com", "wrong password".to_string())
            .await
            .unwrap_err();
        let unknown = use_case
            .execute("nobody@example.com", PASSWORD.to_string())
            .await
            .unwrap_err();
        assert_eq!(wrong.to_string(), unknown.to_string());
        assert!(matches!(wrong, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_change_password_requires_old_password() {
        let (repo, config) = registered("a@example.com").await;
        let change = ChangePasswordUseCase::new(repo.clone(), config.clone());

        let err = change
            .execute(ChangePasswordInput {
                email: "a@example.com".to_string(),
                old_password: "not the password".to_string(),
                new_password: "a brand new secret".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::OldPasswordMismatch));

        change
            .execute(ChangePasswordInput {
                email: "a@example.com".to_string(),
                old_password: PASSWORD.to_string(),
                new_password: "a brand new secret".to_string(),
            })
            .await
            .unwrap();

        let sign_in = SignInUseCase::new(repo, config);
        assert!(
            sign_in
                .execute("a@example.com", PASSWORD.to_string())
                .await
                .is_err()
        );
        assert!(
            sign_in
                .execute("a@example.com", "a brand new secret".to_string())
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_change_password_for_unknown_user() {
        let (repo, config) = registered("a@example.com").await;

        let err = ChangePasswordUseCase::new(repo, config)
            .execute(ChangePasswordInput {
                email: "b@example.com".to_string(),
                old_password: PASSWORD.to_string(),
                new_password: "a brand new secret".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UserNotFound));
    }

    #[tokio::test]
    async fn test_delete_user() {
        let (repo, config) = registered("a@example.com").await;
        let delete = DeleteUserUseCase::new(repo.clone(), config.clone());

        delete.execute(UserId::from_i64(1)).await.unwrap();
        assert!(matches!(
            delete.execute(UserId::from_i64(1)).await.unwrap_err(),
            AuthError::UserNotFound
        ));
        assert!(
            ListUsersUseCase::new(repo, config)
                .execute()
                .await
                .unwrap()
                .is_empty()
        );
    }
}

#[cfg(test)]
mod admin_tests {
    use std::sync::Arc;

    use super::support::PASSWORD;
    use crate::application::admins::{
        AdminSignInUseCase, CreateAdminUseCase, DeleteAdminUseCase, ListAdminsUseCase,
    };
    use crate::application::config::AuthConfig;
    use crate::error::AuthError;
    use crate::infra::memory::InMemoryAuthRepository;

    #[tokio::test]
    async fn test_unknown_admin_is_rejected_like_wrong_password() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = Arc::new(AuthConfig {
            password_pepper: Some(b"pepper".to_vec()),
            ..AuthConfig::development()
        });
        CreateAdminUseCase::new(repo.clone(), config.clone())
            .execute("root@example.com", PASSWORD.to_string())
            .await
            .unwrap();

        let sign_in = AdminSignInUseCase::new(repo, config);
        let unknown = sign_in
            .execute("ghost@example.com", PASSWORD.to_string())
            .await
            .unwrap_err();
        let wrong = sign_in
            .execute("root@example.com", "not the password".to_string())
            .await
            .unwrap_err();
        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert_eq!(unknown.to_string(), wrong.to_string());
        assert!(
            sign_in
                .execute("root@example.com", PASSWORD.to_string())
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_admin_lifecycle() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = Arc::new(AuthConfig::development());
        let create = CreateAdminUseCase::new(repo.clone(), config.clone());

        let first = create
            .execute("root@example.com", PASSWORD.to_string())
            .await
            .unwrap();
        let second = create
            .execute("ops@example.com", PASSWORD.to_string())
            .await
            .unwrap();
        assert!(matches!(
            create
                .execute("ROOT@example.com", PASSWORD.to_string())
                .await
                .unwrap_err(),
            AuthError::EmailTaken
        ));

        let list = ListAdminsUseCase::new(repo.clone(), config.clone());
        let ids: Vec<_> = list.execute().await.unwrap().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);

        let delete = DeleteAdminUseCase::new(repo.clone(), config.clone());
        delete.execute(first.id).await.unwrap();
        assert!(matches!(
            delete.execute(first.id).await.unwrap_err(),
            AuthError::AdminNotFound
        ));
    }

    #[tokio::test]
    async fn test_admin_sign_in_compares_hash_only() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = Arc::new(AuthConfig::development());
        CreateAdminUseCase::new(repo.clone(), config.clone())
            .execute("root@example.com", PASSWORD.to_string())
            .await
            .unwrap();

        let sign_in = AdminSignInUseCase::new(repo, config);
        let admin = sign_in
            .execute("root@example.com", PASSWORD.to_string())
            .await
            .unwrap();
        assert_eq!(admin.email.as_str(), "root@example.com");

        assert!(matches!(
            sign_in
                .execute("root@example.com", "guess".to_string())
                .await
                .unwrap_err(),
            AuthError::InvalidCredentials
        ));
        assert!(matches!(
            sign_in
                .execute("ghost@example.com", PASSWORD.to_string())
                .await
                .unwrap_err(),
            AuthError::InvalidCredentials
        ));
    }
}

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::support::PASSWORD;
    use crate::application::config::AuthConfig;
    use crate::infra::memory::InMemoryAuthRepository;
    use crate::presentation::router::auth_router_generic;

    fn app(repo: &InMemoryAuthRepository) -> Router {
        auth_router_generic(repo.clone(), AuthConfig::development())
    }

    fn send(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn signup() -> Value {
        json!({
            "firstName": "Asha",
            "lastName": "Rao",
            "email": "asha@example.com",
            "phone": "9876543210",
            "address": "12 MG Road",
            "password": PASSWORD
        })
    }

    #[tokio::test]
    async fn test_signup_login_and_list() {
        let repo = InMemoryAuthRepository::new();

        let response = app(&repo)
            .oneshot(send("POST", "/signup", Some(signup())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["userId"], 1);

        let response = app(&repo)
            .oneshot(send(
                "POST",
                "/login",
                Some(json!({ "email": "ASHA@example.com", "password": PASSWORD })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["loggedInUser"]["name"], "Asha Rao");

        let response = app(&repo).oneshot(send("GET", "/users", None)).await.unwrap();
        let users = json_body(response).await;
        assert_eq!(users[0]["email"], "asha@example.com");
        assert!(users[0].get("passwordHash").is_none());
        assert!(users[0].get("password").is_none());
    }

    #[tokio::test]
    async fn test_duplicate_signup_is_409() {
        let repo = InMemoryAuthRepository::new();
        app(&repo)
            .oneshot(send("POST", "/signup", Some(signup())))
            .await
            .unwrap();

        let response = app(&repo)
            .oneshot(send("POST", "/signup", Some(signup())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_bad_login_is_401() {
        let repo = InMemoryAuthRepository::new();

        let response = app(&repo)
            .oneshot(send(
                "POST",
                "/login",
                Some(json!({ "email": "ghost@example.com", "password": PASSWORD })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(json_body(response).await["detail"], "Invalid email or password");
    }

    #[tokio::test]
    async fn test_admin_routes() {
        let repo = InMemoryAuthRepository::new();

        let response = app(&repo)
            .oneshot(send(
                "POST",
                "/admins",
                Some(json!({ "email": "root@example.com", "password": PASSWORD })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app(&repo)
            .oneshot(send(
                "POST",
                "/admin/login",
                Some(json!({ "email": "root@example.com", "password": PASSWORD })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["admin"]["email"], "root@example.com");
        assert!(body["admin"].get("password").is_none());

        let response = app(&repo)
            .oneshot(send("DELETE", "/admins/99", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
