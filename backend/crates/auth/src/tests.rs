//! Unit tests for Auth crate
//! Use cases and routers run against the in-memory account store in
//! `crate::testing`.

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use chrono::{Duration, Utc};
    use kernel::id::AccountId;
    use kernel::pagination::{PageRequest, SearchTerm};

    use crate::testing::InMemoryAccountRepository;
    use crate::application::*;
    use crate::error::AuthError;

    fn register_input(name: &str, username: &str, password: &str) -> RegisterInput {
        RegisterInput {
            name: name.to_string(),
            phone: "555-0100".to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let repo = Arc::new(InMemoryAccountRepository::default());
        let config = Arc::new(AuthConfig::new(b"test-secret"));

        let account = RegisterUseCase::new(repo.clone())
            .execute(register_input("Alice", "alice", "correct horse"))
            .await
            .unwrap();
        assert_eq!(account.id, AccountId::new(1));
        assert_ne!(account.password.as_phc_string(), "correct horse");

        let output = SignInUseCase::new(repo.clone(), config.clone())
            .execute(SignInInput {
                username: "alice".into(),
                password: "correct horse".into(),
            })
            .await
            .unwrap();
        assert_eq!(output.account.id, account.id);

        let claims = CheckTokenUseCase::new(config).execute(&output.token).unwrap();
        assert_eq!(claims.account_username, "alice");
        assert!(claims.expires_at > claims.iat);
    }

    #[tokio::test]
    async fn test_register_rejects_overlong_password() {
        let repo = Arc::new(InMemoryAccountRepository::default());

        let err = RegisterUseCase::new(repo.clone())
            .execute(register_input("Long", "long", &"x".repeat(73)))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::PasswordPolicy(_)));
        assert_eq!(err.status_code(), 400);
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_register_duplicate_username_conflicts() {
        let repo = Arc::new(InMemoryAccountRepository::default());
        let use_case = RegisterUseCase::new(repo.clone());

        use_case
            .execute(register_input("Alice", "alice", "pw"))
            .await
            .unwrap();
        let err = use_case
            .execute(register_input("Alice 2", "alice", "pw"))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 409);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_login_unknown_username() {
        let repo = Arc::new(InMemoryAccountRepository::default());
        let config = Arc::new(AuthConfig::development());

        let err = SignInUseCase::new(repo, config)
            .execute(SignInInput {
                username: "ghost".into(),
                password: "pw".into(),
            })
            .await
            .err()
            .unwrap();

        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "Account with username [ghost] not found");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let repo = Arc::new(InMemoryAccountRepository::default());
        let config = Arc::new(AuthConfig::development());

        RegisterUseCase::new(repo.clone())
            .execute(register_input("Bob", "bob", "right"))
            .await
            .unwrap();

        let overlong = "right".repeat(20);
        for attempt in ["wrong", "", overlong.as_str()] {
            let err = SignInUseCase::new(repo.clone(), config.clone())
                .execute(SignInInput {
                    username: "bob".into(),
                    password: attempt.to_string(),
                })
                .await
                .err()
                .unwrap();
            assert!(matches!(err, AuthError::InvalidCredentials), "{attempt}");
            assert_eq!(err.status_code(), 401);
        }
    }

    #[tokio::test]
    async fn test_token_from_other_secret_is_denied() {
        let repo = Arc::new(InMemoryAccountRepository::default());
        let account = RegisterUseCase::new(repo)
            .execute(register_input("Carol", "carol", "pw"))
            .await
            .unwrap();

        let token = IssueTokenUseCase::new(Arc::new(AuthConfig::new(b"one")))
            .execute(&account)
            .unwrap();

        let check = CheckTokenUseCase::new(Arc::new(AuthConfig::new(b"two")));
        assert!(matches!(check.execute(&token), Err(AuthError::PermissionDenied)));
    }

    #[tokio::test]
    async fn test_altered_token_is_denied() {
        let repo = Arc::new(InMemoryAccountRepository::default());
        let config = Arc::new(AuthConfig::new(b"secret"));
        let account = RegisterUseCase::new(repo)
            .execute(register_input("Dave", "dave", "pw"))
            .await
            .unwrap();

        let token = IssueTokenUseCase::new(config.clone())
            .execute(&account)
            .unwrap();
        let mut tampered = token.clone().into_bytes();
        let last = tampered.len() - 2;
        tampered[last] = if tampered[last] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(tampered).unwrap();

        let check = CheckTokenUseCase::new(config);
        assert!(check.execute(&token).is_ok());
        assert!(check.execute(&tampered).is_err());
        assert!(check.execute("not-a-token").is_err());
    }

    #[tokio::test]
    async fn test_token_expires_after_ttl() {
        let repo = Arc::new(InMemoryAccountRepository::default());
        let config = Arc::new(
            AuthConfig::new(b"secret").with_token_ttl(std::time::Duration::from_secs(3600)),
        );
        let account = RegisterUseCase::new(repo)
            .execute(register_input("Erin", "erin", "pw"))
            .await
            .unwrap();

        let issued = Utc::now();
        let token = IssueTokenUseCase::new(config.clone())
            .execute_at(&account, issued)
            .unwrap();

        let check = CheckTokenUseCase::new(config);
        assert!(check.execute_at(&token, issued + Duration::minutes(59)).is_ok());
        assert!(matches!(
            check.execute_at(&token, issued + Duration::hours(1)),
            Err(AuthError::PermissionDenied)
        ));
    }

    #[tokio::test]
    async fn test_update_rehashes_and_keeps_identity() {
        let repo = Arc::new(InMemoryAccountRepository::default());
        let config = Arc::new(AuthConfig::development());
        let created = RegisterUseCase::new(repo.clone())
            .execute(register_input("Frank", "frank", "old-pw"))
            .await
            .unwrap();

        ManageAccountUseCase::new(repo.clone())
            .update(
                created.id,
                UpdateAccountInput {
                    name: "Franklin".into(),
                    phone: "555-0199".into(),
                    password: "new-pw".into(),
                },
            )
            .await
            .unwrap();

        let stored = repo.get(1).await.unwrap();
        assert_eq!(stored.name, "Franklin");
        assert_eq!(stored.phone, "555-0199");
        assert_eq!(stored.username, "frank");
        assert_eq!(stored.created_at, created.created_at);

        let sign_in = SignInUseCase::new(repo.clone(), config);
        let old = sign_in
            .execute(SignInInput {
                username: "frank".into(),
                password: "old-pw".into(),
            })
            .await;
        assert!(matches!(old, Err(AuthError::InvalidCredentials)));
        let new = sign_in
            .execute(SignInInput {
                username: "frank".into(),
                password: "new-pw".into(),
            })
            .await;
        assert!(new.is_ok());
    }

    #[tokio::test]
    async fn test_missing_account_is_not_found() {
        let repo = Arc::new(InMemoryAccountRepository::default());
        let manage = ManageAccountUseCase::new(repo);
        let id = AccountId::new(42);

        let err = manage.get(id).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "Account with id [42] not found");

        let err = manage
            .update(
                id,
                UpdateAccountInput {
                    name: String::new(),
                    phone: String::new(),
                    password: "pw".into(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::AccountNotFound(_)));

        let err = manage.delete(id).await.unwrap_err();
        assert!(matches!(err, AuthError::AccountNotFound(_)));
    }

    #[tokio::test]
    async fn test_list_search_and_paginate() {
        let repo = Arc::new(InMemoryAccountRepository::default());
        let register = RegisterUseCase::new(repo.clone());
        for (i, name) in ["John", "Amy", "josephine", "Mojo", "Zed"].iter().enumerate() {
            register
                .execute(register_input(name, &format!("user{i}"), "pw"))
                .await
                .unwrap();
        }
        let manage = ManageAccountUseCase::new(repo);

        let term = SearchTerm::new(Some("jo".into()));
        let page = manage
            .list(term.clone(), PageRequest::new(None, Some(2)))
            .await
            .unwrap();
        let names: Vec<_> = page.items.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["John", "josephine"]);
        assert_eq!((page.count, page.total_pages), (3, 2));

        let page = manage
            .list(term, PageRequest::new(Some(2), Some(2)))
            .await
            .unwrap();
        let names: Vec<_> = page.items.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Mojo"]);

        let all = manage.list(None, PageRequest::default()).await.unwrap();
        assert_eq!((all.items.len(), all.count, all.total_pages), (5, 5, 1));

        let beyond = manage
            .list(None, PageRequest::new(Some(9), Some(10)))
            .await
            .unwrap();
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.count, 5);
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::testing::InMemoryAccountRepository;
    use crate::application::config::AuthConfig;
    use crate::presentation::router::auth_router;

    fn app() -> (Router, InMemoryAccountRepository) {
        let repo = InMemoryAccountRepository::default();
        let config = Arc::new(AuthConfig::new(b"router-secret"));
        (auth_router(repo.clone(), config), repo)
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("X-JWT-TOKEN", token);
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn register_and_login(app: &Router) -> String {
        let (status, _) = send(
            app,
            "POST",
            "/register",
            None,
            Some(json!({
                "name": "Alice",
                "phone": "555-0100",
                "username": "alice",
                "password": "s3cret"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(
            app,
            "POST",
            "/login",
            None,
            Some(json!({ "username": "alice", "password": "s3cret" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_register_response_hides_password() {
        let (app, _) = app();

        let (status, body) = send(
            &app,
            "POST",
            "/register",
            None,
            Some(json!({
                "name": "Alice",
                "phone": "555-0100",
                "username": "alice",
                "password": "s3cret"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 1);
        assert_eq!(body["username"], "alice");
        assert!(body.get("password").is_none());
        assert!(body["created_at"].is_string());
        assert!(!body.to_string().contains("s3cret"));
    }

    #[tokio::test]
    async fn test_login_response_shape() {
        let (app, _) = app();
        register_and_login(&app).await;

        let (_, body) = send(
            &app,
            "POST",
            "/login",
            None,
            Some(json!({ "username": "alice", "password": "s3cret" })),
        )
        .await;

        let keys: Vec<_> = body.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 5);
        for key in ["id", "name", "username", "phone", "token"] {
            assert!(body.get(key).is_some(), "missing {key}");
        }
    }

    #[tokio::test]
    async fn test_login_failures() {
        let (app, _) = app();
        register_and_login(&app).await;

        let (status, body) = send(
            &app,
            "POST",
            "/login",
            None,
            Some(json!({ "username": "alice", "password": "nope" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "error": "Invalid credentials" }));

        let (status, body) = send(
            &app,
            "POST",
            "/login",
            None,
            Some(json!({ "username": "nobody", "password": "nope" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Account with username [nobody] not found" }));
    }

    #[tokio::test]
    async fn test_gate_denies_missing_and_bad_tokens() {
        let (app, _) = app();
        let denied = json!({ "error": "Permission denied" });

        let (status, body) = send(&app, "GET", "/account", None, None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, denied);

        let (status, body) = send(&app, "GET", "/account/1", Some("garbage"), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, denied);

        let foreign = {
            let other = AuthConfig::new(b"someone-else");
            other
                .signer()
                .sign(&json!({ "accountUsername": "alice", "expiresAt": i64::MAX, "iat": 0 }))
                .unwrap()
        };
        let (status, _) = send(&app, "DELETE", "/account/1", Some(&foreign), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_gate_denies_expired_token() {
        let repo = InMemoryAccountRepository::default();
        let config = Arc::new(AuthConfig::new(b"router-secret"));
        let app = auth_router(repo, config.clone());

        let expired = config
            .signer()
            .sign(&json!({ "accountUsername": "alice", "expiresAt": 15000 }))
            .unwrap();

        let (status, _) = send(&app, "GET", "/account", Some(&expired), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_denied_request_does_not_reach_handler() {
        let (app, repo) = app();

        let (status, _) = send(
            &app,
            "POST",
            "/account",
            None,
            Some(json!({ "name": "X", "phone": "", "username": "x", "password": "pw" })),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_account_crud_with_token() {
        let (app, repo) = app();
        let token = register_and_login(&app).await;
        let token = Some(token.as_str());

        let (status, created) = send(
            &app,
            "POST",
            "/account",
            token,
            Some(json!({ "name": "Bob", "phone": "555-0101", "username": "bob", "password": "pw" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["id"], 2);

        let (status, list) = send(&app, "GET", "/account?search=BO&limit=5", token, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list["page"], 1);
        assert_eq!(list["limit"], 5);
        assert_eq!(list["count"], 1);
        assert_eq!(list["total"], 1);
        assert_eq!(list["data"][0]["username"], "bob");
        assert!(list["data"][0].get("password").is_none());

        let (status, body) = send(
            &app,
            "PUT",
            "/account/2",
            token,
            Some(json!({ "id": 99, "name": "Robert", "phone": "555-0102", "password": "pw2" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "updated account": 2 }));
        assert_eq!(repo.get(2).await.unwrap().name, "Robert");
        assert!(repo.get(99).await.is_none());

        let (status, fetched) = send(&app, "GET", "/account/2", token, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["name"], "Robert");
        assert_eq!(fetched["created_at"], created["created_at"]);

        let (status, body) = send(&app, "DELETE", "/account/2", token, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "deleted account": 2 }));

        let (status, body) = send(&app, "GET", "/account/2", token, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Account with id [2] not found" }));

        let (status, _) = send(&app, "DELETE", "/account/2", token, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_validation_errors() {
        let (app, _) = app();
        let token = register_and_login(&app).await;
        let token = Some(token.as_str());

        let (status, body) = send(&app, "GET", "/account/abc", token, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid ID given abc" }));

        let (status, body) = send(&app, "GET", "/account?page=x", token, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid page given x" }));

        let (status, body) = send(&app, "GET", "/account?page=0&limit=-3", token, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!((body["page"].clone(), body["limit"].clone()), (json!(1), json!(10)));

        let request = Request::builder()
            .method("POST")
            .uri("/register")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_register_overlong_password_is_bad_request() {
        let (app, repo) = app();

        let (status, body) = send(
            &app,
            "POST",
            "/register",
            None,
            Some(json!({ "name": "L", "phone": "", "username": "l", "password": "x".repeat(80) })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("72 bytes"));
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_unsupported_method_is_405() {
        let (app, _) = app();

        let (status, _) = send(&app, "PATCH", "/account/1", None, None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

        let (status, _) = send(&app, "GET", "/login", None, None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}

#[cfg(test)]
mod error_tests {
    use kernel::id::AccountId;

    use crate::error::AuthError;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::AccountNotFound(AccountId::new(1)).status_code(), 404);
        assert_eq!(AuthError::UsernameNotFound("x".into()).status_code(), 404);
        assert_eq!(AuthError::InvalidCredentials.status_code(), 401);
        assert_eq!(AuthError::PermissionDenied.status_code(), 403);
        assert_eq!(
            AuthError::Internal("boom".into()).kind(),
            ErrorKind::InternalServerError
        );
        assert_eq!(
            AuthError::Database(sqlx::Error::PoolTimedOut).kind(),
            ErrorKind::ServiceUnavailable
        );
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let app_err = AuthError::Internal("argon2 exploded".into()).into_app_error();
        assert_eq!(app_err.status_code(), 500);
        assert!(!app_err.message().contains("argon2"));
    }
}
