use crate::helpers::spawn_app;
use raizup_api::storage::Storage;

#[tokio::test]
async fn newsletter_returns_a_201_for_a_valid_email() {
    let app = spawn_app().await;

    let response = app
        .post_newsletter(&serde_json::json!({ "email": "lead@example.com" }))
        .await;

    assert_eq!(201, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response body");
    assert_eq!(body["message"], "Successfully subscribed to newsletter");
    assert_eq!(body["data"]["id"].as_i64(), Some(1));
    assert_eq!(body["data"]["email"], "lead@example.com");

    let saved = app.storage.newsletter_subscriptions().await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].email, "lead@example.com");
}

#[tokio::test]
async fn newsletter_returns_400_when_the_email_is_missing() {
    let app = spawn_app().await;

    let response = app.post_newsletter(&serde_json::json!({})).await;

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response body");
    assert_eq!(body["message"], "Valid email is required");
}

#[tokio::test]
async fn newsletter_returns_400_for_malformed_emails() {
    let app = spawn_app().await;
    let test_cases = vec![
        (serde_json::json!({ "email": "" }), "an empty email"),
        (serde_json::json!({ "email": "not-an-email" }), "an email missing the @"),
        (serde_json::json!({ "email": "@example.com" }), "an email missing the subject"),
    ];

    for (invalid_body, description) in test_cases {
        let response = app.post_newsletter(&invalid_body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
    }
}

#[tokio::test]
async fn duplicate_subscriptions_succeed_with_distinct_identifiers() {
    let app = spawn_app().await;
    let body = serde_json::json!({ "email": "lead@example.com" });

    let first = app.post_newsletter(&body).await;
    let second = app.post_newsletter(&body).await;

    assert_eq!(201, first.status().as_u16());
    assert_eq!(201, second.status().as_u16());

    let first: serde_json::Value = first.json().await.unwrap();
    let second: serde_json::Value = second.json().await.unwrap();
    assert_eq!(first["data"]["id"].as_i64(), Some(1));
    assert_eq!(second["data"]["id"].as_i64(), Some(2));

    let saved = app.storage.newsletter_subscriptions().await.unwrap();
    assert_eq!(saved.len(), 2);
}
