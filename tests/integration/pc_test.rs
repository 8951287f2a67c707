//! Integration tests for the Pc REST endpoints.

mod helpers;

use flashapp_core::traits::Repository;
use flashapp_entity::pc::Pc;
use http::StatusCode;
use serde_json::json;

const DEFAULT_MAKE: &str = "AAAAAAAAAA";
const UPDATED_MAKE: &str = "BBBBBBBBBB";
const DEFAULT_MODEL: &str = "AAAAAAAAAA";
const UPDATED_MODEL: &str = "BBBBBBBBBB";
const DEFAULT_PRICE: i32 = 1;
const UPDATED_PRICE: i32 = 2;

#[tokio::test]
async fn test_create_pc() {
    let app = helpers::TestApp::new();
    let before = app.repo.len();

    let response = app
        .request(
            "POST",
            "/api/pcs",
            Some(json!({ "make": DEFAULT_MAKE, "model": DEFAULT_MODEL, "price": DEFAULT_PRICE })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.body["id"].as_str().expect("id assigned");
    assert_eq!(response.body["make"], DEFAULT_MAKE);
    assert_eq!(response.body["model"], DEFAULT_MODEL);
    assert_eq!(response.body["price"], DEFAULT_PRICE);
    assert_eq!(response.header("location"), Some(&*format!("/api/pcs/{id}")));
    assert_eq!(
        response.header("x-flashapp-alert"),
        Some(&*format!("A new flashAppPc is created with identifier {id}"))
    );
    assert_eq!(app.repo.len(), before + 1);
}

#[tokio::test]
async fn test_create_pc_with_existing_id() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/pcs",
            Some(json!({ "id": "existing_id", "make": DEFAULT_MAKE })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"]["errorKey"], "idexists");
    assert_eq!(response.body["details"]["entityName"], "flashAppPc");
    assert_eq!(
        response.header("x-flashapp-error"),
        Some("A new pc cannot already have an ID")
    );
    assert!(app.repo.is_empty());
}

#[tokio::test]
async fn test_create_pc_with_malformed_body() {
    let app = helpers::TestApp::new();

    let wrong_type = app
        .request("POST", "/api/pcs", Some(json!({ "make": "x", "price": "abc" })))
        .await;
    assert_eq!(wrong_type.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_type.body["error"], "VALIDATION_ERROR");

    let overflow = app
        .request("POST", "/api/pcs", Some(json!({ "price": 3_000_000_000_i64 })))
        .await;
    assert_eq!(overflow.status, StatusCode::BAD_REQUEST);
    assert_eq!(overflow.body["error"], "VALIDATION_ERROR");

    assert!(app.repo.is_empty());
}

#[tokio::test]
async fn test_put_pc_with_unparsable_body() {
    let app = helpers::TestApp::new();
    let id = app.create_pc(DEFAULT_MAKE, DEFAULT_MODEL, DEFAULT_PRICE).await;

    let response = app
        .request_raw("PUT", &format!("/api/pcs/{id}"), "{\"id\": ", "application/json")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_patch_pc_with_wrong_field_type() {
    let app = helpers::TestApp::new();
    let id = app.create_pc(DEFAULT_MAKE, DEFAULT_MODEL, DEFAULT_PRICE).await;

    let response = app
        .request_with_type(
            "PATCH",
            &format!("/api/pcs/{id}"),
            Some(json!({ "id": id, "price": [1, 2] })),
            "application/merge-patch+json",
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let stored = app.repo.find_by_id(id.as_str()).await.expect("find").expect("present");
    assert_eq!(stored.price, Some(DEFAULT_PRICE));
}

#[tokio::test]
async fn test_get_all_pcs() {
    let app = helpers::TestApp::new();
    let id = app.create_pc(DEFAULT_MAKE, DEFAULT_MODEL, DEFAULT_PRICE).await;

    let response = app.request("GET", "/api/pcs", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body.as_array().expect("array body");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], id.as_str());
    assert_eq!(items[0]["make"], DEFAULT_MAKE);
}

#[tokio::test]
async fn test_get_pc() {
    let app = helpers::TestApp::new();
    let id = app.create_pc(DEFAULT_MAKE, DEFAULT_MODEL, DEFAULT_PRICE).await;

    let response = app.request("GET", &format!("/api/pcs/{id}"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id.as_str());
    assert_eq!(response.body["model"], DEFAULT_MODEL);
    assert_eq!(response.body["price"], DEFAULT_PRICE);
}

#[tokio::test]
async fn test_get_non_existing_pc() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/pcs/does-not-exist", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_put_existing_pc() {
    let app = helpers::TestApp::new();
    let id = app.create_pc(DEFAULT_MAKE, DEFAULT_MODEL, DEFAULT_PRICE).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/pcs/{id}"),
            Some(json!({ "id": id, "make": UPDATED_MAKE, "model": UPDATED_MODEL, "price": UPDATED_PRICE })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.header("x-flashapp-alert"),
        Some(&*format!("A flashAppPc is updated with identifier {id}"))
    );

    let stored = app.repo.find_by_id(id.as_str()).await.expect("find").expect("present");
    assert_eq!(stored.make.as_deref(), Some(UPDATED_MAKE));
    assert_eq!(stored.model.as_deref(), Some(UPDATED_MODEL));
    assert_eq!(stored.price, Some(UPDATED_PRICE));
    assert_eq!(app.repo.len(), 1);
}

#[tokio::test]
async fn test_put_non_existing_pc() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "PUT",
            "/api/pcs/ghost",
            Some(json!({ "id": "ghost", "make": UPDATED_MAKE })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"]["errorKey"], "idnotfound");
    assert!(app.repo.is_empty());
}

#[tokio::test]
async fn test_put_without_body_id() {
    let app = helpers::TestApp::new();
    let id = app.create_pc(DEFAULT_MAKE, DEFAULT_MODEL, DEFAULT_PRICE).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/pcs/{id}"),
            Some(json!({ "make": UPDATED_MAKE })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"]["errorKey"], "idnull");
}

#[tokio::test]
async fn test_put_with_id_mismatch_pc() {
    let app = helpers::TestApp::new();
    let id = app.create_pc(DEFAULT_MAKE, DEFAULT_MODEL, DEFAULT_PRICE).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/pcs/{id}"),
            Some(json!({ "id": "another-id", "make": UPDATED_MAKE })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"]["errorKey"], "idinvalid");

    let stored = app.repo.find_by_id(id.as_str()).await.expect("find").expect("present");
    assert_eq!(stored.make.as_deref(), Some(DEFAULT_MAKE));
}

#[tokio::test]
async fn test_put_with_missing_id_path_param() {
    let app = helpers::TestApp::new();

    let response = app
        .request("PUT", "/api/pcs", Some(json!({ "id": "x" })))
        .await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_partial_update_pc_with_patch() {
    let app = helpers::TestApp::new();
    let id = app.create_pc(DEFAULT_MAKE, DEFAULT_MODEL, DEFAULT_PRICE).await;

    let response = app
        .request_with_type(
            "PATCH",
            &format!("/api/pcs/{id}"),
            Some(json!({ "id": id, "make": UPDATED_MAKE })),
            "application/merge-patch+json",
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["make"], UPDATED_MAKE);
    assert_eq!(response.body["model"], DEFAULT_MODEL);
    assert_eq!(response.body["price"], DEFAULT_PRICE);

    let stored = app.repo.find_by_id(id.as_str()).await.expect("find").expect("present");
    assert_eq!(stored.model.as_deref(), Some(DEFAULT_MODEL));
    assert_eq!(stored.price, Some(DEFAULT_PRICE));
}

#[tokio::test]
async fn test_full_update_pc_with_patch() {
    let app = helpers::TestApp::new();
    let id = app.create_pc(DEFAULT_MAKE, DEFAULT_MODEL, DEFAULT_PRICE).await;

    let response = app
        .request_with_type(
            "PATCH",
            &format!("/api/pcs/{id}"),
            Some(json!({ "id": id, "make": UPDATED_MAKE, "model": UPDATED_MODEL, "price": UPDATED_PRICE })),
            "application/merge-patch+json",
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let stored = app.repo.find_by_id(id.as_str()).await.expect("find").expect("present");
    assert_eq!(
        stored,
        Pc::new().with_id(id.clone()),
        "identity is preserved"
    );
    assert_eq!(stored.make.as_deref(), Some(UPDATED_MAKE));
    assert_eq!(stored.model.as_deref(), Some(UPDATED_MODEL));
    assert_eq!(stored.price, Some(UPDATED_PRICE));
}

#[tokio::test]
async fn test_patch_with_null_fields_keeps_stored_values() {
    let app = helpers::TestApp::new();
    let id = app.create_pc(DEFAULT_MAKE, DEFAULT_MODEL, DEFAULT_PRICE).await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/pcs/{id}"),
            Some(json!({ "id": id, "make": null, "price": UPDATED_PRICE })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["make"], DEFAULT_MAKE);
    assert_eq!(response.body["price"], UPDATED_PRICE);
}

#[tokio::test]
async fn test_patch_non_existing_pc() {
    let app = helpers::TestApp::new();

    let response = app
        .request_with_type(
            "PATCH",
            "/api/pcs/ghost",
            Some(json!({ "id": "ghost", "make": UPDATED_MAKE })),
            "application/merge-patch+json",
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"]["errorKey"], "idnotfound");
    assert!(app.repo.is_empty());
}

#[tokio::test]
async fn test_patch_with_id_mismatch_pc() {
    let app = helpers::TestApp::new();
    let id = app.create_pc(DEFAULT_MAKE, DEFAULT_MODEL, DEFAULT_PRICE).await;

    let response = app
        .request_with_type(
            "PATCH",
            &format!("/api/pcs/{id}"),
            Some(json!({ "id": "another-id", "price": UPDATED_PRICE })),
            "application/merge-patch+json",
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"]["errorKey"], "idinvalid");
}

#[tokio::test]
async fn test_patch_with_missing_id_path_param() {
    let app = helpers::TestApp::new();

    let response = app
        .request_with_type(
            "PATCH",
            "/api/pcs",
            Some(json!({ "id": "x" })),
            "application/merge-patch+json",
        )
        .await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_delete_pc() {
    let app = helpers::TestApp::new();
    let id = app.create_pc(DEFAULT_MAKE, DEFAULT_MODEL, DEFAULT_PRICE).await;
    app.create_pc(UPDATED_MAKE, UPDATED_MODEL, UPDATED_PRICE).await;
    let before = app.repo.len();

    let response = app.request("DELETE", &format!("/api/pcs/{id}"), None).await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(
        response.header("x-flashapp-alert"),
        Some(&*format!("A flashAppPc is deleted with identifier {id}"))
    );
    assert_eq!(app.repo.len(), before - 1);

    let response = app.request("GET", &format!("/api/pcs/{id}"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_non_existing_pc() {
    let app = helpers::TestApp::new();

    let response = app.request("DELETE", "/api/pcs/ghost", None).await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
}
