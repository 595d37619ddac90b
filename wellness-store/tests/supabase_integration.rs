use mockito::Matcher;
use serde_json::json;
use wellness_store::{Filter, Order, Query, RecordStore, StoreError, SupabaseStore, Table};

fn row(value: serde_json::Value) -> wellness_store::Row {
    value.as_object().cloned().unwrap()
}

#[tokio::test]
async fn test_select_sends_filters_order_and_keys() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/v1/weight_entries")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("select".into(), "*".into()),
            Matcher::UrlEncoded("user_id".into(), "eq.550e8400-e29b-41d4-a716-446655440000".into()),
            Matcher::UrlEncoded("order".into(), "date_recorded.desc".into()),
        ]))
        .match_header("apikey", "test-key")
        .match_header("authorization", "Bearer test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{"id": 2, "user_id": "550e8400-e29b-41d4-a716-446655440000", "weight": 80.1, "date_recorded": "2024-01-12", "notes": ""}]"#,
        )
        .create_async()
        .await;

    let store = SupabaseStore::new(server.url(), "test-key").unwrap();
    let query = Query::new()
        .eq("user_id", "550e8400-e29b-41d4-a716-446655440000")
        .order_by(Order::desc("date_recorded"));
    let rows = store.select(Table::WeightEntries, &query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["weight"], json!(80.1));
}

#[tokio::test]
async fn test_insert_posts_row_and_returns_representation() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/v1/daily_checklist")
        .match_header("prefer", "return=representation")
        .match_body(Matcher::Json(json!([{
            "user_id": "u1",
            "question": "Did you drink enough water today?",
            "answer": true,
            "date_recorded": "2024-01-15",
            "notes": ""
        }])))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{"id": 7, "user_id": "u1", "question": "Did you drink enough water today?", "answer": true, "date_recorded": "2024-01-15", "notes": "", "created_at": "2024-01-15T08:00:00+00:00"}]"#,
        )
        .create_async()
        .await;

    let store = SupabaseStore::new(server.url(), "test-key").unwrap();
    let inserted = store
        .insert(
            Table::DailyChecklist,
            row(json!({
                "user_id": "u1",
                "question": "Did you drink enough water today?",
                "answer": true,
                "date_recorded": "2024-01-15",
                "notes": ""
            })),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(inserted["id"], json!(7));
}

#[tokio::test]
async fn test_update_patches_by_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/rest/v1/quotes")
        .match_query(Matcher::UrlEncoded("id".into(), "eq.3".into()))
        .match_body(Matcher::Json(json!({"is_active": false})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id": 3, "quote_text": "Breathe", "category": "meditation", "is_active": false}]"#)
        .create_async()
        .await;

    let store = SupabaseStore::new(server.url(), "test-key").unwrap();
    let updated = store
        .update(
            Table::Quotes,
            &[Filter::eq("id", 3)],
            row(json!({"is_active": false})),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0]["is_active"], json!(false));
}

#[tokio::test]
async fn test_postgrest_error_body_is_mapped() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/rest/v1/food_diary")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"message": "null value in column \"meal_type\" violates not-null constraint", "code": "23502", "details": null, "hint": null}"#,
        )
        .create_async()
        .await;

    let store = SupabaseStore::new(server.url(), "test-key").unwrap();
    let err = store
        .insert(Table::FoodDiary, row(json!({"user_id": "u1"})))
        .await
        .unwrap_err();

    match err {
        StoreError::InvalidRequest { message } => {
            assert!(message.contains("meal_type"));
            assert!(message.contains("23502"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/rest/v1/quotes")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"message": "Invalid API key"}"#)
        .create_async()
        .await;

    let store = SupabaseStore::new(server.url(), "bad-key").unwrap();
    let err = store.select(Table::Quotes, &Query::new()).await.unwrap_err();

    assert!(matches!(err, StoreError::Authentication { .. }));
}

#[tokio::test]
async fn test_server_error_keeps_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/rest/v1/daily_checklist")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let store = SupabaseStore::new(server.url(), "test-key").unwrap();
    let err = store
        .select(Table::DailyChecklist, &Query::new())
        .await
        .unwrap_err();

    match err {
        StoreError::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
