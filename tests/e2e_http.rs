use axum::http::StatusCode;
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

fn tool_form(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "summary": "Fixes flaky cron jobs.",
        "content": "Cron Doctor watches your schedules.\n\nIt pages you before they drift."
    })
}

/// ヘルスチェックは 200 と status=ok を返す
#[tokio::test]
async fn health_reports_ok() {
    let (app, _) = support::make_test_router();

    let resp = app.oneshot(support::get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(support::read_json(resp).await, json!({ "status": "ok" }));
}

/// フォーム送信でツールが作成され、通知と詳細ページが得られる
#[tokio::test]
async fn creating_a_tool_publishes_it() {
    let (app, _) = support::make_test_router();

    let resp = app
        .clone()
        .oneshot(support::post_form("/admin/tools", &tool_form("Cron Doctor"), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = support::read_json(resp).await;
    assert_eq!(
        body["notice"],
        "“Cron Doctor” is live on the Fixly.dev homepage."
    );
    assert_eq!(body["tool"]["slug"], "cron-doctor");
    assert_eq!(body["tool"]["published"], true);
    assert_eq!(body["tool"]["created_at"], "2024-01-01T00:00:00Z");

    let resp = app
        .clone()
        .oneshot(support::get("/tools/cron-doctor"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let detail = support::read_json(resp).await;
    assert_eq!(detail["title"], "Cron Doctor");
    assert_eq!(
        detail["paragraphs"],
        json!([
            "Cron Doctor watches your schedules.",
            "It pages you before they drift."
        ])
    );

    let resp = app.oneshot(support::get("/")).await.unwrap();
    let home = support::read_json(resp).await;
    assert_eq!(home["site"]["brand_name"], "Fixly.dev");
    assert_eq!(home["tools"][0]["slug"], "cron-doctor");
    assert_eq!(home["current_year"], 2024);
}

/// 2 回目の作成は hello-world-1 になる
#[tokio::test]
async fn second_tool_with_same_title_gets_suffix() {
    let (app, _) = support::make_test_router();

    for expected in ["hello-world", "hello-world-1"] {
        let resp = app
            .clone()
            .oneshot(support::post_form("/admin/tools", &tool_form("Hello World!"), None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(support::read_json(resp).await["tool"]["slug"], expected);
    }
}

/// 不正な送信は 422 でメッセージと元の入力を返す
#[tokio::test]
async fn rejected_submission_echoes_input() {
    let (app, wired) = support::make_test_router();
    let form = json!({ "title": "   ", "summary": "Short.", "content": "" });

    let resp = app
        .oneshot(support::post_form("/admin/tools", &form, None))
        .await
        .unwrap();
    let body =
        support::assert_error_response(resp, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable Entity")
            .await;

    assert_eq!(
        body["errors"],
        json!(["Title is required.", "Content is required."])
    );
    assert_eq!(body["input"], form);
    assert_eq!(wired.tools.len(), 0);
}

/// 欠けたフィールドも検証メッセージとして扱われる
#[tokio::test]
async fn missing_fields_are_validation_errors() {
    let (app, _) = support::make_test_router();

    let resp = app
        .oneshot(support::post_form(
            "/admin/posts",
            &json!({ "title": "Only a title" }),
            None,
        ))
        .await
        .unwrap();
    let body =
        support::assert_error_response(resp, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable Entity")
            .await;
    assert_eq!(body["errors"], json!(["Content is required."]));
    assert_eq!(body["input"]["excerpt"], "");
}

/// 非公開にしたツールは公開ページで 404 になり、再トグルで戻る
#[tokio::test]
async fn hidden_tool_is_not_found_publicly() {
    let (app, _) = support::make_test_router();

    let resp = app
        .clone()
        .oneshot(support::post_form("/admin/tools", &tool_form("Cron Doctor"), None))
        .await
        .unwrap();
    let id = support::read_json(resp).await["tool"]["id"].as_i64().unwrap();
    let toggle_uri = format!("/admin/tools/{id}/toggle");

    let resp = app
        .clone()
        .oneshot(support::post_empty(&toggle_uri, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = support::read_json(resp).await;
    assert_eq!(body["notice"], "“Cron Doctor” is now hidden.");
    assert_eq!(body["tool"]["published"], false);

    let resp = app
        .clone()
        .oneshot(support::get("/tools/cron-doctor"))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;

    let resp = app
        .clone()
        .oneshot(support::get("/admin/tools"))
        .await
        .unwrap();
    let listing = support::read_json(resp).await;
    assert_eq!(listing.as_array().unwrap().len(), 1);

    let resp = app
        .clone()
        .oneshot(support::post_empty(&toggle_uri, None))
        .await
        .unwrap();
    assert_eq!(
        support::read_json(resp).await["notice"],
        "“Cron Doctor” is now published."
    );

    let resp = app.oneshot(support::get("/tools/cron-doctor")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

/// 存在しない ID のトグルは 404
#[tokio::test]
async fn toggling_unknown_id_returns_404() {
    let (app, _) = support::make_test_router();

    for uri in ["/admin/tools/42/toggle", "/admin/posts/42/toggle"] {
        let resp = app
            .clone()
            .oneshot(support::post_empty(uri, None))
            .await
            .unwrap();
        support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    }
}

/// ブログの作成と一覧、詳細
#[tokio::test]
async fn blog_round_trip() {
    let (app, _) = support::make_test_router();
    let form = json!({
        "title": "Shipping 400 automations",
        "excerpt": "",
        "content": "We shipped a lot this quarter and here is how.\nNext line."
    });

    let resp = app
        .clone()
        .oneshot(support::post_form("/admin/posts", &form, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = support::read_json(resp).await;
    assert_eq!(
        body["notice"],
        "Blog post “Shipping 400 automations” is live on Fixly.dev."
    );
    assert_eq!(body["post"]["slug"], "shipping-400-automations");

    let resp = app.clone().oneshot(support::get("/blog")).await.unwrap();
    let posts = support::read_json(resp).await;
    assert_eq!(posts[0]["slug"], "shipping-400-automations");
    assert_eq!(
        posts[0]["excerpt"],
        "We shipped a lot this quarter and here is how.\nNext line."
    );

    let resp = app
        .oneshot(support::get("/blog/shipping-400-automations"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let detail = support::read_json(resp).await;
    assert_eq!(detail["paragraphs"].as_array().unwrap().len(), 2);
}

/// ホームに並ぶ投稿は最大 3 件
#[tokio::test]
async fn home_shows_at_most_three_posts() {
    let (app, _) = support::make_test_router();

    for n in 1..=4 {
        let form = json!({ "title": format!("Update {n}"), "excerpt": "", "content": "Body" });
        let resp = app
            .clone()
            .oneshot(support::post_form("/admin/posts", &form, None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = app.oneshot(support::get("/")).await.unwrap();
    let home = support::read_json(resp).await;
    let titles: Vec<&str> = home["posts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Update 4", "Update 3", "Update 2"]);
}

/// 未知のブログ slug は 404
#[tokio::test]
async fn unknown_post_slug_returns_404() {
    let (app, _) = support::make_test_router();

    let resp = app.oneshot(support::get("/blog/nope")).await.unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

/// OpenAPI ドキュメントが配信される
#[tokio::test]
async fn openapi_document_is_served() {
    let (app, _) = support::make_test_router();

    let resp = app.oneshot(support::get("/openapi.json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let doc = support::read_json(resp).await;
    assert!(doc["paths"]["/admin/tools"]["post"].is_object());
    assert!(doc["paths"]["/blog/{slug}"]["get"].is_object());
}
