mod common;

use common::mock_gemini::{MockGemini, MockResponse};
use common::{service_config, socrates};
use philosphere::content::{ContentFetchError, ContentSource, GeminiClient};
use serde_json::json;

async fn client_for(mock: &MockGemini, count: u32) -> GeminiClient {
    GeminiClient::new(&service_config(&mock.base_url()), count).expect("client builds")
}

#[tokio::test]
async fn list_fetch_returns_summaries_in_order() {
    let mock = MockGemini::start().await;
    mock.enqueue_response(MockResponse::candidate_json(json!({
        "philosophers": [
            { "id": "1", "name": "Socrates", "tagline": "Know thyself", "era": "Ancient Greece", "school": "Classical" },
            { "id": "2", "name": "Confucius", "tagline": "Harmony", "era": "Zhou Dynasty", "school": "Confucianism" }
        ]
    })))
    .await;

    let client = client_for(&mock, 2).await;
    let list = client.fetch_summary_list().await.unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(list[0], socrates());
    assert_eq!(list[1].name, "Confucius");
}

#[tokio::test]
async fn list_request_carries_key_prompt_and_schema() {
    let mock = MockGemini::start().await;
    mock.enqueue_response(MockResponse::candidate_json(json!({ "philosophers": [] })))
        .await;

    let client = client_for(&mock, 12).await;
    let list = client.fetch_summary_list().await.unwrap();
    assert!(list.is_empty());

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/v1beta/models/gemini-test:generateContent");
    assert_eq!(request.header("x-goog-api-key"), Some("test-key"));

    let body = request.json();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("12 distinct, famous philosophers"));
    assert_eq!(
        body["generationConfig"]["responseMimeType"],
        "application/json"
    );
    assert_eq!(
        body["generationConfig"]["responseSchema"]["required"],
        json!(["philosophers"])
    );
    assert!(body["systemInstruction"]["parts"][0]["text"]
        .as_str()
        .unwrap()
        .contains("philosophy expert"));
}

#[tokio::test]
async fn detail_fetch_merges_onto_summary() {
    let mock = MockGemini::start().await;
    mock.enqueue_response(MockResponse::candidate_json(json!({
        "bio": "Born in Athens.\nExecuted in 399 BC.",
        "famousWorks": ["Apology"],
        "quotes": ["The unexamined life is not worth living."],
        "coreIdeas": ["Socratic method", "Virtue is knowledge", "Elenchus"]
    })))
    .await;

    let client = client_for(&mock, 12).await;
    let detail = client.fetch_detail(&socrates()).await.unwrap();

    assert_eq!(detail.summary, socrates());
    assert_eq!(detail.famous_works, vec!["Apology".to_string()]);
    assert_eq!(detail.core_ideas.len(), 3);
    assert_eq!(detail.bio_paragraphs().count(), 2);

    let requests = mock.captured_requests().await;
    let prompt = requests[0].json()["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap()
        .to_string();
    assert_eq!(
        prompt,
        "Provide detailed information about the philosopher Socrates (Ancient Greece)."
    );
}

#[tokio::test]
async fn summary_fields_win_over_response_fields() {
    let mock = MockGemini::start().await;
    mock.enqueue_response(MockResponse::candidate_json(json!({
        "name": "Not Socrates",
        "era": "Modern",
        "bio": "Bio.",
        "famousWorks": [],
        "quotes": [],
        "coreIdeas": []
    })))
    .await;

    let client = client_for(&mock, 12).await;
    let detail = client.fetch_detail(&socrates()).await.unwrap();

    assert_eq!(detail.summary.name, "Socrates");
    assert_eq!(detail.summary.era, "Ancient Greece");
}

#[tokio::test]
async fn non_success_status_is_api_error() {
    let mock = MockGemini::start().await;
    mock.enqueue_response(MockResponse::error(503, "overloaded"))
        .await;

    let client = client_for(&mock, 12).await;
    let err = client.fetch_summary_list().await.unwrap_err();

    match err {
        ContentFetchError::Api { status, message } => {
            assert_eq!(status, 503);
            assert!(message.contains("overloaded"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_candidates_is_empty_response() {
    let mock = MockGemini::start().await;
    mock.enqueue_response(MockResponse::no_candidates()).await;

    let client = client_for(&mock, 12).await;
    let err = client.fetch_detail(&socrates()).await.unwrap_err();
    assert!(matches!(err, ContentFetchError::EmptyResponse));
}

#[tokio::test]
async fn unparsable_candidate_text_is_parse_error() {
    let mock = MockGemini::start().await;
    mock.enqueue_response(MockResponse::candidate_text("The philosophers are..."))
        .await;

    let client = client_for(&mock, 12).await;
    let err = client.fetch_summary_list().await.unwrap_err();
    assert!(matches!(err, ContentFetchError::Parse(_)));
}

#[tokio::test]
async fn missing_required_field_is_parse_error() {
    let mock = MockGemini::start().await;
    mock.enqueue_response(MockResponse::candidate_json(json!({
        "bio": "Bio.",
        "famousWorks": [],
        "quotes": []
    })))
    .await;

    let client = client_for(&mock, 12).await;
    let err = client.fetch_detail(&socrates()).await.unwrap_err();
    assert!(matches!(err, ContentFetchError::Parse(_)));
}

#[tokio::test]
async fn unreachable_service_is_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = GeminiClient::new(&service_config(&format!("http://127.0.0.1:{port}")), 12)
        .expect("client builds");

    let err = client.fetch_summary_list().await.unwrap_err();
    assert!(matches!(err, ContentFetchError::Transport(_)));
}
