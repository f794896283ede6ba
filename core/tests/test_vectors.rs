//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! `requests.json` describes parameter inputs and the request each must
//! produce; `responses.json` describes simulated responses and the parse
//! result or error they must yield. Query strings are compared as decoded
//! pairs so the vectors stay readable.

use unsplash_core::params::{
    ListParameters, NewCollection, PhotoListParameters, RandomPhotoParameters, SearchParameters,
    StatisticsParameters, TopicListParameters, UserPhotosParameters,
};
use unsplash_core::{ApiError, ClientConfig, HttpMethod, HttpRequest, HttpResponse, ResponseMetadata, SearchType, UnsplashClient};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> UnsplashClient {
    UnsplashClient::new(ClientConfig::default().with_api_url(BASE_URL).with_access_key("access-key")).unwrap()
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn pairs(value: &serde_json::Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let arr = pair.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect()
}

fn input<T: serde::de::DeserializeOwned>(case: &serde_json::Value) -> T {
    serde_json::from_value(case["input"].clone()).unwrap()
}

fn build(c: &UnsplashClient, case: &serde_json::Value) -> HttpRequest {
    let path_arg = case["path_arg"].as_str().unwrap_or_default();
    match case["operation"].as_str().unwrap() {
        "photos" => c.build_photos(&input::<ListParameters>(case)),
        "search_photos" => c.build_search(SearchType::Photo, &input::<SearchParameters>(case)),
        "search_users" => c.build_search(SearchType::User, &input::<SearchParameters>(case)),
        "random_photo" => c.build_random_photo(&input::<RandomPhotoParameters>(case)),
        "user_photos" => c.build_user_photos(path_arg, &input::<UserPhotosParameters>(case)),
        "photo_statistics" => c.build_photo_statistics(path_arg, &input::<StatisticsParameters>(case)),
        "topic_photos" => c.build_topic_photos(path_arg, &input::<PhotoListParameters>(case)),
        "topics" => c.build_topics(&input::<TopicListParameters>(case)),
        "create_collection" => c.build_create_collection(&input::<NewCollection>(case)),
        other => panic!("unknown operation: {other}"),
    }
    .unwrap()
}

fn simulated(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    let body = match &sim["body"] {
        serde_json::Value::String(raw) => raw.clone().into_bytes(),
        other => serde_json::to_vec(other).unwrap(),
    };
    HttpResponse::new(sim["status"].as_u64().unwrap() as u16, pairs(&sim["headers"]), body)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        let req = build(&c, case);
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");

        let url = url::Url::parse(&req.url).unwrap();
        assert_eq!(url.path(), expected_req["path"].as_str().unwrap(), "{name}: path");

        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(query, pairs(&expected_req["query"]), "{name}: query");
        if query.is_empty() {
            assert!(url.query().is_none(), "{name}: no query string expected");
        }

        assert_eq!(req.headers, pairs(&expected_req["headers"]), "{name}: headers");
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

fn check_metadata(name: &str, metadata: &ResponseMetadata, case: &serde_json::Value) {
    if let Some(expected) = case.get("expected_metadata") {
        let expected: ResponseMetadata = serde_json::from_value(expected.clone()).unwrap();
        assert_eq!(metadata, &expected, "{name}: metadata");
    }
}

fn check_error(name: &str, err: ApiError, expected: &str) {
    let matched = match expected {
        "NotFound" => matches!(err, ApiError::NotFound),
        "Unauthorized" => matches!(err, ApiError::Unauthorized(_)),
        "HttpError" => matches!(err, ApiError::HttpError { .. }),
        "Decode" => err.is_decode_error(),
        other => panic!("{name}: unknown expected_error: {other}"),
    };
    assert!(matched, "{name}: expected {expected}, got {err:?}");
}

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let response = simulated(case);
        let expected_error = case.get("expected_error").and_then(|e| e.as_str());

        match case["operation"].as_str().unwrap() {
            "photo" => match (c.parse_photo(response), expected_error) {
                (Ok(parsed), None) => {
                    let expected = &case["expected_result"];
                    assert_eq!(parsed.data.id, expected["id"].as_str().unwrap(), "{name}: id");
                    assert_eq!(u64::from(parsed.data.likes), expected["likes"].as_u64().unwrap(), "{name}: likes");
                    check_metadata(name, &parsed.metadata, case);
                }
                (Err(err), Some(expected)) => check_error(name, err, expected),
                (result, _) => panic!("{name}: unexpected outcome {result:?}"),
            },
            "photos" => match (c.parse_photos(response), expected_error) {
                (Ok(parsed), None) => {
                    let count = case["expected_result"]["count"].as_u64().unwrap() as usize;
                    assert_eq!(parsed.data.len(), count, "{name}: count");
                    check_metadata(name, &parsed.metadata, case);
                }
                (Err(err), Some(expected)) => check_error(name, err, expected),
                (result, _) => panic!("{name}: unexpected outcome {result:?}"),
            },
            other => panic!("{name}: unknown operation: {other}"),
        }
    }
}
