// src/forms/tests/handlers_tests.rs

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::Response;

    use crate::forms::extractors::{parse_ajax_body, AjaxForm};
    use crate::forms::handlers::ajax_submit;

    async fn submit(body: &str) -> (StatusCode, serde_json::Value) {
        let response: Response = ajax_submit(AjaxForm(parse_ajax_body(body))).await;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let json = serde_json::from_slice(&bytes).expect("JSON body");
        (status, json)
    }

    #[tokio::test]
    async fn test_empty_body_reply() {
        let (status, json) = submit("").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({"error": "Empty request!"}));
    }

    #[tokio::test]
    async fn test_missing_method_reply() {
        let (status, json) = submit("data[0][name]=name&data[0][value]=John").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({"error": "Unspecified method!"}));
    }

    #[tokio::test]
    async fn test_unknown_method_reply() {
        let (status, json) = submit("method=dropTables").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({"error": "Unknown method"}));
    }

    #[tokio::test]
    async fn test_form_submit_reports_field_errors() {
        let body = "method=formSubmit\
            &data[0][name]=name&data[0][value]=John\
            &data[1][name]=phone&data[1][value]=bad\
            &data[2][name]=email&data[2][value]=\
            &data[3][name]=comment&data[3][value]=";

        let (status, json) = submit(body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({"result": false, "error": {"phone": "Invalid phone"}})
        );
    }

    #[tokio::test]
    async fn test_form_submit_with_no_data_is_valid() {
        let (status, json) = submit("method=formSubmit").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({"result": true, "error": {}}));
    }
}
