use reqwest::{
    multipart::{
        Form,
        Part,
    },
    Client,
};
use serde::{
    de::DeserializeOwned,
    Deserialize,
};
use tracing::debug;

use crate::core::{
    http::{
        ensure_success,
        http_client,
        parse_api_base,
        user_agent,
    },
    CsvBatchResult,
    CsvUpload,
    SentimentError,
    SentimentResult,
};

const ANALYZE_PATH: &str = "/analyze";
const ANALYZE_CSV_PATH: &str = "/analyze_csv";

// /analyze_csv answers a missing `text` column with a 2xx `{"error": ...}` body.
#[derive(Deserialize)]
#[serde(untagged)]
enum CsvResponse {
    Batch(CsvBatchResult),
    Failure { error: String },
}

#[derive(Debug, Clone)]
pub struct SentimentClient {
    client: Client,
    api_base: String,
}

impl SentimentClient {
    pub fn new(api_base: &str) -> Result<Self, SentimentError> {
        Ok(Self { client: http_client()?, api_base: parse_api_base(api_base)? })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub async fn analyze_text(&self, text: &str) -> Result<SentimentResult, SentimentError> {
        let form = Form::new().text("text", text.to_string());
        self.post_form(ANALYZE_PATH, form).await
    }

    pub async fn analyze_csv(&self, upload: CsvUpload) -> Result<CsvBatchResult, SentimentError> {
        let part = Part::bytes(upload.bytes).file_name(upload.file_name).mime_str("text/csv")?;
        let form = Form::new().part("file", part);

        match self.post_form::<CsvResponse>(ANALYZE_CSV_PATH, form).await? {
            CsvResponse::Batch(batch) => Ok(batch),
            CsvResponse::Failure { error } => Err(SentimentError::Service(error)),
        }
    }

    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, SentimentError> {
        let url = format!("{}{}", self.api_base, path);
        let (agent_header, agent) = user_agent();

        debug!(%url, "POST multipart");
        let resp = self.client.post(&url).header(agent_header, agent).multipart(form).send().await?;
        ensure_success(&resp)?;

        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use super::*;
    use crate::core::SentimentLabel;

    const TEXT_RESPONSE: &str =
        r#"{"label":"Positive","confidence":0.95,"scores":{"pos":0.95,"neu":0.03,"neg":0.02}}"#;

    const CSV_RESPONSE: &str = r#"{"results":[
        {"text":"a","label":"Neutral","confidence":0.5},
        {"text":"b","label":"Negative","confidence":0.8}
    ]}"#;

    #[tokio::test]
    async fn test_analyze_text_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/analyze")
            .match_header("content-type", Matcher::Regex("multipart/form-data".to_string()))
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="text""#.to_string()),
                Matcher::Regex("I love this".to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(TEXT_RESPONSE)
            .create_async()
            .await;

        let client = SentimentClient::new(&server.url()).unwrap();
        let result = client.analyze_text("I love this").await.unwrap();

        assert_eq!(result.label, SentimentLabel::Positive);
        assert_eq!(result.confidence, 0.95);
        assert_eq!(result.scores.neu, 0.03);
        assert_eq!(result.scores.neg, 0.02);

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_analyze_text_http_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("POST", "/analyze").with_status(500).create_async().await;

        let client = SentimentClient::new(&server.url()).unwrap();
        let result = client.analyze_text("anything").await;

        match result {
            Err(SentimentError::Status { status, .. }) => assert_eq!(status.as_u16(), 500),
            other => panic!("Expected status error, got {:?}", other),
        }

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_analyze_text_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/analyze")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = SentimentClient::new(&server.url()).unwrap();
        let result = client.analyze_text("anything").await;

        assert!(matches!(result, Err(SentimentError::Json(_))));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_analyze_text_network_error() {
        // Nothing listens on port 1
        let client = SentimentClient::new("http://127.0.0.1:1").unwrap();
        let result = client.analyze_text("anything").await;

        assert!(matches!(result, Err(SentimentError::Reqwest(_))));
    }

    #[tokio::test]
    async fn test_analyze_csv_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/analyze_csv")
            .match_header("content-type", Matcher::Regex("multipart/form-data".to_string()))
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="file"; filename="reviews.csv""#.to_string()),
                Matcher::Regex("text/csv".to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(CSV_RESPONSE)
            .create_async()
            .await;

        let client = SentimentClient::new(&server.url()).unwrap();
        let upload = CsvUpload::new("reviews.csv", b"text\na\nb\n".to_vec());
        let batch = client.analyze_csv(upload).await.unwrap();

        assert_eq!(batch.results.len(), 2);
        assert_eq!(batch.results[0].text, "a");
        assert_eq!(batch.results[0].label, SentimentLabel::Neutral);
        assert_eq!(batch.results[1].label, SentimentLabel::Negative);
        assert_eq!(batch.results[1].confidence, 0.8);

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_analyze_csv_service_error_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/analyze_csv")
            .with_status(200)
            .with_body(r#"{"error":"CSV must have a 'text' column."}"#)
            .create_async()
            .await;

        let client = SentimentClient::new(&server.url()).unwrap();
        let upload = CsvUpload::new("people.csv", b"name,age\nJohn,25\n".to_vec());

        match client.analyze_csv(upload).await {
            Err(SentimentError::Service(message)) => {
                assert_eq!(message, "CSV must have a 'text' column.")
            }
            other => panic!("Expected service error, got {:?}", other),
        }

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_trailing_slash_base() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/analyze")
            .with_status(200)
            .with_body(TEXT_RESPONSE)
            .create_async()
            .await;

        let client = SentimentClient::new(&format!("{}/", server.url())).unwrap();
        assert!(client.analyze_text("ok").await.is_ok());

        mock.assert_async().await;
    }

    #[test]
    fn test_invalid_base_rejected() {
        assert!(matches!(
            SentimentClient::new("localhost"),
            Err(SentimentError::InvalidBaseUrl(_))
        ));
    }
}
