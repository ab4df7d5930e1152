use async_trait::async_trait;
use baccaroad_engine::outcome::HistoryEntry;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::api::{
    self, AddResultReceipt, AddResultRequest, ApiResponse, ClearReceipt, HistoryPayload,
    NewShoeReceipt, PredictRequest, Prediction, TrainReport,
};
use crate::errors::ClientError;
use crate::settings::ClientSettings;

/// The six backend endpoints the pages talk to.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn train_model(&self) -> Result<ApiResponse<TrainReport>, ClientError>;
    async fn predict(&self, request: &PredictRequest)
        -> Result<ApiResponse<Prediction>, ClientError>;
    async fn get_history(&self) -> Result<ApiResponse<HistoryPayload>, ClientError>;
    async fn add_result(
        &self,
        request: &AddResultRequest,
    ) -> Result<ApiResponse<AddResultReceipt>, ClientError>;
    async fn clear_history(&self) -> Result<ApiResponse<ClearReceipt>, ClientError>;
    async fn new_shoe(&self) -> Result<ApiResponse<NewShoeReceipt>, ClientError>;
}

/// JSON-over-HTTP implementation of [`Backend`].
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: Client,
    settings: ClientSettings,
}

impl HttpBackend {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        settings.validate()?;
        let http = Client::builder()
            .timeout(settings.request_timeout())
            .build()?;
        Ok(Self { http, settings })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.settings.endpoint(path))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        path: &'static str,
        builder: RequestBuilder,
    ) -> Result<ApiResponse<T>, ClientError> {
        tracing::debug!(endpoint = path, "sending backend request");
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        match serde_json::from_slice::<serde_json::Value>(&body) {
            Ok(value) => {
                let decoded = ApiResponse::from_value(value)?;
                tracing::debug!(
                    endpoint = path,
                    status = status.as_u16(),
                    success = decoded.is_success(),
                    "backend responded"
                );
                Ok(decoded)
            }
            Err(_) if !status.is_success() => Err(ClientError::Status {
                status: status.as_u16(),
            }),
            Err(e) => Err(ClientError::Decode(e)),
        }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn train_model(&self) -> Result<ApiResponse<TrainReport>, ClientError> {
        self.send(api::TRAIN_MODEL, self.request(Method::POST, api::TRAIN_MODEL))
            .await
    }

    async fn predict(
        &self,
        request: &PredictRequest,
    ) -> Result<ApiResponse<Prediction>, ClientError> {
        let builder = self.request(Method::POST, api::PREDICT).json(request);
        self.send(api::PREDICT, builder).await
    }

    async fn get_history(&self) -> Result<ApiResponse<HistoryPayload>, ClientError> {
        self.send(api::GET_HISTORY, self.request(Method::GET, api::GET_HISTORY))
            .await
    }

    async fn add_result(
        &self,
        request: &AddResultRequest,
    ) -> Result<ApiResponse<AddResultReceipt>, ClientError> {
        let builder = self.request(Method::POST, api::ADD_RESULT).json(request);
        self.send(api::ADD_RESULT, builder).await
    }

    async fn clear_history(&self) -> Result<ApiResponse<ClearReceipt>, ClientError> {
        self.send(
            api::CLEAR_HISTORY,
            self.request(Method::POST, api::CLEAR_HISTORY),
        )
        .await
    }

    async fn new_shoe(&self) -> Result<ApiResponse<NewShoeReceipt>, ClientError> {
        self.send(api::NEW_SHOE, self.request(Method::POST, api::NEW_SHOE))
            .await
    }
}

/// Reads a saved history file: either a bare list or a `get_history` body.
pub fn parse_history_document(body: &[u8]) -> Result<Vec<HistoryEntry>, ClientError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if value.is_array() {
        return Ok(serde_json::from_value(value)?);
    }
    ApiResponse::<HistoryPayload>::from_value(value)?
        .into_result()
        .map(|payload| payload.history)
}
