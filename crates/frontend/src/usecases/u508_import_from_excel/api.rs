use async_trait::async_trait;
use contracts::usecases::u508_import_from_excel::ImportResult;
use gloo_net::http::Request;
use web_sys::{FormData, HtmlFormElement};

use super::controller::ImportTransport;
use super::error::ImportError;
use crate::shared::api_utils::{api_url, js_error_message};

/// Multipart body from every named control of the form, the file included.
pub fn build_form_data(form: &HtmlFormElement) -> Result<FormData, ImportError> {
    FormData::new_with_form(form).map_err(|e| ImportError::Payload(js_error_message(&e)))
}

/// Interpret a finished response: 2xx bodies must be an [`ImportResult`],
/// anything else is returned to the user as written.
pub fn decode_import_response(status: u16, body: String) -> Result<ImportResult, ImportError> {
    if !(200..300).contains(&status) {
        return Err(ImportError::Server { status, body });
    }
    let decoded = serde_json::from_str::<ImportResult>(&body);
    match decoded {
        Ok(result) => Ok(result),
        Err(e) => {
            log::warn!("import response is not an import result: {}", e);
            Err(ImportError::Decode {
                status,
                body,
                reason: e.to_string(),
            })
        }
    }
}

/// Posts the form to the import endpoint with `gloo-net`.
#[derive(Debug, Clone)]
pub struct HttpImportTransport {
    url: String,
}

impl HttpImportTransport {
    pub fn new(endpoint: &str) -> Self {
        Self {
            url: api_url(endpoint),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl ImportTransport<FormData> for HttpImportTransport {
    async fn send(&self, payload: FormData) -> Result<ImportResult, ImportError> {
        // No headers: the browser sets the multipart boundary itself.
        let response = Request::post(&self.url)
            .body(payload)
            .map_err(|e| ImportError::Transport(format!("Failed to create request: {}", e)))?
            .send()
            .await
            .map_err(|e| ImportError::Transport(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ImportError::Transport(format!("Failed to read response: {}", e)))?;

        decode_import_response(status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success() {
        let result =
            decode_import_response(200, r#"{"total":10,"successful":9,"failed":1}"#.into());
        assert_eq!(result, Ok(ImportResult::new(10, 9, 1)));
    }

    #[test]
    fn test_decode_error_status_keeps_body() {
        let result = decode_import_response(400, "Invalid file format".into());
        assert_eq!(
            result,
            Err(ImportError::Server {
                status: 400,
                body: "Invalid file format".into()
            })
        );
        assert_eq!(result.unwrap_err().to_string(), "Invalid file format");
    }

    #[test]
    fn test_decode_problem_json_is_not_interpreted() {
        let body = r#"{"title":"Internal Server Error","status":500}"#;
        let err = decode_import_response(500, body.into()).unwrap_err();
        assert_eq!(err.to_string(), body);
    }

    #[test]
    fn test_decode_non_json_success() {
        let err = decode_import_response(200, "Import done".into()).unwrap_err();
        assert!(matches!(err, ImportError::Decode { status: 200, .. }));
        assert_eq!(err.to_string(), "Import done");
    }

    #[test]
    fn test_transport_url() {
        assert_eq!(HttpImportTransport::new("import").url(), "/import");
    }
}
