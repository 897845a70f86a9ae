use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::{Request, Response};
use gloo_net::Error as GlooError;
use serde::Serialize;

use crate::config;
use crate::utils::submission::{mask_email, SubmissionError, SubmissionHandler};

/// Minimal JSON client for the signup endpoint
pub struct Api;

/// POST wrapper that logs what it sends
pub struct RequestWrapper {
    request: Request,
    url: String,
}

impl RequestWrapper {
    fn post(url: &str) -> Self {
        Self {
            request: Request::post(url),
            url: url.to_string(),
        }
    }

    /// Add a header to the request
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request = self.request.header(name, value);
        self
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, serde_json::Error> {
        let body = encode_json(data)?;
        self.request = self
            .request
            .header("Content-Type", "application/json")
            .body(body);
        Ok(self)
    }

    pub async fn send(self) -> Result<Response, GlooError> {
        log::debug!("POST {}", self.url);
        let response = self.request.send().await?;
        if !response.ok() {
            log::warn!("POST {} returned {}", self.url, response.status());
        }
        Ok(response)
    }
}

impl Api {
    pub fn post(url: &str) -> RequestWrapper {
        RequestWrapper::post(url)
    }
}

fn encode_json<T: Serialize>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(data)
}

#[derive(Serialize)]
struct SubscribeRequest<'a> {
    email: &'a str,
}

/// Posts `{"email": ...}` to a mailing-list endpoint.
pub struct HttpSubmitter {
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config() -> Option<Self> {
        config::get_subscribe_url().map(Self::new)
    }
}

impl SubmissionHandler for HttpSubmitter {
    fn submit(&self, email: String) -> LocalBoxFuture<'static, Result<(), SubmissionError>> {
        let endpoint = self.endpoint.clone();
        async move {
            log::info!("Submitting launch signup for {}", mask_email(&email));
            let response = Api::post(&endpoint)
                .header("Accept", "application/json")
                .json(&SubscribeRequest { email: &email })
                .map_err(|e| SubmissionError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmissionError::Network(e.to_string()))?;

            if response.ok() {
                Ok(())
            } else {
                Err(SubmissionError::Rejected {
                    status: response.status(),
                })
            }
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_body_is_a_single_email_field() {
        let body = encode_json(&SubscribeRequest { email: "ana@cafcohome.com" }).unwrap();
        assert_eq!(body, r#"{"email":"ana@cafcohome.com"}"#);
    }

    #[test]
    fn signup_body_escapes_quotes() {
        let body = encode_json(&SubscribeRequest { email: "a\"b@x.com" }).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["email"], "a\"b@x.com");
    }
}
