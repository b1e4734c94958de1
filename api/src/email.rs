use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{Level, debug, instrument, warn};

use crate::contact::ContactFormInput;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

// structs and types

// the three identifiers that address a message at the provider
//
// these are public values (the user id is the account's public key), so they
// are baked into the wasm bundle at build time rather than fetched
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
}

impl EmailJsConfig {
    pub fn is_complete(&self) -> bool {
        !(self.service_id.is_empty() || self.template_id.is_empty() || self.user_id.is_empty())
    }
}

// every way a send can go wrong
//
// the contact page does not distinguish between these, they all end up as the
// same message to the visitor; the variants exist for the console log
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("email request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    #[error("email provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

// messages

// body of POST /api/v1.0/email/send
//
// template_params is passed through to the template verbatim, so the field names
// of ContactFormInput are the template variable names
#[derive(Clone, Debug, Serialize)]
pub struct SendEmailReq<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactFormInput,
}

impl<'a> SendEmailReq<'a> {
    pub fn new(config: &'a EmailJsConfig, input: &'a ContactFormInput) -> Self {
        SendEmailReq {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.user_id,
            template_params: input,
        }
    }
}

// delivery
//
// one call, one message.  there is no retry here and no idempotency key, so
// whoever calls send() twice gets two emails
#[async_trait(?Send)]
pub trait Mailer {
    async fn send(&self, input: &ContactFormInput) -> Result<(), DeliveryError>;
}

#[derive(Clone, Debug)]
pub struct EmailJsMailer {
    config: EmailJsConfig,
}

impl EmailJsMailer {
    pub fn new(config: EmailJsConfig) -> Self {
        if !config.is_complete() {
            // the provider will reject the request, which is the normal failure path
            warn!("emailjs configuration is incomplete, messages will not be delivered");
        }

        EmailJsMailer { config }
    }
}

#[async_trait(?Send)]
impl Mailer for EmailJsMailer {
    #[instrument(level=Level::DEBUG, skip_all)]
    async fn send(&self, input: &ContactFormInput) -> Result<(), DeliveryError> {
        let resp = Request::post(EMAILJS_SEND_URL)
            .json(&SendEmailReq::new(&self.config, input))?
            .send()
            .await?;

        // the provider answers with a short text body ("OK" or a reason)
        let status = resp.status();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(err) => {
                warn!(status, "failed to read email provider response: {err}");
                String::new()
            }
        };

        if resp.ok() {
            debug!(status, "email sent: {body}");
            Ok(())
        } else {
            Err(DeliveryError::Rejected { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn config() -> EmailJsConfig {
        EmailJsConfig {
            service_id: "service_portfolio".to_owned(),
            template_id: "template_contact".to_owned(),
            user_id: "public_key".to_owned(),
        }
    }

    #[test]
    fn send_request_matches_provider_shape() {
        let input = ContactFormInput {
            from_name: "Ada".to_owned(),
            reply_to: "ada@example.com".to_owned(),
            subject: "Hi".to_owned(),
            message: "Hello".to_owned(),
        };
        let config = config();

        let body = serde_json::to_value(SendEmailReq::new(&config, &input)).unwrap();

        assert_eq!(
            body,
            json!({
                "service_id": "service_portfolio",
                "template_id": "template_contact",
                "user_id": "public_key",
                "template_params": {
                    "from_name": "Ada",
                    "reply_to": "ada@example.com",
                    "subject": "Hi",
                    "message": "Hello",
                },
            })
        );
    }

    #[test]
    fn incomplete_config_is_detected() {
        assert!(config().is_complete());
        assert!(!EmailJsConfig::default().is_complete());

        let mut missing_template = config();
        missing_template.template_id.clear();
        assert!(!missing_template.is_complete());
    }

    #[test]
    fn rejection_reports_status_and_body() {
        let err = DeliveryError::Rejected {
            status: 400,
            body: "The Public Key is invalid".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "email provider rejected the message (400): The Public Key is invalid"
        );
    }
}
