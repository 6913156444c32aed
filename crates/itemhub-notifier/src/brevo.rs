//! Brevo transactional email backend.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info};

use itemhub_core::config::NotificationConfig;
use itemhub_core::error::{AppError, ErrorKind};
use itemhub_core::result::AppResult;
use itemhub_entity::{Item, ItemAction};

use crate::notifier::Notifier;
use crate::template::EmailMessage;

#[derive(Debug, Serialize)]
struct Contact<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailRequest<'a> {
    sender: Contact<'a>,
    to: Vec<Contact<'a>>,
    subject: &'a str,
    html_content: &'a str,
}

/// Sends notification emails through Brevo's `smtp/email` API.
#[derive(Debug, Clone)]
pub struct BrevoNotifier {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    sender_email: String,
    recipient_email: String,
}

impl BrevoNotifier {
    /// Create a notifier from configuration.
    pub fn new(config: &NotificationConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to create HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            sender_email: config.sender_email.clone(),
            recipient_email: config.recipient_email.clone(),
        })
    }

    /// Submit the email for `action` on `item`.
    ///
    /// Transport failures and non-2xx answers are `ExternalService` errors.
    pub async fn send(&self, action: ItemAction, item: Option<&Item>) -> AppResult<()> {
        let message = EmailMessage::for_item(action, item);
        let body = SendEmailRequest {
            sender: Contact {
                email: &self.sender_email,
            },
            to: vec![Contact {
                email: &self.recipient_email,
            }],
            subject: &message.subject,
            html_content: &message.html_content,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .header("accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Email request failed: {e}"),
                    e,
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(format!(
                "Email provider returned {status}: {detail}"
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl Notifier for BrevoNotifier {
    async fn notify(&self, action: ItemAction, item: Option<&Item>) {
        let item_id = item.map(|i| i.id);
        match self.send(action, item).await {
            Ok(()) => info!(action = %action, item_id = ?item_id, "Notification email sent"),
            Err(e) => error!(
                action = %action,
                item_id = ?item_id,
                error = %e,
                "Failed to send notification email"
            ),
        }
    }
}
