use anyhow::anyhow;
use bigdecimal::BigDecimal;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::errors::GenericError;

/// Client for the hosted payment gateway. The gateway takes the payment
/// on its own page and sends the browser back with a result code; the
/// only correlation between the two legs is `order_reference`, echoed in
/// the return query string as `vnp_TxnRef`.
#[derive(Debug)]
pub struct PaymentGatewayClient {
    http_client: Client,
    base_url: String,
    authorization_token: SecretString,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGatewayPaymentRequest<'a> {
    pub amount: &'a BigDecimal,
    pub order_description: &'a str,
    pub order_type: &'a str,
    pub order_reference: &'a str,
    pub bank_code: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayPaymentData {
    pub payment_url: String,
}

impl PaymentGatewayClient {
    #[tracing::instrument]
    pub fn new(
        base_url: String,
        authorization_token: SecretString,
        timeout: std::time::Duration,
    ) -> Self {
        tracing::info!("Establishing connection to the payment gateway.");
        let http_client = Client::builder().timeout(timeout).build().unwrap();
        Self {
            http_client,
            base_url,
            authorization_token,
        }
    }

    fn get_auth_token(&self) -> String {
        format!("Bearer {}", self.authorization_token.expose_secret())
    }

    #[tracing::instrument(skip(self, request_body), fields(reference=%request_body.order_reference))]
    pub async fn create_payment(
        &self,
        request_body: CreateGatewayPaymentRequest<'_>,
    ) -> Result<GatewayPaymentData, GenericError> {
        let url = format!("{}/api/VNPay/create-payment", self.base_url);
        let response = self
            .http_client
            .post(&url)
            .header("Authorization", self.get_auth_token())
            .json(&request_body)
            .send()
            .await
            .map_err(|err| GenericError::UnexpectedError(anyhow!("Request error: {}", err)))?;

        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(|err| {
                GenericError::SerializationError(format!(
                    "Failed to parse payment response: {}",
                    err
                ))
            })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Payment gateway request failed".to_string());
            let error_message = match status {
                StatusCode::BAD_REQUEST => GenericError::ValidationError(message),
                _ => GenericError::ClientError(
                    "Payment gateway request failed".to_string(),
                    anyhow!(message),
                ),
            };
            Err(error_message)
        }
    }
}

/// Documented gateway result codes, as shown to the customer when a
/// payment does not go through.
pub fn describe_response_code(code: Option<&str>) -> &'static str {
    match code {
        Some("00") => "Payment completed successfully",
        Some("07") => "Payment was flagged as suspicious and held",
        Some("09") => "The card is not registered for online banking",
        Some("11") => "The payment session expired",
        Some("12") => "The card or account is locked",
        Some("13") => "The one-time password was entered incorrectly",
        Some("24") => "The payment was cancelled at the gateway",
        Some("51") => "The account has insufficient funds",
        Some("65") => "The account exceeded its daily transaction limit",
        Some("75") => "The issuing bank is under maintenance",
        Some("97") => "The payment could not be verified by the gateway",
        Some(_) => "The payment was not completed",
        None => "The gateway returned no result code",
    }
}
