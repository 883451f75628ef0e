use anyhow::anyhow;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::GenericError;
use crate::routes::checkout::schemas::{OrderItem, PaymentMethod, PaymentStatus};
use crate::routes::order::schemas::OrderStatus;

/// Client for the commerce backend that owns carts, orders and saved
/// addresses. This service never mutates an order directly; the only
/// write paths are order creation and explicit status updates.
#[derive(Debug)]
pub struct CommerceClient {
    http_client: Client,
    base_url: String,
    authorization_token: SecretString,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CartItemData {
    pub product_detail_id: i64,
    pub product_id: i64,
    pub name: String,
    pub color: String,
    pub size: String,
    pub quantity: i32,
    pub price: BigDecimal,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest<'a> {
    pub user_id: Uuid,
    pub order_items: &'a [OrderItem],
    pub shipping_address: &'a str,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAddressRequest<'a> {
    pub user_id: Uuid,
    pub full_address: &'a str,
    pub is_default: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    pub order_id: i64,
    pub status: OrderStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailData {
    pub product_detail_id: i64,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineData {
    pub order_item_id: i64,
    pub quantity: i32,
    #[schema(value_type = String)]
    pub unit_price: BigDecimal,
    pub product_detail: ProductDetailData,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderPaymentData {
    pub method: PaymentMethod,
    #[schema(value_type = String)]
    pub total: BigDecimal,
    pub status: Option<PaymentStatus>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailData {
    pub order_id: i64,
    #[serde(rename = "createAt")]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String)]
    pub total_price: BigDecimal,
    #[schema(value_type = u8)]
    pub status: OrderStatus,
    pub shipping_address: String,
    pub fullname: String,
    pub phone_number: String,
    pub payment: OrderPaymentData,
    pub order_items: Vec<OrderLineData>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummaryData {
    pub order_id: i64,
    pub order_date: DateTime<Utc>,
    #[schema(value_type = u8)]
    pub status: OrderStatus,
    #[schema(value_type = String)]
    pub total_price: BigDecimal,
}

impl CommerceClient {
    pub fn new(
        base_url: String,
        authorization_token: SecretString,
        timeout: std::time::Duration,
    ) -> Self {
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

    async fn error_from_response(
        &self,
        status: StatusCode,
        response: reqwest::Response,
    ) -> GenericError {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Commerce service request failed".to_string());
        match status {
            StatusCode::BAD_REQUEST => GenericError::ValidationError(message),
            StatusCode::NOT_FOUND | StatusCode::GONE => GenericError::DataNotFound(message),
            _ => GenericError::ClientError(
                "Commerce service request failed".to_string(),
                anyhow!(message),
            ),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch_cart(&self, user_id: Uuid) -> Result<Vec<CartItemData>, GenericError> {
        let url = format!(
            "{}/api/Cart/GetAllCartItems?userId={}",
            self.base_url, user_id
        );
        let response = self
            .http_client
            .get(&url)
            .header("Authorization", self.get_auth_token())
            .send()
            .await
            .map_err(|err| GenericError::UnexpectedError(anyhow!("Request error: {}", err)))?;

        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(|err| {
                GenericError::SerializationError(format!("Failed to parse cart response: {}", err))
            })
        } else {
            Err(self.error_from_response(status, response).await)
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn clear_cart(&self, user_id: Uuid) -> Result<(), GenericError> {
        let url = format!("{}/api/Cart/ClearCart?userId={}", self.base_url, user_id);
        let response = self
            .http_client
            .delete(&url)
            .header("Authorization", self.get_auth_token())
            .send()
            .await
            .map_err(|err| GenericError::UnexpectedError(anyhow!("Request error: {}", err)))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.error_from_response(status, response).await)
        }
    }

    #[tracing::instrument(skip(self, request_body), fields(user_id=%request_body.user_id))]
    pub async fn create_order(
        &self,
        request_body: CreateOrderRequest<'_>,
    ) -> Result<i64, GenericError> {
        let url = format!("{}/api/orders", self.base_url);
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
            // The backend answers with the bare order id.
            response.json().await.map_err(|err| {
                GenericError::SerializationError(format!("Failed to parse order id: {}", err))
            })
        } else {
            Err(self.error_from_response(status, response).await)
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch_order(&self, order_id: i64) -> Result<Option<OrderDetailData>, GenericError> {
        let url = format!("{}/api/orders/{}", self.base_url, order_id);
        let response = self
            .http_client
            .get(&url)
            .header("Authorization", self.get_auth_token())
            .send()
            .await
            .map_err(|err| GenericError::UnexpectedError(anyhow!("Request error: {}", err)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            return Ok(None);
        }
        if status.is_success() {
            let order: OrderDetailData = response.json().await.map_err(|err| {
                GenericError::SerializationError(format!("Failed to parse order response: {}", err))
            })?;
            Ok(Some(order))
        } else {
            Err(self.error_from_response(status, response).await)
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch_orders_for_user(
        &self,
        user_id: Uuid,
        page_num: u32,
        page_size: u32,
    ) -> Result<Vec<OrderSummaryData>, GenericError> {
        let url = format!(
            "{}/api/orders/user/{}?pageNum={}&pageSize={}",
            self.base_url, user_id, page_num, page_size
        );
        let response = self
            .http_client
            .get(&url)
            .header("Authorization", self.get_auth_token())
            .send()
            .await
            .map_err(|err| GenericError::UnexpectedError(anyhow!("Request error: {}", err)))?;

        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(|err| {
                GenericError::SerializationError(format!(
                    "Failed to parse order list response: {}",
                    err
                ))
            })
        } else {
            Err(self.error_from_response(status, response).await)
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        order_id: i64,
        order_status: OrderStatus,
    ) -> Result<(), GenericError> {
        let url = format!("{}/api/orders/update-status", self.base_url);
        let request_body = UpdateOrderStatusRequest {
            order_id,
            status: order_status,
        };
        let response = self
            .http_client
            .put(&url)
            .header("Authorization", self.get_auth_token())
            .json(&request_body)
            .send()
            .await
            .map_err(|err| GenericError::UnexpectedError(anyhow!("Request error: {}", err)))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.error_from_response(status, response).await)
        }
    }

    #[tracing::instrument(skip(self, full_address))]
    pub async fn save_address(
        &self,
        user_id: Uuid,
        full_address: &str,
        is_default: bool,
    ) -> Result<(), GenericError> {
        let url = format!("{}/api/address/add", self.base_url);
        let request_body = SaveAddressRequest {
            user_id,
            full_address,
            is_default,
        };
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
            Ok(())
        } else {
            Err(self.error_from_response(status, response).await)
        }
    }
}
