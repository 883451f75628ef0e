use crate::errors::GenericError;
use crate::utils::pascal_to_snake_case;
use actix_http::Payload;
use actix_web::web::Json;
use actix_web::{FromRequest, HttpRequest};
use bigdecimal::BigDecimal;
use futures_util::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cod,
    Banking,
    Momo,
}

impl PaymentMethod {
    /// Only bank transfer goes through the hosted gateway; the other
    /// methods create the order immediately.
    pub fn is_deferred(&self) -> bool {
        matches!(self, PaymentMethod::Banking)
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", pascal_to_snake_case(&format!("{:?}", self)))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Paid,
    NotPaid,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_detail_id: i64,
    pub quantity: i32,
    #[schema(value_type = String)]
    pub price_at_order: BigDecimal,
}

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShippingForm {
    pub address: String,
    pub ward: String,
    pub district: String,
    pub city: String,
}

impl ShippingForm {
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.address, self.ward, self.district, self.city
        )
    }
}

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[schema(value_type = String)]
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub shipping: ShippingForm,
    pub note: Option<String>,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub save_address: bool,
    #[serde(default)]
    pub make_default: bool,
}

impl FromRequest for PlaceOrderRequest {
    type Error = GenericError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Json::<Self>::from_request(req, payload);

        Box::pin(async move {
            match fut.await {
                Ok(json) => Ok(json.into_inner()),
                Err(e) => Err(GenericError::ValidationError(e.to_string())),
            }
        })
    }
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PlaceOrderData {
    /// Order created right away (cash on delivery / wallet).
    Confirmed { order_id: i64, redirect_to: String },
    /// The caller must send the browser to the gateway page.
    GatewayRedirect { payment_url: String },
}
