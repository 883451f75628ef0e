use actix_http::Payload;
use actix_web::web::Json;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::commerce_client::OrderDetailData;
use crate::errors::GenericError;

/// Canonical order lifecycle. The wire format is the ordinal; the linear
/// progression is pending < processing < shipping < completed, with
/// cancelled a terminal side branch reachable only from the first two.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipping,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn ordinal(self) -> u8 {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Processing => 1,
            OrderStatus::Shipping => 2,
            OrderStatus::Completed => 3,
            OrderStatus::Cancelled => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipping => "shipping",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            OrderStatus::Pending => "yellow",
            OrderStatus::Processing => "blue",
            OrderStatus::Shipping => "purple",
            OrderStatus::Completed => "green",
            OrderStatus::Cancelled => "red",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OrderStatus::Pending => "The order is awaiting confirmation",
            OrderStatus::Processing => "The order is being prepared",
            OrderStatus::Shipping => "The order is on its way",
            OrderStatus::Completed => "The order has been delivered",
            OrderStatus::Cancelled => "The order has been cancelled",
        }
    }

    /// A customer may cancel only before the order ships.
    pub fn is_cancellable(self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Processing)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    pub fn info(self) -> OrderStatusInfo {
        OrderStatusInfo {
            code: self.ordinal(),
            label: self.label(),
            color: self.color(),
            description: self.description(),
        }
    }

    /// Progress through the linear stages. A cancelled order shows no
    /// completed steps.
    pub fn timeline(self) -> Vec<OrderTimelineStep> {
        [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipping,
            OrderStatus::Completed,
        ]
        .into_iter()
        .map(|step| OrderTimelineStep {
            status: step,
            is_completed: step.ordinal() <= self.ordinal() && self != OrderStatus::Cancelled,
        })
        .collect()
    }
}

impl TryFrom<u8> for OrderStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OrderStatus::Pending),
            1 => Ok(OrderStatus::Processing),
            2 => Ok(OrderStatus::Shipping),
            3 => Ok(OrderStatus::Completed),
            4 => Ok(OrderStatus::Cancelled),
            other => Err(format!("{} is not a known order status", other)),
        }
    }
}

impl From<OrderStatus> for u8 {
    fn from(value: OrderStatus) -> Self {
        value.ordinal()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusInfo {
    pub code: u8,
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderTimelineStep {
    #[schema(value_type = u8)]
    pub status: OrderStatus,
    pub is_completed: bool,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderFetchData {
    pub order: OrderDetailData,
    pub can_cancel: bool,
    pub status_info: OrderStatusInfo,
    pub timeline: Vec<OrderTimelineStep>,
}

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderCancelRequest {
    pub order_id: i64,
}

impl FromRequest for OrderCancelRequest {
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

fn default_page_num() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderListQuery {
    #[serde(default = "default_page_num")]
    pub page_num: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}
