use actix_web::web;
use utoipa::TupleUnit;
use uuid::Uuid;

use super::schemas::{OrderCancelRequest, OrderFetchData, OrderListQuery, OrderStatus};
use super::utils::decorate_order;
use crate::commerce_client::{CommerceClient, OrderSummaryData};
use crate::errors::GenericError;
use crate::schemas::GenericResponse;

#[utoipa::path(
    get,
    path = "/order/fetch/{order_id}",
    tag = "Order",
    description = "Fetches a previously created order with its items, totals, status info and timeline.",
    summary = "Order Fetch Request",
    responses(
        (status=200, description= "Order Fetch Response", body= GenericResponse<OrderFetchData>),
        (status=410, description= "Data not found", body= GenericResponse<TupleUnit>),
        (status=500, description= "Internal Server Error", body= GenericResponse<TupleUnit>),
    )
)]
#[tracing::instrument(name = "fetch order", skip(commerce_client))]
pub async fn fetch_order(
    path: web::Path<i64>,
    commerce_client: web::Data<CommerceClient>,
) -> Result<web::Json<GenericResponse<OrderFetchData>>, GenericError> {
    let order_id = path.into_inner();
    let order = commerce_client
        .fetch_order(order_id)
        .await?
        .ok_or_else(|| GenericError::DataNotFound("Order not found".to_string()))?;

    Ok(web::Json(GenericResponse::success(
        "Successfully fetched order",
        Some(decorate_order(order)),
    )))
}

#[utoipa::path(
    get,
    path = "/order/list/{user_id}",
    tag = "Order",
    description = "Fetches a page of the user's order summaries.",
    summary = "Order List Request",
    responses(
        (status=200, description= "Order List Response", body= GenericResponse<Vec<OrderSummaryData>>),
        (status=500, description= "Internal Server Error", body= GenericResponse<TupleUnit>),
    )
)]
#[tracing::instrument(name = "list orders", skip(commerce_client))]
pub async fn list_orders(
    path: web::Path<Uuid>,
    query: web::Query<OrderListQuery>,
    commerce_client: web::Data<CommerceClient>,
) -> Result<web::Json<GenericResponse<Vec<OrderSummaryData>>>, GenericError> {
    let user_id = path.into_inner();
    let orders = commerce_client
        .fetch_orders_for_user(user_id, query.page_num, query.page_size)
        .await?;

    Ok(web::Json(GenericResponse::success(
        "Successfully fetched orders",
        Some(orders),
    )))
}

#[utoipa::path(
    post,
    path = "/order/cancel",
    tag = "Order",
    description = "Cancels an order while it is still in a cancellable status.",
    summary = "Order Cancel Request",
    request_body(content = OrderCancelRequest, description = "Request Body"),
    responses(
        (status=200, description= "Order Cancel Response", body= GenericResponse<TupleUnit>),
        (status=400, description= "Invalid Request body", body= GenericResponse<TupleUnit>),
        (status=410, description= "Data not found", body= GenericResponse<TupleUnit>),
        (status=500, description= "Internal Server Error", body= GenericResponse<TupleUnit>),
    )
)]
#[tracing::instrument(name = "cancel order", skip(commerce_client), fields(order_id=body.order_id))]
pub async fn cancel_order(
    body: OrderCancelRequest,
    commerce_client: web::Data<CommerceClient>,
) -> Result<web::Json<GenericResponse<()>>, GenericError> {
    let order = commerce_client
        .fetch_order(body.order_id)
        .await?
        .ok_or_else(|| GenericError::DataNotFound("Order not found".to_string()))?;

    if !order.status.is_cancellable() {
        return Err(GenericError::ValidationError(format!(
            "An order in status {} can no longer be cancelled",
            order.status
        )));
    }

    commerce_client
        .update_order_status(body.order_id, OrderStatus::Cancelled)
        .await?;

    Ok(web::Json(GenericResponse::success(
        "Order cancelled successfully",
        Some(()),
    )))
}
