use actix_web::web;
use utoipa::TupleUnit;
use uuid::Uuid;

use super::schemas::{PlaceOrderData, PlaceOrderRequest, PaymentStatus};
use super::utils::{build_order_items, build_pending_record, order_total, validate_checkout_form};
use crate::commerce_client::{CommerceClient, CreateOrderRequest};
use crate::configuration::CheckoutSettings;
use crate::constants::GATEWAY_ORDER_TYPE;
use crate::errors::GenericError;
use crate::gateway_client::{CreateGatewayPaymentRequest, PaymentGatewayClient};
use crate::pending_checkout::PendingCheckoutStore;
use crate::schemas::GenericResponse;

#[utoipa::path(
    post,
    path = "/checkout/place",
    tag = "Checkout",
    description = "Validates the checkout form and either creates the order right away or stages it and hands the caller a payment gateway URL.",
    summary = "Place Order Request",
    request_body(content = PlaceOrderRequest, description = "Request Body"),
    responses(
        (status=200, description= "Order Placement Response", body= GenericResponse<PlaceOrderData>),
        (status=400, description= "Invalid Request body", body= GenericResponse<TupleUnit>),
        (status=500, description= "Internal Server Error", body= GenericResponse<TupleUnit>),
    )
)]
#[tracing::instrument(
    name = "place order",
    skip(commerce_client, gateway_client, pending_store, checkout_settings),
    fields(user_id=%body.user_id, payment_method=%body.payment_method)
)]
pub async fn place_order(
    body: PlaceOrderRequest,
    commerce_client: web::Data<CommerceClient>,
    gateway_client: web::Data<PaymentGatewayClient>,
    pending_store: web::Data<dyn PendingCheckoutStore>,
    checkout_settings: web::Data<CheckoutSettings>,
) -> Result<web::Json<GenericResponse<PlaceOrderData>>, GenericError> {
    validate_checkout_form(&body)?;

    let cart_items = commerce_client.fetch_cart(body.user_id).await?;
    if cart_items.is_empty() {
        return Err(GenericError::ValidationError(
            "Your cart is empty".to_string(),
        ));
    }
    let order_items = build_order_items(&cart_items);
    let shipping_address = body.shipping.full_address();

    if body.payment_method.is_deferred() {
        let reference = Uuid::new_v4();
        let amount = order_total(&order_items);
        let description = format!("Order payment for checkout {}", reference);
        let payment = gateway_client
            .create_payment(CreateGatewayPaymentRequest {
                amount: &amount,
                order_description: &description,
                order_type: GATEWAY_ORDER_TYPE,
                order_reference: &reference.to_string(),
                bank_code: "",
            })
            .await?;

        // The order is deliberately not created yet; it comes into being
        // only when the gateway confirms the payment. The record must be
        // staged before the caller navigates away.
        let record = build_pending_record(reference, &body, order_items, shipping_address);
        pending_store
            .stage(&record, checkout_settings.pending_ttl())
            .await
            .map_err(|e| {
                GenericError::ClientError("Failed to stage the pending order".to_string(), e)
            })?;

        return Ok(web::Json(GenericResponse::success(
            "Redirecting to the payment gateway",
            Some(PlaceOrderData::GatewayRedirect {
                payment_url: payment.payment_url,
            }),
        )));
    }

    let order_id = commerce_client
        .create_order(CreateOrderRequest {
            user_id: body.user_id,
            order_items: &order_items,
            shipping_address: &shipping_address,
            payment_method: body.payment_method,
            payment_status: PaymentStatus::NotPaid,
        })
        .await?;

    if body.save_address {
        if let Err(e) = commerce_client
            .save_address(body.user_id, &shipping_address, body.make_default)
            .await
        {
            tracing::warn!("Failed to save shipping address: {:?}", e);
        }
    }
    // Cart clearing must never block the confirmation screen.
    if let Err(e) = commerce_client.clear_cart(body.user_id).await {
        tracing::warn!("Failed to clear cart after order creation: {:?}", e);
    }

    Ok(web::Json(GenericResponse::success(
        "Order placed successfully",
        Some(PlaceOrderData::Confirmed {
            redirect_to: format!("/order-success/{}", order_id),
            order_id,
        }),
    )))
}
