use actix_web::web;
use utoipa::TupleUnit;

use super::schemas::{PaymentReturnData, PaymentReturnParams, PaymentReturnState};
use super::utils::{cart_redirect, finalize_pending_order};
use crate::commerce_client::CommerceClient;
use crate::configuration::CheckoutSettings;
use crate::errors::GenericError;
use crate::gateway_client::describe_response_code;
use crate::pending_checkout::PendingCheckoutStore;
use crate::schemas::GenericResponse;

/// Terminal handler for the gateway redirect. The record is consumed
/// atomically before the order is created; a reload of the return URL
/// finds nothing and creates nothing.
#[utoipa::path(
    get,
    path = "/payment/return",
    tag = "Payment",
    description = "Interprets the redirect back from the payment gateway and finalizes or abandons the pending order.",
    summary = "Payment Return Handler",
    responses(
        (status=200, description= "Payment Return Response", body= GenericResponse<PaymentReturnData>),
        (status=500, description= "Internal Server Error", body= GenericResponse<TupleUnit>),
    )
)]
#[tracing::instrument(
    name = "payment return",
    skip(commerce_client, pending_store, checkout_settings),
    fields(response_code=query.response_code.as_deref().unwrap_or("absent"))
)]
pub async fn payment_return(
    query: web::Query<PaymentReturnParams>,
    commerce_client: web::Data<CommerceClient>,
    pending_store: web::Data<dyn PendingCheckoutStore>,
    checkout_settings: web::Data<CheckoutSettings>,
) -> Result<web::Json<GenericResponse<PaymentReturnData>>, GenericError> {
    let params = query.into_inner();
    let delay_secs = checkout_settings.redirect_delay_secs;

    if !params.is_success() {
        // The redirect is over; a record left behind would break the
        // exists-iff-in-flight invariant.
        if let Some(reference) = params.reference() {
            if let Err(e) = pending_store.discard(reference).await {
                tracing::warn!("Failed to discard pending checkout record: {:?}", e);
            }
        }
        return Ok(web::Json(GenericResponse::error(
            describe_response_code(params.response_code.as_deref()),
            "200",
            Some(cart_redirect(PaymentReturnState::Failed, delay_secs)),
        )));
    }

    let Some(reference) = params.reference() else {
        tracing::error!("Successful gateway return without a usable transaction reference");
        return Ok(web::Json(GenericResponse::error(
            "Order details could not be found",
            "200",
            Some(cart_redirect(PaymentReturnState::Error, delay_secs)),
        )));
    };

    let record = match pending_store.take(reference).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            tracing::error!("No pending checkout record for reference {}", reference);
            return Ok(web::Json(GenericResponse::error(
                "Order details could not be found",
                "200",
                Some(cart_redirect(PaymentReturnState::Error, delay_secs)),
            )));
        }
        Err(e) => {
            tracing::error!("Failed to read pending checkout record: {:?}", e);
            return Ok(web::Json(GenericResponse::error(
                "Something went wrong while processing the payment result",
                "200",
                Some(cart_redirect(PaymentReturnState::Error, delay_secs)),
            )));
        }
    };

    match finalize_pending_order(&commerce_client, &record).await {
        Ok(order_id) => Ok(web::Json(GenericResponse::success(
            "Payment confirmed and order created",
            Some(PaymentReturnData {
                state: PaymentReturnState::Success,
                order_id: Some(order_id),
                redirect_to: format!("/order-success/{}", order_id),
                redirect_delay_secs: None,
            }),
        ))),
        Err(e) => {
            // The record is already consumed; the session restarts from
            // the cart rather than retrying a half-finished creation.
            tracing::error!("Failed to create order after payment: {:?}", e);
            Ok(web::Json(GenericResponse::error(
                "Something went wrong while processing the payment result",
                "200",
                Some(cart_redirect(PaymentReturnState::Error, delay_secs)),
            )))
        }
    }
}
