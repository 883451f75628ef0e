use super::schemas::{PaymentReturnData, PaymentReturnState};
use crate::commerce_client::{CommerceClient, CreateOrderRequest};
use crate::errors::GenericError;
use crate::pending_checkout::PendingCheckoutRecord;
use crate::routes::checkout::schemas::PaymentStatus;

/// Create the order from a consumed pending record. Address persistence
/// and cart clearing run after the creation and never demote the
/// outcome.
#[tracing::instrument(
    name = "finalize pending order",
    skip(commerce_client, record),
    fields(reference=%record.reference, user_id=%record.user_id)
)]
pub async fn finalize_pending_order(
    commerce_client: &CommerceClient,
    record: &PendingCheckoutRecord,
) -> Result<i64, GenericError> {
    let order_id = commerce_client
        .create_order(CreateOrderRequest {
            user_id: record.user_id,
            order_items: &record.order_items,
            shipping_address: &record.shipping_address,
            payment_method: record.payment_method,
            payment_status: PaymentStatus::Paid,
        })
        .await?;

    let address_task = async {
        if let Some(staged) = &record.new_address {
            if let Err(e) = commerce_client
                .save_address(record.user_id, &staged.full_address, staged.make_default)
                .await
            {
                tracing::warn!("Failed to save shipping address after payment: {:?}", e);
            }
        }
    };
    let cart_task = async {
        if let Err(e) = commerce_client.clear_cart(record.user_id).await {
            tracing::warn!("Failed to clear cart after payment: {:?}", e);
        }
    };
    futures::future::join(address_task, cart_task).await;

    Ok(order_id)
}

pub fn cart_redirect(state: PaymentReturnState, delay_secs: u64) -> PaymentReturnData {
    PaymentReturnData {
        state,
        order_id: None,
        redirect_to: "/cart".to_string(),
        redirect_delay_secs: Some(delay_secs),
    }
}
