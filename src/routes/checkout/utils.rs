use bigdecimal::BigDecimal;
use uuid::Uuid;

use super::errors::CheckoutOrderError;
use super::schemas::{OrderItem, PlaceOrderRequest};
use crate::commerce_client::CartItemData;
use crate::domain::{EmailObject, PhoneObject};
use crate::pending_checkout::{PendingCheckoutRecord, StagedAddress};

/// Fail-closed form validation. The first failing field wins and nothing
/// past it is inspected; no remote call may happen before this passes.
pub fn validate_checkout_form(request: &PlaceOrderRequest) -> Result<(), CheckoutOrderError> {
    if request.full_name.trim().is_empty() {
        return Err(CheckoutOrderError::ValidationError(
            "Please enter your full name".to_string(),
        ));
    }
    if request.email.trim().is_empty() {
        return Err(CheckoutOrderError::ValidationError(
            "Please enter your email".to_string(),
        ));
    }
    if request.phone.trim().is_empty() {
        return Err(CheckoutOrderError::ValidationError(
            "Please enter your phone number".to_string(),
        ));
    }
    if request.shipping.address.trim().is_empty() {
        return Err(CheckoutOrderError::ValidationError(
            "Please enter your address".to_string(),
        ));
    }
    if request.shipping.city.trim().is_empty() {
        return Err(CheckoutOrderError::ValidationError(
            "Please select a province/city".to_string(),
        ));
    }
    if request.shipping.district.trim().is_empty() {
        return Err(CheckoutOrderError::ValidationError(
            "Please select a district".to_string(),
        ));
    }
    if request.shipping.ward.trim().is_empty() {
        return Err(CheckoutOrderError::ValidationError(
            "Please select a ward".to_string(),
        ));
    }
    if EmailObject::parse(request.email.clone()).is_err() {
        return Err(CheckoutOrderError::ValidationError(
            "Email is invalid".to_string(),
        ));
    }
    if PhoneObject::parse(request.phone.clone()).is_err() {
        return Err(CheckoutOrderError::ValidationError(
            "Phone number is invalid".to_string(),
        ));
    }
    Ok(())
}

/// Snapshot the cart into order lines priced at submission time.
pub fn build_order_items(cart_items: &[CartItemData]) -> Vec<OrderItem> {
    cart_items
        .iter()
        .map(|item| OrderItem {
            product_detail_id: item.product_detail_id,
            quantity: item.quantity,
            price_at_order: item.price.clone(),
        })
        .collect()
}

pub fn order_total(order_items: &[OrderItem]) -> BigDecimal {
    order_items.iter().fold(BigDecimal::from(0), |total, item| {
        total + &item.price_at_order * BigDecimal::from(item.quantity)
    })
}

pub fn build_pending_record(
    reference: Uuid,
    request: &PlaceOrderRequest,
    order_items: Vec<OrderItem>,
    shipping_address: String,
) -> PendingCheckoutRecord {
    let new_address = request.save_address.then(|| StagedAddress {
        full_address: shipping_address.clone(),
        make_default: request.make_default,
    });
    PendingCheckoutRecord {
        reference,
        user_id: request.user_id,
        order_items,
        shipping_address,
        payment_method: request.payment_method,
        new_address,
    }
}
