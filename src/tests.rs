#[cfg(test)]
pub mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::commerce_client::{
        CartItemData, OrderDetailData, OrderLineData, OrderPaymentData, ProductDetailData,
    };
    use crate::pending_checkout::{PendingCheckoutRecord, PendingCheckoutStore, StagedAddress};
    use crate::routes::checkout::schemas::{
        OrderItem, PaymentMethod, PlaceOrderRequest, ShippingForm,
    };
    use crate::routes::order::schemas::OrderStatus;

    /// Drop-in pending store for tests; round-trips records through JSON
    /// the way the Redis store does.
    pub struct InMemoryCheckoutStore {
        records: Mutex<HashMap<Uuid, String>>,
    }

    impl InMemoryCheckoutStore {
        pub fn new() -> Self {
            Self {
                records: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl PendingCheckoutStore for InMemoryCheckoutStore {
        async fn stage(
            &self,
            record: &PendingCheckoutRecord,
            _ttl: std::time::Duration,
        ) -> Result<(), anyhow::Error> {
            let payload = serde_json::to_string(record)?;
            self.records
                .lock()
                .unwrap()
                .insert(record.reference, payload);
            Ok(())
        }

        async fn take(
            &self,
            reference: Uuid,
        ) -> Result<Option<PendingCheckoutRecord>, anyhow::Error> {
            match self.records.lock().unwrap().remove(&reference) {
                Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
                None => Ok(None),
            }
        }

        async fn discard(&self, reference: Uuid) -> Result<(), anyhow::Error> {
            self.records.lock().unwrap().remove(&reference);
            Ok(())
        }
    }

    pub fn get_dummy_cart_items() -> Vec<CartItemData> {
        vec![
            CartItemData {
                product_detail_id: 11,
                product_id: 1,
                name: "Air Runner".to_string(),
                color: "Black".to_string(),
                size: "42".to_string(),
                quantity: 2,
                price: BigDecimal::from(1_500_000),
                image_url: Some("air-runner.jpg".to_string()),
            },
            CartItemData {
                product_detail_id: 27,
                product_id: 3,
                name: "Court Classic".to_string(),
                color: "White".to_string(),
                size: "40".to_string(),
                quantity: 1,
                price: BigDecimal::from(990_000),
                image_url: None,
            },
        ]
    }

    pub fn get_dummy_place_order_request(payment_method: PaymentMethod) -> PlaceOrderRequest {
        PlaceOrderRequest {
            user_id: Uuid::new_v4(),
            full_name: "Tran Van An".to_string(),
            email: "an.tran@example.com".to_string(),
            phone: "0912345678".to_string(),
            shipping: ShippingForm {
                address: "12 Nguyen Trai".to_string(),
                ward: "Ben Thanh".to_string(),
                district: "District 1".to_string(),
                city: "Ho Chi Minh City".to_string(),
            },
            note: None,
            payment_method,
            save_address: false,
            make_default: false,
        }
    }

    pub fn get_dummy_pending_record() -> PendingCheckoutRecord {
        PendingCheckoutRecord {
            reference: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            order_items: vec![OrderItem {
                product_detail_id: 11,
                quantity: 2,
                price_at_order: BigDecimal::from(1_500_000),
            }],
            shipping_address: "12 Nguyen Trai, Ben Thanh, District 1, Ho Chi Minh City".to_string(),
            payment_method: PaymentMethod::Banking,
            new_address: Some(StagedAddress {
                full_address: "12 Nguyen Trai, Ben Thanh, District 1, Ho Chi Minh City"
                    .to_string(),
                make_default: true,
            }),
        }
    }

    pub fn get_dummy_order_detail(status: OrderStatus) -> OrderDetailData {
        OrderDetailData {
            order_id: 501,
            created_at: Utc::now(),
            total_price: BigDecimal::from(3_990_000),
            status,
            shipping_address: "12 Nguyen Trai, Ben Thanh, District 1, Ho Chi Minh City"
                .to_string(),
            fullname: "Tran Van An".to_string(),
            phone_number: "0912345678".to_string(),
            payment: OrderPaymentData {
                method: PaymentMethod::Cod,
                total: BigDecimal::from(3_990_000),
                status: None,
            },
            order_items: vec![OrderLineData {
                order_item_id: 1,
                quantity: 2,
                unit_price: BigDecimal::from(1_500_000),
                product_detail: ProductDetailData {
                    product_detail_id: 11,
                    image_url: Some("air-runner.jpg".to_string()),
                },
            }],
        }
    }
}
