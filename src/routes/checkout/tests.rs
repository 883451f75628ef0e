#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;
    use uuid::Uuid;

    use crate::routes::checkout::errors::CheckoutOrderError;
    use crate::routes::checkout::schemas::{PaymentMethod, PaymentStatus};
    use crate::routes::checkout::utils::{
        build_order_items, build_pending_record, order_total, validate_checkout_form,
    };
    use crate::tests::tests::{get_dummy_cart_items, get_dummy_place_order_request};

    fn validation_message(result: Result<(), CheckoutOrderError>) -> String {
        match result {
            Err(CheckoutOrderError::ValidationError(message)) => message,
            Err(other) => panic!("expected a validation error, got {:?}", other),
            Ok(()) => panic!("expected a validation error, got Ok"),
        }
    }

    #[test]
    fn test_valid_form_passes_validation() {
        let request = get_dummy_place_order_request(PaymentMethod::Cod);
        assert!(validate_checkout_form(&request).is_ok());
    }

    #[test]
    fn test_every_required_field_blocks_submission() {
        let mut request = get_dummy_place_order_request(PaymentMethod::Cod);
        request.full_name = " ".to_string();
        assert_eq!(
            validation_message(validate_checkout_form(&request)),
            "Please enter your full name"
        );

        let mut request = get_dummy_place_order_request(PaymentMethod::Cod);
        request.email = "".to_string();
        assert_eq!(
            validation_message(validate_checkout_form(&request)),
            "Please enter your email"
        );

        let mut request = get_dummy_place_order_request(PaymentMethod::Cod);
        request.phone = "".to_string();
        assert_eq!(
            validation_message(validate_checkout_form(&request)),
            "Please enter your phone number"
        );

        let mut request = get_dummy_place_order_request(PaymentMethod::Cod);
        request.shipping.address = "".to_string();
        assert_eq!(
            validation_message(validate_checkout_form(&request)),
            "Please enter your address"
        );

        let mut request = get_dummy_place_order_request(PaymentMethod::Cod);
        request.shipping.city = "".to_string();
        assert_eq!(
            validation_message(validate_checkout_form(&request)),
            "Please select a province/city"
        );

        let mut request = get_dummy_place_order_request(PaymentMethod::Cod);
        request.shipping.district = "".to_string();
        assert_eq!(
            validation_message(validate_checkout_form(&request)),
            "Please select a district"
        );

        let mut request = get_dummy_place_order_request(PaymentMethod::Cod);
        request.shipping.ward = "".to_string();
        assert_eq!(
            validation_message(validate_checkout_form(&request)),
            "Please select a ward"
        );
    }

    #[test]
    fn test_first_failure_wins() {
        // Both the name and the email are unusable; the name is reported.
        let mut request = get_dummy_place_order_request(PaymentMethod::Cod);
        request.full_name = "".to_string();
        request.email = "not-an-email".to_string();
        assert_eq!(
            validation_message(validate_checkout_form(&request)),
            "Please enter your full name"
        );
    }

    #[test]
    fn test_malformed_email_and_phone_are_rejected() {
        let mut request = get_dummy_place_order_request(PaymentMethod::Cod);
        request.email = "an.tran-example.com".to_string();
        assert_eq!(
            validation_message(validate_checkout_form(&request)),
            "Email is invalid"
        );

        let mut request = get_dummy_place_order_request(PaymentMethod::Cod);
        request.phone = "0123".to_string();
        assert_eq!(
            validation_message(validate_checkout_form(&request)),
            "Phone number is invalid"
        );
    }

    #[test]
    fn test_shipping_address_concatenation() {
        let request = get_dummy_place_order_request(PaymentMethod::Cod);
        assert_eq!(
            request.shipping.full_address(),
            "12 Nguyen Trai, Ben Thanh, District 1, Ho Chi Minh City"
        );
    }

    #[test]
    fn test_order_items_snapshot_the_cart() {
        let cart_items = get_dummy_cart_items();
        let order_items = build_order_items(&cart_items);
        assert_eq!(order_items.len(), 2);
        assert_eq!(order_items[0].product_detail_id, 11);
        assert_eq!(order_items[0].quantity, 2);
        assert_eq!(order_items[0].price_at_order, BigDecimal::from(1_500_000));
        assert_eq!(order_items[1].product_detail_id, 27);
    }

    #[test]
    fn test_order_total_sums_quantity_times_price() {
        let order_items = build_order_items(&get_dummy_cart_items());
        // 2 x 1_500_000 + 1 x 990_000
        assert_eq!(order_total(&order_items), BigDecimal::from(3_990_000));
    }

    #[test]
    fn test_pending_record_mirrors_the_submission() {
        let mut request = get_dummy_place_order_request(PaymentMethod::Banking);
        request.save_address = true;
        request.make_default = true;
        let order_items = build_order_items(&get_dummy_cart_items());
        let shipping_address = request.shipping.full_address();
        let reference = Uuid::new_v4();

        let record =
            build_pending_record(reference, &request, order_items.clone(), shipping_address);
        assert_eq!(record.reference, reference);
        assert_eq!(record.user_id, request.user_id);
        assert_eq!(record.order_items, order_items);
        assert_eq!(record.payment_method, PaymentMethod::Banking);
        let staged = record.new_address.expect("address should be staged");
        assert!(staged.make_default);
        assert_eq!(staged.full_address, record.shipping_address);
    }

    #[test]
    fn test_no_address_is_staged_unless_requested() {
        let request = get_dummy_place_order_request(PaymentMethod::Banking);
        let order_items = build_order_items(&get_dummy_cart_items());
        let record = build_pending_record(
            Uuid::new_v4(),
            &request,
            order_items,
            request.shipping.full_address(),
        );
        assert!(record.new_address.is_none());
    }

    #[test]
    fn test_payment_wire_formats() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Cod).unwrap(),
            "\"cod\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Banking).unwrap(),
            "\"banking\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Momo).unwrap(),
            "\"momo\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Paid).unwrap(),
            "\"PAID\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentStatus::NotPaid).unwrap(),
            "\"NOT_PAID\""
        );
        assert!(PaymentMethod::Banking.is_deferred());
        assert!(!PaymentMethod::Cod.is_deferred());
        assert!(!PaymentMethod::Momo.is_deferred());
    }
}
