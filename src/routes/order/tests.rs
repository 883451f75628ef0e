#[cfg(test)]
mod tests {
    use crate::routes::order::schemas::OrderStatus;
    use crate::routes::order::utils::decorate_order;
    use crate::tests::tests::get_dummy_order_detail;

    const ALL_STATUSES: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipping,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    #[test]
    fn test_status_ordinals_are_stable() {
        for (expected, status) in ALL_STATUSES.iter().enumerate() {
            assert_eq!(status.ordinal() as usize, expected);
        }
    }

    #[test]
    fn test_status_serializes_as_its_ordinal() {
        assert_eq!(serde_json::to_string(&OrderStatus::Pending).unwrap(), "0");
        assert_eq!(serde_json::to_string(&OrderStatus::Shipping).unwrap(), "2");
        assert_eq!(serde_json::to_string(&OrderStatus::Cancelled).unwrap(), "4");

        assert_eq!(
            serde_json::from_str::<OrderStatus>("1").unwrap(),
            OrderStatus::Processing
        );
        assert_eq!(
            serde_json::from_str::<OrderStatus>("3").unwrap(),
            OrderStatus::Completed
        );
        assert!(serde_json::from_str::<OrderStatus>("5").is_err());
    }

    #[test]
    fn test_cancellation_is_limited_to_early_statuses() {
        assert!(OrderStatus::Pending.is_cancellable());
        assert!(OrderStatus::Processing.is_cancellable());
        assert!(!OrderStatus::Shipping.is_cancellable());
        assert!(!OrderStatus::Completed.is_cancellable());
        assert!(!OrderStatus::Cancelled.is_cancellable());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Shipping.is_terminal());
    }

    #[test]
    fn test_status_labels_and_colors() {
        assert_eq!(OrderStatus::Pending.label(), "pending");
        assert_eq!(OrderStatus::Pending.color(), "yellow");
        assert_eq!(OrderStatus::Processing.color(), "blue");
        assert_eq!(OrderStatus::Shipping.color(), "purple");
        assert_eq!(OrderStatus::Completed.color(), "green");
        assert_eq!(OrderStatus::Cancelled.color(), "red");
    }

    #[test]
    fn test_timeline_progress() {
        let timeline = OrderStatus::Processing.timeline();
        assert_eq!(timeline.len(), 4);
        assert!(timeline[0].is_completed);
        assert!(timeline[1].is_completed);
        assert!(!timeline[2].is_completed);
        assert!(!timeline[3].is_completed);

        let timeline = OrderStatus::Completed.timeline();
        assert!(timeline.iter().all(|step| step.is_completed));
    }

    #[test]
    fn test_cancelled_orders_show_no_progress() {
        let timeline = OrderStatus::Cancelled.timeline();
        assert!(timeline.iter().all(|step| !step.is_completed));
    }

    #[test]
    fn test_decorated_order_exposes_the_cancel_rule() {
        let decorated = decorate_order(get_dummy_order_detail(OrderStatus::Pending));
        assert!(decorated.can_cancel);
        assert_eq!(decorated.status_info.code, 0);

        let decorated = decorate_order(get_dummy_order_detail(OrderStatus::Shipping));
        assert!(!decorated.can_cancel);
        assert_eq!(decorated.status_info.label, "shipping");
    }
}
