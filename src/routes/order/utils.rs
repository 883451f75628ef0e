use super::schemas::OrderFetchData;
use crate::commerce_client::OrderDetailData;

/// Attach the presentation facts the storefront needs so the status
/// rules live here and not in every screen.
pub fn decorate_order(order: OrderDetailData) -> OrderFetchData {
    let status = order.status;
    OrderFetchData {
        can_cancel: status.is_cancellable(),
        status_info: status.info(),
        timeline: status.timeline(),
        order,
    }
}
