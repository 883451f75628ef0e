use lazy_static::lazy_static;
use regex::Regex;

/// Result code the gateway sends back on a successful payment.
pub const GATEWAY_SUCCESS_CODE: &str = "00";
pub const GATEWAY_ORDER_TYPE: &str = "billpayment";
pub const PENDING_CHECKOUT_KEY_PREFIX: &str = "pending_checkout";

lazy_static! {
    pub static ref MOBILE_NO_PATTERN: Regex =
        Regex::new(r"^(?:\+?84|0)[35789]\d{8}$").expect("Failed to compile regex pattern");
}
