use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::constants::GATEWAY_SUCCESS_CODE;

/// Query string the gateway appends when it sends the browser back.
/// Nothing here is signed; `txn_ref` is the checkout reference we handed
/// the gateway at payment-intent time.
#[derive(Deserialize, Debug)]
pub struct PaymentReturnParams {
    #[serde(rename = "vnp_ResponseCode")]
    pub response_code: Option<String>,
    #[serde(rename = "vnp_TxnRef")]
    pub txn_ref: Option<String>,
    #[serde(rename = "vnp_TransactionNo")]
    pub transaction_no: Option<String>,
    #[serde(rename = "vnp_Amount")]
    pub amount: Option<String>,
    #[serde(rename = "vnp_BankCode")]
    pub bank_code: Option<String>,
    #[serde(rename = "vnp_OrderInfo")]
    pub order_info: Option<String>,
}

impl PaymentReturnParams {
    pub fn is_success(&self) -> bool {
        self.response_code.as_deref() == Some(GATEWAY_SUCCESS_CODE)
    }

    pub fn reference(&self) -> Option<Uuid> {
        self.txn_ref
            .as_deref()
            .and_then(|value| Uuid::parse_str(value).ok())
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentReturnState {
    Success,
    Failed,
    Error,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReturnData {
    pub state: PaymentReturnState,
    pub order_id: Option<i64>,
    pub redirect_to: String,
    pub redirect_delay_secs: Option<u64>,
}
