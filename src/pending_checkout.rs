use anyhow::{anyhow, Context};
use async_trait::async_trait;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::PENDING_CHECKOUT_KEY_PREFIX;
use crate::redis::RedisClient;
use crate::routes::checkout::schemas::{OrderItem, PaymentMethod};

/// Snapshot of a checkout submission awaiting confirmation from the
/// payment gateway. The backing order is created only after the gateway
/// reports success; until then this record is the sole owner of the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingCheckoutRecord {
    pub reference: Uuid,
    pub user_id: Uuid,
    pub order_items: Vec<OrderItem>,
    pub shipping_address: String,
    pub payment_method: PaymentMethod,
    pub new_address: Option<StagedAddress>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StagedAddress {
    pub full_address: String,
    pub make_default: bool,
}

/// Persistence seam for the pending checkout record.
///
/// Invariant: a record exists iff a gateway redirect is in flight for its
/// reference. `take` consumes the record so a second call for the same
/// reference observes `None`.
#[async_trait]
pub trait PendingCheckoutStore: Send + Sync {
    async fn stage(
        &self,
        record: &PendingCheckoutRecord,
        ttl: std::time::Duration,
    ) -> Result<(), anyhow::Error>;

    async fn take(&self, reference: Uuid) -> Result<Option<PendingCheckoutRecord>, anyhow::Error>;

    async fn discard(&self, reference: Uuid) -> Result<(), anyhow::Error>;
}

pub struct RedisCheckoutStore {
    client: RedisClient,
}

impl RedisCheckoutStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn key(reference: Uuid) -> String {
        format!("{}:{}", PENDING_CHECKOUT_KEY_PREFIX, reference)
    }
}

#[async_trait]
impl PendingCheckoutStore for RedisCheckoutStore {
    #[tracing::instrument(name = "Stage pending checkout", skip(self, record), fields(reference=%record.reference))]
    async fn stage(
        &self,
        record: &PendingCheckoutRecord,
        ttl: std::time::Duration,
    ) -> Result<(), anyhow::Error> {
        let payload =
            serde_json::to_string(record).context("Failed to serialize pending checkout record")?;
        let mut conn = self
            .client
            .get_connection()
            .await
            .context("Failed to get redis connection")?;
        let _: () = conn
            .set_ex(Self::key(record.reference), payload, ttl.as_secs())
            .await
            .context("Failed to stage pending checkout record")?;
        Ok(())
    }

    #[tracing::instrument(name = "Take pending checkout", skip(self))]
    async fn take(&self, reference: Uuid) -> Result<Option<PendingCheckoutRecord>, anyhow::Error> {
        let mut conn = self
            .client
            .get_connection()
            .await
            .context("Failed to get redis connection")?;
        // GET + DEL in one atomic round trip; the record is observable
        // at most once.
        let (payload, _deleted): (Option<String>, i64) = redis::pipe()
            .atomic()
            .get(Self::key(reference))
            .del(Self::key(reference))
            .query_async(&mut conn)
            .await
            .context("Failed to take pending checkout record")?;
        match payload {
            Some(payload) => {
                let record = serde_json::from_str(&payload).map_err(|e| {
                    anyhow!("Stored pending checkout record is unreadable: {}", e)
                })?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    #[tracing::instrument(name = "Discard pending checkout", skip(self))]
    async fn discard(&self, reference: Uuid) -> Result<(), anyhow::Error> {
        let mut conn = self
            .client
            .get_connection()
            .await
            .context("Failed to get redis connection")?;
        let _: () = conn
            .del(Self::key(reference))
            .await
            .context("Failed to discard pending checkout record")?;
        Ok(())
    }
}
