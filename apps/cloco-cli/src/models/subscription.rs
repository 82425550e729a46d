//! Subscription models

use serde::Serialize;

/// Body posted to `/subscription`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionRequest {
    pub subscription_id: String,
}
