use serde::{Deserialize, Serialize};

use crate::models::trip::Trip;

/// Payload relayed to the bot when a user asks to join a trip, and posted
/// back by the bot once the trip admin has decided.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinRequest {
    #[serde(rename = "trip_admin_id", default)]
    pub admin_id: i64,
    pub trip_id: i64,
    #[serde(rename = "id_of_person_asking_to_join")]
    pub user_id: i64,
    pub secret_token: String,
    #[serde(default)]
    pub accepted: bool,
    #[serde(default)]
    pub trip_name: String,
}

impl JoinRequest {
    pub fn outbound(trip: &Trip, user_tg_id: i64, secret_token: impl Into<String>) -> Self {
        Self {
            admin_id: trip.admin_tg_id,
            trip_id: trip.id,
            user_id: user_tg_id,
            secret_token: secret_token.into(),
            accepted: false,
            trip_name: trip.display_name(),
        }
    }

    /// Zero ids and an empty secret count as missing.
    pub fn validate(&self) -> Result<(), String> {
        if self.trip_id == 0 {
            return Err("trip_id is required".into());
        }
        if self.user_id == 0 {
            return Err("id_of_person_asking_to_join is required".into());
        }
        if self.secret_token.is_empty() {
            return Err("secret_token is required".into());
        }
        Ok(())
    }
}
