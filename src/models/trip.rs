use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::DbPool;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trip {
    pub id: i64,
    pub admin_tg_id: i64,
    pub from_point: String,
    pub to_point: String,
    pub chosen_timestamp: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// Name shown to the trip admin when the bot relays a join request,
    /// e.g. "Innopolis - Kazan, 24.12.2025 16:30".
    pub fn display_name(&self) -> String {
        format!(
            "{} - {}, {}",
            self.from_point,
            self.to_point,
            self.chosen_timestamp.format("%d.%m.%Y %H:%M")
        )
    }

    pub async fn create(
        db: &DbPool,
        admin_tg_id: i64,
        from_point: &str,
        to_point: &str,
        chosen_timestamp: DateTime<Utc>,
    ) -> Result<Trip, sqlx::Error> {
        sqlx::query_as::<_, Trip>(
            "INSERT INTO trips (admin_tg_id, from_point, to_point, chosen_timestamp, created_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(admin_tg_id)
        .bind(from_point)
        .bind(to_point)
        .bind(chosen_timestamp)
        .bind(Utc::now())
        .fetch_one(db)
        .await
    }

    pub async fn get_by_id(db: &DbPool, trip_id: i64) -> Result<Trip, sqlx::Error> {
        sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = ?")
            .bind(trip_id)
            .fetch_one(db)
            .await
    }

    /// Records that the user joined the trip. Re-sent callbacks for the
    /// same pair are no-ops; a callback naming an unknown trip is an error.
    pub async fn add_member(db: &DbPool, trip_id: i64, user_tg_id: i64) -> Result<(), sqlx::Error> {
        let trip_exists = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM trips WHERE id = ?")
            .bind(trip_id)
            .fetch_one(db)
            .await?;
        if trip_exists == 0 {
            return Err(sqlx::Error::RowNotFound);
        }

        sqlx::query(
            "INSERT INTO trip_members (trip_id, user_tg_id, joined_at) VALUES (?, ?, ?) \
             ON CONFLICT (trip_id, user_tg_id) DO NOTHING",
        )
        .bind(trip_id)
        .bind(user_tg_id)
        .bind(Utc::now())
        .execute(db)
        .await?;
        Ok(())
    }
}
