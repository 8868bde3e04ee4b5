use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::subscription::Subscription;

const COLUMNS: &str = "id, user_id, name, provider, expiration_date, status";

pub async fn get_all_subscriptions<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<Subscription>> {
    sqlx::query_as::<_, Subscription>(&format!("SELECT {COLUMNS} FROM subscriptions"))
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_subscription_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    id: Uuid,
) -> Res<Option<Subscription>> {
    sqlx::query_as::<_, Subscription>(&format!(
        "SELECT {COLUMNS} FROM subscriptions WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}

/// Latest expiration first, so callers picking the first row get the most recent renewal.
pub async fn get_subscriptions_by_user_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: i32,
) -> Res<Vec<Subscription>> {
    sqlx::query_as::<_, Subscription>(&format!(
        "SELECT {COLUMNS} FROM subscriptions WHERE user_id = $1 ORDER BY expiration_date DESC"
    ))
    .bind(user_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn insert_subscription<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: &Subscription,
) -> Res<Subscription> {
    sqlx::query_as::<_, Subscription>(&format!(
        r#"
        INSERT INTO subscriptions (user_id, name, provider, expiration_date, status)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(data.user_id)
    .bind(&data.name)
    .bind(data.provider)
    .bind(data.expiration_date)
    .bind(data.status)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

/// Returns the number of rows touched; zero when `id` does not exist.
pub async fn update_subscription<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    id: Uuid,
    data: &Subscription,
) -> Res<u64> {
    let result = sqlx::query(
        r#"
        UPDATE subscriptions
        SET user_id = $1, name = $2, provider = $3, expiration_date = $4, status = $5
        WHERE id = $6
        "#,
    )
    .bind(data.user_id)
    .bind(&data.name)
    .bind(data.provider)
    .bind(data.expiration_date)
    .bind(data.status)
    .bind(id)
    .execute(executor)
    .await
    .map_err(AppError::from)?;

    Ok(result.rows_affected())
}

pub async fn delete_subscription<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    id: Uuid,
) -> Res<bool> {
    let result = sqlx::query("DELETE FROM subscriptions WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await
        .map_err(AppError::from)?;

    Ok(result.rows_affected() > 0)
}
