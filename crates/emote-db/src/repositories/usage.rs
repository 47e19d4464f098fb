//! SQLite implementation of UsageRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::{debug, instrument};

use emote_core::entities::{ItemUsage, UsageTouch};
use emote_core::traits::{RepoResult, UsageRepository};
use emote_core::value_objects::{ItemKind, Snowflake};

use crate::mappers::usage_from_model;
use crate::models::UsageModel;

use super::error::{map_db_error, usage_not_found};

/// Statements for one kind table
struct KindSql {
    upsert: &'static str,
    decrement: &'static str,
    delete_server: &'static str,
    count: &'static str,
    list: &'static str,
    /// Ends right before the bound `server_id` of a least-used query
    least_used_head: &'static str,
    /// Id column, for the `IN (...)` filter
    id_column: &'static str,
}

const EMOJI_SQL: KindSql = KindSql {
    upsert: r#"
        INSERT INTO emojis (server_id, emote_id, emote_name, usage_count, first_used, last_used)
        VALUES (?1, ?2, ?3, 1, ?4, ?4)
        ON CONFLICT (server_id, emote_id) DO UPDATE SET
            usage_count = usage_count + 1,
            emote_name = excluded.emote_name,
            last_used = excluded.last_used
        "#,
    decrement: r#"
        UPDATE emojis
        SET usage_count = MAX(0, usage_count - 1), last_used = ?3
        WHERE server_id = ?1 AND emote_id = ?2
        "#,
    delete_server: "DELETE FROM emojis WHERE server_id = ?1",
    count: "SELECT COUNT(*) FROM emojis WHERE server_id = ?1",
    list: r#"
        SELECT server_id, emote_id AS item_id, emote_name AS item_name,
               usage_count, first_used, last_used
        FROM emojis
        WHERE server_id = ?1
        ORDER BY usage_count DESC, last_used DESC
        LIMIT ?2 OFFSET ?3
        "#,
    least_used_head: r#"
        SELECT server_id, emote_id AS item_id, emote_name AS item_name,
               usage_count, first_used, last_used
        FROM emojis
        WHERE server_id = "#,
    id_column: "emote_id",
};

const STICKER_SQL: KindSql = KindSql {
    upsert: r#"
        INSERT INTO stickers (server_id, sticker_id, sticker_name, usage_count, first_used, last_used)
        VALUES (?1, ?2, ?3, 1, ?4, ?4)
        ON CONFLICT (server_id, sticker_id) DO UPDATE SET
            usage_count = usage_count + 1,
            sticker_name = excluded.sticker_name,
            last_used = excluded.last_used
        "#,
    decrement: r#"
        UPDATE stickers
        SET usage_count = MAX(0, usage_count - 1), last_used = ?3
        WHERE server_id = ?1 AND sticker_id = ?2
        "#,
    delete_server: "DELETE FROM stickers WHERE server_id = ?1",
    count: "SELECT COUNT(*) FROM stickers WHERE server_id = ?1",
    list: r#"
        SELECT server_id, sticker_id AS item_id, sticker_name AS item_name,
               usage_count, first_used, last_used
        FROM stickers
        WHERE server_id = ?1
        ORDER BY usage_count DESC, last_used DESC
        LIMIT ?2 OFFSET ?3
        "#,
    least_used_head: r#"
        SELECT server_id, sticker_id AS item_id, sticker_name AS item_name,
               usage_count, first_used, last_used
        FROM stickers
        WHERE server_id = "#,
    id_column: "sticker_id",
};

const fn sql(kind: ItemKind) -> &'static KindSql {
    match kind {
        ItemKind::Emoji => &EMOJI_SQL,
        ItemKind::Sticker => &STICKER_SQL,
    }
}

/// SQLite implementation of UsageRepository
#[derive(Clone)]
pub struct SqliteUsageRepository {
    pool: SqlitePool,
}

impl SqliteUsageRepository {
    /// Create a new SqliteUsageRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsageRepository for SqliteUsageRepository {
    #[instrument(skip(self, touch), fields(kind = %touch.kind, server_id = %touch.server_id, item_id = %touch.item_id))]
    async fn touch(&self, touch: &UsageTouch) -> RepoResult<()> {
        sqlx::query(sql(touch.kind).upsert)
            .bind(touch.server_id.into_inner())
            .bind(touch.item_id.into_inner())
            .bind(&touch.name)
            .bind(touch.at)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn untouch(
        &self,
        kind: ItemKind,
        server_id: Snowflake,
        item_id: Snowflake,
        at: DateTime<Utc>,
    ) -> RepoResult<()> {
        let result = sqlx::query(sql(kind).decrement)
            .bind(server_id.into_inner())
            .bind(item_id.into_inner())
            .bind(at)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(usage_not_found(kind, server_id, item_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn reset_server(&self, server_id: Snowflake) -> RepoResult<u64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let mut removed = 0;
        for kind in ItemKind::ALL {
            let result = sqlx::query(sql(kind).delete_server)
                .bind(server_id.into_inner())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            removed += result.rows_affected();
        }

        tx.commit().await.map_err(map_db_error)?;

        debug!(removed, "Server counters reset");
        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn count(&self, kind: ItemKind, server_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(sql(kind).count)
            .bind(server_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        kind: ItemKind,
        server_id: Snowflake,
        offset: i64,
        limit: i64,
    ) -> RepoResult<Vec<ItemUsage>> {
        let results = sqlx::query_as::<_, UsageModel>(sql(kind).list)
            .bind(server_id.into_inner())
            .bind(limit.max(0))
            .bind(offset.max(0))
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|model| usage_from_model(kind, model))
            .collect())
    }

    #[instrument(skip(self, allowed_ids), fields(allowed = allowed_ids.len()))]
    async fn list_least_used(
        &self,
        kind: ItemKind,
        server_id: Snowflake,
        allowed_ids: &[Snowflake],
        limit: i64,
    ) -> RepoResult<Vec<ItemUsage>> {
        if allowed_ids.is_empty() {
            return Ok(Vec::new());
        }

        let statements = sql(kind);
        let mut builder: QueryBuilder<'_, Sqlite> = QueryBuilder::new(statements.least_used_head);
        builder.push_bind(server_id.into_inner());
        builder.push(" AND ");
        builder.push(statements.id_column);
        builder.push(" IN (");
        let mut ids = builder.separated(", ");
        for id in allowed_ids {
            ids.push_bind(id.into_inner());
        }
        ids.push_unseparated(")");
        builder.push(" ORDER BY usage_count ASC, last_used ASC LIMIT ");
        builder.push_bind(limit.max(0));

        let results = builder
            .build_query_as::<UsageModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|model| usage_from_model(kind, model))
            .collect())
    }
}
