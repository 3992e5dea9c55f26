use serde_json::{Map, Value};
use sqlx::{mysql::MySqlPool, Row};
use std::marker::PhantomData;

use crate::database::entity::{Entity, KeyKind};
use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::query_builder::{delete_sql, insert_sql, prepare, select_by_key_sql, update_sql};
use crate::filter::Filter;

/// Single-table persistence for one entity.
pub struct Repository<T> {
    pool: MySqlPool,
    _phantom: PhantomData<T>,
}

impl<T: Entity> Repository<T> {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            pool,
            _phantom: PhantomData,
        }
    }

    /// Repository bound to the pool of the entity's database
    pub fn from_manager(databases: &DatabaseManager) -> Self {
        Self::new(databases.pool(T::DATABASE).clone())
    }

    /// Filter pre-bound to this entity's table and default order
    pub fn filter() -> Filter {
        Filter::new(T::TABLE).order_info(T::ORDER)
    }

    pub async fn select_any(&self, filter: Filter) -> Result<Vec<T>, DatabaseError> {
        let sql = filter.to_sql();
        let rows = prepare(&sql).fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| T::from_row(row).map_err(DatabaseError::from))
            .collect()
    }

    pub async fn select_one(&self, key: &Value) -> Result<Option<T>, DatabaseError> {
        let sql = select_by_key_sql(T::TABLE, T::KEY, key);
        let row = prepare(&sql).fetch_optional(&self.pool).await?;
        match row {
            Some(row) => Ok(Some(T::from_row(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn select_404(&self, key: &Value) -> Result<T, DatabaseError> {
        self.select_one(key)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("{} not found", T::LABEL)))
    }

    pub async fn exists(&self, key: &Value) -> Result<bool, DatabaseError> {
        let filter = Filter::new(T::TABLE).eq(T::KEY, key.clone());
        Ok(self.count(&filter).await? > 0)
    }

    /// Insert the given columns and read the stored row back, server
    /// defaults included.
    pub async fn insert(&self, values: &Map<String, Value>) -> Result<T, DatabaseError> {
        let mut columns: Vec<&str> = T::COLUMNS.to_vec();
        if let Some(responsible) = T::RESPONSIBLE {
            columns.push(responsible);
        }

        let sql = insert_sql(T::TABLE, &columns, values);
        let result = prepare(&sql).execute(&self.pool).await?;

        let key = match T::KEY_KIND {
            KeyKind::Text => values.get(T::KEY).cloned().ok_or_else(|| {
                DatabaseError::QueryError(format!("{} insert without key {}", T::TABLE, T::KEY))
            })?,
            KeyKind::AutoIncrement => Value::from(result.last_insert_id()),
        };

        tracing::debug!("Inserted into {} ({} = {})", T::TABLE, T::KEY, key);
        self.select_404(&key).await
    }

    /// Write the changed columns (and refresh the timestamp), then re-read.
    pub async fn update(&self, key: &Value, changes: &[(String, Value)]) -> Result<T, DatabaseError> {
        if let Some(sql) = update_sql(T::TABLE, T::KEY, key, changes, T::TIMESTAMP) {
            prepare(&sql).execute(&self.pool).await?;
        }
        self.select_404(key).await
    }

    pub async fn delete(&self, key: &Value) -> Result<(), DatabaseError> {
        let sql = delete_sql(T::TABLE, T::KEY, key);
        let result = prepare(&sql).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("{} not found", T::LABEL)));
        }
        Ok(())
    }

    pub async fn count(&self, filter: &Filter) -> Result<i64, DatabaseError> {
        let sql = filter.to_count_sql();
        let row = prepare(&sql).fetch_one(&self.pool).await?;
        let count: i64 = row.try_get("count")?;
        Ok(count)
    }

    /// Distinct non-null text values of one column, sorted
    pub async fn distinct(&self, filter: &Filter, column: &'static str) -> Result<Vec<String>, DatabaseError> {
        let sql = filter.to_distinct_sql(column);
        let rows = prepare(&sql).fetch_all(&self.pool).await?;
        let mut values = Vec::with_capacity(rows.len());
        for row in rows {
            if let Some(value) = row.try_get::<Option<String>, _>("value")? {
                values.push(value);
            }
        }
        Ok(values)
    }
}
