//! PostgreSQL Repository Implementation

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use kernel::email::Email;
use kernel::id::{OrderId, OrderItemId};
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};

use crate::domain::entities::{
    CustomerDetails, NewOrder, Order, OrderItem, OrderTotals, PaymentDetails,
};
use crate::domain::repository::OrderRepository;
use crate::domain::value_objects::OrderStatus;
use crate::error::{OrderError, OrderResult, aborted};

const ORDER_COLUMNS: &str = r#"
    id, first_name, last_name, email, phone, address, postal_code,
    subtotal, shipping, tax, total,
    payment_method, payment_status, payment_reference,
    order_status, created_at
"#;

/// PostgreSQL-backed repository (`orders` + `order_items`)
#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Header then items, all on the transaction's connection
    async fn insert_all(conn: &mut PgConnection, order: &NewOrder) -> Result<i64, sqlx::Error> {
        let (order_id,) = sqlx::query_as::<_, (i64,)>(
            r#"
            INSERT INTO orders (
                first_name, last_name, email, phone, address, postal_code,
                subtotal, shipping, tax, total,
                payment_method, payment_status, payment_reference,
                order_status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING id
            "#,
        )
        .bind(&order.customer.first_name)
        .bind(&order.customer.last_name)
        .bind(order.customer.email.as_str())
        .bind(&order.customer.phone)
        .bind(&order.customer.address)
        .bind(&order.customer.postal_code)
        .bind(order.totals.subtotal)
        .bind(order.totals.shipping)
        .bind(order.totals.tax)
        .bind(order.totals.total)
        .bind(&order.payment.method)
        .bind(&order.payment.status)
        .bind(&order.payment.reference)
        .bind(OrderStatus::Pending.code())
        .fetch_one(&mut *conn)
        .await?;

        for item in &order.items {
            sqlx::query(
                r#"
                INSERT INTO order_items (
                    order_id, product_id, name, quantity, unit_price, image_url
                ) VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(order_id)
            .bind(&item.product_id)
            .bind(&item.name)
            .bind(item.quantity)
            .bind(item.unit_price)
            .bind(&item.image_url)
            .execute(&mut *conn)
            .await?;
        }

        Ok(order_id)
    }

    /// Attach items to `rows` with one batched query
    async fn with_items(&self, rows: Vec<OrderRow>) -> OrderResult<Vec<Order>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let item_rows = sqlx::query_as::<_, OrderItemRow>(
            r#"
            SELECT id, order_id, product_id, name, quantity, unit_price, image_url
            FROM order_items
            WHERE order_id = ANY($1)
            ORDER BY order_id, id
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let mut items: HashMap<i64, Vec<OrderItem>> = HashMap::new();
        for row in item_rows {
            items.entry(row.order_id).or_default().push(row.into_item());
        }

        rows.into_iter()
            .map(|row| {
                let order_items = items.remove(&row.id).unwrap_or_default();
                row.into_order(order_items)
            })
            .collect()
    }
}

impl OrderRepository for PgOrderRepository {
    async fn create(&self, order: &NewOrder) -> OrderResult<OrderId> {
        let mut tx = self.pool.begin().await?;

        match Self::insert_all(&mut *tx, order).await {
            Ok(order_id) => {
                tx.commit().await.map_err(aborted)?;
                Ok(OrderId::from_i64(order_id))
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "Explicit rollback failed");
                }
                Err(aborted(e))
            }
        }
    }

    async fn find_by_id(&self, id: OrderId) -> OrderResult<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(self.with_items(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> OrderResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        self.with_items(rows).await
    }

    async fn list_by_email(&self, email: &Email) -> OrderResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE email = $1 ORDER BY created_at DESC, id DESC"
        ))
        .bind(email.as_str())
        .fetch_all(&self.pool)
        .await?;

        self.with_items(rows).await
    }

    async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> OrderResult<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "UPDATE orders SET order_status = $1 WHERE id = $2 RETURNING {ORDER_COLUMNS}"
        ))
        .bind(status.code())
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(self.with_items(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: OrderId) -> OrderResult<bool> {
        // order_items.order_id is ON DELETE CASCADE
        let deleted = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted == 1)
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    address: String,
    postal_code: String,
    subtotal: Decimal,
    shipping: Decimal,
    tax: Decimal,
    total: Decimal,
    payment_method: Option<String>,
    payment_status: Option<String>,
    payment_reference: Option<String>,
    order_status: String,
    created_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self, items: Vec<OrderItem>) -> OrderResult<Order> {
        let status = OrderStatus::from_code(&self.order_status).ok_or_else(|| {
            OrderError::Database(sqlx::Error::Decode(
                format!("unknown order status {:?}", self.order_status).into(),
            ))
        })?;

        Ok(Order {
            id: OrderId::from_i64(self.id),
            customer: CustomerDetails {
                first_name: self.first_name,
                last_name: self.last_name,
                email: Email::from_db(self.email),
                phone: self.phone,
                address: self.address,
                postal_code: self.postal_code,
            },
            totals: OrderTotals {
                subtotal: self.subtotal,
                shipping: self.shipping,
                tax: self.tax,
                total: self.total,
            },
            payment: PaymentDetails {
                method: self.payment_method,
                status: self.payment_status,
                reference: self.payment_reference,
            },
            status,
            created_at: self.created_at,
            items,
        })
    }
}

#[derive(sqlx::FromRow)]
struct OrderItemRow {
    id: i64,
    order_id: i64,
    product_id: Option<String>,
    name: String,
    quantity: i32,
    unit_price: Decimal,
    image_url: String,
}

impl OrderItemRow {
    fn into_item(self) -> OrderItem {
        OrderItem {
            id: OrderItemId::from_i64(self.id),
            order_id: OrderId::from_i64(self.order_id),
            product_id: self.product_id,
            name: self.name,
            quantity: self.quantity,
            unit_price: self.unit_price,
            image_url: self.image_url,
        }
    }
}
