//! The shared order history service.

use std::sync::Arc;

use arc_swap::ArcSwap;
use rand::Rng;
use rust_decimal::Decimal;

use crate::domain::Order;
use crate::error::OrderError;
use crate::logging::{log_best_effort, LogSink, TracingLog};

/// Upper bound (inclusive) of the minted identifier range.
const MAX_ORDER_ID: i32 = 9_999_999;

/// Process-wide, append-only order history.
///
/// The history is held as an immutable snapshot behind an atomic reference.
/// Appends swap in a new snapshot through a compare-and-swap retry loop;
/// readers keep whatever snapshot they loaded, undisturbed by later appends.
/// Safe to share across tasks via `Arc`.
pub struct OrderHistory {
    orders: ArcSwap<Vec<Order>>,
    log: Arc<dyn LogSink>,
}

impl OrderHistory {
    /// Creates an empty history that logs through the `tracing` pipeline.
    pub fn new() -> Self {
        Self::with_log(Arc::new(TracingLog))
    }

    /// Creates an empty history with an injected log sink.
    pub fn with_log(log: Arc<dyn LogSink>) -> Self {
        Self {
            orders: ArcSwap::from_pointee(Vec::new()),
            log,
        }
    }

    /// Mints an identifier, appends a new order and emits one log line.
    ///
    /// An absent customer or product name is rejected before the history is
    /// touched; empty strings, negative quantities and negative prices are
    /// accepted as-is. Identifiers are drawn from `[1, 9_999_999]` with no
    /// collision check, so repeats are possible across the process lifetime.
    ///
    /// The append is all-or-nothing: concurrent callers retry on conflict and
    /// every successful call grows the history by exactly one entry. The log
    /// sink runs after the append and its failure never fails the creation.
    pub fn create_order(
        &self,
        customer: Option<String>,
        product: Option<String>,
        quantity: i32,
        unit_price: Decimal,
    ) -> Result<Order, OrderError> {
        let customer = customer.ok_or(OrderError::InvalidArgument("customer name"))?;
        let product = product.ok_or(OrderError::InvalidArgument("product name"))?;

        let id = rand::thread_rng().gen_range(1..=MAX_ORDER_ID);
        let order = Order::new(id, customer, product, quantity, unit_price);

        self.orders.rcu(|current| {
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend_from_slice(current.as_slice());
            next.push(order.clone());
            next
        });

        log_best_effort(
            self.log.as_ref(),
            &format!("Created order {} for {}", order.id, order.customer_name),
        );

        Ok(order)
    }

    /// Returns the current snapshot of all created orders, in creation order.
    ///
    /// Never blocks and never mutates. The returned snapshot is stable for
    /// the lifetime of the reference; appends racing with this call land in
    /// later snapshots.
    pub fn orders(&self) -> Arc<Vec<Order>> {
        self.orders.load_full()
    }
}

impl Default for OrderHistory {
    fn default() -> Self {
        Self::new()
    }
}
