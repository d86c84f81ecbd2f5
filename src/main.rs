use std::io;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{error, info};

use order_intake::telemetry::setup_tracing;
use order_intake::OrderHistory;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting order intake demo");

    let history = Arc::new(OrderHistory::new());

    // Independent request handlers would call into the history concurrently;
    // a few spawned tasks stand in for them here.
    let mut handles = Vec::new();
    for n in 1..=4 {
        let history = Arc::clone(&history);
        handles.push(tokio::spawn(async move {
            history.create_order(
                Some(format!("customer-{n}")),
                Some("Widget".to_string()),
                n,
                Decimal::new(1050, 2),
            )
        }));
    }

    for handle in handles {
        let order = handle
            .await
            .map_err(|e| e.to_string())?
            .map_err(|e| e.to_string())?;
        info!(order_id = order.id, customer = %order.customer_name, "Order accepted");
    }

    // Rejection path: an absent customer name never reaches the history.
    if let Err(e) = history.create_order(None, Some("Widget".to_string()), 1, Decimal::ONE) {
        error!(error = %e, "Order rejected");
    }

    let snapshot = history.orders();
    let json = serde_json::to_string_pretty(snapshot.as_ref()).map_err(|e| e.to_string())?;
    println!("{json}");

    if let Some(order) = snapshot.first() {
        order.report_total(&mut io::stderr()).map_err(|e| e.to_string())?;
    }

    info!(count = snapshot.len(), "Demo complete");
    Ok(())
}
