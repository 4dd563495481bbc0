//! Cart commands: show, add, inc, remove, delete.

use anyhow::Result;
use serde::Serialize;
use shop_commerce::ProductId;

use super::{AddArgs, ProductArgs};
use crate::context::{Context, SessionStore};
use crate::output::format_money;

#[derive(Serialize)]
struct CartLine {
    id: i64,
    title: Option<String>,
    quantity: i64,
    line_total: Option<f64>,
}

#[derive(Serialize)]
struct CartSummary {
    items: Vec<CartLine>,
    total_items: i64,
    total_amount: f64,
    cart_updated: u64,
}

fn summarize(store: &SessionStore) -> CartSummary {
    let items = store
        .cart_items()
        .iter()
        .map(|(id, quantity)| {
            let product = store.product(*id).ok();
            CartLine {
                id: id.get(),
                title: product.map(|p| p.title.clone()),
                quantity: *quantity,
                line_total: product.map(|p| p.price * *quantity as f64),
            }
        })
        .collect();

    CartSummary {
        items,
        total_items: store.total_items(),
        total_amount: store.total_cart_amount(),
        cart_updated: store.cart_updated(),
    }
}

/// Print the cart contents and totals.
pub async fn show(ctx: &Context) -> Result<()> {
    let store = ctx.open_store().await?;
    print_cart(&store, ctx, false);
    Ok(())
}

/// Add a quantity of a product.
pub async fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store().await?;
    warn_if_unknown(&store, args.id, ctx);

    if store.add_to_cart(args.id, args.quantity) {
        ctx.output
            .success(&format!("Added product {} to the cart", args.id));
    } else {
        ctx.output.success(&format!(
            "Product {} now at {}",
            args.id,
            store.quantity(args.id)
        ));
    }
    print_cart(&store, ctx, true);
    Ok(())
}

/// Add one unit of a product.
pub async fn inc(args: ProductArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store().await?;
    warn_if_unknown(&store, args.id, ctx);

    let quantity = store.add_item(args.id);
    ctx.output
        .success(&format!("Product {} now at {}", args.id, quantity));
    print_cart(&store, ctx, true);
    Ok(())
}

/// Remove one unit of a product.
pub async fn remove(args: ProductArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store().await?;

    let quantity = store.remove_from_cart(args.id);
    ctx.output
        .success(&format!("Product {} now at {}", args.id, quantity));
    print_cart(&store, ctx, true);
    Ok(())
}

/// Drop a product from the cart.
pub async fn delete(args: ProductArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store().await?;

    match store.delete_from_cart(args.id) {
        Some(_) => ctx
            .output
            .success(&format!("Deleted product {} from the cart", args.id)),
        None => ctx
            .output
            .info(&format!("Product {} was not in the cart", args.id)),
    }
    print_cart(&store, ctx, true);
    Ok(())
}

fn warn_if_unknown(store: &SessionStore, id: ProductId, ctx: &Context) {
    if store.catalog().is_some() && store.product(id).is_err() {
        ctx.output
            .warn(&format!("Product {} is not in the catalog", id));
    }
}

fn print_cart(store: &SessionStore, ctx: &Context, totals_only: bool) {
    let summary = summarize(store);

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return;
    }

    if !totals_only {
        ctx.output.header("Cart");
        let widths = [6, 36, 5, 10];
        ctx.output.table_row(&["ID", "TITLE", "QTY", "TOTAL"], &widths);
        for line in summary.items.iter().filter(|l| l.quantity != 0) {
            ctx.output.table_row(
                &[
                    &line.id.to_string(),
                    line.title.as_deref().unwrap_or("(not in catalog)"),
                    &line.quantity.to_string(),
                    &line.line_total.map(format_money).unwrap_or_default(),
                ],
                &widths,
            );
        }
    }

    ctx.output.kv("items", &summary.total_items.to_string());
    ctx.output.kv("total", &format_money(summary.total_amount));
    if ctx.output.is_verbose() {
        ctx.output.kv("slot", store.storage_key());
        ctx.output.kv("entries", &store.cart_items().len().to_string());
        if let Some(catalog) = store.catalog() {
            let orphans = store.cart_items().orphans(catalog).count();
            ctx.output.kv("not in catalog", &orphans.to_string());
        }
    }
}
