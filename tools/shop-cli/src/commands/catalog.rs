//! List the product catalog.

use anyhow::{bail, Result};
use serde::Serialize;

use super::CatalogArgs;
use crate::context::Context;
use crate::output::format_money;

#[derive(Serialize)]
struct CatalogRow<'a> {
    id: i64,
    title: &'a str,
    price: f64,
    in_cart: i64,
}

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store().await?;
    let Some(catalog) = store.catalog() else {
        bail!("Catalog unavailable");
    };

    let limit = args.limit.unwrap_or(usize::MAX);
    let rows: Vec<CatalogRow<'_>> = catalog
        .iter()
        .take(limit)
        .map(|p| CatalogRow {
            id: p.id.get(),
            title: &p.title,
            price: p.price,
            in_cart: store.quantity(p.id),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output
        .header(&format!("Catalog ({} products)", catalog.len()));
    let widths = [6, 40, 10, 7];
    ctx.output.table_row(&["ID", "TITLE", "PRICE", "IN CART"], &widths);
    for row in &rows {
        ctx.output.table_row(
            &[
                &row.id.to_string(),
                row.title,
                &format_money(row.price),
                &row.in_cart.to_string(),
            ],
            &widths,
        );
    }

    Ok(())
}
