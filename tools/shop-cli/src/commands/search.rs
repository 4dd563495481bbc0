//! Search the catalog and publish the hits to the store.

use anyhow::{bail, Result};
use shop_commerce::Product;

use super::SearchArgs;
use crate::context::Context;
use crate::output::format_money;

/// Case-insensitive match on title or description.
pub fn matches(product: &Product, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    product.title.to_lowercase().contains(&term)
        || product.description.to_lowercase().contains(&term)
}

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store().await?;
    let Some(catalog) = store.catalog() else {
        bail!("Catalog unavailable");
    };

    let hits: Vec<Product> = catalog
        .iter()
        .filter(|p| matches(p, &args.term))
        .cloned()
        .collect();
    store.set_search_results(Some(hits));

    let results = store.search_results().unwrap_or_default();
    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    if results.is_empty() {
        ctx.output
            .info(&format!("No products match \"{}\"", args.term));
        return Ok(());
    }

    ctx.output
        .header(&format!("{} result(s) for \"{}\"", results.len(), args.term));
    let widths = [6, 40, 10];
    for product in results {
        ctx.output.table_row(
            &[
                &product.id.to_string(),
                &product.title,
                &format_money(product.price),
            ],
            &widths,
        );
    }

    Ok(())
}
