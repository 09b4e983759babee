//! `storefront` command-line entry point.

mod cli;
mod render;

use anyhow::{Context, anyhow};
use clap::Parser;

use storefront_analytics::AnalyticsConfig;
use storefront_client::{CatalogClient, CatalogService, ClientConfig};
use storefront_observability::LogFormat;
use storefront_products::Product;
use storefront_store::CatalogStore;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let format = if cli.pretty_logs { LogFormat::Pretty } else { LogFormat::Json };
    storefront_observability::init_with(format, "warn");

    let client_config = cli.client_config(
        ClientConfig::from_env().context("invalid catalog client configuration")?,
    );
    let analytics_config = cli.analytics_config(
        AnalyticsConfig::from_env().context("invalid analytics configuration")?,
    );
    tracing::info!(api_url = %client_config.base_url, "starting storefront");

    let client = CatalogClient::new(client_config).context("failed to build HTTP client")?;
    let mut service = CatalogService::new(client, CatalogStore::new(analytics_config));
    service
        .refresh()
        .await
        .context("failed to load products from the catalog service")?;

    let command = cli.command();
    if let Some(filter) = command.filter() {
        service.store_mut().apply_filter(filter);
    }

    match command {
        Command::Summary { .. } => {
            let store = service.store();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(store.summary())?);
            } else {
                print!("{}", render::summary(store.summary(), store.refreshed_at()));
            }
        }
        Command::List { .. } => {
            let store = service.store();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(store.filtered())?);
            } else {
                print!("{}", render::product_list(store.filtered(), store.products().len()));
            }
        }
        Command::Categories => {
            let options = service.store().category_options();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&options)?);
            } else {
                print!("{}", render::categories(&options));
            }
        }
        Command::Add { fields } => {
            let draft = fields.new_draft().context("invalid product")?;
            let created = service.create(&draft).await.context("failed to create product")?;
            print_saved(&cli, "Created", &created, service.store())?;
        }
        Command::Edit { id, fields } => {
            let current = service
                .store()
                .find(id)
                .ok_or_else(|| anyhow!("product {id} is not in the catalog"))?;
            let draft = fields.apply_to(current.to_draft()).context("invalid product")?;
            let updated = service
                .update(id, &draft)
                .await
                .with_context(|| format!("failed to update product {id}"))?;
            print_saved(&cli, "Updated", &updated, service.store())?;
        }
        Command::Delete { id } => {
            let removed = service
                .delete(id)
                .await
                .with_context(|| format!("failed to delete product {id}"))?;
            print_saved(&cli, "Deleted", &removed, service.store())?;
        }
    }

    Ok(())
}

fn print_saved(cli: &Cli, verb: &str, product: &Product, store: &CatalogStore) -> anyhow::Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(product)?);
    } else {
        print!("{}", render::saved(verb, product, store.showing().1));
    }
    Ok(())
}
