//! Command-line arguments.

use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use storefront_analytics::{AnalyticsConfig, PercentageBasis};
use storefront_client::ClientConfig;
use storefront_core::{DomainError, DomainResult};
use storefront_products::{ProductDraft, ProductId};
use storefront_store::ProductFilter;

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Product catalog browser and analytics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Catalog service root (overrides STOREFRONT_API_URL).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// HTTP timeout in seconds (overrides STOREFRONT_HTTP_TIMEOUT_SECS).
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Human-readable logs instead of JSON.
    #[arg(long, global = true)]
    pub pretty_logs: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Catalog analytics (default).
    Summary {
        /// Entries in the top categories ranking (overrides STOREFRONT_TOP_CATEGORIES).
        #[arg(long)]
        top: Option<usize>,

        /// Denominator for rating percentages (overrides STOREFRONT_RATING_BASIS).
        #[arg(long, value_enum)]
        rating_basis: Option<BasisArg>,
    },
    /// Products, optionally narrowed by title search and category.
    List {
        #[arg(long, short)]
        search: Option<String>,

        #[arg(long, short)]
        category: Option<String>,
    },
    /// Distinct categories in the catalog.
    Categories,
    /// Create a product.
    Add {
        #[command(flatten)]
        fields: DraftArgs,
    },
    /// Edit a product; fields left out keep their current value.
    Edit {
        id: ProductId,

        #[command(flatten)]
        fields: DraftArgs,
    },
    /// Delete a product.
    Delete { id: ProductId },
}

/// Product form fields. Prices are taken as typed and parsed on use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct DraftArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub image: Option<String>,
}

impl DraftArgs {
    /// Draft for a new product. Every field is required.
    pub fn new_draft(&self) -> DomainResult<ProductDraft> {
        let raw_price = self
            .price
            .as_deref()
            .ok_or_else(|| DomainError::validation("price cannot be empty"))?;
        let base = ProductDraft {
            title: String::new(),
            price: ProductDraft::parse_price(raw_price)?,
            description: String::new(),
            category: String::new(),
            image: String::new(),
        };
        let draft = self.apply_to(base)?;
        draft.validate()?;
        Ok(draft)
    }

    /// Overlay the given fields on `base`, e.g. a draft of the current product.
    pub fn apply_to(&self, mut base: ProductDraft) -> DomainResult<ProductDraft> {
        if let Some(title) = &self.title {
            base.title = title.clone();
        }
        if let Some(raw) = &self.price {
            base.price = ProductDraft::parse_price(raw)?;
        }
        if let Some(description) = &self.description {
            base.description = description.clone();
        }
        if let Some(category) = &self.category {
            base.category = category.clone();
        }
        if let Some(image) = &self.image {
            base.image = image.clone();
        }
        Ok(base)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BasisArg {
    All,
    Rated,
}

impl From<BasisArg> for PercentageBasis {
    fn from(value: BasisArg) -> Self {
        match value {
            BasisArg::All => PercentageBasis::AllProducts,
            BasisArg::Rated => PercentageBasis::RatedProducts,
        }
    }
}

impl Cli {
    /// The requested subcommand; `summary` when none is given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Summary {
            top: None,
            rating_basis: None,
        })
    }

    /// Flags layered over an environment-derived client config.
    pub fn client_config(&self, mut base: ClientConfig) -> ClientConfig {
        if let Some(url) = &self.api_url {
            base = ClientConfig::new(url.as_str()).with_timeout(base.timeout);
        }
        if let Some(secs) = self.timeout_secs {
            base.timeout = Duration::from_secs(secs);
        }
        base
    }

    /// Flags layered over an environment-derived analytics config.
    pub fn analytics_config(&self, mut base: AnalyticsConfig) -> AnalyticsConfig {
        if let Some(Command::Summary { top, rating_basis }) = &self.command {
            if let Some(top) = top {
                base.top_categories_limit = *top;
            }
            if let Some(basis) = rating_basis {
                base.rating_basis = (*basis).into();
            }
        }
        base
    }
}

impl Command {
    pub fn filter(&self) -> Option<ProductFilter> {
        match self {
            Command::List { search, category } => Some(ProductFilter::new(
                search.clone().unwrap_or_default(),
                category.clone(),
            )),
            _ => None,
        }
    }
}
