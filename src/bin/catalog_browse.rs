//! Terminal front-end for a running catalog proxy.
//!
//! Shows the list page by page; pressing Enter stands in for scrolling the
//! sentinel into view.

use std::time::Duration;

use clap::Parser;
use log::error;
use tokio::io::{AsyncBufReadExt, BufReader};
use url::Url;

use catalog_proxy::client::CatalogClient;
use catalog_proxy::constants::{
    DEFAULT_PAGE_LIMIT, DEFAULT_SOURCE_TAG, MSG_ALL_LOADED, MSG_EMPTY_LIST, MSG_LOADING_MORE,
};
use catalog_proxy::pager::{Cells, InfiniteList, ListView, NoopObserver, PagerOptions};

#[derive(Debug, Parser)]
#[command(name = "catalog-browse", about = "Browse a catalog source page by page")]
struct Args {
    /// Base URL of the catalog proxy
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    base_url: Url,
    /// Source tag to browse
    #[arg(long, default_value = DEFAULT_SOURCE_TAG)]
    source: String,
    /// Items per page
    #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
    limit: u32,
    /// Upstream category id
    #[arg(long, default_value = "")]
    category: String,
    /// Leave the skeleton state when the first page fails
    #[arg(long)]
    recover_initial_failure: bool,
    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

/// Print items from `from` onward plus the footer; returns the new item count.
fn render(view: &ListView<'_>, from: usize) -> usize {
    let shown = match view.cells {
        Cells::Skeleton(n) => {
            println!("[{} placeholders]", n);
            0
        }
        Cells::Items(items) => {
            for (key, item) in view.keyed_items().into_iter().skip(from) {
                let year = if item.year.is_empty() { "-" } else { item.year.as_str() };
                let rate = if item.rate.is_empty() { "-" } else { item.rate.as_str() };
                println!("{:<40} {:>6} {:>5}  ({})", key, year, rate, item.id);
            }
            items.len()
        }
    };

    if view.sentinel.is_some_and(|s| s.spinner) {
        println!("{}", MSG_LOADING_MORE);
    }
    if view.all_loaded {
        println!("{}", MSG_ALL_LOADED);
    }
    if view.empty {
        println!("{}", MSG_EMPTY_LIST);
    }
    shown
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let args = Args::parse();
    let client = CatalogClient::new(
        args.base_url,
        args.source,
        Duration::from_secs(args.timeout),
    )
    .map_err(|e| {
        error!("Failed to build catalog client: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    let options = PagerOptions {
        limit: args.limit,
        category: args.category,
        recover_initial_failure: args.recover_initial_failure,
    };
    let mut list = InfiniteList::new(client, options, NoopObserver);

    list.mount().await;
    let mut shown = render(&list.view(), 0);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == "q" {
            break;
        }
        if list.sentinel_intersected().await {
            shown = render(&list.view(), shown);
        } else if list.state().loading() {
            render(&list.view(), shown);
        } else if !list.state().has_more() {
            println!("{}", MSG_ALL_LOADED);
        }
    }

    list.unmount();
    Ok(())
}
