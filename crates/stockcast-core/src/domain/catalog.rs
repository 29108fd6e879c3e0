use serde::{Deserialize, Serialize};

use crate::Symbol;

/// Starting price for symbols outside the catalog.
pub const DEFAULT_BASE_PRICE: f64 = 100.0;

const CATALOG: [(&str, &str, &str, f64); 8] = [
    ("AAPL", "Apple Inc.", "Technology", 150.0),
    ("GOOGL", "Alphabet Inc.", "Technology", 2800.0),
    ("MSFT", "Microsoft Corp.", "Technology", 300.0),
    ("AMZN", "Amazon.com Inc.", "Consumer Discretionary", 3200.0),
    ("TSLA", "Tesla Inc.", "Consumer Discretionary", 800.0),
    ("NVDA", "NVIDIA Corp.", "Technology", 450.0),
    ("META", "Meta Platforms", "Technology", 320.0),
    ("NFLX", "Netflix Inc.", "Communication Services", 500.0),
];

/// Catalog entry for one of the featured equities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub symbol: Symbol,
    pub name: String,
    pub sector: String,
    pub base_price: f64,
}

/// All featured equities, in display order.
pub fn stock_catalog() -> Vec<Stock> {
    CATALOG
        .into_iter()
        .map(|(symbol, name, sector, base_price)| Stock {
            symbol: Symbol::parse(symbol).expect("catalog symbols are valid"),
            name: name.to_owned(),
            sector: sector.to_owned(),
            base_price,
        })
        .collect()
}

/// Catalog entries whose symbol or name contains `query`, ignoring case.
pub fn search_stocks(query: &str) -> Vec<Stock> {
    let query = query.trim().to_ascii_lowercase();
    stock_catalog()
        .into_iter()
        .filter(|stock| {
            query.is_empty()
                || stock.symbol.as_str().to_ascii_lowercase().contains(&query)
                || stock.name.to_ascii_lowercase().contains(&query)
        })
        .collect()
}

/// Catalog entry for `symbol`, matched case-insensitively.
pub fn find_stock(symbol: &str) -> Option<Stock> {
    let symbol = symbol.trim();
    stock_catalog()
        .into_iter()
        .find(|stock| stock.symbol.as_str().eq_ignore_ascii_case(symbol))
}

/// Starting price of the random walk for `symbol`.
pub fn base_price(symbol: &str) -> f64 {
    let symbol = symbol.trim();
    CATALOG
        .iter()
        .find(|(ticker, ..)| ticker.eq_ignore_ascii_case(symbol))
        .map_or(DEFAULT_BASE_PRICE, |&(.., price)| price)
}
