use serde::Serialize;
use stockcast_core::{search_stocks, Stock};

use crate::cli::StocksArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct StocksResponseData {
    query: String,
    results: Vec<Stock>,
}

pub fn run(args: &StocksArgs) -> Result<CommandResult, CliError> {
    let query = args.query.as_deref().unwrap_or_default().trim().to_owned();
    let results = search_stocks(&query);

    let warning = results
        .is_empty()
        .then(|| format!("no featured stock matches '{query}'"));

    let data = serde_json::to_value(StocksResponseData { query, results })?;
    let mut result = CommandResult::ok(data);
    if let Some(warning) = warning {
        result = result.with_warning(warning);
    }

    Ok(result)
}
