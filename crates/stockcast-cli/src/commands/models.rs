use serde::Serialize;
use stockcast_core::{ModelKind, ModelParams};

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct ModelDescriptor {
    model: ModelKind,
    label: &'static str,
    description: &'static str,
    params: ModelParams,
}

pub fn run() -> Result<CommandResult, CliError> {
    let models = ModelKind::ALL
        .into_iter()
        .map(|model| ModelDescriptor {
            model,
            label: model.label(),
            description: model.description(),
            params: model.params(),
        })
        .collect::<Vec<_>>();

    Ok(CommandResult::ok(serde_json::to_value(models)?))
}
