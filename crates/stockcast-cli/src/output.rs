use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde_json::Value;
use stockcast_core::Envelope;
use tracing::info;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Render `envelope` to `path`, or to stdout when no path is given.
pub fn render(
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
    path: Option<&Path>,
) -> Result<(), CliError> {
    match path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_envelope(&mut writer, envelope, format, pretty)?;
            writer.flush()?;
            info!(path = %path.display(), "wrote output file");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_envelope(&mut writer, envelope, format, pretty)?;
            writer.flush()?;
        }
    }

    Ok(())
}

pub fn write_envelope<W: Write>(
    writer: &mut W,
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            writeln!(writer, "{payload}")?;
        }
        OutputFormat::Ndjson => {
            let payload = serde_json::to_string(envelope)?;
            writeln!(writer, "{payload}")?;
        }
        OutputFormat::Table => write_table(writer, envelope)?,
    }

    Ok(())
}

fn write_table<W: Write>(writer: &mut W, envelope: &Envelope<Value>) -> Result<(), CliError> {
    writeln!(writer, "request_id    : {}", envelope.meta.request_id)?;
    writeln!(writer, "schema        : {}", envelope.meta.schema_version)?;
    writeln!(writer, "generated_at  : {}", envelope.meta.generated_at)?;
    writeln!(writer, "reference_date: {}", envelope.meta.reference_date)?;
    if let Some(seed) = envelope.meta.seed {
        writeln!(writer, "seed          : {seed}")?;
    }

    if !envelope.meta.warnings.is_empty() {
        writeln!(writer, "warnings:")?;
        for warning in &envelope.meta.warnings {
            writeln!(writer, "  - {warning}")?;
        }
    }

    if let Some(bars) = envelope.data.get("bars").and_then(Value::as_array) {
        writeln!(writer, "bars:")?;
        write_rows(
            writer,
            &["date", "open", "high", "low", "close", "volume"],
            bars,
        )?;
    }

    if let Some(points) = envelope.data.get("forecast").and_then(Value::as_array) {
        writeln!(writer, "forecast:")?;
        write_rows(writer, &["date", "predicted", "confidence"], points)?;
    }

    let summary = summary_fields(&envelope.data);
    writeln!(writer, "data:")?;
    let pretty_data = serde_json::to_string_pretty(&summary)?;
    for line in pretty_data.lines() {
        writeln!(writer, "  {line}")?;
    }

    Ok(())
}

fn write_rows<W: Write>(writer: &mut W, columns: &[&str], rows: &[Value]) -> io::Result<()> {
    let header = columns
        .iter()
        .map(|column| format!("{column:>12}"))
        .collect::<String>();
    writeln!(writer, "  {header}")?;

    for row in rows {
        let line = columns
            .iter()
            .map(|column| format!("{:>12}", cell(row.get(*column))))
            .collect::<String>();
        writeln!(writer, "  {line}")?;
    }

    Ok(())
}

fn cell(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(number)) if number.is_f64() => {
            format!("{:.2}", number.as_f64().unwrap_or_default())
        }
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => String::from("-"),
    }
}

/// `data` without the bulk series already printed as rows.
fn summary_fields(data: &Value) -> Value {
    match data {
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .filter(|(key, _)| !matches!(key.as_str(), "bars" | "history" | "forecast"))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use stockcast_core::{EnvelopeMeta, TradingDate};

    use super::*;

    fn envelope(data: Value) -> Envelope<Value> {
        let as_of = TradingDate::parse("2024-03-14").expect("date");
        let mut meta = EnvelopeMeta::new("request-12345", as_of)
            .expect("valid")
            .with_seed(42);
        meta.push_warning("symbol 'IBM' is not in the catalog");
        Envelope::success(meta, data)
    }

    fn rendered(envelope: &Envelope<Value>, format: OutputFormat, pretty: bool) -> String {
        let mut buffer = Vec::new();
        write_envelope(&mut buffer, envelope, format, pretty).expect("renders");
        String::from_utf8(buffer).expect("utf8")
    }

    #[test]
    fn ndjson_is_single_line() {
        let output = rendered(&envelope(json!({ "a": [1, 2] })), OutputFormat::Ndjson, true);
        assert_eq!(output.lines().count(), 1);
        let parsed: Value = serde_json::from_str(output.trim()).expect("valid json");
        assert_eq!(parsed["meta"]["seed"], 42);
    }

    #[test]
    fn table_prints_rows_and_skips_series_in_summary() {
        let data = json!({
            "symbol": "IBM",
            "bars": [
                {
                    "date": "2024-03-13",
                    "open": 100.5,
                    "high": 101.25,
                    "low": 99.0,
                    "close": 100.75,
                    "volume": 1500000
                }
            ]
        });
        let output = rendered(&envelope(data), OutputFormat::Table, false);

        assert!(output.contains("reference_date: 2024-03-14"));
        assert!(output.contains("seed          : 42"));
        assert!(output.contains("  - symbol 'IBM' is not in the catalog"));
        assert!(output.contains("2024-03-13"));
        assert!(output.contains("101.25"));
        assert!(output.contains("1500000"));
        assert!(output.contains("\"symbol\": \"IBM\""));
        assert!(!output.contains("\"bars\""));
    }

    #[test]
    fn writes_to_requested_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("forecast.json");

        render(
            &envelope(json!({ "symbol": "AAPL" })),
            OutputFormat::Json,
            true,
            Some(&path),
        )
        .expect("renders");

        let written = std::fs::read_to_string(&path).expect("file exists");
        let parsed: Value = serde_json::from_str(&written).expect("valid json");
        assert_eq!(parsed["data"]["symbol"], "AAPL");
        assert_eq!(parsed["meta"]["reference_date"], "2024-03-14");
    }
}
