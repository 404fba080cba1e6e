use cb_charts::{ChartFigure, ChartSpec, TabFigures};
use cb_core::responses::KpiSummary;
use schemars::schema_for;

use crate::cli::{GlobalFlags, OutputFormat, SchemaArgs, SchemaPayload};
use crate::commands::check::CheckResponse;
use crate::commands::summary::SummaryResponse;

/// Handle `checkbook schema`. Always JSON; `--format raw` prints one line.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_value(args.payload)?;
    let rendered = match flags.format {
        OutputFormat::Raw => serde_json::to_string(&schema)?,
        OutputFormat::Json | OutputFormat::Table => serde_json::to_string_pretty(&schema)?,
    };
    println!("{rendered}");
    Ok(())
}

fn schema_value(payload: SchemaPayload) -> anyhow::Result<serde_json::Value> {
    let schema = match payload {
        SchemaPayload::Kpis => schema_for!(KpiSummary),
        SchemaPayload::Tab => schema_for!(TabFigures),
        SchemaPayload::Chart => schema_for!(ChartFigure),
        SchemaPayload::ChartSpec => schema_for!(ChartSpec),
        SchemaPayload::Summary => schema_for!(SummaryResponse),
        SchemaPayload::Check => schema_for!(CheckResponse),
    };
    Ok(serde_json::to_value(schema)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::schema_value;
    use crate::cli::SchemaPayload;

    #[test]
    fn every_payload_has_an_object_schema() {
        for payload in [
            SchemaPayload::Kpis,
            SchemaPayload::Tab,
            SchemaPayload::Chart,
            SchemaPayload::ChartSpec,
            SchemaPayload::Summary,
            SchemaPayload::Check,
        ] {
            let schema = schema_value(payload).expect("schema");
            assert_eq!(schema["type"], "object", "{payload:?}");
        }
    }

    #[test]
    fn check_schema_lists_flattened_fields() {
        let schema = schema_value(SchemaPayload::Check).expect("schema");
        let properties = schema["properties"].as_object().expect("properties");
        assert!(properties.contains_key("match_rate"));
        assert!(properties.contains_key("contract_rows"));
        assert!(!properties.contains_key("report"));
    }
}
