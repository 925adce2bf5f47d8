use anyhow::Result;
use std::io::Write;

use crate::cli::OutputFormat;
use crate::formatting::{formatter_for, summary_table, FormattingConfig};
use crate::model::UserRecord;
use crate::pipeline::summarize;

pub fn run_summary(
    records: &[UserRecord],
    format: OutputFormat,
    formatting: FormattingConfig,
    out: &mut impl Write,
) -> Result<()> {
    let metrics = summarize(records);
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &metrics)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            let fmt = formatter_for(formatting);
            writeln!(out, "{}", fmt.header("User Summary"))?;
            writeln!(out, "{}", summary_table(&metrics, &formatting))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset_json() {
        let mut out = Vec::new();
        run_summary(&[], OutputFormat::Json, FormattingConfig::plain(), &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["total_users"], 0);
        assert_eq!(json["blocked_percent"], 0.0);
        assert_eq!(json["inactive_percent"], 0.0);
    }

    #[test]
    fn test_table_has_header() {
        let mut out = Vec::new();
        run_summary(&[], OutputFormat::Table, FormattingConfig::plain(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("User Summary"));
        assert!(text.contains("0.0%"));
    }
}
