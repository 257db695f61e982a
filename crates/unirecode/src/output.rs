use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use unirecode_registry::CodecInfo;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct CodecOutput<'a> {
    name: &'a str,
    description: &'a str,
}

pub fn render_codecs(codecs: &[CodecInfo<'_>], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let out: Vec<CodecOutput<'_>> = codecs
                .iter()
                .map(|info| CodecOutput {
                    name: info.name,
                    description: info.description,
                })
                .collect();
            serde_json::to_string(&out).unwrap_or_else(|_| "[]".to_string())
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["NAME", "DESCRIPTION"]);
            for info in codecs {
                table.add_row(vec![info.name, info.description]);
            }
            table.to_string()
        }
        OutputFormat::Pretty => {
            let width = codecs.iter().map(|info| info.name.len()).max().unwrap_or(0);
            codecs
                .iter()
                .map(|info| format!("{:<width$}  {}", info.name, info.description))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

pub fn print_codecs(codecs: &[CodecInfo<'_>], format: OutputFormat) {
    println!("{}", render_codecs(codecs, format));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CodecInfo<'static>> {
        vec![
            CodecInfo {
                name: "ASCII",
                description: "7-bit",
            },
            CodecInfo {
                name: "UTF-16BE",
                description: "big-endian",
            },
        ]
    }

    #[test]
    fn json_lists_every_codec() {
        let rendered = render_codecs(&sample(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value[0]["name"], "ASCII");
        assert_eq!(value[1]["description"], "big-endian");
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn pretty_aligns_descriptions() {
        let rendered = render_codecs(&sample(), OutputFormat::Pretty);
        assert_eq!(rendered, "ASCII     7-bit\nUTF-16BE  big-endian");
    }

    #[test]
    fn table_has_header_and_rows() {
        let rendered = render_codecs(&sample(), OutputFormat::Table);
        assert!(rendered.contains("NAME"));
        assert!(rendered.contains("UTF-16BE"));
    }
}
