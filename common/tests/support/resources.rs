use tsloc_common::test_support::fixtures::{SAMPLE_DE, SAMPLE_FR};

/// Look up a translation resource by the name scenarios use for it.
#[allow(dead_code, reason = "only the loader suite loads named resources")]
pub fn named_resource(name: &str) -> &'static str {
    match name {
        "the German sample" => SAMPLE_DE,
        "the French sample" => SAMPLE_FR,
        "a message without a source" => {
            "<TS>\n<context>\n<name>ExportDialog</name>\n<message>\n<translation>Exportieren</translation>\n</message>\n</context>\n</TS>\n"
        }
        "an unterminated context" => {
            "<TS>\n<context>\n<name>ExportDialog</name>\n"
        }
        "an unknown translation type" => {
            "<TS>\n<context>\n<name>ExportDialog</name>\n<message>\n<source>Export</source>\n<translation type=\"draft\">Exportieren</translation>\n</message>\n</context>\n</TS>\n"
        }
        "a repeated context" => {
            "<TS>\n<context>\n<name>ExportDialog</name>\n<message><source>Export</source><translation>Exportieren</translation></message>\n</context>\n<context>\n<name>ExportDialog</name>\n<message><source>Cancel</source><translation>Abbrechen</translation></message>\n</context>\n</TS>\n"
        }
        other => panic!("unknown resource `{other}`"),
    }
}
