use rstest::{fixture, rstest};

use super::{load, load_file, load_str};
use crate::catalog::{Catalog, MessageStatus};
use crate::error::{CatalogError, ParseErrorKind, Position};
use crate::resolver::{NO_ARGS, resolve};
use crate::test_support::fixtures::{SAMPLE_DE, TranslationFixture};

#[fixture]
fn sample() -> Catalog {
    load_str(SAMPLE_DE).expect("sample catalog should parse")
}

#[rstest]
fn reads_root_attributes(sample: Catalog) {
    assert_eq!(sample.language(), Some("de_DE"));
    assert_eq!(sample.source_language(), Some("en"));
}

#[rstest]
fn preserves_context_order(sample: Catalog) {
    let names: Vec<&str> = sample.contexts().iter().map(|context| context.name()).collect();
    assert_eq!(
        names,
        [
            "AddOperatorAction",
            "ClipPlaneWidget",
            "ExportDialog",
            "LayerSettings"
        ]
    );
}

#[rstest]
#[case("AddOperatorAction", "Add operator", None, MessageStatus::Finished)]
#[case("ClipPlaneWidget", "Gradient color 1", None, MessageStatus::Unfinished)]
#[case("ExportDialog", "Legacy exporter", None, MessageStatus::Obsolete)]
#[case(
    "LayerSettings",
    "hidden",
    Some("layer visibility"),
    MessageStatus::Finished
)]
fn maps_translation_types(
    sample: Catalog,
    #[case] context: &str,
    #[case] source: &str,
    #[case] disambiguation: Option<&str>,
    #[case] expected: MessageStatus,
) {
    let message = sample
        .find(context, source, disambiguation)
        .expect("message should be present");
    assert_eq!(message.status(), expected);
}

#[rstest]
fn duplicate_keys_keep_the_last_occurrence(sample: Catalog) {
    let context = sample
        .context("ClipPlaneWidget")
        .expect("context should be present");
    let planes: Vec<_> = context
        .messages()
        .iter()
        .filter(|message| message.source() == "Plane %1")
        .collect();

    assert_eq!(planes.len(), 1);
    let plane = planes.first().expect("one message should remain");
    assert_eq!(plane.status(), MessageStatus::Unfinished);
    assert_eq!(plane.translation(), "");
}

#[rstest]
fn empty_translation_is_recorded_as_empty_string(sample: Catalog) {
    let message = sample
        .find("ExportDialog", "Export options for %1 writer", None)
        .expect("message should be present");
    assert_eq!(message.translation(), "");
    assert_eq!(
        message.extra_comment(),
        Some("%1 is the writer name, e.g. Silo")
    );
}

#[rstest]
fn decodes_entities(sample: Catalog) {
    let message = sample
        .find("LayerSettings", "Opacity & blending <advanced>", None)
        .expect("escaped source should decode");
    assert_eq!(message.translation(), "Deckkraft & Überblendung <erweitert>");
    assert_eq!(message.translator_comment(), Some("keep the angle brackets"));
}

#[rstest]
fn keeps_numerus_forms(sample: Catalog) {
    let message = sample
        .find("ExportDialog", "%n file(s) written", None)
        .expect("numerus message should be present");
    assert_eq!(
        message.numerus_forms(),
        ["%n Datei geschrieben", "%n Dateien geschrieben"]
    );
    assert_eq!(message.translation(), "%n Datei geschrieben");
}

#[rstest]
fn records_locations(sample: Catalog) {
    let message = sample
        .find("AddOperatorAction", "Add operator", None)
        .expect("message should be present");
    let location = message.locations().first().expect("location recorded");
    assert_eq!(
        location.filename.as_deref(),
        Some("../src/actions/add_operator.cpp")
    );
    assert_eq!(location.line.as_deref(), Some("42"));
}

#[test]
fn missing_translation_element_is_unfinished() {
    let catalog = load_str(
        "<TS><context><name>A</name><message><source>Open</source></message></context></TS>",
    )
    .expect("catalog should parse");
    let message = catalog.find("A", "Open", None).expect("message present");
    assert_eq!(message.status(), MessageStatus::Unfinished);
    assert_eq!(message.translation(), "");
}

#[test]
fn self_closing_translation_is_empty() {
    let catalog = load_str(
        r#"<TS><context><name>A</name><message><source>Open</source><translation type="unfinished"/></message></context></TS>"#,
    )
    .expect("catalog should parse");
    let message = catalog.find("A", "Open", None).expect("message present");
    assert_eq!(message.translation(), "");
}

#[test]
fn cdata_sections_are_read_verbatim() {
    let catalog = load_str(
        "<TS><context><name>A</name><message><source><![CDATA[a < b]]></source><translation>x</translation></message></context></TS>",
    )
    .expect("catalog should parse");
    assert!(catalog.find("A", "a < b", None).is_some());
}

#[test]
fn missing_source_is_positioned() {
    let error = load_str("<TS>\n<context>\n<name>A</name>\n<message>\n<translation>x</translation>\n</message>\n</context>\n</TS>")
        .expect_err("message without source must fail");

    assert_eq!(
        error.kind(),
        &ParseErrorKind::MissingSource {
            context: String::from("A")
        }
    );
    assert_eq!(error.position(), Position { line: 4, column: 1 });
}

#[test]
fn missing_context_name_fails() {
    let error = load_str("<TS><context><message><source>x</source></message></context></TS>")
        .expect_err("context without name must fail");
    assert_eq!(error.kind(), &ParseErrorKind::MissingContextName);
}

#[test]
fn unterminated_blocks_fail() {
    let error = load_str("<TS><context><name>A</name><message><source>x</source></message>")
        .expect_err("unterminated context must fail");
    assert!(
        matches!(
            error.kind(),
            ParseErrorKind::Unterminated { .. } | ParseErrorKind::Syntax { .. }
        ),
        "unexpected error kind: {error}"
    );
}

#[test]
fn mismatched_end_tags_fail() {
    let error = load_str("<TS><context><name>A</context></TS>")
        .expect_err("mismatched end tag must fail");
    assert!(matches!(error.kind(), ParseErrorKind::Syntax { .. }));
}

#[rstest]
#[case("<xliff></xliff>")]
#[case("<TS></TS><TS></TS>")]
fn rejects_foreign_roots(#[case] input: &str) {
    let error = load_str(input).expect_err("foreign root must fail");
    assert!(
        matches!(
            error.kind(),
            ParseErrorKind::UnexpectedRoot { .. } | ParseErrorKind::Syntax { .. }
        ),
        "unexpected error kind: {error}"
    );
}

#[test]
fn empty_input_has_no_root() {
    let error = load_str("").expect_err("empty input must fail");
    assert_eq!(error.kind(), &ParseErrorKind::MissingRoot);
}

#[test]
fn misplaced_message_fails() {
    let error = load_str("<TS><message><source>x</source></message></TS>")
        .expect_err("message outside context must fail");
    assert_eq!(
        error.kind(),
        &ParseErrorKind::Misplaced {
            element: String::from("message"),
            parent: String::from("TS"),
        }
    );
}

#[test]
fn unknown_translation_type_fails() {
    let error = load_str(
        r#"<TS><context><name>A</name><message><source>x</source><translation type="draft">y</translation></message></context></TS>"#,
    )
    .expect_err("unknown type must fail");
    assert_eq!(
        error.kind(),
        &ParseErrorKind::UnknownStatus {
            value: String::from("draft")
        }
    );
}

#[test]
fn invalid_utf8_fails() {
    let error = load(b"<TS>\n\xff</TS>").expect_err("invalid UTF-8 must fail");
    assert!(matches!(error.kind(), ParseErrorKind::InvalidUtf8 { .. }));
    assert_eq!(error.position(), Position { line: 2, column: 1 });
}

#[test]
fn unknown_elements_are_skipped() {
    let catalog = load_str(
        "<TS><defaultcodec>UTF-8</defaultcodec><context><name>A</name><message><source>x</source><oldsource>y</oldsource><translation>z</translation></message></context></TS>",
    )
    .expect("catalog should parse");
    let message = catalog.find("A", "x", None).expect("message present");
    assert_eq!(message.translation(), "z");
}

#[rstest]
#[case("<byte value=\"x1\"/>", "a\u{1}b")]
#[case("<byte value=\"x1B\"/>", "a\u{1b}b")]
#[case("<byte value=\"7\"/>", "a\u{7}b")]
#[case("<byte value=\"x1\"></byte>", "a\u{1}b")]
fn byte_elements_are_decoded_into_the_text(#[case] byte: &str, #[case] expected: &str) {
    let input = format!(
        "<TS><context><name>A</name><message><source>a{byte}b</source><translation>a{byte}b</translation></message></context></TS>"
    );
    let catalog = load_str(&input).expect("catalog should parse");

    let message = catalog.find("A", expected, None).expect("message present");
    assert_eq!(message.translation(), expected);
    assert_eq!(resolve(&catalog, "A", expected, None, NO_ARGS), expected);
}

#[test]
fn byte_elements_are_decoded_in_comments_and_numerus_forms() {
    let catalog = load_str(
        "<TS><context><name>A</name><message numerus=\"yes\"><source>%n file(s)</source><comment>x<byte value=\"x2\"/></comment><translation><numerusform>%n Datei<byte value=\"x3\"/></numerusform></translation></message></context></TS>",
    )
    .expect("catalog should parse");

    let message = catalog
        .find("A", "%n file(s)", Some("x\u{2}"))
        .expect("message present");
    assert_eq!(message.numerus_forms(), ["%n Datei\u{3}"]);
}

#[rstest]
#[case("<byte/>")]
#[case("<byte value=\"xZZ\"/>")]
#[case("<byte value=\"x110000\"/>")]
#[case("<byte value=\"seven\"/>")]
fn invalid_byte_values_fail(#[case] byte: &str) {
    let input = format!(
        "<TS><context><name>A</name><message><source>a{byte}</source></message></context></TS>"
    );
    let error = load_str(&input).expect_err("byte value should be rejected");
    assert!(matches!(error.kind(), ParseErrorKind::Syntax { .. }));
}

#[test]
fn contexts_without_messages_are_kept() {
    let catalog = load_str(
        "<TS><context><name>Empty</name></context><context><name>A</name><message><source>x</source><translation>y</translation></message></context></TS>",
    )
    .expect("catalog should parse");

    let names: Vec<&str> = catalog.contexts().iter().map(|context| context.name()).collect();
    assert_eq!(names, ["Empty", "A"]);
    assert_eq!(catalog.len(), 1);
}

#[test]
fn load_file_reads_from_disk() {
    let fixture = TranslationFixture::with_samples().expect("fixture should be created");
    let catalog = load_file(&fixture.root().join("app_de.ts")).expect("file should load");
    assert_eq!(catalog.language(), Some("de_DE"));
}

#[test]
fn load_file_reports_missing_files() {
    let fixture = TranslationFixture::new().expect("fixture should be created");
    let outcome = load_file(&fixture.root().join("missing.ts"));
    assert!(matches!(outcome, Err(CatalogError::Io { .. })));
}

#[test]
fn load_file_reports_parse_failures_with_the_path() {
    let fixture = TranslationFixture::new().expect("fixture should be created");
    let path = fixture
        .write("broken.ts", "<TS><context>")
        .expect("fixture file should be written");
    match load_file(&path) {
        Err(CatalogError::Parse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected a parse error, got {other:?}"),
    }
}
