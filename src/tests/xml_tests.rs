use super::*;
use crate::report::SourceFile;

fn source(name: &str, lines: &[&str]) -> SourceFile {
    SourceFile {
        name: name.to_string(),
        path: format!("uploads/{}", name),
        lines: lines.iter().map(|s| s.to_string()).collect(),
    }
}

fn sample() -> Report {
    Report::build(
        &source("a.txt", &["foo", "bar"]),
        &source("b.txt", &["foo", "bar "]),
        "2026-10-18T12:00:00Z".to_string(),
    )
}

#[test]
fn encodes_full_document() {
    let xml = encode_report(&sample());
    let tool = crate::report::TOOL_NAME;
    let expected = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<line_mapping>
  <metadata>
    <generated_at>2026-10-18T12:00:00Z</generated_at>
    <tool>{tool}</tool>
  </metadata>
  <files>
    <file id="1" name="a.txt" path="uploads/a.txt" line_count="2"/>
    <file id="2" name="b.txt" path="uploads/b.txt" line_count="2"/>
  </files>
  <mappings>
    <mapping index="1">
      <source file_id="1" file="a.txt" line_number="1">foo</source>
      <target file_id="2" file="b.txt" line_number="1">foo</target>
      <comparison result="exact_match" confidence="100">Lines are identical</comparison>
    </mapping>
    <mapping index="2">
      <source file_id="1" file="a.txt" line_number="2">bar</source>
      <target file_id="2" file="b.txt" line_number="2">bar </target>
      <comparison result="similar" confidence="90">Lines match after trimming leading/trailing whitespace</comparison>
    </mapping>
  </mappings>
  <summary>
    <total_lines>2</total_lines>
    <exact_matches>1</exact_matches>
    <similar_matches>1</similar_matches>
    <differences>0</differences>
    <unpaired_lines>0</unpaired_lines>
    <similarity_score>95.0%</similarity_score>
  </summary>
</line_mapping>
"#
    );
    assert_eq!(xml, expected);
}

#[test]
fn missing_lines_use_marker() {
    let report = Report::build(
        &source("a.txt", &["x"]),
        &source("b.txt", &[]),
        "2026-10-18T12:00:00Z".to_string(),
    );
    let xml = encode_report(&report);

    assert!(xml.contains(
        r#"<target file_id="2" file="b.txt" line_number="missing">[No corresponding line]</target>"#
    ));
    assert!(xml.contains(r#"<comparison result="unpaired" confidence="0">"#));
    assert!(xml.contains("<unpaired_lines>1</unpaired_lines>"));
    assert!(xml.contains("<similarity_score>0.0%</similarity_score>"));
}

#[test]
fn escapes_markup_in_text_and_attributes() {
    let report = Report::build(
        &source("a&b.txt", &["<tag attr=\"v\">'x' & y</tag>"]),
        &source("c.txt", &["plain"]),
        "2026-10-18T12:00:00Z".to_string(),
    );
    let xml = encode_report(&report);

    assert!(xml.contains(r#"name="a&amp;b.txt""#));
    assert!(xml.contains("&lt;tag attr=&quot;v&quot;&gt;&apos;x&apos; &amp; y&lt;/tag&gt;"));
    assert!(!xml.contains("<tag"));
}

#[test]
fn empty_comparison_has_empty_mappings() {
    let report = Report::build(
        &source("a.txt", &[]),
        &source("b.txt", &[]),
        "2026-10-18T12:00:00Z".to_string(),
    );
    let xml = encode_report(&report);
    assert!(xml.contains("  <mappings/>\n"));
    assert!(xml.contains("<similarity_score>0%</similarity_score>"));
}

#[test]
fn text_rendering_lists_every_mapping() {
    let text = encode_text(&sample());
    assert!(text.contains("file 1: a.txt (2 lines) uploads/a.txt"));
    assert!(text.contains("    1 exact_match 100  foo | foo"));
    assert!(text.contains("    2 similar      90  bar | bar "));
    assert!(text.ends_with("similarity=95.0%\n"));
}

#[test]
fn characters_outside_xml_are_replaced() {
    let report = Report::build(
        &source("a.txt", &["page\u{0c}break", "nul\u{0}", "tab\there"]),
        &source("b.txt", &["page\u{0c}break"]),
        "2026-10-18T12:00:00Z".to_string(),
    );
    let xml = encode_report(&report);

    assert!(
        xml.chars()
            .all(|c| c >= '\u{20}' || matches!(c, '\t' | '\n'))
    );
    assert!(xml.contains(">page\u{fffd}break</source>"));
    assert!(xml.contains(">nul\u{fffd}</source>"));
    assert!(xml.contains(">tab\there</source>"));
    assert_eq!(escape("a\rb"), "a&#13;b");
}
