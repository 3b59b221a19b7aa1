//! Report encoders.
//!
//! The XML layout is small and fixed, so it is written line by line rather than
//! through a DOM:
//!
//! ```xml
//! <line_mapping>
//!   <metadata>...</metadata>
//!   <files>...</files>
//!   <mappings>
//!     <mapping index="1">
//!       <source .../>
//!       <target .../>
//!       <comparison .../>
//!     </mapping>
//!   </mappings>
//!   <summary>...</summary>
//! </line_mapping>
//! ```

use crate::model::{FileInfo, LineRef, MISSING_LINE_TEXT, MappingEntry, Report};

pub fn encode_report(report: &Report) -> String {
    let mut lines = Vec::new();
    lines.push(r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string());
    lines.push("<line_mapping>".to_string());

    lines.push("  <metadata>".to_string());
    lines.push(format!(
        "    <generated_at>{}</generated_at>",
        escape(&report.metadata.generated_at)
    ));
    lines.push(format!("    <tool>{}</tool>", escape(&report.metadata.tool)));
    lines.push("  </metadata>".to_string());

    lines.push("  <files>".to_string());
    for file in &report.files {
        lines.push(format!(
            r#"    <file id="{}" name="{}" path="{}" line_count="{}"/>"#,
            file.id,
            escape(&file.name),
            escape(&file.path),
            file.line_count
        ));
    }
    lines.push("  </files>".to_string());

    let mappings = &report.comparison.mappings;
    if mappings.is_empty() {
        lines.push("  <mappings/>".to_string());
    } else {
        lines.push("  <mappings>".to_string());
        for entry in mappings {
            push_mapping(&mut lines, report, entry);
        }
        lines.push("  </mappings>".to_string());
    }

    let summary = &report.comparison.summary;
    lines.push("  <summary>".to_string());
    lines.push(format!(
        "    <total_lines>{}</total_lines>",
        summary.total_lines
    ));
    lines.push(format!(
        "    <exact_matches>{}</exact_matches>",
        summary.exact
    ));
    lines.push(format!(
        "    <similar_matches>{}</similar_matches>",
        summary.similar
    ));
    lines.push(format!(
        "    <differences>{}</differences>",
        summary.different
    ));
    lines.push(format!(
        "    <unpaired_lines>{}</unpaired_lines>",
        summary.unpaired
    ));
    lines.push(format!(
        "    <similarity_score>{}</similarity_score>",
        summary.similarity_display()
    ));
    lines.push("  </summary>".to_string());

    lines.push("</line_mapping>".to_string());
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn push_mapping(lines: &mut Vec<String>, report: &Report, entry: &MappingEntry) {
    lines.push(format!(r#"    <mapping index="{}">"#, entry.index));
    lines.push(line_element(
        "source",
        report.source_file(),
        entry.source.as_ref(),
    ));
    lines.push(line_element(
        "target",
        report.target_file(),
        entry.target.as_ref(),
    ));
    let c = entry.classification;
    lines.push(format!(
        r#"      <comparison result="{}" confidence="{}">{}</comparison>"#,
        c.result_name(),
        c.confidence(),
        escape(c.description())
    ));
    lines.push("    </mapping>".to_string());
}

fn line_element(tag: &str, file: &FileInfo, line: Option<&LineRef>) -> String {
    let (number, text) = match line {
        Some(l) => (l.number.to_string(), l.text.as_str()),
        None => ("missing".to_string(), MISSING_LINE_TEXT),
    };
    format!(
        r#"      <{tag} file_id="{}" file="{}" line_number="{}">{}</{tag}>"#,
        file.id,
        escape(&file.name),
        number,
        escape(text)
    )
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\r' => out.push_str("&#13;"),
            '\t' | '\n' => out.push(c),
            // Not representable in XML 1.0, even as character references.
            c if c < '\u{20}' || c == '\u{fffe}' || c == '\u{ffff}' => {
                out.push(char::REPLACEMENT_CHARACTER)
            }
            _ => out.push(c),
        }
    }
    out
}

/// Plain-text rendering used by the view endpoint and the CLI.
pub fn encode_text(report: &Report) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} generated {}",
        report.metadata.tool, report.metadata.generated_at
    ));
    for file in &report.files {
        lines.push(format!(
            "file {}: {} ({} lines) {}",
            file.id, file.name, file.line_count, file.path
        ));
    }
    lines.push(String::new());

    for entry in &report.comparison.mappings {
        let c = entry.classification;
        lines.push(format!(
            "{:>5} {:<11} {:>3}  {} | {}",
            entry.index,
            c.result_name(),
            c.confidence(),
            entry
                .source
                .as_ref()
                .map(|l| l.text.as_str())
                .unwrap_or(MISSING_LINE_TEXT),
            entry
                .target
                .as_ref()
                .map(|l| l.text.as_str())
                .unwrap_or(MISSING_LINE_TEXT),
        ));
    }

    let s = &report.comparison.summary;
    lines.push(String::new());
    lines.push(format!(
        "total={} exact={} similar={} different={} unpaired={} similarity={}",
        s.total_lines,
        s.exact,
        s.similar,
        s.different,
        s.unpaired,
        s.similarity_display()
    ));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "tests/xml_tests.rs"]
mod tests;
