use super::*;

#[test]
fn trailing_newline_does_not_add_a_line() {
    assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
    assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    assert!(split_lines("").is_empty());
}

#[test]
fn crlf_is_stripped_but_inner_whitespace_kept() {
    assert_eq!(split_lines("a \r\n\tb\r\n\n"), vec!["a ", "\tb", ""]);
    assert_eq!(split_lines("a\rb\r\nc\r"), vec!["a", "b", "c"]);
    assert_eq!(split_lines("old\rmac\r\rfile"), vec!["old", "mac", "", "file"]);
    assert_eq!(split_lines("\n"), vec![""]);
}

#[test]
fn read_lines_rejects_binary_input() -> Result<()> {
    let tmp = tempfile::tempdir().context("create tempdir")?;
    let path = tmp.path().join("blob.bin");
    fs::write(&path, [0xff, 0xfe, 0x00]).context("write blob")?;

    let err = read_lines(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("not valid UTF-8"));
    Ok(())
}

#[test]
fn read_lines_reports_missing_file() {
    let err = read_lines(Path::new("/definitely/not/here.txt")).unwrap_err();
    assert!(format!("{:#}", err).contains("read /definitely/not/here.txt"));
}
