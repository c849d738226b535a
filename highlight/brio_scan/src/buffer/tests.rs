use super::*;

#[test]
fn empty_source() {
    let buf = ScanBuffer::new("");
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.as_bytes(), b"");
}

#[test]
fn len_excludes_tail() {
    let buf = ScanBuffer::new("hello");
    assert_eq!(buf.len(), 5);
    assert_eq!(buf.as_bytes(), b"hello");
}

#[test]
fn cursor_starts_at_zero() {
    let buf = ScanBuffer::new("ab");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn sentinel_follows_content() {
    let buf = ScanBuffer::new("x");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(cursor.is_eof());
}

#[test]
fn peek_on_sentinel_stays_in_bounds() {
    let buf = ScanBuffer::new("x");
    let mut cursor = buf.cursor();
    cursor.advance(); // on the sentinel
    assert_eq!(cursor.peek(), 0); // the peek pad byte
}

#[test]
fn multibyte_source_preserved() {
    let source = "π = 3.14";
    let buf = ScanBuffer::new(source);
    assert_eq!(buf.as_bytes(), source.as_bytes());
    assert_eq!(buf.len() as usize, source.len());
}

#[test]
fn interior_null_is_content_not_eof() {
    let buf = ScanBuffer::new("a\0b");
    assert_eq!(buf.len(), 3);
    let mut cursor = buf.cursor();
    cursor.advance(); // on the interior null
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}
