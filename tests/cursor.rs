use anyhow::Result;

use poem_tabize::poem_txt::{
    cursor::{chop, Cursor},
    error::ChopError,
};

#[test]
fn test_chop_removes_line_breaks_without_separator() -> Result<()> {
    let (head, rest) = chop("Hello\nWorld|tail", "|")?;
    assert_eq!(head, "HelloWorld");
    assert_eq!(rest, "tail");
    Ok(())
}

#[test]
fn test_chop_removes_crlf() -> Result<()> {
    let (head, rest) = chop("床前明月光，\r\n疑是地上霜。\r\n分类标签: 思乡", "分类标签: ")?;
    assert_eq!(head, "床前明月光，疑是地上霜。");
    assert_eq!(rest, "思乡");
    Ok(())
}

#[test]
fn test_chop_split_reconstructs_buffer() -> Result<()> {
    let cases = [
        ("静夜思[唐]李白\n", "["),
        ("静夜思[唐]李白\n", "]"),
        ("a\nb\nc\n分类标签: d\n", "分类标签: "),
        ("\n\nx\n", "\n"),
        ("[[", "["),
    ];

    for (buffer, delimiter) in cases {
        let (head, rest) = chop(buffer, delimiter)?;
        let i = buffer.find(delimiter).unwrap();

        assert_eq!(format!("{}{}{}", &buffer[..i], delimiter, rest), buffer);
        assert_eq!(head, buffer[..i].replace('\n', ""));
        assert!(!head.contains('\n') && !head.contains('\r'));
        assert!(rest.chars().count() < buffer.chars().count());
    }

    Ok(())
}

#[test]
fn test_chop_uses_first_occurrence() -> Result<()> {
    let (head, rest) = chop("a]b]c", "]")?;
    assert_eq!(head, "a");
    assert_eq!(rest, "b]c");
    Ok(())
}

#[test]
fn test_chop_delimiter_not_found() {
    assert_eq!(
        chop("T1A1\n", "]"),
        Err(ChopError::DelimiterNotFound {
            delimiter: "]".to_owned(),
            remaining: 5,
        })
    );
}

#[test]
fn test_chop_empty_buffer() {
    assert_eq!(
        chop("", "\n"),
        Err(ChopError::BufferExhausted {
            delimiter: "\n".to_owned(),
        })
    );
}

#[test]
fn test_chop_empty_delimiter() {
    assert_eq!(chop("abc", ""), Err(ChopError::EmptyDelimiter));
}

// "[T1]A1\n分类标签: C1\nTAG1\n..." を区切り文字の順に追う
#[test]
fn test_cursor_trace() -> Result<()> {
    let txt = "[T1]A1\n分类标签: C1\nTAG1\n[T2]A2\n分类标签: C2\nTAG2\n";
    let mut cursor = Cursor::new(txt);

    assert_eq!(cursor.chop("[")?, "");
    assert_eq!(cursor.chop("]")?, "T1");
    assert_eq!(cursor.chop("\n")?, "A1");
    assert_eq!(cursor.chop("分类标签: ")?, "");
    assert_eq!(cursor.chop("\n")?, "C1");
    assert_eq!(cursor.rest(), "TAG1\n[T2]A2\n分类标签: C2\nTAG2\n");

    assert_eq!(cursor.chop("[")?, "TAG1");
    assert_eq!(cursor.chop("]")?, "T2");
    assert_eq!(cursor.chop("\n")?, "A2");
    assert_eq!(cursor.chop("分类标签: ")?, "");
    assert_eq!(cursor.chop("\n")?, "C2");
    assert_eq!(cursor.rest(), "TAG2\n");
    assert_eq!(cursor.remaining(), 5);
    assert_eq!(cursor.consumed(), txt.len() - "TAG2\n".len());

    Ok(())
}

#[test]
fn test_cursor_unchanged_on_failure() -> Result<()> {
    let mut cursor = Cursor::new("abc]def");
    assert!(cursor.chop("[").is_err());
    assert_eq!(cursor.rest(), "abc]def");
    assert_eq!(cursor.consumed(), 0);

    assert_eq!(cursor.chop("]")?, "abc");
    assert_eq!(cursor.rest(), "def");
    Ok(())
}

#[test]
fn test_cursor_exhausted_counts_characters() {
    // 6 バイトだが 2 文字
    let cursor = Cursor::new("中文");
    assert!(cursor.is_exhausted(2));
    assert!(cursor.is_exhausted(3));
    assert!(!cursor.is_exhausted(1));
    assert!(!cursor.is_exhausted(0));

    assert!(Cursor::new("").is_exhausted(0));
}
