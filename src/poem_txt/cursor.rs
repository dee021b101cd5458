use crate::poem_txt::error::ChopError;

// buffer の先頭から delimiter までを切り出す
// 戻り値は (改行を取り除いた手前部分, delimiter より後ろ)
pub fn chop<'a>(buffer: &'a str, delimiter: &str) -> Result<(String, &'a str), ChopError> {
    if delimiter.is_empty() {
        return Err(ChopError::EmptyDelimiter);
    }

    if buffer.is_empty() {
        return Err(ChopError::BufferExhausted {
            delimiter: delimiter.to_owned(),
        });
    }

    let i = buffer
        .find(delimiter)
        .ok_or_else(|| ChopError::DelimiterNotFound {
            delimiter: delimiter.to_owned(),
            remaining: buffer.chars().count(),
        })?;

    // 改行は LF のみとは限らない
    let head: String = buffer[..i]
        .split('\n')
        .flat_map(|line| line.split('\r'))
        .collect();

    Ok((head, &buffer[i + delimiter.len()..]))
}

// 未消費部分を指すカーソル
// 1 回の解析ごとに作り，chop するたびに前へ進める
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Cursor { text, rest: text }
    }

    pub fn rest(&self) -> &'a str {
        self.rest
    }

    // 残りの文字数
    pub fn remaining(&self) -> usize {
        self.rest.chars().count()
    }

    // 消費したバイト数
    pub fn consumed(&self) -> usize {
        self.text.len() - self.rest.len()
    }

    // 残り全体は数えず，trailing_tolerance + 1 文字目の有無だけを見る
    pub fn is_exhausted(&self, trailing_tolerance: usize) -> bool {
        self.rest.chars().nth(trailing_tolerance).is_none()
    }

    // 失敗した場合はカーソルを動かさない
    pub fn chop(&mut self, delimiter: &str) -> Result<String, ChopError> {
        let (head, rest) = chop(self.rest, delimiter)?;
        self.rest = rest;
        Ok(head)
    }
}
