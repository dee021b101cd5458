use crate::poem_txt::{cursor::Cursor, error::PoemTxtError, format::PoemTxtFormat, poem::Poem};

// 文書全体を解析する
// 1 首でも失敗したら全体を失敗とする
pub fn assemble_poems(text: &str, format: &PoemTxtFormat) -> Result<Vec<Poem>, PoemTxtError> {
    Poems::new(text, format).collect()
}

// 1 首ずつ切り出すイテレータ
// エラーを返した後は None を返し続ける
pub struct Poems<'a, 'f> {
    cursor: Cursor<'a>,
    format: &'f PoemTxtFormat,
    index: usize,
    failed: bool,
}

impl<'a, 'f> Poems<'a, 'f> {
    pub fn new(text: &'a str, format: &'f PoemTxtFormat) -> Self {
        Poems {
            cursor: Cursor::new(text),
            format,
            index: 0,
            failed: false,
        }
    }

    // 消費したバイト数（進捗表示用）
    pub fn consumed(&self) -> usize {
        self.cursor.consumed()
    }

    pub fn rest(&self) -> &'a str {
        self.cursor.rest()
    }

    fn next_poem(&mut self) -> Result<Poem, PoemTxtError> {
        let index = self.index;
        let format = self.format;

        let mut values: [String; 5] = Default::default();
        for (value, (field, delimiter)) in values.iter_mut().zip(format.delimiters()) {
            *value = self
                .cursor
                .chop(delimiter)
                .map_err(|source| PoemTxtError::Field {
                    index,
                    field,
                    source,
                })?;
        }

        let [title, dynasty, author, content, tags] = values;

        Ok(Poem {
            title,
            author,
            dynasty,
            content,
            tags,
        })
    }
}

impl Iterator for Poems<'_, '_> {
    type Item = Result<Poem, PoemTxtError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor.is_exhausted(self.format.trailing_tolerance) {
            return None;
        }

        match self.next_poem() {
            Ok(poem) => {
                self.index += 1;
                Some(Ok(poem))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}
