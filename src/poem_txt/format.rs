use crate::poem_txt::{error::PoemTxtError, poem::PoemField};

pub const DEFAULT_LABEL: &str = "分类标签: ";

// 末尾に残ってよい文字数（末尾の空白・改行）
// 残りがこれ以下になったら解析を終える
pub const DEFAULT_TRAILING_TOLERANCE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemTxtFormat {
    pub label: String,
    pub trailing_tolerance: usize,
}

impl PoemTxtFormat {
    pub fn new(label: &str, trailing_tolerance: usize) -> Result<Self, PoemTxtError> {
        if label.is_empty() {
            return Err(PoemTxtError::InvalidFormat(
                "label must not be empty".to_owned(),
            ));
        }

        Ok(PoemTxtFormat {
            label: label.to_owned(),
            trailing_tolerance,
        })
    }

    // 1 首分の (フィールド, 区切り文字) を切り出し順に
    pub fn delimiters(&self) -> [(PoemField, &str); 5] {
        [
            (PoemField::Title, "["),
            (PoemField::Dynasty, "]"),
            (PoemField::Author, "\n"),
            (PoemField::Content, self.label.as_str()),
            (PoemField::Tags, "\n"),
        ]
    }
}

impl Default for PoemTxtFormat {
    fn default() -> Self {
        PoemTxtFormat {
            label: DEFAULT_LABEL.to_owned(),
            trailing_tolerance: DEFAULT_TRAILING_TOLERANCE,
        }
    }
}
