use thiserror::Error;

use crate::poem_txt::poem::PoemField;

// 区切り文字 1 つ分の切り出しの失敗
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChopError {
    #[error("delimiter {delimiter:?} not found in remaining {remaining} characters")]
    DelimiterNotFound { delimiter: String, remaining: usize },

    #[error("buffer exhausted before delimiter {delimiter:?}")]
    BufferExhausted { delimiter: String },

    #[error("delimiter must not be empty")]
    EmptyDelimiter,
}

// 文書全体の解析の失敗（部分的な結果は返さない）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoemTxtError {
    #[error("failed to extract {field} of poem #{index}")]
    Field {
        index: usize, // 0 始まり
        field: PoemField,
        #[source]
        source: ChopError,
    },

    #[error("invalid format: {0}")]
    InvalidFormat(String),
}
