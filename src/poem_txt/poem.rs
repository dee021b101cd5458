use std::fmt;

use serde::{Deserialize, Serialize};

// フィールドの並びは出力順 (題名, 作者, 朝代, 本文, タグ)
// 切り出し順 (題名, 朝代, 作者, 本文, タグ) とは作者と朝代が入れ替わる
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poem {
    pub title: String,
    pub author: String,
    pub dynasty: String,
    pub content: String,
    pub tags: String,
}

impl Poem {
    // 出力順のフィールド
    pub fn render_fields(&self) -> [&str; 5] {
        [
            self.title.as_str(),
            self.author.as_str(),
            self.dynasty.as_str(),
            self.content.as_str(),
            self.tags.as_str(),
        ]
    }
}

impl fmt::Display for Poem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.render_fields().join("\t"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoemField {
    Title,   // 题名
    Dynasty, // 朝代
    Author,  // 作者
    Content, // 正文
    Tags,    // 分类标签
}

impl fmt::Display for PoemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Title => "title",
            Self::Dynasty => "dynasty",
            Self::Author => "author",
            Self::Content => "content",
            Self::Tags => "tags",
        };
        f.write_str(name)
    }
}
