use std::io;

use anyhow::{Context, Result};

use crate::poem_txt::poem::Poem;

// 1 首 1 行，タブ区切り，題名・作者・朝代・本文・タグの順
// 値はそのまま書き出す（クォートしない）
pub fn render_poems_tsv<W: io::Write>(poems: &[Poem], writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(writer);

    for (i, poem) in poems.iter().enumerate() {
        writer
            .write_record(poem.render_fields())
            .with_context(|| format!("Failed to write poem #{}: {:?}", i, poem.title))?;
    }

    writer.flush().context("Failed to flush")?;

    Ok(())
}

pub fn render_poems_tsv_string(poems: &[Poem]) -> Result<String> {
    let mut buffer = Vec::new();
    render_poems_tsv(poems, &mut buffer)?;
    String::from_utf8(buffer).context("Rendered text is not UTF-8")
}

pub fn render_poems_json(poems: &[Poem]) -> Result<String> {
    serde_json::to_string_pretty(poems).context("Failed to serialize poems")
}
