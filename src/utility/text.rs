use anyhow::{ensure, Context, Result};
use encoding_rs::Encoding;

pub const DEFAULT_ENCODING: &str = "utf-8";

// BOM があればそちらを優先する
pub fn decode_text(bytes: &[u8], encoding_label: &str) -> Result<String> {
    let encoding = Encoding::for_label(encoding_label.as_bytes())
        .with_context(|| format!("Unknown encoding: {}", encoding_label))?;

    let (text, used, had_errors) = encoding.decode(bytes);
    ensure!(!had_errors, "Malformed {} text", used.name());

    Ok(text.into_owned())
}
