//! Share/copy chain for analysis results.
//!
//! Terminals have no native share surface, so the chain starts at the
//! system clipboard (arboard) and falls back to an OSC 52 escape written
//! through the terminal itself, which reaches the clipboard even over SSH.

use std::io::Write;

use base64::Engine;

/// Which tier of the copy chain succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Clipboard,
    Osc52,
}

/// Copy `text`, preferring the system clipboard, falling back to OSC 52.
pub fn copy_text(text: &str) -> Result<CopyOutcome, String> {
    match arboard::Clipboard::new().and_then(|mut c| c.set_text(text.to_string())) {
        Ok(()) => Ok(CopyOutcome::Clipboard),
        Err(e) => {
            tracing::warn!("clipboard unavailable ({}), trying OSC 52", e);
            osc52_copy(text)
                .map(|_| CopyOutcome::Osc52)
                .map_err(|e| e.to_string())
        }
    }
}

fn osc52_copy(text: &str) -> std::io::Result<()> {
    let mut out = std::io::stdout();
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()
}

/// OSC 52 clipboard-set sequence: base64 payload, `c` selection.
fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{}\x07", encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osc52_sequence_wraps_base64_payload() {
        let seq = osc52_sequence("hi");
        assert!(seq.starts_with("\x1b]52;c;"));
        assert!(seq.ends_with('\x07'));
        assert!(seq.contains("aGk="));
    }
}
