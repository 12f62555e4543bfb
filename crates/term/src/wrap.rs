//! Word wrapping for card faces.
//!
//! Lines are returned as slices of the input, so wrapping a card costs no
//! string allocation. Words longer than the width are split hard.

/// Wrap `text` into lines of at most `width` characters.
pub fn wrap_text(text: &str, width: usize) -> Vec<&str> {
    let mut lines = Vec::new();
    wrap_into(text, width, &mut lines);
    lines
}

/// Like [`wrap_text`], reusing `out` (it is cleared first).
pub fn wrap_into<'a>(text: &'a str, width: usize, out: &mut Vec<&'a str>) {
    out.clear();
    if width == 0 {
        return;
    }

    // Current line as a byte range of `text` plus its length in chars.
    let mut line: Option<(usize, usize)> = None;
    let mut line_chars = 0usize;

    for word in text.split_whitespace() {
        let mut start = word.as_ptr() as usize - text.as_ptr() as usize;
        let mut word = word;
        let mut word_chars = word.chars().count();

        if let Some((line_start, line_end)) = line {
            if line_chars + 1 + word_chars <= width {
                line = Some((line_start, start + word.len()));
                line_chars += 1 + word_chars;
                continue;
            }
            out.push(&text[line_start..line_end]);
            line = None;
            line_chars = 0;
        }

        while word_chars > width {
            let split = word
                .char_indices()
                .nth(width)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            out.push(&word[..split]);
            word = &word[split..];
            start += split;
            word_chars -= width;
        }

        if word_chars > 0 {
            line = Some((start, start + word.len()));
            line_chars = word_chars;
        }
    }

    if let Some((line_start, line_end)) = line {
        out.push(&text[line_start..line_end]);
    }
}
