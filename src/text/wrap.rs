//! Greedy line wrapping by character count.

/// Wrap a paragraph into lines of at most `max_length` characters.
///
/// Whitespace is collapsed and trimmed before wrapping, then lines are filled
/// greedily: a word joins the current line when the result still fits,
/// otherwise the line is closed and the word starts the next one. A single
/// word longer than `max_length` is hard-split into `max_length`-sized chunks
/// rather than truncated, so no returned line ever exceeds the limit.
///
/// Empty or whitespace-only input yields an empty vector.
///
/// Lengths are measured in characters, not bytes; `max_length` of zero is
/// treated as one.
pub fn wrap_text(text: &str, max_length: usize) -> Vec<String> {
    let max_length = max_length.max(1);

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_len > 0 && current_len + 1 + word_len <= max_length {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
            continue;
        }

        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if word_len <= max_length {
            current.push_str(word);
            current_len = word_len;
        } else {
            // Hard-split the overlong word; the last chunk stays open so
            // following words can join it.
            let chars: Vec<char> = word.chars().collect();
            let mut chunks = chars.chunks(max_length).peekable();
            while let Some(chunk) = chunks.next() {
                let piece: String = chunk.iter().collect();
                if chunks.peek().is_some() {
                    lines.push(piece);
                } else {
                    current_len = chunk.len();
                    current = piece;
                }
            }
        }
    }

    if current_len > 0 {
        lines.push(current);
    }

    lines
}
