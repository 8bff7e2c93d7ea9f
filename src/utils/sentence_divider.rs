const SENTENCE_ENDINGS: &[char] = &['.', '!', '?', '।', '。', '！', '？'];

/// Split text into sentences, keeping the closing punctuation with each sentence
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        current.push(ch);
        if SENTENCE_ENDINGS.contains(&ch) {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }

    let rest = current.trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }
    sentences
}

/// Pack text into chunks of at most `max_chars` characters.
///
/// Sentences are kept whole where they fit, long sentences are broken on
/// whitespace, and a single word longer than `max_chars` is cut.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();

    for sentence in split_sentences(text) {
        for word in sentence.split_whitespace() {
            push_word(&mut chunks, &mut current, word, max_chars);
        }
        // End chunks on a sentence boundary once they are more than half full
        if current.chars().count() * 2 > max_chars {
            chunks.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn push_word(chunks: &mut Vec<String>, current: &mut String, word: &str, max_chars: usize) {
    let word_len = word.chars().count();
    let current_len = current.chars().count();
    let separator = usize::from(!current.is_empty());

    if current_len + separator + word_len <= max_chars {
        if separator == 1 {
            current.push(' ');
        }
        current.push_str(word);
        return;
    }

    if !current.is_empty() {
        chunks.push(std::mem::take(current));
    }

    if word_len <= max_chars {
        current.push_str(word);
        return;
    }

    let chars: Vec<char> = word.chars().collect();
    let mut pieces = chars.chunks(max_chars).map(|c| c.iter().collect::<String>()).peekable();
    while let Some(piece) = pieces.next() {
        if pieces.peek().is_some() {
            chunks.push(piece);
        } else {
            *current = piece;
        }
    }
}
