use crate::tokenizer::word_spans;
use crate::{Document, Passage};

/// Split every non-blank document into overlapping windows of `chunk_size`
/// word spans, advancing `max(chunk_size - overlap, 1)` spans per window.
///
/// Passage text is sliced from the original content, so inter-word spacing and
/// punctuation survive untouched. Output order is document order, then window order.
pub fn segment(documents: &[Document], chunk_size: usize, overlap: usize) -> Vec<Passage> {
    let chunk_size = chunk_size.max(1);
    let step = chunk_size.saturating_sub(overlap).max(1);

    let mut passages = Vec::new();
    for doc in documents {
        let content = doc.content.as_str();
        if content.trim().is_empty() {
            continue;
        }
        let spans = word_spans(content);
        if spans.is_empty() {
            continue;
        }
        let source = doc.source_label();

        let mut start_idx = 0;
        while start_idx < spans.len() {
            let end_idx = start_idx.saturating_add(chunk_size).min(spans.len());
            let start = spans[start_idx].0;
            let end = spans[end_idx - 1].1;
            assert!(start < end && end <= content.len(), "word span out of bounds: {start}..{end}");
            passages.push(Passage {
                text: content[start..end].to_string(),
                source: source.to_string(),
                start,
                end,
            });
            start_idx += step;
        }
    }
    passages
}
