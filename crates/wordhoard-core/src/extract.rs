use indexmap::IndexMap;

use crate::language::LanguageProcessor;

/// Base form -> first sentence containing it, in first-sighting order
pub type Extraction = IndexMap<String, String>;

/// Bind every candidate base form in `text` to the first sentence it appears in.
///
/// Pure: no I/O, no allocation beyond the result.
pub fn extract(processor: &dyn LanguageProcessor, text: &str) -> Extraction {
    let mut entries = Extraction::new();

    for sentence in processor.segment(text) {
        for token in processor.tokenize(sentence) {
            if !processor.is_candidate(&token.text) {
                continue;
            }

            let base = processor.lemmatize(&token.text);
            entries
                .entry(base)
                .or_insert_with(|| sentence.trim().to_string());
        }
    }

    entries
}
