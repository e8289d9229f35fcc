use std::io::Write;

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use wordhoard_types::VocabularyRecord;

use crate::ExportError;

pub const HEADERS: [&str; 5] = [
    "Word",
    "Definition",
    "Pronunciation",
    "Example Sentence",
    "Date Added",
];

/// `vocabulary_<YYYY-MM-DD>.csv`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("vocabulary_{}.csv", date.format("%Y-%m-%d"))
}

/// Write one quoted row per record, in the order given
pub fn export_csv<W: Write>(records: &[VocabularyRecord], writer: W) -> Result<(), ExportError> {
    let mut csv = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    csv.write_record(HEADERS)?;

    for record in records {
        let date_added = record.date_added.format("%Y-%m-%d").to_string();
        csv.write_record([
            record.word.as_str(),
            record.definition.as_str(),
            record.pronunciation.as_str(),
            record.example_sentence.as_str(),
            date_added.as_str(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}
