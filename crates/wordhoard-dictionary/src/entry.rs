use serde::Deserialize;
use wordhoard_types::{Definition, DefinitionResult};

use crate::LookupError;
use crate::audio::audio_url;

const NO_DEFINITION: &str = "No definition available";

// Collegiate dictionary entry, only the fields we read
#[derive(Debug, Deserialize)]
struct CollegiateEntry {
    #[serde(default)]
    shortdef: Vec<String>,
    hwi: Option<HeadwordInfo>,
}

#[derive(Debug, Deserialize)]
struct HeadwordInfo {
    hw: Option<String>,
    #[serde(default)]
    prs: Vec<Pronunciation>,
}

#[derive(Debug, Deserialize)]
struct Pronunciation {
    mw: Option<String>,
    sound: Option<Sound>,
}

#[derive(Debug, Deserialize)]
struct Sound {
    audio: Option<String>,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl CollegiateEntry {
    fn into_result(self, audio_base_url: &str) -> DefinitionResult {
        let definition = non_empty(self.shortdef.first())
            .unwrap_or(NO_DEFINITION)
            .to_string();

        let hwi = self.hwi.as_ref();
        let first_pron = hwi.and_then(|h| h.prs.first());

        let pronunciation = non_empty(first_pron.and_then(|p| p.mw.as_ref()))
            .or_else(|| non_empty(hwi.and_then(|h| h.hw.as_ref())))
            .unwrap_or_default()
            .to_string();

        let audio_url = first_pron
            .and_then(|p| p.sound.as_ref())
            .and_then(|s| s.audio.as_deref())
            .and_then(|audio| audio_url(audio_base_url, audio));

        DefinitionResult {
            definition,
            pronunciation,
            audio_url,
        }
    }
}

/// Interpret a raw collegiate response body.
///
/// An empty array, a non-array body or a list of spelling suggestions
/// (strings instead of entries) means the word is not in the dictionary.
/// Only the first entry is used.
pub fn parse_definition(
    body: &serde_json::Value,
    audio_base_url: &str,
) -> Result<Definition, LookupError> {
    let Some(first) = body.as_array().and_then(|entries| entries.first()) else {
        return Ok(Definition::NotFound);
    };

    if first.is_string() {
        return Ok(Definition::NotFound);
    }

    let entry: CollegiateEntry = serde_json::from_value(first.clone())
        .map_err(|e| LookupError::ParseError(e.to_string()))?;

    Ok(Definition::Found(entry.into_result(audio_base_url)))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const BASE: &str = "https://media.merriam-webster.com/audio/prons";

    fn found(body: serde_json::Value) -> DefinitionResult {
        parse_definition(&body, BASE)
            .unwrap()
            .found()
            .expect("entry should be found")
    }

    #[test]
    fn full_entry() {
        let result = found(json!([{
            "meta": { "id": "paradigm" },
            "hwi": {
                "hw": "par*a*digm",
                "prs": [{ "mw": "ˈper-ə-ˌdīm", "sound": { "audio": "paradi01" } }]
            },
            "shortdef": ["example, pattern", "a philosophical framework"]
        }]));

        assert_eq!(result.definition, "example, pattern");
        assert_eq!(result.pronunciation, "ˈper-ə-ˌdīm");
        assert_eq!(
            result.audio_url.as_deref(),
            Some("https://media.merriam-webster.com/audio/prons/en/us/mp3/p/paradi01.mp3")
        );
    }

    #[test]
    fn missing_fields_use_fallbacks() {
        let result = found(json!([{ "hwi": { "hw": "shift" } }]));

        assert_eq!(result.definition, NO_DEFINITION);
        assert_eq!(result.pronunciation, "shift");
        assert_eq!(result.audio_url, None);
    }

    #[test]
    fn empty_strings_fall_through() {
        let result = found(json!([{
            "shortdef": [""],
            "hwi": { "hw": "", "prs": [{ "mw": "", "sound": { "audio": "" } }] }
        }]));

        assert_eq!(result.definition, NO_DEFINITION);
        assert_eq!(result.pronunciation, "");
        assert_eq!(result.audio_url, None);
    }

    #[test]
    fn bare_entry_has_empty_pronunciation() {
        let result = found(json!([{}]));

        assert_eq!(result.definition, NO_DEFINITION);
        assert_eq!(result.pronunciation, "");
    }

    #[test]
    fn suggestions_are_not_found() {
        let body = json!(["paradise", "paradigms"]);
        assert_eq!(parse_definition(&body, BASE).unwrap(), Definition::NotFound);
    }

    #[test]
    fn empty_or_non_array_is_not_found() {
        assert_eq!(parse_definition(&json!([]), BASE).unwrap(), Definition::NotFound);
        assert_eq!(parse_definition(&json!(null), BASE).unwrap(), Definition::NotFound);
        assert_eq!(
            parse_definition(&json!({ "error": "bad key" }), BASE).unwrap(),
            Definition::NotFound
        );
    }

    #[test]
    fn malformed_entry_is_parse_error() {
        let body = json!([{ "shortdef": "not a list" }]);
        assert!(matches!(
            parse_definition(&body, BASE),
            Err(LookupError::ParseError(_))
        ));
    }
}
