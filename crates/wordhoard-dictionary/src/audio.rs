const LANGUAGE: &str = "en";
const REGION: &str = "us";
const FORMAT: &str = "mp3";

/// CDN subdirectory for an audio file name
fn subdirectory(audio: &str) -> &str {
    if audio.starts_with("bix") {
        "bix"
    } else if audio.starts_with("gg") {
        "gg"
    } else if audio.starts_with(|c: char| c.is_ascii_digit()) {
        "number"
    } else {
        let end = audio.chars().next().map_or(0, char::len_utf8);
        &audio[..end]
    }
}

/// Build the pronunciation URL for an audio file name.
///
/// Returns `None` for an empty name.
pub fn audio_url(base_url: &str, audio: &str) -> Option<String> {
    if audio.is_empty() {
        return None;
    }

    Some(format!(
        "{}/{LANGUAGE}/{REGION}/{FORMAT}/{}/{audio}.{FORMAT}",
        base_url.trim_end_matches('/'),
        subdirectory(audio),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://media.merriam-webster.com/audio/prons";

    #[test]
    fn subdirectory_precedence() {
        assert_eq!(subdirectory("bixapple"), "bix");
        assert_eq!(subdirectory("ggwhizz"), "gg");
        assert_eq!(subdirectory("3d000001"), "number");
        assert_eq!(subdirectory("serend01"), "s");
        assert_eq!(subdirectory("g0001"), "g");
        assert_eq!(subdirectory("bi000001"), "b");
    }

    #[test]
    fn builds_full_url() {
        assert_eq!(
            audio_url(BASE, "paradi01").as_deref(),
            Some("https://media.merriam-webster.com/audio/prons/en/us/mp3/p/paradi01.mp3")
        );
        assert_eq!(
            audio_url("https://cdn.test/", "bixdis01").as_deref(),
            Some("https://cdn.test/en/us/mp3/bix/bixdis01.mp3")
        );
    }

    #[test]
    fn empty_name_has_no_url() {
        assert_eq!(audio_url(BASE, ""), None);
    }
}
