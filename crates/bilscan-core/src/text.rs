//! Text normalization helpers for Turkish OCR output.

/// Lowercase text using Turkish casing rules.
///
/// The dotted capital `İ` maps to a plain `i` and the dotless capital `I`
/// maps to `ı`, so that keyword and label matching works on uppercase OCR
/// output (`İSKİ` becomes `iski`, `TUTARI` becomes `tutarı`). The standard
/// Unicode lowercase mapping would instead produce `i` plus a combining
/// dot above, which never matches a plain-`i` keyword.
pub fn turkish_lowercase(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            'İ' => out.push('i'),
            'I' => out.push('ı'),
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Truncate a string to at most `max` characters, respecting char boundaries.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// OCR text prepared for matching.
///
/// Holds the original text (capitalization preserved for display values)
/// alongside a Turkish-lowercased copy that all patterns run against.
/// Line structure is identical between the two views.
#[derive(Debug, Clone)]
pub struct NormalizedText {
    original: String,
    lowered: String,
}

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        Self {
            original: raw.to_string(),
            lowered: turkish_lowercase(raw),
        }
    }

    /// Original-case text.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Turkish-lowercased text used for matching.
    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    /// Find the original-case line whose lowered form contains `needle`.
    ///
    /// `needle` must itself be lowered text (typically a regex match taken
    /// from [`Self::lowered`]).
    pub fn line_containing(&self, needle: &str) -> Option<&str> {
        self.original
            .lines()
            .zip(self.lowered.lines())
            .find(|(_, lowered)| lowered.contains(needle))
            .map(|(original, _)| original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turkish_lowercase_dotted_capital() {
        assert_eq!(turkish_lowercase("İSKİ"), "iski");
        assert_eq!(turkish_lowercase("İGDAŞ"), "igdaş");
    }

    #[test]
    fn test_turkish_lowercase_dotless_capital() {
        assert_eq!(turkish_lowercase("TAHAKKUK TUTARI"), "tahakkuk tutarı");
        assert_eq!(turkish_lowercase("SON ÖDEME TARİHİ"), "son ödeme tarihi");
    }

    #[test]
    fn test_turkish_lowercase_passthrough() {
        assert_eq!(turkish_lowercase("Enerjisa 350,75 TL"), "enerjisa 350,75 tl");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 4), "abcd");
        assert_eq!(truncate_chars("kısa", 50), "kısa");
    }

    #[test]
    fn test_line_containing_maps_back_to_original_case() {
        let text = NormalizedText::new("ENERJİSA\nSon Ödeme Tarihi: 12.06.2025");
        assert_eq!(text.line_containing("enerjisa"), Some("ENERJİSA"));
        assert_eq!(
            text.line_containing("12.06.2025"),
            Some("Son Ödeme Tarihi: 12.06.2025")
        );
        assert_eq!(text.line_containing("yok"), None);
    }
}
