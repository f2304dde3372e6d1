use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor: Send + Sync {
    /// Normalised candidate, or `None` when it cannot be a dictionary word
    fn process(&self, raw: &str) -> Option<String> {
        let text: String = raw.trim().nfkc().collect::<String>().to_lowercase();

        if text.is_empty() {
            return None;
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
            return None;
        }

        Some(text)
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(DefaultPreprocessor.process("  Apple\n"), Some("apple".to_string()));
    }

    #[test]
    fn folds_fullwidth_letters() {
        assert_eq!(DefaultPreprocessor.process("ｗｏｒｄ"), Some("word".to_string()));
    }

    #[test]
    fn rejects_empty_and_non_alphabetic() {
        assert_eq!(DefaultPreprocessor.process("   "), None);
        assert_eq!(DefaultPreprocessor.process("r2d2"), None);
        assert_eq!(DefaultPreprocessor.process("two words"), None);
    }

    #[test]
    fn keeps_hyphenated_words() {
        assert_eq!(
            DefaultPreprocessor.process("well-known"),
            Some("well-known".to_string())
        );
    }
}
