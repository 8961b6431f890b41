use crate::word::WordEntry;

/// Walks a fixed word list one step at a time
#[derive(Debug, Clone)]
pub struct RoundSequencer {
    words: Vec<WordEntry>,
    position: usize,
}

impl RoundSequencer {
    pub fn new(words: Vec<WordEntry>) -> Self {
        Self { words, position: 0 }
    }

    /// Move to the next word. No bound check: callers advance once per judged word.
    pub fn advance(&mut self) {
        self.position += 1;
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.words.len()
    }

    /// The word at the current position, `None` once exhausted
    pub fn current(&self) -> Option<&WordEntry> {
        self.words.get(self.position)
    }

    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn remaining(&self) -> usize {
        self.words.len().saturating_sub(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> Vec<WordEntry> {
        vec![
            WordEntry::new("1", "cat", "кот"),
            WordEntry::new("2", "dog", "собака"),
        ]
    }

    #[test]
    fn test_starts_at_first_word() {
        let seq = RoundSequencer::new(words());
        assert_eq!(seq.position(), 0);
        assert_eq!(seq.current().unwrap().word, "cat");
        assert_eq!(seq.remaining(), 2);
        assert!(!seq.is_exhausted());
    }

    #[test]
    fn test_advance_walks_to_end() {
        let mut seq = RoundSequencer::new(words());
        seq.advance();
        assert_eq!(seq.position(), 1);
        assert_eq!(seq.current().unwrap().word, "dog");

        seq.advance();
        assert_eq!(seq.position(), seq.len());
        assert!(seq.is_exhausted());
        assert!(seq.current().is_none());
        assert_eq!(seq.remaining(), 0);
    }
}
