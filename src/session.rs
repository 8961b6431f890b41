use crate::word::WordEntry;

/// Tallies that outlive a single round and feed the results screen.
///
/// Passed explicitly to the round on every mutation; only the live round
/// writes to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionTally {
    correct_words: Vec<WordEntry>,
    incorrect_words: Vec<WordEntry>,
    current_streak: usize,
    best_streak: usize,
    round_finished: bool,
    rounds_played: usize,
}

impl SessionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything and start a new session
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clear the finished flag for the next round; buckets and best streak carry over
    pub fn begin_round(&mut self) {
        self.round_finished = false;
        self.current_streak = 0;
    }

    pub fn record_correct(&mut self, word: WordEntry) {
        self.current_streak += 1;
        self.correct_words.push(word);
    }

    pub fn record_incorrect(&mut self, word: WordEntry) {
        self.fold_streak();
        self.incorrect_words.push(word);
    }

    /// Keep the current run if it beats the best, then restart it
    pub fn fold_streak(&mut self) {
        if self.current_streak > self.best_streak {
            self.best_streak = self.current_streak;
        }
        self.current_streak = 0;
    }

    /// Returns false if the flag was already set for this round
    pub fn mark_round_finished(&mut self) -> bool {
        if self.round_finished {
            return false;
        }
        self.round_finished = true;
        self.rounds_played += 1;
        true
    }

    pub fn correct_words(&self) -> &[WordEntry] {
        &self.correct_words
    }

    pub fn incorrect_words(&self) -> &[WordEntry] {
        &self.incorrect_words
    }

    pub fn current_streak(&self) -> usize {
        self.current_streak
    }

    pub fn best_streak(&self) -> usize {
        self.best_streak
    }

    pub fn is_round_finished(&self) -> bool {
        self.round_finished
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    pub fn total_answers(&self) -> usize {
        self.correct_words.len() + self.incorrect_words.len()
    }

    /// Percentage of correct answers, rounded; 0 when nothing was answered
    pub fn accuracy(&self) -> f64 {
        match self.total_answers() {
            0 => 0.0,
            total => ((self.correct_words.len() as f64 / total as f64) * 100.0).round(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(id: &str) -> WordEntry {
        WordEntry::new(id, format!("w{id}"), format!("t{id}"))
    }

    #[test]
    fn test_streak_folds_on_incorrect() {
        let mut tally = SessionTally::new();
        tally.record_correct(word("1"));
        tally.record_correct(word("2"));
        assert_eq!(tally.current_streak(), 2);

        tally.record_incorrect(word("3"));
        assert_eq!(tally.current_streak(), 0);
        assert_eq!(tally.best_streak(), 2);

        tally.record_correct(word("4"));
        tally.fold_streak();
        assert_eq!(tally.best_streak(), 2);
    }

    #[test]
    fn test_round_finished_flag_set_once() {
        let mut tally = SessionTally::new();
        assert!(tally.mark_round_finished());
        assert!(!tally.mark_round_finished());
        assert_eq!(tally.rounds_played(), 1);

        tally.begin_round();
        assert!(!tally.is_round_finished());
        assert!(tally.mark_round_finished());
        assert_eq!(tally.rounds_played(), 2);
    }

    #[test]
    fn test_buckets_survive_new_round() {
        let mut tally = SessionTally::new();
        tally.record_correct(word("1"));
        tally.record_incorrect(word("2"));
        tally.mark_round_finished();

        tally.begin_round();
        assert_eq!(tally.correct_words().len(), 1);
        assert_eq!(tally.incorrect_words().len(), 1);
        assert_eq!(tally.best_streak(), 1);

        tally.reset();
        assert_eq!(tally, SessionTally::default());
    }

    #[test]
    fn test_accuracy() {
        let mut tally = SessionTally::new();
        assert_eq!(tally.accuracy(), 0.0);
        tally.record_correct(word("1"));
        tally.record_correct(word("2"));
        tally.record_incorrect(word("3"));
        assert_eq!(tally.accuracy(), 67.0);
    }
}
