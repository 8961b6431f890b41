//! The sprint round state machine.
//!
//! A round walks a fixed word list. For each word the distractor picks what
//! translation to show, the player claims it matches or not, the score engine
//! books the verdict into the session tally, and the sequencer moves on. All of
//! that happens inside one `judge_*` call, so callers never observe a judged
//! word that has not been advanced past.

use rand::Rng;

use crate::distractor::{DistractorSource, Presentation, RandomDistractor};
use crate::error::{Result, SprintError};
use crate::scoring::{Outcome, ScoreState};
use crate::sequencer::RoundSequencer;
use crate::session::SessionTally;
use crate::word::WordEntry;

/// What the player asserted about the shown translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// The shown translation belongs to the word
    Match,
    /// The shown translation belongs to some other word
    Mismatch,
}

/// Result of one processed judgment
#[derive(Debug, Clone, PartialEq)]
pub struct Judgment {
    pub word: WordEntry,
    pub shown_translation: String,
    pub claim: Claim,
    pub outcome: Outcome,
    pub points: u32,
    pub score: u32,
    pub streak: u8,
    /// This judgment consumed the last word
    pub finished_round: bool,
}

pub struct SprintRound {
    sequencer: RoundSequencer,
    distractor: Box<dyn DistractorSource>,
    presentation: Option<Presentation>,
    score: ScoreState,
    finished: bool,
    /// The session has been told this round started
    begun: bool,
}

impl std::fmt::Debug for SprintRound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SprintRound")
            .field("sequencer", &self.sequencer)
            .field("presentation", &self.presentation)
            .field("score", &self.score)
            .field("finished", &self.finished)
            .field("begun", &self.begun)
            .finish_non_exhaustive()
    }
}

impl SprintRound {
    /// Start a round and present the first word
    pub fn new(words: Vec<WordEntry>, distractor: Box<dyn DistractorSource>) -> Result<Self> {
        if words.is_empty() {
            return Err(SprintError::EmptyWordSource);
        }

        let mut round = Self {
            sequencer: RoundSequencer::new(words),
            distractor,
            presentation: None,
            score: ScoreState::new(),
            finished: false,
            begun: false,
        };
        round.present_current();
        log::debug!("round started with {} words", round.sequencer.len());

        Ok(round)
    }

    pub fn with_random_distractor(words: Vec<WordEntry>) -> Result<Self> {
        Self::new(words, Box::new(RandomDistractor::new()))
    }

    pub fn judge_as_match(&mut self, session: &mut SessionTally) -> Option<Judgment> {
        self.judge(Claim::Match, session)
    }

    pub fn judge_as_mismatch(&mut self, session: &mut SessionTally) -> Option<Judgment> {
        self.judge(Claim::Mismatch, session)
    }

    /// Classify, score, book into the session, then advance. No-op once terminal.
    pub fn judge(&mut self, claim: Claim, session: &mut SessionTally) -> Option<Judgment> {
        if self.is_terminal() {
            return None;
        }
        self.begin(session);

        let word = self.sequencer.current()?.clone();
        let shown = self.presentation.take()?;

        let shown_is_true = shown.shows_true_translation(&word);
        let outcome = match (claim, shown_is_true) {
            (Claim::Match, true) | (Claim::Mismatch, false) => Outcome::Correct,
            _ => Outcome::Incorrect,
        };

        let points = self.score.apply(outcome);
        match outcome {
            Outcome::Correct => session.record_correct(word.clone()),
            Outcome::Incorrect => session.record_incorrect(word.clone()),
        }

        log::debug!(
            "judged '{}' as {:?} against '{}': {:?} (+{})",
            word.word,
            claim,
            shown.translation,
            outcome,
            points
        );

        self.sequencer.advance();
        let finished_round = if self.sequencer.is_exhausted() {
            self.finish(session)
        } else {
            self.present_current();
            false
        };

        Some(Judgment {
            word,
            shown_translation: shown.translation,
            claim,
            outcome,
            points,
            score: self.score.score,
            streak: self.score.streak,
            finished_round,
        })
    }

    /// End the round without a judgment, e.g. when the clock runs out.
    /// Returns false if the round had already finished.
    pub fn force_finish(&mut self, session: &mut SessionTally) -> bool {
        self.finish(session)
    }

    fn finish(&mut self, session: &mut SessionTally) -> bool {
        if self.finished {
            return false;
        }
        self.begin(session);
        self.finished = true;
        self.presentation = None;

        session.fold_streak();
        let counted = session.mark_round_finished();
        debug_assert!(counted, "session already closed this round");

        log::info!(
            "round finished at {}/{} with score {}",
            self.sequencer.position(),
            self.sequencer.len(),
            self.score.score
        );
        true
    }

    /// Open this round on the session the first time it touches it
    fn begin(&mut self, session: &mut SessionTally) {
        if !self.begun {
            self.begun = true;
            session.begin_round();
        }
    }

    fn present_current(&mut self) {
        let sequencer = &self.sequencer;
        let distractor = &mut self.distractor;
        self.presentation = sequencer
            .current()
            .map(|word| distractor.present(sequencer.words(), word));
    }

    pub fn is_terminal(&self) -> bool {
        self.finished || self.sequencer.is_exhausted()
    }

    pub fn current_word(&self) -> Option<&WordEntry> {
        if self.finished {
            return None;
        }
        self.sequencer.current()
    }

    pub fn displayed_translation(&self) -> Option<&str> {
        self.presentation.as_ref().map(|p| p.translation.as_str())
    }

    pub fn score(&self) -> u32 {
        self.score.score
    }

    pub fn streak(&self) -> u8 {
        self.score.streak
    }

    pub fn last_judgment_correct(&self) -> bool {
        self.score.last_judgment_correct
    }

    pub fn position(&self) -> usize {
        self.sequencer.position()
    }

    pub fn len(&self) -> usize {
        self.sequencer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequencer.is_empty()
    }

    pub fn strike_message<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'static str> {
        self.score.strike_message(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distractor::{Branch, ScriptedDistractor};
    use assert_matches::assert_matches;

    fn cat_dog() -> Vec<WordEntry> {
        vec![
            WordEntry::new("1", "cat", "кот"),
            WordEntry::new("2", "dog", "собака"),
        ]
    }

    fn scripted(words: Vec<WordEntry>, script: &[Branch]) -> SprintRound {
        SprintRound::new(words, Box::new(ScriptedDistractor::new(script.to_vec()))).unwrap()
    }

    #[test]
    fn test_empty_word_source_rejected() {
        let err = SprintRound::with_random_distractor(vec![]).unwrap_err();
        assert_matches!(err, SprintError::EmptyWordSource);
    }

    #[test]
    fn test_first_word_presented_on_start() {
        let round = scripted(cat_dog(), &[Branch::True]);
        assert_eq!(round.current_word().unwrap().word, "cat");
        assert_eq!(round.displayed_translation(), Some("кот"));
        assert_eq!(round.position(), 0);
        assert!(!round.is_terminal());
    }

    #[test]
    fn test_match_on_true_translation() {
        let mut session = SessionTally::new();
        let mut round = scripted(cat_dog(), &[Branch::True]);

        let judgment = round.judge_as_match(&mut session).unwrap();

        assert_eq!(judgment.outcome, Outcome::Correct);
        assert_eq!(round.score(), 20);
        assert_eq!(round.streak(), 1);
        assert_eq!(session.correct_words(), &cat_dog()[..1]);
        assert_eq!(round.position(), 1);
        assert_eq!(round.current_word().unwrap().word, "dog");
    }

    #[test]
    fn test_mismatch_on_decoy_is_correct() {
        let mut session = SessionTally::new();
        let mut round = scripted(cat_dog(), &[Branch::Decoy]);
        assert_eq!(round.displayed_translation(), Some("собака"));

        let judgment = round.judge_as_mismatch(&mut session).unwrap();

        assert_eq!(judgment.outcome, Outcome::Correct);
        assert_eq!(judgment.shown_translation, "собака");
        assert_eq!(round.score(), 20);
        assert_eq!(round.streak(), 1);
        assert_eq!(session.correct_words().len(), 1);
    }

    #[test]
    fn test_match_on_decoy_is_incorrect() {
        let mut session = SessionTally::new();
        let mut round = scripted(cat_dog(), &[Branch::Decoy]);

        let judgment = round.judge_as_match(&mut session).unwrap();

        assert_eq!(judgment.outcome, Outcome::Incorrect);
        assert_eq!(round.score(), 0);
        assert_eq!(round.streak(), 0);
        assert!(!round.last_judgment_correct());
        assert_eq!(session.incorrect_words(), &cat_dog()[..1]);
        assert!(session.correct_words().is_empty());
    }

    #[test]
    fn test_mismatch_on_true_translation_is_incorrect() {
        let mut session = SessionTally::new();
        let mut round = scripted(cat_dog(), &[Branch::True]);

        let judgment = round.judge_as_mismatch(&mut session).unwrap();
        assert_eq!(judgment.outcome, Outcome::Incorrect);
        assert_eq!(session.incorrect_words().len(), 1);
    }

    #[test]
    fn test_last_judgment_finishes_round_once() {
        let mut session = SessionTally::new();
        let mut round = scripted(cat_dog(), &[Branch::True, Branch::True]);

        assert!(!round.judge_as_match(&mut session).unwrap().finished_round);
        assert!(round.judge_as_match(&mut session).unwrap().finished_round);

        assert!(round.is_terminal());
        assert_eq!(round.position(), round.len());
        assert!(round.current_word().is_none());
        assert!(round.displayed_translation().is_none());
        assert!(session.is_round_finished());
        assert_eq!(session.rounds_played(), 1);
        assert_eq!(session.best_streak(), 2);
        assert_eq!(session.current_streak(), 0);

        // late triggers and timer expiry are no-ops
        assert!(round.judge_as_match(&mut session).is_none());
        assert!(round.judge_as_mismatch(&mut session).is_none());
        assert!(!round.force_finish(&mut session));
        assert_eq!(round.position(), 2);
        assert_eq!(session.total_answers(), 2);
        assert_eq!(session.rounds_played(), 1);
    }

    #[test]
    fn test_force_finish_mid_round() {
        let mut session = SessionTally::new();
        let mut round = scripted(cat_dog(), &[]);
        round.judge_as_match(&mut session);

        assert!(round.force_finish(&mut session));
        assert!(round.is_terminal());
        assert!(round.current_word().is_none());
        assert!(round.judge_as_match(&mut session).is_none());
        assert_eq!(round.position(), 1);
        assert_eq!(session.best_streak(), 1);
        assert!(session.is_round_finished());
        assert!(!round.force_finish(&mut session));
    }

    #[test]
    fn test_back_to_back_rounds_share_session() {
        let mut session = SessionTally::new();

        let mut first = scripted(cat_dog(), &[]);
        first.judge_as_match(&mut session);
        first.judge_as_match(&mut session);
        assert!(session.is_round_finished());
        assert_eq!(session.rounds_played(), 1);

        let mut second = scripted(cat_dog(), &[]);
        second.judge_as_match(&mut session);
        assert!(!session.is_round_finished());
        assert_eq!(session.current_streak(), 1);

        second.judge_as_match(&mut session);
        assert!(session.is_round_finished());
        assert_eq!(session.rounds_played(), 2);
        assert_eq!(session.best_streak(), 2);

        let mut timed_out = scripted(cat_dog(), &[]);
        assert!(timed_out.force_finish(&mut session));
        assert_eq!(session.rounds_played(), 3);
        assert_eq!(session.total_answers(), 4);
    }

    #[test]
    fn test_streak_bonus_cadence() {
        let words: Vec<WordEntry> = (1..=5)
            .map(|i| WordEntry::new(i.to_string(), format!("w{i}"), format!("t{i}")))
            .collect();
        let mut session = SessionTally::new();
        let mut round = scripted(words, &[]);

        let mut scores = vec![];
        let mut streaks = vec![];
        for _ in 0..4 {
            let j = round.judge_as_match(&mut session).unwrap();
            scores.push(j.points);
            streaks.push(j.streak);
        }

        assert_eq!(scores, vec![20, 20, 100, 20]);
        assert_eq!(streaks, vec![1, 2, 3, 1]);
        assert_eq!(round.score(), 160);
        assert_eq!(session.current_streak(), 4);
    }

    #[test]
    fn test_single_word_round() {
        let mut session = SessionTally::new();
        let words = vec![WordEntry::new("1", "cat", "кот")];
        let mut round = scripted(words, &[Branch::Decoy]);

        assert_eq!(round.displayed_translation(), Some("кот"));
        let judgment = round.judge_as_match(&mut session).unwrap();
        assert_eq!(judgment.outcome, Outcome::Correct);
        assert!(judgment.finished_round);
    }
}
