use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

use crate::word::WordEntry;

/// Which translation was put on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    True,
    Decoy,
}

/// The translation shown next to the current word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub translation: String,
    pub branch: Branch,
}

impl Presentation {
    pub fn truthful(word: &WordEntry) -> Self {
        Self {
            translation: word.translation.clone(),
            branch: Branch::True,
        }
    }

    pub fn decoy(decoy: &WordEntry) -> Self {
        Self {
            translation: decoy.translation.clone(),
            branch: Branch::Decoy,
        }
    }

    /// Judgments compare text, so a decoy sharing the true translation counts as true
    pub fn shows_true_translation(&self, word: &WordEntry) -> bool {
        self.translation == word.translation
    }
}

/// Decides what translation to show for each new word
pub trait DistractorSource {
    fn present(&mut self, words: &[WordEntry], current: &WordEntry) -> Presentation;
}

/// Coin flip between the true translation and a random other word's
#[derive(Debug, Clone)]
pub struct RandomDistractor<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomDistractor<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomDistractor<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomDistractor<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DistractorSource for RandomDistractor<R> {
    fn present(&mut self, words: &[WordEntry], current: &WordEntry) -> Presentation {
        let decoy = decoy_candidate(words, current, &mut self.rng);

        match (self.rng.gen_range(1..=2), decoy) {
            (2, Some(decoy)) => Presentation::decoy(decoy),
            _ => Presentation::truthful(current),
        }
    }
}

/// Shuffle the list, drop the current word, take the first survivor.
/// `None` when the current word is the only one.
pub fn decoy_candidate<'a, R: Rng + ?Sized>(
    words: &'a [WordEntry],
    current: &WordEntry,
    rng: &mut R,
) -> Option<&'a WordEntry> {
    let mut shuffled: Vec<&WordEntry> = words.iter().collect();
    shuffled.shuffle(rng);
    shuffled.into_iter().find(|w| w.id != current.id)
}

/// Plays back a fixed sequence of branches, then shows true translations.
/// Decoys are the first other word in list order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDistractor {
    script: VecDeque<Branch>,
}

impl ScriptedDistractor {
    pub fn new(script: impl IntoIterator<Item = Branch>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl DistractorSource for ScriptedDistractor {
    fn present(&mut self, words: &[WordEntry], current: &WordEntry) -> Presentation {
        match self.script.pop_front() {
            Some(Branch::Decoy) => words
                .iter()
                .find(|w| w.id != current.id)
                .map(Presentation::decoy)
                .unwrap_or_else(|| Presentation::truthful(current)),
            _ => Presentation::truthful(current),
        }
    }
}
