use rand::seq::SliceRandom;
use rand::Rng;

pub const BASE_POINTS: u32 = 20;
pub const BONUS_POINTS: u32 = 100;
/// Streak value that pays the bonus and unlocks the strike message
pub const BONUS_STREAK: u8 = 3;

pub const STRIKE_MESSAGES: &[&str] = &[
    "Отлично!",
    "Так держать!",
    "Супер!",
    "Великолепно!",
    "Молодец!",
    "Превосходно!",
];

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// Per-round score and streak
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u32,
    pub streak: u8,
    pub last_judgment_correct: bool,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            score: 0,
            streak: 0,
            last_judgment_correct: true,
        }
    }
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one judgment and return the points it earned
    pub fn apply(&mut self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::Correct => self.on_correct(),
            Outcome::Incorrect => {
                self.on_incorrect();
                0
            }
        }
    }

    fn on_correct(&mut self) -> u32 {
        let (delta, streak) = match self.streak {
            2 => (BONUS_POINTS, BONUS_STREAK),
            // the run after a bonus restarts at 1, not 0
            3 => (BASE_POINTS, 1),
            s => (BASE_POINTS, s + 1),
        };
        self.score += delta;
        self.streak = streak;
        self.last_judgment_correct = true;
        delta
    }

    fn on_incorrect(&mut self) {
        self.streak = 0;
        self.last_judgment_correct = false;
    }

    pub fn on_bonus_streak(&self) -> bool {
        self.streak == BONUS_STREAK
    }

    /// Random cheer shown while the bonus streak is held
    pub fn strike_message<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'static str> {
        if self.on_bonus_streak() {
            STRIKE_MESSAGES.choose(rng).copied()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_bonus_table() {
        let cases = [
            (0, Outcome::Correct, 20, 1),
            (1, Outcome::Correct, 20, 2),
            (2, Outcome::Correct, 100, 3),
            (3, Outcome::Correct, 20, 1),
            (0, Outcome::Incorrect, 0, 0),
            (1, Outcome::Incorrect, 0, 0),
            (2, Outcome::Incorrect, 0, 0),
            (3, Outcome::Incorrect, 0, 0),
        ];

        for (before, outcome, delta, after) in cases {
            let mut state = ScoreState {
                score: 40,
                streak: before,
                last_judgment_correct: true,
            };
            assert_eq!(state.apply(outcome), delta, "streak {before} {outcome:?}");
            assert_eq!(state.score, 40 + delta);
            assert_eq!(state.streak, after);
            assert_eq!(state.last_judgment_correct, outcome == Outcome::Correct);
        }
    }

    #[test]
    fn test_four_in_a_row() {
        let mut state = ScoreState::new();
        let deltas: Vec<u32> = (0..4).map(|_| state.apply(Outcome::Correct)).collect();
        assert_eq!(deltas, vec![20, 20, 100, 20]);
        assert_eq!(state.score, 160);
        assert_eq!(state.streak, 1);
    }

    #[test]
    fn test_score_never_drops() {
        let mut state = ScoreState::new();
        state.apply(Outcome::Correct);
        state.apply(Outcome::Incorrect);
        assert_eq!(state.score, 20);
        assert_eq!(state.streak, 0);
    }

    #[test]
    fn test_strike_message_only_on_bonus_streak() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = ScoreState::new();
        assert!(state.strike_message(&mut rng).is_none());

        state.streak = BONUS_STREAK;
        let msg = state.strike_message(&mut rng).unwrap();
        assert!(STRIKE_MESSAGES.contains(&msg));
    }
}
