//! Ties a session to the rounds played in it: samples words from the deck,
//! runs the round clock, and wires the trigger listener to the live round.

use crossterm::event::KeyEvent;
use std::time::Duration;

use crate::config::RuntimeSettings;
use crate::distractor::{DistractorSource, RandomDistractor};
use crate::error::Result;
use crate::round::{Judgment, SprintRound};
use crate::runtime::{Trigger, TriggerListener};
use crate::session::SessionTally;
use crate::timer::Countdown;
use crate::word::Deck;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Results,
}

pub type DistractorFactory = Box<dyn Fn() -> Box<dyn DistractorSource>>;

pub struct Game {
    settings: RuntimeSettings,
    deck: Deck,
    session: SessionTally,
    round: SprintRound,
    countdown: Option<Countdown>,
    listener: TriggerListener,
    state: GameState,
    last_judgment: Option<Judgment>,
    strike_message: Option<&'static str>,
    last_round_score: u32,
    best_round_score: u32,
    make_distractor: DistractorFactory,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("settings", &self.settings)
            .field("deck", &self.deck.name)
            .field("session", &self.session)
            .field("round", &self.round)
            .field("countdown", &self.countdown)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Game {
    pub fn new(settings: RuntimeSettings, deck: Deck) -> Result<Self> {
        Self::with_distractor(
            settings,
            deck,
            Box::new(|| Box::new(RandomDistractor::new()) as Box<dyn DistractorSource>),
        )
    }

    pub fn with_distractor(
        settings: RuntimeSettings,
        deck: Deck,
        make_distractor: DistractorFactory,
    ) -> Result<Self> {
        let words = deck.sample(settings.words_per_round, &mut rand::thread_rng());
        let round = SprintRound::new(words, make_distractor())?;

        let mut game = Self {
            countdown: settings.round_secs.map(Countdown::new),
            settings,
            deck,
            session: SessionTally::new(),
            round,
            listener: TriggerListener::new(),
            state: GameState::Playing,
            last_judgment: None,
            strike_message: None,
            last_round_score: 0,
            best_round_score: 0,
            make_distractor,
        };
        game.session.begin_round();
        game.listener.attach();
        Ok(game)
    }

    /// Route a key to the live round. Returns the judgment it produced, if any.
    pub fn on_key(&mut self, key: &KeyEvent) -> Option<Judgment> {
        let trigger = self.listener.dispatch(key)?;
        self.on_trigger(trigger)
    }

    pub fn on_trigger(&mut self, trigger: Trigger) -> Option<Judgment> {
        if self.state != GameState::Playing {
            return None;
        }

        let judgment = self.round.judge(trigger.claim(), &mut self.session)?;

        self.strike_message = self.round.strike_message(&mut rand::thread_rng());
        self.last_judgment = Some(judgment.clone());

        if self.round.is_terminal() {
            self.end_round();
        }
        Some(judgment)
    }

    pub fn on_tick(&mut self, elapsed: Duration) {
        if self.state != GameState::Playing {
            return;
        }

        let expired = match self.countdown.as_mut() {
            Some(countdown) => {
                countdown.on_tick(elapsed);
                countdown.has_expired()
            }
            None => false,
        };

        if expired {
            log::info!("round clock expired");
            self.finish_round();
        }
    }

    /// End the live round early and show results
    pub fn finish_round(&mut self) {
        if self.state != GameState::Playing {
            return;
        }
        self.round.force_finish(&mut self.session);
        self.end_round();
    }

    fn end_round(&mut self) {
        self.listener.detach();
        self.state = GameState::Results;
        self.last_round_score = self.round.score();
        self.best_round_score = self.best_round_score.max(self.round.score());
    }

    /// Start another round in the same session
    pub fn next_round(&mut self) -> Result<()> {
        let words = self
            .deck
            .sample(self.settings.words_per_round, &mut rand::thread_rng());
        self.round = SprintRound::new(words, (self.make_distractor)())?;
        self.countdown = self.settings.round_secs.map(Countdown::new);
        self.last_judgment = None;
        self.strike_message = None;
        self.session.begin_round();
        self.listener.attach();
        self.state = GameState::Playing;
        Ok(())
    }

    /// Drop the session tallies and start over
    pub fn new_session(&mut self) -> Result<()> {
        self.session.reset();
        self.best_round_score = 0;
        self.last_round_score = 0;
        self.next_round()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn round(&self) -> &SprintRound {
        &self.round
    }

    pub fn session(&self) -> &SessionTally {
        &self.session
    }

    pub fn settings(&self) -> &RuntimeSettings {
        &self.settings
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    pub fn listener(&self) -> &TriggerListener {
        &self.listener
    }

    pub fn last_judgment(&self) -> Option<&Judgment> {
        self.last_judgment.as_ref()
    }

    pub fn strike_message(&self) -> Option<&'static str> {
        self.strike_message
    }

    pub fn last_round_score(&self) -> u32 {
        self.last_round_score
    }

    pub fn best_round_score(&self) -> u32 {
        self.best_round_score
    }
}
