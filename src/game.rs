//! Turn resolution for the memory board, plus the yew reducer that drives it.

use crate::config::GameConfig;
use crate::model::{Card, Pick, SelectionBuffer, build_deck, fisher_yates};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::rc::Rc;
use yew::Reducible;

pub const WIN_MESSAGE: &str = "You Win!";

/// A pending flip-back for a mismatched pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlipBack {
    pub positions: (usize, usize),
    /// Game generation the mismatch happened in.
    pub generation: u64,
    /// Turn number, so two mismatches on the same cards stay distinct.
    pub turn: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickOutcome {
    /// Nothing changed.
    Ignored,
    /// First card of a turn revealed.
    First,
    Matched,
    /// Final pair matched; input is now locked.
    Won,
    /// Caller must apply the flip-back after the configured delay.
    Mismatched(FlipBack),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cards: Vec<Card>,
    selection: SelectionBuffer,
    turns: u32,
    generation: u64,
}

impl Board {
    /// Builds a deck from the configured identities and shuffles it.
    pub fn new<R: rand::Rng + ?Sized>(identities: &[String], rng: &mut R) -> Self {
        let mut board = Self {
            cards: build_deck(identities),
            selection: SelectionBuffer::default(),
            turns: 0,
            generation: 0,
        };
        board.reset(rng);
        board
    }

    /// Shuffles the deck and starts a fresh game.
    pub fn reset<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        fisher_yates(&mut self.cards, rng);
        for (position, card) in self.cards.iter_mut().enumerate() {
            card.position = position;
            card.visible = false;
            card.matched = false;
            card.revealed_turn = 0;
        }
        self.selection.clear();
        self.turns = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn handle_pick(&mut self, position: usize) -> PickOutcome {
        if self.is_locked() {
            return PickOutcome::Ignored;
        }
        let Some(card) = self.cards.get_mut(position) else {
            return PickOutcome::Ignored;
        };
        if card.matched {
            return PickOutcome::Ignored;
        }
        card.visible = true;
        card.revealed_turn = self.turns.saturating_add(1);
        let pick = Pick {
            position,
            identity: card.identity.clone(),
        };

        if self.selection.first() == Some(&pick) {
            return PickOutcome::Ignored;
        }
        let Some((first, second)) = self.selection.push(pick) else {
            return PickOutcome::First;
        };

        self.turns = self.turns.saturating_add(1);
        if first.identity != second.identity {
            return PickOutcome::Mismatched(FlipBack {
                positions: (first.position, second.position),
                generation: self.generation,
                turn: self.turns,
            });
        }

        for p in [first.position, second.position] {
            self.cards[p].matched = true;
            self.cards[p].visible = true;
        }
        if self.remaining_pairs() == 0 {
            PickOutcome::Won
        } else {
            PickOutcome::Matched
        }
    }

    /// Turns a mismatched pair face-down. Cards revealed again in a later
    /// turn stay up. Returns false when nothing changed.
    pub fn flip_back(&mut self, flip: FlipBack) -> bool {
        if flip.generation != self.generation {
            return false;
        }
        let mut changed = false;
        for p in [flip.positions.0, flip.positions.1] {
            if let Some(card) = self.cards.get_mut(p) {
                if card.visible && !card.matched && card.revealed_turn <= flip.turn {
                    card.visible = false;
                    changed = true;
                }
            }
        }
        changed
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn selection(&self) -> &SelectionBuffer {
        &self.selection
    }

    pub fn remaining_pairs(&self) -> usize {
        self.cards.iter().filter(|c| !c.matched).count() / 2
    }

    pub fn is_locked(&self) -> bool {
        self.remaining_pairs() == 0
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> String {
        if self.is_locked() {
            WIN_MESSAGE.to_string()
        } else {
            format!("Remaining Card Pairs: {}", self.remaining_pairs())
        }
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum GameAction {
    Pick { position: usize },
    FlipBack(FlipBack),
    Reset { seed: u64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub board: Board,
    /// Set by the latest mismatch; the board view schedules its timer.
    pub pending_flip: Option<FlipBack>,
    /// Bumped on every applied action.
    pub version: u64,
}

impl GameState {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self {
            board: Board::new(&config.identities, &mut rng),
            pending_flip: None,
            version: 0,
        }
    }
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            GameAction::Pick { position } => match new.board.handle_pick(position) {
                PickOutcome::Ignored => return self,
                PickOutcome::First => {}
                PickOutcome::Matched => {
                    log::debug!("pair matched, {} left", new.board.remaining_pairs());
                }
                PickOutcome::Won => {
                    log::info!("board cleared in {} turns", new.board.turns());
                }
                PickOutcome::Mismatched(flip) => {
                    new.pending_flip = Some(flip);
                }
            },
            GameAction::FlipBack(flip) => {
                if !new.board.flip_back(flip) {
                    return self;
                }
            }
            GameAction::Reset { seed } => {
                let mut rng = SmallRng::seed_from_u64(seed);
                new.board.reset(&mut rng);
                new.pending_flip = None;
                log::info!("new game (generation {})", new.board.generation());
            }
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}
