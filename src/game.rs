use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::{
    deck::{Card, Deck},
    error::GameError,
    hand::{Hand, BLACKJACK},
    strategy::{dealer_action, player_action, Action},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Player,
    Dealer,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("player"),
            Side::Dealer => f.write_str("dealer"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    PlayerWin,
    DealerWin,
    Tie,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub outcome: Outcome,
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub player_score: u8,
    pub dealer_score: u8,
    /// False when the round ended before the dealer's turn.
    pub dealer_played: bool,
}

/// One round: a private deck and both hands.
pub struct Game {
    deck: Deck,
    player: Hand,
    dealer: Hand,
}

impl Game {
    pub fn new(deck: Deck) -> Self {
        Game {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
        }
    }

    /// Fresh standard deck shuffled with `rng`.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Deck::standard();
        deck.shuffle(rng);
        Game::new(deck)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn deal_card(&mut self, side: Side) -> Result<(), GameError> {
        let card = self.deck.deal(side)?;
        match side {
            Side::Player => self.player.push(card),
            Side::Dealer => self.dealer.push(card),
        }
        Ok(())
    }

    /// Draws while below 17. Returns the final, possibly busted, total.
    pub fn player_turn(&mut self) -> Result<u8, GameError> {
        loop {
            let score = self.player.calculate_score();
            match player_action(score) {
                Action::Hit => self.deal_card(Side::Player)?,
                Action::Stand => return Ok(score),
            }
        }
    }

    pub fn dealer_turn(&mut self, player_score: u8) -> Result<u8, GameError> {
        loop {
            let score = self.dealer.calculate_score();
            match dealer_action(score, player_score) {
                Action::Hit => self.deal_card(Side::Dealer)?,
                Action::Stand => return Ok(score),
            }
        }
    }

    pub fn play_round(mut self) -> Result<RoundResult, GameError> {
        for _ in 0..2 {
            self.deal_card(Side::Player)?;
            self.deal_card(Side::Dealer)?;
        }
        self.player.calculate_score();
        self.dealer.calculate_score();

        let player_score = self.player_turn()?;
        let early = if player_score > BLACKJACK {
            Some(Outcome::DealerWin)
        } else if player_score == BLACKJACK {
            Some(Outcome::PlayerWin)
        } else {
            None
        };
        if let Some(outcome) = early {
            return Ok(self.finish(outcome, false));
        }

        let dealer_score = self.dealer_turn(player_score)?;
        let outcome = if dealer_score > BLACKJACK {
            Outcome::PlayerWin
        } else if dealer_score == player_score {
            Outcome::Tie
        } else if dealer_score > player_score {
            Outcome::DealerWin
        } else {
            Outcome::PlayerWin
        };
        Ok(self.finish(outcome, true))
    }

    fn finish(self, outcome: Outcome, dealer_played: bool) -> RoundResult {
        let player_score = self.player.score();
        let dealer_score = self.dealer.score();
        tracing::trace!(
            ?outcome,
            player_score,
            dealer_score,
            dealer_played,
            remaining = self.deck.remaining(),
            "round finished"
        );
        RoundResult {
            outcome,
            player_cards: self.player.into_cards(),
            dealer_cards: self.dealer.into_cards(),
            player_score,
            dealer_score,
            dealer_played,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Rank, Suit};

    fn stacked(ranks: &[Rank]) -> Deck {
        Deck::from_cards(ranks.iter().map(|&r| Card::new(Suit::Clubs, r)).collect())
    }

    #[test]
    fn deal_card_routes_to_the_requested_side() {
        let mut game = Game::new(stacked(&[Rank::Two, Rank::Three]));
        game.deal_card(Side::Dealer).unwrap();
        game.deal_card(Side::Player).unwrap();
        assert_eq!(game.dealer().cards()[0].rank, Rank::Two);
        assert_eq!(game.player().cards()[0].rank, Rank::Three);
        assert_eq!(game.deck().remaining(), 0);
    }

    #[test]
    fn player_turn_draws_from_twelve_until_seventeen() {
        let deck = stacked(&[Rank::Two, Rank::Two, Rank::Three, Rank::Nine]);
        let mut game = Game::new(deck);
        game.player.push(Card::new(Suit::Hearts, Rank::Ten));
        game.player.push(Card::new(Suit::Hearts, Rank::Two));

        // 12 -> 14 -> 16 -> 19
        assert_eq!(game.player_turn(), Ok(19));
        assert_eq!(game.player().cards().len(), 5);
        let left: Vec<Rank> = game.deck().cards().map(|c| c.rank).collect();
        assert_eq!(left, vec![Rank::Nine]);
    }

    #[test]
    fn player_turn_stands_on_seventeen_without_drawing() {
        let mut game = Game::new(stacked(&[Rank::Two]));
        game.player.push(Card::new(Suit::Hearts, Rank::Ten));
        game.player.push(Card::new(Suit::Hearts, Rank::Seven));
        assert_eq!(game.player_turn(), Ok(17));
        assert_eq!(game.deck().remaining(), 1);
    }

    #[test]
    fn dealer_turn_stops_once_player_total_matched() {
        let mut game = Game::new(stacked(&[Rank::Five, Rank::Nine]));
        game.dealer.push(Card::new(Suit::Hearts, Rank::Ten));
        game.dealer.push(Card::new(Suit::Hearts, Rank::Two));
        assert_eq!(game.dealer_turn(15), Ok(17));
        assert_eq!(game.deck().remaining(), 1);

        let mut game = Game::new(stacked(&[Rank::Two]));
        game.dealer.push(Card::new(Suit::Hearts, Rank::Ten));
        game.dealer.push(Card::new(Suit::Hearts, Rank::Four));
        assert_eq!(game.dealer_turn(14), Ok(14));
        assert_eq!(game.deck().remaining(), 1);
    }

    #[test]
    fn running_out_of_cards_is_an_error() {
        let mut game = Game::new(stacked(&[]));
        game.player.push(Card::new(Suit::Hearts, Rank::Two));
        assert_eq!(
            game.player_turn(),
            Err(GameError::DeckExhausted { side: Side::Player })
        );
    }
}
