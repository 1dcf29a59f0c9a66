use crate::deck::Card;

pub const BLACKJACK: u8 = 21;

/// Best total for `cards`, downgrading aces from 11 to 1 while the hand
/// would otherwise bust. The flag reports whether an ace still counts as 11.
pub fn hand_value(cards: &[Card]) -> (u8, bool) {
    let mut total = 0;
    let mut aces = 0;

    for card in cards {
        total += card.value();
        if card.is_ace() {
            aces += 1;
        }
    }

    while total > BLACKJACK && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    (total, aces > 0)
}

/// Cards held by one side. `score` is only refreshed by `calculate_score`.
#[derive(Clone, Debug, Default)]
pub struct Hand {
    cards: Vec<Card>,
    score: u8,
}

impl Hand {
    pub fn new() -> Self {
        Hand::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn calculate_score(&mut self) -> u8 {
        self.score = hand_value(&self.cards).0;
        self.score
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn is_bust(&self) -> bool {
        self.score > BLACKJACK
    }

    pub fn is_soft(&self) -> bool {
        hand_value(&self.cards).1
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::deck::{Rank, Suit};

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.push(Card::new(Suit::Spades, rank));
        }
        hand
    }

    #[rstest]
    #[case(&[Rank::Ace, Rank::King], 21)]
    #[case(&[Rank::Ace, Rank::Nine], 20)]
    #[case(&[Rank::Ace, Rank::Five, Rank::Nine], 15)]
    #[case(&[Rank::Ace, Rank::Ace, Rank::King], 12)]
    #[case(&[Rank::Ace, Rank::Ace], 12)]
    #[case(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace], 14)]
    #[case(&[Rank::King, Rank::Queen, Rank::Two], 22)]
    #[case(&[Rank::King, Rank::King, Rank::King], 30)]
    #[case(&[], 0)]
    fn scores_with_ace_adjustment(#[case] ranks: &[Rank], #[case] expected: u8) {
        let mut hand = hand_of(ranks);
        assert_eq!(hand.calculate_score(), expected);
        assert_eq!(hand.score(), expected);
    }

    #[test]
    fn scoring_is_idempotent() {
        let mut hand = hand_of(&[Rank::Ace, Rank::Seven, Rank::Ace]);
        let first = hand.calculate_score();
        let second = hand.calculate_score();
        assert_eq!(first, second);
        assert_eq!(first, 19);
    }

    #[test]
    fn score_is_stale_until_recalculated() {
        let mut hand = hand_of(&[Rank::Ten]);
        hand.calculate_score();
        hand.push(Card::new(Suit::Hearts, Rank::Five));
        assert_eq!(hand.score(), 10);
        assert_eq!(hand.calculate_score(), 15);
    }

    #[test]
    fn softness_tracks_remaining_eleven_ace() {
        assert!(hand_of(&[Rank::Ace, Rank::Six]).is_soft());
        assert!(!hand_of(&[Rank::Ace, Rank::Six, Rank::Nine]).is_soft());
        assert!(!hand_of(&[Rank::Ten, Rank::Six]).is_soft());
    }

    #[test]
    fn bust_reflects_last_score() {
        let mut hand = hand_of(&[Rank::King, Rank::King, Rank::Two]);
        assert!(!hand.is_bust());
        hand.calculate_score();
        assert!(hand.is_bust());
    }
}
