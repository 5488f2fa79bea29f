//! Card faces and per-card board state.

use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    }

    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

/// Card rank, Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Board position identifier, `0..2 * pair_count`.
///
/// Stable for the lifetime of a board unless a Mirage reshuffle re-indexes
/// the cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// One card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardState {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
    pub is_matched: bool,
    /// Part of the last mismatched pair, still showing until reset.
    pub is_error: bool,
}

impl CardState {
    /// A face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, suit: Suit, rank: Rank) -> Self {
        Self {
            id,
            suit,
            rank,
            is_face_up: false,
            is_matched: false,
            is_error: false,
        }
    }

    /// Two cards pair when their faces are identical.
    #[must_use]
    pub fn pairs_with(&self, other: &CardState) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }

    /// Face-up and waiting for its partner to be resolved.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.is_face_up && !self.is_matched
    }

    /// Display label, e.g. `"10♥"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_colors() {
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Clubs.is_red());
        assert!(!Suit::Spades.is_red());
    }

    #[test]
    fn test_label() {
        let card = CardState::new(CardId::new(3), Suit::Spades, Rank::Queen);
        assert_eq!(card.label(), "Q♠");
        assert_eq!(format!("{}", card.id), "Card(3)");
    }

    #[test]
    fn test_pairs_with() {
        let a = CardState::new(CardId::new(0), Suit::Hearts, Rank::Ten);
        let b = CardState::new(CardId::new(1), Suit::Hearts, Rank::Ten);
        let c = CardState::new(CardId::new(2), Suit::Diamonds, Rank::Ten);

        assert!(a.pairs_with(&b));
        assert!(!a.pairs_with(&c));
    }

    #[test]
    fn test_pending() {
        let mut card = CardState::new(CardId::new(0), Suit::Clubs, Rank::Ace);
        assert!(!card.is_pending());

        card.is_face_up = true;
        assert!(card.is_pending());

        card.is_matched = true;
        assert!(!card.is_pending());
    }
}
