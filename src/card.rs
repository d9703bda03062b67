use std::fmt;

use serde::Serialize;

pub const WINNING_SCORE: u8 = 21;

const ACE_HIGH: u8 = 11;
const ACE_LOW: u8 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Face {
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
    Ace,
}

impl Face {
    pub const ALL: [Face; 13] = [
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
        Face::Seven,
        Face::Eight,
        Face::Nine,
        Face::Ten,
        Face::Jack,
        Face::Queen,
        Face::King,
        Face::Ace,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Face::Two => "2",
            Face::Three => "3",
            Face::Four => "4",
            Face::Five => "5",
            Face::Six => "6",
            Face::Seven => "7",
            Face::Eight => "8",
            Face::Nine => "9",
            Face::Ten => "10",
            Face::Jack => "Jack",
            Face::Queen => "Queen",
            Face::King => "King",
            Face::Ace => "Ace",
        }
    }

    /// Value this face carries regardless of hand context; `None` for the Ace.
    pub fn fixed_value(&self) -> Option<u8> {
        match self {
            Face::Two => Some(2),
            Face::Three => Some(3),
            Face::Four => Some(4),
            Face::Five => Some(5),
            Face::Six => Some(6),
            Face::Seven => Some(7),
            Face::Eight => Some(8),
            Face::Nine => Some(9),
            Face::Ten | Face::Jack | Face::Queen | Face::King => Some(10),
            Face::Ace => None,
        }
    }
}

/// Point value of a card. Aces stay unresolved until they join a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CardValue {
    Fixed(u8),
    UnresolvedAce,
}

impl CardValue {
    pub fn points(&self) -> u8 {
        match self {
            CardValue::Fixed(points) => *points,
            CardValue::UnresolvedAce => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    pub suit: Suit,
    pub face: Face,
    value: CardValue,
}

impl Card {
    pub fn new(suit: Suit, face: Face) -> Self {
        let value = match face.fixed_value() {
            Some(points) => CardValue::Fixed(points),
            None => CardValue::UnresolvedAce,
        };
        Card { suit, face, value }
    }

    pub fn value(&self) -> CardValue {
        self.value
    }

    pub fn points(&self) -> u8 {
        self.value.points()
    }

    /// Pins an unresolved Ace to 11 or 1 given the hand total it joins.
    ///
    /// The choice is greedy and final: 11 whenever it keeps the hand at or
    /// under 21, otherwise 1. Cards that already carry a value are returned
    /// unchanged.
    pub(crate) fn resolve(self, total_before: u8) -> Self {
        match self.value {
            CardValue::Fixed(_) => self,
            CardValue::UnresolvedAce => {
                let points = if total_before.saturating_add(ACE_HIGH) <= WINNING_SCORE {
                    ACE_HIGH
                } else {
                    ACE_LOW
                };
                Card {
                    value: CardValue::Fixed(points),
                    ..self
                }
            }
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.face.name(), self.suit.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeral_faces_carry_their_number() {
        let expected = [2, 3, 4, 5, 6, 7, 8, 9, 10];
        for (face, value) in Face::ALL.iter().zip(expected) {
            let card = Card::new(Suit::Spades, *face);
            assert_eq!(card.value(), CardValue::Fixed(value));
        }
    }

    #[test]
    fn test_court_cards_are_worth_ten() {
        for face in [Face::Jack, Face::Queen, Face::King] {
            assert_eq!(Card::new(Suit::Hearts, face).points(), 10);
        }
    }

    #[test]
    fn test_ace_starts_unresolved() {
        let ace = Card::new(Suit::Clubs, Face::Ace);
        assert_eq!(ace.value(), CardValue::UnresolvedAce);
        assert_eq!(ace.points(), 0);
    }

    #[test]
    fn test_ace_resolves_high_when_it_fits() {
        let ace = Card::new(Suit::Clubs, Face::Ace).resolve(10);
        assert_eq!(ace.value(), CardValue::Fixed(11));
    }

    #[test]
    fn test_ace_resolves_low_when_high_would_bust() {
        let ace = Card::new(Suit::Clubs, Face::Ace).resolve(11);
        assert_eq!(ace.value(), CardValue::Fixed(1));
    }

    #[test]
    fn test_resolve_leaves_fixed_cards_alone() {
        let king = Card::new(Suit::Diamonds, Face::King);
        assert_eq!(king.resolve(20), king);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Suit::Hearts, Face::Ten).to_string(), "10 of Hearts");
        assert_eq!(Card::new(Suit::Spades, Face::Queen).to_string(), "Queen of Spades");
    }
}
