//! Round setup and play-out.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::bidding::{BidContext, Bidder};
use crate::cards::{Card, Deck, Hand, Suit};
use crate::core::{GameRng, LeadRule, PlayerId, PlayerMap, RoundConfig};
use crate::error::Result;
use crate::policy::PlayPolicy;
use crate::trick::Trick;

use super::PlayOrder;

const SHUFFLE_CONTEXT: &str = "shuffle";
const BIDS_CONTEXT: &str = "bids";

/// What one seat held and achieved in a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRecord {
    pub position: PlayerId,
    pub n_players: usize,
    pub n_cards: usize,
    /// Tricks taken.
    pub n_won: u32,
    pub trump: Option<Suit>,
    pub bid: u32,
    /// The hand as dealt.
    pub hand: Vec<Card>,
}

/// One dealt round: hands, trump, bids and the tricks played so far.
///
/// A round owns its deck, hands and random source; nothing is shared
/// between rounds.
#[derive(Clone, Debug)]
pub struct Round {
    config: RoundConfig,
    rng: GameRng,
    deck: Deck,
    hands: PlayerMap<Hand>,
    policies: PlayerMap<PlayPolicy>,
    bids: PlayerMap<u32>,
    tricks_won: PlayerMap<u32>,
    trump_card: Card,
    trump: Option<Suit>,
    play_order: PlayOrder,
    history: Vec<Trick>,
}

impl Round {
    /// Deal a round from a freshly shuffled deck.
    pub fn setup(config: RoundConfig, rng: GameRng) -> Result<Self> {
        config.validate()?;
        let deck = Deck::new(&mut rng.for_context(SHUFFLE_CONTEXT));
        Self::deal(config, deck, rng)
    }

    /// Deal a round from a prepared deck (last card dealt first).
    pub fn setup_with_deck(config: RoundConfig, deck: Deck, rng: GameRng) -> Result<Self> {
        config.validate()?;
        Self::deal(config, deck, rng)
    }

    fn deal(config: RoundConfig, mut deck: Deck, mut rng: GameRng) -> Result<Self> {
        let n_players = config.player_count;
        let n_cards = config.cards_per_player;

        let hands = PlayerMap::try_new(n_players, |seat| {
            deck.deal(n_cards).map(|cards| Hand::new(seat, cards))
        })?;

        let trump_card = deck.deal_one()?;
        let trump = trump_from_reveal(trump_card, &mut rng);

        let play_order = PlayOrder::new(n_players);
        let first_leader = PlayerId::new(0);
        let mut bid_rng = rng.for_context(BIDS_CONTEXT);
        let bids = PlayerMap::new(n_players, |seat| {
            let ctx = BidContext {
                hand: &hands[seat],
                starting_position: play_order.position_of(first_leader, seat),
                player_count: n_players,
                cards_per_player: n_cards,
                trump,
            };
            config.bidder_for(seat.index()).compute_bid(&ctx, &mut bid_rng)
        });

        debug!(
            n_players,
            n_cards,
            %trump_card,
            trump = ?trump,
            remaining = deck.remaining(),
            "round dealt"
        );

        Ok(Self {
            policies: PlayerMap::with_value(n_players, config.play_policy),
            tricks_won: PlayerMap::with_default(n_players),
            history: Vec::with_capacity(n_cards),
            config,
            rng,
            deck,
            hands,
            bids,
            trump_card,
            trump,
            play_order,
        })
    }

    /// Play every trick of the round and return the seat records.
    ///
    /// Fails with `EmptyHand` if the round was already played.
    pub fn run(&mut self) -> Result<Vec<SeatRecord>> {
        let mut leader = PlayerId::new(0);
        for trick_no in 0..self.config.cards_per_player {
            let mut trick = Trick::new(self.play_order.for_leader(leader), self.trump)?;
            let winner = trick.play_out(&mut self.hands, &self.policies, &mut self.rng)?;
            self.tricks_won[winner] += 1;
            self.history.push(trick);
            trace!(trick_no, %winner, "trick credited");

            if self.config.lead_rule == LeadRule::TrickWinner {
                leader = winner;
            }
        }
        Ok(self.records())
    }

    /// Per-seat records as of now.
    #[must_use]
    pub fn records(&self) -> Vec<SeatRecord> {
        self.hands
            .iter()
            .map(|(seat, hand)| SeatRecord {
                position: seat,
                n_players: self.config.player_count,
                n_cards: self.config.cards_per_player,
                n_won: self.tricks_won[seat],
                trump: self.trump,
                bid: self.bids[seat],
                hand: hand.starting_cards().to_vec(),
            })
            .collect()
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    /// The card turned up after the deal.
    #[must_use]
    pub fn trump_card(&self) -> Card {
        self.trump_card
    }

    #[must_use]
    pub fn play_order(&self) -> &PlayOrder {
        &self.play_order
    }

    #[must_use]
    pub fn hand(&self, seat: PlayerId) -> &Hand {
        &self.hands[seat]
    }

    #[must_use]
    pub fn bid(&self, seat: PlayerId) -> u32 {
        self.bids[seat]
    }

    #[must_use]
    pub fn tricks_won(&self, seat: PlayerId) -> u32 {
        self.tricks_won[seat]
    }

    /// Tricks played so far, in order.
    #[must_use]
    pub fn trick_history(&self) -> &[Trick] {
        &self.history
    }

    /// Cards left undealt.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}

/// Trump for the round from the turned-up card.
///
/// A suit card names its suit, a Wizard lets a random suit be picked, and a
/// Jester means no trump.
pub fn trump_from_reveal(card: Card, rng: &mut GameRng) -> Option<Suit> {
    match card {
        Card::Normal { suit, .. } => Some(suit),
        Card::Wizard => rng.choose(&Suit::ALL).copied(),
        Card::Jester => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bidding::BidStrategy;
    use crate::cards::{parse_cards, DECK_SIZE};
    use crate::error::WizardError;

    /// A stacked deck where `deal_order` comes off the top first.
    fn stacked(deal_order: &[&str]) -> Deck {
        let mut cards = parse_cards(deal_order).unwrap();
        cards.reverse();
        Deck::from_cards(cards)
    }

    #[test]
    fn test_deal_is_sequential_by_seat() {
        let deck = stacked(&[
            "2-hearts", "3-hearts", // seat 0
            "4-clubs", "5-clubs", // seat 1
            "6-spades", "7-spades", // seat 2
            "9-diamonds", // trump card
            "jester",
        ]);
        let round = Round::setup_with_deck(RoundConfig::new(3, 2), deck, GameRng::new(0)).unwrap();

        assert_eq!(
            round.hand(PlayerId::new(1)).cards(),
            parse_cards(["4-clubs", "5-clubs"]).unwrap().as_slice()
        );
        assert_eq!(round.trump_card(), Card::normal(9, Suit::Diamonds));
        assert_eq!(round.trump(), Some(Suit::Diamonds));
        assert_eq!(round.deck().remaining(), 1);
    }

    #[test]
    fn test_trump_reveal() {
        let mut rng = GameRng::new(4);
        assert_eq!(trump_from_reveal(Card::normal(3, Suit::Clubs), &mut rng), Some(Suit::Clubs));
        assert_eq!(trump_from_reveal(Card::Jester, &mut rng), None);
        for _ in 0..20 {
            assert!(trump_from_reveal(Card::Wizard, &mut rng).is_some());
        }
    }

    #[test]
    fn test_remaining_deck_after_setup() {
        let round = Round::setup(RoundConfig::new(4, 7), GameRng::new(8)).unwrap();
        assert_eq!(round.deck().remaining(), DECK_SIZE - (4 * 7 + 1));
        for seat in PlayerId::all(4) {
            assert_eq!(round.hand(seat).len(), 7);
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = Round::setup(RoundConfig::new(6, 10), GameRng::new(0)).unwrap_err();
        assert!(matches!(err, WizardError::InvalidConfig(_)));
    }

    #[test]
    fn test_short_stacked_deck() {
        let deck = stacked(&["2-hearts", "3-hearts", "4-hearts"]);
        let err = Round::setup_with_deck(RoundConfig::new(2, 2), deck, GameRng::new(0)).unwrap_err();
        assert_eq!(
            err,
            WizardError::InsufficientCards {
                requested: 2,
                remaining: 1
            }
        );
    }

    #[test]
    fn test_bids_use_configured_strategies() {
        let config = RoundConfig::new(3, 6)
            .with_bid_strategy(BidStrategy::Proportional)
            .with_seat_bidders(vec![BidStrategy::Constant(5)]);
        let round = Round::setup(config, GameRng::new(2)).unwrap();

        assert_eq!(round.bid(PlayerId::new(0)), 5);
        assert_eq!(round.bid(PlayerId::new(1)), 2);
        assert_eq!(round.bid(PlayerId::new(2)), 2);
    }

    #[test]
    fn test_bid_strategy_does_not_change_deal_or_play() {
        let play = |strategy| {
            let config = RoundConfig::new(4, 8).with_bid_strategy(strategy);
            let mut round = Round::setup(config, GameRng::new(64)).unwrap();
            round.run().unwrap()
        };
        let random = play(BidStrategy::Random);
        let constant = play(BidStrategy::Constant(2));

        for (a, b) in random.iter().zip(&constant) {
            assert_eq!(a.hand, b.hand);
            assert_eq!(a.trump, b.trump);
            assert_eq!(a.n_won, b.n_won);
            assert_eq!(b.bid, 2);
        }
    }

    #[test]
    fn test_fixed_seat_leads_every_trick() {
        let mut round = Round::setup(RoundConfig::new(4, 5), GameRng::new(21)).unwrap();
        round.run().unwrap();

        assert_eq!(round.trick_history().len(), 5);
        assert!(round
            .trick_history()
            .iter()
            .all(|t| t.leader() == PlayerId::new(0)));
    }

    #[test]
    fn test_trick_winner_leads_next() {
        let config = RoundConfig::new(4, 6).with_lead_rule(LeadRule::TrickWinner);
        let mut round = Round::setup(config, GameRng::new(21)).unwrap();
        round.run().unwrap();

        let history = round.trick_history();
        assert_eq!(history[0].leader(), PlayerId::new(0));
        for pair in history.windows(2) {
            assert_eq!(pair[1].leader(), pair[0].winner().unwrap());
        }
    }

    #[test]
    fn test_run_credits_every_trick_and_empties_hands() {
        let mut round = Round::setup(RoundConfig::new(5, 8), GameRng::new(99)).unwrap();
        let records = round.run().unwrap();

        assert_eq!(records.len(), 5);
        assert_eq!(records.iter().map(|r| r.n_won).sum::<u32>(), 8);
        for record in &records {
            assert_eq!(record.hand.len(), 8);
            assert_eq!(record.n_players, 5);
            assert_eq!(record.n_cards, 8);
            assert_eq!(record.trump, round.trump());
            assert!(round.hand(record.position).is_empty());
        }
    }

    #[test]
    fn test_second_run_fails() {
        let mut round = Round::setup(RoundConfig::new(3, 2), GameRng::new(1)).unwrap();
        round.run().unwrap();
        assert_eq!(
            round.run().unwrap_err(),
            WizardError::EmptyHand {
                seat: PlayerId::new(0)
            }
        );
    }

    #[test]
    fn test_same_seed_same_round() {
        let play = |seed| {
            let mut round = Round::setup(RoundConfig::new(4, 9), GameRng::new(seed)).unwrap();
            round.run().unwrap()
        };
        assert_eq!(play(77), play(77));
    }
}
