//! Many-round simulation runs.

use wizard_sim::bidding::BidStrategy;
use wizard_sim::core::{LeadRule, RoundConfig};
use wizard_sim::simulation::{SimulationConfig, SimulationReport, Simulator};

fn run(round: RoundConfig, rounds: usize, seed: u64) -> SimulationReport {
    let config = SimulationConfig::new()
        .with_round(round)
        .with_rounds(rounds)
        .with_seed(seed);
    Simulator::new(config).run().unwrap()
}

#[test]
fn test_stats_match_records() {
    let report = run(RoundConfig::new(4, 5), 50, 17);
    let stats = &report.stats;

    assert_eq!(stats.rounds, 50);
    assert_eq!(stats.tricks, 250);
    assert_eq!(stats.tricks_by_seat.len(), 4);
    for seat in 0..4 {
        let won: u64 = report
            .records
            .iter()
            .filter(|r| r.position.index() == seat)
            .map(|r| u64::from(r.n_won))
            .sum();
        assert_eq!(stats.tricks_by_seat[seat], won);
    }

    let by_kind = &stats.wins_by_kind;
    assert_eq!(by_kind.normal + by_kind.wizard + by_kind.jester, stats.tricks);
    assert!(stats.no_trump_rounds + stats.wizard_trump_rounds <= stats.rounds);
}

#[test]
fn test_win_shares_sum_to_one() {
    let report = run(RoundConfig::new(3, 7), 40, 2);
    let total: f64 = (0..3).map(|seat| report.stats.win_share(seat)).sum();
    assert!((total - 1.0).abs() < 1e-9);
    let avg: f64 = (0..3).map(|seat| report.stats.avg_tricks(seat)).sum();
    assert!((avg - 7.0).abs() < 1e-9);
}

#[test]
fn test_wizards_win_tricks_over_many_rounds() {
    // Eight specials in sixty cards; over 200 rounds some Wizard takes a trick
    let report = run(RoundConfig::new(5, 10), 200, 8);
    assert!(report.stats.wins_by_kind.wizard > 0);
    assert!(report.stats.wins_by_kind.normal > report.stats.wins_by_kind.wizard);
}

#[test]
fn test_seed_changes_outcomes() {
    let round = RoundConfig::new(4, 6).with_lead_rule(LeadRule::TrickWinner);
    let a = run(round.clone(), 10, 1);
    let b = run(round, 10, 2);
    assert_ne!(a.records, b.records);
}

#[test]
fn test_mixed_bidders() {
    let round = RoundConfig::new(3, 9)
        .with_bid_strategy(BidStrategy::Random)
        .with_seat_bidders(vec![BidStrategy::Constant(1), BidStrategy::Proportional]);
    let report = run(round, 20, 6);

    for record in &report.records {
        match record.position.index() {
            0 => assert_eq!(record.bid, 1),
            1 => assert_eq!(record.bid, 3),
            _ => assert!(record.bid <= 9),
        }
    }
}

#[test]
fn test_report_survives_bincode_and_json() {
    let report = run(RoundConfig::new(2, 3), 5, 9);

    let bytes = report.to_bytes().unwrap();
    assert_eq!(SimulationReport::from_bytes(&bytes).unwrap(), report);

    let json = serde_json::to_string(&report.stats).unwrap();
    assert_eq!(serde_json::from_str::<wizard_sim::SimulationStats>(&json).unwrap(), report.stats);
}
