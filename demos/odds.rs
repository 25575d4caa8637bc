//! Time equity estimates across streets.
//!
//! Usage:
//!   cargo run --release --example odds
//!   cargo run --release --example odds -- "A-s A-h" "K-c K-d" "2-h 7-d 9-c"
//!
//! Set RUST_LOG=debug to see the estimator's tallies.

use std::time::Instant;

use holdem_odds::{
    classify, parse_cards, parse_hole_cards, Card, EstimatorConfig, Estimator, Sampling, Showdown,
};

fn format_duration(nanos: u128) -> String {
    if nanos < 1_000 {
        format!("{} ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.1} μs", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2} ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.3} s", nanos as f64 / 1_000_000_000.0)
    }
}

fn run(name: &str, est: &Estimator, own: &[Card], opp: &[Card], board: &[Card]) {
    let start = Instant::now();
    match est.estimate(own, opp, board) {
        Ok(r) => println!(
            "{:44} {:>10}  {:>6.2}% / {:>6.2}%  (split {:>5.2}%, n={})",
            name,
            format_duration(start.elapsed().as_nanos()),
            r.player_odds,
            r.opponent_odds,
            r.split_odds,
            r.counts.sampled()
        ),
        Err(e) => println!("{:44} error: {}", name, e),
    }
}

fn scenario(own: &[Card], opp: &[Card], board: &[Card]) {
    if board.len() >= 3 {
        for (label, hole) in [("player", own), ("opponent", opp)] {
            if let Ok(h) = classify(hole, board) {
                println!("  {:<10}{}", label, h.category());
            }
        }
    }
    for cap in [1_000, 10_000, 100_000] {
        for sampling in [Sampling::Direct, Sampling::Materialize] {
            let est = Estimator::new(
                EstimatorConfig::default()
                    .sample_cap(cap)
                    .sampling(sampling)
                    .seed(42),
            );
            run(&format!("cap {:>7} {:?}", cap, sampling), &est, own, opp, board);
        }
    }
    let strict = Estimator::new(
        EstimatorConfig::default()
            .sample_cap(100_000)
            .showdown(Showdown::BestFive)
            .seed(42),
    );
    run("cap  100000 Direct, best five", &strict, own, opp, board);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() >= 2 {
        let parsed = (
            parse_hole_cards(&args[0]),
            parse_hole_cards(&args[1]),
            parse_cards(args.get(2).map(String::as_str).unwrap_or("")),
        );
        match parsed {
            (Ok(own), Ok(opp), Ok(board)) => scenario(&own, &opp, &board),
            (a, b, c) => {
                for e in [a.err(), b.err(), c.err()].into_iter().flatten() {
                    eprintln!("{}", e);
                }
                std::process::exit(2);
            }
        }
        return;
    }

    let aces = parse_cards("A-s A-h").unwrap_or_default();
    let kings = parse_cards("K-s K-h").unwrap_or_default();
    let streets = [
        ("preflop", ""),
        ("flop", "K-c Q-d 2-h"),
        ("turn", "K-c Q-d 2-h 3-s"),
        ("river", "K-c Q-d 2-h 3-s 4-c"),
    ];
    for (street, board) in streets {
        println!("\n--- A-s A-h vs K-s K-h, {} ---", street);
        scenario(&aces, &kings, &parse_cards(board).unwrap_or_default());
    }
}
