//! Drive a full split flow from the terminal
//!
//! Run with `cargo run --example split_walkthrough` (set `RUST_LOG=debug`
//! to watch the stage transitions).

use paysplit_session::{SplitMode, SplitSession};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn print_stage(session: &SplitSession) {
    println!("\n== {} ==", session.stage().title());
    let amounts = session.amounts();
    for participant in session.selected_participants() {
        let owed = amounts
            .get(&participant.id)
            .copied()
            .unwrap_or_default();
        println!(
            "  {} {:<10} {}",
            participant.avatar,
            participant.name,
            session.format_amount(owed)
        );
    }
    println!("  total {}", session.format_amount(session.total()));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut session = SplitSession::with_defaults();
    print_stage(&session);

    // Friends: bring one more guest along and move on
    let guest = session.add_participant();
    println!("\nadded {}", session.participant(guest).unwrap().name);
    assert!(session.advance());
    print_stage(&session);

    // Adjust: give the first person a bigger share
    session.set_percent_for(session.selection()[0], dec!(40));
    println!("\npercent map after edit: {:?}", session.percents());
    assert!(session.advance());
    print_stage(&session);

    // Review looks right; confirm
    assert!(session.advance());
    print_stage(&session);
    println!(
        "\nrequests sent, grand total {}",
        session.format_amount(session.amounts_total())
    );

    // Start over: a custom split this time
    session.reset();
    session.set_mode(SplitMode::Custom);
    session.set_total(dec!(80));
    for member in session.selection().to_vec() {
        session.set_custom_for(member, dec!(20));
    }
    assert!(session.advance());
    println!(
        "\ncustom split remaining {} (settled: {})",
        session.format_amount(session.remaining()),
        session.is_settled()
    );
}
