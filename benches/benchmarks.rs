criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        building_wheel_bins,
        spinning_wheel,
        cycling_martingale_round,
        gathering_martingale_batch,
        gathering_seven_reds_batch,
}

fn building_wheel_bins(c: &mut criterion::Criterion) {
    c.bench_function("build all 38 Bins from the Catalog", |b| {
        b.iter(|| Catalog::bins())
    });
}

fn spinning_wheel(c: &mut criterion::Criterion) {
    let mut wheel = Wheel::new(0);
    c.bench_function("spin the Wheel", |b| b.iter(|| wheel.spin()));
}

fn cycling_martingale_round(c: &mut criterion::Criterion) {
    let wheel = Wheel::new(0);
    let bankroll = Bankroll::new(Chips::MAX / 2, usize::MAX, 1).unwrap();
    let black = wheel.get("Black").unwrap();
    let mut player = Martingale::new(bankroll, black);
    let mut game = Game::new(wheel, Table::new(Chips::MAX / 2).unwrap());
    c.bench_function("cycle one Martingale Round", |b| {
        b.iter(|| game.cycle(&mut player))
    });
}

fn gathering_martingale_batch(c: &mut criterion::Criterion) {
    let config = Config {
        strategy: Strategy::Martingale,
        ..Config::default()
    };
    c.bench_function("gather a default Martingale Batch", |b| {
        b.iter(|| config.simulator().unwrap().gather().unwrap())
    });
}

fn gathering_seven_reds_batch(c: &mut criterion::Criterion) {
    let config = Config {
        strategy: Strategy::SevenReds,
        ..Config::default()
    };
    c.bench_function("gather a default SevenReds Batch", |b| {
        b.iter(|| config.simulator().unwrap().gather().unwrap())
    });
}

use roulette::Chips;
use roulette::Config;
use roulette::game::Game;
use roulette::players::Bankroll;
use roulette::players::Martingale;
use roulette::players::Strategy;
use roulette::table::Table;
use roulette::wheel::Catalog;
use roulette::wheel::Wheel;
