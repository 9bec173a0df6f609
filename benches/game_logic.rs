use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_memory::core::rng::seeded_rng;
use tui_memory::core::{build_deck, GameController, NoopCompletion, SessionSnapshot, SilentSound};
use tui_memory::types::{animal_catalog, Difficulty};

fn bench_build_deck(c: &mut Criterion) {
    let catalog = animal_catalog();
    let grid = Difficulty::Hard.grid();
    let mut rng = seeded_rng(12345);

    c.bench_function("build_deck_hard", |b| {
        b.iter(|| build_deck(black_box(&catalog), &grid, &mut rng))
    });
}

fn bench_press_and_resolve(c: &mut Criterion) {
    let mut game =
        GameController::new(animal_catalog(), seeded_rng(12345), SilentSound, NoopCompletion);
    game.initialize(Difficulty::Hard).unwrap();
    let first = game.session().cards()[0].id.clone();
    let other = game
        .session()
        .cards()
        .iter()
        .find(|c| !c.is_pair_of(&game.session().cards()[0]))
        .map(|c| c.id.clone())
        .unwrap();

    // A mismatch leaves the board as it was, so the cycle repeats forever.
    c.bench_function("press_mismatch_resolve", |b| {
        b.iter(|| {
            game.press_card(black_box(&first));
            game.press_card(black_box(&other));
            game.advance(1000);
        })
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut game =
        GameController::new(animal_catalog(), seeded_rng(12345), SilentSound, NoopCompletion);
    game.initialize(Difficulty::Hard).unwrap();
    let first = game.session().cards()[0].id.clone();
    game.press_card(&first);

    c.bench_function("advance_50ms", |b| {
        b.iter(|| {
            game.advance(black_box(50));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game =
        GameController::new(animal_catalog(), seeded_rng(12345), SilentSound, NoopCompletion);
    game.initialize(Difficulty::Hard).unwrap();
    let mut snap = SessionSnapshot::default();

    c.bench_function("snapshot_into_hard", |b| {
        b.iter(|| {
            game.session().snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_build_deck,
    bench_press_and_resolve,
    bench_tick,
    bench_snapshot
);
criterion_main!(benches);
