//! Benchmarks for the hot rules paths

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gridfall::core::types::{Facing, GridPos, PlayerRole};
use gridfall::units::{Archetype, Unit};
use gridfall::{calculate_damage, generate_map, has_line_of_sight, visible_tiles};

fn bench_map_generation(c: &mut Criterion) {
    c.bench_function("generate_map 12x12", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        b.iter(|| generate_map(&mut rng, black_box(12), black_box(12)));
    });
}

fn bench_line_of_sight(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let map = generate_map(&mut rng, 12, 12);
    c.bench_function("los corner to corner", |b| {
        b.iter(|| {
            has_line_of_sight(
                black_box(GridPos::new(0, 0)),
                black_box(GridPos::new(11, 11)),
                &map,
            )
        });
    });
}

fn bench_vision_set(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let map = generate_map(&mut rng, 12, 12);
    c.bench_function("visible_tiles radius 5", |b| {
        b.iter(|| visible_tiles(black_box(GridPos::new(6, 6)), black_box(5), &map));
    });
}

fn bench_damage(c: &mut Criterion) {
    let attacker = Unit::spawn(
        PlayerRole::P1,
        Archetype::Archer,
        GridPos::new(2, 5),
        Facing::East,
    );
    let defender = Unit::spawn(
        PlayerRole::P2,
        Archetype::Knight,
        GridPos::new(6, 5),
        Facing::West,
    );
    c.bench_function("calculate_damage", |b| {
        b.iter(|| calculate_damage(black_box(&attacker), black_box(&defender), black_box(true)));
    });
}

criterion_group!(
    benches,
    bench_map_generation,
    bench_line_of_sight,
    bench_vision_set,
    bench_damage
);
criterion_main!(benches);
