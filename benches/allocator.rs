use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use seat_reservation::config::LayoutConfig;
use seat_reservation::services::seat_map::SeatMap;

fn bench_book_until_full(c: &mut Criterion) {
    let layout = LayoutConfig::default();

    c.bench_function("book_until_full_mixed_sizes", |b| {
        b.iter_batched(
            || SeatMap::new(&layout).expect("valid layout"),
            |mut map| {
                let mut size = 1;
                while map.available_count() > 0 {
                    let _ = map.book(black_box(size));
                    size = size % 7 + 1;
                    if map.available_count() < 7 {
                        let _ = map.book(i64::from(map.available_count()));
                    }
                }
                map
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("book_fallback_on_fragmented_coach", |b| {
        b.iter_batched(
            || {
                let mut map = SeatMap::new(&layout).expect("valid layout");
                for _ in 0..10 {
                    let _ = map.book(5);
                }
                map
            },
            |mut map| map.book(black_box(3)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_large_coach(c: &mut Criterion) {
    let layout = LayoutConfig {
        total_seats: 10_000,
        seats_per_row: 7,
        max_seats_per_request: 7,
    };

    c.bench_function("book_7_on_10k_seats", |b| {
        b.iter_batched(
            || SeatMap::new(&layout).expect("valid layout"),
            |mut map| map.book(black_box(7)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_book_until_full, bench_large_coach);
criterion_main!(benches);
