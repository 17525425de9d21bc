use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use lampsim_core::{LampProfile, SharedPower, build_lamp};
use lampsim_power::{GridSupply, ReserveSupply};
use lampsim_traits::PowerSource;

// Generate a request trace: mostly in-capacity draws with a tiny PRNG
fn synth_requests(n: usize, max_amps: f64, seed: u32) -> Vec<f64> {
    let mut state = seed.max(1);
    let mut next_f64 = || {
        let mut x = state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        state = x;
        (x as f64) / (u32::MAX as f64 + 1.0)
    };
    (0..n).map(|_| next_f64() * max_amps).collect()
}

pub fn bench_request_power(c: &mut Criterion) {
    let mut g = c.benchmark_group("request_power");
    g.sample_size(50);

    let n = 50_000usize;
    let requests = synth_requests(n, 900.0, 0xC0FFEE);

    g.bench_function("grid_supply", |b| {
        b.iter_batched(
            || (GridSupply::mains(), requests.clone()),
            |(mut grid, reqs)| {
                for amps in reqs {
                    let s = grid.request_power(black_box(amps)).unwrap();
                    black_box(s);
                }
            },
            BatchSize::SmallInput,
        )
    });

    g.bench_function("reserve_supply", |b| {
        b.iter_batched(
            || {
                (
                    ReserveSupply::new(120.0, 1000.0, f64::MAX).with_draw_hours(1.0),
                    requests.clone(),
                )
            },
            |(mut battery, reqs)| {
                for amps in reqs {
                    let s = battery.request_power(black_box(amps)).unwrap();
                    black_box(s);
                }
            },
            BatchSize::SmallInput,
        )
    });

    g.bench_function("turn_on_shared", |b| {
        b.iter_batched(
            || {
                let shared = SharedPower::new(GridSupply::mains());
                build_lamp("bench lamp", LampProfile::FLOOR, shared).unwrap()
            },
            |mut lamp| {
                for _ in 0..1_000 {
                    let status = lamp.turn_on().unwrap();
                    black_box(status);
                }
            },
            BatchSize::SmallInput,
        )
    });

    g.finish();
}

criterion_group!(request_power, bench_request_power);
criterion_main!(request_power);
