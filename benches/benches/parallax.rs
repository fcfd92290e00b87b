// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Vec2;
use understory_parallax::{MotionOffsetBinding, ViewerOffset, project_normalized};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// A value in `[-1, 1]`, like a normalized tilt component.
    fn gen_unit(&mut self) -> f64 {
        (f64::from(self.next_u32()) / f64::from(u32::MAX)) * 2.0 - 1.0
    }
}

fn mounted_binding() -> MotionOffsetBinding {
    let mut binding = MotionOffsetBinding::new(Some(-20.0..=20.0), Some(-20.0..=20.0));
    let _ = binding.mount(false);
    binding
}

fn bench_parallax(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_parallax");

    group.bench_function("project_normalized", |b| {
        let mut rng = Lcg::new(0x0FF5_E700_0000_0001);
        b.iter(|| black_box(project_normalized(black_box(rng.gen_unit()), -20.0..=20.0)));
    });

    for &burst in &[1_u32, 4, 16] {
        group.bench_function(format!("record_and_drain(burst={burst})"), |b| {
            let mut rng = Lcg::new(0x0FF5_E700_0000_0002);
            b.iter_batched(
                mounted_binding,
                |mut binding| {
                    for _ in 0..burst {
                        let _ = binding.record_sample(ViewerOffset::new(
                            rng.gen_unit(),
                            rng.gen_unit(),
                        ));
                    }
                    let _ = binding.on_tick();
                    let offset: Vec2 = binding.offset();
                    black_box(offset);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("reduce_motion_round_trip", |b| {
        b.iter_batched(
            mounted_binding,
            |mut binding| {
                let _ = binding.record_sample(ViewerOffset::new(0.5, -0.5));
                let _ = binding.on_tick();
                let _ = binding.update(true);
                let _ = binding.on_tick();
                let _ = binding.update(false);
                black_box(binding.offset());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_parallax);
criterion_main!(benches);
