use criterion::{criterion_group, criterion_main, Criterion};
use tweenkit_core::{Config, Ease, Scheduler};

fn tween_step(c: &mut Criterion) {
    c.bench_function("tick_1k_tweens", |b| {
        let mut sched = Scheduler::new(Config {
            tween_capacity: 1024,
            ..Config::default()
        });
        for i in 0..1_000usize {
            let id = sched.create(1_000.0, |_| {}).unwrap();
            sched.set_ease(id, Ease::ALL[i % Ease::ALL.len()]).unwrap();
        }
        // Promote everything to Running before measuring steady-state ticks.
        sched.tick(0.0);
        b.iter(|| sched.tick(1e-6));
    });

    c.bench_function("easing_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for ease in Ease::ALL {
                for i in 0..=100 {
                    acc += ease.apply(i as f32 / 100.0);
                }
            }
            acc
        });
    });
}

criterion_group!(benches, tween_step);
criterion_main!(benches);
