use criterion::{black_box, criterion_group, criterion_main, Criterion};
use drivesim_bt::{Node, ParallelPolicy, Status};
use drivesim_core::{TickContext, TrafficEvent};

struct IdleCriterion;

impl drivesim_bt::Criterion for IdleCriterion {
    fn name(&self) -> &str {
        "idle"
    }

    fn tick(&mut self, _ctx: &TickContext) -> Status {
        Status::Running
    }

    fn events(&self) -> &[TrafficEvent] {
        &[]
    }
}

fn bench_tree_tick(c: &mut Criterion) {
    let children = (0..32)
        .map(|_| Node::criterion(Box::new(IdleCriterion)))
        .collect::<Vec<_>>();
    let mut root = Node::parallel("bench", ParallelPolicy::SuccessOnAll, children);

    let mut frame: u64 = 0;
    c.bench_function("drivesim-bt/tick(criteria=32)", |b| {
        b.iter(|| {
            let ctx = TickContext {
                frame,
                game_time: frame as f64 * 0.05,
                dt: 0.05,
            };
            black_box(root.tick_once(&ctx));
            frame = frame.wrapping_add(1);
        })
    });
}

criterion_group!(benches, bench_tree_tick);
criterion_main!(benches);
