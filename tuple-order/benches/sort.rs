use criterion::{
    criterion_group, criterion_main, measurement::WallTime, BatchSize, BenchmarkGroup, Criterion,
};
use tuple_order::{dynamic::DynOrder, order, row};

const ROWS: u32 = 1_000;

type Row = (Option<String>, u32, Option<char>);

fn rows() -> Vec<Row> {
    (0..ROWS)
        .map(|i| {
            let name = if i % 7 == 0 {
                None
            } else {
                Some(format!("name-{}", (i * 7919) % 97))
            };
            let initial = std::char::from_u32('a' as u32 + i % 26).filter(|_| i % 3 != 0);
            (name, (i * 31) % 13, initial)
        })
        .collect()
}

fn bench_sort<T, F>(g: &mut BenchmarkGroup<WallTime>, name: &str, input: &[Row], prepare: F)
where
    F: Fn(Row) -> T,
    T: Ord,
{
    g.bench_function(name, |b| {
        b.iter_batched(
            || input.iter().cloned().map(&prepare).collect::<Vec<_>>(),
            |mut v| v.sort(),
            BatchSize::SmallInput,
        )
    });
}

fn bench_static(c: &mut Criterion) {
    let input = rows();
    let mut g = c.benchmark_group("sort");
    bench_sort(&mut g, "native", &input, |row| row);
    bench_sort(&mut g, "ordered", &input, order);
    g.finish();
}

fn bench_dynamic(c: &mut Criterion) {
    let input = rows();
    let chain = DynOrder::terminal()
        .prepend::<Option<char>>()
        .prepend::<u32>()
        .prepend::<Option<String>>();
    c.bench_function("sort/dynamic", |b| {
        b.iter_batched(
            || {
                input
                    .iter()
                    .cloned()
                    .map(|(name, n, initial)| row![name, n, initial])
                    .collect::<Vec<_>>()
            },
            |v| chain.sort(v),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_static, bench_dynamic);
criterion_main!(benches);
