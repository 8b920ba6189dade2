use criterion::{black_box, criterion_group, criterion_main, Criterion};
use unicode_case_benches::{read_ucd, sequences, MEASUREMENT_TIME, UCD_DIR, WARM_UP_TIME};
use unicode_case_prepare::{merge, prepare, MergePolicy, SequencePacker};

#[inline(never)]
fn pack(sequences: &[Vec<u32>]) -> usize
{
    let mut packer = SequencePacker::<u32>::new();

    for sequence in sequences {
        packer.pack(sequence.as_slice());
    }

    packer.len()
}

fn packer(c: &mut Criterion)
{
    let mut group = c.benchmark_group("packer");
    let sequences = sequences(&read_ucd(UCD_DIR));

    group.warm_up_time(core::time::Duration::from_secs(WARM_UP_TIME));
    group.measurement_time(core::time::Duration::from_secs(MEASUREMENT_TIME));

    group.bench_function("special_casing", |b| b.iter(|| pack(black_box(&sequences))));

    group.finish();
}

fn tables(c: &mut Criterion)
{
    let mut group = c.benchmark_group("tables");
    let ucd = read_ucd(UCD_DIR);

    group.warm_up_time(core::time::Duration::from_secs(WARM_UP_TIME));
    group.measurement_time(core::time::Duration::from_secs(MEASUREMENT_TIME));

    for policy in [MergePolicy::Replace, MergePolicy::Fallback] {
        let name = format!("{:?}", policy).to_lowercase();

        group.bench_with_input(
            criterion::BenchmarkId::new("merge", &name),
            &policy,
            |b, &policy| b.iter(|| merge(policy, black_box(&ucd.default_mappings), black_box(&ucd.special_casings))),
        );

        group.bench_with_input(
            criterion::BenchmarkId::new("prepare", &name),
            &policy,
            |b, &policy| b.iter(|| prepare(black_box(&ucd), policy)),
        );
    }

    group.finish();
}

criterion_group!(benches, packer, tables);
criterion_main!(benches);
