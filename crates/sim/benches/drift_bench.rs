use codondrift_sim::analysis::{nucleotide_similarity, protein_similarity};
use codondrift_sim::base::Sequence;
use codondrift_sim::evolution::{diverge, mutate};
use codondrift_sim::simulation::{NoProgress, SimulationBuilder, TrialContext};
use codondrift_sim::translation::translate;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

fn bench_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutation");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

    for len in [150, 1_500, 15_000] {
        let mut seq = Sequence::random(len, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::new("mutate", len), &len, |b, _| {
            b.iter(|| black_box(mutate(&mut seq, &mut rng).unwrap()))
        });
    }

    let target = Sequence::random(150, &mut rng).unwrap();
    group.bench_function("diverge_3pct_150", |b| {
        b.iter(|| {
            let mut copy = target.clone();
            black_box(diverge(&mut copy, 3.0, &mut rng).unwrap());
        })
    });

    group.finish();
}

fn bench_translation(c: &mut Criterion) {
    let mut group = c.benchmark_group("translation");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

    for len in [150, 1_500, 15_000] {
        let seq = Sequence::random(len, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::new("translate", len), &seq, |b, seq| {
            b.iter(|| black_box(translate(black_box(seq))))
        });
    }

    group.finish();
}

fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let a = Sequence::random(150, &mut rng).unwrap();
    let b_seq = Sequence::random(150, &mut rng).unwrap();
    let pa = translate(&a);
    let pb = translate(&b_seq);

    group.bench_function("nucleotide_150", |b| {
        b.iter(|| black_box(nucleotide_similarity(black_box(&a), black_box(&b_seq)).unwrap()))
    });
    group.bench_function("protein_50", |b| {
        b.iter(|| black_box(protein_similarity(black_box(&pa), black_box(&pb)).unwrap()))
    });

    group.finish();
}

fn bench_trials(c: &mut Criterion) {
    let mut group = c.benchmark_group("trials");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let target = Sequence::random(150, &mut rng).unwrap();
    let protein = translate(&target);
    let mut start = target.clone();
    diverge(&mut start, 3.0, &mut rng).unwrap();
    let ctx = TrialContext::new(&target, &protein, &start, 75);
    let mut working = start.clone();

    group.bench_function("single_trial_cap_75", |b| {
        b.iter(|| black_box(ctx.run(&mut working, &mut rng).unwrap()))
    });

    group.sample_size(10);
    for parallel in [false, true] {
        let name = if parallel { "parallel" } else { "sequential" };
        group.bench_function(BenchmarkId::new("run_100k", name), |b| {
            b.iter(|| {
                let mut sim = SimulationBuilder::new()
                    .trials(100_000)
                    .parallel(parallel)
                    .seed(7)
                    .build()
                    .unwrap();
                black_box(sim.run(&NoProgress).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_mutation,
    bench_translation,
    bench_similarity,
    bench_trials
);
criterion_main!(benches);
