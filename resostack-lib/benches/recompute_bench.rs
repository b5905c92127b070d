use criterion::{Criterion, black_box, criterion_group, criterion_main};
use resostack::{Database, EnergyGrid, MemoryProvider, Resonance};
use resostack_data::{IsotopeInfo, SigmaTable};

const DB: Database = Database::EndfViii;

fn table(base: f64) -> SigmaTable {
    SigmaTable {
        energy_ev: vec![1e-5, 1.0, 10.0, 100.0, 1e3, 1e8],
        sigma_b: vec![5.0 * base, 4.0 * base, 3.0 * base, 2.0 * base, base, base],
    }
}

fn provider() -> MemoryProvider {
    let mut p = MemoryProvider::new();
    p.insert_isotope(
        DB,
        "Co",
        "58-Co",
        "Co-58.csv",
        IsotopeInfo {
            mass: 57.9357576,
            natural_abundance: 0.0,
            density: 8.7494,
        },
    );
    p.insert_isotope(
        DB,
        "Co",
        "59-Co",
        "Co-59.csv",
        IsotopeInfo {
            mass: 58.9332002,
            natural_abundance: 1.0,
            density: 8.9,
        },
    );
    p.insert_isotope(
        DB,
        "Ag",
        "107-Ag",
        "Ag-107.csv",
        IsotopeInfo {
            mass: 106.905093,
            natural_abundance: 0.51839,
            density: 10.4062,
        },
    );
    p.insert_isotope(
        DB,
        "Ag",
        "109-Ag",
        "Ag-109.csv",
        IsotopeInfo {
            mass: 108.904756,
            natural_abundance: 0.48161,
            density: 10.6009,
        },
    );
    p.insert_table(DB, "Co-58.csv", table(8.0));
    p.insert_table(DB, "Co-59.csv", table(37.2));
    p.insert_table(DB, "Ag-107.csv", table(34.0));
    p.insert_table(DB, "Ag-109.csv", table(4.0));
    p
}

fn engine() -> Resonance<MemoryProvider> {
    let grid = EnergyGrid::new(1.0, 300.0, 0.01).unwrap();
    let mut reso = Resonance::new(provider(), DB, grid).unwrap();
    reso.add_layer("CoAg", 0.025, None).unwrap();
    reso
}

fn bench_full_recompute(c: &mut Criterion) {
    let mut reso = engine();

    c.bench_function("set_isotopic_ratio_full_chain", |b| {
        b.iter(|| {
            reso.set_isotopic_ratio(black_box("CoAg"), black_box("Co"), black_box(&[0.5, 0.5]))
                .unwrap();
        });
    });
}

fn bench_density_fast_path(c: &mut Criterion) {
    let mut reso = engine();

    c.bench_function("set_density_signal_only", |b| {
        b.iter(|| {
            reso.set_density(black_box("CoAg"), black_box("Ag"), black_box(10.8))
                .unwrap();
        });
    });
}

fn bench_add_layer(c: &mut Criterion) {
    let mut reso = engine();

    c.bench_function("add_layer_replace_coag", |b| {
        b.iter(|| {
            reso.add_layer(black_box("CoAg"), black_box(0.025), black_box(None))
                .unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_full_recompute,
    bench_density_fast_path,
    bench_add_layer
);
criterion_main!(benches);
