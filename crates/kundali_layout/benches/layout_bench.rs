use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_base::Rashi;
use kundali_layout::{BodyGlyph, LayoutSettings, house_polygons, layout};

fn crowded() -> [Vec<BodyGlyph>; 12] {
    let mut houses: [Vec<BodyGlyph>; 12] = Default::default();
    for (i, sym) in ["Su", "Mo", "Ma", "Me", "Ju", "Ve", "Sa", "Ra", "Ke"].iter().enumerate() {
        houses[i % 4].push(BodyGlyph::new(*sym).with_superscript("R"));
    }
    houses
}

fn polygons_bench(c: &mut Criterion) {
    c.bench_function("house_polygons", |b| b.iter(|| house_polygons(black_box(400.0))));
}

fn layout_bench(c: &mut Criterion) {
    let bodies = crowded();
    let settings = LayoutSettings::default();
    c.bench_function("layout", |b| {
        b.iter(|| layout(black_box(Rashi::Simha), &bodies, &settings))
    });
}

criterion_group!(benches, polygons_bench, layout_bench);
criterion_main!(benches);
