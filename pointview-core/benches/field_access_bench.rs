use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pointview_core::{
    containers::PointView,
    layout::{DimTypeId, DimensionId, DimensionType},
};
use rand::{thread_rng, Rng};

const COUNT: usize = 4096;

fn view_with_storage_type(datatype: DimensionType) -> PointView {
    let mut view = PointView::new();
    view.register_dimensions(&[DimTypeId::new(DimensionId::Intensity, datatype)])
        .unwrap();
    view.resize(COUNT);
    let mut rng = thread_rng();
    for point in 0..COUNT {
        view.set_field(DimensionId::Intensity, point, rng.gen::<u8>())
            .unwrap();
    }
    view
}

fn read_all_as_f64(view: &PointView) {
    for point in 0..view.len() {
        let value = view.get_field::<f64>(DimensionId::Intensity, point).unwrap();
        black_box(value);
    }
}

fn read_all_as_field_values(view: &PointView) {
    for point in 0..view.len() {
        let value = view
            .get_field_value(DimensionId::Intensity, point)
            .unwrap();
        black_box(value);
    }
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_field");
    group.throughput(Throughput::Elements(COUNT as u64));
    for datatype in [DimensionType::U16, DimensionType::F64, DimensionType::I64] {
        let view = view_with_storage_type(datatype);
        group.bench_with_input(
            BenchmarkId::new("typed_f64", datatype),
            &view,
            |b, view| b.iter(|| read_all_as_f64(view)),
        );
        group.bench_with_input(
            BenchmarkId::new("field_value", datatype),
            &view,
            |b, view| b.iter(|| read_all_as_field_values(view)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
