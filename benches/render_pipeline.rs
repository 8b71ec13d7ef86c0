use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fractal_viewer::{
    ColourMapKind, Complex, MandelbrotAlgorithm, PixelBuffer, RasterSize, Viewport,
    colour_map_factory, render_frame, render_frame_serial,
};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 360;
const BAIL_OUT: f64 = 4.0;

fn bench_render(c: &mut Criterion) {
    let size = RasterSize::new(WIDTH, HEIGHT).unwrap();
    let viewport = Viewport::new(Complex::new(-0.5, 0.0), 100.0).unwrap();
    let colour_map = colour_map_factory(ColourMapKind::Sinusoidal);
    let mut group = c.benchmark_group("render_frame");

    for max_iterations in [64, 256, 1024] {
        let algorithm = MandelbrotAlgorithm::new(max_iterations, BAIL_OUT);
        let mut frame = PixelBuffer::new(size);

        group.bench_with_input(
            BenchmarkId::new("rayon_rows", max_iterations),
            &max_iterations,
            |b, &max_iterations| {
                b.iter(|| {
                    render_frame(
                        &mut frame,
                        black_box(&viewport),
                        &algorithm,
                        &*colour_map,
                        max_iterations,
                    )
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("serial", max_iterations),
            &max_iterations,
            |b, &max_iterations| {
                b.iter(|| {
                    render_frame_serial(
                        &mut frame,
                        black_box(&viewport),
                        &algorithm,
                        &*colour_map,
                        max_iterations,
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
