use rayon::prelude::*;

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use log::debug;

struct RowContext<'a, Alg: ?Sized, CMap: ?Sized> {
    size: RasterSize,
    viewport: &'a Viewport,
    algorithm: &'a Alg,
    colour_map: &'a CMap,
    max_iterations: u32,
}

impl<Alg, CMap> RowContext<'_, Alg, CMap>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap + ?Sized,
{
    #[inline]
    fn render_row(&self, y: usize, row: &mut [u8]) {
        for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let point = self.viewport.pixel_to_complex(
                Point {
                    x: x as i32,
                    y: y as i32,
                },
                self.size,
            );
            let escape = self.algorithm.evaluate(point);
            let Colour { r, g, b } = self.colour_map.map(escape, self.max_iterations);

            pixel[0] = r;
            pixel[1] = g;
            pixel[2] = b;
        }
    }
}

/// Fills every pixel of `frame` with one rayon task per row.
///
/// Rows are disjoint slices of the buffer, so no synchronisation is needed;
/// the call returns once every row has been written.
pub fn render_frame<Alg, CMap>(
    frame: &mut PixelBuffer,
    viewport: &Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
    max_iterations: u32,
) where
    Alg: FractalAlgorithm,
    CMap: ColourMap + ?Sized,
{
    let context = RowContext {
        size: frame.size(),
        viewport,
        algorithm,
        colour_map,
        max_iterations,
    };
    let row_len = frame.row_len();

    frame
        .buffer_mut()
        .par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| context.render_row(y, row));
}

/// Single-threaded equivalent of [`render_frame`].
pub fn render_frame_serial<Alg, CMap>(
    frame: &mut PixelBuffer,
    viewport: &Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
    max_iterations: u32,
) where
    Alg: FractalAlgorithm,
    CMap: ColourMap + ?Sized,
{
    let context = RowContext {
        size: frame.size(),
        viewport,
        algorithm,
        colour_map,
        max_iterations,
    };
    let row_len = frame.row_len();

    frame
        .buffer_mut()
        .chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| context.render_row(y, row));
}

/// Picks the concrete algorithm for `request` and renders it in parallel.
pub fn render_request<CMap>(frame: &mut PixelBuffer, request: &RenderRequest, colour_map: &CMap)
where
    CMap: ColourMap + ?Sized,
{
    debug!(
        "rendering {} at ({}, {}) zoom {} with {} iterations",
        request.fractal,
        request.viewport.center().real,
        request.viewport.center().imag,
        request.viewport.zoom(),
        request.max_iterations
    );

    match request.fractal {
        FractalKind::Mandelbrot => {
            let algorithm = MandelbrotAlgorithm::new(request.max_iterations, request.bail_out);
            render_frame(frame, &request.viewport, &algorithm, colour_map, request.max_iterations);
        }
        FractalKind::Julia => {
            let algorithm =
                JuliaAlgorithm::new(request.julia_c, request.max_iterations, request.bail_out);
            render_frame(frame, &request.viewport, &algorithm, colour_map, request.max_iterations);
        }
    }
}
