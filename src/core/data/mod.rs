pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod point;
pub mod raster_size;
pub mod render_request;
pub mod viewport;
