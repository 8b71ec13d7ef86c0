use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `buffer` as a binary (P6) PPM image.
pub fn encode_ppm<W: Write>(writer: &mut W, buffer: &PixelBuffer) -> std::io::Result<()> {
    let size = buffer.size();

    // P6 header: magic, dimensions, max channel value
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", size.width(), size.height())?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())?;

    Ok(())
}

#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(filepath)?);

        encode_ppm(&mut writer, buffer)?;
        writer.flush()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
