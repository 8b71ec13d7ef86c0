use std::path::Path;
use std::time::Instant;

use log::info;

use crate::controllers::interactive::errors::SessionError;
use crate::controllers::interactive::session::Session;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::render_frame::render_request;
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::config::ViewerConfig;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::fractal_kinds::FractalKind;

/// Renders the start view once and hands it to a file presenter.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(
        &mut self,
        config: ViewerConfig,
        fractal: FractalKind,
    ) -> Result<(), SessionError> {
        let mut session = Session::new(config)?;
        session.set_fractal(fractal);

        let request = session.render_request();
        let colour_map = colour_map_factory(session.colour_map());
        let mut buffer = PixelBuffer::new(session.size());

        info!(
            "rendering {} snapshot at {}x{} with {} iterations",
            fractal,
            session.size().width(),
            session.size().height(),
            request.max_iterations
        );

        let start = Instant::now();
        render_request(&mut buffer, &request, &*colour_map);
        info!("rendered in {:?}", start.elapsed());

        self.buffer = Some(buffer);

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, &filepath)?;
            info!("wrote {}", filepath.as_ref().display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingFilePresenter {
        writes: RefCell<Vec<(PathBuf, usize)>>,
    }

    impl FilePresenterPort for RecordingFilePresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.writes
                .borrow_mut()
                .push((filepath.as_ref().to_path_buf(), buffer.buffer_size()));
            Ok(())
        }
    }

    fn config() -> ViewerConfig {
        ViewerConfig {
            width: 32,
            height: 18,
            ..ViewerConfig::default()
        }
    }

    #[test]
    fn test_write_before_generate_does_nothing() {
        let controller = SnapshotController::new(RecordingFilePresenter::default());

        controller.write("unused.ppm").unwrap();

        assert!(controller.presenter.writes.borrow().is_empty());
    }

    #[test]
    fn test_generate_then_write_presents_full_frame() {
        let mut controller = SnapshotController::new(RecordingFilePresenter::default());

        controller.generate(config(), FractalKind::Mandelbrot).unwrap();
        controller.write("out.ppm").unwrap();

        let writes = controller.presenter.writes.borrow();
        assert_eq!(writes.as_slice(), &[(PathBuf::from("out.ppm"), 32 * 18 * 3)]);
    }

    #[test]
    fn test_fractal_kind_changes_output() {
        // wide enough to hold escaped pixels for both fractals
        let config = ViewerConfig {
            width: 64,
            height: 36,
            start_zoom: 10.0,
            ..ViewerConfig::default()
        };
        let mut mandelbrot = SnapshotController::new(RecordingFilePresenter::default());
        let mut julia = SnapshotController::new(RecordingFilePresenter::default());

        mandelbrot.generate(config, FractalKind::Mandelbrot).unwrap();
        julia.generate(config, FractalKind::Julia).unwrap();

        let mandelbrot = mandelbrot.buffer().unwrap().buffer();
        let julia = julia.buffer().unwrap().buffer();
        assert!(mandelbrot.iter().any(|&b| b != 0));
        assert!(julia.iter().any(|&b| b != 0));
        assert_ne!(mandelbrot, julia);
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        let mut controller = SnapshotController::new(RecordingFilePresenter::default());
        let config = ViewerConfig {
            height: 0,
            ..config()
        };

        assert!(controller.generate(config, FractalKind::Mandelbrot).is_err());
        assert!(controller.buffer().is_none());
    }
}
