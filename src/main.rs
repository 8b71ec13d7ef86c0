use std::path::PathBuf;

use fractal_viewer::{FractalKind, PpmFilePresenter, SnapshotController, ViewerConfig};

const DEFAULT_OUTPUT: &str = "output/fractal.ppm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut fractal = FractalKind::Mandelbrot;
    let mut output = PathBuf::from(DEFAULT_OUTPUT);

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--julia" => fractal = FractalKind::Julia,
            _ => output = PathBuf::from(&arg),
        }
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut controller = SnapshotController::new(PpmFilePresenter::new());

    controller.generate(ViewerConfig::default(), fractal)?;
    controller.write(&output)?;

    Ok(())
}
