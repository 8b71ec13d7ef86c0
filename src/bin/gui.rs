fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let command = fractal_viewer::RunGuiCommand::default();
    command.execute()?;

    Ok(())
}
