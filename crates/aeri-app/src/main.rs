use clap::Parser;

use aeri_app::cli::Args;
use aeri_app::error::AppError;

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    aeri_app::run(&args)?;
    Ok(())
}
