//! Kodegen Bundler UPX - post-build binary compression.
//!
//! This binary locates or downloads UPX and compresses the application
//! binary produced by the release build.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging, defaulting to progress messages
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Run CLI and get exit code
    let exit_code = match kodegen_bundler_upx::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
