//! patchserver-deploy - packages the patch server into per-platform ZIP releases.
//!
//! Exit code 0 = every archive listed in the summary exists.

use patchserver_deploy::cli::{self, RuntimeConfig};
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = cli::parse_args();
    let runtime_config = RuntimeConfig::from(&args);
    let output = runtime_config.output();

    // Run CLI and get exit code; Ctrl-C aborts between or during steps
    let exit_code = tokio::select! {
        result = cli::run(&args, &runtime_config) => match result {
            Ok(code) => code,
            Err(e) => {
                output.error(&format!("Critical error: {e}"));
                1
            }
        },
        Ok(()) = tokio::signal::ctrl_c() => {
            output.warn("Interrupted by user");
            1
        }
    };

    process::exit(exit_code);
}
