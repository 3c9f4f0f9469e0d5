//! Replay entry point.

use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: joystick-replay <trace.json>");
        return ExitCode::from(2);
    };
    log::info!("Replaying {}", path.display());

    let result = joystick_app::Trace::load(&path).and_then(|trace| joystick_app::replay(&trace));
    match result {
        Ok(callbacks) => {
            for callback in callbacks {
                println!("{}", callback);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Replay failed: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
