// Line protocol front end, see `keypad_core::protocol` for the commands.
use keypad_core::logging::init_logging;
use keypad_core::protocol::run_protocol;
use keypad_core::{AdapterConfig, KeypadForm};
use std::io;
use std::path::PathBuf;

fn get_log_dir() -> PathBuf {
    let mut path = PathBuf::from("target");
    path.push("keypad_sim_logs");
    path
}

fn main() -> io::Result<()> {
    let config = AdapterConfig::from_env_or_report(&mut io::stderr());
    if let Err(e) = init_logging(&config.log_level, &get_log_dir()) {
        eprintln!("[WARN] Logging disabled: {}", e);
    }

    let mut form = KeypadForm::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_protocol(&mut form, stdin.lock(), &mut stdout)
}
