use std::process::ExitCode;

fn main() -> ExitCode {
    match kata::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("kata: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
