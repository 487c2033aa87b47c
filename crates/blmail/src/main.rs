use std::process::ExitCode;

fn main() -> ExitCode {
    match blmail::run(std::env::args().collect()) {
        Ok(exit) => exit.report(),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
