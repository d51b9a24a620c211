use std::process::ExitCode;

fn main() -> ExitCode {
    match clinicdesk_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
