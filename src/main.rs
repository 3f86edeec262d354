use std::process::ExitCode;

fn main() -> ExitCode {
    depinject::app::startup::startup()
}
