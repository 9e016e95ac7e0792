use std::process::ExitCode;

fn main() -> ExitCode {
    match payroll_engine::app::run_payroll() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
