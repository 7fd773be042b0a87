use num_traits::ToPrimitive;
use sportrank::driver::run;
use sportrank::errors::ExitCode;
use std::io;

fn main() {
    let code = run(std::env::args_os(), io::stdin().lock(), io::stdout().lock());
    std::process::exit(code.to_i32().unwrap_or(ExitCode::InternalError as i32));
}
