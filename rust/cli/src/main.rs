fn main() {
    yahtzee_cli::logging::init_logging();
    let mut out = std::io::stdout();
    let mut err = std::io::stderr();
    let code = yahtzee_cli::run(std::env::args(), &mut out, &mut err);
    std::process::exit(code);
}
