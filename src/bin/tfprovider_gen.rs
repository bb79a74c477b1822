fn main() {
    if let Err(err) = tfprovider_gen::cli::run_cli() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
