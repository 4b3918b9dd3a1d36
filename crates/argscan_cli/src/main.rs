#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod args;
mod commands;
mod decl;

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    let args = match args::parse_args(&argv) {
        Ok(v) => v,
        Err(diagnostics) => {
            eprintln!("{}", argscan_syntax::render_diagnostics(&diagnostics));
            eprintln!("{}", args::usage());
            std::process::exit(2);
        }
    };

    if args.help {
        println!("{}", args::usage());
        println!();
        println!("{}", args::options_help());
        return;
    }

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format_timestamp_secs()
        .init();

    let code = commands::inspect::run(&args);
    if code != 0 {
        std::process::exit(code);
    }
}
