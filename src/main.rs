use dusty::cli::{Args, RetentionConfig, Runner};
use dusty::error::handlers::HttpErrorHandler;
use dusty::logging::{self, Logger};
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    logging::init_tracing(args.verbose);
    let output = Logger::new(args.verbose);

    let config = match args.fill_from_env().and_then(RetentionConfig::from_args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Invalid input parameter or environment variable usage.");
            eprintln!("Please use the (-h)elp menu.");
            eprintln!();
            Args::print_examples();
            process::exit(1);
        }
    };

    if let Err(e) = Runner::new(config).run().await {
        output.error(&e.to_string());
        if let Some(hint) = e.status().and_then(HttpErrorHandler::status_hint) {
            output.error(hint);
        }
        process::exit(1);
    }
}
