use clap::Parser;
use tsnew::AppError;

#[derive(Parser)]
#[command(name = "tsnew")]
#[command(version)]
#[command(
    about = "Scaffold a ready-to-use TypeScript project in the current directory",
    long_about = None
)]
struct Cli {
    /// Project name written into the manifest (lower-cased)
    project_name: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = tsnew::init(cli.project_name.as_deref()).map(|_| ());

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
