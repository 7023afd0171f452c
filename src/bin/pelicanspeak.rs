//! PelicanSpeak command-line binary

fn main() -> anyhow::Result<()> {
    pelicanspeak::cli::run_cli()
}
