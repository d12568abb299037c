use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = drush_module::cli::Cli::parse();
    drush_module::logging::init_with(cli.log_file.clone());

    let response = drush_module::run(&cli);
    println!("{}", response.to_json()?);
    if response.failed() {
        std::process::exit(1);
    }
    Ok(())
}
