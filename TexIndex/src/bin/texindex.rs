fn main() -> anyhow::Result<()> {
    texindex::cli::run_cli()
}
