use tsgen_cli::TsgenCli;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    TsgenCli::new().parse_and_run()
}
