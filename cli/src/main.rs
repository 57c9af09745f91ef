use clap::Parser;

fn main() -> anyhow::Result<()> {
  compstat::logging::init();
  compstat::run(compstat::Args::parse())
}
