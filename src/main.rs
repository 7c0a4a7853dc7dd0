use dkc::args::Args;
use dkc::batch::{self, Options};
use simple_logger::SimpleLogger;

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();

    SimpleLogger::new()
        .with_level(args.command.log().to_level_filter())
        .init()?;

    batch::run(&Options::from(args.command))
}
