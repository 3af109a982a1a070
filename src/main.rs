use anyhow::Context;
use clap::Parser;

mod options {
    use chare::pipeline::{DEFAULT_CHARE_PATH, DEFAULT_GENERAL_PATH, DEFAULT_OUTPUT_PATH};
    use std::path::PathBuf;

    #[derive(Debug, clap::Parser)]
    #[clap(
        name = "chare",
        about = "Merge the cultural interests survey with the general survey and add the art scores of each participant"
    )]
    pub struct Args {
        /// The spreadsheet with the cultural interests answers, read from its first sheet.
        #[clap(long, short = 'c', default_value = DEFAULT_CHARE_PATH)]
        pub chare: PathBuf,
        /// The spreadsheet with the general survey, read from its first sheet.
        #[clap(long, short = 'g', default_value = DEFAULT_GENERAL_PATH)]
        pub general: PathBuf,
        /// The spreadsheet to write the merged table to. Its extension decides between xlsx and csv.
        #[clap(long, short = 'o', default_value = DEFAULT_OUTPUT_PATH)]
        pub output: PathBuf,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = options::Args::parse();
    let paths = chare::pipeline::Paths {
        chare: args.chare,
        general: args.general,
        output: args.output,
    };
    chare::run(&paths, Default::default()).with_context(|| {
        format!(
            "Could not merge '{}' and '{}' into '{}'",
            paths.chare.display(),
            paths.general.display(),
            paths.output.display()
        )
    })?;
    Ok(())
}
