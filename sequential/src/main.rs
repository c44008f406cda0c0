use anyhow::Context;
use clap::Parser;
use common::init_logger;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::info;

mod app;

use app::App;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(short, long)]
    app_name: String,
    /// Run collectors on the rayon pool instead of in one pass.
    #[arg(short, long)]
    parallel: bool,
    /// Defaults to `mr-<app>-seq`.
    #[arg(short, long)]
    output: Option<PathBuf>,
    input_files: Vec<PathBuf>,
}

async fn read_inputs(files: &[PathBuf]) -> anyhow::Result<String> {
    let mut text = String::new();
    for file in files {
        let content = tokio::fs::read_to_string(file)
            .await
            .with_context(|| format!("failed to read {}", file.display()))?;
        text.push_str(&content);
        text.push('\n');
    }
    Ok(text)
}

fn write_output(path: &Path, lines: &[String]) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut output_file = BufWriter::new(file);
    for line in lines {
        writeln!(output_file, "{}", line)?;
    }
    output_file.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // before the runtime spawns workers, so the local offset is readable
    let _guard = init_logger();
    let cli = Cli::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let app = App::load(&cli.app_name)?;

    info!(
        app = app.name(),
        files = cli.input_files.len(),
        parallel = cli.parallel,
        "start"
    );
    let text = read_inputs(&cli.input_files).await?;

    let parallel = cli.parallel;
    let lines = tokio::task::spawn_blocking(move || app.run(&text, parallel)).await?;

    let path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("mr-{}-seq", app.name())));
    write_output(&path, &lines)?;
    info!(lines = lines.len(), output = %path.display(), "done");

    Ok(())
}
