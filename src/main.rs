#![doc = include_str!("../README.md")]

use clap::Parser;
use core::error::Error;
use env_logger::{Builder, Env};
use log::LevelFilter;
use slotpage::{
    Config, HttpDataSource, PageComposer, RenderFormat, RenderOptions, ReqwestHttpClient,
};
use std::{path::PathBuf, process::exit};
use tokio::io::stdout;
use url::Url;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// A configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// A template file.
    #[arg(long)]
    template: Option<PathBuf>,
    /// An endpoint URL of records.
    #[arg(long)]
    endpoint: Option<Url>,
    /// Sets an output format.
    #[arg(long, value_enum, default_value_t = RenderFormat::Html)]
    format: RenderFormat,
    /// Becomes verbose.
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{error}");
        exit(1)
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let Arguments {
        config,
        template,
        endpoint,
        format,
        verbose,
    } = Arguments::parse();

    let mut logger = Builder::from_env(Env::default().default_filter_or("warn"));

    if verbose {
        logger.filter_level(LevelFilter::Debug);
    }

    logger.init();

    let mut config = if let Some(path) = &config {
        slotpage::compile_config(slotpage::read_config(path).await?)?
    } else {
        Config::default()
    };

    if let Some(path) = template {
        config = config.set_template_path(path);
    }

    if let Some(endpoint) = endpoint {
        config = config.set_endpoint(endpoint);
    }

    let data_source = HttpDataSource::new(
        ReqwestHttpClient::new()?,
        config.endpoint().clone(),
        config.headers().clone(),
    );
    let nodes = PageComposer::new(config, data_source).compose().await?;

    slotpage::render_page(
        &nodes,
        &RenderOptions::default().set_format(format),
        &mut stdout(),
    )
    .await?;

    Ok(())
}
