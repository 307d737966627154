use anyhow::{Context, Result};
use fxnc_fetch::{Cli, FetchConfig, Fetcher, HttpTransport};
use log::error;

fn main() {
    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{} {} {}:{}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("FATAL: Failed to create Tokio runtime: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = rt.block_on(real_main()) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn real_main() -> Result<()> {
    let cli = Cli::parse_args();
    let config = FetchConfig::from_cli(&cli).context("Failed to load configuration")?;
    let transport = HttpTransport::new(config.timeout).context("Failed to build HTTP client")?;
    let fetcher = Fetcher::new(config, transport);

    fetcher
        .run(cli.version.as_deref(), &mut |event| println!("{event}"))
        .await
        .context("Failed to fetch Function libraries")?;
    Ok(())
}
