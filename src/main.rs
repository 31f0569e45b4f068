use anyhow::{Context, Result};
use campagne::{
    config::Config,
    fetch::Source,
    site::{self, BuildContext},
};
use reqwest::Client;
use std::collections::BTreeMap;
use tokio::fs;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env()?;

    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!(data = %cfg.data, out = %cfg.out_dir.display(), "startup");

    // ─── 2) configure source + output dir ────────────────────────────
    let client = Client::new();
    let source = Source::parse(&cfg.data, &client)?;
    fs::create_dir_all(&cfg.out_dir)
        .await
        .with_context(|| format!("creating output directory {:?}", &cfg.out_dir))?;

    let ctx = BuildContext {
        today: cfg.today(),
        default_author: cfg.author.clone(),
    };
    info!(today = %ctx.today, "building sections");

    // ─── 3) load + render every section concurrently ─────────────────
    let results = site::build_all(&source, &ctx).await;

    // ─── 4) write fragments + site.json ──────────────────────────────
    let mut data = BTreeMap::new();
    let mut failed = 0;
    for (section, result) in results {
        match result {
            Ok(fragment) => {
                let path = cfg.out_dir.join(format!("{}.html", section.slug()));
                fs::write(&path, &fragment.html)
                    .await
                    .with_context(|| format!("writing {}", path.display()))?;
                info!(section = section.slug(), path = %path.display(), "wrote fragment");
                data.insert(section.slug(), fragment.data);
            }
            Err(e) => {
                // the page keeps whatever it had for this section
                error!(section = section.slug(), "section skipped: {:#}", e);
                failed += 1;
            }
        }
    }

    let json_path = cfg.out_dir.join("site.json");
    let json = serde_json::to_string_pretty(&data).context("serializing site data")?;
    fs::write(&json_path, json)
        .await
        .with_context(|| format!("writing {}", json_path.display()))?;

    if failed > 0 {
        warn!(failed, "done with skipped sections");
    } else {
        info!("done");
    }
    Ok(())
}
