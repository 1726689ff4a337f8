use std::path::Path;
use std::process::ExitCode;

use anyhow::bail;

use gist::core::config::EngineConfig;
use gist::Engine;

/// Command-line front door for the engine, mirroring how the host
/// application calls it: one path or URL in, one synopsis out.
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    gist::setup_logging();

    let mut target: Option<String> = None;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ if target.is_none() => target = Some(arg),
            _ => bail!("unexpected argument: {arg}"),
        }
    }
    let Some(target) = target else {
        bail!("usage: gist <path-or-url> [--json]");
    };

    let engine = Engine::with_config(EngineConfig::from_env());
    let result = if target.starts_with("http://") || target.starts_with("https://") {
        engine.summarize_url(&target).await
    } else {
        engine.summarize_local(Path::new(&target)).await
    };

    match result {
        Ok(summary) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", summary.body);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}
