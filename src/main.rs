// SPDX-License-Identifier: MPL-2.0
use iced_clips::app::{self, paths, playlist, Flags};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter, checked before `RUST_LOG`.
const LOG_ENV: &str = "ICED_CLIPS_LOG";

const USAGE: &str = "\
Usage: iced_clips [OPTIONS] [PLAYLIST.toml | FILE...]

Options:
  --lang <LOCALE>      UI language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml and playlist.toml
  -h, --help           Print this help
";

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| tracing_subscriber::EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| "iced_clips=info,wgpu=warn".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let lang: Option<String> = match args.opt_value_from_str("--lang") {
        Ok(lang) => lang,
        Err(error) => return usage_error(&error),
    };
    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(error) => return usage_error(&error),
    };
    let inputs: Vec<PathBuf> = args
        .finish()
        .into_iter()
        .map(|arg: OsString| PathBuf::from(arg))
        .collect();

    paths::init_cli_override(config_dir);

    let videos = match playlist::from_inputs(&inputs) {
        Ok(videos) => videos,
        Err(error) => {
            tracing::error!(%error, "could not load playlist");
            eprintln!("iced_clips: {error}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting iced_clips");
    match app::run(Flags { lang, videos }) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}

fn usage_error(error: &pico_args::Error) -> ExitCode {
    eprintln!("iced_clips: {error}\n\n{USAGE}");
    ExitCode::from(2)
}
