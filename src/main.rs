// SPDX-License-Identifier: MPL-2.0
use fragment_panel::app::{self, paths, Flags};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        scene: args.opt_value_from_str("--scene")?,
        nudge_step: args.opt_value_from_str("--nudge-step")?,
    })
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            error!(%err, "invalid command line");
            std::process::exit(2);
        }
    };
    let unused = args.finish();
    if !unused.is_empty() {
        warn!(?unused, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
