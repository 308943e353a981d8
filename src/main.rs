// SPDX-License-Identifier: MPL-2.0
use birthday_wish::app::{self, Flags};
use birthday_wish::config;
use birthday_wish::i18n::fluent::I18n;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        let lang = args.opt_value_from_str("--lang").ok().flatten();
        let i18n = I18n::new(lang, &config::Config::default());
        println!("{}", i18n.tr("cli-usage"));
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        name: args.opt_value_from_str("--name")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
