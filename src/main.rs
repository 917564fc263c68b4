// SPDX-License-Identifier: MPL-2.0
use ayush_hub::app::{self, paths, Flags};
use ayush_hub::logging;
use std::path::PathBuf;

const HELP: &str = "\
AYUSH Startup Portal

USAGE:
  ayush_hub [OPTIONS] [IMAGE...]

OPTIONS:
  -h, --help              Print this help
  --lang <ID>             UI language (e.g. en-US, fr)
  --config-dir <DIR>      Directory holding settings.toml
                          (overrides AYUSH_HUB_CONFIG_DIR)
  --log <FILTER>          Log filter, e.g. ayush_hub=debug
                          (overrides AYUSH_HUB_LOG)

ARGS:
  [IMAGE...]              Images to add to the gallery on startup
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        eprintln!("ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|err| {
            eprintln!("ignoring --config-dir: {err}");
            None
        });
    let log: Option<String> = args.opt_value_from_str("--log").unwrap_or_else(|err| {
        eprintln!("ignoring --log: {err}");
        None
    });
    let files: Vec<PathBuf> = args.finish().into_iter().map(PathBuf::from).collect();

    logging::init(log);
    paths::init_cli_override(config_dir);

    app::run(Flags { lang, files })
}
