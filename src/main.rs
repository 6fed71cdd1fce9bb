// SPDX-License-Identifier: MPL-2.0
use iced_vitrine::app::{self, paths, Flags};
use iced_vitrine::page::manifest;
use pico_args;
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap();
    let i18n_dir = args.opt_value_from_str("--i18n-dir").unwrap();
    let content_dir: Option<PathBuf> = args.opt_value_from_str("--content-dir").unwrap();
    let data_dir = args.opt_value_from_str("--data-dir").unwrap();
    let config_dir = args.opt_value_from_str("--config-dir").unwrap();

    paths::init_cli_overrides(data_dir, config_dir);

    // A manifest named by --content-dir that cannot be read or parsed is an
    // operator error; the embedded manifest degrades to an empty page and a
    // toast instead.
    let (page, content_warning) = match manifest::load(content_dir.as_deref()) {
        Ok(loaded) => loaded,
        Err(error) => {
            eprintln!("cannot load showcase manifest: {error}");
            std::process::exit(2);
        }
    };

    let flags = Flags {
        lang,
        i18n_dir,
        content_dir,
        page,
        content_warning,
    };

    app::run(flags)
}
