// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use sticker_smash::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        image_path: args.finish().into_iter().next().map(PathBuf::from),
    };

    app::run(flags)
}
