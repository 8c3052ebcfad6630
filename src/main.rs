use lightbox::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        slideshow: args.contains("--slideshow"),
        slideshow_interval_secs: args.opt_value_from_str("--interval").ok().flatten(),
        path: args
            .finish()
            .into_iter()
            .next()
            .map(PathBuf::from),
    };

    app::run(flags)
}
