//! Command-line mapping for the miyuki downloader.
//!
//! miyuki takes single-dash options named after the form fields
//! (`-urls a b -ffmpeg -quality 720`). Options are emitted in field order;
//! unset flags and absent values are left out entirely.

use miyuki_core::{JobConfig, OptionValue};

/// Build the option arguments for one job.
pub fn build_args(config: &JobConfig) -> Vec<String> {
    let mut args = Vec::new();

    for (name, value) in config.values() {
        match value {
            OptionValue::Flag(true) => args.push(option_switch(name)),
            OptionValue::Text(Some(text)) => {
                args.push(option_switch(name));
                args.push(text);
            }
            OptionValue::TextList(Some(tokens)) => {
                args.push(option_switch(name));
                args.extend(tokens);
            }
            OptionValue::Flag(false) | OptionValue::Text(None) | OptionValue::TextList(None) => {}
        }
    }

    args
}

fn option_switch(name: &str) -> String {
    format!("-{name}")
}
