use anyhow::Result;

use crate::cli::ValueArgs;
use crate::config::ScorecardConfig;
use crate::io::{ClipboardSink, SystemClipboard};
use crate::output::summary::to_summary_text_with;

pub fn summary(
    config: &ScorecardConfig,
    values: &ValueArgs,
    copy: bool,
    plain: bool,
    clipboard: &mut dyn ClipboardSink,
) -> Result<()> {
    let emoji = !plain && config.formatting().emoji.should_use_emoji();
    let mut session = super::build_session(config, values)?.with_emoji(emoji);
    let snapshot = session.snapshot();

    print!(
        "{}",
        to_summary_text_with(
            &snapshot.assessment,
            snapshot.aggregate,
            &snapshot.insight,
            emoji
        )
    );

    if copy {
        // Failure is a status message, not an error exit.
        eprintln!("{}", session.copy_summary(clipboard));
    }
    Ok(())
}

pub fn summary_to_system_clipboard(
    config: &ScorecardConfig,
    values: &ValueArgs,
    copy: bool,
    plain: bool,
) -> Result<()> {
    if copy && SystemClipboard::holds_selection() {
        eprintln!("Holding the clipboard until another application takes it over");
    }
    summary(config, values, copy, plain, &mut SystemClipboard)
}
