use anyhow::Result;

use crate::cli::{ShowFormat, ValueArgs};
use crate::config::ScorecardConfig;
use crate::formatting::{Formatter, FormattingConfig};
use crate::output::json::{build_report, to_json_string};
use crate::output::summary::to_summary_text_with;
use crate::output::terminal::render_terminal;

pub struct ShowConfig {
    pub values: ValueArgs,
    pub format: ShowFormat,
    pub plain: bool,
    pub verbosity: u8,
}

pub fn render_show(config: &ScorecardConfig, show: &ShowConfig) -> Result<String> {
    let session = super::build_session(config, &show.values)?;
    let snapshot = session.snapshot();

    let formatting = if show.plain {
        FormattingConfig::plain()
    } else {
        config.formatting().with_env_overrides()
    };
    let formatter = Formatter::new(formatting);

    let output = match show.format {
        ShowFormat::Terminal => {
            colored::control::set_override(formatting.color.should_use_color());
            render_terminal(
                &snapshot.assessment,
                snapshot.aggregate,
                &snapshot.insight,
                &formatter,
                show.verbosity,
            )
        }
        ShowFormat::Json => {
            let report = build_report(&snapshot.assessment, snapshot.aggregate, &snapshot.insight);
            let mut json = to_json_string(&report)?;
            json.push('\n');
            json
        }
        ShowFormat::Text => to_summary_text_with(
            &snapshot.assessment,
            snapshot.aggregate,
            &snapshot.insight,
            formatter.uses_emoji(),
        ),
    };
    Ok(output)
}

pub fn show(config: &ScorecardConfig, show: ShowConfig) -> Result<()> {
    print!("{}", render_show(config, &show)?);
    Ok(())
}
