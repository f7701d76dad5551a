use super::{SelectionSource, TextSink};
use crate::{
    config::Config,
    domain::{
        outcome::{ActionOutcome, Failure, SkipReason},
        text::Converter,
    },
};

/// Converts the current selection and pastes the result back.
///
/// Nothing is produced when conversion is disabled, when the selection cannot be
/// read, or when it is empty after trimming. Failures are logged and reported in the
/// outcome, never raised.
#[tracing::instrument(level = "trace", skip_all, fields(enabled = config.enabled))]
pub fn convert_selection<P>(
    config: &Config,
    converter: &Converter<'_>,
    platform: &mut P,
) -> ActionOutcome
where
    P: SelectionSource + TextSink + ?Sized,
{
    tracing::trace!("convert_selection called");

    if !config.enabled {
        tracing::trace!("conversion disabled");
        return ActionOutcome::Skipped(SkipReason::Disabled);
    }

    let selected = match platform.selected_text() {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "selection unavailable");
            return ActionOutcome::Skipped(SkipReason::SelectionUnavailable);
        }
    };

    let text = selected.trim();
    if text.is_empty() {
        tracing::trace!("no selection");
        return ActionOutcome::Skipped(SkipReason::NoSelection);
    }

    tracing::trace!(len = text.chars().count(), "selection detected");
    let converted = converter.convert(text);

    match platform.deliver(&converted) {
        Ok(()) => {
            tracing::trace!(len = converted.chars().count(), "converted text delivered");
            ActionOutcome::Applied
        }
        Err(e) => {
            tracing::warn!(user_text = e.user_text(), error = ?e, "selection conversion failed");
            ActionOutcome::Failed(Failure::Delivery)
        }
    }
}
