//! Presentation policy for the form.
//!
//! The data operations in [`crate::entries`] are deliberately permissive.
//! This module decides what the user is actually offered: which rows get a
//! remove control, when the submit control is live, and in what order the
//! parts of a result are shown. Front ends render from these decisions
//! instead of re-deriving them.

use crate::types::{FormSnapshot, ResultView, SubmissionState};

pub const TITLE: &str = "Movie Recommendation System";
pub const DESCRIPTION: &str = "Enter movie titles to get personalized recommendations";
pub const ADD_LABEL: &str = "Add Movie";
pub const REMOVE_LABEL: &str = "Remove";
pub const SUBMIT_LABEL: &str = "Get Recommendations";
pub const LOADING_LABEL: &str = "Loading...";
pub const RECOMMENDATIONS_HEADING: &str = "Recommendations:";

/// Whether row `index` shows a remove control. The first row never does.
pub fn can_remove(index: usize) -> bool {
    index > 0
}

/// Placeholder text for the (0-based) row `index`.
pub fn placeholder(index: usize) -> String {
    format!("Enter movie title {}", index + 1)
}

/// The submit control is disabled while a request is in flight.
pub fn submit_enabled(state: SubmissionState) -> bool {
    !state.is_loading()
}

pub fn submit_label(state: SubmissionState) -> &'static str {
    if state.is_loading() {
        LOADING_LABEL
    } else {
        SUBMIT_LABEL
    }
}

/// One row of the form as it should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRow<'a> {
    pub index: usize,
    pub value: &'a str,
    pub placeholder: String,
    pub removable: bool,
}

/// Rows for every entry in `snapshot`, in order.
pub fn entry_rows(snapshot: &FormSnapshot) -> Vec<EntryRow<'_>> {
    snapshot
        .entries
        .iter()
        .enumerate()
        .map(|(index, value)| EntryRow {
            index,
            value,
            placeholder: placeholder(index),
            removable: can_remove(index),
        })
        .collect()
}

/// A displayable piece of the result view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultSection<'a> {
    Error(&'a str),
    Message(&'a str),
    Recommendations(&'a [String]),
}

/// Sections to show for `result`: error, then message, then the list.
///
/// The list is omitted when empty, so a "no matches" response shows only
/// its message.
pub fn result_sections(result: &ResultView) -> Vec<ResultSection<'_>> {
    match result {
        ResultView::None => Vec::new(),
        ResultView::Error(message) => vec![ResultSection::Error(message)],
        ResultView::Success {
            recommendations,
            message,
        } => {
            let mut sections = Vec::new();
            if let Some(message) = message {
                sections.push(ResultSection::Message(message));
            }
            if !recommendations.is_empty() {
                sections.push(ResultSection::Recommendations(recommendations));
            }
            sections
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::EntryList;

    #[test]
    fn test_first_row_is_not_removable() {
        assert!(!can_remove(0));
        assert!(can_remove(1));
        assert!(can_remove(7));
    }

    #[test]
    fn test_entry_rows_are_numbered_from_one() {
        let snapshot = FormSnapshot {
            entries: EntryList::from_titles(["Inception", ""]),
            state: SubmissionState::Idle,
            result: ResultView::None,
        };

        let rows = entry_rows(&snapshot);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].value, "Inception");
        assert_eq!(rows[0].placeholder, "Enter movie title 1");
        assert!(!rows[0].removable);
        assert_eq!(rows[1].placeholder, "Enter movie title 2");
        assert!(rows[1].removable);
    }

    #[test]
    fn test_submit_disabled_while_loading() {
        assert!(submit_enabled(SubmissionState::Idle));
        assert!(!submit_enabled(SubmissionState::Loading));
        assert_eq!(submit_label(SubmissionState::Loading), "Loading...");
        assert_eq!(submit_label(SubmissionState::Idle), "Get Recommendations");
    }

    #[test]
    fn test_result_sections_order() {
        let result = ResultView::success(
            vec!["A".to_string(), "B".to_string()],
            Some("approx match".to_string()),
        );

        let sections = result_sections(&result);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0], ResultSection::Message("approx match"));
        assert!(matches!(sections[1], ResultSection::Recommendations(list) if list.len() == 2));
    }

    #[test]
    fn test_empty_recommendations_show_only_message() {
        let result = ResultView::success(Vec::new(), Some("No recommendations found.".to_string()));

        assert_eq!(
            result_sections(&result),
            vec![ResultSection::Message("No recommendations found.")]
        );
    }

    #[test]
    fn test_error_and_none_sections() {
        assert!(result_sections(&ResultView::None).is_empty());
        assert_eq!(
            result_sections(&ResultView::Error("boom".to_string())),
            vec![ResultSection::Error("boom")]
        );
    }
}
