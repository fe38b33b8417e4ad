//! Terminal rendering of the form and its result view.
//!
//! All layout decisions come from `form::view`; this module only turns them
//! into coloured text.

use colored::Colorize;
use form::view::{self, ResultSection};
use form::{FormSnapshot, ResultView};

/// Draw the header, one line per entry row and the available actions.
pub fn render_form(snapshot: &FormSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", view::TITLE.bold().blue()));
    out.push_str(&format!("{}\n", view::DESCRIPTION.dimmed()));

    for row in view::entry_rows(snapshot) {
        let value = if row.value.is_empty() {
            format!("({})", row.placeholder).dimmed().to_string()
        } else {
            row.value.to_string()
        };
        let remove = if row.removable {
            format!("  [{}]", view::REMOVE_LABEL).red().to_string()
        } else {
            String::new()
        };
        out.push_str(&format!("{:>3}. {}{}\n", row.index + 1, value, remove));
    }

    let submit = format!("[{}]", view::submit_label(snapshot.state));
    let submit = if view::submit_enabled(snapshot.state) {
        submit.green().to_string()
    } else {
        submit.dimmed().to_string()
    };
    out.push_str(&format!("[{}] {}\n", view::ADD_LABEL, submit));
    out
}

/// Draw the result view: error, then message, then recommendations.
pub fn render_result(result: &ResultView) -> String {
    let mut out = String::new();
    for section in view::result_sections(result) {
        match section {
            ResultSection::Error(message) => {
                out.push_str(&format!("{}\n", message.red()));
            }
            ResultSection::Message(message) => {
                out.push_str(&format!("{}\n", message.blue()));
            }
            ResultSection::Recommendations(titles) => {
                out.push_str(&format!("{}\n", view::RECOMMENDATIONS_HEADING.bold()));
                for title in titles {
                    out.push_str(&format!("  {} {}\n", "•".green(), title));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use form::{EntryList, SubmissionState};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_render_form_marks_removable_rows() {
        plain();
        let snapshot = FormSnapshot {
            entries: EntryList::from_titles(["Inception", ""]),
            state: SubmissionState::Idle,
            result: ResultView::None,
        };

        let text = render_form(&snapshot);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[2], "  1. Inception");
        assert_eq!(lines[3], "  2. (Enter movie title 2)  [Remove]");
        assert_eq!(lines[4], "[Add Movie] [Get Recommendations]");
    }

    #[test]
    fn test_render_form_while_loading() {
        plain();
        let snapshot = FormSnapshot {
            entries: EntryList::new(),
            state: SubmissionState::Loading,
            result: ResultView::None,
        };

        assert!(render_form(&snapshot).contains("[Loading...]"));
    }

    #[test]
    fn test_render_result_success() {
        plain();
        let result = ResultView::success(
            vec!["A".to_string(), "B".to_string()],
            Some("approx match".to_string()),
        );

        assert_eq!(
            render_result(&result),
            "approx match\nRecommendations:\n  • A\n  • B\n"
        );
    }

    #[test]
    fn test_render_result_error_and_none() {
        plain();
        assert_eq!(render_result(&ResultView::None), "");
        assert_eq!(
            render_result(&ResultView::Error("boom".to_string())),
            "boom\n"
        );
    }
}
