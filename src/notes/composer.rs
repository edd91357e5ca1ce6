use super::template::{handlebars, RELEASE_NOTES_TEMPLATE};
use crate::github::PullRequest;
use anyhow::{Context, Result};
use itertools::Itertools;
use serde::Serialize;

/// Markdown body for the release pull request plus the authors it credits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNote {
    pub body: String,
    pub authors: Vec<String>,
}

#[derive(Serialize)]
struct Entry<'a> {
    title: &'a str,
    number: u64,
}

#[derive(Serialize)]
struct NotesContext<'a> {
    features: Vec<Entry<'a>>,
    bug_fixes: Vec<Entry<'a>>,
    authors: String,
}

pub fn compose(
    enhancements: &[&PullRequest],
    bug_fixes: &[&PullRequest],
    excluded_assignee: &str,
) -> Result<ReleaseNote> {
    let authors = authors(enhancements.iter().chain(bug_fixes), excluded_assignee);

    let context = NotesContext {
        features: entries(enhancements),
        bug_fixes: entries(bug_fixes),
        authors: authors.join(", "),
    };

    let hb = handlebars()?;
    let body = hb
        .render(RELEASE_NOTES_TEMPLATE, &context)
        .context("Cannot render the release notes")?;

    Ok(ReleaseNote { body, authors })
}

/// Unique assignee logins, minus `excluded_assignee`, sorted ignoring case.
pub fn authors<'a>(
    prs: impl IntoIterator<Item = &'a &'a PullRequest>,
    excluded_assignee: &str,
) -> Vec<String> {
    prs.into_iter()
        .flat_map(|pr| pr.assignee_logins())
        .filter(|login| *login != excluded_assignee)
        .unique()
        .sorted_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        })
        .map(str::to_owned)
        .collect()
}

fn entries<'a>(prs: &[&'a PullRequest]) -> Vec<Entry<'a>> {
    prs.iter()
        .map(|pr| Entry {
            title: &pr.title,
            number: pr.number,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EXCLUDED_ASSIGNEE;
    use crate::github::State;
    use crate::notes::filter::tests::pr;

    #[test]
    fn should_render_both_sections_in_order() {
        let dark_mode = pr(101, "Add dark mode", State::Closed, &["enhancement"], &["bob"], Some(5));
        let plugin_api = pr(102, "Add plugin API", State::Closed, &["enhancement"], &["Alice"], Some(5));
        let crash = pr(103, "Fix crash on startup", State::Closed, &["bug"], &["carol"], Some(5));

        let note = compose(&[&dark_mode, &plugin_api], &[&crash], EXCLUDED_ASSIGNEE).unwrap();

        assert_eq!(
            note.body,
            "# Release notes\n\
             ## Features\n\
             - Add dark mode #101\n\
             - Add plugin API #102\n\
             ## Bug fixes\n\
             - Fix crash on startup #103\n\
             ### Authors:\n\
             Alice, bob, carol"
        );
        assert_eq!(note.authors, vec!["Alice", "bob", "carol"]);
    }

    #[test]
    fn should_omit_the_features_heading_when_there_are_none() {
        let crash = pr(103, "Fix crash on startup", State::Closed, &["bug"], &["carol"], None);

        let note = compose(&[], &[&crash], EXCLUDED_ASSIGNEE).unwrap();

        assert!(!note.body.contains("## Features"));
        assert_eq!(
            note.body,
            "# Release notes\n## Bug fixes\n- Fix crash on startup #103\n### Authors:\ncarol"
        );
    }

    #[test]
    fn should_omit_the_bug_fixes_heading_when_there_are_none() {
        let dark_mode = pr(101, "Add dark mode", State::Closed, &["enhancement"], &["bob"], None);

        let note = compose(&[&dark_mode], &[], EXCLUDED_ASSIGNEE).unwrap();

        assert!(!note.body.contains("## Bug fixes"));
        assert_eq!(
            note.body,
            "# Release notes\n## Features\n- Add dark mode #101\n### Authors:\nbob"
        );
    }

    #[test]
    fn should_render_only_the_skeleton_without_prs() {
        let note = compose(&[], &[], EXCLUDED_ASSIGNEE).unwrap();

        assert_eq!(note.body, "# Release notes\n### Authors:\n");
        assert!(note.authors.is_empty());
    }

    #[test]
    fn should_not_escape_markdown_or_html_in_titles() {
        let generic = pr(110, "Support <T> & \"quotes\"", State::Closed, &["enhancement"], &[], None);

        let note = compose(&[&generic], &[], EXCLUDED_ASSIGNEE).unwrap();

        assert!(note.body.contains("- Support <T> & \"quotes\" #110\n"));
    }

    #[test]
    fn should_list_unique_authors_without_the_maintainer() {
        let a = pr(1, "a", State::Closed, &["enhancement"], &["jjw24", "bob"], None);
        let b = pr(2, "b", State::Closed, &["bug"], &["bob", "jjw24"], None);
        let c = pr(3, "c", State::Closed, &["bug"], &["jjw24", "dave"], None);

        let authors = authors(&[&a, &b, &c], EXCLUDED_ASSIGNEE);

        assert_eq!(authors, vec!["bob", "dave"]);
    }

    #[test]
    fn should_sort_authors_ignoring_case_but_keep_casing() {
        let a = pr(1, "a", State::Closed, &[], &["bob"], None);
        let b = pr(2, "b", State::Closed, &[], &["Alice"], None);
        let c = pr(3, "c", State::Closed, &[], &["carol"], None);

        assert_eq!(authors(&[&a, &b, &c], "nobody"), vec!["Alice", "bob", "carol"]);
    }

    #[test]
    fn should_dedup_authors_case_sensitively() {
        let a = pr(1, "a", State::Closed, &[], &["bob"], None);
        let b = pr(2, "b", State::Closed, &[], &["Bob"], None);

        assert_eq!(authors(&[&a, &b], "nobody"), vec!["Bob", "bob"]);
    }

    #[test]
    fn should_honor_an_overridden_excluded_assignee() {
        let a = pr(1, "a", State::Closed, &[], &["jjw24", "release-bot"], None);

        assert_eq!(authors(&[&a], "release-bot"), vec!["jjw24"]);
    }
}
