//! Unit tests for the smaller building blocks.
mod common;
use common::*;
use procmap::prelude::*;
use std::collections::HashSet;

#[cfg(test)]
mod sanitize_tests {
    use super::*;

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(sanitize("Sign contract"), "Sign contract");
    }

    #[test]
    fn test_brackets_become_parentheses() {
        assert_eq!(sanitize("Review [draft] (v2)"), "Review (draft) (v2)");
    }

    #[test]
    fn test_angle_brackets_and_quotes_become_entities() {
        assert_eq!(sanitize("a < b > c"), "a &lt; b &gt; c");
        assert_eq!(sanitize("say \"hi\""), "say #quot;hi#quot;");
    }

    #[test]
    fn test_newlines_collapse_and_result_is_trimmed() {
        assert_eq!(
            sanitize("  line one\nline two\r\nline three\r "),
            "line one line two line three"
        );
    }

    #[test]
    fn test_backslashes_are_escaped_once() {
        assert_eq!(sanitize(r"C:\temp"), r"C:\\temp");
        // Escaping must not touch its own output
        assert_eq!(sanitize(r"\["), r"\\(");
    }

    #[test]
    fn test_output_never_contains_breaking_characters() {
        let nasty = "x[\"]<y>\n\\z\r";
        let clean = sanitize(nasty);
        for forbidden in ['[', ']', '<', '>', '"', '\n', '\r'] {
            assert!(!clean.contains(forbidden), "{:?} still contains {:?}", clean, forbidden);
        }
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(sanitize(" \n\t "), "");
    }
}

#[cfg(test)]
mod id_tests {
    use super::*;

    #[test]
    fn test_sequential_ids_count_per_prefix() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id("lane"), "lane_1");
        assert_eq!(ids.next_id("step"), "step_1");
        assert_eq!(ids.next_id("lane"), "lane_2");
    }

    #[test]
    fn test_random_ids_are_unique_and_well_formed() {
        let mut ids = RandomIds::new();
        let issued: Vec<String> = (0..500).map(|_| ids.next_id("step")).collect();
        let distinct: HashSet<&String> = issued.iter().collect();

        assert_eq!(distinct.len(), issued.len());
        for id in &issued {
            let suffix = id.strip_prefix("step_").expect("id should keep its prefix");
            assert_eq!(suffix.len(), 6);
            assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_uid_helper() {
        let id = procmap::id::uid("lane");
        assert!(id.starts_with("lane_"));
        assert_ne!(procmap::id::uid("lane"), procmap::id::uid("lane"));
    }
}

#[cfg(test)]
mod orientation_tests {
    use super::*;

    #[test]
    fn test_parse_orientation() {
        assert_eq!("TD".parse::<Orientation>(), Ok(Orientation::TopDown));
        assert_eq!("tb".parse::<Orientation>(), Ok(Orientation::TopDown));
        assert_eq!(" lr ".parse::<Orientation>(), Ok(Orientation::LeftRight));
        assert!("RL".parse::<Orientation>().is_err());
    }

    #[test]
    fn test_orientation_display_and_default() {
        assert_eq!(Orientation::default(), Orientation::TopDown);
        assert_eq!(Orientation::LeftRight.to_string(), "LR");
        assert_eq!(
            serde_json::to_string(&Orientation::TopDown).unwrap(),
            "\"TD\""
        );
    }
}

#[cfg(test)]
mod draft_tests {
    use super::*;

    #[test]
    fn test_list_draft_commits_trimmed_distinct_values() {
        let mut draft = ListDraft::new();

        draft.set_pending("  Sales ");
        assert!(draft.commit_pending());
        assert_eq!(draft.pending(), "");

        draft.set_pending("Sales");
        assert!(!draft.commit_pending());
        assert_eq!(draft.pending(), "");

        draft.set_pending("   ");
        assert!(!draft.commit_pending());
        assert_eq!(draft.pending(), "   ");

        draft.set_pending("IT");
        assert!(draft.commit_pending());
        assert_eq!(draft.items(), &["Sales".to_string(), "IT".to_string()]);

        assert_eq!(draft.remove(0), Some("Sales".to_string()));
        assert_eq!(draft.remove(4), None);
        assert_eq!(draft.into_answer(), list(&["IT"]));
    }

    #[test]
    fn test_table_draft_rows_start_in_first_lane() {
        let lanes = vec!["Sales".to_string(), "IT".to_string()];
        let mut draft = TableDraft::new();

        let first = draft.add_row(&lanes);
        assert!(draft.set_action(first, "Sign contract"));
        let second = draft.add_row(&lanes);
        assert!(draft.set_action(second, "Provision account"));
        assert!(draft.set_lane(second, "IT"));
        assert!(!draft.set_action(7, "Nope"));

        assert_eq!(
            draft.rows(),
            &[
                StepRow::new("Sign contract", "Sales"),
                StepRow::new("Provision account", "IT"),
            ]
        );
    }

    #[test]
    fn test_table_draft_without_lanes() {
        let mut draft = TableDraft::new();
        let index = draft.add_row(&[]);
        assert_eq!(draft.rows()[index].lane, "");
        assert_eq!(draft.realign(&[]), 0);
    }

    #[test]
    fn test_table_draft_realigns_removed_lanes() {
        let mut draft = TableDraft::new();
        let lanes = vec!["Sales".to_string(), "IT".to_string()];
        let index = draft.add_row(&lanes);
        draft.set_lane(index, "IT");
        draft.add_row(&lanes);

        let changed = draft.realign(&["Finance".to_string(), "Sales".to_string()]);
        assert_eq!(changed, 1);
        assert_eq!(draft.rows()[0].lane, "Finance");
        assert_eq!(draft.rows()[1].lane, "Sales");

        assert!(draft.remove(0).is_some());
        assert_eq!(draft.into_answer(), rows(&[("", "Sales")]));
    }
}

#[cfg(test)]
mod summary_tests {
    use super::*;

    #[test]
    fn test_summary_of_complete_model() {
        let mut model = create_onboarding_model();
        model.metrics = Some(vec!["Lead time".to_string()]);

        let summary = SummaryFormatter::format_model(&model);
        assert_eq!(
            summary,
            "Process: Customer Onboarding\n\
             Goal: Account activated\n\
             Trigger: Signed contract received\n\
             Lanes (2): Sales, IT\n\
             Steps:\n  \
             1. Sign contract [Sales]\n  \
             2. Provision account [IT]\n  \
             3. Send welcome email [Sales]\n\
             Metrics: Lead time"
        );
    }

    #[test]
    fn test_summary_of_empty_model() {
        let summary = SummaryFormatter::format_model(&ProcessModel::default());

        assert!(summary.contains("Process: (not set)"));
        assert!(summary.contains("Lanes (0): (none)"));
        assert!(summary.contains("Steps: (none)"));
        assert!(summary.ends_with("Metrics: (none)"));
    }

    #[test]
    fn test_summary_marks_orphan_steps() {
        let mut model = create_onboarding_model();
        model.steps[1].lane_id = "lane_gone".to_string();
        let summary = SummaryFormatter::format_model(&model);

        assert!(summary.contains("2. Provision account [?]"));
    }
}

#[cfg(test)]
mod render_tests {
    use super::*;

    struct OfflineRenderer;

    impl DiagramRenderer for OfflineRenderer {
        fn render(&self, _source: &str) -> std::result::Result<String, RenderError> {
            Err(RenderError::new("renderer unavailable"))
        }
    }

    #[test]
    fn test_markdown_renderer_fences_source() {
        let markup = generate(&create_onboarding_model(), Orientation::TopDown).unwrap();
        let rendered = render_diagram(&MarkdownRenderer, &markup).unwrap();

        assert!(rendered.starts_with("```mermaid\nflowchart TD\n"));
        assert!(rendered.ends_with("class proc_title title\n```\n"));
    }

    #[test]
    fn test_markdown_renderer_rejects_empty_source() {
        let result = MarkdownRenderer.render("  ");
        assert_eq!(result, Err(RenderError::new("nothing to render")));
    }

    #[test]
    fn test_renderer_failure_becomes_message() {
        let result = render_diagram(&OfflineRenderer, "flowchart TD");
        assert_eq!(
            result,
            Err(vec!["Renderer error: renderer unavailable".to_string()])
        );
    }
}

#[cfg(test)]
mod model_tests {
    use super::*;

    #[test]
    fn test_model_json_shape() {
        let model = create_onboarding_model();
        let json = model.to_json_pretty().unwrap();

        assert!(json.contains("\"laneId\": \"lane_1\""));
        // Absent metrics are not serialized
        assert!(!json.contains("metrics"));
        assert_eq!(ProcessModel::from_json_str(&json).unwrap(), model);
    }

    #[test]
    fn test_model_json_defaults() {
        let model = ProcessModel::from_json_str(r#"{ "name": "Only a name" }"#).unwrap();
        assert_eq!(model.name, "Only a name");
        assert!(model.lanes.is_empty());
        assert_eq!(model.metrics, None);

        assert!(matches!(
            ProcessModel::from_json_str("{ not json"),
            Err(DocumentError::Parse(_))
        ));
    }

    #[test]
    fn test_prune_orphan_steps() {
        let mut model = create_onboarding_model();
        model.lanes.retain(|l| l.name != "IT");

        assert_eq!(model.prune_orphan_steps(), 1);
        assert_eq!(model.steps.len(), 2);
        assert_eq!(model.steps_in_lane("lane_1").count(), 2);
        assert_eq!(model.prune_orphan_steps(), 0);
    }

    #[test]
    fn test_answer_serialization_is_tagged() {
        let json = serde_json::to_string(&text("Onboarding")).unwrap();
        assert_eq!(json, r#"{"kind":"text","value":"Onboarding"}"#);

        let answer: Answer =
            serde_json::from_str(r#"{"kind":"choice","value":"Yes, continue"}"#).unwrap();
        assert_eq!(answer.as_choice(), Some(REVIEW_CONTINUE));
    }
}
