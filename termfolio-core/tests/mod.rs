use termfolio_core::builtins::{self, Effect, CERTIFICATIONS_TEXT, RESUME_TXT};
use termfolio_core::config::{Config, IntroConfig};
use termfolio_core::content;
use termfolio_core::history::CommandHistory;
use termfolio_core::config::CONFIG_ENV;
use termfolio_core::input::{InputLine, Motion};
use termfolio_core::intro::{Typewriter, INTRO_TEXT};
use termfolio_core::page::{skill_bar, Page, SKILL_BAR_WIDTH};
use termfolio_core::runtime::parser::CommandParser;
use termfolio_core::scheduler::{Action, Scheduler};
use termfolio_core::transcript::Transcript;
use termfolio_core::{Output, Section, SectionAnchors, Submission, TermfolioEngine, TermfolioError};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Page stand-in that records every scroll request.
#[derive(Default)]
struct RecordingPage {
    known: Vec<Section>,
    calls: Vec<Section>,
}

impl RecordingPage {
    fn with_all_sections() -> Self {
        Self {
            known: Section::all().to_vec(),
            calls: Vec::new(),
        }
    }
}

impl SectionAnchors for RecordingPage {
    fn scroll_into_view(&mut self, section: Section) -> bool {
        self.calls.push(section);
        self.known.contains(&section)
    }
}

fn run(engine: &mut TermfolioEngine, line: &str) -> Submission {
    engine.set_input(line);
    engine.submit(Instant::now())
}

fn last_output(engine: &TermfolioEngine) -> String {
    engine
        .transcript()
        .last()
        .map(|e| e.output.plain_text())
        .unwrap_or_default()
}

// ============================================================================
// CommandParser Tests
// ============================================================================

#[test]
fn test_parse_keyword_only() {
    let parsed = CommandParser::parse("about").unwrap();
    assert_eq!(parsed.keyword, "about");
    assert!(parsed.args.is_empty());
}

#[test]
fn test_parse_lowercases_keyword_but_not_args() {
    let parsed = CommandParser::parse("  CAT Resume.TXT  ").unwrap();
    assert_eq!(parsed.keyword, "cat");
    assert_eq!(parsed.args, vec!["Resume.TXT".to_string()]);
}

#[test]
fn test_parse_collapses_whitespace_runs() {
    let parsed = CommandParser::parse("cd \t  projects   extra").unwrap();
    assert_eq!(parsed.keyword, "cd");
    assert_eq!(parsed.args, vec!["projects".to_string(), "extra".to_string()]);
}

#[test]
fn test_parse_empty_is_none() {
    assert!(CommandParser::parse("").is_none());
    assert!(CommandParser::parse("   \t ").is_none());
}

// ============================================================================
// Command Table Tests
// ============================================================================

#[test]
fn test_command_table_keywords() {
    let names: Vec<&str> = builtins::command_names().collect();
    assert_eq!(
        names,
        vec![
            "help",
            "about",
            "skills",
            "experience",
            "education",
            "certifications",
            "projects",
            "contact",
            "clear",
            "ls",
            "cd",
            "cat"
        ]
    );
}

#[test]
fn test_lookup_is_case_insensitive() {
    assert_eq!(builtins::lookup("HeLp").map(|c| c.name), Some("help"));
    assert!(builtins::lookup("nope").is_none());
}

#[test]
fn test_help_lists_every_command() {
    let parsed = CommandParser::parse("help").unwrap();
    let text = builtins::dispatch(&parsed).output.plain_text();
    assert!(text.starts_with("Available commands:"));
    for spec in builtins::COMMANDS {
        assert!(text.contains(spec.usage), "help is missing {}", spec.usage);
        assert!(text.contains(spec.description));
    }
}

#[test]
fn test_ls_lists_sections() {
    let parsed = CommandParser::parse("ls").unwrap();
    let text = builtins::dispatch(&parsed).output.plain_text();
    for section in Section::all() {
        assert!(text.contains(&format!("{}/", section.name())));
    }
}

#[test]
fn test_clear_reply_has_clear_effect() {
    let parsed = CommandParser::parse("clear").unwrap();
    assert_eq!(builtins::dispatch(&parsed).effect, Some(Effect::Clear));
}

#[test]
fn test_cd_missing_argument() {
    let parsed = CommandParser::parse("cd").unwrap();
    let reply = builtins::dispatch(&parsed);
    assert_eq!(reply.output, Output::Error("Usage: cd [section]".to_string()));
    assert!(reply.effect.is_none());
}

#[test]
fn test_cat_missing_argument() {
    let parsed = CommandParser::parse("cat").unwrap();
    let reply = builtins::dispatch(&parsed);
    assert_eq!(reply.output, Output::Error("Usage: cat [file]".to_string()));
}

#[test]
fn test_cat_file_names_case_insensitive() {
    let parsed = CommandParser::parse("cat PROFILE.TXT").unwrap();
    let text = builtins::dispatch(&parsed).output.plain_text();
    assert!(text.starts_with("=== profile.txt ==="));
}

#[test]
fn test_section_allow_list() {
    assert_eq!(Section::from_name("Projects"), Some(Section::Projects));
    assert_eq!(Section::from_name("education"), None);
    assert_eq!(Section::all().len(), 7);
}

// ============================================================================
// Engine: Transcript Behaviour
// ============================================================================

#[test]
fn test_empty_input_is_noop() {
    let mut engine = TermfolioEngine::default();
    run(&mut engine, "about");
    let before = engine.transcript().len();

    for blank in ["", "   ", "\t\t"] {
        assert_eq!(run(&mut engine, blank), Submission::Empty);
    }
    assert_eq!(engine.transcript().len(), before);
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn test_canned_commands_match_byte_for_byte() {
    let cases = [
        ("about", builtins::ABOUT_TEXT),
        ("skills", builtins::SKILLS_TEXT),
        ("experience", builtins::EXPERIENCE_TEXT),
        ("education", builtins::EDUCATION_TEXT),
        ("certifications", CERTIFICATIONS_TEXT),
        ("projects", builtins::PROJECTS_TEXT),
        ("contact", builtins::CONTACT_TEXT),
    ];

    for (cmd, expected) in cases {
        let mut engine = TermfolioEngine::default();
        let result = run(&mut engine, cmd);
        assert_eq!(result, Submission::Appended { navigate: None });
        assert_eq!(engine.transcript().len(), 1);

        let entry = engine.transcript().last().unwrap();
        assert_eq!(entry.input, cmd);
        assert_eq!(entry.output, Output::Text(expected.to_string()));
    }
}

#[test]
fn test_keyword_matching_ignores_case() {
    let mut engine = TermfolioEngine::default();
    run(&mut engine, "ABOUT");
    assert_eq!(last_output(&engine), builtins::ABOUT_TEXT);
    assert_eq!(engine.transcript().last().unwrap().input, "ABOUT");
}

#[test]
fn test_input_is_trimmed_before_echo() {
    let mut engine = TermfolioEngine::default();
    run(&mut engine, "   skills   ");
    assert_eq!(engine.transcript().last().unwrap().input, "skills");
    assert_eq!(engine.history().entries(), &["skills".to_string()]);
}

#[test]
fn test_clear_empties_transcript() {
    let mut engine = TermfolioEngine::default();
    for cmd in ["about", "skills", "foobar", "cd nowhere"] {
        run(&mut engine, cmd);
    }
    assert_eq!(engine.transcript().len(), 4);

    assert_eq!(run(&mut engine, "clear"), Submission::Cleared);
    assert!(engine.transcript().is_empty());

    // Clearing an empty transcript is fine too
    assert_eq!(run(&mut engine, "clear"), Submission::Cleared);
    assert!(engine.transcript().is_empty());
}

#[test]
fn test_clear_keeps_history() {
    let mut engine = TermfolioEngine::default();
    run(&mut engine, "about");
    run(&mut engine, "clear");
    assert_eq!(engine.history().len(), 2);
    assert!(engine.history_up());
    assert_eq!(engine.input().value(), "clear");
}

#[test]
fn test_unknown_command_names_keyword() {
    let mut engine = TermfolioEngine::default();
    run(&mut engine, "foobar");
    assert_eq!(engine.transcript().len(), 1);

    let entry = engine.transcript().last().unwrap();
    assert!(entry.output.is_error());
    assert!(entry.output.plain_text().contains("foobar"));
    assert_eq!(
        entry.output.plain_text(),
        "Command not found: foobar. Type 'help' for available commands."
    );
}

#[test]
fn test_failures_keep_transcript_growing() {
    let mut engine = TermfolioEngine::default();
    let inputs = ["nope", "cd", "cd mars", "cat", "cat x.txt", "about"];
    for (i, cmd) in inputs.iter().enumerate() {
        run(&mut engine, cmd);
        assert_eq!(engine.transcript().len(), i + 1);
    }
}

#[test]
fn test_submit_clears_input_line() {
    let mut engine = TermfolioEngine::default();
    engine.set_input("about");
    engine.submit(Instant::now());
    assert!(engine.input().is_empty());
    assert_eq!(engine.input().cursor(), 0);
}

// ============================================================================
// Engine: Navigation
// ============================================================================

#[test]
fn test_cd_projects_scrolls_once_after_delay() {
    let mut engine = TermfolioEngine::with_scroll_delay(Duration::from_millis(500));
    let mut page = RecordingPage::with_all_sections();
    let t0 = Instant::now();

    engine.set_input("cd projects");
    let result = engine.submit(t0);
    assert!(matches!(
        result,
        Submission::Appended { navigate: Some((Section::Projects, _)) }
    ));
    assert_eq!(last_output(&engine), "Navigating to projects section...");

    // Not yet due
    assert_eq!(engine.run_due(t0, &mut page), 0);
    assert_eq!(engine.run_due(t0 + Duration::from_millis(499), &mut page), 0);
    assert!(page.calls.is_empty());

    // Due
    assert_eq!(engine.run_due(t0 + Duration::from_millis(500), &mut page), 1);
    assert_eq!(page.calls, vec![Section::Projects]);

    // Never again
    assert_eq!(engine.run_due(t0 + Duration::from_secs(10), &mut page), 0);
    assert_eq!(engine.flush_pending(&mut page), 0);
    assert_eq!(page.calls.len(), 1);
}

#[test]
fn test_cd_unknown_section_schedules_nothing() {
    let mut engine = TermfolioEngine::default();
    let mut page = RecordingPage::with_all_sections();

    let result = run(&mut engine, "cd nowhere");
    assert_eq!(result, Submission::Appended { navigate: None });
    assert_eq!(
        last_output(&engine),
        "Error: Section 'nowhere' not found. Type 'ls' to see available sections."
    );
    assert!(!engine.has_pending());
    assert_eq!(engine.flush_pending(&mut page), 0);
    assert!(page.calls.is_empty());
}

#[test]
fn test_cd_section_name_case_insensitive() {
    let mut engine = TermfolioEngine::default();
    let mut page = RecordingPage::with_all_sections();
    run(&mut engine, "cd SKILLS");
    engine.flush_pending(&mut page);
    assert_eq!(page.calls, vec![Section::Skills]);
}

#[test]
fn test_cancel_pending_scroll() {
    let mut engine = TermfolioEngine::default();
    let mut page = RecordingPage::with_all_sections();

    let Submission::Appended { navigate: Some((_, handle)) } = run(&mut engine, "cd contact") else {
        panic!("Expected a scheduled scroll");
    };
    assert!(engine.cancel(handle));
    assert!(!engine.cancel(handle));
    assert_eq!(engine.flush_pending(&mut page), 0);
    assert!(page.calls.is_empty());
}

#[test]
fn test_newer_navigation_supersedes_pending_one() {
    let mut engine = TermfolioEngine::default();
    let mut page = RecordingPage::with_all_sections();
    run(&mut engine, "cd about");
    run(&mut engine, "cd contact");
    assert_eq!(engine.flush_pending(&mut page), 1);
    assert_eq!(page.calls, vec![Section::Contact]);
}

#[test]
fn test_missing_anchor_does_not_panic() {
    let mut engine = TermfolioEngine::default();
    let mut page = RecordingPage::default();
    run(&mut engine, "cd home");
    assert_eq!(engine.flush_pending(&mut page), 1);
    assert_eq!(page.calls, vec![Section::Home]);
}

// ============================================================================
// Engine: cat
// ============================================================================

#[test]
fn test_cat_resume() {
    let mut engine = TermfolioEngine::default();
    run(&mut engine, "cat resume.txt");
    assert_eq!(
        engine.transcript().last().unwrap().output,
        Output::Text(RESUME_TXT.to_string())
    );
}

#[test]
fn test_cat_missing_file() {
    let mut engine = TermfolioEngine::default();
    run(&mut engine, "cat missing.txt");
    let out = &engine.transcript().last().unwrap().output;
    assert!(out.is_error());
    assert!(out.plain_text().contains("missing.txt"));
    assert_eq!(out.plain_text(), "Error: File 'missing.txt' not found.");
}

// ============================================================================
// History Recall
// ============================================================================

#[test]
fn test_history_up_down_sequence() {
    let mut engine = TermfolioEngine::default();
    for cmd in ["about", "skills", "contact"] {
        run(&mut engine, cmd);
    }

    let mut seen = Vec::new();
    for _ in 0..3 {
        assert!(engine.history_up());
        seen.push(engine.input().value().to_string());
    }
    assert_eq!(seen, vec!["contact", "skills", "about"]);

    // Clamped at the oldest entry
    assert!(engine.history_up());
    assert_eq!(engine.input().value(), "about");

    assert!(engine.history_down());
    assert_eq!(engine.input().value(), "skills");
}

#[test]
fn test_history_down_past_newest_restores_draft() {
    let mut engine = TermfolioEngine::default();
    run(&mut engine, "about");
    engine.set_input("sk");

    assert!(engine.history_up());
    assert_eq!(engine.input().value(), "about");
    assert!(engine.history_down());
    assert_eq!(engine.input().value(), "sk");
    assert_eq!(engine.history().cursor(), None);

    // Nothing selected: down is a no-op
    assert!(!engine.history_down());
    assert_eq!(engine.input().value(), "sk");
}

#[test]
fn test_history_empty_is_noop() {
    let mut engine = TermfolioEngine::default();
    assert!(!engine.history_up());
    assert!(!engine.history_down());
    assert!(engine.input().is_empty());
}

#[test]
fn test_submit_resets_history_cursor() {
    let mut engine = TermfolioEngine::default();
    run(&mut engine, "about");
    run(&mut engine, "skills");
    engine.history_up();
    engine.history_up();
    assert_eq!(engine.history().cursor(), Some(0));

    engine.submit(Instant::now());
    assert_eq!(engine.history().cursor(), None);
    assert_eq!(engine.history().len(), 3);
    assert!(engine.history_up());
    assert_eq!(engine.input().value(), "about");
}

#[test]
fn test_editing_drops_history_selection() {
    let mut engine = TermfolioEngine::default();
    run(&mut engine, "about");
    engine.history_up();
    engine.insert_char('!');
    assert_eq!(engine.history().cursor(), None);
    assert_eq!(engine.input().value(), "about!");
}

#[test]
fn test_cursor_motion_keeps_history_selection() {
    let mut engine = TermfolioEngine::default();
    run(&mut engine, "about");
    run(&mut engine, "skills");
    engine.set_input("draft");

    assert!(engine.history_up());
    assert!(engine.history_up());
    assert_eq!(engine.input().value(), "about");

    for motion in [Motion::Left, Motion::Home, Motion::Right, Motion::End] {
        engine.move_cursor(motion);
    }
    assert_eq!(engine.history().cursor(), Some(0));

    assert!(engine.history_down());
    assert_eq!(engine.input().value(), "skills");
    assert!(engine.history_down());
    assert_eq!(engine.input().value(), "draft");
}

#[test]
fn test_delete_and_paste_drop_history_selection() {
    let mut engine = TermfolioEngine::default();
    run(&mut engine, "contact");
    engine.history_up();
    engine.move_cursor(Motion::Home);
    assert!(engine.delete());
    assert_eq!(engine.history().cursor(), None);
    assert_eq!(engine.input().value(), "ontact");

    engine.history_up();
    engine.insert_str(" x");
    assert_eq!(engine.history().cursor(), None);
    assert_eq!(engine.input().value(), "contact x");
}

#[test]
fn test_history_records_unknown_and_clear() {
    let mut history = CommandHistory::new();
    history.record("foobar");
    history.record("clear");
    assert_eq!(history.up(""), Some("clear"));
    assert_eq!(history.up(""), Some("foobar"));
    assert_eq!(history.up(""), Some("foobar"));
}

#[test]
fn test_independent_engines_do_not_share_state() {
    let mut a = TermfolioEngine::default();
    let b = TermfolioEngine::default();
    run(&mut a, "about");
    assert_eq!(a.transcript().len(), 1);
    assert!(b.transcript().is_empty());
    assert!(b.history().is_empty());
}

// ============================================================================
// InputLine Tests
// ============================================================================

#[test]
fn test_input_line_editing() {
    let mut line = InputLine::new();
    line.insert_str("abc");
    line.move_left();
    line.insert_char('X');
    assert_eq!(line.value(), "abXc");
    assert_eq!(line.cursor(), 3);

    assert!(line.backspace());
    assert_eq!(line.value(), "abc");
    line.move_home();
    assert!(!line.backspace());
    assert!(line.delete());
    assert_eq!(line.value(), "bc");
    line.move_end();
    assert!(!line.delete());
    assert!(line.at_end());
}

#[test]
fn test_input_line_multibyte() {
    let mut line = InputLine::new();
    line.insert_str("✓é");
    line.move_left();
    line.insert_char('a');
    assert_eq!(line.value(), "✓aé");
    assert_eq!(line.char_count(), 3);
    assert!(line.backspace());
    assert!(line.backspace());
    assert_eq!(line.value(), "é");
}

// ============================================================================
// Scheduler Tests
// ============================================================================

#[test]
fn test_scheduler_take_due_in_deadline_order() {
    let mut s = Scheduler::new();
    let t0 = Instant::now();
    let h = s.schedule(Action::ScrollTo(Section::About), Duration::from_millis(100), t0);
    assert!(s.is_pending(h));
    assert_eq!(s.next_due(), Some(t0 + Duration::from_millis(100)));
    assert!(s.take_due(t0).is_empty());
    assert_eq!(
        s.take_due(t0 + Duration::from_millis(100)),
        vec![Action::ScrollTo(Section::About)]
    );
    assert!(!s.is_pending(h));
    assert_eq!(s.pending(), 0);
}

#[test]
fn test_scheduler_cancel_all() {
    let mut s = Scheduler::new();
    let t0 = Instant::now();
    s.schedule(Action::ScrollTo(Section::Home), Duration::ZERO, t0);
    assert_eq!(s.cancel_all(), 1);
    assert!(s.flush().is_empty());
}

// ============================================================================
// Transcript Tests
// ============================================================================

#[test]
fn test_transcript_serialization() {
    let mut t = Transcript::new();
    t.push("cat nope", Output::error("Error: File 'nope' not found."));
    let json = serde_json::to_string(&t).unwrap();
    let back: Transcript = serde_json::from_str(&json).unwrap();
    assert_eq!(back.entries(), t.entries());
}

// ============================================================================
// Page Tests
// ============================================================================

#[test]
fn test_page_has_anchor_for_every_section_in_order() {
    let page = Page::build(80);
    let mut last = None;
    for section in Section::all() {
        let anchor = page.anchor(*section).expect("every section has an anchor");
        if let Some(prev) = last {
            assert!(anchor > prev, "{} should come after the previous section", section);
        }
        assert_eq!(page.section_at(anchor), *section);
        last = Some(anchor);
    }
    assert_eq!(page.anchor(Section::Home), Some(0));
}

#[test]
fn test_page_contains_content_tables() {
    let page = Page::build(100);
    let text: String = page
        .lines()
        .iter()
        .map(|l| l.text())
        .collect::<Vec<_>>()
        .join("\n");
    for cert in content::CERTIFICATIONS {
        assert!(text.contains(cert.name));
        assert!(text.contains(cert.credential_id));
    }
    for job in content::EXPERIENCE {
        assert!(text.contains(job.company));
    }
    for project in content::PROJECTS {
        assert!(text.contains(project.title));
    }
    assert!(text.contains(content::CONTACT.email));
}

#[test]
fn test_page_clamps_narrow_width() {
    let page = Page::build(5);
    assert_eq!(page.width(), 20);
    assert!(!page.is_empty());
}

#[test]
fn test_page_paragraphs_wrap_to_width() {
    let narrow = Page::build(40);
    let wide = Page::build(120);
    assert!(narrow.len() > wide.len());
}

#[test]
fn test_content_ids_are_unique() {
    let mut ids: Vec<u32> = content::CERTIFICATIONS.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), content::CERTIFICATIONS.len());
    let mut ids: Vec<u32> = content::PROJECTS.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), content::PROJECTS.len());
}

#[test]
fn test_skill_bar() {
    assert_eq!(skill_bar(0, 10), "░░░░░░░░░░");
    assert_eq!(skill_bar(100, 10), "██████████");
    assert_eq!(skill_bar(85, 20).chars().filter(|c| *c == '█').count(), 17);
    assert_eq!(skill_bar(250, SKILL_BAR_WIDTH).chars().count(), SKILL_BAR_WIDTH);
}

// ============================================================================
// Typewriter Tests
// ============================================================================

#[test]
fn test_typewriter_eventually_shows_full_text() {
    let t0 = Instant::now();
    let mut rng = StdRng::seed_from_u64(7);
    let mut tw = Typewriter::new(INTRO_TEXT, &IntroConfig::default(), t0);

    assert!(!tw.tick(t0, &mut rng));
    assert_eq!(tw.visible(), "");

    assert!(tw.tick(t0 + Duration::from_millis(500), &mut rng));
    assert_eq!(tw.visible(), "H");

    // Worst case is 60ms per char
    let worst = Duration::from_millis(500 + 60 * INTRO_TEXT.chars().count() as u64);
    tw.tick(t0 + worst, &mut rng);
    assert!(tw.is_complete());
    assert_eq!(tw.visible(), INTRO_TEXT);
}

#[test]
fn test_typewriter_visible_is_always_a_prefix() {
    let t0 = Instant::now();
    let mut rng = StdRng::seed_from_u64(42);
    let mut tw = Typewriter::new(INTRO_TEXT, &IntroConfig::default(), t0);
    for ms in (0..4000).step_by(37) {
        tw.tick(t0 + Duration::from_millis(ms), &mut rng);
        assert!(INTRO_TEXT.starts_with(tw.visible()));
    }
}

#[test]
fn test_typewriter_finish_and_disabled() {
    let t0 = Instant::now();
    let mut tw = Typewriter::new(INTRO_TEXT, &IntroConfig::default(), t0);
    tw.finish();
    assert_eq!(tw.visible(), INTRO_TEXT);

    let disabled = IntroConfig {
        enabled: false,
        ..IntroConfig::default()
    };
    let tw = Typewriter::new(INTRO_TEXT, &disabled, t0);
    assert!(tw.is_complete());
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_config_defaults() {
    let c = Config::default();
    assert_eq!(c.scroll_delay(), Duration::from_millis(500));
    assert_eq!(c.theme, "default");
    assert!(c.validate().is_ok());
}

#[test]
fn test_config_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let c = Config::load(&dir.path().join("absent.json")).unwrap();
    assert_eq!(c, Config::default());
}

#[test]
fn test_config_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "theme": "monokai", "intro": { "enabled": false } }"#).unwrap();

    let c = Config::load(&path).unwrap();
    assert_eq!(c.theme, "monokai");
    assert!(!c.intro.enabled);
    assert_eq!(c.intro.max_char_ms, 60);
    assert_eq!(c.scroll_delay_ms, 500);
}

#[test]
fn test_config_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        Config::load(&path),
        Err(TermfolioError::ConfigParse { .. })
    ));
}

#[test]
fn test_config_rejects_inverted_typing_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "intro": { "min_char_ms": 90, "max_char_ms": 10 } }"#).unwrap();
    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, TermfolioError::InvalidConfig(_)));
    assert!(err.to_string().contains("min_char_ms"));
}

#[test]
fn test_config_load_default_honors_env_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("termfolio.json");
    std::fs::write(&path, r#"{ "theme": "cyberpunk", "prompt": ">", "scroll_delay_ms": 250 }"#)
        .unwrap();

    // Only this test touches the variable.
    unsafe { std::env::set_var(CONFIG_ENV, &path) };
    let loaded = Config::load_default();

    unsafe { std::env::set_var(CONFIG_ENV, dir.path().join("missing.json")) };
    let fallback = Config::load_default();
    unsafe { std::env::remove_var(CONFIG_ENV) };

    let c = loaded.unwrap();
    assert_eq!(c.theme, "cyberpunk");
    assert_eq!(c.prompt, ">");
    assert_eq!(c.scroll_delay(), Duration::from_millis(250));
    assert_eq!(fallback.unwrap(), Config::default());
}
