//! Tests for logger functionality.

use footstep::options::LINE_ENDING;
use footstep::{Error, Level, Logger, MemoryStream, Overrides, Sink, strip};
use regex::Regex;
use std::sync::{Arc, Mutex};

type Lines = Arc<Mutex<Vec<String>>>;

fn capture() -> (Lines, Sink) {
    let lines: Lines = Arc::new(Mutex::new(Vec::new()));
    let sink_lines = Arc::clone(&lines);
    let sink = Sink::callback(move |s| sink_lines.lock().unwrap().push(s.to_string()));
    (lines, sink)
}

fn written(lines: &Lines) -> Vec<String> {
    lines.lock().unwrap().clone()
}

/// Every stream captured, `warning` deliberately unusable.
struct Fixture {
    logger: Logger,
    verbose: Lines,
    info: MemoryStream,
    error: Lines,
    debug: Lines,
    log: Lines,
    clear: Lines,
}

fn fixture() -> Fixture {
    let (verbose, verbose_sink) = capture();
    let info = MemoryStream::new();
    let (error, error_sink) = capture();
    let (_notice, notice_sink) = capture();
    let (debug, debug_sink) = capture();
    let (log, log_sink) = capture();
    let (clear, clear_sink) = capture();

    let logger = Logger::new(
        Overrides::new()
            .stream("verbose", verbose_sink)
            .stream("info", Sink::stream(info.clone()))
            .stream("error", error_sink)
            .stream("warning", Sink::Unusable("invalid".to_string()))
            .stream("notice", notice_sink)
            .stream("debug", debug_sink)
            .stream("log", log_sink)
            .stream("clear", clear_sink)
            .eol("")
            .verbose(true)
            .debug(true)
            .max_log_history(3),
    );

    Fixture {
        logger,
        verbose,
        info,
        error,
        debug,
        log,
        clear,
    }
}

#[test]
fn logging_writes_formatted_output_and_records_it() {
    let mut f = fixture();
    f.logger.log("test");

    let lines = written(&f.log);
    assert_eq!(lines.len(), 1);

    let last = f.logger.past_logs().last().unwrap();
    assert_eq!(last.level, Level::Log);
    assert_eq!(last.message, "test");
    assert_eq!(last.stream, "log");
    assert_eq!(last.output, lines[0]);
    assert!(last.error.is_none());
}

#[test]
fn logging_to_a_stream_writes_to_it() {
    let mut f = fixture();
    f.logger.info("to the stream");

    assert!(strip(&f.info.contents()).ends_with("info : to the stream"));
    assert!(!f.logger.past_logs().last().unwrap().is_err());
}

#[test]
fn unusable_stream_is_recorded_not_raised() {
    let mut f = fixture();
    f.logger.warning("test");

    let last = f.logger.past_logs().last().unwrap();
    assert_eq!(last.level, Level::Warning);
    assert!(matches!(
        last.error,
        Some(Error::InvalidSink { ref stream }) if stream == "warning"
    ));
}

#[test]
fn non_function_formats_are_substituted_literally() {
    let mut f = fixture();
    f.logger.set_options(
        Overrides::new()
            .format("[{{date}}] {{type}}: {{message}} {{nonFunction}}")
            .format_value("date", "date")
            .format_value("nonFunction", "notAFunc"),
    );

    f.logger.log("test");

    assert_eq!(
        f.logger.past_logs().last().unwrap().output,
        "[date]  log : test notAFunc"
    );
}

#[test]
fn verbose_writes_only_when_enabled() {
    let mut f = fixture();

    f.logger.set_verbose(false);
    f.logger.verbose("verbose test");
    assert!(f.logger.past_logs().is_empty());
    assert!(written(&f.verbose).is_empty());

    assert!(f.logger.set_verbose(true));
    f.logger.verbose("verbose test");
    assert_eq!(f.logger.past_logs().len(), 1);
    assert_eq!(written(&f.verbose).len(), 1);

    let last = f.logger.past_logs().last().unwrap();
    assert_eq!(last.level, Level::Verbose);
    assert_eq!(last.message, "verbose test");
}

#[test]
fn debug_writes_only_when_enabled() {
    let mut f = fixture();

    assert!(!f.logger.set_debug(false));
    f.logger.debug("debug test");
    assert!(f.logger.past_logs().is_empty());
    assert!(written(&f.debug).is_empty());

    f.logger.set_debug(true);
    f.logger.debug("debug test");
    assert_eq!(f.logger.past_logs().len(), 1);
    assert_eq!(written(&f.debug), vec![f.logger.past_logs().last().unwrap().output.clone()]);
}

#[test]
fn blank_defaults_to_log_stream() {
    let mut f = fixture();
    f.logger.blank();

    let last = f.logger.past_logs().last().unwrap();
    assert_eq!(last.level, Level::Blank);
    assert_eq!(last.message, "\n");
    assert_eq!(last.stream, "log");
    assert_eq!(written(&f.log), vec!["\n".to_string()]);
}

#[test]
fn blank_on_named_streams() {
    let mut f = fixture();

    f.logger.blank_on("info");
    assert_eq!(f.info.contents(), "\n");
    assert_eq!(f.logger.past_logs().last().unwrap().stream, "info");

    f.logger.blank_on("error");
    assert_eq!(written(&f.error), vec!["\n".to_string()]);
    assert_eq!(f.logger.past_logs().last().unwrap().stream, "error");

    f.logger.blank_on("warning");
    let last = f.logger.past_logs().last().unwrap();
    assert_eq!(last.level, Level::Blank);
    assert!(last.is_err());
}

#[test]
fn clear_writes_full_or_standard_code() {
    let mut f = fixture();

    f.logger.clear(true);
    let last = f.logger.past_logs().last().unwrap();
    assert_eq!(last.level, Level::Clear);
    assert_eq!(last.message, "\x1b[2J");
    assert_eq!(last.stream, "clear");

    f.logger.clear(false);
    assert_eq!(f.logger.past_logs().last().unwrap().message, "\x1b[0f");

    assert_eq!(
        written(&f.clear),
        vec!["\x1b[2J".to_string(), "\x1b[0f".to_string()]
    );
}

#[test]
fn custom_clear_codes_are_used() {
    let mut f = fixture();
    f.logger
        .set_options(Overrides::new().clear_full("FULL").clear_standard("HOME"));

    f.logger.clear(true).clear(false);
    assert_eq!(written(&f.clear), vec!["FULL".to_string(), "HOME".to_string()]);
}

#[test]
fn every_level_reports_unusable_sinks() {
    let mut overrides = Overrides::new()
        .verbose(true)
        .debug(true)
        .stream("clear", Sink::Unusable("nowhere".to_string()));
    for level in Level::emitting() {
        overrides = overrides.stream(level.as_str(), Sink::Unusable("nowhere".to_string()));
    }
    let mut logger = Logger::new(overrides);

    logger
        .verbose("v")
        .info("i")
        .error("e")
        .warning("w")
        .notice("n")
        .debug("d")
        .log("l")
        .clear(true)
        .blank();

    let history = logger.past_logs();
    assert_eq!(history.len(), 9);
    for record in history {
        assert!(
            matches!(record.error, Some(Error::InvalidSink { ref stream }) if *stream == record.stream),
            "{} record has no error",
            record.level
        );
    }
}

#[test]
fn history_keeps_last_entries() {
    let mut f = fixture();
    for i in 0..5 {
        f.logger.log(i);
    }

    let messages: Vec<&str> = f
        .logger
        .past_logs()
        .iter()
        .map(|r| r.message.as_str())
        .collect();
    assert_eq!(messages, vec!["2", "3", "4"]);
}

#[test]
fn shrinking_history_through_options_trims_immediately() {
    let mut f = fixture();
    f.logger.log("a").log("b").log("c");
    f.logger.set_options(Overrides::new().max_log_history(1));

    assert_eq!(f.logger.past_logs().len(), 1);
    assert_eq!(f.logger.past_logs().last().unwrap().message, "c");
}

#[test]
fn empty_overrides_change_nothing() {
    let mut f = fixture();
    let before = format!("{:?}", f.logger.options());

    f.logger.set_options(Overrides::new());

    assert_eq!(format!("{:?}", f.logger.options()), before);
}

#[test]
fn set_options_merges_formats_key_by_key() {
    let mut f = fixture();
    f.logger
        .set_options(Overrides::new().format_value("app", "footstep"));

    let formats = &f.logger.options().formats;
    for key in ["date", "type", "message", "app"] {
        assert!(formats.contains_key(key), "missing {key}");
    }
}

#[test]
fn set_options_replaces_a_sink_whole() {
    let mut f = fixture();
    let (warnings, sink) = capture();
    f.logger.set_options(Overrides::new().stream("warning", sink));

    f.logger.warning("now it works");

    assert!(!f.logger.past_logs().last().unwrap().is_err());
    assert_eq!(written(&warnings).len(), 1);
    // other streams are untouched
    f.logger.log("still here");
    assert_eq!(written(&f.log).len(), 1);
}

#[test]
fn methods_chain() {
    let mut f = fixture();
    f.logger.info("a").notice("b").log("c");

    let levels: Vec<Level> = f.logger.past_logs().iter().map(|r| r.level).collect();
    assert_eq!(levels, vec![Level::Info, Level::Notice, Level::Log]);
}

#[test]
fn log_macro_interpolates_arguments() {
    let mut f = fixture();
    footstep::log!(f.logger, Level::Log, "%s took %dms", "build", 42);
    footstep::log!(f.logger, Level::Log, "plain", "args", 1);

    let messages: Vec<&str> = f
        .logger
        .past_logs()
        .iter()
        .map(|r| r.message.as_str())
        .collect();
    assert_eq!(messages, vec!["build took 42ms", "plain args 1"]);
}

#[test]
fn level_macros_interpolate_and_route() {
    let mut f = fixture();
    footstep::info!(f.logger, "%s is %d%% done", "sync", 40);
    footstep::error!(f.logger, "failed:", "disk", "full");
    footstep::verbose!(f.logger, "step %i", 2.7);
    footstep::debug!(f.logger, "cache %s", "cold");
    footstep::notice!(f.logger, "single %s argument");
    footstep::warning!(f.logger, "nowhere %s", "to go");

    let records: Vec<(Level, &str)> = f
        .logger
        .past_logs()
        .iter()
        .map(|r| (r.level, r.message.as_str()))
        .collect();
    assert_eq!(
        records[..],
        [
            (Level::Debug, "cache cold"),
            (Level::Notice, "single %s argument"),
            (Level::Warning, "nowhere to go"),
        ]
    );
    assert!(strip(&f.info.contents()).ends_with("info : sync is 40% done"));
    assert!(strip(&written(&f.error)[0]).ends_with("error : failed: disk full"));
    assert!(strip(&written(&f.verbose)[0]).ends_with("verbose : step 2"));
    assert!(f.logger.past_logs().last().unwrap().is_err());
}

#[test]
fn emit_routes_control_levels() {
    let mut f = fixture();
    f.logger.emit(Level::Clear, &[]).emit(Level::Blank, &[]);

    let levels: Vec<Level> = f.logger.past_logs().iter().map(|r| r.level).collect();
    assert_eq!(levels, vec![Level::Clear, Level::Blank]);
}

#[test]
fn default_format_renders_clock_badge_and_message() {
    let stream = MemoryStream::new();
    let mut logger = Logger::new(Overrides::new().stream("info", Sink::stream(stream.clone())));

    logger.info("hello");

    let output = stream.contents();
    assert!(output.contains('\x1b'));
    let pattern = Regex::new(&format!(
        r"^\[\d{{2}}:\d{{2}}:\d{{2}}\]  info : hello{}$",
        regex::escape(LINE_ENDING)
    ))
    .unwrap();
    assert!(pattern.is_match(&strip(&output)), "got {output:?}");
}

#[test]
fn colors_off_strips_styling() {
    let stream = MemoryStream::new();
    let mut logger = Logger::new(
        Overrides::new()
            .colors(false)
            .stream("error", Sink::stream(stream.clone())),
    );

    logger.error("plain please");

    assert!(!stream.contents().contains('\x1b'));
    assert!(!logger.past_logs().last().unwrap().output.contains('\x1b'));
}

#[test]
fn defaults() {
    let logger = Logger::default();
    let options = logger.options();

    assert_eq!(options.eol, LINE_ENDING);
    assert_eq!(options.max_log_history, 50);
    assert!(!options.verbose);
    assert!(!options.debug);
    assert!(options.colors);
    assert_eq!(options.clear_codes.full, "\x1b[2J");
    assert_eq!(options.clear_codes.standard, "\x1b[0f");
    for level in Level::emitting() {
        assert!(options.streams.contains_key(level.as_str()));
    }
    assert!(options.streams.contains_key("clear"));
    assert!(logger.past_logs().is_empty());
}

#[test]
fn loggers_do_not_share_options() {
    let mut a = Logger::default();
    let b = Logger::default();

    a.set_options(Overrides::new().prefix("A ").format_value("x", "y"));

    assert_eq!(b.options().prefix, "");
    assert!(!b.options().formats.contains_key("x"));
}
