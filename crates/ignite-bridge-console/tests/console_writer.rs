use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::thread;

use ignite_bridge_console::{ConsoleWriter, ConsoleWriterConfig, JAVA_ILLEGAL_ACCESS_WARNINGS};
use ignite_bridge_test_utils::CapturedConsole;
use pretty_assertions::assert_eq;

fn config(dir: &Path, suppress: bool) -> ConsoleWriterConfig {
    ConsoleWriterConfig {
        log_file_path: dir.join("dotnet-test-2.log"),
        suppress_known_warnings: suppress,
        culture: "en-US".to_string(),
    }
}

fn header() -> &'static str {
    "ConsoleWriter Initialized.\nCULTURE: en-US\n"
}

#[test]
fn test_messages_reach_console_and_file() {
    let dir = tempfile::tempdir().unwrap();
    let console = CapturedConsole::new();
    let writer = ConsoleWriter::with_console(config(dir.path(), false), Box::new(console.clone()))
        .unwrap();

    let mut expected = String::new();
    for warning in JAVA_ILLEGAL_ACCESS_WARNINGS {
        let line = format!("{warning}\n");
        writer.write(&line, true).unwrap();
        expected.push_str(&format!("|ERR-True-False|: {line}"));
    }
    writer.write("[main] Ignite node started OK\n", false).unwrap();
    expected.push_str("[main] Ignite node started OK\n");
    writer.write("java.lang.OutOfMemoryError\n", true).unwrap();
    expected.push_str("|ERR-False-False|: java.lang.OutOfMemoryError\n");

    assert_eq!(console.contents(), expected);
    assert_eq!(
        fs::read_to_string(writer.log_file_path()).unwrap(),
        format!("{}{expected}", header())
    );
}

#[test]
fn test_second_writer_truncates_first() {
    let dir = tempfile::tempdir().unwrap();

    let first = ConsoleWriter::with_console(
        config(dir.path(), false),
        Box::new(CapturedConsole::new()),
    )
    .unwrap();
    first.write("from the first run\n", false).unwrap();

    let second = ConsoleWriter::with_console(
        config(dir.path(), true),
        Box::new(CapturedConsole::new()),
    )
    .unwrap();

    assert_eq!(first.log_file_path(), second.log_file_path());
    assert_eq!(
        fs::read_to_string(second.log_file_path()).unwrap(),
        header()
    );

    second.write("from the second run\n", false).unwrap();
    assert_eq!(
        fs::read_to_string(second.log_file_path()).unwrap(),
        format!("{}from the second run\n", header())
    );
}

#[test]
fn test_concurrent_writes_are_not_interleaved() {
    const THREADS: usize = 16;
    const MESSAGES: usize = 250;

    let dir = tempfile::tempdir().unwrap();
    let console = CapturedConsole::new();
    let writer = ConsoleWriter::with_console(config(dir.path(), false), Box::new(console.clone()))
        .unwrap();

    thread::scope(|s| {
        for t in 0..THREADS {
            let writer = &writer;
            s.spawn(move || {
                for i in 0..MESSAGES {
                    let is_error = i % 3 == 0;
                    writer
                        .write(&format!("thread-{t} message-{i}\n"), is_error)
                        .unwrap();
                }
            });
        }
    });

    let contents = fs::read_to_string(writer.log_file_path()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), THREADS * MESSAGES + 2);
    assert_eq!(lines[0], "ConsoleWriter Initialized.");
    assert_eq!(lines[1], "CULTURE: en-US");

    let mut expected = HashSet::new();
    for t in 0..THREADS {
        for i in 0..MESSAGES {
            let line = if i % 3 == 0 {
                format!("|ERR-False-False|: thread-{t} message-{i}")
            } else {
                format!("thread-{t} message-{i}")
            };
            expected.insert(line);
        }
    }
    let written: HashSet<String> = lines[2..].iter().map(|l| l.to_string()).collect();
    assert_eq!(written.len(), THREADS * MESSAGES);
    assert_eq!(written, expected);

    // The console sees the same set of lines, in whatever order
    assert_eq!(console.contents().lines().count(), THREADS * MESSAGES);
}
