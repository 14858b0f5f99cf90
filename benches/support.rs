//! Shared helpers for benchmarks

use runepad::EditorSession;

/// Code-like text with ligature pairs and a few long lines that wrap
#[allow(dead_code)]
pub fn sample_text(lines: usize) -> String {
    let patterns = [
        "fn process(&mut self, doc: &Document) -> Result<(), Error> {",
        "    if a != b && c >= d || e == f { count++; }",
        "",
        "    let mapped = items.iter().map(|x| x => x * 2).collect::<Vec<_>>(); // a rather long line that will certainly wrap at the default width",
        "}",
    ];
    let mut text = String::new();
    for i in 0..lines {
        text.push_str(patterns[i % patterns.len()]);
        text.push('\n');
    }
    text
}

/// Session over [`sample_text`], 1920 px wide
#[allow(dead_code)]
pub fn make_session(lines: usize) -> EditorSession {
    let mut session = EditorSession::new(&sample_text(lines));
    session.resize(1920.0, 1080.0);
    session
}
