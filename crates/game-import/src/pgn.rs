//! PGN tag-pair and movetext extraction — lightweight regex-based.

use regex::Regex;

/// Extract a string value from a PGN header (e.g. White, Termination).
pub fn extract_header(pgn: &str, header_name: &str) -> Option<String> {
    let pattern = format!(r#"\[{}\s+"([^"]*)"\]"#, regex::escape(header_name));
    let re = Regex::new(&pattern).ok()?;
    let value = re.captures(pgn)?.get(1)?.as_str().to_string();
    if value.is_empty() { None } else { Some(value) }
}

/// Extract an integer value from a PGN header (e.g. WhiteElo).
pub fn extract_header_int(pgn: &str, header_name: &str) -> Option<i32> {
    let pattern = format!(r#"\[{}\s+"(\d+)"\]"#, regex::escape(header_name));
    let re = Regex::new(&pattern).ok()?;
    re.captures(pgn)?.get(1)?.as_str().parse().ok()
}

/// Strip tag pairs, comments and variations, leaving raw movetext.
///
/// Move numbers and result markers survive here on purpose; the
/// move-sequence constructor filters them out downstream.
pub fn extract_movetext(pgn: &str) -> String {
    let header_re = Regex::new(r"\[[^\]]*\]").unwrap();
    let no_headers = header_re.replace_all(pgn, "");

    let comment_re = Regex::new(r"\{[^}]*\}").unwrap();
    let no_comments = comment_re.replace_all(&no_headers, "");

    let variation_re = Regex::new(r"\([^)]*\)").unwrap();
    variation_re.replace_all(&no_comments, "").into_owned()
}

/// Split a multi-game PGN dump into per-game chunks. A new game starts
/// at each `[Event ...]` tag; text before the first one is dropped.
pub fn split_games(pgn: &str) -> Vec<String> {
    let mut games: Vec<String> = Vec::new();
    for line in pgn.lines() {
        if line.trim_start().starts_with("[Event ") {
            games.push(String::new());
        }
        if let Some(current) = games.last_mut() {
            current.push_str(line);
            current.push('\n');
        }
    }
    games
}
