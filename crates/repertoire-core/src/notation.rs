//! Rudimentary shape checks for algebraic chess notation.
//!
//! These checks look at notation *shape* only — they never consult a
//! board state, so false positives are possible (a legal-looking token
//! for an impossible move still validates).

/// Returns true if `token` looks like a move in standard algebraic
/// notation.
///
/// Capture (`x`), check (`+`) and checkmate (`#`) markers are stripped
/// from the whole token before any other check runs, so a stray
/// leading `x` does not disqualify an otherwise valid token. After
/// stripping, the token must be at least two characters, be one of the
/// castling literals `O-O` / `O-O-O`, or start with a file letter or
/// piece letter and end in a board coordinate.
pub fn is_valid_move(token: &str) -> bool {
    let stripped: String = token
        .chars()
        .filter(|c| !matches!(c, '#' | '+' | 'x'))
        .collect();

    if stripped.len() < 2 {
        return false;
    }

    if stripped == "O-O" || stripped == "O-O-O" {
        return true;
    }

    let bytes = stripped.as_bytes();

    // Front must name a pawn file or a piece.
    if !matches!(bytes[0], b'a'..=b'h' | b'Q' | b'K' | b'B' | b'N' | b'R') {
        return false;
    }

    // Back must be a destination square.
    matches!(bytes[bytes.len() - 2], b'a'..=b'h') && matches!(bytes[bytes.len() - 1], b'1'..=b'8')
}

/// Like [`is_valid_move`], but warns when the token is rejected. Used
/// at mutation boundaries where a bad token means a caller mistake
/// rather than ingestion noise.
pub fn is_valid_move_logged(token: &str) -> bool {
    let result = is_valid_move(token);
    if !result {
        tracing::warn!("invalid move notation: {:?}", token);
    }
    result
}
