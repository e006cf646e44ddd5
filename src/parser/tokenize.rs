//! Tokenizer — turns Lua source text into a flat stream of directive tokens.
//!
//! Only `---` doc comments carry documentation. Plain `--` comments are
//! skipped, and every other non-blank line is code, which closes the record
//! being documented. Directive bodies start at `@` and may run on across
//! several comment lines.

/// Marker that opens a documentation comment line.
pub const DOC_MARKER: &str = "---";

/// Marker of an ordinary (non-documentation) comment line.
const COMMENT_MARKER: &str = "--";

/// One unit of documentation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Directive body without the leading `@`, e.g. `param a number first operand`
    Directive(String),
    /// A code line was seen; the current record is complete.
    Terminator,
}

enum Line<'a> {
    Doc(&'a str),
    Comment,
    Code,
}

fn classify(line: &str) -> Line<'_> {
    if let Some(rest) = line.strip_prefix(DOC_MARKER) {
        Line::Doc(rest.trim())
    } else if line.starts_with(COMMENT_MARKER) {
        Line::Comment
    } else {
        Line::Code
    }
}

/// Tokenize one source file.
///
/// A file without doc comments produces no tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current: Option<String> = None;

    for line in source.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match classify(line) {
            Line::Comment => {}
            Line::Code => {
                flush(&mut tokens, &mut current);
                if tokens.last() != Some(&Token::Terminator) {
                    tokens.push(Token::Terminator);
                }
            }
            Line::Doc(text) => {
                let text = collapse_whitespace(text);
                let mut pieces = text.split('@');
                // Text before the first '@' continues the open directive
                if let Some(head) = pieces.next() {
                    continue_directive(&mut current, head);
                }
                for piece in pieces {
                    flush(&mut tokens, &mut current);
                    current = Some(piece.to_string());
                }
            }
        }
    }
    flush(&mut tokens, &mut current);

    // Nothing before the first real directive belongs to a record
    let leading = tokens
        .iter()
        .take_while(|t| match t {
            Token::Terminator => true,
            Token::Directive(body) => body.is_empty(),
        })
        .count();
    tokens.drain(..leading);
    tokens
}

fn continue_directive(current: &mut Option<String>, text: &str) {
    if text.is_empty() {
        return;
    }
    match current {
        Some(body) => {
            body.push(' ');
            body.push_str(text);
        }
        None => *current = Some(text.to_string()),
    }
}

fn flush(tokens: &mut Vec<Token>, current: &mut Option<String>) {
    if let Some(body) = current.take() {
        tokens.push(Token::Directive(body.trim().to_string()));
    }
}

/// Tabs and runs of spaces become a single space.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directive(s: &str) -> Token {
        Token::Directive(s.to_string())
    }

    #[test]
    fn no_doc_comments_yields_nothing() {
        let input = "local x = 1\n-- plain comment\nfunction f() end\n";
        assert!(tokenize(input).is_empty());
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("\n   \n\t\n").is_empty());
    }

    #[test]
    fn single_record() {
        let input = "--- @method add adds two numbers\n\
                     --- @param a number first operand\n\
                     function add(a,b) return a+b end\n";
        assert_eq!(
            tokenize(input),
            vec![
                directive("method add adds two numbers"),
                directive("param a number first operand"),
                Token::Terminator,
            ]
        );
    }

    #[test]
    fn directive_spans_lines() {
        let input = "--- @method add adds\n---   two\tnumbers\nfunction add() end\n";
        assert_eq!(
            tokenize(input),
            vec![directive("method add adds two numbers"), Token::Terminator]
        );
    }

    #[test]
    fn several_directives_on_one_line() {
        let input = "--- @method f does f @return nil nothing\nf()\n";
        assert_eq!(
            tokenize(input),
            vec![
                directive("method f does f"),
                directive("return nil nothing"),
                Token::Terminator,
            ]
        );
    }

    #[test]
    fn consecutive_code_lines_collapse() {
        let input = "--- @method f does f\nlocal a = 1\nlocal b = 2\n\nlocal c = 3\n--- @method g does g\ng()\n";
        assert_eq!(
            tokenize(input),
            vec![
                directive("method f does f"),
                Token::Terminator,
                directive("method g does g"),
                Token::Terminator,
            ]
        );
    }

    #[test]
    fn leading_code_and_blanks_are_dropped() {
        let input = "require 'x'\nlocal y = 2\n---\n--- @method f does f\nf()\n";
        assert_eq!(
            tokenize(input),
            vec![directive("method f does f"), Token::Terminator]
        );
    }

    #[test]
    fn plain_comments_do_not_terminate() {
        let input = "--- @method f does f\n-- implementation note\n--- @return nil nothing\nf()\n";
        assert_eq!(
            tokenize(input),
            vec![
                directive("method f does f"),
                directive("return nil nothing"),
                Token::Terminator,
            ]
        );
    }

    #[test]
    fn unterminated_record_keeps_tokens() {
        let input = "--- @method f does f\n";
        assert_eq!(tokenize(input), vec![directive("method f does f")]);
    }

    #[test]
    fn marker_needs_no_space() {
        let input = "---@method f does f\nf()\n";
        assert_eq!(
            tokenize(input),
            vec![directive("method f does f"), Token::Terminator]
        );
    }

    #[test]
    fn text_after_code_without_at_is_a_bare_directive() {
        let input = "f()\n--- just prose\ng()\n";
        assert_eq!(tokenize(input), vec![directive("just prose"), Token::Terminator]);
    }

    #[test]
    fn empty_piece_inside_record_is_kept() {
        let input = "--- @method f does f @@return nil x\nf()\n";
        assert_eq!(
            tokenize(input),
            vec![
                directive("method f does f"),
                directive(""),
                directive("return nil x"),
                Token::Terminator,
            ]
        );
    }
}
