//! Function navigation and the script outline.
//!
//! Moves a cursor between `Function` / `EndFunction` keywords, names the
//! function enclosing a position, and builds a flat index of declared
//! functions and labels. All positions are byte offsets; keywords inside
//! comments or strings never count because they lex as comment and
//! string tokens.

use crate::lexer::tokenize;
use crate::token::TokenKind;

/// A named entry of the script outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Name as written, without any sigil.
    pub name: String,
    /// Byte offset of the defining token.
    pub offset: usize,
}

/// Flat outline of a script, grouped by kind, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptIndex {
    pub functions: Vec<IndexEntry>,
    pub labels: Vec<IndexEntry>,
}

/// Move to the start of a `Function` keyword.
///
/// A positive `count` searches backward from `pos` that many
/// declarations; a negative `count` searches forward. Movement is all or
/// nothing: when fewer than `count` declarations exist in the chosen
/// direction the position comes back unchanged with `false`.
#[must_use]
pub fn beginning_of_function(text: &str, pos: usize, count: isize) -> (bool, usize) {
    move_to_keyword(text, pos, count.unsigned_abs(), count < 0, "function", Edge::Start)
}

/// Move to just after an `EndFunction` keyword.
///
/// A positive `count` searches forward from `pos`; a negative `count`
/// searches backward. Same all-or-nothing contract as
/// [`beginning_of_function`].
#[must_use]
pub fn end_of_function(text: &str, pos: usize, count: isize) -> (bool, usize) {
    move_to_keyword(text, pos, count.unsigned_abs(), count > 0, "endfunction", Edge::End)
}

/// Which edge of the matched keyword the cursor lands on.
#[derive(Clone, Copy)]
enum Edge {
    Start,
    End,
}

fn move_to_keyword(
    text: &str,
    pos: usize,
    steps: usize,
    forward: bool,
    word: &str,
    edge: Edge,
) -> (bool, usize) {
    if steps == 0 {
        return (true, pos);
    }
    let stops: Vec<usize> = tokenize(text)
        .iter()
        .filter(|token| {
            token.kind == TokenKind::Command && token.text(text).eq_ignore_ascii_case(word)
        })
        .map(|token| match edge {
            Edge::Start => token.span.start,
            Edge::End => token.span.end,
        })
        .collect();

    let target = if forward {
        stops.iter().copied().filter(|&stop| stop > pos).nth(steps - 1)
    } else {
        stops.iter().rev().copied().filter(|&stop| stop < pos).nth(steps - 1)
    };
    target.map_or((false, pos), |stop| (true, stop))
}

/// Name of the function whose declaration encloses `pos`, if any.
///
/// Tracks `Function` / `EndFunction` pairs up to `pos` and reports the
/// innermost one still open. A declaration whose name the classifier
/// could not attach (name on a later line) encloses the position
/// anonymously and yields `None`.
#[must_use]
pub fn current_function(text: &str, pos: usize) -> Option<String> {
    let tokens = tokenize(text);
    let limit = tokens.partition_point(|token| token.span.start < pos);
    let mut open: Vec<Option<&str>> = Vec::new();
    for i in 0..limit {
        if tokens[i].kind != TokenKind::Command {
            continue;
        }
        let word = tokens[i].text(text);
        if word.eq_ignore_ascii_case("function") {
            let name = tokens
                .get(i + 1)
                .filter(|token| token.kind == TokenKind::UserFunction)
                .map(|token| token.text(text));
            open.push(name);
        } else if word.eq_ignore_ascii_case("endfunction") {
            open.pop();
        }
    }
    open.last().copied().flatten().map(str::to_owned)
}

/// Index of every function declaration and label in the script.
#[must_use]
pub fn script_index(text: &str) -> ScriptIndex {
    let mut index = ScriptIndex::default();
    for token in tokenize(text) {
        match token.kind {
            TokenKind::UserFunction => index.functions.push(IndexEntry {
                name: token.text(text).to_owned(),
                offset: token.span.start,
            }),
            TokenKind::Label => index.labels.push(IndexEntry {
                name: token.text(text)[1..].to_owned(),
                offset: token.span.start,
            }),
            _ => {}
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = "\
Function First
    $a = 1
EndFunction

Function Second
    $b = 2
EndFunction
";

    #[test]
    fn beginning_moves_backward_to_nearest_declaration() {
        let second = SCRIPT.find("Function Second").expect("declaration");
        let (moved, pos) = beginning_of_function(SCRIPT, SCRIPT.len(), 1);
        assert!(moved);
        assert_eq!(pos, second);
    }

    #[test]
    fn beginning_honors_the_count() {
        let (moved, pos) = beginning_of_function(SCRIPT, SCRIPT.len(), 2);
        assert!(moved);
        assert_eq!(pos, 0);
    }

    #[test]
    fn beginning_with_negative_count_moves_forward() {
        let second = SCRIPT.find("Function Second").expect("declaration");
        let (moved, pos) = beginning_of_function(SCRIPT, 1, -1);
        assert!(moved);
        assert_eq!(pos, second);
    }

    #[test]
    fn beginning_fails_without_enough_declarations() {
        assert_eq!(beginning_of_function(SCRIPT, SCRIPT.len(), 3), (false, SCRIPT.len()));
        assert_eq!(beginning_of_function("$x = 1\n", 7, 1), (false, 7));
    }

    #[test]
    fn zero_count_stays_put() {
        assert_eq!(beginning_of_function(SCRIPT, 5, 0), (true, 5));
        assert_eq!(end_of_function(SCRIPT, 5, 0), (true, 5));
    }

    #[test]
    fn end_lands_just_after_the_keyword() {
        let first_end = SCRIPT.find("EndFunction").expect("closer") + "EndFunction".len();
        let (moved, pos) = end_of_function(SCRIPT, 0, 1);
        assert!(moved);
        assert_eq!(pos, first_end);
        assert_eq!(&SCRIPT[pos - 11..pos], "EndFunction");
    }

    #[test]
    fn end_with_negative_count_moves_backward() {
        let first_end = SCRIPT.find("EndFunction").expect("closer") + "EndFunction".len();
        let (moved, pos) = end_of_function(SCRIPT, SCRIPT.len(), -2);
        assert!(moved);
        assert_eq!(pos, first_end);
    }

    #[test]
    fn keywords_inside_comments_and_strings_are_skipped() {
        let text = "; Function Fake\n$s = 'Function Fake'\nFunction Real\nEndFunction\n";
        let real = text.find("Function Real").expect("declaration");
        assert_eq!(beginning_of_function(text, text.len(), 1), (true, real));
        assert_eq!(beginning_of_function(text, real, 1), (false, real));
    }

    #[test]
    fn current_function_names_the_enclosing_declaration() {
        let inside = SCRIPT.find("$b").expect("body");
        assert_eq!(current_function(SCRIPT, inside), Some("Second".to_owned()));
    }

    #[test]
    fn current_function_is_none_between_declarations() {
        let between = SCRIPT.find("\n\n").expect("gap") + 1;
        assert_eq!(current_function(SCRIPT, between), None);
        assert_eq!(current_function(SCRIPT, 0), None);
        assert_eq!(current_function(SCRIPT, SCRIPT.len()), None);
    }

    #[test]
    fn current_function_sees_the_name_right_after_the_keyword() {
        let name = SCRIPT.find("First").expect("name");
        assert_eq!(current_function(SCRIPT, name), Some("First".to_owned()));
    }

    #[test]
    fn unnamed_declaration_encloses_anonymously() {
        let text = "Function\nLater\n$x = 1\nEndFunction\n";
        let inside = text.find("$x").expect("body");
        assert_eq!(current_function(text, inside), None);
    }

    #[test]
    fn index_collects_functions_and_labels_in_order() {
        let text = "Function Setup\nEndFunction\n:start\nGoto start\n:done\nFunction Run\nEndFunction\n";
        let index = script_index(text);
        assert_eq!(
            index.functions,
            vec![
                IndexEntry { name: "Setup".to_owned(), offset: 9 },
                IndexEntry {
                    name: "Run".to_owned(),
                    offset: text.find("Run\n").expect("declaration"),
                },
            ]
        );
        assert_eq!(index.labels.len(), 2);
        assert_eq!(index.labels[0].name, "start");
        assert_eq!(index.labels[0].offset, text.find(":start").expect("label"));
        assert_eq!(index.labels[1].name, "done");
    }

    #[test]
    fn index_strips_the_label_sigil_but_keeps_case() {
        let index = script_index(":MixedCase\n");
        assert_eq!(index.labels[0].name, "MixedCase");
    }

    #[test]
    fn index_of_plain_script_is_empty() {
        let index = script_index("$x = 1\nCLS\n");
        assert!(index.functions.is_empty());
        assert!(index.labels.is_empty());
    }
}
