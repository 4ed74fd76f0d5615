//! Indentation scenarios over whole scripts.

mod common;

use common::{assert_fixed_point, assert_reindents};
use kixtart_rs::{IndentOptions, reindent};

#[test]
fn flat_if_else_select_normalizes() {
    assert_reindents(
        "Break On\n\
         If InGroup('Admins')\n\
         ? 'admin'\n\
         Else\n\
         Select\n\
         Case @INWIN = 1\n\
         ? 'nt family'\n\
         Case 1\n\
         Beep\n\
         EndSelect\n\
         EndIf\n",
        "Break On\n\
         If InGroup('Admins')\n\
         \x20   ? 'admin'\n\
         Else\n\
         \x20   Select\n\
         \x20   Case @INWIN = 1\n\
         \x20       ? 'nt family'\n\
         \x20   Case 1\n\
         \x20       Beep\n\
         \x20   EndSelect\n\
         EndIf\n",
    );
}

#[test]
fn function_with_loops_normalizes() {
    assert_reindents(
        "Function Tally($limit)\n\
         $i = 0\n\
         Do\n\
         $i = $i + 1\n\
         Until $i > $limit\n\
         For $j = 1 to 3\n\
         ? $j\n\
         Next\n\
         EndFunction\n",
        "Function Tally($limit)\n\
         \x20   $i = 0\n\
         \x20   Do\n\
         \x20       $i = $i + 1\n\
         \x20   Until $i > $limit\n\
         \x20   For $j = 1 to 3\n\
         \x20       ? $j\n\
         \x20   Next\n\
         EndFunction\n",
    );
}

#[test]
fn over_indented_script_is_pulled_back() {
    assert_reindents(
        "        If $a\n  $x = 1\n      EndIf\n",
        "If $a\n    $x = 1\nEndIf\n",
    );
}

#[test]
fn hanging_call_arguments_indent_past_the_block() {
    assert_reindents(
        "If $a\n\
         $x = Join(\n\
         'a',\n\
         'b'\n\
         )\n\
         CLS\n\
         EndIf\n",
        "If $a\n\
         \x20   $x = Join(\n\
         \x20       'a',\n\
         \x20       'b'\n\
         \x20   )\n\
         \x20   CLS\n\
         EndIf\n",
    );
}

#[test]
fn block_comment_interior_is_left_alone() {
    assert_reindents(
        "Function Notes\n\
         /* hand\n\
         \x20  table */\n\
         CLS\n\
         EndFunction\n",
        "Function Notes\n\
         \x20   /* hand\n\
         \x20  table */\n\
         \x20   CLS\n\
         EndFunction\n",
    );
}

#[test]
fn multiline_string_is_left_alone() {
    assert_fixed_point("$banner = 'first\n  second\nthird'\n? $banner\n");
}

#[test]
fn blank_interior_lines_of_strings_and_comments_are_left_alone() {
    // The whitespace on the middle lines is content, not indentation.
    assert_fixed_point("$banner = 'first\n \x20 \nthird'\n");
    assert_fixed_point("/* top\n \x20 \nbottom */\nCLS\n");
}

#[test]
fn cr_only_script_normalizes_line_by_line() {
    assert_reindents("Do\rBeep\rUntil $x\r", "Do\r    Beep\rUntil $x\r");
}

#[test]
fn line_comments_indent_with_their_block() {
    assert_reindents(
        "While $go\n; spin\n$n = $n + 1\nLoop\n",
        "While $go\n    ; spin\n    $n = $n + 1\nLoop\n",
    );
}

#[test]
fn crlf_script_normalizes_and_keeps_terminators() {
    assert_reindents(
        "If $a\r\nCLS\r\nEndIf\r\n",
        "If $a\r\n    CLS\r\nEndIf\r\n",
    );
}

#[test]
fn blank_separator_lines_are_emptied() {
    assert_reindents(
        "Function A\nEndFunction\n   \t\nFunction B\nEndFunction\n",
        "Function A\nEndFunction\n\nFunction B\nEndFunction\n",
    );
}

#[test]
fn three_levels_of_nesting() {
    assert_fixed_point(
        "Function Deep\n\
         \x20   While $a\n\
         \x20       If $b\n\
         \x20           Beep\n\
         \x20       EndIf\n\
         \x20   Loop\n\
         EndFunction\n",
    );
}

#[test]
fn narrow_offset_applies_everywhere() {
    let two = IndentOptions::new(2).expect("options");
    assert_eq!(
        reindent("If $a\nDo\nBeep\nUntil $b\nEndIf\n", &two),
        "If $a\n  Do\n    Beep\n  Until $b\nEndIf\n"
    );
}

#[test]
fn zero_offset_flattens_everything() {
    let zero = IndentOptions::new(0).expect("options");
    assert_eq!(
        reindent("If $a\n    CLS\nEndIf\n", &zero),
        "If $a\nCLS\nEndIf\n"
    );
}

#[test]
fn reindent_of_empty_and_terminatorless_input() {
    let options = IndentOptions::default();
    assert_eq!(reindent("", &options), "");
    assert_eq!(reindent("CLS", &options), "CLS");
    assert_eq!(reindent("Do\nBeep", &options), "Do\n    Beep");
}

#[test]
fn unterminated_block_still_indents_its_body() {
    assert_reindents("Do\n$x = 1\n", "Do\n    $x = 1\n");
}

#[test]
fn stray_closers_stay_at_the_margin() {
    assert_fixed_point("EndIf\nEndSelect\nLoop\n");
}
