//! Fixed name tables and the block keyword pairing.
//!
//! All lookups are case-insensitive. The tables are static sorted slices
//! (lowercase) probed by binary search; the macro table additionally has a
//! lazily derived longest-first ordering so that prefix matching always
//! prefers the longest known name (`@MONTHNO` over `@MONTH`).

use once_cell::sync::Lazy;

/// Command keywords, lowercase, sorted. The `?` print alias is a single
/// punctuation character and is handled directly by the scanner.
pub(crate) static COMMANDS: &[&str] = &[
    "beep",
    "big",
    "break",
    "call",
    "case",
    "cd",
    "cls",
    "color",
    "cookie1",
    "copy",
    "debug",
    "del",
    "dim",
    "display",
    "do",
    "each",
    "else",
    "endfunction",
    "endif",
    "endselect",
    "exit",
    "flushkb",
    "for",
    "function",
    "get",
    "gets",
    "global",
    "gosub",
    "goto",
    "if",
    "in",
    "include",
    "loop",
    "md",
    "move",
    "next",
    "password",
    "play",
    "quit",
    "rd",
    "redim",
    "return",
    "run",
    "select",
    "set",
    "setl",
    "setm",
    "settime",
    "shell",
    "sleep",
    "small",
    "until",
    "use",
    "while",
];

/// Built-in function names, lowercase, sorted.
pub(crate) static FUNCTIONS: &[&str] = &[
    "abs",
    "addkey",
    "addprinterconnection",
    "addprogramgroup",
    "addprogramitem",
    "asc",
    "ascan",
    "at",
    "backupeventlog",
    "box",
    "cdbl",
    "chr",
    "cint",
    "cleareventlog",
    "close",
    "comparefiletimes",
    "createobject",
    "cstr",
    "dectohex",
    "delkey",
    "delprinterconnection",
    "delprogramgroup",
    "delprogramitem",
    "deltree",
    "delvalue",
    "dir",
    "enumgroup",
    "enumipinfo",
    "enumkey",
    "enumlocalgroup",
    "enumvalue",
    "execute",
    "exist",
    "existkey",
    "expandenvironmentvars",
    "fix",
    "formatnumber",
    "freefilehandle",
    "getcommandline",
    "getdiskspace",
    "getfileattr",
    "getfilesize",
    "getfiletime",
    "getfileversion",
    "getobject",
    "iif",
    "ingroup",
    "instr",
    "instrrev",
    "int",
    "isdeclared",
    "join",
    "kbhit",
    "keyexist",
    "lcase",
    "left",
    "len",
    "loadhive",
    "loadkey",
    "logevent",
    "logoff",
    "ltrim",
    "memorysize",
    "messagebox",
    "open",
    "readline",
    "readprofilestring",
    "readtype",
    "readvalue",
    "redirectoutput",
    "right",
    "rnd",
    "rtrim",
    "savekey",
    "sendkeys",
    "sendmessage",
    "setascii",
    "setconsole",
    "setdefaultprinter",
    "setfileattr",
    "setfocus",
    "setoption",
    "setsystemstate",
    "settitle",
    "setwallpaper",
    "showprogramgroup",
    "shutdown",
    "sidtoname",
    "split",
    "srnd",
    "substr",
    "trim",
    "ubound",
    "ucase",
    "unloadhive",
    "val",
    "vartype",
    "vartypename",
    "writeline",
    "writeprofilestring",
    "writevalue",
];

/// Macro names (without the `@` sigil), lowercase, sorted.
pub(crate) static MACROS: &[&str] = &[
    "address",
    "build",
    "color",
    "comment",
    "cpu",
    "crlf",
    "csd",
    "curdir",
    "date",
    "day",
    "domain",
    "dos",
    "error",
    "fullname",
    "homedir",
    "homedrive",
    "homeshr",
    "hostname",
    "inwin",
    "ipaddress0",
    "ipaddress1",
    "ipaddress2",
    "ipaddress3",
    "kix",
    "lanroot",
    "ldomain",
    "ldrive",
    "lm",
    "logonmode",
    "longhomedir",
    "lserver",
    "maxpwage",
    "mdayno",
    "mhz",
    "month",
    "monthno",
    "msecs",
    "onwow64",
    "pid",
    "primarygroup",
    "priv",
    "productsuite",
    "producttype",
    "programfilesx86",
    "pwage",
    "ras",
    "result",
    "rserver",
    "scriptdir",
    "scriptexe",
    "scriptname",
    "serror",
    "sid",
    "site",
    "startdir",
    "syslang",
    "ticks",
    "time",
    "tssession",
    "userid",
    "userlang",
    "wdayno",
    "wksta",
    "wuserid",
    "ydayno",
    "year",
];

/// Macro names reordered longest-first so prefix matching prefers the
/// longest known name.
static MACROS_LONGEST_FIRST: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut names = MACROS.to_vec();
    names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    names
});

fn in_table(table: &[&str], word: &str) -> bool {
    let lower = word.to_ascii_lowercase();
    table.binary_search(&lower.as_str()).is_ok()
}

/// Whether `word` is a command keyword (case-insensitive).
#[must_use]
pub fn is_command(word: &str) -> bool {
    in_table(COMMANDS, word)
}

/// Whether `word` is a built-in function name (case-insensitive).
#[must_use]
pub fn is_builtin_function(word: &str) -> bool {
    in_table(FUNCTIONS, word)
}

/// Byte length of the longest known macro name that is a case-insensitive
/// prefix of `name` (the text after the `@` sigil), or `None` if no known
/// name matches.
#[must_use]
pub fn macro_prefix(name: &str) -> Option<usize> {
    let bytes = name.as_bytes();
    MACROS_LONGEST_FIRST
        .iter()
        .find(|known| {
            bytes.len() >= known.len() && bytes[..known.len()].eq_ignore_ascii_case(known.as_bytes())
        })
        .map(|known| known.len())
}

/// Bytes permitted inside function, label, and variable names. Non-ASCII
/// bytes are included so multi-byte characters never split a token.
pub(crate) const fn is_user_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte >= 0x80
}

/// Block structure keywords with their pairing roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKeyword {
    Do,
    For,
    Function,
    If,
    Select,
    While,
    /// Closes the previous CASE section (or none) and opens the next.
    Case,
    /// Closes the IF branch and opens the alternative.
    Else,
    EndFunction,
    EndIf,
    EndSelect,
    Loop,
    Next,
    Until,
}

impl BlockKeyword {
    /// Recognize a block keyword, case-insensitively. Returns `None` for
    /// any other word.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        const TABLE: &[(&str, BlockKeyword)] = &[
            ("do", BlockKeyword::Do),
            ("for", BlockKeyword::For),
            ("function", BlockKeyword::Function),
            ("if", BlockKeyword::If),
            ("select", BlockKeyword::Select),
            ("while", BlockKeyword::While),
            ("case", BlockKeyword::Case),
            ("else", BlockKeyword::Else),
            ("endfunction", BlockKeyword::EndFunction),
            ("endif", BlockKeyword::EndIf),
            ("endselect", BlockKeyword::EndSelect),
            ("loop", BlockKeyword::Loop),
            ("next", BlockKeyword::Next),
            ("until", BlockKeyword::Until),
        ];
        TABLE
            .iter()
            .find(|(name, _)| word.eq_ignore_ascii_case(name))
            .map(|&(_, keyword)| keyword)
    }

    /// Whether this keyword opens a block.
    #[must_use]
    pub const fn opens(self) -> bool {
        matches!(
            self,
            Self::Do | Self::For | Self::Function | Self::If | Self::Select | Self::While
        )
    }

    /// Whether this keyword closes a block (CASE and ELSE close their
    /// section before re-opening the next one).
    #[must_use]
    pub const fn closes_block(self) -> bool {
        !self.opens()
    }

    /// Whether this keyword immediately re-opens after closing.
    #[must_use]
    pub const fn reopens(self) -> bool {
        matches!(self, Self::Case | Self::Else)
    }

    /// Whether this keyword is an accepted closer for `open`.
    #[must_use]
    pub const fn closes(self, open: Self) -> bool {
        matches!(
            (open, self),
            (Self::Do, Self::Until)
                | (Self::For, Self::Next)
                | (Self::Function, Self::EndFunction)
                | (Self::If, Self::Else | Self::EndIf)
                | (Self::Select, Self::Case | Self::EndSelect)
                | (Self::While, Self::Loop)
        )
    }

    /// Canonical display spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Do => "Do",
            Self::For => "For",
            Self::Function => "Function",
            Self::If => "If",
            Self::Select => "Select",
            Self::While => "While",
            Self::Case => "Case",
            Self::Else => "Else",
            Self::EndFunction => "EndFunction",
            Self::EndIf => "EndIf",
            Self::EndSelect => "EndSelect",
            Self::Loop => "Loop",
            Self::Next => "Next",
            Self::Until => "Until",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted_unique(table: &[&str]) {
        for pair in table.windows(2) {
            assert!(
                pair[0] < pair[1],
                "table entries out of order: {:?} then {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn tables_are_sorted_and_unique() {
        assert_sorted_unique(COMMANDS);
        assert_sorted_unique(FUNCTIONS);
        assert_sorted_unique(MACROS);
    }

    #[test]
    fn command_lookup_ignores_case() {
        assert!(is_command("EndSelect"));
        assert!(is_command("GOTO"));
        assert!(is_command("do"));
        assert!(!is_command("notacommand"));
    }

    #[test]
    fn builtin_lookup_ignores_case() {
        assert!(is_builtin_function("InStr"));
        assert!(is_builtin_function("MESSAGEBOX"));
        assert!(!is_builtin_function("if"));
    }

    #[test]
    fn macro_prefix_prefers_longest_name() {
        assert_eq!(macro_prefix("monthno"), Some("monthno".len()));
        assert_eq!(macro_prefix("MONTH"), Some("month".len()));
        assert_eq!(macro_prefix("WKSTAEnd"), Some("wksta".len()));
        assert_eq!(macro_prefix("notwksta"), None);
        assert_eq!(macro_prefix(""), None);
    }

    #[test]
    fn block_keyword_recognition() {
        assert_eq!(BlockKeyword::from_word("EndIf"), Some(BlockKeyword::EndIf));
        assert_eq!(BlockKeyword::from_word("UNTIL"), Some(BlockKeyword::Until));
        assert_eq!(BlockKeyword::from_word("goto"), None);
    }

    #[test]
    fn pairing_accepts_designated_closers() {
        use BlockKeyword::{Case, Do, Else, EndIf, EndSelect, If, Loop, Select, Until, While};
        assert!(Until.closes(Do));
        assert!(Loop.closes(While));
        assert!(Else.closes(If));
        assert!(EndIf.closes(If));
        assert!(Case.closes(Select));
        assert!(EndSelect.closes(Select));
        assert!(!Until.closes(While));
        assert!(!EndIf.closes(Do));
    }

    #[test]
    fn reopeners_are_case_and_else() {
        assert!(BlockKeyword::Case.reopens());
        assert!(BlockKeyword::Else.reopens());
        assert!(!BlockKeyword::EndIf.reopens());
        assert!(!BlockKeyword::Select.reopens());
    }
}
