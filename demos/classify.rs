//! Tokenize a script and print each token with its classification.

use kixtart_rs::{Position, TokenKind, tokenize};

fn main() {
    let input = "\
Break On
$user = @USERID
$host = @WKSTAEnd

If InGroup('Domain Admins')
    ? 'Welcome, ' + $user
EndIf

Function Greet($name)
    ? 'Hello ' + $name
EndFunction
";

    for token in tokenize(input)
        .iter()
        .filter(|token| token.kind != TokenKind::Newline)
    {
        let at = Position::of(input, token.span.start);
        println!(
            "{:>3}:{:<4} {:<16} {:?}",
            at.line,
            at.column,
            format!("{:?}", token.kind),
            token.text(input)
        );
    }
}
