//! Re-indent a flattened script and show the before/after.

use kixtart_rs::{IndentOptions, reindent};

fn main() {
    let flat = "\
If InGroup('Domain Admins')
Select
Case @INWIN = 1
? 'nt family'
Case 1
Beep
EndSelect
EndIf
";

    println!("--- input ---");
    print!("{flat}");

    let options = IndentOptions::new(4).expect("non-negative offset");
    println!("--- reformatted ---");
    print!("{}", reindent(flat, &options));
}
