//! The `explain` command: describe a lexical diagnostic code.

use sv_diagnostic::DiagCode;

/// Print the severity and message of a code such as `L0208`.
///
/// Returns `false` if the code is unknown.
pub fn explain_code(code_str: &str) -> bool {
    let Ok(code) = code_str.parse::<DiagCode>() else {
        eprintln!("Unknown diagnostic code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format LXXXX where X is a digit.");
        eprintln!("Examples: L0001, L0101, L0208");
        return false;
    };

    println!("{code} ({}): {}", code.severity(), code.message());
    true
}
