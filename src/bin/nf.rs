//! Alternate binary name (`nf`) that forwards to the `notefind` library.
//! Keeping the alias as a real binary avoids shell alias requirements.

use std::process::exit;

fn main() {
    match notefind::entry() {
        Ok(code) => exit(code),
        Err(err) => {
            eprintln!("{err}");
            exit(1);
        }
    }
}
