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
