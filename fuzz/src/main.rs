use iterjson::JsonParser;

#[macro_use]
extern crate afl;

fn main() {
    fuzz!(|data: &[u8]| {
        let parser = match JsonParser::from_slice(data) {
            Ok(p) => p,
            Err(_) => return,
        };
        // The engine must never panic on arbitrary bytes: every step either
        // produces an event or a structured parse error.
        for event in parser {
            if event.is_err() {
                break;
            }
        }
    });
}
