use std::fs;
use std::process;

use dcpu16::disassembler;

fn read_words(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks(2)
        .map(|chunk| {
            let hi = chunk[0] as u16;
            let lo = *chunk.get(1).unwrap_or(&0) as u16;
            (hi << 8) | lo
        })
        .collect()
}

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("usage: dcpu16-dump <object-file>");
        process::exit(1);
    });

    let bytes = fs::read(&path).unwrap_or_else(|err| {
        eprintln!("dcpu16-dump: cannot read `{}`: {}", path, err);
        process::exit(1);
    });
    let words = read_words(&bytes);

    for line in disassembler::disassemble(&words) {
        println!("{}", line);
    }
}
