use std::fs;
use std::process;

use dcpu16::assembler;

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("usage: dcpu16-asm <source.dasm>");
        process::exit(1);
    });

    let source = fs::read_to_string(&path).unwrap_or_else(|err| {
        eprintln!("dcpu16-asm: cannot read `{}`: {}", path, err);
        process::exit(1);
    });

    let words = assembler::assemble(&source).unwrap_or_else(|err| {
        eprintln!("dcpu16-asm: {}", err);
        process::exit(1);
    });

    let bytes = assembler::emitter::write_object(&words);
    fs::write("a.out", bytes).unwrap_or_else(|err| {
        eprintln!("dcpu16-asm: cannot write `a.out`: {}", err);
        process::exit(1);
    });
}
