use std::fs;
use std::process;

use dcpu16::memory::{Address, Register};
use dcpu16::{Engine, Memory};

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

fn parse_max_steps(args: &[String]) -> Option<u64> {
    args.iter()
        .position(|a| a == "--max-steps")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = args.first().cloned().unwrap_or_else(|| {
        eprintln!("usage: dcpu16-run <object-file> [--max-steps N]");
        process::exit(1);
    });
    let max_steps = parse_max_steps(&args);

    let bytes = fs::read(&path).unwrap_or_else(|err| {
        eprintln!("dcpu16-run: cannot read `{}`: {}", path, err);
        process::exit(1);
    });
    let words = read_words(&bytes);

    let mut engine = Engine::new(Memory::new());
    engine.load_program(&words);

    loop {
        if let Some(limit) = max_steps {
            if engine.cycles() >= limit {
                break;
            }
        }
        match engine.step() {
            Ok(()) => continue,
            Err(err) => {
                eprintln!("dcpu16-run: {}", err);
                break;
            }
        }
    }

    let mem = engine.memory();
    println!(
        "cycles: {}, PC: 0x{:04X}, SP: 0x{:04X}, O: 0x{:04X}",
        engine.cycles(),
        mem.load(Address::Pc),
        mem.load(Address::Sp),
        mem.load(Address::O)
    );
    for &r in Register::ALL.iter() {
        println!("{}: 0x{:04X}", r, mem.register(r));
    }
}
