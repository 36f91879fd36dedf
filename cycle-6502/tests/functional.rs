//! Runs Klaus Dormann's 6502 functional test when its binary image is
//! available. The image is a full 64 KB snapshot that exercises every
//! documented instruction and traps in a branch-to-self on the first
//! failure; success parks the PC at $3469.
//!
//! The binary is not checked in. Build it from
//! https://github.com/Klaus2m5/6502_65C02_functional_tests and drop
//! `6502_functional_test.bin` into this directory to enable the test.

use cycle_6502::bus::FlatMemory;
use cycle_6502::cpu_6502::Cpu6502;
use std::fs;
use std::path::Path;

const SUCCESS_TRAP: u16 = 0x3469;

#[test]
fn functional_test_image() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/6502_functional_test.bin");

    let image = match fs::read(&path) {
        Ok(image) => image,
        Err(_) => {
            eprintln!(
                "skipping: place 6502_functional_test.bin in cycle-6502/tests/ to run this"
            );
            return;
        }
    };
    assert_eq!(image.len(), 0x10000, "expected a full 64 KB image");

    let mut memory = FlatMemory::new();
    memory.load(0, &image);
    let mut cpu = Cpu6502::new(0x0400);

    loop {
        let prev_pc = cpu.pc;
        cpu.step(&mut memory);
        if cpu.pc == prev_pc {
            break;
        }
    }

    assert_eq!(
        cpu.pc, SUCCESS_TRAP,
        "trapped at ${:04x} instead of the success loop",
        cpu.pc
    );
}
