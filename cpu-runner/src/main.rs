//! Load a 64 KB memory image and run it until the program counter
//! stops moving - the classic way to drive CPU test images, which end
//! in a tight branch-to-self on success.

use colored::*;
use cycle_6502::bus::Bus;
use cycle_6502::constants::vector_address;
use cycle_6502::cpu_6502::{Cpu6502, Interrupt};
use cycle_6502::opcodes::MNEMONICS;
use std::fs;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::process::exit;
use structopt::StructOpt;

/// The machine the image runs on: RAM in the lower 32 KB, ROM above.
/// Writes into the ROM half fall on the floor, the way a real bus
/// would swallow them.
struct RamRom {
    ram: Box<[u8; 0x8000]>,
    rom: Box<[u8; 0x8000]>,
}

impl RamRom {
    fn from_image(image: &[u8]) -> RamRom {
        let mut ram = Box::new([0; 0x8000]);
        let mut rom = Box::new([0; 0x8000]);
        ram.copy_from_slice(&image[..0x8000]);
        rom.copy_from_slice(&image[0x8000..]);
        RamRom { ram, rom }
    }
}

impl Bus for RamRom {
    fn read(&mut self, addr: u16) -> u8 {
        if addr < 0x8000 {
            self.ram[addr as usize]
        } else {
            self.rom[addr as usize - 0x8000]
        }
    }

    fn write(&mut self, addr: u16, data: u8) {
        if addr < 0x8000 {
            self.ram[addr as usize] = data;
        }
    }
}

fn parse_hex(value: &str) -> Result<u16, ParseIntError> {
    u16::from_str_radix(value.trim_start_matches("0x"), 16)
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "cpu-runner",
    about = "Run a 64 KB 6502 memory image until the PC settles."
)]
struct CliOptions {
    /// Path to a raw 65536-byte memory image.
    program: PathBuf,

    /// Start address (hex). Defaults to the image's reset vector.
    #[structopt(short, long, parse(try_from_str = parse_hex))]
    pc: Option<u16>,

    /// Print every instruction as it executes.
    #[structopt(short, long)]
    trace: bool,
}

fn print_trace_line(cpu: &Cpu6502, bus: &mut RamRom) {
    let opcode = bus.read(cpu.pc);
    println!(
        "{}  {} {}  {}",
        format!("{:04x}", cpu.pc).dimmed(),
        format!("{:02x}", opcode).blue(),
        MNEMONICS[opcode as usize].cyan(),
        format!(
            "A:{:02x} X:{:02x} Y:{:02x} SP:{:02x} P:{:08b}",
            cpu.a, cpu.x, cpu.y, cpu.sp, cpu.p
        )
        .dimmed(),
    );
}

fn main() {
    let options = CliOptions::from_args();

    let image = match fs::read(&options.program) {
        Ok(image) => image,
        Err(error) => {
            eprintln!(
                "{} unable to read {}: {}",
                "error:".red(),
                options.program.display(),
                error
            );
            exit(1);
        }
    };

    if image.len() != 0x10000 {
        eprintln!(
            "{} expected a 65536-byte image, got {} bytes",
            "error:".red(),
            image.len()
        );
        exit(1);
    }

    let mut bus = RamRom::from_image(&image);

    let pc_start = options.pc.unwrap_or_else(|| {
        let low = bus.read(vector_address(Interrupt::Reset));
        let high = bus.read(vector_address(Interrupt::Reset) + 1);
        (high as u16) << 8 | low as u16
    });

    println!("{}", "cpu-runner".cyan().bold());
    println!("starting at {}\n", format!("${:04x}", pc_start).blue());

    let mut cpu = Cpu6502::new(pc_start);

    loop {
        if options.trace {
            print_trace_line(&cpu, &mut bus);
        }

        let prev_pc = cpu.pc;
        cpu.step(&mut bus);

        if prev_pc == cpu.pc {
            break;
        }
    }

    println!("PC settled at {}", format!("${:04x}", cpu.pc).blue());
    println!(
        "registers  A:{:02x} X:{:02x} Y:{:02x} SP:{:02x} P:{:08b}",
        cpu.a, cpu.x, cpu.y, cpu.sp, cpu.p
    );
    println!(
        "result byte at $0000 is {}",
        format!("{}", bus.read(0)).green()
    );
}
