use crate::bus::{Bus, FlatMemory};
use crate::cpu_6502::{Cpu6502, StatusFlag};

/// Where test programs get loaded. High enough that zero page and the
/// stack never collide with code.
pub const ROM_START: u16 = 0xf000;

// Shorthand for building expected status bytes.
pub const C: u8 = StatusFlag::Carry as u8;
pub const Z: u8 = StatusFlag::Zero as u8;
pub const I: u8 = StatusFlag::InterruptDisable as u8;
pub const D: u8 = StatusFlag::Decimal as u8;
pub const B: u8 = StatusFlag::Break as u8;
pub const U: u8 = StatusFlag::Push as u8;
pub const V: u8 = StatusFlag::Overflow as u8;
pub const N: u8 = StatusFlag::Negative as u8;

/// A fresh CPU pointed at `program`, which is loaded at `ROM_START`.
pub fn cpu_with_program(program: &[u8]) -> (Cpu6502, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.load(ROM_START, program);
    memory.set_reset_vector(ROM_START);
    (Cpu6502::new(ROM_START), memory)
}

pub fn tick_n(cpu: &mut Cpu6502, bus: &mut dyn Bus, count: u32) {
    for _ in 0..count {
        cpu.tick(bus);
    }
}

/// Step one instruction and return how many ticks it took.
pub fn step_counted(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> u32 {
    let mut ticks = 0;
    loop {
        cpu.tick(bus);
        ticks += 1;
        if cpu.cycle == 0 {
            return ticks;
        }
    }
}

pub fn assert_status(cpu: &Cpu6502, expected: u8) {
    assert_eq!(
        cpu.p, expected,
        "P was {:#010b}, expected {:#010b}",
        cpu.p, expected
    );
}

/// One observed bus access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusOp {
    Read(u16, u8),
    Write(u16, u8),
}

/// Wraps a memory and records every access the CPU makes, so tests can
/// assert on the cycle-by-cycle bus trace - dummy reads included.
pub struct RecordingBus {
    pub memory: FlatMemory,
    pub ops: Vec<BusOp>,
}

impl RecordingBus {
    pub fn new(memory: FlatMemory) -> RecordingBus {
        RecordingBus {
            memory,
            ops: Vec::new(),
        }
    }

    pub fn reads(&self) -> Vec<BusOp> {
        self.ops
            .iter()
            .copied()
            .filter(|op| matches!(op, BusOp::Read(..)))
            .collect()
    }

    pub fn writes(&self) -> Vec<BusOp> {
        self.ops
            .iter()
            .copied()
            .filter(|op| matches!(op, BusOp::Write(..)))
            .collect()
    }

    /// The trace as text, one access per line.
    pub fn trace(&self) -> String {
        self.ops
            .iter()
            .map(|op| match op {
                BusOp::Read(addr, data) => format!("read  ${:04X} -> ${:02X}", addr, data),
                BusOp::Write(addr, data) => format!("write ${:04X} <- ${:02X}", addr, data),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Bus for RecordingBus {
    fn read(&mut self, addr: u16) -> u8 {
        let data = self.memory.read(addr);
        self.ops.push(BusOp::Read(addr, data));
        data
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.ops.push(BusOp::Write(addr, data));
        self.memory.write(addr, data);
    }
}
