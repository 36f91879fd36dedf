//! Addressing-mode drivers: per-cycle bus procedures.
//!
//! Each driver is a little state machine keyed on `cpu.cycle` (the fetch
//! cycle is cycle 0 and belongs to the dispatcher). A driver performs
//! the one bus access the real chip makes on that cycle, runs the ALU
//! action at the moment its result becomes architecturally visible, and
//! returns `true` when the instruction is complete.
//!
//! The `Access` tag from the decode table picks between the read, write
//! and read-modify-write shapes of a mode, so one driver serves every
//! opcode that shares its bus pattern.

use super::Cpu6502;
use crate::bus::Bus;
use crate::opcodes::Access;

/// The operand is the byte after the opcode.
pub fn immediate(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    cpu.opr1 = bus.read(cpu.pc);
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.run_action();
    true
}

/// No operand. The chip still drives the address bus with PC and
/// throws the byte away.
pub fn implied(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    bus.read(cpu.pc);
    cpu.run_action();
    true
}

/// The accumulator stands in for the memory operand: route it through
/// `opr1` so the shift/rotate actions are oblivious to where the byte
/// came from.
pub fn accumulator(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    bus.read(cpu.pc);
    cpu.opr1 = cpu.a;
    cpu.run_action();
    cpu.a = cpu.opr1;
    true
}

/// One-byte address into page zero.
pub fn zero_page(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    match cpu.cycle {
        1 => {
            cpu.ea = bus.read(cpu.pc) as u16;
            cpu.pc = cpu.pc.wrapping_add(1);
            false
        }
        2 => {
            if cpu.access() == Access::Write {
                cpu.run_action();
                bus.write(cpu.ea, cpu.opr1);
                return true;
            }

            cpu.opr1 = bus.read(cpu.ea);

            if cpu.access() == Access::Read {
                cpu.run_action();
                return true;
            }

            false
        }
        3 => {
            // RMW: the raw byte goes back out while the ALU transforms it.
            bus.write(cpu.ea, cpu.opr1);
            cpu.run_action();
            false
        }
        _ => {
            bus.write(cpu.ea, cpu.opr1);
            true
        }
    }
}

/// Zero-page indexed: an extra cycle dummy-reads the unindexed address
/// while the index is added. The sum wraps within page zero; a
/// zero-page operand never escapes it.
fn zero_page_indexed(cpu: &mut Cpu6502, bus: &mut dyn Bus, index: u8) -> bool {
    match cpu.cycle {
        1 => {
            cpu.ea = bus.read(cpu.pc) as u16;
            cpu.pc = cpu.pc.wrapping_add(1);
            false
        }
        2 => {
            bus.read(cpu.ea);
            cpu.ea = (cpu.ea + index as u16) & 0x00ff;
            false
        }
        3 => {
            if cpu.access() == Access::Write {
                cpu.run_action();
                bus.write(cpu.ea, cpu.opr1);
                return true;
            }

            cpu.opr1 = bus.read(cpu.ea);

            if cpu.access() == Access::Read {
                cpu.run_action();
                return true;
            }

            false
        }
        4 => {
            bus.write(cpu.ea, cpu.opr1);
            cpu.run_action();
            false
        }
        _ => {
            bus.write(cpu.ea, cpu.opr1);
            true
        }
    }
}

pub fn zero_page_x(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    let index = cpu.x;
    zero_page_indexed(cpu, bus, index)
}

pub fn zero_page_y(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    let index = cpu.y;
    zero_page_indexed(cpu, bus, index)
}

/// Two-byte address, low byte first.
pub fn absolute(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    match cpu.cycle {
        1 => {
            cpu.opr1 = bus.read(cpu.pc);
            cpu.pc = cpu.pc.wrapping_add(1);
            false
        }
        2 => {
            cpu.opr2 = bus.read(cpu.pc);
            cpu.pc = cpu.pc.wrapping_add(1);
            false
        }
        3 => {
            cpu.ea = (cpu.opr2 as u16) << 8 | cpu.opr1 as u16;

            if cpu.access() == Access::Write {
                cpu.run_action();
                bus.write(cpu.ea, cpu.opr1);
                return true;
            }

            cpu.opr1 = bus.read(cpu.ea);

            if cpu.access() == Access::Read {
                cpu.run_action();
                return true;
            }

            false
        }
        4 => {
            bus.write(cpu.ea, cpu.opr1);
            cpu.run_action();
            false
        }
        _ => {
            bus.write(cpu.ea, cpu.opr1);
            true
        }
    }
}

/// Absolute indexed. The index is added to the low address byte before
/// the high byte is fixed up, so cycle 3 reads from a possibly-wrong
/// address. Reads that do not carry keep that byte and finish a cycle
/// early; everything else pays for the fix-up cycle.
fn absolute_indexed(cpu: &mut Cpu6502, bus: &mut dyn Bus, index: u8) -> bool {
    match cpu.cycle {
        1 => {
            cpu.opr2 = bus.read(cpu.pc);
            cpu.pc = cpu.pc.wrapping_add(1);
            false
        }
        2 => {
            let high = bus.read(cpu.pc);
            cpu.pc = cpu.pc.wrapping_add(1);
            cpu.ea = (high as u16) << 8 | cpu.opr2.wrapping_add(index) as u16;
            false
        }
        3 => {
            // Speculative read: real hardware drives the bus here even
            // when the high byte still needs a carry.
            cpu.opr1 = bus.read(cpu.ea);

            if cpu.access() == Access::Read && cpu.opr2 as u16 + index as u16 <= 0xff {
                cpu.run_action();
                return true;
            }

            cpu.ea = (cpu.ea & 0xff00).wrapping_add(cpu.opr2 as u16 + index as u16);
            false
        }
        4 => {
            if cpu.access() == Access::Write {
                cpu.run_action();
                bus.write(cpu.ea, cpu.opr1);
                return true;
            }

            cpu.opr1 = bus.read(cpu.ea);

            if cpu.access() == Access::Read {
                cpu.run_action();
                return true;
            }

            false
        }
        5 => {
            bus.write(cpu.ea, cpu.opr1);
            cpu.run_action();
            false
        }
        _ => {
            bus.write(cpu.ea, cpu.opr1);
            true
        }
    }
}

pub fn absolute_x(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    let index = cpu.x;
    absolute_indexed(cpu, bus, index)
}

pub fn absolute_y(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    let index = cpu.y;
    absolute_indexed(cpu, bus, index)
}

/// (zp,X): the zero-page pointer is indexed by X (wrapping in page
/// zero), then dereferenced to the effective address.
pub fn indirect_x(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    match cpu.cycle {
        1 => {
            cpu.ea = bus.read(cpu.pc) as u16;
            cpu.pc = cpu.pc.wrapping_add(1);
            false
        }
        2 => {
            bus.read(cpu.ea);
            cpu.ea = (cpu.ea + cpu.x as u16) & 0x00ff;
            false
        }
        3 => {
            cpu.opr1 = bus.read(cpu.ea);
            false
        }
        4 => {
            // Both pointer bytes come from page zero; $FF wraps to $00.
            let high = bus.read((cpu.ea + 1) & 0x00ff);
            cpu.ea = (high as u16) << 8 | cpu.opr1 as u16;
            false
        }
        _ => {
            if cpu.access() == Access::Read {
                cpu.opr1 = bus.read(cpu.ea);
                cpu.run_action();
            } else {
                cpu.run_action();
                bus.write(cpu.ea, cpu.opr1);
            }

            true
        }
    }
}

/// (zp),Y: dereference the zero-page pointer, then index the result by
/// Y with the same speculative-read timing as absolute indexed.
pub fn indirect_y(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    match cpu.cycle {
        1 => {
            cpu.ea = bus.read(cpu.pc) as u16;
            cpu.pc = cpu.pc.wrapping_add(1);
            false
        }
        2 => {
            cpu.opr2 = bus.read(cpu.ea);
            false
        }
        3 => {
            let high = bus.read((cpu.ea + 1) & 0x00ff);
            cpu.ea = (high as u16) << 8 | cpu.opr2.wrapping_add(cpu.y) as u16;
            false
        }
        4 => {
            cpu.opr1 = bus.read(cpu.ea);

            if cpu.access() == Access::Read && cpu.opr2 as u16 + cpu.y as u16 <= 0xff {
                cpu.run_action();
                return true;
            }

            cpu.ea = (cpu.ea & 0xff00).wrapping_add(cpu.opr2 as u16 + cpu.y as u16);
            false
        }
        _ => {
            if cpu.access() == Access::Read {
                cpu.opr1 = bus.read(cpu.ea);
                cpu.run_action();
            } else {
                cpu.run_action();
                bus.write(cpu.ea, cpu.opr1);
            }

            true
        }
    }
}

/// Branches. The condition action runs on cycle 1 and leaves its
/// verdict in `opr1`; an untaken branch is done right there. A taken
/// branch spends cycle 2 adding the offset to PC's low byte, and only
/// pays a third cycle when the add carries or borrows into the high
/// byte, complete with a dummy read from the not-yet-fixed address.
pub fn relative(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    match cpu.cycle {
        1 => {
            cpu.opr2 = bus.read(cpu.pc);
            cpu.pc = cpu.pc.wrapping_add(1);
            cpu.run_action();

            cpu.opr1 == 0
        }
        2 => {
            bus.read(cpu.pc);
            cpu.ea = cpu.pc & 0x00ff;

            if cpu.opr2 & 0x80 != 0 {
                cpu.ea = cpu.ea.wrapping_sub((!cpu.opr2).wrapping_add(1) as u16);
            } else {
                cpu.ea = cpu.ea.wrapping_add(cpu.opr2 as u16);
            }

            if cpu.ea & 0xff00 == 0 {
                cpu.ea |= cpu.pc & 0xff00;
                cpu.pc = cpu.ea;
                return true;
            }

            // Carried out of the low byte: remember where the wrong-page
            // fetch will happen and fix PC next cycle.
            cpu.ea &= 0x00ff;
            cpu.ea |= cpu.pc & 0xff00;
            false
        }
        _ => {
            bus.read(cpu.ea);

            if cpu.opr2 & 0x80 != 0 {
                cpu.pc = cpu.pc.wrapping_sub((!cpu.opr2).wrapping_add(1) as u16);
            } else {
                cpu.pc = cpu.pc.wrapping_add(cpu.opr2 as u16);
            }

            true
        }
    }
}
