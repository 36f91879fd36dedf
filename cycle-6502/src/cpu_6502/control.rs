//! Control procedures: the opcodes whose bus traffic is not a
//! mode-plus-action pairing. Stack pushes and pulls, subroutine
//! linkage, the two jumps, BRK, and the RESET service sequence all get
//! their own per-cycle procedure here.

use super::{Cpu6502, Interrupt, StatusFlag};
use crate::bus::Bus;
use crate::constants::vector_address;

/// Software interrupt. Pushes the return address and P (with the Break
/// and Push bits set in the pushed copy only), then vectors through
/// $FFFE/$FFFF and disables further IRQs.
pub fn brk(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    match cpu.cycle {
        1 => {
            bus.read(cpu.pc);
            cpu.pc = cpu.pc.wrapping_add(1);
            false
        }
        2 => {
            let high = (cpu.pc >> 8) as u8;
            cpu.push_stack(bus, high);
            false
        }
        3 => {
            let low = cpu.pc as u8;
            cpu.push_stack(bus, low);
            false
        }
        4 => {
            let pushed = cpu.p | StatusFlag::Break as u8 | StatusFlag::Push as u8;
            cpu.push_stack(bus, pushed);
            false
        }
        5 => {
            cpu.opr1 = bus.read(vector_address(Interrupt::Irq));
            false
        }
        _ => {
            let high = bus.read(vector_address(Interrupt::Irq) + 1);
            cpu.pc = (high as u16) << 8 | cpu.opr1 as u16;
            cpu.set_status_flag(StatusFlag::InterruptDisable, true);
            true
        }
    }
}

/// Return from interrupt: pull P (sans Break and Push bits), then pull
/// the return address. Unlike RTS, PC is not incremented afterwards.
pub fn rti(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    match cpu.cycle {
        1 => {
            bus.read(cpu.pc);
            false
        }
        2 => {
            cpu.peek_stack(bus);
            false
        }
        3 => {
            cpu.p = cpu.pop_stack(bus);
            cpu.p &= !(StatusFlag::Break as u8 | StatusFlag::Push as u8);
            false
        }
        4 => {
            cpu.opr1 = cpu.pop_stack(bus);
            false
        }
        _ => {
            let high = cpu.pop_stack(bus);
            cpu.pc = (high as u16) << 8 | cpu.opr1 as u16;
            true
        }
    }
}

/// Push P. The pushed byte always reads back with bits 4 and 5 set.
pub fn php(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    match cpu.cycle {
        1 => {
            bus.read(cpu.pc);
            false
        }
        _ => {
            let pushed = cpu.p | StatusFlag::Break as u8 | StatusFlag::Push as u8;
            cpu.push_stack(bus, pushed);
            true
        }
    }
}

/// Pull P, masking off the two bits that are not real flag storage.
pub fn plp(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    match cpu.cycle {
        1 => {
            bus.read(cpu.pc);
            false
        }
        2 => {
            cpu.peek_stack(bus);
            false
        }
        _ => {
            cpu.p = cpu.pop_stack(bus);
            cpu.p &= !(StatusFlag::Break as u8 | StatusFlag::Push as u8);
            true
        }
    }
}

/// Push the accumulator.
pub fn pha(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    match cpu.cycle {
        1 => {
            bus.read(cpu.pc);
            false
        }
        _ => {
            let a = cpu.a;
            cpu.push_stack(bus, a);
            true
        }
    }
}

/// Pull the accumulator; the only pull that sets flags.
pub fn pla(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    match cpu.cycle {
        1 => {
            bus.read(cpu.pc);
            false
        }
        2 => {
            cpu.peek_stack(bus);
            false
        }
        _ => {
            cpu.a = cpu.pop_stack(bus);
            let a = cpu.a;
            cpu.update_zero_and_negative_flag(a);
            true
        }
    }
}

/// Jump to subroutine. PC is pushed while it still points at the high
/// byte of the target address; RTS compensates by incrementing after
/// the pull. That is the real chip's bookkeeping, not an off-by-one.
pub fn jsr(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    match cpu.cycle {
        1 => {
            cpu.opr2 = bus.read(cpu.pc);
            cpu.pc = cpu.pc.wrapping_add(1);
            false
        }
        2 => {
            cpu.peek_stack(bus);
            false
        }
        3 => {
            let high = (cpu.pc >> 8) as u8;
            cpu.push_stack(bus, high);
            false
        }
        4 => {
            let low = cpu.pc as u8;
            cpu.push_stack(bus, low);
            false
        }
        _ => {
            let high = bus.read(cpu.pc);
            cpu.pc = (high as u16) << 8 | cpu.opr2 as u16;
            true
        }
    }
}

/// Return from subroutine: pull PC, then burn a cycle reading the
/// return address before stepping past it.
pub fn rts(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    match cpu.cycle {
        1 => {
            bus.read(cpu.pc);
            false
        }
        2 => {
            cpu.peek_stack(bus);
            false
        }
        3 => {
            cpu.opr1 = cpu.pop_stack(bus);
            false
        }
        4 => {
            let high = cpu.pop_stack(bus);
            cpu.pc = (high as u16) << 8 | cpu.opr1 as u16;
            false
        }
        _ => {
            bus.read(cpu.pc);
            cpu.pc = cpu.pc.wrapping_add(1);
            true
        }
    }
}

pub fn jmp_absolute(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    match cpu.cycle {
        1 => {
            cpu.opr1 = bus.read(cpu.pc);
            cpu.pc = cpu.pc.wrapping_add(1);
            false
        }
        _ => {
            let high = bus.read(cpu.pc);
            cpu.pc = (high as u16) << 8 | cpu.opr1 as u16;
            true
        }
    }
}

/// Indirect jump, including the NMOS page-wrap bug: a pointer at $xxFF
/// takes its high byte from $xx00 rather than crossing into the next
/// page. Programs depend on this, so it is preserved.
pub fn jmp_indirect(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    match cpu.cycle {
        1 => {
            cpu.opr1 = bus.read(cpu.pc);
            cpu.pc = cpu.pc.wrapping_add(1);
            false
        }
        2 => {
            let high = bus.read(cpu.pc);
            cpu.pc = cpu.pc.wrapping_add(1);
            cpu.ea = (high as u16) << 8 | cpu.opr1 as u16;
            false
        }
        3 => {
            cpu.opr2 = bus.read(cpu.ea);
            cpu.ea &= 0xff00;
            cpu.ea |= cpu.opr1.wrapping_add(1) as u16;
            false
        }
        _ => {
            let high = bus.read(cpu.ea);
            cpu.pc = (high as u16) << 8 | cpu.opr2 as u16;
            true
        }
    }
}

/// RESET, modelled the way the silicon does it: a forced BRK whose
/// stack writes are suppressed. The stack pointer still walks down by
/// three before the vector at $FFFC/$FFFD is fetched.
pub fn reset(cpu: &mut Cpu6502, bus: &mut dyn Bus) -> bool {
    match cpu.cycle {
        1 => {
            bus.read(cpu.pc.wrapping_add(1));
            false
        }
        2 | 3 | 4 => {
            // Would be the PCH/PCL/P pushes; the write line is held off.
            cpu.sp = cpu.sp.wrapping_sub(1);
            false
        }
        5 => {
            cpu.opr1 = bus.read(vector_address(Interrupt::Reset));
            false
        }
        _ => {
            let high = bus.read(vector_address(Interrupt::Reset) + 1);
            cpu.pc = (high as u16) << 8 | cpu.opr1 as u16;
            cpu.set_status_flag(StatusFlag::InterruptDisable, true);
            cpu.intr &= !(Interrupt::Reset as u8);
            true
        }
    }
}
