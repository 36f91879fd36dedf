//! Branch conditions, flag operations, BIT and NOP.
//!
//! A branch condition is an ordinary action: it looks at P and parks
//! its verdict in `opr1` (1 = taken) for the relative-mode driver to
//! act on. That keeps all eight branches on one driver.

use super::{Cpu6502, StatusFlag};

/// Branch on plus (N clear).
pub fn bpl(cpu: &mut Cpu6502) {
    cpu.opr1 = !cpu.is_status_flag_set(StatusFlag::Negative) as u8;
}

/// Branch on minus (N set).
pub fn bmi(cpu: &mut Cpu6502) {
    cpu.opr1 = cpu.is_status_flag_set(StatusFlag::Negative) as u8;
}

/// Branch on overflow clear.
pub fn bvc(cpu: &mut Cpu6502) {
    cpu.opr1 = !cpu.is_status_flag_set(StatusFlag::Overflow) as u8;
}

/// Branch on overflow set.
pub fn bvs(cpu: &mut Cpu6502) {
    cpu.opr1 = cpu.is_status_flag_set(StatusFlag::Overflow) as u8;
}

/// Branch on carry clear.
pub fn bcc(cpu: &mut Cpu6502) {
    cpu.opr1 = !cpu.is_status_flag_set(StatusFlag::Carry) as u8;
}

/// Branch on carry set.
pub fn bcs(cpu: &mut Cpu6502) {
    cpu.opr1 = cpu.is_status_flag_set(StatusFlag::Carry) as u8;
}

/// Branch on not equal (Z clear).
pub fn bne(cpu: &mut Cpu6502) {
    cpu.opr1 = !cpu.is_status_flag_set(StatusFlag::Zero) as u8;
}

/// Branch on equal (Z set).
pub fn beq(cpu: &mut Cpu6502) {
    cpu.opr1 = cpu.is_status_flag_set(StatusFlag::Zero) as u8;
}

pub fn clc(cpu: &mut Cpu6502) {
    cpu.set_status_flag(StatusFlag::Carry, false);
}

pub fn cld(cpu: &mut Cpu6502) {
    cpu.set_status_flag(StatusFlag::Decimal, false);
}

pub fn cli(cpu: &mut Cpu6502) {
    cpu.set_status_flag(StatusFlag::InterruptDisable, false);
}

pub fn clv(cpu: &mut Cpu6502) {
    cpu.set_status_flag(StatusFlag::Overflow, false);
}

pub fn sec(cpu: &mut Cpu6502) {
    cpu.set_status_flag(StatusFlag::Carry, true);
}

pub fn sed(cpu: &mut Cpu6502) {
    cpu.set_status_flag(StatusFlag::Decimal, true);
}

pub fn sei(cpu: &mut Cpu6502) {
    cpu.set_status_flag(StatusFlag::InterruptDisable, true);
}

/// Bit test: N and V mirror the operand's top bits, Z reports whether
/// the accumulator selects any set bit. A is not modified.
/// Flags: N V Z
pub fn bit(cpu: &mut Cpu6502) {
    cpu.set_status_flag(StatusFlag::Negative, cpu.opr1 & 0x80 != 0);
    cpu.set_status_flag(StatusFlag::Overflow, cpu.opr1 & 0x40 != 0);
    cpu.set_status_flag(StatusFlag::Zero, cpu.opr1 & cpu.a == 0);
}

pub fn nop(_cpu: &mut Cpu6502) {}
