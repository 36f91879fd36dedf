//! Move actions: loads, stores, and register transfers.

use super::Cpu6502;

/// Load Accumulator
/// Function: A:=opr1
/// Flags: N Z
pub fn lda(cpu: &mut Cpu6502) {
    cpu.a = cpu.opr1;
    cpu.update_zero_and_negative_flag(cpu.opr1);
}

/// Load X
/// Function: X:=opr1
/// Flags: N Z
pub fn ldx(cpu: &mut Cpu6502) {
    cpu.x = cpu.opr1;
    cpu.update_zero_and_negative_flag(cpu.opr1);
}

/// Load Y
/// Function: Y:=opr1
/// Flags: N Z
pub fn ldy(cpu: &mut Cpu6502) {
    cpu.y = cpu.opr1;
    cpu.update_zero_and_negative_flag(cpu.opr1);
}

// The stores only stage the register; the addressing-mode driver owns
// the actual write cycle.

/// Store Accumulator
/// Function: opr1:=A
/// Flags: none
pub fn sta(cpu: &mut Cpu6502) {
    cpu.opr1 = cpu.a;
}

/// Store X
/// Function: opr1:=X
/// Flags: none
pub fn stx(cpu: &mut Cpu6502) {
    cpu.opr1 = cpu.x;
}

/// Store Y
/// Function: opr1:=Y
/// Flags: none
pub fn sty(cpu: &mut Cpu6502) {
    cpu.opr1 = cpu.y;
}

/// Function: X:=A
/// Flags: N Z
pub fn tax(cpu: &mut Cpu6502) {
    cpu.x = cpu.a;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Function: Y:=A
/// Flags: N Z
pub fn tay(cpu: &mut Cpu6502) {
    cpu.y = cpu.a;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Function: A:=X
/// Flags: N Z
pub fn txa(cpu: &mut Cpu6502) {
    cpu.a = cpu.x;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Function: A:=Y
/// Flags: N Z
pub fn tya(cpu: &mut Cpu6502) {
    cpu.a = cpu.y;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Function: X:=S
/// Flags: N Z
pub fn tsx(cpu: &mut Cpu6502) {
    cpu.x = cpu.sp;
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// The one transfer that leaves the flags alone.
/// Function: S:=X
/// Flags: none
pub fn txs(cpu: &mut Cpu6502) {
    cpu.sp = cpu.x;
}
