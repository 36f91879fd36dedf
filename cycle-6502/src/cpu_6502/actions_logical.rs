//! Logical and arithmetic actions. Pure register/flag transformations;
//! memory operands arrive in (and leave through) `opr1`.

use super::{Cpu6502, StatusFlag};

/// Apply the logical "or" operator on the accumulator.
/// Function: A:=A or opr1
/// Flags: N Z
pub fn ora(cpu: &mut Cpu6502) {
    cpu.a |= cpu.opr1;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Apply the logical "and" operator on the accumulator.
/// Function: A:=A&opr1
/// Flags: N Z
pub fn and(cpu: &mut Cpu6502) {
    cpu.a &= cpu.opr1;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Logical Exclusive OR
/// Function: A:=A exor opr1
/// Flags: N Z
pub fn eor(cpu: &mut Cpu6502) {
    cpu.a ^= cpu.opr1;
    cpu.update_zero_and_negative_flag(cpu.a);
}

// Packed BCD holds one decimal digit per nibble. These two only handle
// three-digit values, which covers a byte plus carry.
fn bcd_to_binary(value: u16) -> u16 {
    (value / 0x100) * 100 + ((value & 0xff) / 0x10) * 10 + (value & 0x0f)
}

fn binary_to_bcd(value: u16) -> u16 {
    ((value / 100) << 8) | (((value % 100) / 10) << 4) | (value % 10)
}

/// Decimal-mode add. Carry works in decimal; V is left alone, as on
/// the NMOS part.
fn adc_bcd(cpu: &mut Cpu6502) {
    let sum =
        bcd_to_binary(cpu.a as u16) + bcd_to_binary(cpu.opr1 as u16) + cpu.get_carry() as u16;
    let result = binary_to_bcd(sum);

    cpu.set_status_flag(StatusFlag::Carry, result & 0x0100 != 0);
    cpu.a = (result & 0x00ff) as u8;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Add with Carry
/// Function: A:=A+opr1+C
/// Flags: N V Z C (D=1: N Z C only)
pub fn adc(cpu: &mut Cpu6502) {
    if cpu.is_status_flag_set(StatusFlag::Decimal) {
        adc_bcd(cpu);
        return;
    }

    let result = cpu.a as u16 + cpu.opr1 as u16 + cpu.get_carry() as u16;
    let out = result as u8;

    cpu.set_status_flag(StatusFlag::Carry, result & 0x0100 != 0);
    // Signed overflow: both inputs disagree with the output's sign.
    cpu.set_status_flag(
        StatusFlag::Overflow,
        (cpu.a ^ out) & (cpu.opr1 ^ out) & 0x80 != 0,
    );
    cpu.a = out;
    cpu.update_zero_and_negative_flag(out);
}

/// Decimal-mode subtract. Carry is the inverted borrow, in decimal.
fn sbc_bcd(cpu: &mut Cpu6502) {
    let a = bcd_to_binary(cpu.a as u16);
    let operand = bcd_to_binary(cpu.opr1 as u16) + (1 - cpu.get_carry() as u16);

    let result = if a >= operand {
        cpu.set_status_flag(StatusFlag::Carry, true);
        binary_to_bcd(a - operand)
    } else {
        cpu.set_status_flag(StatusFlag::Carry, false);
        binary_to_bcd(100 - operand + a)
    };

    cpu.a = (result & 0x00ff) as u8;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Subtract with Carry
/// Function: A:=A-opr1-(1-C)
/// Flags: N V Z C (D=1: N Z C only)
///
/// Binary subtraction is addition of the inverted operand, with the
/// carry flag standing in for the +1 of the two's complement.
pub fn sbc(cpu: &mut Cpu6502) {
    if cpu.is_status_flag_set(StatusFlag::Decimal) {
        sbc_bcd(cpu);
        return;
    }

    cpu.opr1 = !cpu.opr1;
    adc(cpu);
}

/// Compare A with source
/// Function: A-opr1
/// Flags: N Z C
pub fn cmp(cpu: &mut Cpu6502) {
    cpu.set_status_flag(StatusFlag::Carry, cpu.a >= cpu.opr1);
    cpu.update_zero_and_negative_flag(cpu.a.wrapping_sub(cpu.opr1));
}

/// Compare X with source
/// Function: X-opr1
/// Flags: N Z C
pub fn cpx(cpu: &mut Cpu6502) {
    cpu.set_status_flag(StatusFlag::Carry, cpu.x >= cpu.opr1);
    cpu.update_zero_and_negative_flag(cpu.x.wrapping_sub(cpu.opr1));
}

/// Compare Y with source
/// Function: Y-opr1
/// Flags: N Z C
pub fn cpy(cpu: &mut Cpu6502) {
    cpu.set_status_flag(StatusFlag::Carry, cpu.y >= cpu.opr1);
    cpu.update_zero_and_negative_flag(cpu.y.wrapping_sub(cpu.opr1));
}

/// Decrement the memory operand.
/// Function: opr1:=opr1-1
/// Flags: N Z
pub fn dec(cpu: &mut Cpu6502) {
    cpu.opr1 = cpu.opr1.wrapping_sub(1);
    cpu.update_zero_and_negative_flag(cpu.opr1);
}

/// Function: X:=X-1
/// Flags: N Z
pub fn dex(cpu: &mut Cpu6502) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Function: Y:=Y-1
/// Flags: N Z
pub fn dey(cpu: &mut Cpu6502) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zero_and_negative_flag(cpu.y);
}

/// Increment the memory operand.
/// Function: opr1:=opr1+1
/// Flags: N Z
pub fn inc(cpu: &mut Cpu6502) {
    cpu.opr1 = cpu.opr1.wrapping_add(1);
    cpu.update_zero_and_negative_flag(cpu.opr1);
}

/// Function: X:=X+1
/// Flags: N Z
pub fn inx(cpu: &mut Cpu6502) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Function: Y:=Y+1
/// Flags: N Z
pub fn iny(cpu: &mut Cpu6502) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zero_and_negative_flag(cpu.y);
}

/// Arithmetic shift left.
/// Function: opr1:=opr1*2
/// Flags: N Z C
pub fn asl(cpu: &mut Cpu6502) {
    cpu.set_status_flag(StatusFlag::Carry, cpu.opr1 & 0x80 != 0);
    cpu.opr1 <<= 1;
    cpu.update_zero_and_negative_flag(cpu.opr1);
}

/// Logical shift right. A zero lands in bit 7, so N always clears.
/// Function: opr1:=opr1/2
/// Flags: N Z C
pub fn lsr(cpu: &mut Cpu6502) {
    cpu.set_status_flag(StatusFlag::Carry, cpu.opr1 & 0x01 != 0);
    cpu.opr1 >>= 1;
    cpu.update_zero_and_negative_flag(cpu.opr1);
}

/// Rotate left through the carry flag.
/// Function: opr1:=opr1*2+C
/// Flags: N Z C
pub fn rol(cpu: &mut Cpu6502) {
    let carry = cpu.get_carry();
    cpu.set_status_flag(StatusFlag::Carry, cpu.opr1 & 0x80 != 0);
    cpu.opr1 = cpu.opr1 << 1 | carry;
    cpu.update_zero_and_negative_flag(cpu.opr1);
}

/// Rotate right through the carry flag.
/// Function: opr1:=opr1/2+C*128
/// Flags: N Z C
pub fn ror(cpu: &mut Cpu6502) {
    let carry = cpu.get_carry();
    cpu.set_status_flag(StatusFlag::Carry, cpu.opr1 & 0x01 != 0);
    cpu.opr1 = cpu.opr1 >> 1 | carry << 7;
    cpu.update_zero_and_negative_flag(cpu.opr1);
}
